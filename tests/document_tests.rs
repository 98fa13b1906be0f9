#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::fs;

use xentity::test_utils::*;

#[test]
fn test_write_and_read_back() {
    let temp_path = tmp_file_path("plan_roundtrip.xml");
    let path = temp_path.to_str().unwrap();
    let doc = create_plan_document("plano", "1.0", "UTF-8").unwrap();

    doc.write_to_file(path).unwrap();
    let contents = read_file(path).unwrap();
    assert_eq!(contents, doc.pretty_print());
    assert!(contents.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<plano>"));

    let _ = fs::remove_file(temp_path);
}

#[test]
fn test_tmp_paths_live_in_a_per_process_directory() {
    let first = tmp_file_path("a.xml");
    let second = tmp_file_path("b.xml");

    let dir = first.parent().unwrap();
    assert_eq!(Some(dir), second.parent());
    assert!(dir.is_dir());
    assert!(dir
        .to_str()
        .unwrap()
        .ends_with(&format!("xentity-{}", std::process::id())));
}

#[test]
fn test_write_overwrites_previous_contents() {
    let temp_path = tmp_file_path("plan_overwrite.xml");
    let path = temp_path.to_str().unwrap();

    write_file(path, "stale contents that are longer than the document").unwrap();
    let doc = Document::new("plano", "1.0", "UTF-8").unwrap();
    doc.write_to_file(path).unwrap();
    assert_eq!(read_file(path).unwrap(), doc.pretty_print());

    let _ = fs::remove_file(temp_path);
}

#[test]
fn test_write_into_missing_directory_fails() {
    let temp_path = tmp_file_path("missing_dir/plan.xml");
    let doc = Document::new("plano", "1.0", "UTF-8").unwrap();

    let err = doc.write_to_file(temp_path.to_str().unwrap()).unwrap_err();
    match err.kind() {
        ErrorKind::IO(_) => { /* expected */ }
        other => panic!("Expected IO error, got {:?}", other),
    }
    assert_eq!(err.context(), Some("writing XML document"));
}

#[test]
fn test_read_missing_file_fails() {
    let err = read_file("nonexistent_plan.xml").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::IO(IOError::FileNotFound("nonexistent_plan.xml".to_string()))
    );
}

#[test]
fn test_declaration_uses_metadata() {
    let mut doc = Document::new("plano", "1.1", "ISO-8859-1").unwrap();
    assert_eq!(
        doc.declaration(),
        "<?xml version=\"1.1\" encoding=\"ISO-8859-1\"?>"
    );

    doc.set_version("1.0").unwrap();
    doc.set_encoding("UTF-8").unwrap();
    assert_eq!(doc.version(), "1.0");
    assert_eq!(doc.encoding(), "UTF-8");
    assert_eq!(doc.to_string(), doc.pretty_print());
}

#[test]
fn test_invalid_metadata_is_rejected() {
    let err = Document::new("plano", "one", "UTF-8").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::InvalidArgument(ArgumentError::Version("one".to_string()))
    );

    let err = Document::new("plano", "1.0", "  ").unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::InvalidArgument(ArgumentError::Encoding(_))
    ));

    assert!(Document::new("1plano", "1.0", "UTF-8").is_err());

    let mut doc = Document::new("plano", "1.0", "UTF-8").unwrap();
    assert!(doc.set_version("1.").is_err());
    assert!(doc.set_encoding("").is_err());
    assert_eq!(doc.version(), "1.0");
    assert_eq!(doc.encoding(), "UTF-8");
}

#[test]
fn test_root_handle_mutates_the_document() {
    let doc = Document::new("plano", "1.0", "UTF-8").unwrap();
    let curso = Entity::new("curso").unwrap();
    curso.add_text("Mestrado");
    doc.root_entity().add_child_entity(&curso).unwrap();

    assert_eq!(
        doc.pretty_print(),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<plano>\n    <curso>Mestrado</curso>\n</plano>"
    );
}

#[test]
fn test_with_root_detaches_the_entity() {
    let plano = Entity::new("plano").unwrap();
    let fuc = Entity::child_of("fuc", [("codigo", "M4310")], &plano).unwrap();

    let doc = Document::with_root(fuc.clone(), "1.0", "UTF-8").unwrap();
    assert!(fuc.is_root());
    assert_eq!(plano.child_count(), 0);
    assert_eq!(doc.root_entity(), fuc);
}

#[test]
fn test_custom_indentation() {
    let doc = create_plan_document("plano", "1.0", "UTF-8").unwrap();
    let config = FormatConfig::with_indent(2).unwrap();
    let out = XmlFormatter.format(&doc.root_entity(), &config).unwrap();

    assert!(out.starts_with("<plano>\n  <curso>"));
    assert!(out.contains("\n      <componente nome=\"Quizzes\" peso=\"20%\"/>\n"));

    let invalid = FormatConfig { indent_spaces: 12 };
    assert!(XmlFormatter.format(&doc.root_entity(), &invalid).is_err());
}
