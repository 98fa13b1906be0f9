#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;

use xentity::test_utils::*;

const PLAN_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plano>
    <curso>Mestrado em Engenharia Informática</curso>
    <fuc codigo="M4310">
        <nome>Programação Avançada</nome>
        <ects>6.0</ects>
        <avaliacao>
            <componente nome="Quizzes" peso="20%"/>
            <componente nome="Projeto" peso="80%"/>
        </avaliacao>
    </fuc>
    <fuc codigo="03782">
        <nome>Dissertação</nome>
        <ects>42.0</ects>
        <avaliacao>
            <componente nome="Dissertação" peso="60%"/>
            <componente nome="Apresentação" peso="20%"/>
            <componente nome="Discussão" peso="20%"/>
        </avaliacao>
    </fuc>
</plano>"#;

fn plan() -> Entity {
    create_plan_document("plano", "1.0", "UTF-8")
        .unwrap()
        .root_entity()
}

#[test]
fn test_plan_pretty_print() {
    let doc = create_plan_document("plano", "1.0", "UTF-8").unwrap();
    assert_eq!(doc.pretty_print(), PLAN_XML);
}

#[test]
fn test_entity_list_is_pre_order() {
    let root = plan();
    assert_eq!(root.entity_list(), PLAN_ENTITY_LIST.to_vec());
    assert_eq!(root.entity_list().len(), count_entities(&root));
}

#[test]
fn test_entity_list_of_a_subtree() {
    let root = plan();
    let fuc = root.child("fuc").unwrap();
    assert_eq!(
        fuc.entity_list(),
        vec!["fuc", "nome", "ects", "avaliacao", "componente", "componente"]
    );
}

#[test]
fn test_print_xpath_components() {
    let root = plan();
    assert_eq!(
        root.global_print_xpath("fuc/avaliacao/componente"),
        PLAN_XPATH_COMPONENTS
    );
    assert_eq!(root.global_xpath("fuc/avaliacao/componente").len(), 5);
}

#[test]
fn test_xpath_single_segment_collects_every_match() {
    let root = plan();
    let nomes = root.global_xpath("nome");
    let texts: Vec<_> = nomes.iter().map(Entity::text).collect();
    assert_eq!(texts, vec!["Programação Avançada", "Dissertação"]);
}

#[test]
fn test_xpath_without_match_prints_nothing() {
    let root = plan();
    assert!(root.global_xpath("fuc/docente").is_empty());
    assert_eq!(root.global_print_xpath("docente"), "");
}

#[test]
fn test_xpath_segments_are_consumed_across_branches() {
    let root = Entity::new("r").unwrap();
    Entity::child_of("a", std::iter::empty::<(String, String)>(), &root).unwrap();
    let c = Entity::child_of("c", [("id", "1")], &root).unwrap();

    // `c` is a sibling of `a`, not its child, yet the consumed `a` still counts.
    assert_eq!(root.global_xpath("a/c"), vec![c]);
    assert!(root.global_xpath("c/a").is_empty());
}

#[test]
fn test_global_rename_entity() {
    let root = plan();
    root.global_rename_entity("componente", "test").unwrap();

    let names = root.entity_list();
    assert_eq!(names.iter().filter(|n| *n == "test").count(), 5);
    assert!(!names.iter().any(|n| n == "componente"));
    assert_eq!(root.global_xpath("fuc/avaliacao/test").len(), 5);
}

#[test]
fn test_global_rename_skips_the_root() {
    let root = plan();
    root.global_rename_entity("plano", "outro").unwrap();
    assert_eq!(root.name(), "plano");
}

#[test]
fn test_global_rename_rejects_invalid_names_up_front() {
    let root = plan();
    let err = root.global_rename_entity("componente", "1test").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidName(NameError::Entity(_))));
    assert_eq!(root.entity_list(), PLAN_ENTITY_LIST.to_vec());
}

#[test]
fn test_global_add_attribute() {
    let root = plan();
    root.global_add_attribute_to_entity("fuc", "semestre", "1");
    root.global_add_attribute_to_entity("nome", "lang", "pt");
    root.global_add_attribute_to_entity("avaliacao", "tipo", "continua");

    for fuc in root.global_xpath("fuc") {
        assert_eq!(fuc.attribute("semestre").as_deref(), Some("1"));
        assert!(fuc.has_attribute("codigo"));
    }
    for nome in root.global_xpath("nome") {
        assert!(!nome.has_attribute("lang"));
    }
    assert!(root
        .path("fuc/avaliacao")
        .unwrap()
        .pretty_print(0)
        .starts_with("<avaliacao tipo=\"continua\">\n"));
}

#[test]
fn test_global_rename_attribute_keeps_order() {
    let root = plan();
    root.global_rename_attribute("componente", "peso", "weight")
        .unwrap();

    let first = root.path("fuc/avaliacao/componente").unwrap();
    assert_eq!(
        first.pretty_print(0),
        r#"<componente nome="Quizzes" weight="20%"/>"#
    );
    assert!(root
        .global_xpath("componente")
        .iter()
        .all(|c| !c.has_attribute("peso")));
}

#[test]
fn test_global_rename_attribute_rejects_invalid_names() {
    let root = plan();
    let err = root
        .global_rename_attribute("componente", "peso", "peso relativo")
        .unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::InvalidName(NameError::Attribute(_))
    ));
}

#[test]
fn test_global_remove_entity() {
    let root = plan();
    root.global_remove_entity("avaliacao");
    assert_eq!(
        root.entity_list(),
        vec!["plano", "curso", "fuc", "nome", "ects", "fuc", "nome", "ects"]
    );
}

#[test]
fn test_global_remove_entity_keeps_the_root() {
    let root = plan();
    root.global_remove_entity("plano");
    assert_eq!(root.entity_list(), PLAN_ENTITY_LIST.to_vec());
}

#[test]
fn test_global_remove_entity_handles_adjacent_matches() {
    let root = plan();
    root.global_remove_entity("componente");
    assert_eq!(root.entity_list().len(), PLAN_ENTITY_LIST.len() - 5);
    for avaliacao in root.global_xpath("avaliacao") {
        assert_eq!(avaliacao.child_count(), 0);
    }
}

#[test]
fn test_global_remove_attribute_is_idempotent() {
    let root = plan();
    root.global_remove_attribute("componente", "peso");
    let once = root.pretty_print(0);
    root.global_remove_attribute("componente", "peso");

    assert_eq!(root.pretty_print(0), once);
    assert_eq!(
        root.global_print_xpath("fuc/avaliacao/componente"),
        "<componente nome=\"Quizzes\"/>\n\
         <componente nome=\"Projeto\"/>\n\
         <componente nome=\"Dissertação\"/>\n\
         <componente nome=\"Apresentação\"/>\n\
         <componente nome=\"Discussão\"/>"
    );
}
