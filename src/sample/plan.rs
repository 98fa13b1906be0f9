use crate::{document::Document, entity::Entity, error::Result};

type Component<'a> = (&'a str, &'a str);

/// Builds the sample study plan: a `curso` text node and two `fuc` units,
/// each with `nome`, `ects` and an `avaliacao` holding `componente` entries.
pub fn create_plan_document(root_name: &str, version: &str, encoding: &str) -> Result<Document> {
    let doc = Document::new(root_name, version, encoding)?;
    let root = doc.root_entity();

    let curso = Entity::child_of("curso", no_attributes(), &root)?;
    curso.add_text("Mestrado em Engenharia Informática");

    add_fuc(
        &root,
        "M4310",
        "Programação Avançada",
        "6.0",
        &[("Quizzes", "20%"), ("Projeto", "80%")],
    )?;
    add_fuc(
        &root,
        "03782",
        "Dissertação",
        "42.0",
        &[
            ("Dissertação", "60%"),
            ("Apresentação", "20%"),
            ("Discussão", "20%"),
        ],
    )?;

    Ok(doc)
}

fn add_fuc(
    root: &Entity,
    codigo: &str,
    nome: &str,
    ects: &str,
    components: &[Component<'_>],
) -> Result<()> {
    let fuc = Entity::child_of("fuc", [("codigo", codigo)], root)?;

    Entity::child_of("nome", no_attributes(), &fuc)?.add_text(nome);
    Entity::child_of("ects", no_attributes(), &fuc)?.add_text(ects);

    let avaliacao = Entity::child_of("avaliacao", no_attributes(), &fuc)?;
    for (label, peso) in components {
        Entity::child_of(
            "componente",
            [("nome", *label), ("peso", *peso)],
            &avaliacao,
        )?;
    }
    Ok(())
}

fn no_attributes() -> std::iter::Empty<(String, String)> {
    std::iter::empty()
}
