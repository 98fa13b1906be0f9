use super::{FormatConfig, Formatter};
use crate::{
    entity::{is_blank_key, Entity},
    error::Result,
};

/// Deterministic pretty-printer for entity trees.
///
/// Text entries are written raw after the tag name, real attributes as
/// ` key="value"` in insertion order. Values are not escaped.
pub struct XmlFormatter;

impl Formatter for XmlFormatter {
    fn format_at(&self, entity: &Entity, level: usize, config: &FormatConfig) -> Result<String> {
        config.validate()?;
        Ok(Self::render(entity, level, config))
    }
}

impl XmlFormatter {
    pub(crate) fn render(entity: &Entity, level: usize, config: &FormatConfig) -> String {
        let mut out = String::new();
        Self::write_entity(entity, level, config, &mut out);
        out
    }

    fn write_entity(entity: &Entity, level: usize, config: &FormatConfig, out: &mut String) {
        let indent = config.indentation(level);

        entity.with_data(|data| {
            let blank = data.attributes_are_blank();
            let has_children = !data.children.is_empty();

            out.push_str(&indent);
            out.push('<');
            out.push_str(&data.name);
            if blank {
                out.push('>');
            }

            for (key, value) in &data.attributes {
                match key {
                    Some(name) if !is_blank_key(key) => {
                        out.push(' ');
                        out.push_str(name);
                        out.push_str("=\"");
                        out.push_str(value);
                        out.push('"');
                    }
                    _ => out.push_str(value),
                }
            }

            if has_children {
                if !blank {
                    out.push('>');
                }
                for child in &data.children {
                    out.push('\n');
                    Self::write_entity(child, level + 1, config, out);
                }
                out.push('\n');
                out.push_str(&indent);
            }

            if blank || has_children {
                out.push_str("</");
                out.push_str(&data.name);
                out.push('>');
            } else {
                out.push_str("/>");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_entity() {
        let root = Entity::new("root").unwrap();
        assert_eq!(root.pretty_print(0), "<root></root>");
    }

    #[test]
    fn test_text_entity() {
        let nome = Entity::new("nome").unwrap();
        nome.add_text("Valor");
        assert_eq!(nome.pretty_print(0), "<nome>Valor</nome>");
        assert_eq!(nome.pretty_print(1), "    <nome>Valor</nome>");
    }

    #[test]
    fn test_self_closing_entity() {
        let componente =
            Entity::with_attributes("componente", [("nome", "Quizzes"), ("peso", "20%")]).unwrap();
        assert_eq!(
            componente.pretty_print(0),
            r#"<componente nome="Quizzes" peso="20%"/>"#
        );
    }

    #[test]
    fn test_nested_entities_with_custom_indent() {
        let fuc = Entity::with_attributes("fuc", [("codigo", "M4310")]).unwrap();
        let ects = Entity::child_of("ects", std::iter::empty::<(String, String)>(), &fuc).unwrap();
        ects.add_text("6.0");

        let config = FormatConfig::with_indent(2).unwrap();
        assert_eq!(
            fuc.pretty_print_with(0, &config).unwrap(),
            "<fuc codigo=\"M4310\">\n  <ects>6.0</ects>\n</fuc>"
        );
    }
}
