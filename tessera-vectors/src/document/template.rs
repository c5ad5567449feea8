//! Placeholder templates turning entity properties into document text.
//!
//! Placeholders use `{{ expr }}` with:
//! - `name`: the node name, or `src->dst` for an edge
//! - `src` / `src.name`, `dst` / `dst.name`: edge endpoints
//! - `props.<key>`: a property value
//!
//! Anything else renders empty. An unterminated `{{` is kept as literal text.

use tessera_core::traits::{DocumentInput, EntityProperties, IDocumentTemplate};
use tessera_core::EntityRef;

/// Template with optional node and edge patterns. A missing pattern means
/// entities of that kind get no document.
#[derive(Debug, Clone, Default)]
pub struct DefaultTemplate {
    node_template: Option<String>,
    edge_template: Option<String>,
}

impl DefaultTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node_template(mut self, template: impl Into<String>) -> Self {
        self.node_template = Some(template.into());
        self
    }

    pub fn with_edge_template(mut self, template: impl Into<String>) -> Self {
        self.edge_template = Some(template.into());
        self
    }

    fn document(template: Option<&str>, entity: &EntityProperties) -> Option<DocumentInput> {
        let content = render(template?, entity);
        if content.trim().is_empty() {
            None
        } else {
            Some(DocumentInput::new(content))
        }
    }
}

impl IDocumentTemplate for DefaultTemplate {
    fn node(&self, node: &EntityProperties) -> Option<DocumentInput> {
        Self::document(self.node_template.as_deref(), node)
    }

    fn edge(&self, edge: &EntityProperties) -> Option<DocumentInput> {
        Self::document(self.edge_template.as_deref(), edge)
    }
}

/// Render `template` against one entity.
pub fn render(template: &str, entity: &EntityProperties) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        let inner = &rest[open + 2..];
        let Some(close) = inner.find("}}") else {
            break;
        };
        out.push_str(&rest[..open]);
        if let Some(value) = lookup(inner[..close].trim(), entity) {
            out.push_str(&value);
        }
        rest = &inner[close + 2..];
    }
    out.push_str(rest);
    out
}

fn lookup(expr: &str, entity: &EntityProperties) -> Option<String> {
    if let Some(key) = expr.strip_prefix("props.") {
        return entity.properties.get(key).map(|value| value.to_string());
    }
    match (expr, &entity.entity) {
        ("name", e) => Some(e.to_string()),
        ("src" | "src.name", EntityRef::Edge(src, _)) => Some(src.clone()),
        ("dst" | "dst.name", EntityRef::Edge(_, dst)) => Some(dst.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use tessera_core::{Prop, Properties};

    use super::*;

    fn entity(entity: EntityRef, props: &[(&str, Prop)]) -> EntityProperties {
        let properties: Properties = props
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        EntityProperties { entity, properties }
    }

    #[test]
    fn renders_names_and_properties() {
        let node = entity(EntityRef::node("alice"), &[("age", Prop::from(31_i64))]);
        assert_eq!(render("{{ name }} is {{props.age}}", &node), "alice is 31");

        let edge = entity(EntityRef::edge("alice", "bob"), &[("name", Prop::from("knows"))]);
        assert_eq!(render("{{ props.name }}", &edge), "knows");
        assert_eq!(render("{{ name }}", &edge), "alice->bob");
        assert_eq!(render("{{ src.name }} / {{ dst }}", &edge), "alice / bob");
    }

    #[test]
    fn unknown_placeholders_render_empty() {
        let node = entity(EntityRef::node("n"), &[]);
        assert_eq!(render("[{{ props.missing }}][{{ src }}][{{ nonsense }}]", &node), "[][][]");
    }

    #[test]
    fn unterminated_placeholder_is_literal() {
        let node = entity(EntityRef::node("n"), &[]);
        assert_eq!(render("{{ name }} and {{ name", &node), "n and {{ name");
    }

    #[test]
    fn blank_output_means_no_document() {
        let template = DefaultTemplate::new()
            .with_node_template("{{ props.missing }}  ")
            .with_edge_template("{{ name }}");
        let node = entity(EntityRef::node("n"), &[]);
        let edge = entity(EntityRef::edge("a", "b"), &[]);
        assert!(template.node(&node).is_none());
        assert_eq!(template.edge(&edge), Some(DocumentInput::new("a->b")));
    }

    #[test]
    fn missing_template_means_no_document() {
        let template = DefaultTemplate::new().with_node_template("{{ name }}");
        let edge = entity(EntityRef::edge("a", "b"), &[]);
        assert!(template.edge(&edge).is_none());
    }
}
