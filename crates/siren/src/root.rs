//! The top-level Siren document.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::action::Action;
use crate::embedded::{Embedded, EmbeddedLink, EmbeddedRepresentation};
use crate::error::SirenError;
use crate::link::Link;
use crate::{key, raw};

/// A Siren document: the root entity of a hypermedia response.
///
/// All attributes are optional. Collections read back as empty when never
/// set; in the serialized form Root omits empty collections entirely,
/// unlike the nested entity types which keep explicitly set empty ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Root {
    class: Vec<String>,
    title: Option<String>,
    properties: Map<String, Value>,
    entities: Vec<Embedded>,
    actions: Vec<Action>,
    links: Vec<Link>,
}

impl Root {
    /// Start building an empty document.
    pub fn builder() -> RootBuilder {
        RootBuilder {
            root: Root::default(),
        }
    }

    /// Rebuild, starting from this document's current state.
    pub fn to_builder(&self) -> RootBuilder {
        RootBuilder { root: self.clone() }
    }

    /// Class list; empty when unset.
    pub fn class(&self) -> &[String] {
        &self.class
    }

    /// First class, if any.
    pub fn first_class(&self) -> Option<&str> {
        self.class.first().map(String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Property map; empty when unset.
    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Sub-entities; empty when unset.
    pub fn entities(&self) -> &[Embedded] {
        &self.entities
    }

    /// Embedded links among the sub-entities, in document order.
    pub fn embedded_links(&self) -> Vec<&EmbeddedLink> {
        self.entities.iter().filter_map(Embedded::as_link).collect()
    }

    /// Embedded representations among the sub-entities, in document order.
    pub fn embedded_representations(&self) -> Vec<&EmbeddedRepresentation> {
        self.entities
            .iter()
            .filter_map(Embedded::as_representation)
            .collect()
    }

    /// Actions; empty when unset.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Links; empty when unset.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Raw-form map with keys in canonical order. Unlike the nested
    /// entity types, Root leaves out empty collections as well as unset
    /// attributes.
    pub fn to_raw(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            key::CLASS.to_owned(),
            raw::null_when_empty(raw::string_list_value(&self.class)),
        );
        map.insert(key::TITLE.to_owned(), raw::opt_string_value(&self.title));
        map.insert(
            key::PROPERTIES.to_owned(),
            raw::null_when_empty(Value::Object(self.properties.clone())),
        );
        map.insert(
            key::ENTITIES.to_owned(),
            raw::null_when_empty(raw::raw_list(&self.entities, Embedded::to_raw)),
        );
        map.insert(
            key::ACTIONS.to_owned(),
            raw::null_when_empty(raw::raw_list(&self.actions, Action::to_raw)),
        );
        map.insert(
            key::LINKS.to_owned(),
            raw::null_when_empty(raw::raw_list(&self.links, Link::to_raw)),
        );
        raw::skip_nulls(map)
    }

    /// Parse a document from its raw form. Every attribute is optional;
    /// null values and unknown keys are ignored.
    pub fn from_raw(value: &Value) -> Result<Root, SirenError> {
        let obj = raw::as_object(value)?;
        Ok(Root {
            class: raw::opt_string_list(obj, key::CLASS)?.unwrap_or_default(),
            title: raw::opt_string(obj, key::TITLE)?,
            properties: raw::opt_object(obj, key::PROPERTIES)?.unwrap_or_default(),
            entities: raw::opt_list(obj, key::ENTITIES, Embedded::from_raw)?.unwrap_or_default(),
            actions: raw::opt_list(obj, key::ACTIONS, Action::from_raw)?.unwrap_or_default(),
            links: raw::opt_list(obj, key::LINKS, Link::from_raw)?.unwrap_or_default(),
        })
    }

    /// Serialize to compact Siren JSON.
    pub fn to_json(&self) -> String {
        Value::Object(self.to_raw()).to_string()
    }

    /// Parse a Siren JSON document. The top level must be a JSON object.
    pub fn from_json(json: &str) -> Result<Root, SirenError> {
        let value: Value = serde_json::from_str(json)?;
        Root::from_raw(&value)
    }
}

impl Serialize for Root {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_raw().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Root {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Root::from_raw(&value).map_err(serde::de::Error::custom)
    }
}

/// Builder for [`Root`].
#[derive(Debug, Default)]
pub struct RootBuilder {
    root: Root,
}

impl RootBuilder {
    /// Replace the class list.
    pub fn class<I, S>(mut self, class: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.root.class = class.into_iter().map(Into::into).collect();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.root.title = Some(title.into());
        self
    }

    /// Replace the property map.
    pub fn properties<I>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        self.root.properties = properties.into_iter().collect();
        self
    }

    /// Replace the sub-entity list.
    pub fn entities<I>(mut self, entities: I) -> Self
    where
        I: IntoIterator<Item = Embedded>,
    {
        self.root.entities = entities.into_iter().collect();
        self
    }

    /// Replace the action list.
    pub fn actions<I>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = Action>,
    {
        self.root.actions = actions.into_iter().collect();
        self
    }

    /// Replace the link list.
    pub fn links<I>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = Link>,
    {
        self.root.links = links.into_iter().collect();
        self
    }

    pub fn build(self) -> Root {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Method;
    use crate::field::{Field, FieldType};
    use crate::href::Href;
    use serde_json::json;

    fn href(text: &str) -> Href {
        text.parse().unwrap()
    }

    #[test]
    fn test_empty_document_serializes_to_empty_object() {
        assert_eq!(Root::builder().build().to_json(), "{}");
    }

    #[test]
    fn test_empty_collections_are_omitted() {
        let root = Root::builder()
            .class(Vec::<String>::new())
            .properties([])
            .entities([])
            .actions([])
            .links([])
            .build();
        assert_eq!(root.to_json(), "{}");
    }

    #[test]
    fn test_from_raw_with_null_values() {
        let root = Root::from_raw(&json!({
            "class": null,
            "title": null,
            "properties": null,
            "entities": null,
            "actions": null,
            "links": null
        }))
        .unwrap();
        assert!(root.class().is_empty());
        assert_eq!(root.title(), None);
        assert!(root.properties().is_empty());
        assert!(root.entities().is_empty());
        assert!(root.actions().is_empty());
        assert!(root.links().is_empty());
    }

    #[test]
    fn test_complete_document_getters() {
        let root = Root::builder()
            .class(["order"])
            .title("Order 42")
            .properties([
                ("orderNumber".to_owned(), json!(42)),
                ("status".to_owned(), json!("pending")),
            ])
            .entities([
                Embedded::from(
                    EmbeddedLink::builder(
                        "http://x.io/rels/order-items",
                        href("http://api.x.io/orders/42/items"),
                    )
                    .build(),
                ),
                Embedded::from(
                    EmbeddedRepresentation::builder("http://x.io/rels/customer")
                        .properties([("customerId".to_owned(), json!("pj123"))])
                        .build(),
                ),
            ])
            .actions([Action::builder("add-item", href("http://api.x.io/orders/42/items"))
                .method(Method::Post)
                .fields([Field::builder("productCode").type_(FieldType::Text).build()])
                .build()])
            .links([Link::builder("self", href("http://api.x.io/orders/42")).build()])
            .build();

        assert_eq!(root.class(), ["order"]);
        assert_eq!(root.first_class(), Some("order"));
        assert_eq!(root.title(), Some("Order 42"));
        assert_eq!(root.properties()["orderNumber"], json!(42));
        assert_eq!(root.entities().len(), 2);
        assert_eq!(root.embedded_links().len(), 1);
        assert_eq!(root.embedded_representations().len(), 1);
        assert_eq!(
            root.embedded_links()[0].href().to_string(),
            "http://api.x.io/orders/42/items"
        );
        assert_eq!(
            root.embedded_representations()[0].properties()["customerId"],
            json!("pj123")
        );
        assert_eq!(root.actions()[0].fields()[0].name(), "productCode");
        assert_eq!(root.links()[0].first_rel(), "self");
    }

    #[test]
    fn test_root_key_order() {
        let root = Root::builder()
            .class(["order"])
            .title("Order 42")
            .properties([("orderNumber".to_owned(), json!(42))])
            .entities([Embedded::from(
                EmbeddedRepresentation::builder("customer").build(),
            )])
            .actions([Action::builder("add-item", href("http://api.x.io/orders/42/items")).build()])
            .links([Link::builder("self", href("http://api.x.io/orders/42")).build()])
            .build();
        let raw = root.to_raw();
        let keys: Vec<&String> = raw.keys().collect();
        assert_eq!(
            keys,
            ["class", "title", "properties", "entities", "actions", "links"]
        );
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        let err = Root::from_json("[]").unwrap_err();
        match err {
            SirenError::TypeMismatch { expected, found } => {
                assert_eq!(expected, "object");
                assert_eq!(found, "array");
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_rejects_malformed_text() {
        let err = Root::from_json("{\"class\": [").unwrap_err();
        match err {
            SirenError::Json(_) => {}
            other => panic!("expected Json, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_link_rel_surfaces_exact_message() {
        let err = Root::from_json(r#"{"links": [{"href": "http://api.x.io/orders/42"}]}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "Key rel is missing in the map.");
    }

    #[test]
    fn test_equality_and_copy_with_overrides() {
        let build = || {
            Root::builder()
                .class(["order"])
                .properties([("orderNumber".to_owned(), json!(42))])
                .links([Link::builder("self", href("http://api.x.io/orders/42")).build()])
                .build()
        };
        let first = build();
        let second = build();
        assert_eq!(first, second);

        let retitled = first.to_builder().title("changed").build();
        assert_ne!(first, retitled);
        assert_eq!(retitled.class(), ["order"]);
    }

    #[test]
    fn test_serde_round_trip() {
        let root = Root::builder()
            .class(["order"])
            .properties([("orderNumber".to_owned(), json!(42))])
            .build();

        let value = serde_json::to_value(&root).unwrap();
        assert_eq!(value, Value::Object(root.to_raw()));

        let back: Root = serde_json::from_value(value).unwrap();
        assert_eq!(back, root);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let root = Root::from_json(
            r#"{"class": ["order"], "unknown": {"nested": true}, "links": []}"#,
        )
        .unwrap();
        assert_eq!(root.class(), ["order"]);
        assert!(root.links().is_empty());
    }
}
