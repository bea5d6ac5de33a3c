//! Embedded sub-entities: references to related resources, or complete
//! inline representations.

use serde_json::{Map, Value};

use crate::action::Action;
use crate::error::SirenError;
use crate::href::Href;
use crate::link::Link;
use crate::{key, raw};

/// A sub-entity of a [`Root`](crate::Root) or of another embedded
/// representation.
///
/// Siren distinguishes the two shapes by the presence of `href` in the
/// raw form: with an href the sub-entity is a reference to fetch
/// separately, without one it is embedded in full.
#[derive(Debug, Clone, PartialEq)]
pub enum Embedded {
    Link(EmbeddedLink),
    Representation(EmbeddedRepresentation),
}

impl Embedded {
    /// Relation list of the active variant.
    pub fn rel(&self) -> &[String] {
        match self {
            Embedded::Link(link) => link.rel(),
            Embedded::Representation(repr) => repr.rel(),
        }
    }

    /// First relation of the active variant.
    pub fn first_rel(&self) -> &str {
        match self {
            Embedded::Link(link) => link.first_rel(),
            Embedded::Representation(repr) => repr.first_rel(),
        }
    }

    /// Class list of the active variant; empty when unset.
    pub fn class(&self) -> &[String] {
        match self {
            Embedded::Link(link) => link.class(),
            Embedded::Representation(repr) => repr.class(),
        }
    }

    /// First class of the active variant, if any.
    pub fn first_class(&self) -> Option<&str> {
        match self {
            Embedded::Link(link) => link.first_class(),
            Embedded::Representation(repr) => repr.first_class(),
        }
    }

    /// Title of the active variant.
    pub fn title(&self) -> Option<&str> {
        match self {
            Embedded::Link(link) => link.title(),
            Embedded::Representation(repr) => repr.title(),
        }
    }

    pub fn as_link(&self) -> Option<&EmbeddedLink> {
        match self {
            Embedded::Link(link) => Some(link),
            Embedded::Representation(_) => None,
        }
    }

    pub fn as_representation(&self) -> Option<&EmbeddedRepresentation> {
        match self {
            Embedded::Link(_) => None,
            Embedded::Representation(repr) => Some(repr),
        }
    }

    /// Raw-form map of the active variant.
    pub fn to_raw(&self) -> Map<String, Value> {
        match self {
            Embedded::Link(link) => link.to_raw(),
            Embedded::Representation(repr) => repr.to_raw(),
        }
    }

    /// Parse a sub-entity, selecting the variant by `href`: present and
    /// non-null means an embedded link, otherwise an inline representation.
    pub fn from_raw(value: &Value) -> Result<Embedded, SirenError> {
        let obj = raw::as_object(value)?;
        if raw::get(obj, key::HREF).is_some() {
            EmbeddedLink::from_raw(value).map(Embedded::Link)
        } else {
            EmbeddedRepresentation::from_raw(value).map(Embedded::Representation)
        }
    }
}

impl From<EmbeddedLink> for Embedded {
    fn from(value: EmbeddedLink) -> Self {
        Embedded::Link(value)
    }
}

impl From<EmbeddedRepresentation> for Embedded {
    fn from(value: EmbeddedRepresentation) -> Self {
        Embedded::Representation(value)
    }
}

/// A sub-entity that references a related resource by href instead of
/// embedding it.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedLink {
    class: Option<Vec<String>>,
    rel: Vec<String>,
    href: Href,
    type_: Option<String>,
    title: Option<String>,
}

impl EmbeddedLink {
    /// Start building an embedded link with the required `rel` and `href`.
    pub fn builder(rel: impl Into<String>, href: impl Into<Href>) -> EmbeddedLinkBuilder {
        EmbeddedLinkBuilder {
            class: None,
            rel: vec![rel.into()],
            href: href.into(),
            type_: None,
            title: None,
        }
    }

    /// Rebuild, starting from this sub-entity's current state.
    pub fn to_builder(&self) -> EmbeddedLinkBuilder {
        EmbeddedLinkBuilder {
            class: self.class.clone(),
            rel: self.rel.clone(),
            href: self.href.clone(),
            type_: self.type_.clone(),
            title: self.title.clone(),
        }
    }

    /// Class list; empty when unset.
    pub fn class(&self) -> &[String] {
        self.class.as_deref().unwrap_or_default()
    }

    /// First class, if any.
    pub fn first_class(&self) -> Option<&str> {
        self.class().first().map(String::as_str)
    }

    /// Relation list; at least one element for any built value.
    pub fn rel(&self) -> &[String] {
        &self.rel
    }

    /// First relation. Panics when the rel list was replaced with an
    /// empty one, which violates the [`EmbeddedLinkBuilder::rels`]
    /// contract.
    pub fn first_rel(&self) -> &str {
        &self.rel[0]
    }

    pub fn href(&self) -> &Href {
        &self.href
    }

    pub fn type_(&self) -> Option<&str> {
        self.type_.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Raw-form map with keys in canonical order. Attributes never set on
    /// the builder are left out; explicitly set empty collections stay.
    pub fn to_raw(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(key::CLASS.to_owned(), raw::opt_string_list_value(&self.class));
        map.insert(key::REL.to_owned(), raw::string_list_value(&self.rel));
        map.insert(key::HREF.to_owned(), Value::String(self.href.to_string()));
        map.insert(key::TYPE.to_owned(), raw::opt_string_value(&self.type_));
        map.insert(key::TITLE.to_owned(), raw::opt_string_value(&self.title));
        raw::skip_nulls(map)
    }

    /// Parse an embedded link from its raw form. `rel` and `href` are
    /// required; unknown keys are ignored.
    pub fn from_raw(value: &Value) -> Result<EmbeddedLink, SirenError> {
        let obj = raw::as_object(value)?;
        Ok(EmbeddedLink {
            class: raw::opt_string_list(obj, key::CLASS)?,
            rel: raw::required_string_list(obj, key::REL)?,
            href: raw::parse_href(&raw::required_string(obj, key::HREF)?, "Embedded")?,
            type_: raw::opt_string(obj, key::TYPE)?,
            title: raw::opt_string(obj, key::TITLE)?,
        })
    }
}

/// Builder for [`EmbeddedLink`].
#[derive(Debug)]
pub struct EmbeddedLinkBuilder {
    class: Option<Vec<String>>,
    rel: Vec<String>,
    href: Href,
    type_: Option<String>,
    title: Option<String>,
}

impl EmbeddedLinkBuilder {
    /// Replace the class list.
    pub fn class<I, S>(mut self, class: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class = Some(class.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the rel list with a single relation.
    pub fn rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = vec![rel.into()];
        self
    }

    /// Replace the whole rel list. Must not be left empty.
    pub fn rels<I, S>(mut self, rels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rel = rels.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the href.
    pub fn href(mut self, href: impl Into<Href>) -> Self {
        self.href = href.into();
        self
    }

    pub fn type_(mut self, type_: impl Into<String>) -> Self {
        self.type_ = Some(type_.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn build(self) -> EmbeddedLink {
        EmbeddedLink {
            class: self.class,
            rel: self.rel,
            href: self.href,
            type_: self.type_,
            title: self.title,
        }
    }
}

/// A sub-entity embedded in full, with the same recursive structure as a
/// root entity plus the required `rel`.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedRepresentation {
    class: Option<Vec<String>>,
    rel: Vec<String>,
    properties: Option<Map<String, Value>>,
    links: Option<Vec<Link>>,
    entities: Option<Vec<Embedded>>,
    actions: Option<Vec<Action>>,
    title: Option<String>,
}

impl EmbeddedRepresentation {
    /// Start building an embedded representation with the required `rel`.
    pub fn builder(rel: impl Into<String>) -> EmbeddedRepresentationBuilder {
        EmbeddedRepresentationBuilder {
            class: None,
            rel: vec![rel.into()],
            properties: None,
            links: None,
            entities: None,
            actions: None,
            title: None,
        }
    }

    /// Rebuild, starting from this sub-entity's current state.
    pub fn to_builder(&self) -> EmbeddedRepresentationBuilder {
        EmbeddedRepresentationBuilder {
            class: self.class.clone(),
            rel: self.rel.clone(),
            properties: self.properties.clone(),
            links: self.links.clone(),
            entities: self.entities.clone(),
            actions: self.actions.clone(),
            title: self.title.clone(),
        }
    }

    /// Class list; empty when unset.
    pub fn class(&self) -> &[String] {
        self.class.as_deref().unwrap_or_default()
    }

    /// First class, if any.
    pub fn first_class(&self) -> Option<&str> {
        self.class().first().map(String::as_str)
    }

    /// Relation list; at least one element for any built value.
    pub fn rel(&self) -> &[String] {
        &self.rel
    }

    /// First relation. Panics when the rel list was replaced with an
    /// empty one, which violates the
    /// [`EmbeddedRepresentationBuilder::rels`] contract.
    pub fn first_rel(&self) -> &str {
        &self.rel[0]
    }

    /// Property map; empty when unset.
    pub fn properties(&self) -> &Map<String, Value> {
        self.properties.as_ref().unwrap_or_else(|| raw::empty_map())
    }

    /// Links; empty when unset.
    pub fn links(&self) -> &[Link] {
        self.links.as_deref().unwrap_or_default()
    }

    /// Sub-entities; empty when unset.
    pub fn entities(&self) -> &[Embedded] {
        self.entities.as_deref().unwrap_or_default()
    }

    /// Embedded links among the sub-entities, in document order.
    pub fn embedded_links(&self) -> Vec<&EmbeddedLink> {
        self.entities().iter().filter_map(Embedded::as_link).collect()
    }

    /// Embedded representations among the sub-entities, in document order.
    pub fn embedded_representations(&self) -> Vec<&EmbeddedRepresentation> {
        self.entities()
            .iter()
            .filter_map(Embedded::as_representation)
            .collect()
    }

    /// Actions; empty when unset.
    pub fn actions(&self) -> &[Action] {
        self.actions.as_deref().unwrap_or_default()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Raw-form map with keys in canonical order. Attributes never set on
    /// the builder are left out; explicitly set empty collections stay.
    pub fn to_raw(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(key::CLASS.to_owned(), raw::opt_string_list_value(&self.class));
        map.insert(key::REL.to_owned(), raw::string_list_value(&self.rel));
        map.insert(
            key::PROPERTIES.to_owned(),
            match &self.properties {
                Some(properties) => Value::Object(properties.clone()),
                None => Value::Null,
            },
        );
        map.insert(key::LINKS.to_owned(), raw::opt_raw_list(&self.links, Link::to_raw));
        map.insert(
            key::ENTITIES.to_owned(),
            raw::opt_raw_list(&self.entities, Embedded::to_raw),
        );
        map.insert(
            key::ACTIONS.to_owned(),
            raw::opt_raw_list(&self.actions, Action::to_raw),
        );
        map.insert(key::TITLE.to_owned(), raw::opt_string_value(&self.title));
        raw::skip_nulls(map)
    }

    /// Parse an embedded representation from its raw form. `rel` is
    /// required; unknown keys are ignored.
    pub fn from_raw(value: &Value) -> Result<EmbeddedRepresentation, SirenError> {
        let obj = raw::as_object(value)?;
        Ok(EmbeddedRepresentation {
            class: raw::opt_string_list(obj, key::CLASS)?,
            rel: raw::required_string_list(obj, key::REL)?,
            properties: raw::opt_object(obj, key::PROPERTIES)?,
            links: raw::opt_list(obj, key::LINKS, Link::from_raw)?,
            entities: raw::opt_list(obj, key::ENTITIES, Embedded::from_raw)?,
            actions: raw::opt_list(obj, key::ACTIONS, Action::from_raw)?,
            title: raw::opt_string(obj, key::TITLE)?,
        })
    }
}

/// Builder for [`EmbeddedRepresentation`].
#[derive(Debug)]
pub struct EmbeddedRepresentationBuilder {
    class: Option<Vec<String>>,
    rel: Vec<String>,
    properties: Option<Map<String, Value>>,
    links: Option<Vec<Link>>,
    entities: Option<Vec<Embedded>>,
    actions: Option<Vec<Action>>,
    title: Option<String>,
}

impl EmbeddedRepresentationBuilder {
    /// Replace the class list.
    pub fn class<I, S>(mut self, class: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class = Some(class.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the rel list with a single relation.
    pub fn rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = vec![rel.into()];
        self
    }

    /// Replace the whole rel list. Must not be left empty.
    pub fn rels<I, S>(mut self, rels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rel = rels.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the property map.
    pub fn properties<I>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        self.properties = Some(properties.into_iter().collect());
        self
    }

    /// Replace the link list.
    pub fn links<I>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = Link>,
    {
        self.links = Some(links.into_iter().collect());
        self
    }

    /// Replace the sub-entity list.
    pub fn entities<I>(mut self, entities: I) -> Self
    where
        I: IntoIterator<Item = Embedded>,
    {
        self.entities = Some(entities.into_iter().collect());
        self
    }

    /// Replace the action list.
    pub fn actions<I>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = Action>,
    {
        self.actions = Some(actions.into_iter().collect());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn build(self) -> EmbeddedRepresentation {
        EmbeddedRepresentation {
            class: self.class,
            rel: self.rel,
            properties: self.properties,
            links: self.links,
            entities: self.entities,
            actions: self.actions,
            title: self.title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn href(text: &str) -> Href {
        text.parse().unwrap()
    }

    #[test]
    fn test_dispatch_on_href() {
        let embedded = Embedded::from_raw(&json!({
            "rel": ["http://x.io/rels/order-items"],
            "href": "http://api.x.io/orders/42/items"
        }))
        .unwrap();
        assert!(embedded.as_link().is_some());

        let embedded = Embedded::from_raw(&json!({
            "rel": ["http://x.io/rels/customer"],
            "properties": {"customerId": "pj123"}
        }))
        .unwrap();
        assert!(embedded.as_representation().is_some());
    }

    #[test]
    fn test_null_href_means_representation() {
        let embedded = Embedded::from_raw(&json!({
            "rel": ["http://x.io/rels/customer"],
            "href": null
        }))
        .unwrap();
        assert!(embedded.as_representation().is_some());
    }

    #[test]
    fn test_missing_rel_in_both_shapes() {
        let err = Embedded::from_raw(&json!({"href": "http://api.x.io/orders/42/items"}))
            .unwrap_err();
        assert_eq!(err.to_string(), "Key rel is missing in the map.");

        let err = Embedded::from_raw(&json!({"properties": {}})).unwrap_err();
        assert_eq!(err.to_string(), "Key rel is missing in the map.");
    }

    #[test]
    fn test_invalid_href_names_embedded() {
        let err = Embedded::from_raw(&json!({"rel": ["r"], "href": "::"})).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Embedded"), "message was: {}", message);
        assert!(message.contains("::"), "message was: {}", message);
    }

    #[test]
    fn test_embedded_link_to_raw_key_order() {
        let link = EmbeddedLink::builder("item", href("http://api.x.io/items/1"))
            .class(["item"])
            .type_("application/vnd.siren+json")
            .title("First item")
            .build();
        let raw = link.to_raw();
        let keys: Vec<&String> = raw.keys().collect();
        assert_eq!(keys, ["class", "rel", "href", "type", "title"]);
    }

    #[test]
    fn test_representation_to_raw_key_order() {
        let repr = EmbeddedRepresentation::builder("customer")
            .class(["info"])
            .properties([("customerId".to_owned(), json!("pj123"))])
            .links([Link::builder("self", href("http://api.x.io/customers/pj123")).build()])
            .entities([])
            .actions([])
            .title("Customer")
            .build();
        let raw = repr.to_raw();
        let keys: Vec<&String> = raw.keys().collect();
        assert_eq!(
            keys,
            ["class", "rel", "properties", "links", "entities", "actions", "title"]
        );
    }

    #[test]
    fn test_unset_collections_read_empty() {
        let repr = EmbeddedRepresentation::builder("customer").build();
        assert!(repr.class().is_empty());
        assert!(repr.properties().is_empty());
        assert!(repr.links().is_empty());
        assert!(repr.entities().is_empty());
        assert!(repr.actions().is_empty());
        assert_eq!(repr.title(), None);
        assert_eq!(
            Value::Object(repr.to_raw()),
            json!({"rel": ["customer"]})
        );
    }

    #[test]
    fn test_filtered_views_keep_document_order() {
        let first = EmbeddedLink::builder("a", href("http://api.x.io/a")).build();
        let second = EmbeddedRepresentation::builder("b").build();
        let third = EmbeddedLink::builder("c", href("http://api.x.io/c")).build();
        let repr = EmbeddedRepresentation::builder("parent")
            .entities([
                Embedded::from(first.clone()),
                Embedded::from(second.clone()),
                Embedded::from(third.clone()),
            ])
            .build();

        assert_eq!(repr.embedded_links(), [&first, &third]);
        assert_eq!(repr.embedded_representations(), [&second]);
    }

    #[test]
    fn test_recursive_parse() {
        let repr = EmbeddedRepresentation::from_raw(&json!({
            "rel": ["outer"],
            "entities": [
                {"rel": ["inner"], "entities": [{"rel": ["leaf"], "href": "http://api.x.io/leaf"}]}
            ]
        }))
        .unwrap();
        let inner = repr.embedded_representations()[0];
        assert_eq!(inner.first_rel(), "inner");
        assert_eq!(inner.embedded_links()[0].first_rel(), "leaf");
    }

    #[test]
    fn test_shared_accessors() {
        let embedded = Embedded::from(
            EmbeddedLink::builder("item", href("http://api.x.io/items/1"))
                .class(["thumbnail"])
                .title("Item one")
                .build(),
        );
        assert_eq!(embedded.first_rel(), "item");
        assert_eq!(embedded.rel(), ["item"]);
        assert_eq!(embedded.first_class(), Some("thumbnail"));
        assert_eq!(embedded.title(), Some("Item one"));
    }
}
