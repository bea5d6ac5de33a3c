//! Navigational links between entities.

use serde_json::{Map, Value};

use crate::error::SirenError;
use crate::href::Href;
use crate::{key, raw};

/// A navigational link from an entity to a related resource.
///
/// `rel` and `href` are required at build time; `class`, `title`, and
/// `type` are optional.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    class: Option<Vec<String>>,
    title: Option<String>,
    rel: Vec<String>,
    href: Href,
    type_: Option<String>,
}

impl Link {
    /// Start building a link with the required `rel` and `href`.
    pub fn builder(rel: impl Into<String>, href: impl Into<Href>) -> LinkBuilder {
        LinkBuilder {
            class: None,
            title: None,
            rel: vec![rel.into()],
            href: href.into(),
            type_: None,
        }
    }

    /// Rebuild, starting from this link's current state.
    pub fn to_builder(&self) -> LinkBuilder {
        LinkBuilder {
            class: self.class.clone(),
            title: self.title.clone(),
            rel: self.rel.clone(),
            href: self.href.clone(),
            type_: self.type_.clone(),
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

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Relation list; at least one element for any built link.
    pub fn rel(&self) -> &[String] {
        &self.rel
    }

    /// First relation. Panics when the rel list was replaced with an
    /// empty one, which violates the [`LinkBuilder::rels`] contract.
    pub fn first_rel(&self) -> &str {
        &self.rel[0]
    }

    pub fn href(&self) -> &Href {
        &self.href
    }

    pub fn type_(&self) -> Option<&str> {
        self.type_.as_deref()
    }

    /// Raw-form map with keys in canonical order. Attributes never set on
    /// the builder are left out; explicitly set empty collections stay.
    pub fn to_raw(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(key::CLASS.to_owned(), raw::opt_string_list_value(&self.class));
        map.insert(key::TITLE.to_owned(), raw::opt_string_value(&self.title));
        map.insert(key::REL.to_owned(), raw::string_list_value(&self.rel));
        map.insert(key::HREF.to_owned(), Value::String(self.href.to_string()));
        map.insert(key::TYPE.to_owned(), raw::opt_string_value(&self.type_));
        raw::skip_nulls(map)
    }

    /// Parse a link from its raw form. `rel` and `href` are required;
    /// unknown keys are ignored.
    pub fn from_raw(value: &Value) -> Result<Link, SirenError> {
        let obj = raw::as_object(value)?;
        Ok(Link {
            class: raw::opt_string_list(obj, key::CLASS)?,
            title: raw::opt_string(obj, key::TITLE)?,
            rel: raw::required_string_list(obj, key::REL)?,
            href: raw::parse_href(&raw::required_string(obj, key::HREF)?, "Link")?,
            type_: raw::opt_string(obj, key::TYPE)?,
        })
    }
}

/// Builder for [`Link`].
#[derive(Debug)]
pub struct LinkBuilder {
    class: Option<Vec<String>>,
    title: Option<String>,
    rel: Vec<String>,
    href: Href,
    type_: Option<String>,
}

impl LinkBuilder {
    /// Replace the class list.
    pub fn class<I, S>(mut self, class: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class = Some(class.into_iter().map(Into::into).collect());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
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

    pub fn build(self) -> Link {
        Link {
            class: self.class,
            title: self.title,
            rel: self.rel,
            href: self.href,
            type_: self.type_,
        }
    }
}
