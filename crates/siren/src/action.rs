//! Actions: state-changing operations an entity exposes.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::SirenError;
use crate::field::Field;
use crate::href::Href;
use crate::{key, raw};

/// An operation a client can perform against an entity, described by an
/// href, an optional HTTP method, and the input [`Field`]s it accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    name: String,
    title: Option<String>,
    class: Option<Vec<String>>,
    method: Option<String>,
    href: Href,
    type_: Option<String>,
    fields: Option<Vec<Field>>,
}

impl Action {
    /// Start building an action with the required `name` and `href`.
    pub fn builder(name: impl Into<String>, href: impl Into<Href>) -> ActionBuilder {
        ActionBuilder {
            name: name.into(),
            title: None,
            class: None,
            method: None,
            href: href.into(),
            type_: None,
            fields: None,
        }
    }

    /// Rebuild, starting from this action's current state.
    pub fn to_builder(&self) -> ActionBuilder {
        ActionBuilder {
            name: self.name.clone(),
            title: self.title.clone(),
            class: self.class.clone(),
            method: self.method.clone(),
            href: self.href.clone(),
            type_: self.type_.clone(),
            fields: self.fields.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Class list; empty when unset.
    pub fn class(&self) -> &[String] {
        self.class.as_deref().unwrap_or_default()
    }

    /// First class, if any.
    pub fn first_class(&self) -> Option<&str> {
        self.class().first().map(String::as_str)
    }

    /// HTTP method as written in the document, conventionally one of
    /// [`Method`].
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    pub fn href(&self) -> &Href {
        &self.href
    }

    pub fn type_(&self) -> Option<&str> {
        self.type_.as_deref()
    }

    /// Input fields; empty when unset.
    pub fn fields(&self) -> &[Field] {
        self.fields.as_deref().unwrap_or_default()
    }

    /// Raw-form map with keys in canonical order. Attributes never set on
    /// the builder are left out; explicitly set empty collections stay.
    pub fn to_raw(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(key::NAME.to_owned(), Value::String(self.name.clone()));
        map.insert(key::TITLE.to_owned(), raw::opt_string_value(&self.title));
        map.insert(key::CLASS.to_owned(), raw::opt_string_list_value(&self.class));
        map.insert(key::METHOD.to_owned(), raw::opt_string_value(&self.method));
        map.insert(key::HREF.to_owned(), Value::String(self.href.to_string()));
        map.insert(key::TYPE.to_owned(), raw::opt_string_value(&self.type_));
        map.insert(
            key::FIELDS.to_owned(),
            raw::opt_raw_list(&self.fields, Field::to_raw),
        );
        raw::skip_nulls(map)
    }

    /// Parse an action from its raw form. `name` and `href` are required;
    /// unknown keys are ignored.
    pub fn from_raw(value: &Value) -> Result<Action, SirenError> {
        let obj = raw::as_object(value)?;
        Ok(Action {
            name: raw::required_string(obj, key::NAME)?,
            title: raw::opt_string(obj, key::TITLE)?,
            class: raw::opt_string_list(obj, key::CLASS)?,
            method: raw::opt_string(obj, key::METHOD)?,
            href: raw::parse_href(&raw::required_string(obj, key::HREF)?, "Action")?,
            type_: raw::opt_string(obj, key::TYPE)?,
            fields: raw::opt_list(obj, key::FIELDS, Field::from_raw)?,
        })
    }
}

/// Builder for [`Action`].
#[derive(Debug)]
pub struct ActionBuilder {
    name: String,
    title: Option<String>,
    class: Option<Vec<String>>,
    method: Option<String>,
    href: Href,
    type_: Option<String>,
    fields: Option<Vec<Field>>,
}

impl ActionBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the class list.
    pub fn class<I, S>(mut self, class: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class = Some(class.into_iter().map(Into::into).collect());
        self
    }

    /// Set the HTTP method, conventionally one of [`Method`].
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
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

    /// Replace the field list.
    pub fn fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        self.fields = Some(fields.into_iter().collect());
        self
    }

    pub fn build(self) -> Action {
        Action {
            name: self.name,
            title: self.title,
            class: self.class,
            method: self.method,
            href: self.href,
            type_: self.type_,
            fields: self.fields,
        }
    }
}

/// HTTP methods conventionally used by actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Head,
    Get,
    Put,
    Post,
    Options,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Head => "HEAD",
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Options => "OPTIONS",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for String {
    fn from(value: Method) -> Self {
        value.as_str().to_owned()
    }
}
