//! Form fields carried by actions.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::SirenError;
use crate::{key, raw};

/// A single input of an [`Action`](crate::Action).
///
/// Immutable; construct through [`Field::builder`]. Field names are
/// expected to be unique within one action, which is the caller's
/// responsibility.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    class: Option<Vec<String>>,
    type_: Option<String>,
    title: Option<String>,
    value: Option<Value>,
}

impl Field {
    /// Start building a field with the required `name`.
    pub fn builder(name: impl Into<String>) -> FieldBuilder {
        FieldBuilder {
            name: name.into(),
            class: None,
            type_: None,
            title: None,
            value: None,
        }
    }

    /// Rebuild, starting from this field's current state.
    pub fn to_builder(&self) -> FieldBuilder {
        FieldBuilder {
            name: self.name.clone(),
            class: self.class.clone(),
            type_: self.type_.clone(),
            title: self.title.clone(),
            value: self.value.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class list; empty when unset.
    pub fn class(&self) -> &[String] {
        self.class.as_deref().unwrap_or_default()
    }

    /// First class, if any.
    pub fn first_class(&self) -> Option<&str> {
        self.class().first().map(String::as_str)
    }

    pub fn type_(&self) -> Option<&str> {
        self.type_.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Raw-form map with keys in canonical order. Attributes never set on
    /// the builder are left out; explicitly set empty collections stay.
    pub fn to_raw(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(key::NAME.to_owned(), Value::String(self.name.clone()));
        map.insert(key::CLASS.to_owned(), raw::opt_string_list_value(&self.class));
        map.insert(key::TYPE.to_owned(), raw::opt_string_value(&self.type_));
        map.insert(key::TITLE.to_owned(), raw::opt_string_value(&self.title));
        map.insert(
            key::VALUE.to_owned(),
            self.value.clone().unwrap_or(Value::Null),
        );
        raw::skip_nulls(map)
    }

    /// Parse a field from its raw form. `name` is required; unknown keys
    /// are ignored.
    pub fn from_raw(value: &Value) -> Result<Field, SirenError> {
        let obj = raw::as_object(value)?;
        Ok(Field {
            name: raw::required_string(obj, key::NAME)?,
            class: raw::opt_string_list(obj, key::CLASS)?,
            type_: raw::opt_string(obj, key::TYPE)?,
            title: raw::opt_string(obj, key::TITLE)?,
            value: raw::get(obj, key::VALUE).cloned(),
        })
    }
}

/// Builder for [`Field`].
#[derive(Debug)]
pub struct FieldBuilder {
    name: String,
    class: Option<Vec<String>>,
    type_: Option<String>,
    title: Option<String>,
    value: Option<Value>,
}

impl FieldBuilder {
    /// Replace the class list.
    pub fn class<I, S>(mut self, class: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class = Some(class.into_iter().map(Into::into).collect());
        self
    }

    /// Set the input type, conventionally one of [`FieldType`].
    pub fn type_(mut self, type_: impl Into<String>) -> Self {
        self.type_ = Some(type_.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the field value. Any JSON value is accepted.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Field {
        Field {
            name: self.name,
            class: self.class,
            type_: self.type_,
            title: self.title,
            value: self.value,
        }
    }
}

/// Input types from HTML, conventionally used as field `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Hidden,
    Text,
    Search,
    Tel,
    Url,
    Email,
    Password,
    Datetime,
    Date,
    Month,
    Week,
    Time,
    DatetimeLocal,
    Number,
    Range,
    Color,
    Checkbox,
    Radio,
    File,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Hidden => "hidden",
            FieldType::Text => "text",
            FieldType::Search => "search",
            FieldType::Tel => "tel",
            FieldType::Url => "url",
            FieldType::Email => "email",
            FieldType::Password => "password",
            FieldType::Datetime => "datetime",
            FieldType::Date => "date",
            FieldType::Month => "month",
            FieldType::Week => "week",
            FieldType::Time => "time",
            FieldType::DatetimeLocal => "datetime-local",
            FieldType::Number => "number",
            FieldType::Range => "range",
            FieldType::Color => "color",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::File => "file",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<FieldType> for String {
    fn from(value: FieldType) -> Self {
        value.as_str().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_defaults() {
        let field = Field::builder("code").build();
        assert_eq!(field.name(), "code");
        assert!(field.class().is_empty());
        assert_eq!(field.first_class(), None);
        assert_eq!(field.type_(), None);
        assert_eq!(field.title(), None);
        assert_eq!(field.value(), None);
    }

    #[test]
    fn test_to_raw_skips_unset() {
        let field = Field::builder("productCode")
            .type_(FieldType::Text)
            .build();
        assert_eq!(
            Value::Object(field.to_raw()),
            json!({"name": "productCode", "type": "text"})
        );
    }

    #[test]
    fn test_to_raw_keeps_explicit_empty_class() {
        let field = Field::builder("code").class(Vec::<String>::new()).build();
        assert_eq!(
            Value::Object(field.to_raw()),
            json!({"name": "code", "class": []})
        );
    }

    #[test]
    fn test_to_raw_key_order() {
        let field = Field::builder("quantity")
            .class(["numeric"])
            .type_(FieldType::Number)
            .title("Quantity")
            .value(3)
            .build();
        let raw = field.to_raw();
        let keys: Vec<&String> = raw.keys().collect();
        assert_eq!(keys, ["name", "class", "type", "title", "value"]);
    }

    #[test]
    fn test_from_raw_requires_name() {
        let err = Field::from_raw(&json!({"type": "text"})).unwrap_err();
        match err {
            SirenError::MissingKey { key } => assert_eq!(key, "name"),
            other => panic!("expected MissingKey, got {:?}", other),
        }
    }

    #[test]
    fn test_from_raw_ignores_unknown_keys() {
        let field = Field::from_raw(&json!({
            "name": "quantity",
            "type": "number",
            "placeholder": "unsupported"
        }))
        .unwrap();
        assert_eq!(field.name(), "quantity");
        assert_eq!(field.type_(), Some("number"));
    }

    #[test]
    fn test_value_keeps_json_shape() {
        let field = Field::from_raw(&json!({"name": "tags", "value": ["a", "b"]})).unwrap();
        assert_eq!(field.value(), Some(&json!(["a", "b"])));

        let rebuilt = field.to_builder().value("plain").build();
        assert_eq!(rebuilt.value(), Some(&json!("plain")));
        assert_eq!(rebuilt.name(), "tags");
    }

    #[test]
    fn test_field_type_strings() {
        assert_eq!(FieldType::DatetimeLocal.as_str(), "datetime-local");
        assert_eq!(FieldType::Hidden.to_string(), "hidden");
        assert_eq!(String::from(FieldType::Checkbox), "checkbox");
    }
}
