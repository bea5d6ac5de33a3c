//! Reserved attribute names in Siren documents.
//!
//! The codec uses these internally; they are exported for callers that
//! post-process raw maps.

pub const ACTIONS: &str = "actions";
pub const CLASS: &str = "class";
pub const ENTITIES: &str = "entities";
pub const FIELDS: &str = "fields";
pub const HREF: &str = "href";
pub const LINKS: &str = "links";
pub const METHOD: &str = "method";
pub const NAME: &str = "name";
pub const PROPERTIES: &str = "properties";
pub const REL: &str = "rel";
pub const TITLE: &str = "title";
pub const TYPE: &str = "type";
pub const VALUE: &str = "value";
