//! siren: data model and JSON codec for the Siren hypermedia format.
//!
//! Siren (`application/vnd.siren+json`) represents a web resource as an
//! entity carrying classes, properties, navigational links, actions, and
//! embedded sub-entities. This crate models those documents as immutable
//! typed values built through builders, with lossless conversion to and
//! from the JSON wire form.
//!
//! # Public API
//!
//! - [`Root`] -- the top-level document, with [`Root::to_json`] /
//!   [`Root::from_json`] as the codec entry points
//! - [`Link`], [`Action`], [`Field`] -- nested entity types
//! - [`Embedded`] -- sub-entities, either an [`EmbeddedLink`] or an
//!   [`EmbeddedRepresentation`], distinguished by `href`
//! - [`Href`] -- validated href text, kept exactly as written
//! - [`SirenError`] -- parse-side error type
//! - [`key`] / [`vocabulary`] -- reserved attribute names and shared
//!   rel/property vocabularies
//! - [`datetime`] -- canonical UTC timestamp form for property values
//!
//! Every entity type also converts to and from the raw `serde_json`
//! object layer (`to_raw` / `from_raw`) for callers that post-process
//! documents.

/// Media type of Siren documents.
pub const MEDIA_TYPE: &str = "application/vnd.siren+json";
/// Reserved link relation for an entity's own URI.
pub const REL_SELF: &str = "self";

pub mod action;
pub mod datetime;
pub mod embedded;
pub mod error;
pub mod field;
pub mod href;
pub mod key;
pub mod link;
mod raw;
pub mod root;
pub mod vocabulary;

// ── Convenience re-exports ───────────────────────────────────────────

pub use action::{Action, ActionBuilder, Method};
pub use embedded::{
    Embedded, EmbeddedLink, EmbeddedLinkBuilder, EmbeddedRepresentation,
    EmbeddedRepresentationBuilder,
};
pub use error::SirenError;
pub use field::{Field, FieldBuilder, FieldType};
pub use href::Href;
pub use link::{Link, LinkBuilder};
pub use root::{Root, RootBuilder};
