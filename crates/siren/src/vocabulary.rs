//! Shared rel and property-name vocabularies.
//!
//! Conventional identifiers drawn from public vocabularies for use in
//! `class` and `rel` lists and as property names. Keeping them here
//! avoids scattering string literals across producers and consumers.

/// Geolocation terms (schema.org).
pub mod schema {
    pub const GEO: &str = "geo";
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
}

/// Friend of a Friend terms.
pub mod foaf {
    pub const ORGANIZATION: &str = "organization";
}

/// Data Catalog Vocabulary terms.
pub mod dcat {
    pub const KEYWORD: &str = "keyword";
}

/// Dublin Core metadata terms.
pub mod dublin_core {
    /// Lowercase variant of the title, for string search.
    pub const ALTERNATIVE: &str = "alternative";
    /// First available datetime observation in the corresponding data set.
    pub const AVAILABLE: &str = "available";
    /// User who last modified an entity.
    pub const CONTRIBUTOR: &str = "contributor";
    /// When an entity was created.
    pub const CREATED: &str = "created";
    /// User who created an entity.
    pub const CREATOR: &str = "creator";
    pub const DESCRIPTION: &str = "description";
    pub const EXTENT: &str = "extent";
    /// Current version of an entity or part.
    pub const HAS_VERSION: &str = "hasVersion";
    /// Unique identifier of an entity, part, or version.
    pub const IDENTIFIER: &str = "identifier";
    /// Parent entity of a part.
    pub const IS_PART_OF: &str = "isPartOf";
    pub const IS_REFERENCED_BY: &str = "isReferencedBy";
    /// Parent entity or part of a version.
    pub const IS_VERSION_OF: &str = "isVersionOf";
    /// When an entity was issued (locked).
    pub const ISSUED: &str = "issued";
    pub const MEDIATOR: &str = "mediator";
    /// When an entity was last modified.
    pub const MODIFIED: &str = "modified";
    /// Change request command applied to an entity, part, or version.
    pub const PROVENANCE: &str = "provenance";
    /// User who issued (locked) an entity.
    pub const PUBLISHER: &str = "publisher";
    /// External third-party identifier of an entity or version.
    pub const REFERENCES: &str = "references";
    pub const RELATION: &str = "relation";
    /// Previous version of a version.
    pub const REPLACES: &str = "replaces";
    /// Source namespace of an entity.
    pub const SOURCE: &str = "source";
    /// Optional subject of an entity.
    pub const SUBJECT: &str = "subject";
    /// Searchable name of an entity.
    pub const TITLE: &str = "title";
    /// Type of an entity.
    pub const TYPE: &str = "type";
    /// When an entity stopped being valid.
    pub const VALID: &str = "valid";
}
