pub mod schema;
pub mod concept;
pub mod relation;
pub mod identifier;
pub mod client;
pub mod mapper;
pub mod error;

pub use schema::{FinancialInstrument, IndustryClassification, Organisation, Parent, Subsidiary};
pub use concept::{Concept, ConceptRef, RelatedConcept};
pub use relation::RelationKind;
pub use identifier::{canonical_uuid, is_valid_uuid};
pub use client::{ConceptResponse, ConceptsClient, HttpConceptsClient};
pub use mapper::map_concept;
pub use error::{Error, Result};

/// Root of every FT ontology URI.
pub const ONTOLOGY_PREFIX: &str = "http://www.ft.com/ontology";

/// Ontology type of the concepts this service serves.
pub const ORGANISATION_TYPE: &str = "http://www.ft.com/ontology/organisation/Organisation";

/// Type hierarchy reported for every organisation, parent and subsidiary.
pub const ORGANISATION_TYPES: [&str; 3] = [
    "http://www.ft.com/ontology/core/Thing",
    "http://www.ft.com/ontology/concept/Concept",
    ORGANISATION_TYPE,
];

/// Owned copy of [`ORGANISATION_TYPES`] for the serialised `types` field.
pub fn organisation_types() -> Vec<String> {
    ORGANISATION_TYPES.iter().map(|t| t.to_string()).collect()
}
