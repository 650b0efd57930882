use crate::ONTOLOGY_PREFIX;

/// How a related concept is attached to the organisation being mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    Parent,
    Subsidiary,
    Ignored,
}

/// Predicate suffixes (after the ontology prefix) this service understands.
const PREDICATES: &[(&str, RelationKind)] = &[
    ("/hasParentOrganisation", RelationKind::Parent),
    ("/isParentOrganisationOf", RelationKind::Subsidiary),
];

impl RelationKind {
    pub fn from_predicate(predicate: &str) -> Self {
        let suffix = predicate
            .strip_prefix(ONTOLOGY_PREFIX)
            .unwrap_or(predicate);

        PREDICATES
            .iter()
            .find(|(known, _)| *known == suffix)
            .map(|(_, kind)| *kind)
            .unwrap_or(RelationKind::Ignored)
    }
}
