use reqwest::StatusCode;
use tracing::debug;

use crate::concept::{Concept, ConceptRef};
use crate::error::Result;
use crate::relation::RelationKind;
use crate::schema::{FinancialInstrument, IndustryClassification, Organisation, Parent, Subsidiary};
use crate::{organisation_types, ORGANISATION_TYPE};

/// Turn a concepts API answer into an organisation.
///
/// `Ok(None)` means there is no organisation to return: either the concepts
/// API does not know the UUID, or the concept is of another type. A body that
/// cannot be decoded is an error.
pub fn map_concept(status: StatusCode, body: &[u8]) -> Result<Option<Organisation>> {
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }

    let concept: Concept = serde_json::from_slice(body)?;

    if concept.concept_type != ORGANISATION_TYPE {
        debug!(
            concept_type = %concept.concept_type,
            "Requested concept is not an organisation"
        );
        return Ok(None);
    }

    let mut organisation = Organisation {
        id: concept.id,
        api_url: concept.api_url,
        pref_label: concept.pref_label,
        types: organisation_types(),
        direct_type: concept.concept_type,
        postal_code: concept.postal_code,
        country_code: concept.country_code,
        country_of_incorporation: concept.country_of_incorporation,
        legal_entity_identifier: concept.lei_code,
        industry_classification: Some(IndustryClassification::default()),
        financial_instrument: Some(FinancialInstrument::default()),
        ..Default::default()
    };

    for related in concept.related {
        match RelationKind::from_predicate(&related.predicate) {
            // upstream guarantees at most one parent; if not, the last one listed wins
            RelationKind::Parent => organisation.parent = Some(parent_from(related.concept)),
            RelationKind::Subsidiary => organisation
                .subsidiaries
                .push(subsidiary_from(related.concept)),
            RelationKind::Ignored => {}
        }
    }

    Ok(Some(organisation))
}

fn parent_from(concept: ConceptRef) -> Parent {
    Parent {
        id: concept.id,
        api_url: concept.api_url,
        pref_label: concept.pref_label,
        types: organisation_types(),
        direct_type: concept.concept_type,
    }
}

fn subsidiary_from(concept: ConceptRef) -> Subsidiary {
    Subsidiary {
        id: concept.id,
        api_url: concept.api_url,
        pref_label: concept.pref_label,
        types: organisation_types(),
        direct_type: concept.concept_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    fn related(predicate: &str, uuid: &str, label: &str) -> serde_json::Value {
        json!({
            "predicate": format!("http://www.ft.com/ontology{}", predicate),
            "concept": {
                "id": format!("http://api.ft.com/things/{}", uuid),
                "apiUrl": format!("http://api.ft.com/concepts/{}", uuid),
                "type": ORGANISATION_TYPE,
                "prefLabel": label,
            }
        })
    }

    fn organisation_concept(related: Vec<serde_json::Value>) -> Vec<u8> {
        serde_json::to_vec(&json!({
            "id": "http://api.ft.com/things/d6b12f0c-bf3f-4045-a07b-1e4e49103fd6",
            "apiUrl": "http://api.ft.com/concepts/d6b12f0c-bf3f-4045-a07b-1e4e49103fd6",
            "type": ORGANISATION_TYPE,
            "prefLabel": "Google Inc",
            "postalCode": "94043",
            "countryCode": "US",
            "countryOfIncorporation": "US",
            "leiCode": "7ZW8QJWVPR4P1J1KQY45",
            "related": related,
        }))
        .unwrap()
    }

    #[test]
    fn upstream_not_found_is_not_an_error() {
        let mapped = map_concept(StatusCode::NOT_FOUND, b"not json").unwrap();
        assert!(mapped.is_none());
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        let err = map_concept(StatusCode::OK, b"{").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn other_concept_types_are_not_found() {
        let body = json!({
            "id": "http://api.ft.com/things/f92a4ca4-84f9-11e8-8f42-da24cd01f044",
            "type": "http://www.ft.com/ontology/person/Person",
            "prefLabel": "Not an organisation",
        });
        let mapped = map_concept(StatusCode::OK, &serde_json::to_vec(&body).unwrap()).unwrap();
        assert!(mapped.is_none());
    }

    #[test]
    fn copies_scalar_fields() {
        let organisation = map_concept(StatusCode::OK, &organisation_concept(vec![]))
            .unwrap()
            .unwrap();

        assert_eq!(
            organisation.id,
            "http://api.ft.com/things/d6b12f0c-bf3f-4045-a07b-1e4e49103fd6"
        );
        assert_eq!(organisation.pref_label, "Google Inc");
        assert_eq!(organisation.direct_type, ORGANISATION_TYPE);
        assert_eq!(organisation.postal_code, "94043");
        assert_eq!(organisation.country_code, "US");
        assert_eq!(organisation.country_of_incorporation, "US");
        assert_eq!(organisation.legal_entity_identifier, "7ZW8QJWVPR4P1J1KQY45");
        assert_eq!(organisation.types, organisation_types());
        assert!(organisation.proper_name.is_empty());
        assert!(organisation.parent.is_none());
        assert!(organisation.subsidiaries.is_empty());
        assert_eq!(
            organisation.industry_classification,
            Some(IndustryClassification::default())
        );
        assert_eq!(
            organisation.financial_instrument,
            Some(FinancialInstrument::default())
        );
    }

    #[test]
    fn partitions_parent_and_subsidiaries() {
        let body = organisation_concept(vec![
            related("/hasParentOrganisation", "aaaaaaaa-0000-0000-0000-000000000001", "A"),
            related("/isParentOrganisationOf", "bbbbbbbb-0000-0000-0000-000000000002", "B"),
            related("/isRelatedTo", "dddddddd-0000-0000-0000-000000000004", "D"),
            related("/isParentOrganisationOf", "cccccccc-0000-0000-0000-000000000003", "C"),
        ]);

        let organisation = map_concept(StatusCode::OK, &body).unwrap().unwrap();

        let parent = organisation.parent.unwrap();
        assert_eq!(parent.pref_label, "A");
        assert_eq!(parent.types, organisation_types());
        let labels: Vec<_> = organisation
            .subsidiaries
            .iter()
            .map(|s| s.pref_label.as_str())
            .collect();
        assert_eq!(labels, ["B", "C"]);
    }

    #[test]
    fn null_fields_map_to_empty_values() {
        let body = json!({
            "id": "http://api.ft.com/things/d6b12f0c-bf3f-4045-a07b-1e4e49103fd6",
            "type": ORGANISATION_TYPE,
            "prefLabel": "Google Inc",
            "postalCode": null,
            "leiCode": null,
            "related": null,
        });

        let organisation = map_concept(StatusCode::OK, &serde_json::to_vec(&body).unwrap())
            .unwrap()
            .unwrap();

        assert_eq!(organisation.pref_label, "Google Inc");
        assert!(organisation.postal_code.is_empty());
        assert!(organisation.legal_entity_identifier.is_empty());
        assert!(organisation.subsidiaries.is_empty());
    }

    #[test]
    fn last_parent_wins() {
        let body = organisation_concept(vec![
            related("/hasParentOrganisation", "aaaaaaaa-0000-0000-0000-000000000001", "First"),
            related("/hasParentOrganisation", "aaaaaaaa-0000-0000-0000-000000000002", "Second"),
        ]);

        let organisation = map_concept(StatusCode::OK, &body).unwrap().unwrap();

        assert_eq!(organisation.parent.unwrap().pref_label, "Second");
    }

    #[test]
    fn serialised_form_omits_empty_fields() {
        let organisation = map_concept(StatusCode::OK, &organisation_concept(vec![]))
            .unwrap()
            .unwrap();
        let value = serde_json::to_value(&organisation).unwrap();

        assert!(value.get("subsidiaries").is_none());
        assert!(value.get("parentOrganisation").is_none());
        assert!(value.get("properName").is_none());
        assert_eq!(value["industryClassification"], json!({}));
        assert_eq!(value["financialInstrument"], json!({}));
        assert_eq!(value["legalEntityIdentifier"], "7ZW8QJWVPR4P1J1KQY45");
        assert_eq!(
            value["types"],
            json!([
                "http://www.ft.com/ontology/core/Thing",
                "http://www.ft.com/ontology/concept/Concept",
                "http://www.ft.com/ontology/organisation/Organisation",
            ])
        );
    }
}
