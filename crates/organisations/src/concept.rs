use serde::{Deserialize, Deserializer};

/// Envelope returned by the concepts API for `GET /concepts/{uuid}`.
///
/// Missing fields and explicit `null`s both decode as empty values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Concept {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub api_url: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub concept_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pref_label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub postal_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country_of_incorporation: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lei_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub related: Vec<RelatedConcept>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RelatedConcept {
    #[serde(deserialize_with = "null_as_default")]
    pub predicate: String,
    #[serde(deserialize_with = "null_as_default")]
    pub concept: ConceptRef,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConceptRef {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub api_url: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub concept_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pref_label: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
