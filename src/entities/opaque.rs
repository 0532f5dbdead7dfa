use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// A client-supplied scalar stored without interpretation.
///
/// Columns holding an `Opaque` are nullable, so JSON `null` is modeled as the
/// `None` of an `Option<Opaque>` rather than as a variant here. Arrays and
/// objects fail to deserialize. Variant order matters: integers are tried
/// before floats so no whole number loses precision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(untagged)]
pub enum Opaque {
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl From<&str> for Opaque {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for Opaque {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Opaque {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
