use thiserror::Error;

use crate::data::schema::Field;

/// The raw table cannot be turned into a dataset at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("table has no header row")]
    NoHeaders,

    #[error(
        "missing required column(s) {}; found headers: {}",
        join(missing),
        headers.join(", ")
    )]
    MissingColumns {
        missing: Vec<Field>,
        headers: Vec<String>,
    },
}

fn join(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A reference point outside the valid geographic range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid reference point ({latitude}, {longitude}): latitude must be within -90..90 and longitude within -180..180")]
pub struct InvalidReferenceError {
    pub latitude: f64,
    pub longitude: f64,
}

/// A user-supplied location could not be turned into a reference point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    #[error("unknown district: {0}")]
    UnknownDistrict(String),

    #[error("cannot parse coordinates from '{0}', expected 'latitude,longitude'")]
    Unparsable(String),

    #[error(transparent)]
    InvalidReference(#[from] InvalidReferenceError),
}
