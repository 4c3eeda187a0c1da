use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::InvalidReferenceError;

// ---------------------------------------------------------------------------
// RawTable – rows of string cells as read from a source
// ---------------------------------------------------------------------------

/// An untyped table: a header row plus data rows of string cells.
///
/// Rows may be shorter than the header; missing cells read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Convenience constructor for literal tables.
    pub fn from_strs(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    /// Cell at (`row`, `col`), empty if the row is short.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// FacilityRecord – one public restroom
// ---------------------------------------------------------------------------

/// A single facility after normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityRecord {
    /// Data row index in the source table (0-based, header excluded).
    pub source_row: usize,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_hours: Option<String>,
    /// Seoul district (구), from a source column or the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    /// Columns the alias table did not recognize, under their original names.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl FacilityRecord {
    pub fn point(&self) -> ReferencePoint {
        ReferencePoint::new(self.latitude, self.longitude)
    }
}

// ---------------------------------------------------------------------------
// LoadReport – what normalization threw away
// ---------------------------------------------------------------------------

/// Why a source row was left out of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DropReason {
    MissingCoordinate,
    NotANumber { value: String },
    OutOfRange { latitude: f64, longitude: f64 },
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::MissingCoordinate => write!(f, "latitude or longitude is empty"),
            DropReason::NotANumber { value } => write!(f, "'{value}' is not a number"),
            DropReason::OutOfRange {
                latitude,
                longitude,
            } => write!(f, "({latitude}, {longitude}) is out of range"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroppedRow {
    pub source_row: usize,
    pub reason: DropReason,
}

/// Diagnostics collected while normalizing a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadReport {
    /// Data rows in the raw table.
    pub total_rows: usize,
    pub dropped: Vec<DroppedRow>,
}

impl LoadReport {
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }

    pub fn kept_count(&self) -> usize {
        self.total_rows - self.dropped.len()
    }
}

// ---------------------------------------------------------------------------
// Dataset – the normalized, immutable facility collection
// ---------------------------------------------------------------------------

/// Facilities in source row order. Immutable once built; share it behind an
/// `Arc` to serve concurrent queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<FacilityRecord>,
    report: LoadReport,
}

impl Dataset {
    pub(crate) fn new(records: Vec<FacilityRecord>, report: LoadReport) -> Self {
        Self { records, report }
    }

    pub fn records(&self) -> &[FacilityRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FacilityRecord> {
        self.records.iter()
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Number of facilities.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a FacilityRecord;
    type IntoIter = std::slice::Iter<'a, FacilityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ---------------------------------------------------------------------------
// ReferencePoint
// ---------------------------------------------------------------------------

/// The point distances are measured from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferencePoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl ReferencePoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        is_valid_coordinate(self.latitude, self.longitude)
    }

    /// `self` if it lies within geographic bounds.
    pub fn validate(self) -> Result<Self, InvalidReferenceError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(InvalidReferenceError {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

impl fmt::Display for ReferencePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Latitude within -90..=90 and longitude within -180..=180, both finite.
pub fn is_valid_coordinate(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
}
