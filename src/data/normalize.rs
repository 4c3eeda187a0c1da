use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::model::{
    is_valid_coordinate, Dataset, DropReason, DroppedRow, FacilityRecord, LoadReport, RawTable,
};
use super::schema::{clean_header, AliasTable, Field};
use crate::error::SchemaError;

/// A whitespace-preceded token ending in the district suffix 구.
static DISTRICT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s(\S+구)(?:\s|$)").expect("district pattern is valid"));

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Turn a raw table into a [`Dataset`].
///
/// Headers are trimmed and renamed through `aliases`; unrecognized headers
/// are kept verbatim in each record's `extra` map. Latitude and longitude
/// columns are required, their absence fails the whole load. Rows whose
/// coordinates are empty, non-numeric or out of range are dropped and listed
/// in the dataset's [`LoadReport`].
pub fn normalize(raw: &RawTable, aliases: &AliasTable) -> Result<Dataset, SchemaError> {
    let columns = ColumnMap::build(&raw.headers, aliases)?;

    let mut records = Vec::with_capacity(raw.len());
    let mut report = LoadReport {
        total_rows: raw.len(),
        dropped: Vec::new(),
    };

    for row in 0..raw.len() {
        match columns.record(raw, row) {
            Ok(record) => records.push(record),
            Err(reason) => {
                log::debug!("Dropping row {row}: {reason}");
                report.dropped.push(DroppedRow {
                    source_row: row,
                    reason,
                });
            }
        }
    }

    if report.dropped_count() > 0 {
        log::warn!(
            "Dropped {} of {} rows with unusable coordinates",
            report.dropped_count(),
            report.total_rows
        );
    }
    log::info!(
        "Normalized {} facilities from columns {:?}",
        records.len(),
        raw.headers
    );

    Ok(Dataset::new(records, report))
}

/// Extract the district (구) from a Seoul address, e.g.
/// `"서울특별시 중구 세종대로 110"` → `"중구"`. The first match wins.
pub fn extract_district(address: &str) -> Option<&str> {
    DISTRICT_PATTERN
        .captures(address)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

// ---------------------------------------------------------------------------
// Column resolution
// ---------------------------------------------------------------------------

/// Where each canonical field lives in the source table.
struct ColumnMap {
    /// Canonical field → source column indices, in header order.
    fields: BTreeMap<Field, Vec<usize>>,
    /// Unrecognized columns: (index, trimmed header).
    extra: Vec<(usize, String)>,
}

impl ColumnMap {
    fn build(headers: &[String], aliases: &AliasTable) -> Result<Self, SchemaError> {
        if headers.is_empty() {
            return Err(SchemaError::NoHeaders);
        }

        let mut fields: BTreeMap<Field, Vec<usize>> = BTreeMap::new();
        let mut extra = Vec::new();

        for (idx, header) in headers.iter().enumerate() {
            match aliases.resolve(header) {
                Some(field) => fields.entry(field).or_default().push(idx),
                None => {
                    let name = clean_header(header);
                    if !name.is_empty() {
                        extra.push((idx, name.to_string()));
                    }
                }
            }
        }

        for (field, cols) in &fields {
            if cols.len() > 1 {
                log::debug!("{} source columns map to '{field}'", cols.len());
            }
        }

        let missing: Vec<Field> = [Field::Latitude, Field::Longitude]
            .into_iter()
            .filter(|f| !fields.contains_key(f))
            .collect();
        if !missing.is_empty() {
            return Err(SchemaError::MissingColumns {
                missing,
                headers: headers.iter().map(|h| clean_header(h).to_string()).collect(),
            });
        }

        Ok(Self { fields, extra })
    }

    /// First non-empty cell among the columns mapped to `field`.
    fn value<'a>(&self, raw: &'a RawTable, row: usize, field: Field) -> Option<&'a str> {
        self.fields
            .get(&field)?
            .iter()
            .map(|&col| raw.cell(row, col).trim())
            .find(|v| !v.is_empty())
    }

    fn record(&self, raw: &RawTable, row: usize) -> Result<FacilityRecord, DropReason> {
        let (latitude, longitude) = match (
            self.value(raw, row, Field::Latitude),
            self.value(raw, row, Field::Longitude),
        ) {
            (Some(lat), Some(lon)) => (parse_degrees(lat)?, parse_degrees(lon)?),
            _ => return Err(DropReason::MissingCoordinate),
        };
        if !is_valid_coordinate(latitude, longitude) {
            return Err(DropReason::OutOfRange {
                latitude,
                longitude,
            });
        }

        let name = self
            .value(raw, row, Field::Name)
            .or_else(|| self.value(raw, row, Field::BuildingName))
            .unwrap_or_default()
            .to_string();
        let address = self.value(raw, row, Field::Address).map(str::to_string);
        let district = self
            .value(raw, row, Field::District)
            .or_else(|| address.as_deref().and_then(extract_district))
            .map(str::to_string);

        // Repeated headers: the leftmost non-empty cell is kept.
        let mut extra = BTreeMap::new();
        for (col, header) in &self.extra {
            let v = raw.cell(row, *col).trim();
            if !v.is_empty() {
                extra
                    .entry(header.clone())
                    .or_insert_with(|| v.to_string());
            }
        }

        Ok(FacilityRecord {
            source_row: row,
            name,
            latitude,
            longitude,
            operating_hours: self.value(raw, row, Field::OperatingHours).map(str::to_string),
            address,
            district,
            extra,
        })
    }
}

/// A finite decimal; `NaN` and `inf` count as non-numeric.
fn parse_degrees(s: &str) -> Result<f64, DropReason> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DropReason::NotANumber {
            value: s.to_string(),
        })
}
