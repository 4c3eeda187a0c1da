use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Field – canonical column identities
// ---------------------------------------------------------------------------

/// The canonical columns a facility table is normalized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Latitude,
    Longitude,
    Name,
    /// Secondary name, used when `Name` is absent or empty.
    BuildingName,
    Address,
    OperatingHours,
    District,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Latitude,
        Field::Longitude,
        Field::Name,
        Field::BuildingName,
        Field::Address,
        Field::OperatingHours,
        Field::District,
    ];

    /// Canonical header name.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::Name => "name",
            Field::BuildingName => "building_name",
            Field::Address => "address",
            Field::OperatingHours => "operating_hours",
            Field::District => "district",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AliasTable – source header → canonical field
// ---------------------------------------------------------------------------

/// Headers seen across Seoul public-restroom exports and hand-made tables.
const DEFAULT_ALIASES: &[(&str, Field)] = &[
    ("위도", Field::Latitude),
    ("lat", Field::Latitude),
    ("Lat", Field::Latitude),
    ("LAT", Field::Latitude),
    ("Latitude", Field::Latitude),
    ("경도", Field::Longitude),
    ("lon", Field::Longitude),
    ("lng", Field::Longitude),
    ("Lon", Field::Longitude),
    ("LON", Field::Longitude),
    ("Longitude", Field::Longitude),
    ("화장실명", Field::Name),
    ("시설명", Field::Name),
    ("이름", Field::Name),
    ("Name", Field::Name),
    ("건물명", Field::BuildingName),
    ("소재지도로명주소", Field::Address),
    ("도로명주소", Field::Address),
    ("주소", Field::Address),
    ("소재지지번주소", Field::Address),
    ("Address", Field::Address),
    ("개방시간", Field::OperatingHours),
    ("개방시간상세", Field::OperatingHours),
    ("운영시간", Field::OperatingHours),
    ("operatingHours", Field::OperatingHours),
    ("hours", Field::OperatingHours),
    ("구", Field::District),
    ("구명", Field::District),
    ("자치구", Field::District),
];

/// Maps source-specific header names to canonical fields.
///
/// Canonical names (`latitude`, `name`, ...) always resolve to themselves,
/// so a table that is already normalized passes through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    aliases: HashMap<String, Field>,
}

impl Default for AliasTable {
    fn default() -> Self {
        DEFAULT_ALIASES
            .iter()
            .fold(Self::empty(), |table, &(alias, field)| {
                table.with_alias(alias, field)
            })
    }
}

impl AliasTable {
    /// A table that only knows the canonical names.
    pub fn empty() -> Self {
        let aliases = Field::ALL
            .iter()
            .map(|f| (f.as_str().to_string(), *f))
            .collect();
        Self { aliases }
    }

    /// Add (or override) one alias.
    pub fn with_alias(mut self, header: impl Into<String>, field: Field) -> Self {
        self.aliases.insert(header.into(), field);
        self
    }

    /// Resolve a header, trimming surrounding whitespace and a leading BOM.
    pub fn resolve(&self, header: &str) -> Option<Field> {
        self.aliases.get(clean_header(header)).copied()
    }
}

/// Strip whitespace and a UTF-8 byte-order mark from a header name.
pub fn clean_header(header: &str) -> &str {
    header.trim().trim_start_matches('\u{feff}').trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_korean_and_english_aliases() {
        let table = AliasTable::default();
        assert_eq!(table.resolve("위도"), Some(Field::Latitude));
        assert_eq!(table.resolve("lat"), Some(Field::Latitude));
        assert_eq!(table.resolve("Latitude"), Some(Field::Latitude));
        assert_eq!(table.resolve("경도"), Some(Field::Longitude));
        assert_eq!(table.resolve("longitude"), Some(Field::Longitude));
        assert_eq!(table.resolve("건물명"), Some(Field::BuildingName));
        assert_eq!(table.resolve("개방시간"), Some(Field::OperatingHours));
    }

    #[test]
    fn trims_headers_before_lookup() {
        let table = AliasTable::default();
        assert_eq!(table.resolve("  위도 "), Some(Field::Latitude));
        assert_eq!(table.resolve("\u{feff}화장실명"), Some(Field::Name));
    }

    #[test]
    fn unknown_headers_stay_unresolved() {
        let table = AliasTable::default();
        assert_eq!(table.resolve("관리기관명"), None);
        assert_eq!(table.resolve(""), None);
    }

    #[test]
    fn custom_alias_extends_empty_table() {
        let table = AliasTable::empty().with_alias("Y", Field::Latitude);
        assert_eq!(table.resolve("Y"), Some(Field::Latitude));
        assert_eq!(table.resolve("latitude"), Some(Field::Latitude));
        assert_eq!(table.resolve("위도"), None);
    }
}
