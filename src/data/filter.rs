use std::collections::BTreeSet;

use super::model::FacilityRecord;

// ---------------------------------------------------------------------------
// Filter predicate over facility records
// ---------------------------------------------------------------------------

/// Marker used by the source data for round-the-clock facilities ("24시간").
pub const ALL_DAY_MARKER: &str = "24";

/// A conjunction of optional constraints. The default filter accepts
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacilityFilter {
    /// Only facilities whose operating hours mention "24".
    pub open_24_hours: bool,
    /// Only facilities in one of these districts. Empty means no constraint.
    pub districts: BTreeSet<String>,
    /// Only facilities whose name contains this text.
    pub name_contains: Option<String>,
}

impl FacilityFilter {
    /// Whether any constraint is set.
    pub fn is_active(&self) -> bool {
        self.open_24_hours || !self.districts.is_empty() || self.name_contains.is_some()
    }

    /// A record passes when it satisfies every active constraint.
    ///
    /// * `open_24_hours` → hours text present and contains "24"
    /// * `districts` → record district present and listed
    /// * `name_contains` → substring match on the name
    pub fn matches(&self, record: &FacilityRecord) -> bool {
        if self.open_24_hours && !is_open_24_hours(record) {
            return false;
        }
        if !self.districts.is_empty() {
            match &record.district {
                Some(d) if self.districts.contains(d) => {}
                _ => return false,
            }
        }
        if let Some(needle) = &self.name_contains {
            if !record.name.contains(needle.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Operating hours contain the all-day marker.
pub fn is_open_24_hours(record: &FacilityRecord) -> bool {
    record
        .operating_hours
        .as_deref()
        .is_some_and(|h| h.contains(ALL_DAY_MARKER))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn record(name: &str, hours: Option<&str>, district: Option<&str>) -> FacilityRecord {
        FacilityRecord {
            source_row: 0,
            name: name.to_string(),
            latitude: 37.5,
            longitude: 127.0,
            address: None,
            operating_hours: hours.map(str::to_string),
            district: district.map(str::to_string),
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn default_filter_accepts_everything() {
        let filter = FacilityFilter::default();
        assert!(!filter.is_active());
        assert!(filter.matches(&record("a", None, None)));
    }

    #[test]
    fn open_24_hours_requires_marker() {
        let filter = FacilityFilter {
            open_24_hours: true,
            ..Default::default()
        };
        assert!(filter.matches(&record("a", Some("24시간"), None)));
        assert!(!filter.matches(&record("b", Some("09:00~18:00"), None)));
        assert!(!filter.matches(&record("c", None, None)));
    }

    #[test]
    fn district_filter_excludes_unknown_district() {
        let filter = FacilityFilter {
            districts: ["중구".to_string()].into(),
            ..Default::default()
        };
        assert!(filter.matches(&record("a", None, Some("중구"))));
        assert!(!filter.matches(&record("b", None, Some("종로구"))));
        assert!(!filter.matches(&record("c", None, None)));
    }

    #[test]
    fn constraints_combine() {
        let filter = FacilityFilter {
            open_24_hours: true,
            districts: BTreeSet::new(),
            name_contains: Some("역".to_string()),
        };
        assert!(filter.matches(&record("시청역화장실", Some("24시간"), None)));
        assert!(!filter.matches(&record("서울광장화장실", Some("24시간"), None)));
        assert!(!filter.matches(&record("시청역화장실", Some("06:00~23:00"), None)));
    }
}
