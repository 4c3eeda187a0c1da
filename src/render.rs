use std::fmt::Write as _;

use serde::Serialize;

use crate::data::model::{LoadReport, ReferencePoint};
use crate::query::NearestFacility;

// ---------------------------------------------------------------------------
// Text table
// ---------------------------------------------------------------------------

const HEADERS: [&str; 5] = ["#", "Name", "Distance", "Hours", "Address"];

/// Render ranked results as an aligned plain-text table.
pub fn text_table(results: &[NearestFacility<'_>]) -> String {
    let rows: Vec<[String; 5]> = results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            [
                (i + 1).to_string(),
                r.record.name.clone(),
                format_distance(r.distance_km),
                r.record.operating_hours.clone().unwrap_or_default(),
                r.record.address.clone().unwrap_or_default(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(display_width);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(display_width(cell));
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let last = cells.len().saturating_sub(1);
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let cell = cell.as_ref();
        out.push_str(cell);
        if i < last {
            let pad = width.saturating_sub(display_width(cell));
            out.extend(std::iter::repeat(' ').take(pad + 2));
        }
    }
    out.push('\n');
}

/// `"24 m"` under a kilometre, `"1.35 km"` beyond.
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{:.0} m", km * 1000.0)
    } else {
        format!("{km:.2} km")
    }
}

/// Terminal columns taken by `s`; Hangul and other East Asian wide
/// characters count double.
fn display_width(s: &str) -> usize {
    s.chars().map(|c| if is_wide(c) { 2 } else { 1 }).sum()
}

fn is_wide(c: char) -> bool {
    matches!(c as u32,
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA960..=0xA97F
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6)
}

/// One-line summary of what was searched.
pub fn summary(reference: ReferencePoint, report: &LoadReport, shown: usize) -> String {
    let mut line = format!(
        "Nearest {shown} of {} facilities to ({reference})",
        report.kept_count()
    );
    if report.dropped_count() > 0 {
        let _ = write!(line, "; {} rows skipped", report.dropped_count());
    }
    line
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    reference: ReferencePoint,
    dataset_size: usize,
    dropped_rows: usize,
    results: Vec<RankedJson<'a>>,
}

#[derive(Debug, Serialize)]
struct RankedJson<'a> {
    rank: usize,
    #[serde(flatten)]
    facility: &'a NearestFacility<'a>,
}

/// Render ranked results as pretty-printed JSON.
pub fn json(
    reference: ReferencePoint,
    report: &LoadReport,
    results: &[NearestFacility<'_>],
) -> serde_json::Result<String> {
    let report = JsonReport {
        reference,
        dataset_size: report.kept_count(),
        dropped_rows: report.dropped_count(),
        results: results
            .iter()
            .enumerate()
            .map(|(i, facility)| RankedJson {
                rank: i + 1,
                facility,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::data::model::FacilityRecord;

    fn record(name: &str) -> FacilityRecord {
        FacilityRecord {
            source_row: 0,
            name: name.to_string(),
            latitude: 37.5663,
            longitude: 126.9779,
            address: Some("서울특별시 중구 세종대로 110".into()),
            operating_hours: Some("09:00~18:00".into()),
            district: Some("중구".into()),
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn distance_units() {
        assert_eq!(format_distance(0.0239), "24 m");
        assert_eq!(format_distance(1.3456), "1.35 km");
    }

    #[test]
    fn hangul_counts_double() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("중구"), 4);
        assert_eq!(display_width("24시간"), 6);
    }

    #[test]
    fn table_lists_results_in_rank_order() {
        let a = record("서울광장화장실");
        let b = record("시청역화장실");
        let results = [
            NearestFacility {
                record: &a,
                distance_km: 0.024,
            },
            NearestFacility {
                record: &b,
                distance_km: 0.106,
            },
        ];
        let table = text_table(&results);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("#  Name"));
        assert!(lines[2].starts_with("1  서울광장화장실"));
        assert!(lines[3].starts_with("2  시청역화장실"));
        assert!(lines[3].contains("106 m"));
    }

    #[test]
    fn json_flattens_record_fields() {
        let a = record("서울광장화장실");
        let results = [NearestFacility {
            record: &a,
            distance_km: 0.024,
        }];
        let text = json(ReferencePoint::new(37.5665, 126.978), &LoadReport::default(), &results)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let first = &value["results"][0];
        assert_eq!(first["rank"], 1);
        assert_eq!(first["name"], "서울광장화장실");
        assert_eq!(first["district"], "중구");
        assert_eq!(first["distance_km"], 0.024);
        assert!(first.get("extra").is_none());
        assert_eq!(value["reference"]["latitude"], 37.5665);
    }
}
