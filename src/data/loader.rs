use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, AsArray};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::RawTable;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read a facility table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row, UTF-8 (a leading BOM is tolerated)
/// * `.json`    – `[{ "위도": 37.56, "경도": 126.97, ... }, ...]`
/// * `.parquet` – any flat schema; every column is read as text
///
/// Cells come back as strings; typing happens in
/// [`normalize`](super::normalize::normalize).
pub fn load_file(path: &Path) -> Result<RawTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::info!(
        "Read {} rows with {} columns from {}",
        table.len(),
        table.headers.len(),
        path.display()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<RawTable> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    read_csv(file)
}

/// Parse CSV from any reader. Rows may have fewer or more cells than the
/// header.
pub fn read_csv<R: std::io::Read>(input: R) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers (is the file UTF-8 encoded?)")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }

    Ok(RawTable::new(headers, rows))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON (`df.to_json(orient='records')`): a top-level array
/// of flat objects. Keys missing from a record read as empty cells.
fn load_json(path: &Path) -> Result<RawTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

pub fn parse_json(text: &str) -> Result<RawTable> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    // Header order: first appearance across records.
    let mut headers: Vec<String> = Vec::new();
    let mut seen = BTreeSet::new();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        for key in obj.keys() {
            if seen.insert(key.clone()) {
                headers.push(key.clone());
            }
        }
    }

    let rows = records
        .iter()
        .filter_map(JsonValue::as_object)
        .map(|obj| {
            headers
                .iter()
                .map(|h| obj.get(h).map(json_to_cell).unwrap_or_default())
                .collect()
        })
        .collect();

    Ok(RawTable::new(headers, rows))
}

fn json_to_cell(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file. Every column is cast to UTF-8 so numeric coordinate
/// columns and text columns come through the same path; nulls become empty
/// cells.
fn load_parquet(path: &Path) -> Result<RawTable> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let headers: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let columns = batch
            .columns()
            .iter()
            .zip(&headers)
            .map(|(col, name)| {
                cast(col, &DataType::Utf8)
                    .with_context(|| format!("column '{name}' cannot be read as text"))
            })
            .collect::<Result<Vec<_>>>()?;

        for row in 0..batch.num_rows() {
            rows.push(
                columns
                    .iter()
                    .map(|col| {
                        if col.is_null(row) {
                            String::new()
                        } else {
                            col.as_string::<i32>().value(row).to_string()
                        }
                    })
                    .collect(),
            );
        }
    }

    Ok(RawTable::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::schema::clean_header;

    #[test]
    fn csv_with_bom_and_short_rows() {
        let input = "\u{feff}위도,경도,화장실명\n37.5663,126.9779,서울광장화장실\n37.5656,126.9784\n";
        let table = read_csv(input.as_bytes()).unwrap();
        assert_eq!(clean_header(&table.headers[0]), "위도");
        assert_eq!(table.headers[1..], ["경도", "화장실명"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(1, 2), "");
    }

    #[test]
    fn csv_rejects_invalid_utf8_headers() {
        // "위도" in EUC-KR
        let input: &[u8] = &[0xc0, 0xa7, 0xb5, 0xb5, b'\n', b'1', b'\n'];
        assert!(read_csv(input).is_err());
    }

    #[test]
    fn json_records_become_rows() {
        let text = r#"[
            {"name": "A", "lat": 37.5663, "lon": 126.9779, "24h": true},
            {"name": "B", "lat": "37.5656", "lon": 126.9784, "hours": null}
        ]"#;
        let table = parse_json(text).unwrap();
        assert_eq!(table.len(), 2);
        let col = |h: &str| table.headers.iter().position(|x| x == h).unwrap();
        assert_eq!(table.cell(0, col("lat")), "37.5663");
        assert_eq!(table.cell(1, col("lat")), "37.5656");
        assert_eq!(table.cell(0, col("24h")), "true");
        assert_eq!(table.cell(1, col("24h")), "");
        assert_eq!(table.cell(1, col("hours")), "");
    }

    #[test]
    fn json_headers_keep_source_order() {
        let text = r#"[
            {"위도": 37.5, "경도": 127.0, "주소": "서울특별시 중구 세종대로 110", "address": "서울특별시 종로구 서린동 14"},
            {"name": "B", "위도": 37.6}
        ]"#;
        let table = parse_json(text).unwrap();
        assert_eq!(table.headers, ["위도", "경도", "주소", "address", "name"]);
        assert_eq!(table.cell(0, 2), "서울특별시 중구 세종대로 110");
        assert_eq!(table.cell(1, 1), "");
    }

    #[test]
    fn json_must_be_array_of_objects() {
        assert!(parse_json(r#"{"lat": 1}"#).is_err());
        assert!(parse_json(r#"[1, 2]"#).is_err());
    }

    #[test]
    fn unsupported_extension() {
        let err = load_file(Path::new("restrooms.xlsx")).unwrap_err();
        assert!(err.to_string().contains(".xlsx"));
    }
}
