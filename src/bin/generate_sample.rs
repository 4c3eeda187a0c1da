use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use restroom_locator::data::sample::{SAMPLE_HEADERS, SAMPLE_ROWS};

/// Columns of the sample holding coordinates, written as Float64.
const COORDINATE_COLUMNS: [&str; 2] = ["위도", "경도"];

fn write_csv(path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    writer.write_record(SAMPLE_HEADERS)?;
    for row in &SAMPLE_ROWS {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_parquet(path: &Path) -> Result<()> {
    let mut fields = Vec::new();
    let mut columns: Vec<ArrayRef> = Vec::new();

    for (col, header) in SAMPLE_HEADERS.iter().enumerate() {
        let cells = SAMPLE_ROWS.iter().map(|row| row[col]);
        if COORDINATE_COLUMNS.contains(header) {
            let values = cells
                .map(|c| c.parse::<f64>().with_context(|| format!("{header}: '{c}'")))
                .collect::<Result<Vec<_>>>()?;
            fields.push(Field::new(*header, DataType::Float64, false));
            columns.push(Arc::new(Float64Array::from(values)));
        } else {
            fields.push(Field::new(*header, DataType::Utf8, false));
            columns.push(Arc::new(StringArray::from(cells.collect::<Vec<_>>())));
        }
    }

    let schema = Arc::new(Schema::new(fields));
    let batch = RecordBatch::try_new(schema.clone(), columns).context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing writer")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let csv_path = out_dir.join("sample_restrooms.csv");
    let parquet_path = out_dir.join("sample_restrooms.parquet");

    write_csv(&csv_path).with_context(|| format!("writing {}", csv_path.display()))?;
    write_parquet(&parquet_path)
        .with_context(|| format!("writing {}", parquet_path.display()))?;

    println!(
        "Wrote {} facilities to {} and {}",
        SAMPLE_ROWS.len(),
        csv_path.display(),
        parquet_path.display()
    );
    Ok(())
}
