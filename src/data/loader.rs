use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{
    Array, AsArray, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array,
};
use arrow::datatypes::DataType;
use arrow::util::display::{ArrayFormatter, FormatOptions};
use clap::ValueEnum;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{JobDataset, Row};

/// On-disk layouts the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceFormat {
    Csv,
    Json,
    Parquet,
}

impl SourceFormat {
    /// Guess the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "csv" => Ok(SourceFormat::Csv),
            "json" => Ok(SourceFormat::Json),
            "parquet" | "pq" => Ok(SourceFormat::Parquet),
            other => bail!("Unsupported file extension: .{other}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a job dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row plus one listing per record
/// * `.json`    – `[{ "id": "1", "job_type": "FULL_TIME", ... }, ...]`
/// * `.parquet` – one listing per row, any scalar column types
pub fn load_file(path: &Path) -> Result<JobDataset> {
    let format = SourceFormat::from_path(path)?;
    load_with_format(path, format)
}

/// Load a job dataset, ignoring the file extension.
pub fn load_with_format(path: &Path, format: SourceFormat) -> Result<JobDataset> {
    let dataset = match format {
        SourceFormat::Csv => load_csv(path),
        SourceFormat::Json => load_json(path),
        SourceFormat::Parquet => load_parquet(path),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::info!(
        "Loaded {} rows from {} with columns {:?}",
        dataset.len(),
        path.display(),
        dataset.column_names
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Every cell is kept verbatim.  Records shorter than the header are
/// accepted; their missing trailing fields are simply absent from the row.
fn load_csv(path: &Path) -> Result<JobDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(JobDataset::from_rows(rows))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "id": "1", "job_type": "FULL_TIME", "industry": "Finance",
///     "min_salary": "50000", "max_salary": 70000 },
///   ...
/// ]
/// ```
///
/// Non-string scalars are stringified so every row has the same shape as a
/// CSV row.
fn load_json(path: &Path) -> Result<JobDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut rows = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let row: Row = obj
            .iter()
            .map(|(key, val)| (key.clone(), json_to_text(val)))
            .collect();
        rows.push(row);
    }

    Ok(JobDataset::from_rows(rows))
}

fn json_to_text(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of job listings.
///
/// Every column is stringified, whatever its type; null cells become empty
/// strings, matching what a CSV export of the same table holds.
fn load_parquet(path: &Path) -> Result<JobDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        for row_idx in 0..batch.num_rows() {
            let mut row = Row::new();
            for (col_idx, field) in schema.fields().iter().enumerate() {
                let value = cell_to_text(batch.column(col_idx), row_idx)
                    .with_context(|| format!("Row {row_idx}, column '{}'", field.name()))?;
                row.insert(field.name().clone(), value);
            }
            rows.push(row);
        }
    }

    Ok(JobDataset::from_rows(rows))
}

// -- Parquet / Arrow helpers --

/// Render a single Arrow cell as text.
fn cell_to_text(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        return Ok(String::new());
    }
    let text = match col.data_type() {
        DataType::Utf8 => col.as_string::<i32>().value(row).to_string(),
        DataType::LargeUtf8 => col.as_string::<i64>().value(row).to_string(),
        DataType::Int32 => downcast::<Int32Array>(col)?.value(row).to_string(),
        DataType::Int64 => downcast::<Int64Array>(col)?.value(row).to_string(),
        DataType::Float32 => downcast::<Float32Array>(col)?.value(row).to_string(),
        DataType::Float64 => downcast::<Float64Array>(col)?.value(row).to_string(),
        DataType::Boolean => downcast::<BooleanArray>(col)?.value(row).to_string(),
        _ => display_cell(col, row),
    };
    Ok(text)
}

/// Anything without a dedicated arm (timestamps, dates, decimals, ...) goes
/// through Arrow's own display; cells it cannot render keep the type name.
fn display_cell(col: &Arc<dyn Array>, row: usize) -> String {
    ArrayFormatter::try_new(col.as_ref(), &FormatOptions::default())
        .and_then(|formatter| formatter.value(row).try_to_string())
        .unwrap_or_else(|_| format!("{:?}", col.data_type()))
}

fn downcast<T: Array + 'static>(col: &Arc<dyn Array>) -> Result<&T> {
    col.as_any()
        .downcast_ref::<T>()
        .with_context(|| format!("unexpected array layout for {:?}", col.data_type()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            SourceFormat::from_path(Path::new("jobs.CSV")).unwrap(),
            SourceFormat::Csv
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("jobs.pq")).unwrap(),
            SourceFormat::Parquet
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("data/jobs.json")).unwrap(),
            SourceFormat::Json
        );
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = SourceFormat::from_path(Path::new("jobs.xlsx")).unwrap_err();
        assert!(err.to_string().contains(".xlsx"));
        assert!(SourceFormat::from_path(Path::new("jobs")).is_err());
    }

    #[test]
    fn json_scalars_are_stringified() {
        assert_eq!(json_to_text(&JsonValue::from("abc")), "abc");
        assert_eq!(json_to_text(&JsonValue::from(70000)), "70000");
        assert_eq!(json_to_text(&JsonValue::Null), "");
        assert_eq!(json_to_text(&JsonValue::Bool(true)), "true");
    }
}
