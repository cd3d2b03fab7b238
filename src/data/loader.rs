use std::io;
use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
};
use arrow::datatypes::{DataType, Schema};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use thiserror::Error;

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Schema problems that make a source file unusable. There is no repair
/// path: a missing or mistyped column fails the whole load.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("column '{column}' has unsupported type {datatype}")]
    BadColumnType {
        column: &'static str,
        datatype: String,
    },
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

/// Accepted header spellings per column: English field name first, then the
/// Portuguese header of the upstream dataset. CSV and JSON get the same
/// treatment through serde aliases on [`Record`]; Parquet resolves them here.
const COLUMNS: [(&str, &str); 8] = [
    ("year", "ano"),
    ("seniority", "senioridade"),
    ("contract", "contrato"),
    ("company_size", "tamanho_empresa"),
    ("title", "cargo"),
    ("remote", "remoto"),
    ("country_iso3", "residencia_iso3"),
    ("usd", "usd"),
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a salary dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row plus one record per line (the upstream format)
/// * `.json`    – records-oriented array of objects
/// * `.parquet` – flat columns, one per field
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => return Err(SchemaError::UnsupportedExtension(other.to_string()).into()),
    };

    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<Record>> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    parse_csv(file)
}

/// Parse CSV records from any reader. Extra columns are ignored; a missing
/// required column is an error on the first row.
pub fn parse_csv<R: io::Read>(reader: R) -> Result<Vec<Record>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (row_no, result) in csv_reader.deserialize::<Record>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "year": 2024, "seniority": "Senior", "contract": "CLT",
///     "company_size": "M", "title": "Data Scientist", "remote": "Remote",
///     "country_iso3": "USA", "usd": 155000.0 },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<Record>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

pub fn parse_json(text: &str) -> Result<Vec<Record>> {
    serde_json::from_str(text).context("parsing JSON records")
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one flat column per [`Record`] field.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`); string columns may be Utf8 or
/// LargeUtf8, numeric columns any common int/float width.
fn load_parquet(path: &Path) -> Result<Vec<Record>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let idx: Vec<usize> = COLUMNS
            .iter()
            .map(|&(name, alias)| column_index(&schema, name, alias))
            .collect::<Result<_, SchemaError>>()?;

        for row in 0..batch.num_rows() {
            let record = Record {
                year: int_at(batch.column(idx[0]).as_ref(), row, "year")? as i32,
                seniority: string_at(batch.column(idx[1]).as_ref(), row, "seniority")?,
                contract: string_at(batch.column(idx[2]).as_ref(), row, "contract")?,
                company_size: string_at(batch.column(idx[3]).as_ref(), row, "company_size")?,
                title: string_at(batch.column(idx[4]).as_ref(), row, "title")?,
                remote: string_at(batch.column(idx[5]).as_ref(), row, "remote")?,
                country_iso3: string_at(batch.column(idx[6]).as_ref(), row, "country_iso3")?,
                usd: float_at(batch.column(idx[7]).as_ref(), row, "usd")?,
            };
            records.push(record);
        }
    }

    Ok(records)
}

// -- Parquet / Arrow helpers --

fn column_index(schema: &Schema, name: &'static str, alias: &str) -> Result<usize, SchemaError> {
    schema
        .fields()
        .iter()
        .position(|f| f.name() == name || f.name() == alias)
        .ok_or(SchemaError::MissingColumn(name))
}

fn string_at(col: &dyn Array, row: usize, column: &'static str) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in column '{column}' at row {row}");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => Err(SchemaError::BadColumnType {
            column,
            datatype: format!("{other:?}"),
        }
        .into()),
    }
}

fn int_at(col: &dyn Array, row: usize, column: &'static str) -> Result<i64> {
    if col.is_null(row) {
        bail!("null value in column '{column}' at row {row}");
    }
    match col.data_type() {
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            Ok(arr.value(row) as i64)
        }
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            Ok(arr.value(row))
        }
        other => Err(SchemaError::BadColumnType {
            column,
            datatype: format!("{other:?}"),
        }
        .into()),
    }
}

fn float_at(col: &dyn Array, row: usize, column: &'static str) -> Result<f64> {
    match col.data_type() {
        DataType::Float32 => {
            let arr = col.as_any().downcast_ref::<Float32Array>().unwrap();
            Ok(arr.value(row) as f64)
        }
        DataType::Float64 => {
            let arr = col.as_any().downcast_ref::<Float64Array>().unwrap();
            Ok(arr.value(row))
        }
        // Integer-typed salary columns are fine too.
        DataType::Int32 | DataType::Int64 => int_at(col, row, column).map(|v| v as f64),
        other => Err(SchemaError::BadColumnType {
            column,
            datatype: format!("{other:?}"),
        }
        .into()),
    }
}
