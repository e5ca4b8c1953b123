//! Tabular exam upload ingestion.
//!
//! Uploads reach the model as plain text. CSV and XLSX files are parsed into
//! a fixed-width table rendering; every other format gets a placeholder that
//! names the file instead of a content-extraction attempt. Parse failures are
//! errors the caller can show — never an empty-but-valid file.

mod table;

pub use table::TextTable;

use std::io::Cursor;

use calamine::{Reader, Xlsx};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upload size cap, checked before any parsing. Rendering multiplies the
/// payload; 10 MiB of cells is already far beyond a useful prompt.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Formats parsed into tables, as named in user-facing messages.
pub const ACCEPTED_FORMATS: &str = "CSV, XLSX";

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("could not parse '{filename}' as CSV: {source}")]
    Csv {
        filename: String,
        source: csv::Error,
    },

    #[error("could not read workbook '{filename}': {source}")]
    Workbook {
        filename: String,
        source: calamine::XlsxError,
    },

    #[error("'{filename}' contains no tabular data")]
    EmptyTable { filename: String },

    #[error("'{filename}' is {size} bytes; uploads are capped at 10 MiB")]
    TooLarge { filename: String, size: usize },
}

/// File format dispatch, decided by extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabularFormat {
    Csv,
    Xlsx,
    Unsupported,
}

impl TabularFormat {
    pub fn from_extension(extension: &str) -> Self {
        match extension {
            "csv" => Self::Csv,
            "xlsx" => Self::Xlsx,
            _ => Self::Unsupported,
        }
    }
}

/// One processed upload. Immutable; a new upload replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestedFile {
    pub filename: String,
    /// Lowercased text after the last dot, empty when the name has none.
    pub extension: String,
    pub body: ExamBody,
}

/// What the upload turned into.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "text")]
pub enum ExamBody {
    /// Fixed-width rendering of the parsed table.
    Table(String),
    /// Placeholder for a format this pipeline does not parse.
    Unsupported(String),
}

impl IngestedFile {
    /// Text destined for the prompt. The unsupported placeholder counts too:
    /// the model is still told that a file exists and what it is called.
    pub fn prompt_text(&self) -> &str {
        match &self.body {
            ExamBody::Table(text) | ExamBody::Unsupported(text) => text,
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self.body, ExamBody::Table(_))
    }
}

/// Ingest an uploaded file, dispatching on its extension.
pub fn ingest(filename: &str, bytes: &[u8]) -> Result<IngestedFile, IngestError> {
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(IngestError::TooLarge {
            filename: filename.to_string(),
            size: bytes.len(),
        });
    }

    let extension = extension_of(filename);
    let body = match TabularFormat::from_extension(&extension) {
        TabularFormat::Csv => ExamBody::Table(read_csv(filename, bytes)?),
        TabularFormat::Xlsx => ExamBody::Table(read_xlsx(filename, bytes)?),
        TabularFormat::Unsupported => {
            tracing::warn!(file = filename, "upload format not parsed, using placeholder");
            ExamBody::Unsupported(unsupported_placeholder(filename))
        }
    };

    if matches!(body, ExamBody::Table(_)) {
        tracing::info!(file = filename, "upload parsed into tabular text");
    }

    Ok(IngestedFile {
        filename: filename.to_string(),
        extension,
        body,
    })
}

fn extension_of(filename: &str) -> String {
    filename
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_lowercase())
        .unwrap_or_default()
}

fn unsupported_placeholder(filename: &str) -> String {
    format!(
        "Uploaded file: {filename}. This format is not parsed automatically \
         (accepted formats: {ACCEPTED_FORMATS}); refer to its contents manually if needed."
    )
}

fn read_csv(filename: &str, bytes: &[u8]) -> Result<String, IngestError> {
    let csv_err = |source| IngestError::Csv {
        filename: filename.to_string(),
        source,
    };

    let mut reader = csv::Reader::from_reader(bytes);
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut table = TextTable::new(headers);
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        table.push_row(record.iter().map(str::to_string).collect());
    }

    if table.is_empty() {
        return Err(IngestError::EmptyTable {
            filename: filename.to_string(),
        });
    }
    Ok(table.render())
}

fn read_xlsx(filename: &str, bytes: &[u8]) -> Result<String, IngestError> {
    let workbook_err = |source| IngestError::Workbook {
        filename: filename.to_string(),
        source,
    };

    let mut workbook = Xlsx::new(Cursor::new(bytes)).map_err(workbook_err)?;
    // First sheet only; the original reader did the same.
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::EmptyTable {
            filename: filename.to_string(),
        })?
        .map_err(workbook_err)?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(row) => row.iter().map(|cell| cell.to_string()).collect(),
        None => Vec::new(),
    };

    let mut table = TextTable::new(headers);
    for row in rows {
        table.push_row(row.iter().map(|cell| cell.to_string()).collect());
    }

    if table.is_empty() {
        return Err(IngestError::EmptyTable {
            filename: filename.to_string(),
        });
    }
    Ok(table.render())
}
