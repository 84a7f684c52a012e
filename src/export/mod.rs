// SPDX-License-Identifier: MPL-2.0
//! Table export: snapshot an on-screen table, serialize it, save it to disk.
//!
//! PDF stays unsupported, as in the portal: picking it raises an info toast
//! and nothing else happens.

pub mod csv;
pub mod excel;
pub mod table;

pub use table::{DataTable, INVENTORY_TABLE_ID, REQUESTS_TABLE_ID};

use crate::error::Result;

/// Toast text shown when PDF export is requested.
pub const PDF_UNSUPPORTED_TEXT: &str = "PDF export requires additional setup";

/// Output format of an export job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Excel,
    Pdf,
}

impl ExportFormat {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Excel => "Excel",
            ExportFormat::Pdf => "PDF",
        }
    }
}

/// One-shot conversion of an on-screen table to a downloadable file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    pub format: ExportFormat,
    pub table_id: String,
}

impl ExportJob {
    #[must_use]
    pub fn new(format: ExportFormat, table_id: impl Into<String>) -> Self {
        Self {
            format,
            table_id: table_id.into(),
        }
    }
}

/// A serialized export ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub file_name: &'static str,
    pub contents: String,
}

/// Serializes `table` in the job's format.
///
/// Returns `Ok(None)` for PDF; callers report the unsupported format to the
/// user instead of opening a save dialog.
pub fn render(job: &ExportJob, table: &DataTable) -> Result<Option<Rendered>> {
    let (file_name, contents) = match job.format {
        ExportFormat::Csv => ("export.csv", csv::serialize(table)),
        ExportFormat::Excel => ("export.xls", excel::serialize(table)?),
        ExportFormat::Pdf => return Ok(None),
    };

    Ok(Some(Rendered { file_name, contents }))
}
