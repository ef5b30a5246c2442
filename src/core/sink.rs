//! CSV output sink.
//!
//! The header is written as soon as the sink is created, so a dataset with
//! zero rows still produces a file with its header line.

use std::{fs::File, io::Write, marker::PhantomData, path::Path};

use crate::{models::CsvRow, CfbdError, Result};

/// Append-only CSV writer for one row type.
pub struct CsvSink<R: CsvRow, W: Write> {
    writer: csv::Writer<W>,
    rows_written: usize,
    _row: PhantomData<R>,
}

impl<R: CsvRow> CsvSink<R, File> {
    /// Create (or truncate) `path`, creating parent directories as needed.
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Self::from_writer(File::create(path)?)
    }
}

impl<R: CsvRow, W: Write> CsvSink<R, W> {
    pub fn from_writer(inner: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(inner);
        writer.write_record(R::HEADERS)?;
        Ok(Self {
            writer,
            rows_written: 0,
            _row: PhantomData,
        })
    }

    /// Append rows and flush, returning how many were written.
    pub fn write_rows(&mut self, rows: &[R]) -> Result<usize> {
        for row in rows {
            self.writer.serialize(row)?;
        }
        self.writer.flush()?;
        self.rows_written += rows.len();
        Ok(rows.len())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| CfbdError::Io(e.into_error()))
    }
}
