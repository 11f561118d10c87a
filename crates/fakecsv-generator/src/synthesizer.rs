//! Table synthesis: drive each field's generator to fill its column.

use crate::registry::FieldSpec;
use fakecsv_core::{SynthError, Table, Value};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Metrics from a synthesis run.
#[derive(Debug, Clone, Default)]
pub struct SynthesisMetrics {
    /// Number of rows generated.
    pub rows: usize,
    /// Number of columns generated.
    pub columns: usize,
    /// Total time taken.
    pub duration: Duration,
}

impl SynthesisMetrics {
    /// Calculate cells per second.
    pub fn cells_per_second(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            (self.rows * self.columns) as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Builds a table column by column from a list of fields.
///
/// Each column is generated independently by invoking its field's generator
/// exactly `row_count` times.
#[derive(Debug, Clone, Copy)]
pub struct TableSynthesizer {
    row_count: usize,
}

impl TableSynthesizer {
    /// Create a synthesizer producing `row_count` rows.
    pub fn new(row_count: usize) -> Self {
        Self { row_count }
    }

    /// Rows produced per table.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Synthesize a table.
    pub fn synthesize(&self, fields: &mut [FieldSpec]) -> Result<Table, SynthError> {
        self.synthesize_with_metrics(fields).map(|(table, _)| table)
    }

    /// Synthesize a table and report timing.
    ///
    /// Fails with [`SynthError::EmptySelection`] when `fields` is empty, whatever
    /// the row count, and with [`SynthError::InvalidNoiseParameter`] for a row
    /// count of zero.
    pub fn synthesize_with_metrics(
        &self,
        fields: &mut [FieldSpec],
    ) -> Result<(Table, SynthesisMetrics), SynthError> {
        if fields.is_empty() {
            return Err(SynthError::EmptySelection);
        }
        if self.row_count == 0 {
            return Err(SynthError::invalid("row_count", self.row_count, ">= 1"));
        }

        let start_time = Instant::now();
        info!(
            "Synthesizing {} rows x {} columns",
            self.row_count,
            fields.len()
        );

        let names: Vec<String> = fields.iter().map(|f| f.name().to_string()).collect();
        let columns: Vec<Vec<Value>> = fields
            .iter_mut()
            .map(|field| {
                let column: Vec<Value> = (0..self.row_count).map(|_| field.generate()).collect();
                debug!("Generated column '{}' ({:?})", field.name(), field.kind());
                column
            })
            .collect();

        let table = Table::from_columns(names, columns)?;

        let metrics = SynthesisMetrics {
            rows: table.row_count(),
            columns: table.column_count(),
            duration: start_time.elapsed(),
        };
        info!(
            "Synthesis complete: {} rows x {} columns in {:?} ({:.0} cells/sec)",
            metrics.rows,
            metrics.columns,
            metrics.duration,
            metrics.cells_per_second()
        );

        Ok((table, metrics))
    }
}

/// Synthesize a table with `row_count` rows from `fields`.
pub fn synthesize(fields: &mut [FieldSpec], row_count: usize) -> Result<Table, SynthError> {
    TableSynthesizer::new(row_count).synthesize(fields)
}
