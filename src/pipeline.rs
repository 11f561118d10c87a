//! One generation run: build fields, synthesize, inject noise, publish.

use fakecsv_core::{RunConfig, SynthError, Table, TableSlot};
use fakecsv_generator::{GeneratorRegistry, SynthesisMetrics, TableSynthesizer};
use fakecsv_noise::{NoiseInjector, NoiseReport};
use std::sync::Arc;
use tracing::{info, warn};

/// Largest accepted row count.
pub const MAX_ROW_COUNT: usize = 1_000_000;

/// Row counts above this are accepted but logged as large.
pub const LARGE_ROW_COUNT: usize = 10_000;

/// Offset separating the noise stream from the field streams of a run.
const NOISE_SEED_OFFSET: u64 = 0xD1B5_4A32_D192_ED03;

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Table now held by the slot
    pub table: Arc<Table>,
    /// Seed actually used
    pub seed: u64,
    /// Synthesis timing
    pub synthesis: SynthesisMetrics,
    /// What noise injection changed
    pub noise: NoiseReport,
}

/// Seed for a run: the configured one, or a fresh random seed.
pub fn resolve_seed(config: &RunConfig) -> u64 {
    config.seed.unwrap_or_else(rand::random)
}

/// Build a table from `config` without touching any slot.
pub fn build_table(config: &RunConfig, seed: u64) -> Result<(Table, SynthesisMetrics, NoiseReport), SynthError> {
    if config.is_empty_selection() {
        return Err(SynthError::EmptySelection);
    }
    config.validate()?;
    if config.row_count > MAX_ROW_COUNT {
        return Err(SynthError::invalid("row_count", config.row_count, "<= 1000000"));
    }
    if config.row_count > LARGE_ROW_COUNT {
        warn!(
            "Generating {} rows; more than {} rows may be slow to export",
            config.row_count, LARGE_ROW_COUNT
        );
    }

    let mut fields = GeneratorRegistry::from_config(config, seed).into_fields();
    let (mut table, synthesis) =
        TableSynthesizer::new(config.row_count).synthesize_with_metrics(&mut fields)?;

    let noise = NoiseInjector::seeded(seed.wrapping_add(NOISE_SEED_OFFSET))
        .apply(&mut table, &config.noise())?;

    Ok((table, synthesis, noise))
}

/// Run the full pipeline and publish the result to `slot`.
///
/// On failure the slot keeps whatever table it held before.
pub fn run(config: &RunConfig, slot: &TableSlot) -> Result<RunOutcome, SynthError> {
    let seed = resolve_seed(config);
    info!(
        "Starting run: locale={}, rows={}, null_percent={}, duplicates={} (seed={})",
        config.locale, config.row_count, config.null_percent, config.duplicates, seed
    );

    let (table, synthesis, noise) = build_table(config, seed)?;
    let table = Arc::new(table);
    slot.replace(Arc::clone(&table));

    info!(
        "Run complete: {} rows x {} columns ({} nulls, {} duplicates)",
        table.row_count(),
        table.column_count(),
        noise.total_nulls(),
        noise.duplicates_appended
    );

    Ok(RunOutcome {
        table,
        seed,
        synthesis,
        noise,
    })
}
