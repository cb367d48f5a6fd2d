//! Slotpage Runtime
//!
//! Minimal binary that drives a slot table through a fill/drain/refill
//! workload and reports its paging stats.

mod settings;

use anyhow::Result;
use settings::Settings;
use slot_core::SlotTable;
use slot_metrics::SystemProfiler;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Slots per page for the demo table.
const PAGE_CAPACITY: usize = 64;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Slotpage v{}", slot_core::VERSION);

    let settings = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            tracing::info!("Loading settings from {}", path.display());
            Settings::load(&path)?
        }
        None => Settings::default(),
    };
    tracing::info!(?settings, "Settings ready");

    let mut profiler = SystemProfiler::new();
    let mut table: SlotTable<u64, PAGE_CAPACITY> = SlotTable::with_config(&settings.table);
    run_workload(&mut table, &settings, &mut profiler);

    for (phase, elapsed) in profiler.iter() {
        tracing::info!(phase, ?elapsed, "Phase timing");
    }
    println!("{}", serde_json::to_string_pretty(&table.stats())?);

    Ok(())
}

fn run_workload<const S: usize>(
    table: &mut SlotTable<u64, S>,
    settings: &Settings,
    profiler: &mut SystemProfiler,
) {
    let values = settings.workload.values as u64;
    let stride = settings.workload.drain_stride;

    let indices: Vec<usize> = profiler.time_system("fill", || {
        (0..values).map(|value| table.insert(value)).collect()
    });
    tracing::info!(items = table.count(), pages = table.page_count(), "Filled table");

    let drained = profiler.time_system("drain", || {
        indices
            .iter()
            .step_by(stride)
            .filter_map(|&index| table.remove_by_index(index))
            .count()
    });
    tracing::info!(
        drained,
        pages = table.page_count(),
        free_page_ids = table.free_page_ids().len(),
        "Drained table"
    );

    profiler.time_system("refill", || {
        for value in 0..drained as u64 {
            table.insert(values + value);
        }
    });
    tracing::info!(items = table.count(), pages = table.page_count(), "Refilled table");
}
