use chrono::{DateTime, Utc};
use firds_benchmarks::{default_taxonomy, BenchmarkTaxonomy, CurrencyMismatchLog};
use log::{debug, info};
use rayon::prelude::*;

use super::batch_model::{BatchOutcome, BatchSettings, SourceSummary, WorkerOutput};
use super::batch_traits::RecordSource;
use super::periods::ensure_single_publication;
use crate::aggregation::{aggregate_trackers, merge_mismatch_logs, merge_taxonomies};
use crate::errors::{Error, Result};
use crate::tracker::{ClassificationContext, Tracker};

/// Runs one worker per source and reconciles their results.
pub struct BatchRunner {
    taxonomy: BenchmarkTaxonomy,
    settings: BatchSettings,
}

impl BatchRunner {
    pub fn new(taxonomy: BenchmarkTaxonomy, settings: BatchSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { taxonomy, settings })
    }

    /// A runner over the built-in taxonomy.
    pub fn with_default_taxonomy(settings: BatchSettings) -> Result<Self> {
        Self::new(default_taxonomy(), settings)
    }

    pub fn taxonomy(&self) -> &BenchmarkTaxonomy {
        &self.taxonomy
    }

    pub fn settings(&self) -> &BatchSettings {
        &self.settings
    }

    /// Classifies every source in parallel and merges the results once all
    /// workers are done. Any worker error fails the whole batch.
    pub fn run<S: RecordSource>(&self, sources: Vec<S>) -> Result<BatchOutcome> {
        let publication_date =
            ensure_single_publication(sources.iter().filter_map(|s| s.publication_date()))?;
        let assessment_date = self.settings.assessment_date.unwrap_or_else(Utc::now);

        let workers = self
            .settings
            .max_workers
            .unwrap_or(sources.len())
            .max(1);
        info!(
            "Starting batch of {} sources on {} workers (assessed at {})",
            sources.len(),
            workers,
            assessment_date
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(|e| Error::WorkerPool(e.to_string()))?;

        let outputs: Vec<WorkerOutput> = pool.install(|| {
            sources
                .into_par_iter()
                .map(|source| self.run_worker(source, assessment_date))
                .collect::<Result<Vec<_>>>()
        })?;

        let seed = Tracker::for_taxonomy(&self.taxonomy);
        let tracker = aggregate_trackers(
            std::iter::once(&seed).chain(outputs.iter().map(|o| &o.tracker)),
        );
        let taxonomy = merge_taxonomies(&self.taxonomy, outputs.iter().map(|o| &o.taxonomy))?;
        let mismatches = merge_mismatch_logs(outputs.iter().map(|o| &o.mismatches));
        let sources: Vec<SourceSummary> = outputs.into_iter().map(|o| o.source).collect();

        info!(
            "Batch complete: {} records read from {} sources, {} floating, {} currency mismatches",
            sources.iter().map(|s| s.records).sum::<u64>(),
            sources.len(),
            tracker.floating,
            mismatches.len()
        );

        Ok(BatchOutcome {
            assessment_date,
            publication_date,
            sources,
            tracker,
            taxonomy,
            mismatches,
        })
    }

    /// Drains one source sequentially against a private taxonomy copy.
    fn run_worker<S: RecordSource>(
        &self,
        source: S,
        assessment_date: DateTime<Utc>,
    ) -> Result<WorkerOutput> {
        let name = source.name().to_string();
        debug!("Worker started on {}", name);

        let mut taxonomy = self.taxonomy.clone();
        let mut mismatches = CurrencyMismatchLog::new();
        let mut tracker = Tracker::for_taxonomy(&taxonomy);
        let mut records = 0u64;

        {
            let mut ctx = ClassificationContext {
                taxonomy: &mut taxonomy,
                mismatches: &mut mismatches,
                assessment_date,
                convert_legacy_currencies: self.settings.convert_legacy_currencies,
            };
            for record in source.into_records() {
                tracker.update(&record?, &mut ctx)?;
                records += 1;
            }
        }

        info!(
            "Worker finished {}: {} records ({} floating, {} fixed)",
            name, records, tracker.floating, tracker.fixed
        );

        Ok(WorkerOutput {
            source: SourceSummary { name, records },
            tracker,
            taxonomy,
            mismatches,
        })
    }
}
