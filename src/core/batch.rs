//! Parallel per-instrument evaluation on tokio blocking workers

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

use crate::indicators::error::IndicatorError;
use crate::models::{PriceSeries, TechnicalReport};
use crate::signals::engine::AnalysisEngine;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Analysis(#[from] IndicatorError),

    /// The worker running the analysis panicked or was cancelled.
    #[error("Analysis task failed: {0}")]
    Task(String),
}

/// Outcome for one instrument, in the order the inputs were given.
#[derive(Debug)]
pub struct InstrumentReport {
    pub symbol: String,
    pub result: Result<TechnicalReport, BatchError>,
}

/// Runs [`AnalysisEngine::analyze`] for many instruments at once.
///
/// Each instrument's series is moved into its own task, so no buffer is
/// shared between concurrent analyses.
pub struct BatchAnalyzer {
    engine: Arc<AnalysisEngine>,
    concurrency: usize,
}

impl BatchAnalyzer {
    /// Concurrency defaults to the number of available CPUs.
    pub fn new(engine: AnalysisEngine) -> Self {
        let concurrency = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self {
            engine: Arc::new(engine),
            concurrency,
        }
    }

    /// Set custom concurrency (minimum 1)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    #[instrument(skip_all, fields(instruments = inputs.len(), concurrency = self.concurrency))]
    pub async fn analyze_all(&self, inputs: Vec<(String, PriceSeries)>) -> Vec<InstrumentReport> {
        let semaphore = Arc::new(Semaphore::new(self.concurrency));

        let handles: Vec<(String, JoinHandle<Result<TechnicalReport, BatchError>>)> = inputs
            .into_iter()
            .map(|(symbol, series)| {
                let engine = self.engine.clone();
                let semaphore = semaphore.clone();
                let handle = tokio::spawn(async move {
                    let permit = semaphore
                        .acquire_owned()
                        .await
                        .map_err(|e| BatchError::Task(e.to_string()))?;
                    tokio::task::spawn_blocking(move || {
                        let _permit = permit;
                        engine.analyze(&series)
                    })
                    .await
                    .map_err(|e| BatchError::Task(e.to_string()))?
                    .map_err(BatchError::from)
                });
                (symbol, handle)
            })
            .collect();

        let mut reports = Vec::with_capacity(handles.len());
        for (symbol, handle) in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => Err(BatchError::Task(e.to_string())),
            };
            if let Err(e) = &result {
                warn!(symbol = %symbol, error = %e, "Instrument analysis failed");
            }
            reports.push(InstrumentReport { symbol, result });
        }

        let failed = reports.iter().filter(|r| r.result.is_err()).count();
        info!(
            succeeded = reports.len() - failed,
            failed,
            "Batch analysis finished"
        );
        reports
    }
}
