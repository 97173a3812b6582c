//! Session replay.
//!
//! Reads one JSON [`Intent`] per line, dispatches each against a fresh
//! storefront and prints the final [`StoreView`](onle_storefront::StoreView)
//! as pretty JSON.
//!
//! Blank lines and lines starting with `#` are skipped. Intents the store
//! rejects (unknown product, size not offered, ...) are logged and the replay
//! continues; a line that is not a valid intent aborts it.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use onle_storefront::{
    Catalog, CatalogError, ContentError, ContentStore, Intent, StoreError, Storefront,
    StorefrontConfig,
};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during replay.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// The bundled catalog failed to load.
    #[error("Failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// The bundled page content failed to load.
    #[error("Failed to load content: {0}")]
    Content(#[from] ContentError),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A line could not be parsed as an intent.
    #[error("Invalid intent on line {line}: {source}")]
    InvalidIntent {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Dispatch failed for a reason other than a rejected intent.
    #[error("Store error on line {line}: {source}")]
    Store {
        line: usize,
        #[source]
        source: StoreError,
    },

    /// The final view could not be serialized.
    #[error("Failed to write view: {0}")]
    Output(#[from] serde_json::Error),
}

/// Outcome counters for a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub rejected: usize,
}

/// Replay the session at `path` (`-` for stdin) and print the final view.
///
/// # Errors
///
/// Returns an error if the input cannot be read, a line is not a valid
/// intent, or the view cannot be written.
pub fn run(path: &str, config: &StorefrontConfig) -> Result<(), ReplayError> {
    let mut store =
        Storefront::new(Catalog::seeded()?, config).with_content(ContentStore::seeded()?);

    let summary = if path == "-" {
        replay(&mut store, io::stdin().lock())?
    } else {
        replay(&mut store, BufReader::new(File::open(path)?))?
    };

    info!(
        applied = summary.applied,
        rejected = summary.rejected,
        "Replay finished"
    );

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &store.view())?;
    writeln!(out)?;
    Ok(())
}

/// Dispatch every intent in `input` against `store`.
///
/// # Errors
///
/// Returns an error on I/O failure or the first unparseable line. Intents
/// already applied stay applied.
pub fn replay<R: BufRead>(store: &mut Storefront, input: R) -> Result<ReplaySummary, ReplayError> {
    let mut summary = ReplaySummary::default();

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let intent: Intent =
            serde_json::from_str(trimmed).map_err(|source| ReplayError::InvalidIntent {
                line: line_number,
                source,
            })?;

        match store.dispatch(intent) {
            Ok(()) => summary.applied += 1,
            Err(e) if e.is_rejection() => {
                warn!(line = line_number, error = %e, "Skipping rejected intent");
                summary.rejected += 1;
            }
            Err(source) => {
                return Err(ReplayError::Store {
                    line: line_number,
                    source,
                });
            }
        }
    }

    Ok(summary)
}
