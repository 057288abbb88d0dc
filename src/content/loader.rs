// SPDX-License-Identifier: MPL-2.0
//! Catalog loading: manifest, then every listed content file in parallel.
//!
//! Each content file is an independent unit of work. Its fetch or parse
//! failure is wrapped into a [`FileOutcome`] instead of being propagated, so
//! the batch always settles completely and one broken file never hides its
//! siblings. The merge walks outcomes in manifest order, which makes the
//! resulting catalog independent of completion order.

use super::source::Fetch;
use super::{ContentItem, Manifest};
use crate::error::ContentError;
use futures_util::future::join_all;
use serde_json::Value;
use std::collections::HashSet;

/// A content file that was skipped, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub source: String,
    pub reason: String,
}

/// Why a catalog ended up empty. Only the message differs; the list view is
/// empty in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The manifest lists no files.
    NoFilesConfigured,
    /// Every listed file failed.
    AllFilesFailed { failed: usize },
    /// At least one file loaded, but no entry passed validation.
    NoValidEntries { failed: usize },
}

impl EmptyReason {
    /// Returns the i18n message key for this reason.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            EmptyReason::NoFilesConfigured => "list-empty-no-files",
            EmptyReason::AllFilesFailed { .. } => "list-empty-all-failed",
            EmptyReason::NoValidEntries { .. } => "list-empty-no-entries",
        }
    }
}

/// The merged, validated collection produced once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Valid items in manifest order, then in-file order.
    pub items: Vec<ContentItem>,
    /// Files that could not be used.
    pub failures: Vec<FileFailure>,
    /// Entries dropped for missing `id`, `title` or `source`.
    pub dropped_entries: usize,
    /// Number of files listed in the manifest.
    pub files_requested: usize,
}

impl Catalog {
    pub fn empty_reason(&self) -> Option<EmptyReason> {
        if !self.items.is_empty() {
            return None;
        }
        let failed = self.failures.len();
        Some(if self.files_requested == 0 {
            EmptyReason::NoFilesConfigured
        } else if failed == self.files_requested {
            EmptyReason::AllFilesFailed { failed }
        } else {
            EmptyReason::NoValidEntries { failed }
        })
    }
}

/// Result of one content file, success or failure.
#[derive(Debug)]
struct FileOutcome {
    source: String,
    result: Result<Vec<Value>, String>,
}

/// Loads the manifest at `manifest_path`, then every file it lists.
///
/// Returns an error only when the manifest itself is unavailable or has the
/// wrong shape. Per-file problems are recorded in [`Catalog::failures`].
pub async fn load<F: Fetch>(fetcher: &F, manifest_path: &str) -> Result<Catalog, ContentError> {
    let manifest = load_manifest(fetcher, manifest_path).await?;

    if manifest.data_files.is_empty() {
        tracing::info!(manifest = manifest_path, "Manifest lists no content files");
        return Ok(Catalog::default());
    }

    let outcomes = join_all(
        manifest
            .data_files
            .iter()
            .map(|source| load_file(fetcher, source)),
    )
    .await;

    let catalog = merge(manifest.data_files.len(), outcomes);
    tracing::info!(
        items = catalog.items.len(),
        files = catalog.files_requested,
        failed_files = catalog.failures.len(),
        dropped_entries = catalog.dropped_entries,
        "Content catalog loaded"
    );
    Ok(catalog)
}

async fn load_manifest<F: Fetch>(fetcher: &F, path: &str) -> Result<Manifest, ContentError> {
    let bytes = fetcher.fetch(path).await.map_err(|e| {
        tracing::error!(manifest = path, error = %e, "Failed to load manifest");
        ContentError::ManifestUnavailable(e.to_string())
    })?;

    serde_json::from_slice::<Manifest>(&bytes).map_err(|e| {
        tracing::error!(manifest = path, error = %e, "Manifest is missing a 'dataFiles' array");
        ContentError::ManifestInvalid(e.to_string())
    })
}

async fn load_file<F: Fetch>(fetcher: &F, source: &str) -> FileOutcome {
    let result = match fetcher.fetch(source).await {
        Ok(bytes) => parse_entries(&bytes),
        Err(e) => Err(e.to_string()),
    };
    FileOutcome {
        source: source.to_string(),
        result,
    }
}

fn parse_entries(bytes: &[u8]) -> Result<Vec<Value>, String> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| format!("JSON parsing error: {e}"))?;
    match value {
        Value::Array(entries) => Ok(entries),
        _ => Err("JSON data is not an array.".to_string()),
    }
}

fn merge(files_requested: usize, outcomes: Vec<FileOutcome>) -> Catalog {
    let mut entries = Vec::new();
    let mut failures = Vec::new();

    for outcome in outcomes {
        match outcome.result {
            Ok(file_entries) => entries.extend(file_entries),
            Err(reason) => {
                tracing::warn!(source = %outcome.source, %reason, "Skipping content file");
                failures.push(FileFailure {
                    source: outcome.source,
                    reason,
                });
            }
        }
    }

    let mut items = Vec::with_capacity(entries.len());
    let mut dropped_entries = 0;
    for entry in &entries {
        match ContentItem::from_value(entry) {
            Some(item) => items.push(item),
            None => {
                tracing::warn!(entry = %entry, "Skipping invalid comprehension entry");
                dropped_entries += 1;
            }
        }
    }

    // Duplicates are kept; lookups take the first match.
    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert(item.id.as_str()) {
            tracing::debug!(id = %item.id, "Duplicate comprehension id");
        }
    }

    Catalog {
        items,
        failures,
        dropped_entries,
        files_requested,
    }
}
