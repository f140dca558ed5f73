// crates/engine/src/lib.rs
use std::path::{Path, PathBuf};

pub mod config;
pub mod error;
pub mod filesystem;
pub mod header;
pub mod processor;

use crate::config::Config;
use crate::error::Result;
use crate::processor::{FileOutcome, process_file};

/// Files touched by a completed run, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    pub added: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Walk `config.root` and prepend the license header to every target file
/// that lacks it.
///
/// `on_added` is called with each path just before it is rewritten.
///
/// # Errors
///
/// The first file that cannot be read or written aborts the run. Files
/// rewritten before the failure keep their new content.
pub fn run<F>(config: &Config, mut on_added: F) -> Result<RunResult>
where
    F: FnMut(&Path),
{
    let mut result = RunResult::default();

    for path in filesystem::target_files(config) {
        match process_file(&path, &config.header, &mut on_added)? {
            FileOutcome::Added => result.added.push(path),
            FileOutcome::AlreadyPresent => result.skipped.push(path),
        }
    }

    log::info!(
        "Header added to {} file(s), already present in {}",
        result.added.len(),
        result.skipped.len()
    );
    Ok(result)
}
