//! Data validation utilities.
//!
//! Every `*.ron` file in a directory is checked: files ending in
//! `.rules.ron` must parse as rules, every other one as a scenario without
//! [`Scenario::problems`].

use std::path::{Path, PathBuf};

use crate::scenario::{load_rules, Scenario, ScenarioError};

/// Outcome of validating a directory.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Files checked.
    pub checked: usize,
    /// Each failing file with what is wrong with it.
    pub failures: Vec<(PathBuf, String)>,
}

impl ValidationReport {
    /// Whether every file passed.
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

fn is_rules_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".rules.ron"))
}

fn check_file(path: &Path) -> Result<(), String> {
    if is_rules_file(path) {
        return load_rules(path).map(|_| ()).map_err(|e| e.to_string());
    }
    let scenario = Scenario::load(path).map_err(|e| e.to_string())?;
    let problems = scenario.problems();
    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems.join("; "))
    }
}

/// Validate all RON data files in a directory.
///
/// # Errors
///
/// Returns an error if the directory itself cannot be read. Problems with
/// individual files are collected in the report.
pub fn validate_data_directory(path: &Path) -> Result<ValidationReport, ScenarioError> {
    if !path.is_dir() {
        return Err(ScenarioError::FileNotFound(path.display().to_string()));
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(path)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "ron"))
        .collect();
    files.sort();

    let mut report = ValidationReport::default();
    for file in files {
        report.checked += 1;
        match check_file(&file) {
            Ok(()) => tracing::debug!("Valid: {}", file.display()),
            Err(message) => {
                tracing::warn!("Invalid: {}: {message}", file.display());
                report.failures.push((file, message));
            }
        }
    }
    Ok(report)
}
