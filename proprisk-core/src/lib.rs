//! proprisk core library - rule-based property risk assessment

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Scoring is strictly per-property and pure
// - No global mutable state
// - No randomness, clocks, threads, or async
// - Deterministic file and record order must be explicit
// - Identical input yields byte-for-byte identical output

pub mod config;
pub mod input;
pub mod market;
pub mod postcodes;
pub mod property;
pub mod report;
pub mod risk;
pub mod scoring;

pub use config::ResolvedConfig;
pub use market::MarketCyclePhase;
pub use property::{MarketConditions, PriceMovement, PropertyAttributes, SalesActivity};
pub use report::{render_json, render_text, sort_reports, PropertyRiskReport};
pub use risk::{RiskCategory, RiskLevel};
pub use scoring::{evaluate, CategoryAssessment, RiskAssessmentResult, RiskScorer, ScorerSettings};

use anyhow::Result;
use std::path::Path;

pub struct AssessOptions {
    pub min_average: Option<f64>,
    pub top_n: Option<usize>,
}

/// Reports for an assessed path, plus the directory files that failed to load
#[derive(Debug)]
pub struct Assessment {
    pub reports: Vec<PropertyRiskReport>,
    pub skipped_files: usize,
}

/// Assess property files at the given path with default configuration
pub fn assess(path: &Path, options: AssessOptions) -> Result<Assessment> {
    assess_with_config(path, options, None)
}

/// Assess property files at the given path with optional resolved configuration
pub fn assess_with_config(
    path: &Path,
    options: AssessOptions,
    resolved_config: Option<&ResolvedConfig>,
) -> Result<Assessment> {
    let scorer = match resolved_config {
        Some(config) => RiskScorer::new(config.scorer.clone()),
        None => RiskScorer::default(),
    };

    let loaded = input::load_records(path, resolved_config)?;
    log::debug!(
        "assessing {} record(s) from {} (key risks: rating >= {}, at most {})",
        loaded.records.len(),
        path.display(),
        scorer.settings().key_risk_min_rating,
        scorer.settings().max_key_risk_factors
    );

    let reports: Vec<PropertyRiskReport> = loaded
        .records
        .iter()
        .map(|record| PropertyRiskReport::new(record, scorer.evaluate(&record.property)))
        .filter(|report| {
            options
                .min_average
                .map(|min| report.average_rating >= min)
                .unwrap_or(true)
        })
        .collect();

    // Sort deterministically
    let sorted_reports = sort_reports(reports);

    // Apply top_n filter if specified
    let final_reports = if let Some(top_n) = options.top_n {
        sorted_reports.into_iter().take(top_n).collect()
    } else {
        sorted_reports
    };

    Ok(Assessment {
        reports: final_reports,
        skipped_files: loaded.skipped_files,
    })
}
