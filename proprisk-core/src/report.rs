//! Reporting and output generation
//!
//! Global invariants enforced:
//! - Deterministic output ordering
//! - Byte-for-byte identical output across runs

use crate::input::PropertyRecord;
use crate::market::MarketCyclePhase;
use crate::risk::RiskLevel;
use crate::scoring::{CategoryAssessment, RiskAssessmentResult};
use serde::{Deserialize, Serialize};

/// Complete risk report for one property record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PropertyRiskReport {
    pub file: String,
    pub index: usize,
    pub property: String,
    pub average_rating: f64,
    pub overall_risk: RiskLevel,
    pub market_cycle_phase: MarketCyclePhase,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub key_risk_factors: Vec<String>,
    pub categories: Vec<CategoryAssessment>,
}

impl PropertyRiskReport {
    /// Build a report from a record and its assessment
    pub fn new(record: &PropertyRecord, result: RiskAssessmentResult) -> Self {
        let file = record.source.display().to_string();
        let property = record
            .property
            .label()
            .unwrap_or_else(|| format!("<unnamed>@{}#{}", file, record.index));

        PropertyRiskReport {
            average_rating: result.average_rating(),
            overall_risk: result.overall_risk(),
            market_cycle_phase: result.market_cycle_phase,
            key_risk_factors: result.key_risk_factors,
            categories: result.categories,
            file,
            index: record.index,
            property,
        }
    }
}

/// Sort reports deterministically
pub fn sort_reports(mut reports: Vec<PropertyRiskReport>) -> Vec<PropertyRiskReport> {
    reports.sort_by(|a, b| {
        // 1. Average rating descending
        b.average_rating
            .partial_cmp(&a.average_rating)
            .unwrap_or(std::cmp::Ordering::Equal)
            // 2. File path ascending
            .then_with(|| a.file.cmp(&b.file))
            // 3. Record index ascending
            .then_with(|| a.index.cmp(&b.index))
    });
    reports
}

/// Render reports as text output
///
/// With `explain`, each report is followed by its per-category ratings and
/// the factors that moved them.
pub fn render_text(reports: &[PropertyRiskReport], explain: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<6} {:<10} {:<10} {:<30} {}\n",
        "AVG", "RISK", "CYCLE", "PROPERTY", "KEY RISKS"
    ));

    for report in reports {
        let key_risks = if report.key_risk_factors.is_empty() {
            "-".to_string()
        } else {
            report
                .key_risk_factors
                .iter()
                .map(|s| s.split(':').next().unwrap_or(s.as_str()))
                .collect::<Vec<_>>()
                .join(", ")
        };
        output.push_str(&format!(
            "{:<6.2} {:<10} {:<10} {:<30} {}\n",
            report.average_rating,
            report.overall_risk.as_str(),
            report.market_cycle_phase.as_str(),
            truncate_or_pad(&report.property, 30),
            key_risks,
        ));

        if explain {
            for c in &report.categories {
                output.push_str(&format!(
                    "       {} {:<24} {}\n",
                    c.rating,
                    c.category.as_str(),
                    c.summary
                ));
                for factor in &c.factors {
                    output.push_str(&format!("           - {}\n", factor));
                }
            }
            output.push('\n');
        }
    }

    output
}

/// Render reports as JSON output
pub fn render_json(reports: &[PropertyRiskReport]) -> String {
    serde_json::to_string_pretty(reports).unwrap_or_else(|_| "[]".to_string())
}

/// Truncate or pad string to fixed width
fn truncate_or_pad(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let kept: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        format!("{:<width$}", s, width = width)
    }
}
