//! proprisk CLI - property risk assessment from JSON records

#![deny(warnings)]

// Global invariants enforced:
// - Deterministic output ordering
// - Identical input yields byte-for-byte identical output

use anyhow::Context;
use clap::{Parser, Subcommand};
use proprisk_core::config::{self, ResolvedConfig};
use proprisk_core::{assess_with_config, render_json, render_text, AssessOptions};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "proprisk")]
#[command(about = "Rule-based property risk assessment")]
#[command(version = env!("PROPRISK_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess property records (a JSON file or a directory of JSON files)
    Assess {
        /// Path to property file or directory
        path: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Show only top N results (overrides config file)
        #[arg(long)]
        top: Option<usize>,

        /// Minimum average rating to report (overrides config file)
        #[arg(long)]
        min_average: Option<f64>,

        /// Path to config file (default: auto-discover)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Show per-category ratings and contributing factors (text format only)
        #[arg(long)]
        explain: bool,
    },
    /// Validate or show configuration
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate a config file without running an assessment
    Validate {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Show the resolved configuration (merged defaults + config file)
    Show {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Assess {
            path,
            format,
            top,
            min_average,
            config: config_path,
            explain,
        } => {
            // Normalize path to absolute
            let normalized_path = if path.is_relative() {
                std::env::current_dir()?.join(&path)
            } else {
                path
            };

            // Validate path exists
            if !normalized_path.exists() {
                anyhow::bail!("Path does not exist: {}", normalized_path.display());
            }

            if explain && format != OutputFormat::Text {
                anyhow::bail!("--explain flag is only valid with --format text");
            }

            if let Some(min) = min_average {
                if !(1.0..=5.0).contains(&min) {
                    anyhow::bail!("--min-average must be between 1.0 and 5.0 (got {})", min);
                }
            }

            // Load configuration
            let project_root = project_root(&normalized_path);
            let resolved_config = config::load_and_resolve(&project_root, config_path.as_deref())
                .context("failed to load configuration")?;

            if let Some(config_path) = &resolved_config.config_path {
                log::info!("using config: {}", config_path.display());
            }

            // CLI flags override config file values
            let options = AssessOptions {
                min_average: min_average.or(resolved_config.min_average),
                top_n: top.or(resolved_config.top_n),
            };

            let assessment =
                assess_with_config(&normalized_path, options, Some(&resolved_config))?;

            match format {
                OutputFormat::Text => {
                    print!("{}", render_text(&assessment.reports, explain));
                    if assessment.skipped_files > 0 {
                        eprintln!(
                            "Skipped {} file(s) that could not be read as property records.",
                            assessment.skipped_files
                        );
                    }
                }
                OutputFormat::Json => {
                    println!("{}", render_json(&assessment.reports));
                }
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Validate { path } => {
                let project_root = std::env::current_dir()?;
                let resolved = config::load_and_resolve(&project_root, path.as_deref());

                match resolved {
                    Ok(config) => {
                        if let Some(ref p) = config.config_path {
                            println!("Config valid: {}", p.display());
                        } else {
                            println!("No config file found. Using defaults.");
                        }
                    }
                    Err(e) => {
                        eprintln!("Config validation failed: {:#}", e);
                        std::process::exit(1);
                    }
                }
            }
            ConfigAction::Show { path } => {
                let project_root = std::env::current_dir()?;
                let resolved = config::load_and_resolve(&project_root, path.as_deref())
                    .context("failed to load configuration")?;
                print_config(&resolved);
            }
        },
    }

    Ok(())
}

/// Directory config discovery starts from: the path itself, or a file's parent
fn project_root(path: &Path) -> PathBuf {
    if path.is_file() {
        path.parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| path.to_path_buf())
    } else {
        path.to_path_buf()
    }
}

fn print_config(resolved: &ResolvedConfig) {
    println!("Configuration:");
    if let Some(ref p) = resolved.config_path {
        println!("  Source: {}", p.display());
    } else {
        println!("  Source: defaults (no config file found)");
    }
    println!();
    println!("Key risks:");
    println!("  min_rating: {}", resolved.scorer.key_risk_min_rating);
    println!("  max_factors: {}", resolved.scorer.max_key_risk_factors);
    println!();
    println!("Premium postcodes:");
    for (state, postcodes) in resolved.scorer.premium_postcodes.states() {
        println!("  {}: {}", state, postcodes.join(", "));
    }
    println!();
    println!("Filters:");
    println!(
        "  min_average: {}",
        resolved
            .min_average
            .map(|v| v.to_string())
            .unwrap_or_else(|| "none".to_string())
    );
    println!(
        "  top: {}",
        resolved
            .top_n
            .map(|v| v.to_string())
            .unwrap_or_else(|| "none".to_string())
    );
    println!(
        "  include: {}",
        if resolved.include.is_some() {
            "custom patterns"
        } else {
            "all .json files"
        }
    );
    println!(
        "  exclude: {}",
        if resolved.default_excludes {
            "default patterns"
        } else {
            "custom patterns"
        }
    );
}
