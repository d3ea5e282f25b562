//! Command-line flags layered over an optional TOML file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use dp_core::TableConfig;

#[derive(Parser, Debug, Default)]
#[command(name = "dining")]
#[command(about = "Dining philosophers: N threads sharing N forks without deadlock")]
pub struct Cli {
    /// TOML file with philosopher_count, min_delay_ms, max_delay_ms and seed
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of philosophers (and forks), at least 2
    #[arg(short = 'n', long)]
    pub philosophers: Option<usize>,

    /// Shortest think/eat delay in milliseconds
    #[arg(long)]
    pub min_delay_ms: Option<u64>,

    /// Longest think/eat delay in milliseconds (exclusive)
    #[arg(long)]
    pub max_delay_ms: Option<u64>,

    /// Seed for reproducible delays
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Defaults, then the config file, then flags.  The result is validated.
    pub fn resolve(&self) -> Result<TableConfig> {
        let base = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                parse_config(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => TableConfig::default(),
        };
        let config = self.apply(base);
        config.validate()?;
        Ok(config)
    }

    fn apply(&self, mut config: TableConfig) -> TableConfig {
        if let Some(n) = self.philosophers {
            config.philosopher_count = n;
        }
        if let Some(ms) = self.min_delay_ms {
            config.min_delay_ms = ms;
        }
        if let Some(ms) = self.max_delay_ms {
            config.max_delay_ms = ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}

fn parse_config(text: &str) -> Result<TableConfig> {
    Ok(toml::from_str(text)?)
}
