use anyhow::Result;
use clap::{Parser, ValueEnum};
use hpfold::core::scoring::BondWeights;
use hpfold::engine::config::SearchConfig;
use hpfold::workflows::search::Strategy;
use std::path::PathBuf;
use std::time::Duration;

/// Fold a residue chain on the 2D HP lattice and report the best fold found.
#[derive(Debug, Parser)]
#[command(name = "hpfold", version, about)]
pub struct Cli {
    /// Residue sequence; 'H' = hydrophobic, 'C' = cysteine, anything else
    /// is polar (case-sensitive).
    #[arg(value_name = "SEQUENCE")]
    pub sequence: String,

    /// Search strategy to run.
    #[arg(short, long, value_enum, default_value_t = StrategyArg::Exhaustive)]
    pub strategy: StrategyArg,

    /// Number of restarts for the random strategy.
    #[arg(long, default_value_t = 1000)]
    pub attempts: usize,

    /// Lookahead window size in residues.
    #[arg(long, default_value_t = 4)]
    pub horizon: usize,

    /// Base RNG seed for the random strategy.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Bias random construction toward cells next to placed H/C residues.
    #[arg(long)]
    pub bias: bool,

    /// Bond-weight table.
    #[arg(long, value_enum, default_value_t = WeightsArg::Standard)]
    pub weights: WeightsArg,

    /// Wall-clock budget in milliseconds; expiring returns the best fold
    /// found so far.
    #[arg(long, value_name = "MILLIS")]
    pub deadline_ms: Option<u64>,

    /// Append the result row as CSV ("-" for stdout).
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Exhaustive,
    Random,
    Lookahead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WeightsArg {
    /// H-H 0.5, H-C 1.0, C-C 2.5.
    Standard,
    /// Hydrophobic contacts only, unit weight.
    HhOnly,
}

impl Cli {
    pub fn strategy(&self) -> Strategy {
        match self.strategy {
            StrategyArg::Exhaustive => Strategy::Exhaustive,
            StrategyArg::Random => Strategy::RandomRestart {
                attempts: self.attempts,
            },
            StrategyArg::Lookahead => Strategy::Lookahead {
                horizon: self.horizon,
            },
        }
    }

    pub fn strategy_name(&self) -> &'static str {
        match self.strategy {
            StrategyArg::Exhaustive => "exhaustive",
            StrategyArg::Random => {
                if self.bias {
                    "greedy"
                } else {
                    "random"
                }
            }
            StrategyArg::Lookahead => "lookahead",
        }
    }

    pub fn search_config(&self) -> Result<SearchConfig> {
        let mut builder = SearchConfig::builder()
            .weights(match self.weights {
                WeightsArg::Standard => BondWeights::standard(),
                WeightsArg::HhOnly => BondWeights::hydrophobic_only(),
            })
            .seed(self.seed)
            .preference_bias(self.bias);
        if let Some(ms) = self.deadline_ms {
            builder = builder.deadline(Duration::from_millis(ms));
        }
        Ok(builder.build()?)
    }

    pub fn csv_target(&self) -> Option<&PathBuf> {
        self.csv.as_ref()
    }
}
