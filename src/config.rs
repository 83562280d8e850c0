use crate::error::{CfResult, CipherError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub scoring: ScoringParams,
    #[command(flatten)]
    pub data: DataPaths,
}

/// Hill-climbing parameters for the substitution breaker.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Independent runs, each from a fresh random key
    #[arg(long, global = true, default_value_t = 20)]
    pub restarts: usize,
    /// Consecutive rejected swaps that end a run
    #[arg(long, global = true, default_value_t = 1500)]
    pub patience: usize,
    /// Spread the runs across the rayon thread pool
    #[arg(long, global = true, default_value_t = true, action = clap::ArgAction::Set)]
    pub parallel: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            restarts: 20,
            patience: 1500,
            parallel: true,
        }
    }
}

/// Quadgram floor and log base. The floor score of an unseen quadgram is
/// `log(floor_count / total)` in `log_base`.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    #[arg(long, global = true, default_value_t = 0.01)]
    pub floor_count: f64,
    #[arg(long, global = true, default_value_t = 10.0)]
    pub log_base: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            floor_count: 0.01,
            log_base: 10.0,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    #[arg(long, global = true, default_value = "data/english_quadgrams.txt")]
    pub quadgrams: PathBuf,
    #[arg(long, global = true, default_value = "data/dictionary.txt")]
    pub dictionary: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            quadgrams: PathBuf::from("data/english_quadgrams.txt"),
            dictionary: PathBuf::from("data/dictionary.txt"),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CipherError::load(path, e))?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Copies every value the user typed on the command line over `self`,
    /// leaving file-provided values alone where clap only filled a default.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(search.restarts);
        update_if_present!(search.patience);
        update_if_present!(search.parallel);

        update_if_present!(scoring.floor_count);
        update_if_present!(scoring.log_base);

        update_if_present!(data.quadgrams);
        update_if_present!(data.dictionary);
    }

    pub fn validate(&self) -> CfResult<()> {
        self.search.validate()?;
        self.scoring.validate()
    }
}

impl SearchParams {
    pub fn validate(&self) -> CfResult<()> {
        if self.restarts == 0 {
            return Err(CipherError::Config("restarts must be at least 1".into()));
        }
        if self.patience == 0 {
            return Err(CipherError::Config("patience must be at least 1".into()));
        }
        Ok(())
    }
}

impl ScoringParams {
    pub fn validate(&self) -> CfResult<()> {
        if !(self.floor_count.is_finite() && self.floor_count > 0.0) {
            return Err(CipherError::Config(format!(
                "floor_count must be positive, got {}",
                self.floor_count
            )));
        }
        if !(self.log_base.is_finite() && self.log_base > 1.0) {
            return Err(CipherError::Config(format!(
                "log_base must be greater than 1, got {}",
                self.log_base
            )));
        }
        Ok(())
    }
}
