// src/config/mod.rs
pub mod types;

pub use self::types::{Config, LinkRankToml};

use std::path::Path;

use tracing::debug;

use crate::error::{RankError, Result};
use crate::rank::{PageRank, Termination};

/// Config file picked up from the working directory when none is given.
pub const CONFIG_FILE: &str = "linkrank.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a config from defaults and, if present, a TOML file.
    ///
    /// An explicit path must exist; otherwise `linkrank.toml` in the working
    /// directory is used when it exists.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or contains invalid settings.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::new();
        match explicit {
            Some(path) => config.load_file(path)?,
            None if Path::new(CONFIG_FILE).exists() => config.load_file(Path::new(CONFIG_FILE))?,
            None => {}
        }
        Ok(config)
    }

    /// Reads and applies a TOML file on top of the current values.
    ///
    /// # Errors
    /// Returns `RankError::Io` if unreadable, `RankError::Config` if invalid.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path).map_err(|e| RankError::io(path, e))?;
        self.parse_toml(&content)?;
        debug!(path = %path.display(), "loaded config file");
        Ok(())
    }

    /// Applies TOML text on top of the current values.
    ///
    /// # Errors
    /// Returns `RankError::Config` on syntax errors, unknown keys, or
    /// when both `tolerance` and `iterations` are set.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        let file: LinkRankToml = toml::from_str(content)?;
        self.apply(file)
    }

    fn apply(&mut self, file: LinkRankToml) -> Result<()> {
        if let Some(input) = file.input {
            self.input = input;
        }
        if let Some(damping) = file.damping {
            self.damping = damping;
        }
        match (file.tolerance, file.iterations) {
            (Some(_), Some(_)) => {
                return Err(RankError::Config(
                    "`tolerance` and `iterations` are mutually exclusive".to_string(),
                ))
            }
            (Some(tolerance), None) => self.termination = Termination::Converge { tolerance },
            (None, Some(n)) => self.termination = Termination::Exactly(n),
            (None, None) => {}
        }
        if let Some(path) = file.inlinks_output {
            self.inlinks_output = path;
        }
        if let Some(path) = file.pagerank_output {
            self.pagerank_output = path;
        }
        if let Some(k) = file.top_k {
            self.top_k = clamp_top_k(k);
        }
        if let Some(cap) = file.max_iterations {
            self.set_max_iterations(cap);
        }
        Ok(())
    }

    /// Sets the convergence safety cap; `0` disables it.
    pub fn set_max_iterations(&mut self, cap: usize) {
        self.max_iterations = (cap > 0).then_some(cap);
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns error if damping or tolerance are out of range.
    pub fn validate(&self) -> Result<()> {
        self.engine().validate()
    }

    /// The ranking engine described by this config.
    #[must_use]
    pub fn engine(&self) -> PageRank {
        PageRank::new()
            .with_damping(self.damping)
            .with_termination(self.termination)
            .with_max_iterations(self.max_iterations)
    }
}

/// Negative report sizes mean "no rows".
#[must_use]
pub fn clamp_top_k(k: i64) -> usize {
    usize::try_from(k).unwrap_or(0)
}
