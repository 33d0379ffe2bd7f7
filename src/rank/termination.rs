// src/rank/termination.rs
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::RankError;

pub const DEFAULT_TOLERANCE: f64 = 0.005;

/// When the power iteration stops.
///
/// Parses from the command-line form: either a tolerance such as `0.005`
/// or `exactly N` for a fixed iteration count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Iterate until the L2 distance between successive vectors drops below `tolerance`.
    Converge { tolerance: f64 },
    /// Run exactly this many iterations.
    Exactly(usize),
}

impl Default for Termination {
    fn default() -> Self {
        Self::Converge {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Termination {
    /// Checks the tolerance is a positive finite number.
    ///
    /// # Errors
    /// Returns `RankError::Config` otherwise.
    pub fn validate(self) -> Result<Self, RankError> {
        match self {
            Self::Converge { tolerance } if !(tolerance.is_finite() && tolerance > 0.0) => Err(
                RankError::Config(format!("tolerance must be positive, got {tolerance}")),
            ),
            other => Ok(other),
        }
    }
}

impl FromStr for Termination {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bad = || RankError::Config(format!("expected a tolerance or `exactly N`, got {s:?}"));

        let is_exactly = s
            .get(..7)
            .is_some_and(|head| head.eq_ignore_ascii_case("exactly"));
        if is_exactly {
            let count = s[7..].trim().parse::<usize>().map_err(|_| bad())?;
            return Ok(Self::Exactly(count));
        }

        let tolerance = s.parse::<f64>().map_err(|_| bad())?;
        Self::Converge { tolerance }.validate()
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Converge { tolerance } => write!(f, "converge (tau = {tolerance})"),
            Self::Exactly(n) => write!(f, "exactly {n}"),
        }
    }
}
