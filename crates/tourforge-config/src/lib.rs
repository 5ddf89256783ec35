//! Configuration system for TourForge.
//!
//! Load solver configuration from TOML or YAML files to pick a strategy,
//! bound its running time and tune each algorithm without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use tourforge_config::{SolverConfig, StrategyType, ExhaustiveType};
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     strategy = "brute_force"
//!
//!     [termination]
//!     seconds_spent_limit = 30
//!
//!     [exhaustive]
//!     exhaustive_type = "branch_and_bound"
//! "#).unwrap();
//!
//! assert_eq!(config.strategy, StrategyType::BruteForce);
//! assert_eq!(config.exhaustive.exhaustive_type, ExhaustiveType::BranchAndBound);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use tourforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("tourforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Solving strategy to run.
    #[serde(default)]
    pub strategy: StrategyType,

    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    /// Exhaustive search settings.
    #[serde(default)]
    pub exhaustive: ExhaustiveConfig,

    /// 2-opt local search settings.
    #[serde(default)]
    pub local_search: LocalSearchConfig,

    /// Spanning tree approximation settings.
    #[serde(default)]
    pub approximation: ApproximationConfig,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or fails
    /// [`SolverConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects limits that would stop a solver before it starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(termination) = &self.termination {
            if termination.step_count_limit == Some(0) {
                return Err(ConfigError::Invalid(
                    "termination.step_count_limit must be positive".to_string(),
                ));
            }
            if termination.total_millis().is_none() {
                return Err(ConfigError::Invalid(
                    "termination time limit overflows u64 milliseconds".to_string(),
                ));
            }
        }
        if self.exhaustive.node_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "exhaustive.node_limit must be positive".to_string(),
            ));
        }
        if self.local_search.pass_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "local_search.pass_limit must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: StrategyType) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }
}

/// Solving strategy.
///
/// Parses the snake_case configuration names as well as the command line
/// spellings `brute-force`, `2opt`, `christofides` and `approx`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyType {
    /// Exact search over every visiting order.
    #[serde(alias = "brute-force", alias = "exhaustive")]
    BruteForce,

    /// First-improvement 2-opt local search from the identity tour.
    #[default]
    #[serde(alias = "2opt", alias = "2-opt")]
    TwoOpt,

    /// Spanning tree, odd-vertex matching and shortcutting (Christofides-style).
    #[serde(alias = "christofides", alias = "approx")]
    Approximation,
}

impl StrategyType {
    /// All strategies, cheapest-to-describe first.
    pub const ALL: [StrategyType; 3] = [
        StrategyType::BruteForce,
        StrategyType::TwoOpt,
        StrategyType::Approximation,
    ];

    /// Returns the command line name of this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            StrategyType::BruteForce => "brute-force",
            StrategyType::TwoOpt => "2opt",
            StrategyType::Approximation => "christofides",
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brute-force" | "brute_force" | "bruteforce" | "exhaustive" => {
                Ok(StrategyType::BruteForce)
            }
            "2opt" | "2-opt" | "two_opt" | "two-opt" => Ok(StrategyType::TwoOpt),
            "christofides" | "approx" | "approximation" => Ok(StrategyType::Approximation),
            other => Err(ConfigError::Invalid(format!(
                "unknown strategy '{other}' (expected brute-force, 2opt or christofides)"
            ))),
        }
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum milliseconds to spend solving.
    pub millis_spent_limit: Option<u64>,

    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum minutes to spend solving.
    pub minutes_spent_limit: Option<u64>,

    /// Maximum number of steps (permutations or 2-opt passes).
    pub step_count_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    ///
    /// A total beyond `u64::MAX` milliseconds saturates; loaded configs
    /// reject it in [`SolverConfig::validate`].
    pub fn time_limit(&self) -> Option<Duration> {
        let millis = self.total_millis().unwrap_or(u64::MAX);
        if millis > 0 {
            Some(Duration::from_millis(millis))
        } else {
            None
        }
    }

    /// Sum of all time limits in milliseconds, `None` on overflow.
    fn total_millis(&self) -> Option<u64> {
        let seconds = self.seconds_spent_limit.unwrap_or(0).checked_mul(1_000)?;
        let minutes = self.minutes_spent_limit.unwrap_or(0).checked_mul(60_000)?;
        self.millis_spent_limit
            .unwrap_or(0)
            .checked_add(seconds)?
            .checked_add(minutes)
    }
}

/// Exhaustive search configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ExhaustiveConfig {
    /// Exhaustive search type.
    #[serde(default)]
    pub exhaustive_type: ExhaustiveType,

    /// Maximum number of complete tours to evaluate (None = unlimited).
    pub node_limit: Option<u64>,
}

/// Exhaustive search types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustiveType {
    /// Evaluate every permutation.
    #[default]
    BruteForce,

    /// Depth-first search pruning partial routes that cannot win.
    BranchAndBound,
}

/// 2-opt local search configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LocalSearchConfig {
    /// Maximum number of improvement passes (None = until no move improves).
    pub pass_limit: Option<u64>,
}

/// Spanning tree approximation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ApproximationConfig {
    /// How odd-degree spanning tree vertices are paired.
    #[serde(default)]
    pub matching_type: MatchingType,
}

/// Odd-degree vertex matching types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingType {
    /// Pair each vertex with its nearest remaining partner.
    #[default]
    Greedy,

    /// Minimum-weight perfect matching (small odd sets only).
    Exact,
}
