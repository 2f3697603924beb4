//! Analysis configuration
//!
//! Holds the IRR solver settings and the duration fallback used when coercing
//! form input. Defaults reproduce the reference calculator; binaries may
//! override them from the environment.

use serde::{Deserialize, Serialize};
use std::env;

/// Default number of operational months when none (or an invalid one) is supplied
pub const DEFAULT_PROJECT_DURATION: u32 = 24;

/// Newton-Raphson settings for the IRR solver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrrConfig {
    /// Starting periodic rate (0.10 = 10%)
    pub initial_guess: f64,

    /// Convergence threshold on the change in rate between iterations
    pub tolerance: f64,

    /// Hard cap on iterations; the last iterate is returned when reached
    pub max_iterations: u32,
}

impl Default for IrrConfig {
    fn default() -> Self {
        Self {
            initial_guess: 0.10,
            tolerance: 1e-4,
            max_iterations: 50,
        }
    }
}

/// Configuration shared by `analyze_with` and the scenario engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub irr: IrrConfig,

    /// Duration substituted for missing or invalid form input
    pub default_duration: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            irr: IrrConfig::default(),
            default_duration: DEFAULT_PROJECT_DURATION,
        }
    }
}

impl AnalysisConfig {
    /// Build a config from defaults overridden by environment variables:
    ///   IRR_INITIAL_GUESS, IRR_TOLERANCE, IRR_MAX_ITERATIONS, DEFAULT_DURATION
    ///
    /// Unset or unparsable variables keep their default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let initial_guess = lookup("IRR_INITIAL_GUESS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.irr.initial_guess);

        let tolerance = lookup("IRR_TOLERANCE")
            .and_then(|s| s.trim().parse().ok())
            .filter(|t: &f64| *t > 0.0)
            .unwrap_or(defaults.irr.tolerance);

        let max_iterations = lookup("IRR_MAX_ITERATIONS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|n: &u32| *n > 0)
            .unwrap_or(defaults.irr.max_iterations);

        let default_duration = lookup("DEFAULT_DURATION")
            .and_then(|s| s.trim().parse().ok())
            .filter(|d: &u32| *d > 0)
            .unwrap_or(defaults.default_duration);

        let config = Self {
            irr: IrrConfig {
                initial_guess,
                tolerance,
                max_iterations,
            },
            default_duration,
        };
        log::debug!("Analysis config: {:?}", config);
        config
    }
}
