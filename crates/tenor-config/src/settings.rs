//! Bootstrap run settings.
//!
//! A settings file has three optional sections; anything left out keeps its
//! default:
//!
//! ```toml
//! [solver]
//! tolerance = 1e-10
//! max_iterations = 200
//!
//! [bootstrap]
//! initial_guess = 0.04
//! sort_by_maturity = true
//!
//! [repricing]
//! tolerance = 1e-8
//! strict = true
//! ```

use serde::{Deserialize, Serialize};

use tenor_curves::bootstrap::{BootstrapConfig, DEFAULT_INITIAL_GUESS};
use tenor_math::numeric::SQRT_EPSILON;
use tenor_math::solvers::{SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

use crate::error::{Validate, ValidationError};

// =============================================================================
// SOLVER SETTINGS
// =============================================================================

/// Secant solver settings used by every bootstrap step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Residual or step size at which a solve stops.
    pub tolerance: f64,
    /// Maximum secant iterations per step.
    pub max_iterations: u32,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl From<SolverSettings> for SolverConfig {
    fn from(settings: SolverSettings) -> Self {
        SolverConfig::new(settings.tolerance, settings.max_iterations)
    }
}

impl Validate for SolverSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !(self.tolerance > 0.0 && self.tolerance <= 1e-4) {
            errors.push(ValidationError::with_rule(
                "tolerance",
                format!("Solver tolerance {} must be in (0, 1e-4]", self.tolerance),
                "valid_tolerance",
            ));
        }

        if self.max_iterations == 0 || self.max_iterations > 10000 {
            errors.push(ValidationError::with_rule(
                "max_iterations",
                "Max iterations must be between 1 and 10000",
                "valid_iterations",
            ));
        }

        errors
    }
}

// =============================================================================
// BOOTSTRAP SETTINGS
// =============================================================================

/// Starting point of the bootstrap loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapSettings {
    /// Time the first instrument extends from.
    pub initial_time: f64,
    /// First forward-rate guess. NaN seeds each step from the curve's own
    /// forward rate.
    pub initial_guess: f64,
    /// Order instruments by maturity before bootstrapping.
    pub sort_by_maturity: bool,
}

impl Default for BootstrapSettings {
    fn default() -> Self {
        Self {
            initial_time: 0.0,
            initial_guess: DEFAULT_INITIAL_GUESS,
            sort_by_maturity: false,
        }
    }
}

impl Validate for BootstrapSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !self.initial_time.is_finite() || self.initial_time < 0.0 {
            errors.push(ValidationError::with_rule(
                "initial_time",
                format!("Initial time {} must be finite and non-negative", self.initial_time),
                "non_negative",
            ));
        }

        if self.initial_guess.is_infinite() || self.initial_guess.abs() > 1.0 {
            errors.push(ValidationError::with_rule(
                "initial_guess",
                format!("Initial guess {} must be NaN or within [-1, 1]", self.initial_guess),
                "valid_rate",
            ));
        }

        errors
    }
}

// =============================================================================
// REPRICING SETTINGS
// =============================================================================

/// How the bootstrapped curve is checked against its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepricingSettings {
    /// Absolute price error accepted per instrument.
    pub tolerance: f64,
    /// Fail the run when any instrument exceeds the tolerance.
    pub strict: bool,
}

impl Default for RepricingSettings {
    fn default() -> Self {
        Self {
            tolerance: SQRT_EPSILON,
            strict: false,
        }
    }
}

impl Validate for RepricingSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            errors.push(ValidationError::with_rule(
                "tolerance",
                format!("Repricing tolerance {} must be positive", self.tolerance),
                "positive",
            ));
        }

        errors
    }
}

// =============================================================================
// TOP-LEVEL CONFIGURATION
// =============================================================================

/// Settings for one bootstrap run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TenorConfig {
    /// Solver settings.
    pub solver: SolverSettings,
    /// Bootstrap loop settings.
    pub bootstrap: BootstrapSettings,
    /// Repricing check settings.
    pub repricing: RepricingSettings,
}

impl TenorConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the solver settings.
    #[must_use]
    pub fn with_solver(mut self, solver: SolverSettings) -> Self {
        self.solver = solver;
        self
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_solver_tolerance(mut self, tolerance: f64) -> Self {
        self.solver.tolerance = tolerance;
        self
    }

    /// Sets the solver iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.solver.max_iterations = max_iterations;
        self
    }

    /// Sets the first forward-rate guess.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.bootstrap.initial_guess = initial_guess;
        self
    }

    /// Sets the time the first instrument extends from.
    #[must_use]
    pub fn with_initial_time(mut self, initial_time: f64) -> Self {
        self.bootstrap.initial_time = initial_time;
        self
    }

    /// Orders instruments by maturity before bootstrapping.
    #[must_use]
    pub fn with_sort_by_maturity(mut self, sort: bool) -> Self {
        self.bootstrap.sort_by_maturity = sort;
        self
    }

    /// Sets the repricing tolerance.
    #[must_use]
    pub fn with_repricing_tolerance(mut self, tolerance: f64) -> Self {
        self.repricing.tolerance = tolerance;
        self
    }

    /// Fails runs whose curve does not reprice every input.
    #[must_use]
    pub fn with_strict_repricing(mut self, strict: bool) -> Self {
        self.repricing.strict = strict;
        self
    }

    /// The solver configuration for each bootstrap step.
    pub fn solver_config(&self) -> SolverConfig {
        self.solver.into()
    }

    /// The bootstrap configuration described by these settings.
    pub fn bootstrap_config(&self) -> BootstrapConfig {
        BootstrapConfig::default()
            .with_initial_time(self.bootstrap.initial_time)
            .with_initial_guess(self.bootstrap.initial_guess)
            .with_solver(self.solver_config())
            .with_repricing_tolerance(self.repricing.tolerance)
    }
}

impl From<&TenorConfig> for BootstrapConfig {
    fn from(config: &TenorConfig) -> Self {
        config.bootstrap_config()
    }
}

impl Validate for TenorConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let solver = self.solver.validate().into_iter().map(|e| e.within("solver"));
        let bootstrap = self
            .bootstrap
            .validate()
            .into_iter()
            .map(|e| e.within("bootstrap"));
        let repricing = self
            .repricing
            .validate()
            .into_iter()
            .map(|e| e.within("repricing"));

        solver.chain(bootstrap).chain(repricing).collect()
    }
}
