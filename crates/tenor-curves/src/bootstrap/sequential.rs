//! Sequential bootstrap algorithm.
//!
//! Bootstraps a piecewise-flat forward curve by solving for one forward
//! rate per instrument, each on the curve built from the instruments before
//! it.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tenor_math::numeric::{is_sentinel_pair, NAN, SQRT_EPSILON};
use tenor_math::solvers::{Secant, SolverConfig};

use crate::curves::{extrapolate, PiecewiseFlat};
use crate::error::{CurveError, CurveResult};
use crate::instruments::{Instrument, QuotedInstrument};
use crate::repricing::{validate_repricing, BootstrapResult, BuildTimer};
use crate::traits::Curve;
use crate::valuation::present;

/// Starting guess for the first forward rate of a batch bootstrap.
pub const DEFAULT_INITIAL_GUESS: f64 = 0.03;

/// Guess used when neither the caller nor the curve supplies one.
pub const FALLBACK_GUESS: f64 = 0.01;

/// Distance between the two secant seeds.
const SEED_STEP: f64 = 0.01;

/// Solves for the knot that reprices `instrument` at `price`.
///
/// The curve is extended flat from its last time `t` at a trial rate and the
/// rate is searched until the instrument's present value equals `price`.
/// The returned knot sits at the instrument's last cash-flow time.
///
/// A NaN `f_guess` falls back to `curve.forward(t)` and then to
/// [`FALLBACK_GUESS`].
///
/// Returns `(NaN, NaN)` if the instrument does not extend past `t` or the
/// solve does not converge.
///
/// # Example
///
/// ```rust
/// use tenor_curves::bootstrap::bootstrap0;
/// use tenor_curves::curves::ConstantCurve;
/// use tenor_curves::instruments::ZeroCouponBond;
///
/// let r: f64 = 0.1;
/// let zcb = ZeroCouponBond::new(1.0, r.exp()).unwrap();
///
/// let (t, f) = bootstrap0(&zcb, &ConstantCurve::default(), 0.0, 0.2, 1.0);
///
/// assert_eq!(t, 1.0);
/// assert!((f - r).abs() < 1e-8);
/// ```
pub fn bootstrap0<I, C>(instrument: &I, curve: &C, t: f64, f_guess: f64, price: f64) -> (f64, f64)
where
    I: Instrument + ?Sized,
    C: Curve + ?Sized,
{
    bootstrap0_with(
        instrument,
        curve,
        t,
        f_guess,
        price,
        &SolverConfig::default(),
    )
}

/// [`bootstrap0`] with explicit solver tolerance and iteration budget.
pub fn bootstrap0_with<I, C>(
    instrument: &I,
    curve: &C,
    t: f64,
    f_guess: f64,
    price: f64,
    config: &SolverConfig,
) -> (f64, f64)
where
    I: Instrument + ?Sized,
    C: Curve + ?Sized,
{
    let (u_last, _) = instrument.last();
    if u_last.is_nan() || t.is_nan() || u_last <= t {
        debug!("maturity {u_last} does not extend the curve past {t}");
        return (NAN, NAN);
    }

    let mut guess = f_guess;
    if guess.is_nan() {
        guess = curve.forward(t);
    }
    if guess.is_nan() {
        guess = FALLBACK_GUESS;
    }

    let result = Secant::new(guess, guess + SEED_STEP)
        .with_config(config)
        .solve(|f| present(instrument, &extrapolate(curve, t, f)) - price);

    if !result.is_converged() {
        warn!(
            "no forward rate past {t} reprices {} at {price}: {:?} after {} iterations (|residual| {:.3e})",
            instrument.description(),
            result.status,
            result.iterations,
            result.tolerance
        );
        return (NAN, NAN);
    }

    (u_last, result.root)
}

/// Bootstraps a curve from instruments and prices, in input order.
///
/// `t0` is the time the first instrument extends from and `f0` the first
/// solver guess; each later step is seeded with the previous forward rate.
/// Starting from `t0 > 0` needs a curve to extend, so batch bootstraps
/// normally use `t0 = 0`.
///
/// # Errors
///
/// - [`CurveError::SizeMismatch`] if the slices differ in length
/// - [`CurveError::BootstrapFailed`] with the 1-based position of the first
///   instrument that yields no knot
///
/// Empty input returns an empty curve.
pub fn bootstrap<I: Instrument>(
    instruments: &[I],
    prices: &[f64],
    t0: f64,
    f0: f64,
) -> CurveResult<PiecewiseFlat> {
    let config = BootstrapConfig::default()
        .with_initial_time(t0)
        .with_initial_guess(f0);

    bootstrap_with(instruments, prices, &config)
}

/// [`bootstrap`] driven by a [`BootstrapConfig`].
///
/// # Errors
///
/// As [`bootstrap`], plus [`CurveError::Math`] for an invalid solver
/// configuration.
pub fn bootstrap_with<I: Instrument>(
    instruments: &[I],
    prices: &[f64],
    config: &BootstrapConfig,
) -> CurveResult<PiecewiseFlat> {
    if instruments.len() != prices.len() {
        return Err(CurveError::size_mismatch(instruments.len(), prices.len()));
    }
    config.solver.validate()?;

    let mut curve = PiecewiseFlat::empty();
    let mut t = config.initial_time;
    let mut f = config.initial_guess;

    for (k, (instrument, &price)) in instruments.iter().zip(prices).enumerate() {
        let index = k + 1;
        let knot = bootstrap0_with(instrument, &curve, t, f, price, &config.solver);

        if is_sentinel_pair(knot) {
            let maturity = instrument.maturity();
            let reason = if maturity.is_nan() || maturity <= t {
                format!("maturity does not extend the curve past {t:.6}")
            } else {
                format!("no forward rate reprices the price {price}")
            };
            warn!(
                "bootstrap stopped at instrument {index} ({}): {reason}",
                instrument.description()
            );
            return Err(CurveError::bootstrap_failed(index, maturity, reason));
        }

        let (u, rate) = knot;
        curve.push_back(u, rate)?;
        debug!("knot {index}: t = {u:.6}, f = {rate:.10}");

        t = u;
        f = rate;
    }

    Ok(curve)
}

/// Configuration for sequential bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Time the first instrument extends from.
    pub initial_time: f64,
    /// First solver guess for the forward rate.
    pub initial_guess: f64,
    /// Secant tolerance and iteration budget for every step.
    pub solver: SolverConfig,
    /// Absolute price error accepted when repricing the inputs.
    pub repricing_tolerance: f64,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            initial_time: 0.0,
            initial_guess: DEFAULT_INITIAL_GUESS,
            solver: SolverConfig::default(),
            repricing_tolerance: SQRT_EPSILON,
        }
    }
}

impl BootstrapConfig {
    /// Sets the initial time.
    #[must_use]
    pub fn with_initial_time(mut self, t0: f64) -> Self {
        self.initial_time = t0;
        self
    }

    /// Sets the first forward-rate guess.
    #[must_use]
    pub fn with_initial_guess(mut self, f0: f64) -> Self {
        self.initial_guess = f0;
        self
    }

    /// Sets the solver configuration.
    #[must_use]
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Sets the repricing tolerance.
    #[must_use]
    pub fn with_repricing_tolerance(mut self, tolerance: f64) -> Self {
        self.repricing_tolerance = tolerance;
        self
    }

    /// Checks the solver settings, a finite non-negative initial time and a
    /// positive repricing tolerance.
    ///
    /// A NaN initial guess is accepted: each step then falls back to the
    /// curve's forward rate.
    pub fn validate(&self) -> CurveResult<()> {
        self.solver.validate()?;

        if !self.initial_time.is_finite() || self.initial_time < 0.0 {
            return Err(CurveError::invalid_value(format!(
                "initial_time must be finite and non-negative, got {}",
                self.initial_time
            )));
        }
        if self.initial_guess.is_infinite() {
            return Err(CurveError::invalid_value("initial_guess must not be infinite"));
        }
        if self.repricing_tolerance.is_nan() || self.repricing_tolerance <= 0.0 {
            return Err(CurveError::invalid_value(format!(
                "repricing_tolerance must be positive, got {}",
                self.repricing_tolerance
            )));
        }
        Ok(())
    }
}

/// Sequential bootstrapper over a mixed set of instruments.
///
/// Instruments are bootstrapped in the order they were added. Call
/// [`sorted`](Self::sorted) to order them by maturity first; error indices
/// then refer to the sorted order.
///
/// # Example
///
/// ```rust
/// use tenor_curves::bootstrap::SequentialBootstrapper;
/// use tenor_curves::instruments::{Bond, Deposit, ForwardRateAgreement, Frequency};
///
/// let result = SequentialBootstrapper::new()
///     .add_instrument(Deposit::new(0.05, 1.0).unwrap(), Deposit::PRICE)
///     .add_instrument(ForwardRateAgreement::new(0.055, 1.0, 2.0).unwrap(), 0.0)
///     .add_instrument(Bond::new(5.0, 0.05, Frequency::Annual).unwrap(), 0.99)
///     .bootstrap_validated()
///     .unwrap();
///
/// assert!(result.is_valid());
/// assert_eq!(result.curve.times(), &[1.0, 2.0, 5.0]);
/// ```
#[derive(Debug, Default)]
pub struct SequentialBootstrapper {
    /// Instruments to bootstrap.
    instruments: Vec<Box<dyn Instrument>>,
    /// Market price of each instrument.
    prices: Vec<f64>,
    /// Bootstrap configuration.
    config: BootstrapConfig,
}

impl SequentialBootstrapper {
    /// Creates an empty bootstrapper with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a bootstrapper from serialized quotes.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidInstrument`] naming the 1-based position
    /// of the first quote that does not build or has no price.
    pub fn from_quotes(quotes: &[QuotedInstrument]) -> CurveResult<Self> {
        let mut bootstrapper = Self::new();

        for (k, quote) in quotes.iter().enumerate() {
            let (instrument, price) = quote.resolve().map_err(|e| {
                CurveError::invalid_instrument(format!("quote {}: {e}", k + 1))
            })?;
            bootstrapper = bootstrapper.add_boxed(instrument, price);
        }

        Ok(bootstrapper)
    }

    /// Sets the bootstrap configuration.
    #[must_use]
    pub fn with_config(mut self, config: BootstrapConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds an instrument and its market price.
    #[must_use]
    pub fn add_instrument<I: Instrument + 'static>(self, instrument: I, price: f64) -> Self {
        self.add_boxed(Box::new(instrument), price)
    }

    /// Adds an already boxed instrument and its market price.
    #[must_use]
    pub fn add_boxed(mut self, instrument: Box<dyn Instrument>, price: f64) -> Self {
        self.instruments.push(instrument);
        self.prices.push(price);
        self
    }

    /// Adds multiple `(instrument, price)` pairs.
    #[must_use]
    pub fn add_instruments<I: Instrument + 'static>(
        mut self,
        instruments: impl IntoIterator<Item = (I, f64)>,
    ) -> Self {
        for (instrument, price) in instruments {
            self = self.add_instrument(instrument, price);
        }
        self
    }

    /// Orders the instruments by maturity. The sort is stable.
    #[must_use]
    pub fn sorted(mut self) -> Self {
        let mut pairs: Vec<(Box<dyn Instrument>, f64)> = self
            .instruments
            .drain(..)
            .zip(self.prices.drain(..))
            .collect();
        pairs.sort_by(|a, b| a.0.maturity().total_cmp(&b.0.maturity()));
        (self.instruments, self.prices) = pairs.into_iter().unzip();
        self
    }

    /// Number of instruments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    /// Returns `true` if no instruments were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// The instruments, in bootstrap order.
    #[must_use]
    pub fn instruments(&self) -> &[Box<dyn Instrument>] {
        &self.instruments
    }

    /// The market prices, in bootstrap order.
    #[must_use]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// The bootstrap configuration.
    #[must_use]
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Bootstraps the curve from the added instruments.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No instruments were added
    /// - Any instrument yields no knot
    pub fn bootstrap(&self) -> CurveResult<PiecewiseFlat> {
        if self.instruments.is_empty() {
            return Err(CurveError::insufficient_data(1, 0));
        }

        bootstrap_with(&self.instruments, &self.prices, &self.config)
    }

    /// Bootstraps the curve and reprices every instrument on it.
    ///
    /// This method does NOT fail if repricing validation fails. Check
    /// `result.is_valid()`, or use
    /// [`bootstrap_validated_strict`](Self::bootstrap_validated_strict).
    ///
    /// # Errors
    ///
    /// As [`bootstrap`](Self::bootstrap).
    pub fn bootstrap_validated(&self) -> CurveResult<BootstrapResult<PiecewiseFlat>> {
        let timer = BuildTimer::start();

        let curve = self.bootstrap()?;
        let report = validate_repricing(
            &curve,
            &self.instruments,
            &self.prices,
            self.config.repricing_tolerance,
        )?;
        let build_duration = timer.elapsed();

        debug!(
            "bootstrapped {} knots in {:?}, max repricing error {:.2e}",
            curve.size(),
            build_duration,
            report.max_error()
        );

        Ok(BootstrapResult::new(curve, report, build_duration))
    }

    /// Bootstraps the curve and fails unless every instrument reprices.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::RepricingFailed` if any instrument exceeds the
    /// repricing tolerance.
    pub fn bootstrap_validated_strict(&self) -> CurveResult<BootstrapResult<PiecewiseFlat>> {
        let result = self.bootstrap_validated()?;
        result.report.ensure_passed()?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::{bootstrap_deposit, bootstrap_fra};
    use crate::curves::ConstantCurve;
    use crate::instruments::{
        Bond, CashFlows, Deposit, ForwardRateAgreement, Frequency, InstrumentSpec,
        ZeroCouponBond,
    };
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_zero_coupon_bond_recovers_rate() {
        let r: f64 = 0.1;
        let zcb = ZeroCouponBond::new(1.0, r.exp()).unwrap();

        let (t, f) = bootstrap0(&zcb, &ConstantCurve::default(), 0.0, 0.2, 1.0);

        assert_eq!(t, 1.0);
        assert_abs_diff_eq!(f, r, epsilon = SQRT_EPSILON);
    }

    #[test]
    fn test_empty_curve_uses_fallback_guess() {
        let zcb = ZeroCouponBond::unit(2.0).unwrap();
        let price = (-0.08_f64).exp();

        let (t, f) = bootstrap0(&zcb, &PiecewiseFlat::empty(), 0.0, f64::NAN, price);

        assert_eq!(t, 2.0);
        assert_abs_diff_eq!(f, 0.04, epsilon = SQRT_EPSILON);
    }

    #[test]
    fn test_guess_from_curve_forward() {
        let curve = PiecewiseFlat::new(vec![1.0], vec![0.05]).unwrap();
        let zcb = ZeroCouponBond::unit(2.0).unwrap();
        let price = (-0.05_f64 - 0.06).exp();

        let (t, f) = bootstrap0(&zcb, &curve, 1.0, f64::NAN, price);

        assert_eq!(t, 2.0);
        assert_abs_diff_eq!(f, 0.06, epsilon = SQRT_EPSILON);
    }

    #[test]
    fn test_maturity_not_past_curve_is_sentinel() {
        let curve = PiecewiseFlat::new(vec![1.0], vec![0.05]).unwrap();
        let zcb = ZeroCouponBond::unit(1.0).unwrap();

        assert!(is_sentinel_pair(bootstrap0(&zcb, &curve, 1.0, 0.05, 0.9)));
        assert!(is_sentinel_pair(bootstrap0(&zcb, &curve, 2.0, 0.05, 0.9)));
        assert!(is_sentinel_pair(bootstrap0(&zcb, &curve, f64::NAN, 0.05, 0.9)));
    }

    #[test]
    fn test_non_convergence_is_sentinel() {
        let zcb = ZeroCouponBond::unit(1.0).unwrap();
        let config = SolverConfig::default().with_max_iterations(1);

        let knot = bootstrap0_with(&zcb, &PiecewiseFlat::empty(), 0.0, 0.03, 0.5, &config);
        assert!(is_sentinel_pair(knot));
    }

    #[test]
    fn test_unreachable_price_is_sentinel() {
        // Positive flows can never be worth a negative price.
        let zcb = ZeroCouponBond::unit(1.0).unwrap();
        assert!(is_sentinel_pair(bootstrap0(
            &zcb,
            &PiecewiseFlat::empty(),
            0.0,
            0.03,
            -1.0
        )));
    }

    #[test]
    fn test_deposit_matches_closed_form() {
        let deposit = Deposit::new(0.05, 1.0).unwrap();

        let (t, f) = bootstrap0(&deposit, &PiecewiseFlat::empty(), 0.0, f64::NAN, 1.0);
        let (t_cf, f_cf) = bootstrap_deposit(0.05, 1.0);

        assert_eq!(t, t_cf);
        assert_abs_diff_eq!(f, f_cf, epsilon = SQRT_EPSILON);
    }

    #[test]
    fn test_fra_matches_closed_form() {
        let curve = bootstrap(&[Deposit::new(0.05, 1.0).unwrap()], &[1.0], 0.0, 0.03).unwrap();
        let fra = ForwardRateAgreement::new(0.06, 1.0, 2.0).unwrap();

        let (t, f) = bootstrap0(&fra, &curve, 1.0, f64::NAN, 0.0);
        let (t_cf, f_cf) = bootstrap_fra(0.06, 1.0, 2.0);

        assert_eq!(t, t_cf);
        assert_abs_diff_eq!(f, f_cf, epsilon = SQRT_EPSILON);
    }

    #[test]
    fn test_batch_reprices_inputs() {
        let instruments: Vec<Box<dyn Instrument>> = vec![
            Box::new(Deposit::new(0.045, 0.5).unwrap()),
            Box::new(ForwardRateAgreement::new(0.05, 0.5, 1.0).unwrap()),
            Box::new(Bond::new(3.0, 0.05, Frequency::SemiAnnual).unwrap()),
            Box::new(Bond::new(5.0, 0.055, Frequency::SemiAnnual).unwrap()),
        ];
        let prices = [1.0, 0.0, 1.01, 0.995];

        let curve = bootstrap(&instruments, &prices, 0.0, DEFAULT_INITIAL_GUESS).unwrap();

        assert_eq!(curve.times(), &[0.5, 1.0, 3.0, 5.0]);
        for (instrument, &price) in instruments.iter().zip(&prices) {
            assert_abs_diff_eq!(present(instrument, &curve), price, epsilon = SQRT_EPSILON);
        }
    }

    #[test]
    fn test_batch_empty_input() {
        let curve = bootstrap::<ZeroCouponBond>(&[], &[], 0.0, 0.03).unwrap();
        assert!(curve.is_empty());
    }

    #[test]
    fn test_batch_size_mismatch() {
        let zcb = ZeroCouponBond::unit(1.0).unwrap();

        let err = bootstrap(&[zcb, zcb], &[0.95], 0.0, 0.03).unwrap_err();
        assert!(matches!(
            err,
            CurveError::SizeMismatch {
                instruments: 2,
                prices: 1
            }
        ));
    }

    #[test]
    fn test_batch_reports_failing_position() {
        let instruments = [
            ZeroCouponBond::unit(1.0).unwrap(),
            ZeroCouponBond::unit(2.0).unwrap(),
            ZeroCouponBond::unit(1.5).unwrap(),
        ];
        let prices = [0.97, 0.93, 0.95];

        let err = bootstrap(&instruments, &prices, 0.0, 0.03).unwrap_err();

        match err {
            CurveError::BootstrapFailed {
                index, maturity, ..
            } => {
                assert_eq!(index, 3);
                assert_eq!(maturity, 1.5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_batch_invalid_solver_config() {
        let config = BootstrapConfig::default().with_solver(SolverConfig::new(0.0, 100));
        let zcb = ZeroCouponBond::unit(1.0).unwrap();

        let err = bootstrap_with(&[zcb], &[0.95], &config).unwrap_err();
        assert!(matches!(err, CurveError::Math(_)));
    }

    #[test]
    fn test_config_validate() {
        assert!(BootstrapConfig::default().validate().is_ok());
        assert!(BootstrapConfig::default()
            .with_initial_guess(f64::NAN)
            .validate()
            .is_ok());
        assert!(BootstrapConfig::default()
            .with_initial_time(-1.0)
            .validate()
            .is_err());
        assert!(BootstrapConfig::default()
            .with_repricing_tolerance(0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: BootstrapConfig = serde_json::from_str(r#"{"initial_guess": 0.05}"#).unwrap();

        assert_eq!(config.initial_guess, 0.05);
        assert_eq!(config.initial_time, 0.0);
        assert_eq!(config.solver, SolverConfig::default());
        assert_eq!(config.repricing_tolerance, SQRT_EPSILON);
    }

    #[test]
    fn test_bootstrapper_requires_instruments() {
        let err = SequentialBootstrapper::new().bootstrap().unwrap_err();
        assert!(matches!(
            err,
            CurveError::InsufficientData {
                required: 1,
                got: 0
            }
        ));
    }

    #[test]
    fn test_bootstrapper_validated() {
        let result = SequentialBootstrapper::new()
            .add_instruments([
                (ZeroCouponBond::unit(1.0).unwrap(), 0.97),
                (ZeroCouponBond::unit(2.0).unwrap(), 0.93),
            ])
            .add_instrument(
                CashFlows::new(vec![1.0, 2.0, 3.0], vec![0.04, 0.04, 1.04]).unwrap(),
                0.99,
            )
            .bootstrap_validated()
            .unwrap();

        assert!(result.is_valid());
        assert_eq!(result.report.total(), 3);
        assert_eq!(result.report.checks()[2].index, 3);
        assert_eq!(result.curve.size(), 3);
    }

    #[test]
    fn test_bootstrapper_strict_rejects_loose_fit() {
        // A huge tolerance converges early; a tiny repricing tolerance then fails.
        let config = BootstrapConfig::default()
            .with_solver(SolverConfig::new(1e-3, 100))
            .with_repricing_tolerance(1e-15);

        let bootstrapper = SequentialBootstrapper::new()
            .add_instrument(Bond::new(10.0, 0.05, Frequency::Annual).unwrap(), 0.9)
            .with_config(config);

        let err = bootstrapper.bootstrap_validated_strict().unwrap_err();
        assert!(matches!(err, CurveError::RepricingFailed { failed: 1, .. }));
    }

    #[test]
    fn test_bootstrapper_sorted() {
        let bootstrapper = SequentialBootstrapper::new()
            .add_instrument(ZeroCouponBond::unit(2.0).unwrap(), 0.93)
            .add_instrument(ZeroCouponBond::unit(1.0).unwrap(), 0.97);

        assert!(bootstrapper.bootstrap().is_err());

        let sorted = bootstrapper.sorted();
        assert_eq!(sorted.prices(), &[0.97, 0.93]);
        assert_eq!(sorted.instruments()[0].maturity(), 1.0);
        assert_eq!(sorted.bootstrap().unwrap().times(), &[1.0, 2.0]);
    }

    #[test]
    fn test_bootstrapper_from_quotes() {
        let quotes = vec![
            QuotedInstrument::implied(InstrumentSpec::Deposit {
                rate: 0.05,
                maturity: 1.0,
            }),
            QuotedInstrument::implied(InstrumentSpec::Fra {
                rate: 0.06,
                start: 1.0,
                end: 2.0,
            }),
        ];

        let bootstrapper = SequentialBootstrapper::from_quotes(&quotes).unwrap();
        assert_eq!(bootstrapper.len(), 2);
        assert_eq!(bootstrapper.prices(), &[1.0, 0.0]);

        let curve = bootstrapper.bootstrap().unwrap();
        assert_abs_diff_eq!(curve.rates()[0], 1.05_f64.ln(), epsilon = SQRT_EPSILON);
        assert_abs_diff_eq!(curve.rates()[1], 1.06_f64.ln(), epsilon = SQRT_EPSILON);
    }

    #[test]
    fn test_from_quotes_names_bad_quote() {
        let quotes = vec![
            QuotedInstrument::implied(InstrumentSpec::Deposit {
                rate: 0.05,
                maturity: 1.0,
            }),
            QuotedInstrument::implied(InstrumentSpec::ZeroCouponBond {
                maturity: 2.0,
                cash: 1.0,
            }),
        ];

        let err = SequentialBootstrapper::from_quotes(&quotes).unwrap_err();
        assert!(err.to_string().contains("quote 2"));
    }

    proptest! {
        #[test]
        fn prop_bootstrap_recovers_forwards(
            rates in proptest::collection::vec(0.001f64..0.12, 1..12),
        ) {
            let times: Vec<f64> = (1..=rates.len()).map(|k| k as f64).collect();
            let truth = PiecewiseFlat::new(times.clone(), rates.clone()).unwrap();

            let zcbs: Vec<ZeroCouponBond> =
                times.iter().map(|&t| ZeroCouponBond::unit(t).unwrap()).collect();
            let prices: Vec<f64> = times.iter().map(|&t| truth.discount(t)).collect();

            let curve = bootstrap(&zcbs, &prices, 0.0, DEFAULT_INITIAL_GUESS).unwrap();

            prop_assert_eq!(curve.times(), truth.times());
            prop_assert!(curve.times().windows(2).all(|w| w[0] < w[1]));
            for (got, want) in curve.rates().iter().zip(&rates) {
                prop_assert!((got - want).abs() < 1e-6);
            }
        }
    }
}
