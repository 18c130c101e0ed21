//! Integration test: build a Treasury curve from market data.
//!
//! Bills are zero-coupon bonds priced off their discount rate, notes and
//! bonds pay semi-annual coupons. Every instrument ends after the previous
//! one, so the sequential bootstrap places one knot per instrument.
//!
//! Market Data: November 28, 2025
//!
//! | Tenor | Coupon  | Price/Rate | Yield   |
//! |-------|---------|------------|---------|
//! | 1M    | 0.000%  | 3 7/8      | 3.936%  |
//! | 3M    | 0.000%  | 3 23/32    | 3.806%  |
//! | 6M    | 0.000%  | 3 21/32    | 3.774%  |
//! | 1Y    | 0.000%  | 3 15/32    | 3.591%  |
//! | 2Y    | 3.375%  | 99 1/4     | 3.502%  |
//! | 3Y    | 3.500%  | 100        | 3.493%  |
//! | 5Y    | 3.500%  | 99 5/32    | 3.603%  |
//! | 7Y    | 3.750%  | 99 1/4     | 3.788%  |
//! | 10Y   | 4.000%  | 99 9/32    | 4.018%  |
//! | 20Y   | 4.625%  | 99 10/32   | 4.628%  |
//! | 30Y   | 4.625%  | 99 3/32    | 4.667%  |

use approx::assert_abs_diff_eq;
use tenor_curves::bootstrap::{bootstrap, bootstrap_deposit, bootstrap_fra, SequentialBootstrapper};
use tenor_curves::instruments::{Bond, Frequency, Instrument, QuotedInstrument, ZeroCouponBond};
use tenor_curves::traits::Curve;
use tenor_curves::valuation::{compound_yield, oas, present, yield_from_price};
use tenor_math::numeric::SQRT_EPSILON;
use tenor_math::solvers::SolverConfig;

/// Parse price in 32nds format (e.g., "99 5/32" -> 99.15625)
fn parse_price_32nds(whole: f64, thirty_seconds: f64) -> f64 {
    whole + thirty_seconds / 32.0
}

/// Price per unit face of a bill quoted on an Act/360 discount basis.
fn discount_rate_to_price(rate: f64, days: u32) -> f64 {
    1.0 - rate * f64::from(days) / 360.0
}

fn treasury_bootstrapper() -> SequentialBootstrapper {
    // (days, discount rate in percent)
    let bills = [
        (30, 3.875),
        (91, 3.0 + 23.0 / 32.0),
        (182, 3.0 + 21.0 / 32.0),
        (365, 3.0 + 15.0 / 32.0),
    ];
    let notes = [
        (2.0, 0.03375, 99.25),
        (3.0, 0.035, 100.0),
        (5.0, 0.035, parse_price_32nds(99.0, 5.0)),
        (7.0, 0.0375, 99.25),
        (10.0, 0.04, parse_price_32nds(99.0, 9.0)),
        (20.0, 0.04625, parse_price_32nds(99.0, 10.0)),
        (30.0, 0.04625, parse_price_32nds(99.0, 3.0)),
    ];

    let mut bootstrapper = SequentialBootstrapper::new();
    for (days, rate) in bills {
        let bill = ZeroCouponBond::unit(f64::from(days) / 365.0).unwrap();
        bootstrapper = bootstrapper.add_instrument(bill, discount_rate_to_price(rate / 100.0, days));
    }
    for (maturity, coupon, price) in notes {
        let note = Bond::new(maturity, coupon, Frequency::SemiAnnual).unwrap();
        bootstrapper = bootstrapper.add_instrument(note, price / 100.0);
    }
    bootstrapper
}

#[test]
fn test_build_treasury_curve_from_market_data() {
    let bootstrapper = treasury_bootstrapper();
    let result = bootstrapper.bootstrap_validated().expect("Bootstrap should succeed");

    println!("{}", result.report);

    assert!(result.is_valid(), "every instrument should reprice");
    assert_eq!(result.report.total(), 11);
    assert_eq!(result.curve.size(), 11);

    // One knot per instrument, at its maturity
    for (knot, instrument) in result.curve.times().iter().zip(bootstrapper.instruments()) {
        assert_eq!(*knot, instrument.maturity());
    }

    // Spot rates stay within the range of the quoted yields
    for &t in result.curve.times() {
        let spot = result.curve.spot(t);
        println!(
            "{t:>8.4}Y  spot {:.4}%  fwd {:.4}%",
            spot * 100.0,
            result.curve.forward(t) * 100.0
        );
        assert!(spot > 0.03 && spot < 0.05, "spot at {t} = {spot}");
    }
}

#[test]
fn test_treasury_curve_reprices_independently() {
    let bootstrapper = treasury_bootstrapper();
    let curve = bootstrapper.bootstrap().unwrap();

    for (instrument, &price) in bootstrapper.instruments().iter().zip(bootstrapper.prices()) {
        assert_abs_diff_eq!(present(instrument, &curve), price, epsilon = SQRT_EPSILON);

        // The curve prices each note at zero spread
        let spread = oas(instrument, &curve, price, 0.0, &SolverConfig::default());
        assert!(spread.is_converged());
        assert_abs_diff_eq!(spread.root, 0.0, epsilon = 1e-6);
    }
}

#[test]
fn test_par_note_yield_near_coupon() {
    // The 3Y note trades at par: its semi-annual yield is its coupon.
    let note = Bond::new(3.0, 0.035, Frequency::SemiAnnual).unwrap();
    let y = yield_from_price(&note, 1.0, 0.03, &SolverConfig::default());

    assert!(y.is_converged());
    assert_abs_diff_eq!(compound_yield(y.root, 2), 0.035, epsilon = 1e-7);
}

#[test]
fn test_money_market_strip_matches_closed_forms() {
    let json = r#"[
        { "instrument": { "type": "deposit", "rate": 0.040, "maturity": 0.25 } },
        { "instrument": { "type": "fra", "rate": 0.042, "start": 0.25, "end": 0.5 } },
        { "instrument": { "type": "fra", "rate": 0.045, "start": 0.5, "end": 1.0 } },
        { "instrument": { "type": "bond", "maturity": 2.0, "coupon": 0.045, "frequency": "annual" }, "price": 0.998 }
    ]"#;
    let quotes: Vec<QuotedInstrument> = serde_json::from_str(json).unwrap();

    let curve = SequentialBootstrapper::from_quotes(&quotes).unwrap().bootstrap().unwrap();
    let knots: Vec<(f64, f64)> = curve.knots().collect();

    let expected = [
        bootstrap_deposit(0.040, 0.25),
        bootstrap_fra(0.042, 0.25, 0.5),
        bootstrap_fra(0.045, 0.5, 1.0),
    ];
    for ((t, f), (t_cf, f_cf)) in knots.iter().zip(expected) {
        assert_eq!(*t, t_cf);
        assert_abs_diff_eq!(*f, f_cf, epsilon = SQRT_EPSILON);
    }
    assert_eq!(knots[3].0, 2.0);
}

#[test]
fn test_boxed_slice_bootstrap() {
    let instruments: Vec<Box<dyn Instrument>> = vec![
        Box::new(ZeroCouponBond::unit(1.0).unwrap()),
        Box::new(Bond::new(2.0, 0.04, Frequency::Annual).unwrap()),
    ];

    let curve = bootstrap(&instruments, &[0.96, 0.995], 0.0, 0.03).unwrap();

    assert_eq!(curve.times(), &[1.0, 2.0]);
    assert_abs_diff_eq!(curve.discount(1.0), 0.96, epsilon = SQRT_EPSILON);
}
