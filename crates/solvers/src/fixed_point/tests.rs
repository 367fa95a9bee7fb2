use std::convert::Infallible;

use approx::assert_relative_eq;
use proptest::prelude::*;
use thiserror::Error;

use sizing_core::{FixedPointProblem, Model};

use crate::Record;

use super::{Action, Config, Error, Event, Status, solve, solve_unobserved};

/// The map `x ↦ a·x + c`.
struct Affine {
    a: f64,
    c: f64,
}

impl Model for Affine {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(self.a * x + self.c)
    }
}

/// The map `x ↦ cos(x)`.
struct Cosine;

impl Model for Cosine {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(x.cos())
    }
}

/// Feeds the iterate straight into the model and takes its output as next.
struct OutputIsNext;

impl FixedPointProblem for OutputIsNext {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(x)
    }

    fn next(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

fn config(max_iters: usize, rel_tol: f64) -> Config {
    Config::new(max_iters, rel_tol).expect("valid config")
}

#[test]
fn defaults_match_textbook_driver() {
    let config = Config::default();
    assert_eq!(config.max_iters(), 20);
    assert_relative_eq!(config.rel_tol(), 1e-12);
}

#[test]
fn rejects_invalid_config() {
    assert!(matches!(Config::new(0, 1e-9), Err(super::ConfigError::MaxIters)));
    assert!(matches!(Config::new(5, 0.0), Err(super::ConfigError::RelTol)));
    assert!(matches!(
        Config::new(5, f64::INFINITY),
        Err(super::ConfigError::RelTol)
    ));
}

#[test]
fn finds_dottie_number() {
    let solution =
        solve_unobserved(&Cosine, &OutputIsNext, 1.0, &config(200, 1e-12)).expect("should solve");

    assert!(solution.is_converged());
    assert_relative_eq!(solution.x, 0.739_085_133_215_160_6, epsilon = 1e-10);
    assert_relative_eq!(solution.x.cos(), solution.x, epsilon = 1e-10);
    assert!(solution.rel_change < 1e-12);
}

#[test]
fn history_records_relative_change() {
    // x ↦ x/2 + 1 from 4: 3, 2.5, 2.25, ...
    let model = Affine { a: 0.5, c: 1.0 };

    let solution =
        solve_unobserved(&model, &OutputIsNext, 4.0, &config(3, 1e-12)).expect("should finish");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 3);
    assert_eq!(
        solution.history.records(),
        [
            Record::new(1, 3.0, 0.25),
            Record::new(2, 2.5, 0.5 / 3.0),
            Record::new(3, 2.25, 0.1),
        ]
    );
    assert_relative_eq!(solution.x, 2.25);
    assert_relative_eq!(solution.snapshot.input, 2.5);
}

#[test]
fn divergent_map_exhausts_budget() {
    let model = Affine { a: 2.0, c: 0.0 };

    let solution =
        solve_unobserved(&model, &OutputIsNext, 1.0, &config(10, 1e-12)).expect("should finish");

    assert_eq!(solution.status, Status::MaxIters);
    assert!(!solution.is_converged());
    assert_eq!(solution.history.len(), 10);
    assert_relative_eq!(solution.x, 1024.0);
    assert_relative_eq!(solution.rel_change, 1.0);
}

#[test]
fn observer_can_stop_iteration() {
    let model = Affine { a: 0.5, c: 1.0 };

    let mut seen = Vec::new();
    let observer = |event: &Event<'_, f64, f64>| {
        seen.push((event.previous, event.x));
        (event.iter == 2).then_some(Action::StopEarly)
    };

    let solution =
        solve(&model, &OutputIsNext, 4.0, &Config::default(), observer).expect("should stop");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_eq!(seen, [(4.0, 3.0), (3.0, 2.5)]);
}

#[test]
fn rejects_zero_or_non_finite_guess() {
    let model = Affine { a: 0.5, c: 1.0 };

    for guess in [0.0, f64::NAN, f64::NEG_INFINITY] {
        let result = solve_unobserved(&model, &OutputIsNext, guess, &Config::default());
        assert!(matches!(result, Err(Error::InvalidGuess { .. })));
    }
}

#[test]
fn rejects_zero_iterate() {
    let model = Affine { a: 0.0, c: 0.0 };

    let result = solve_unobserved(&model, &OutputIsNext, 1.0, &Config::default());

    assert!(matches!(result, Err(Error::InvalidIterate { iter: 1, .. })));
}

#[derive(Debug, Error)]
#[error("log of non-positive value")]
struct Domain;

/// The map `x ↦ ln(x)`, undefined for non-positive `x`.
struct Log;

impl Model for Log {
    type Input = f64;
    type Output = f64;
    type Error = Domain;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        if *x > 0.0 { Ok(x.ln()) } else { Err(Domain) }
    }
}

#[test]
fn propagates_model_errors() {
    // ln(0.5) < 0, so the second call fails.
    let result = solve_unobserved(&Log, &OutputIsNext, 0.5, &Config::default());

    let Err(Error::Model(source)) = result else {
        panic!("expected a model error");
    };
    assert!(source.downcast_ref::<Domain>().is_some());
}

proptest! {
    #[test]
    fn contraction_converges_to_fixed_point(
        a in 0.05_f64..0.8,
        c in 1.0_f64..100.0,
        guess in 1.0_f64..1000.0,
    ) {
        let model = Affine { a, c };
        let solution = solve_unobserved(&model, &OutputIsNext, guess, &config(500, 1e-12))
            .expect("iterates stay positive");

        prop_assert!(solution.is_converged());
        prop_assert!((solution.x - (a * solution.x + c)).abs() <= 1e-9 * solution.x);
        prop_assert_eq!(solution.history.len(), solution.iters);
        prop_assert!(solution.iters <= 500);
    }
}
