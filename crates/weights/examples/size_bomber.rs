//! Sizes a long-range bomber with both solvers.
//!
//! The fuel fraction comes from a warm-up, climb, cruise, loiter, descent
//! and landing mission. The empty-weight regression is the military
//! cargo/bomber class, optionally corrected for a composite airframe.
//!
//! # Usage
//!
//! ```text
//! cargo run --example size_bomber
//! cargo run --example size_bomber -- composite
//! RUST_LOG=debug cargo run --example size_bomber
//! ```
//!
//! `RUST_LOG=debug` shows every solver iteration.

use std::error::Error;

use sizing_solvers::{equation::bisection, fixed_point};
use sizing_weights::{
    AircraftClass, Cruise, EmptyWeightRegression, Loiter, Mission, Outcome, Segment,
    WeightBudget, mission::DEFAULT_RESERVE_FACTOR, size_bisection, size_fixed_point,
};
use tracing_subscriber::EnvFilter;
use uom::si::{
    f64::{Frequency, Length, Time, Velocity},
    frequency::hertz,
    length::kilometer,
    time::hour,
    velocity::meter_per_second,
};

const PAYLOAD: f64 = 10_000.0;
const CREW: f64 = 800.0;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let composite = std::env::args().nth(1).is_some_and(|mode| mode == "composite");

    let mission = Mission::new(
        vec![
            Segment::WarmupTakeoff,
            Segment::Climb,
            Segment::Cruise(Cruise {
                range: Length::new::<kilometer>(5_000.0),
                velocity: Velocity::new::<meter_per_second>(230.0),
                tsfc: Frequency::new::<hertz>(1.4e-4),
                lift_to_drag: 15.0,
            }),
            Segment::Loiter(Loiter {
                endurance: Time::new::<hour>(1.0),
                tsfc: Frequency::new::<hertz>(1.1e-4),
                lift_to_drag: 17.0,
            }),
            Segment::Descent,
            Segment::Landing,
        ],
        DEFAULT_RESERVE_FACTOR,
    )?;
    let fuel_fraction = mission.fuel_fraction()?;
    println!("fuel fraction: {fuel_fraction:.4}");

    let mut regression = EmptyWeightRegression::for_class(AircraftClass::MilitaryCargoBomber);
    if composite {
        regression = regression.composite();
    }
    let budget = WeightBudget::new(PAYLOAD, CREW, fuel_fraction, regression)?;

    let fixed = size_fixed_point(&budget, 20_000.0, &fixed_point::Config::default())?;
    report("fixed point", &fixed, fuel_fraction);

    let bisected = size_bisection(
        &budget,
        [20_000.0, 60_000.0],
        &bisection::Config::new(100, 1e-3)?,
    )?;
    report("bisection", &bisected, fuel_fraction);

    Ok(())
}

fn report(solver: &str, outcome: &Outcome, fuel_fraction: f64) {
    let estimate = outcome.estimate();
    let marker = if outcome.is_converged() { "" } else { " (not converged)" };

    println!(
        "{solver}: W_TO = {:.2} after {} iterations{marker}",
        estimate.takeoff_weight, estimate.iters
    );
    println!(
        "  empty weight {:.2}, fuel weight {:.2}",
        estimate.empty_fraction * estimate.takeoff_weight,
        fuel_fraction * estimate.takeoff_weight
    );
    for record in &estimate.history {
        println!("  {:>3}  {:>12.4}  {:.3e}", record.iter, record.x, record.error);
    }
}
