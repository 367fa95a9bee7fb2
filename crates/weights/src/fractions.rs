//! Closed-form weight relations.
//!
//! These are the three formulas behind the implicit takeoff-weight equation.
//! They are pure and cheap, and take plain `f64` values in any consistent
//! weight unit.

use crate::WeightError;

/// Fraction of takeoff weight burned as fuel over the mission.
///
/// `segment_ratios` holds the weight retained over each mission leg
/// (`W_i / W_{i-1}`), one per leg in flight order. The product is the
/// landing-to-takeoff weight ratio, and `reserve_factor` scales the burned
/// fraction to cover reserve and trapped fuel.
///
/// Non-finite inputs propagate into the result.
#[must_use]
pub fn fuel_weight_fraction(segment_ratios: &[f64], reserve_factor: f64) -> f64 {
    let retained: f64 = segment_ratios.iter().product();
    reserve_factor * (1.0 - retained)
}

/// Empty-weight fraction from the power-law regression `A · W_TO^B`.
///
/// Callers must pass `wto > 0`: for non-integer `b` the result is `NaN`
/// otherwise.
#[must_use]
pub fn empty_weight_fraction(wto: f64, a: f64, b: f64) -> f64 {
    a * wto.powf(b)
}

/// Takeoff weight that closes the weight budget.
///
/// # Errors
///
/// Returns [`WeightError::InfeasibleWeightBudget`] if
/// `fuel_frac + empty_frac >= 1`, where no finite positive takeoff weight
/// exists.
pub fn max_takeoff_weight(
    payload: f64,
    crew: f64,
    fuel_frac: f64,
    empty_frac: f64,
) -> Result<f64, WeightError> {
    let available = 1.0 - fuel_frac - empty_frac;

    // Also rejects NaN fractions.
    if !(available > 0.0) {
        return Err(WeightError::InfeasibleWeightBudget {
            fuel_fraction: fuel_frac,
            empty_fraction: empty_frac,
        });
    }

    Ok((payload + crew) / available)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn fuel_fraction_from_segments() {
        let ratios = [0.97, 0.985, 0.9, 0.995];
        let retained = 0.97 * 0.985 * 0.9 * 0.995;

        assert_relative_eq!(fuel_weight_fraction(&ratios, 1.06), 1.06 * (1.0 - retained));
    }

    #[test]
    fn fuel_fraction_ignores_segment_order() {
        let forward = fuel_weight_fraction(&[0.97, 0.985, 0.8], 1.06);
        let reversed = fuel_weight_fraction(&[0.8, 0.985, 0.97], 1.06);

        assert_relative_eq!(forward, reversed, epsilon = 1e-15);
    }

    #[test]
    fn fuel_fraction_propagates_non_finite() {
        assert!(fuel_weight_fraction(&[0.9, f64::NAN], 1.0).is_nan());
    }

    #[test]
    fn empty_fraction_matches_regression() {
        let fraction = empty_weight_fraction(11_000.0, 0.93, -0.07);

        assert_relative_eq!(fraction, 0.93 * 11_000.0_f64.powf(-0.07));
        assert!(fraction > 0.0 && fraction < 1.0);
    }

    #[test]
    fn empty_fraction_decreases_with_weight_for_negative_exponent() {
        let weights = [1_000.0, 5_000.0, 11_000.0, 50_000.0, 250_000.0];
        let fractions: Vec<f64> = weights
            .iter()
            .map(|&w| empty_weight_fraction(w, 0.93, -0.07))
            .collect();

        assert!(fractions.windows(2).all(|pair| pair[1] < pair[0]));
    }

    #[test]
    fn takeoff_weight_worked_example() {
        let wto = max_takeoff_weight(10_000.0, 800.0, 0.1, 0.6).expect("feasible");

        assert_relative_eq!(wto, 36_000.0, epsilon = 1e-9);
    }

    #[test]
    fn takeoff_weight_rejects_closed_budget() {
        let err = max_takeoff_weight(10_000.0, 800.0, 0.4, 0.6).unwrap_err();

        assert_eq!(
            err,
            WeightError::InfeasibleWeightBudget {
                fuel_fraction: 0.4,
                empty_fraction: 0.6,
            }
        );
    }

    #[test]
    fn takeoff_weight_rejects_overdrawn_budget() {
        assert!(matches!(
            max_takeoff_weight(10_000.0, 800.0, 0.5, 0.7),
            Err(WeightError::InfeasibleWeightBudget { .. })
        ));
        assert!(matches!(
            max_takeoff_weight(10_000.0, 800.0, f64::NAN, 0.5),
            Err(WeightError::InfeasibleWeightBudget { .. })
        ));
    }

    proptest! {
        #[test]
        fn feasible_budget_closes(
            payload in 100.0_f64..50_000.0,
            crew in 0.0_f64..5_000.0,
            fuel in 0.05_f64..0.5,
            empty in 0.05_f64..0.45,
        ) {
            let wto = max_takeoff_weight(payload, crew, fuel, empty).expect("fractions sum below 1");

            prop_assert!(wto > payload + crew);
            prop_assert!((payload + crew + (fuel + empty) * wto - wto).abs() <= 1e-9 * wto);
        }

        #[test]
        fn empty_fraction_is_decreasing(
            a in 0.3_f64..2.0,
            b in -0.3_f64..-0.01,
            w in 100.0_f64..1e6,
            factor in 1.01_f64..10.0,
        ) {
            prop_assert!(empty_weight_fraction(w * factor, a, b) < empty_weight_fraction(w, a, b));
        }
    }
}
