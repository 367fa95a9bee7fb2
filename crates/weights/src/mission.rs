//! Mission segments and the fuel fraction they imply.
//!
//! A mission is an ordered list of legs. Each leg retains a fraction
//! `W_i / W_{i-1}` of the weight it starts with. Warm-up, climb, descent
//! and landing use historical ratios; cruise and loiter follow from the
//! Breguet range and endurance equations for jet aircraft.

use thiserror::Error;
use uom::si::{
    f64::{Frequency, Length, Ratio, Time, Velocity},
    ratio::ratio as unitless,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::fractions::fuel_weight_fraction;

/// Reserve and trapped fuel allowance applied to the burned fraction.
pub const DEFAULT_RESERVE_FACTOR: f64 = 1.06;

/// Historical weight ratio for engine start, warm-up and takeoff.
pub const WARMUP_TAKEOFF_RATIO: f64 = 0.970;

/// Historical weight ratio for climb and acceleration.
pub const CLIMB_RATIO: f64 = 0.985;

/// Historical weight ratio for descent.
pub const DESCENT_RATIO: f64 = 0.990;

/// Historical weight ratio for landing and taxi.
pub const LANDING_RATIO: f64 = 0.995;

/// Errors raised while building a mission or evaluating its legs.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MissionError {
    #[error("mission has no segments")]
    Empty,

    #[error("reserve factor must be finite and at least 1, got {value}")]
    ReserveFactor { value: f64 },

    #[error("segment {index} retains {ratio} of its weight, expected a value in (0, 1]")]
    SegmentRatio { index: usize, ratio: f64 },
}

/// A cruise leg flown at constant speed and lift-to-drag ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cruise {
    pub range: Length,
    pub velocity: Velocity,
    /// Thrust-specific fuel consumption (fuel weight per thrust per time).
    pub tsfc: Frequency,
    pub lift_to_drag: f64,
}

impl Cruise {
    /// Breguet range equation: `exp(-R c / (V L/D))`.
    #[must_use]
    pub fn weight_ratio(&self) -> f64 {
        let exponent: Ratio = self.range * self.tsfc / self.velocity;
        (-exponent.get::<unitless>() / self.lift_to_drag).exp()
    }
}

/// A loiter leg held at constant lift-to-drag ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Loiter {
    pub endurance: Time,
    /// Thrust-specific fuel consumption (fuel weight per thrust per time).
    pub tsfc: Frequency,
    pub lift_to_drag: f64,
}

impl Loiter {
    /// Breguet endurance equation: `exp(-E c / (L/D))`.
    #[must_use]
    pub fn weight_ratio(&self) -> f64 {
        let exponent: Ratio = self.endurance * self.tsfc;
        (-exponent.get::<unitless>() / self.lift_to_drag).exp()
    }
}

/// One leg of a mission.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Segment {
    WarmupTakeoff,
    Climb,
    Cruise(Cruise),
    Loiter(Loiter),
    Descent,
    Landing,
    /// A leg with a known weight ratio.
    Fixed(f64),
}

impl Segment {
    /// Fraction of the starting weight retained over this leg.
    #[must_use]
    pub fn weight_ratio(&self) -> f64 {
        match self {
            Self::WarmupTakeoff => WARMUP_TAKEOFF_RATIO,
            Self::Climb => CLIMB_RATIO,
            Self::Cruise(cruise) => cruise.weight_ratio(),
            Self::Loiter(loiter) => loiter.weight_ratio(),
            Self::Descent => DESCENT_RATIO,
            Self::Landing => LANDING_RATIO,
            Self::Fixed(ratio) => *ratio,
        }
    }
}

/// An ordered mission profile with a fuel reserve allowance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMission", into = "RawMission"))]
pub struct Mission {
    segments: Vec<Segment>,
    reserve_factor: f64,
}

impl Mission {
    /// Creates a mission from its legs in flight order.
    ///
    /// # Errors
    ///
    /// Returns an error if `segments` is empty or `reserve_factor` is not a
    /// finite value of at least 1.
    pub fn new(segments: Vec<Segment>, reserve_factor: f64) -> Result<Self, MissionError> {
        if segments.is_empty() {
            return Err(MissionError::Empty);
        }
        if !reserve_factor.is_finite() || reserve_factor < 1.0 {
            return Err(MissionError::ReserveFactor {
                value: reserve_factor,
            });
        }

        Ok(Self {
            segments,
            reserve_factor,
        })
    }

    /// Returns the legs in flight order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the reserve factor.
    #[must_use]
    pub fn reserve_factor(&self) -> f64 {
        self.reserve_factor
    }

    /// Weight ratio of every leg, in flight order.
    ///
    /// # Errors
    ///
    /// Returns [`MissionError::SegmentRatio`] for the first leg whose ratio
    /// is not in `(0, 1]`.
    pub fn segment_ratios(&self) -> Result<Vec<f64>, MissionError> {
        self.segments
            .iter()
            .enumerate()
            .map(|(index, segment)| {
                let ratio = segment.weight_ratio();
                if ratio > 0.0 && ratio <= 1.0 {
                    Ok(ratio)
                } else {
                    Err(MissionError::SegmentRatio { index, ratio })
                }
            })
            .collect()
    }

    /// Fraction of takeoff weight burned as fuel, reserves included.
    ///
    /// # Errors
    ///
    /// Returns an error if any leg has an invalid weight ratio.
    pub fn fuel_fraction(&self) -> Result<f64, MissionError> {
        let ratios = self.segment_ratios()?;
        Ok(fuel_weight_fraction(&ratios, self.reserve_factor))
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawMission {
    segments: Vec<Segment>,
    #[serde(default = "default_reserve_factor")]
    reserve_factor: f64,
}

#[cfg(feature = "serde")]
fn default_reserve_factor() -> f64 {
    DEFAULT_RESERVE_FACTOR
}

#[cfg(feature = "serde")]
impl TryFrom<RawMission> for Mission {
    type Error = MissionError;

    fn try_from(raw: RawMission) -> Result<Self, Self::Error> {
        Self::new(raw.segments, raw.reserve_factor)
    }
}

#[cfg(feature = "serde")]
impl From<Mission> for RawMission {
    fn from(mission: Mission) -> Self {
        Self {
            segments: mission.segments,
            reserve_factor: mission.reserve_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        frequency::hertz, length::kilometer, time::hour, velocity::meter_per_second,
    };

    fn cruise() -> Cruise {
        Cruise {
            range: Length::new::<kilometer>(5_000.0),
            velocity: Velocity::new::<meter_per_second>(230.0),
            tsfc: Frequency::new::<hertz>(1.4e-4),
            lift_to_drag: 15.0,
        }
    }

    fn loiter() -> Loiter {
        Loiter {
            endurance: Time::new::<hour>(1.0),
            tsfc: Frequency::new::<hertz>(1.1e-4),
            lift_to_drag: 17.0,
        }
    }

    #[test]
    fn cruise_follows_breguet_range() {
        let expected = (-5.0e6 * 1.4e-4 / (230.0 * 15.0_f64)).exp();
        assert_relative_eq!(cruise().weight_ratio(), expected, max_relative = 1e-12);
    }

    #[test]
    fn loiter_follows_breguet_endurance() {
        let expected = (-3_600.0 * 1.1e-4 / 17.0_f64).exp();
        assert_relative_eq!(loiter().weight_ratio(), expected, max_relative = 1e-12);
    }

    #[test]
    fn mission_fuel_fraction() {
        let mission = Mission::new(
            vec![
                Segment::WarmupTakeoff,
                Segment::Climb,
                Segment::Cruise(cruise()),
                Segment::Loiter(loiter()),
                Segment::Landing,
            ],
            DEFAULT_RESERVE_FACTOR,
        )
        .expect("valid mission");

        let ratios = mission.segment_ratios().expect("valid ratios");
        assert_eq!(ratios.len(), 5);
        assert_relative_eq!(ratios[0], WARMUP_TAKEOFF_RATIO);

        let fraction = mission.fuel_fraction().expect("valid ratios");
        assert_relative_eq!(fraction, 0.256_283_872_474_565_4, max_relative = 1e-9);
    }

    #[test]
    fn fixed_leg_reports_its_ratio() {
        assert_relative_eq!(Segment::Fixed(0.93).weight_ratio(), 0.93);
        assert_relative_eq!(Segment::Descent.weight_ratio(), DESCENT_RATIO);
    }

    #[test]
    fn segment_ratios_follow_flight_order() {
        let mission = Mission::new(
            vec![Segment::Fixed(0.9), Segment::Climb, Segment::Fixed(0.8)],
            1.0,
        )
        .expect("valid mission");

        assert_eq!(
            mission.segment_ratios().expect("valid ratios"),
            vec![0.9, CLIMB_RATIO, 0.8]
        );
        assert_relative_eq!(
            mission.fuel_fraction().expect("valid ratios"),
            1.0 - 0.9 * CLIMB_RATIO * 0.8,
            max_relative = 1e-12
        );
    }

    #[test]
    fn rejects_empty_mission() {
        assert_eq!(Mission::new(vec![], 1.06), Err(MissionError::Empty));
    }

    #[test]
    fn rejects_bad_reserve_factor() {
        assert!(matches!(
            Mission::new(vec![Segment::Climb], 0.9),
            Err(MissionError::ReserveFactor { .. })
        ));
        assert!(matches!(
            Mission::new(vec![Segment::Climb], f64::NAN),
            Err(MissionError::ReserveFactor { .. })
        ));
    }

    #[test]
    fn rejects_leg_that_gains_weight() {
        let mission =
            Mission::new(vec![Segment::Climb, Segment::Fixed(1.2)], 1.0).expect("valid mission");

        assert_eq!(
            mission.fuel_fraction(),
            Err(MissionError::SegmentRatio {
                index: 1,
                ratio: 1.2
            })
        );
    }
}
