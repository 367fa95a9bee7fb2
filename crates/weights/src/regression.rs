//! Empty-weight regressions.
//!
//! Historical data for each class of aircraft fits `W_e/W_TO = A · W_TO^B`
//! with `W_TO` in pounds. A multiplicative correction adjusts the
//! regression for technology the data predates, such as composite
//! structure.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::fractions::empty_weight_fraction;

/// Correction for an airframe built largely from advanced composites.
pub const COMPOSITE_CORRECTION: f64 = 0.95;

/// Empty-weight fraction regression `correction · A · W_TO^B`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmptyWeightRegression {
    pub a: f64,
    pub b: f64,
    #[cfg_attr(feature = "serde", serde(default = "no_correction"))]
    pub correction: f64,
}

#[cfg(feature = "serde")]
fn no_correction() -> f64 {
    1.0
}

impl EmptyWeightRegression {
    /// Creates an uncorrected regression.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            a,
            b,
            correction: 1.0,
        }
    }

    /// Creates the uncorrected regression for an aircraft class.
    #[must_use]
    pub fn for_class(class: AircraftClass) -> Self {
        let (a, b) = class.coefficients();
        Self::new(a, b)
    }

    /// Returns this regression with a multiplicative correction applied.
    #[must_use]
    pub fn with_correction(self, correction: f64) -> Self {
        Self { correction, ..self }
    }

    /// Returns this regression corrected for composite construction.
    #[must_use]
    pub fn composite(self) -> Self {
        self.with_correction(COMPOSITE_CORRECTION)
    }

    /// Empty-weight fraction at takeoff weight `wto`.
    #[must_use]
    pub fn fraction(&self, wto: f64) -> f64 {
        self.correction * empty_weight_fraction(wto, self.a, self.b)
    }

    /// Derivative of the fraction with respect to `wto`.
    #[must_use]
    pub fn slope(&self, wto: f64) -> f64 {
        self.b * self.fraction(wto) / wto
    }
}

/// Aircraft classes with a historical empty-weight regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AircraftClass {
    SailplaneUnpowered,
    SailplanePowered,
    HomebuiltMetalWood,
    HomebuiltComposite,
    GeneralAviationSingleEngine,
    GeneralAviationTwinEngine,
    Agricultural,
    TwinTurboprop,
    FlyingBoat,
    JetTrainer,
    JetFighter,
    MilitaryCargoBomber,
    JetTransport,
}

impl AircraftClass {
    /// Every class, in table order.
    pub const ALL: [Self; 13] = [
        Self::SailplaneUnpowered,
        Self::SailplanePowered,
        Self::HomebuiltMetalWood,
        Self::HomebuiltComposite,
        Self::GeneralAviationSingleEngine,
        Self::GeneralAviationTwinEngine,
        Self::Agricultural,
        Self::TwinTurboprop,
        Self::FlyingBoat,
        Self::JetTrainer,
        Self::JetFighter,
        Self::MilitaryCargoBomber,
        Self::JetTransport,
    ];

    /// Regression coefficients `(A, B)` for `W_TO` in pounds.
    #[must_use]
    pub fn coefficients(self) -> (f64, f64) {
        match self {
            Self::SailplaneUnpowered => (0.86, -0.05),
            Self::SailplanePowered => (0.91, -0.05),
            Self::HomebuiltMetalWood => (1.19, -0.09),
            Self::HomebuiltComposite => (1.15, -0.09),
            Self::GeneralAviationSingleEngine => (2.36, -0.18),
            Self::GeneralAviationTwinEngine => (1.51, -0.10),
            Self::Agricultural => (0.74, -0.03),
            Self::TwinTurboprop => (0.96, -0.05),
            Self::FlyingBoat => (1.09, -0.05),
            Self::JetTrainer => (1.59, -0.10),
            Self::JetFighter => (2.34, -0.13),
            Self::MilitaryCargoBomber => (0.93, -0.07),
            Self::JetTransport => (1.02, -0.06),
        }
    }
}
