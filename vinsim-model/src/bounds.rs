//! Physical and economic bounds applied to simulated values.
//!
//! Every clamped quantity in the simulator takes its limits from this one
//! table so the bounds stay auditable in a single place.

/// An inclusive `(min, max)` constraint on a simulated value. Open-ended
/// constraints use infinity on the unconstrained side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Bounds { min, max }
    }

    /// Clamp a value into the bounds.
    pub fn apply(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// True when the value already lies inside the bounds.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Relative humidity is a percentage.
pub const HUMIDITY_PERCENT: Bounds = Bounds::new(0.0, 100.0);

/// Irradiance never drops below ambient scatter, even midwinter. No ceiling.
pub const SOLAR_IRRADIANCE_W_M2: Bounds = Bounds::new(20.0, f64::INFINITY);

/// Agronomic limits of yield per hectare.
pub const YIELD_KG_HA: Bounds = Bounds::new(8000.0, 15000.0);

/// Grape sugar level in Babo degrees.
pub const GRAPE_SUGAR_LEVEL: Bounds = Bounds::new(15.0, 19.5);

/// Production cost floor; costs have no upper bound.
pub const PRODUCTION_COST_EUR_HA: Bounds = Bounds::new(8000.0, f64::INFINITY);

/// Market band for the selling price per kilogram.
pub const SELLING_PRICE_EUR_KG: Bounds = Bounds::new(3.5, 6.0);
