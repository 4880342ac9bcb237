// gf-core/src/units.rs

use crate::{GfError, GfResult};
use uom::si::f64::ElectricPotential;

/// Floating point type used throughout the system.
pub type Real = f64;

pub type Voltage = ElectricPotential;

/// Voltage reported for a wire when nothing upstream configures one.
pub const DEFAULT_VOLTAGE: Real = 380.0;

/// Transformer ratio assumed when none is configured.
pub const DEFAULT_RATIO: Real = 1.0;

#[inline]
pub fn volts(v: Real) -> Voltage {
    use uom::si::electric_potential::volt;
    Voltage::new::<volt>(v)
}

/// Magnitude of a potential in volts.
#[inline]
pub fn in_volts(v: Voltage) -> Real {
    use uom::si::electric_potential::volt;
    v.get::<volt>()
}

/// Absolute/relative tolerance pair for comparing voltages.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-9,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> GfResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(GfError::NonFinite { what, value: v })
    }
}
