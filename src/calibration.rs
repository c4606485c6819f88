//! Calibration arithmetic for the INA226 current and power registers.
//!
//! The chip computes `current = shunt_voltage * calibration / 2048`, so the
//! calibration register fixes the current LSB for a given shunt:
//! `calibration = 0.00512 / (current_lsb * r_shunt)`.

use crate::registers::{CALIBRATION_SCALING, CURRENT_REGISTER_RANGE};
use crate::units::{ElectricCurrent, ElectricalResistance};
use uom::si::{
    electric_current::{ampere, microampere},
    electrical_resistance::ohm,
};

/// Relative slack taken off the mantissa before rounding up, so that f32
/// representation error on a round LSB (e.g. 1000.0001 μA) does not bump it
/// to the next digit.
const MANTISSA_TOLERANCE: f64 = 1e-6;

/// Rounds the ideal current LSB (`max_expected_current / 2^15`) up to a
/// single significant digit, e.g. 15.26 μA becomes 20 μA.
///
/// The result is never below the ideal LSB (within 1 ppm), so the current
/// register cannot overflow at the stated maximum current.
///
/// Returns `None` unless `max_expected_current` is finite and positive.
pub fn approximate_current_lsb(max_expected_current: ElectricCurrent) -> Option<ElectricCurrent> {
    let i_max = max_expected_current.get::<ampere>();
    if !(i_max.is_finite() && i_max > 0.0) {
        return None;
    }

    let ideal_ua = i_max as f64 / CURRENT_REGISTER_RANGE as f64 * 1_000_000.0;

    let order = libm::pow(10.0, libm::floor(libm::log10(ideal_ua)));
    let mantissa = ideal_ua / order;
    let approx_ua = libm::ceil(mantissa * (1.0 - MANTISSA_TOLERANCE)) * order;

    Some(ElectricCurrent::new::<microampere>(approx_ua as f32))
}

/// Calibration register value for the given current LSB and shunt,
/// rounded to the nearest integer and saturated to the register range.
pub fn calibration_value(current_lsb: ElectricCurrent, shunt: ElectricalResistance) -> u16 {
    let lsb_a = current_lsb.get::<ampere>() as f64;
    let r_ohm = shunt.get::<ohm>() as f64;
    let value = libm::round(CALIBRATION_SCALING as f64 / (lsb_a * r_ohm));
    value.clamp(0.0, u16::MAX as f64) as u16
}

/// Current LSB implied by a calibration register value and shunt.
/// Infinite when `calibration` is zero.
pub fn current_lsb_from_register(calibration: u16, shunt: ElectricalResistance) -> ElectricCurrent {
    let r_ohm = shunt.get::<ohm>() as f64;
    let lsb_a = CALIBRATION_SCALING as f64 / (calibration as f64 * r_ohm);
    ElectricCurrent::new::<ampere>(lsb_a as f32)
}
