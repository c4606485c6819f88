#[cfg(feature = "defmt")]
use defmt::Format;

/// Represents potential errors when interacting with the INA226 chip.
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub enum Error<E> {
    /// An error occurred during I2C communication.
    I2c(E),
    /// A current-derived value was requested before `calibrate` succeeded
    /// in storing a positive shunt resistance.
    NotCalibrated,
    /// Shunt resistance or maximum expected current is not a finite positive value.
    InvalidCalibration,
}
