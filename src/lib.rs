#![cfg_attr(not(feature = "linux"), no_std)]

#[macro_use]
extern crate uom;

#[cfg(feature = "defmt")]
extern crate defmt;

#[cfg(not(feature = "async"))]
use embedded_hal::i2c::I2c;
#[cfg(feature = "async")]
use embedded_hal_async::i2c::I2c;

pub mod calibration;
pub mod data_types;
pub mod errors;
pub mod registers;
pub mod units;

#[cfg(all(feature = "linux", not(feature = "async")))]
mod linux;

pub use data_types::{
    AveragingCount, BusConversionTime, CalibrationState, Configuration, OperatingMode,
    ShuntConversionTime,
};
pub use errors::Error;
pub use registers::{Register, DEFAULT_ADDRESS};

use crate::registers::{
    BUS_VOLTAGE_LSB_MV, CONFIG_RESET, POWER_LSB_FACTOR, SHUNT_VOLTAGE_LSB_MV,
};
use crate::units::{ElectricCurrent, ElectricPotential, ElectricalResistance, Power};
use uom::si::electric_current::ampere;
use uom::si::electric_potential::millivolt;
use uom::si::electrical_resistance::ohm;
use uom::si::power::watt;

/// INA226 driver
pub struct Ina226<I2C> {
    address: u8,
    i2c: I2C,
    calibration: CalibrationState,
}

impl<I2C> Ina226<I2C> {
    /// Creates a new, uncalibrated instance of the INA226 driver.
    ///
    /// # Arguments
    ///
    /// * `i2c` - The I2C peripheral.
    /// * `address` - The 7-bit I2C address of the INA226 chip.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            address,
            i2c,
            calibration: CalibrationState::new(),
        }
    }

    /// Destroys the driver and returns the I2C peripheral.
    pub fn release(self) -> I2C {
        self.i2c
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Parameters stored by the last call to `calibrate`.
    pub fn calibration_state(&self) -> CalibrationState {
        self.calibration
    }
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "RegisterAccess",),
    async(feature = "async", keep_self)
)]
#[allow(async_fn_in_trait)]
/// Trait for abstracting 16-bit register access.
pub trait RegisterAccess<E>
where
    Self: Sized,
{
    /// Selects `reg` with an address write, then reads the big-endian word back.
    async fn read_register(&mut self, reg: Register) -> Result<u16, Error<E>>;

    /// Writes `[reg, high byte, low byte]` in a single bus write.
    async fn write_register(&mut self, reg: Register, value: u16) -> Result<(), Error<E>>;
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "Ina226",),
    async(feature = "async", keep_self)
)]
impl<I2C, E> RegisterAccess<E> for Ina226<I2C>
where
    I2C: I2c<Error = E>,
{
    async fn read_register(&mut self, reg: Register) -> Result<u16, Error<E>> {
        self.i2c
            .write(self.address, &[reg as u8])
            .await
            .map_err(Error::I2c)?;

        let mut data = [0u8; 2];
        self.i2c
            .read(self.address, &mut data)
            .await
            .map_err(Error::I2c)?;
        Ok(u16::from_be_bytes(data))
    }

    async fn write_register(&mut self, reg: Register, value: u16) -> Result<(), Error<E>> {
        let [hi, lo] = value.to_be_bytes();
        self.i2c
            .write(self.address, &[reg as u8, hi, lo])
            .await
            .map_err(Error::I2c)
    }
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "Ina226",),
    async(feature = "async", keep_self)
)]
impl<I2C, E> Ina226<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Writes the given configuration to the Configuration register.
    /// Fields left unset are written as zero.
    pub async fn configure(&mut self, config: &Configuration) -> Result<(), Error<E>> {
        self.write_register(Register::Configuration, config.bits())
            .await
    }

    /// Writes only the reset bit. The chip restores its power-on defaults
    /// and clears the bit itself.
    pub async fn reset(&mut self) -> Result<(), Error<E>> {
        self.write_register(Register::Configuration, CONFIG_RESET)
            .await
    }

    /// Stores the circuit parameters and programs the Calibration register.
    ///
    /// The parameters are kept even if the register write fails, so a
    /// later `current_resolution` uses them against whatever the chip holds.
    pub async fn calibrate(
        &mut self,
        shunt_resistance: ElectricalResistance,
        max_expected_current: ElectricCurrent,
    ) -> Result<(), Error<E>> {
        let r_ohm = shunt_resistance.get::<ohm>();
        let current_lsb = match calibration::approximate_current_lsb(max_expected_current) {
            Some(lsb) if r_ohm.is_finite() && r_ohm > 0.0 => lsb,
            _ => {
                #[cfg(feature = "defmt")]
                defmt::error!(
                    "Rejected calibration: r_shunt={} ohm, i_max={} A",
                    r_ohm,
                    max_expected_current.get::<ampere>()
                );
                return Err(Error::InvalidCalibration);
            }
        };

        self.calibration = CalibrationState {
            shunt_resistance,
            max_expected_current,
        };

        let value = calibration::calibration_value(current_lsb, shunt_resistance);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Calibration: r_shunt={} ohm, i_max={} A, current_lsb={} A, CAL={}",
            r_ohm,
            max_expected_current.get::<ampere>(),
            current_lsb.get::<ampere>(),
            value
        );

        self.write_register(Register::Calibration, value).await
    }

    /// Current represented by one count of the Current register, derived
    /// from the chip's Calibration register and the stored shunt resistance.
    pub async fn current_resolution(&mut self) -> Result<ElectricCurrent, Error<E>> {
        if !self.calibration.is_calibrated() {
            return Err(Error::NotCalibrated);
        }

        let calibration = self.read_calibration_register().await?;
        if calibration == 0 {
            return Err(Error::NotCalibrated);
        }

        Ok(calibration::current_lsb_from_register(
            calibration,
            self.calibration.shunt_resistance,
        ))
    }

    /// Reads the bus voltage (1.25 mV/LSB).
    pub async fn read_bus_voltage(&mut self) -> Result<ElectricPotential, Error<E>> {
        let raw = self.read_register(Register::BusVoltage).await?;
        Ok(ElectricPotential::new::<millivolt>(
            raw as f32 * BUS_VOLTAGE_LSB_MV,
        ))
    }

    /// Reads the signed shunt voltage (2.5 μV/LSB).
    pub async fn read_shunt_voltage(&mut self) -> Result<ElectricPotential, Error<E>> {
        let raw = self.read_register(Register::ShuntVoltage).await? as i16;
        Ok(ElectricPotential::new::<millivolt>(
            raw as f32 * SHUNT_VOLTAGE_LSB_MV,
        ))
    }

    /// Reads the raw, signed Current register.
    pub async fn read_shunt_current_register(&mut self) -> Result<i16, Error<E>> {
        let raw = self.read_register(Register::Current).await?;
        Ok(raw as i16)
    }

    /// Reads the Current register and scales it by `current_resolution`.
    /// The Current register is read first, so a bus failure takes precedence
    /// over `NotCalibrated`.
    pub async fn read_shunt_current(&mut self) -> Result<ElectricCurrent, Error<E>> {
        let raw = self.read_shunt_current_register().await?;
        let resolution = self.current_resolution().await?;
        Ok(resolution * raw as f32)
    }

    /// Reads the raw Power register.
    pub async fn read_power_register(&mut self) -> Result<u16, Error<E>> {
        self.read_register(Register::Power).await
    }

    /// Reads the Power register. One count is 25 times the current LSB in watts.
    pub async fn read_power(&mut self) -> Result<Power, Error<E>> {
        let raw = self.read_power_register().await?;
        let resolution = self.current_resolution().await?;
        Ok(Power::new::<watt>(
            raw as f32 * POWER_LSB_FACTOR * resolution.get::<ampere>(),
        ))
    }

    pub async fn read_configuration_register(&mut self) -> Result<u16, Error<E>> {
        self.read_register(Register::Configuration).await
    }

    /// Reads back and decodes the Configuration register.
    pub async fn read_configuration(&mut self) -> Result<Configuration, Error<E>> {
        let word = self.read_configuration_register().await?;
        Ok(Configuration::from_bits(word))
    }

    pub async fn read_calibration_register(&mut self) -> Result<u16, Error<E>> {
        self.read_register(Register::Calibration).await
    }

    /// Reads the Manufacturer ID register, 0x5449 on a genuine part.
    pub async fn read_manufacturer_register(&mut self) -> Result<u16, Error<E>> {
        self.read_register(Register::ManufacturerId).await
    }

    /// Reads the Die ID register, 0x2260 on a genuine part.
    pub async fn read_die_id_register(&mut self) -> Result<u16, Error<E>> {
        self.read_register(Register::DieId).await
    }
}
