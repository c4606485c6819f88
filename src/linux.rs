use linux_embedded_hal::{I2CError, I2cdev};

use crate::{Error, Ina226};

impl Ina226<I2cdev> {
    /// Opens `/dev/i2c-<bus_id>` and binds a driver to `address` on it.
    pub fn open(bus_id: u8, address: u8) -> Result<Self, Error<I2CError>> {
        let i2c = I2cdev::new(format!("/dev/i2c-{}", bus_id))
            .map_err(|e| Error::I2c(I2CError::from(e)))?;
        Ok(Self::new(i2c, address))
    }
}
