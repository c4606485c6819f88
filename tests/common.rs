#![allow(dead_code)]

use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use ina226_async_rs::{Ina226, Register, DEFAULT_ADDRESS};

pub const INA226_ADDR: u8 = DEFAULT_ADDRESS;

/// Creates a driver on a mock bus, returning a clone of the mock for verification.
pub fn create_ina226_driver(transactions: &[I2cTransaction]) -> (Ina226<I2cMock>, I2cMock) {
    let i2c = I2cMock::new(transactions);
    let driver = Ina226::new(i2c.clone(), INA226_ADDR);
    (driver, i2c)
}

/// Address-select write followed by the two-byte big-endian read.
pub fn expect_read(reg: Register, value: u16) -> [I2cTransaction; 2] {
    [
        I2cTransaction::write(INA226_ADDR, vec![reg as u8]),
        I2cTransaction::read(INA226_ADDR, value.to_be_bytes().to_vec()),
    ]
}

pub fn expect_write(reg: Register, value: u16) -> I2cTransaction {
    let [hi, lo] = value.to_be_bytes();
    I2cTransaction::write(INA226_ADDR, vec![reg as u8, hi, lo])
}
