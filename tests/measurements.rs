#![cfg(not(feature = "async"))]

mod common;

use approx::assert_relative_eq;
use common::*;
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::Transaction as I2cTransaction;
use ina226_async_rs::{Error, Register};
use uom::si::electric_potential::millivolt;

#[test]
fn test_read_bus_voltage() {
    let mut expectations = Vec::new();
    expectations.extend(expect_read(Register::BusVoltage, 1000));
    expectations.extend(expect_read(Register::BusVoltage, 0));
    let (mut ina, mut i2c) = create_ina226_driver(&expectations);

    assert_relative_eq!(ina.read_bus_voltage().unwrap().get::<millivolt>(), 1250.0);
    assert_relative_eq!(ina.read_bus_voltage().unwrap().get::<millivolt>(), 0.0);

    i2c.done();
}

#[test]
fn test_read_bus_voltage_is_unsigned() {
    let expectations = expect_read(Register::BusVoltage, 0x8000);
    let (mut ina, mut i2c) = create_ina226_driver(&expectations);

    assert_relative_eq!(
        ina.read_bus_voltage().unwrap().get::<millivolt>(),
        40960.0,
        epsilon = 1e-2
    );

    i2c.done();
}

#[test]
fn test_read_shunt_voltage_is_signed() {
    let mut expectations = Vec::new();
    expectations.extend(expect_read(Register::ShuntVoltage, 0x8000));
    expectations.extend(expect_read(Register::ShuntVoltage, 100));
    expectations.extend(expect_read(Register::ShuntVoltage, 0xFFFF));
    let (mut ina, mut i2c) = create_ina226_driver(&expectations);

    assert_relative_eq!(
        ina.read_shunt_voltage().unwrap().get::<millivolt>(),
        -81.92,
        epsilon = 1e-4
    );
    assert_relative_eq!(
        ina.read_shunt_voltage().unwrap().get::<millivolt>(),
        0.25,
        epsilon = 1e-6
    );
    assert_relative_eq!(
        ina.read_shunt_voltage().unwrap().get::<millivolt>(),
        -0.0025,
        epsilon = 1e-7
    );

    i2c.done();
}

#[test]
fn test_read_shunt_current_register_is_signed() {
    let mut expectations = Vec::new();
    expectations.extend(expect_read(Register::Current, 128));
    expectations.extend(expect_read(Register::Current, 0xFF80));
    let (mut ina, mut i2c) = create_ina226_driver(&expectations);

    assert_eq!(ina.read_shunt_current_register().unwrap(), 128);
    assert_eq!(ina.read_shunt_current_register().unwrap(), -128);

    i2c.done();
}

#[test]
fn test_read_address_write_failure() {
    let expectations =
        [I2cTransaction::write(INA226_ADDR, vec![Register::BusVoltage as u8]).with_error(ErrorKind::Other)];
    let (mut ina, mut i2c) = create_ina226_driver(&expectations);

    assert_eq!(ina.read_bus_voltage(), Err(Error::I2c(ErrorKind::Other)));

    i2c.done();
}

#[test]
fn test_read_data_failure() {
    let expectations = [
        I2cTransaction::write(INA226_ADDR, vec![Register::ShuntVoltage as u8]),
        I2cTransaction::read(INA226_ADDR, vec![0x00, 0x00]).with_error(ErrorKind::Other),
    ];
    let (mut ina, mut i2c) = create_ina226_driver(&expectations);

    assert_eq!(ina.read_shunt_voltage(), Err(Error::I2c(ErrorKind::Other)));

    i2c.done();
}
