#![cfg(feature = "async")]

mod common;

use approx::assert_relative_eq;
use common::*;
use ina226_async_rs::units::{ElectricCurrent, ElectricalResistance};
use ina226_async_rs::{Configuration, Error, OperatingMode, Register};
use uom::si::{electric_current::ampere, electric_potential::millivolt, electrical_resistance::ohm};

#[tokio::test]
async fn test_async_configure_and_reset() {
    let expectations = [
        expect_write(Register::Configuration, 0x0007),
        expect_write(Register::Configuration, 0x8000),
    ];
    let (mut ina, mut i2c) = create_ina226_driver(&expectations);

    ina.configure(&Configuration::new().with_mode(OperatingMode::ShuntBusContinuous))
        .await
        .unwrap();
    ina.reset().await.unwrap();

    i2c.done();
}

#[tokio::test]
async fn test_async_read_voltages() {
    let mut expectations = Vec::new();
    expectations.extend(expect_read(Register::BusVoltage, 1000));
    expectations.extend(expect_read(Register::ShuntVoltage, 100));
    let (mut ina, mut i2c) = create_ina226_driver(&expectations);

    let bus = ina.read_bus_voltage().await.unwrap();
    assert_relative_eq!(bus.get::<millivolt>(), 1250.0);
    let shunt = ina.read_shunt_voltage().await.unwrap();
    assert_relative_eq!(shunt.get::<millivolt>(), 0.25, epsilon = 1e-6);

    i2c.done();
}

#[tokio::test]
async fn test_async_read_shunt_current() {
    let mut expectations = vec![expect_write(Register::Calibration, 25600)];
    expectations.extend(expect_read(Register::Current, 128));
    expectations.extend(expect_read(Register::Calibration, 25600));
    let (mut ina, mut i2c) = create_ina226_driver(&expectations);

    assert_eq!(ina.current_resolution().await, Err(Error::NotCalibrated));

    ina.calibrate(
        ElectricalResistance::new::<ohm>(0.01),
        ElectricCurrent::new::<ampere>(0.5),
    )
    .await
    .unwrap();
    let current = ina.read_shunt_current().await.unwrap();
    assert_relative_eq!(current.get::<ampere>(), 0.00256, epsilon = 1e-7);

    i2c.done();
}
