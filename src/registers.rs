/// INA226 register map. Every register is a single 16-bit big-endian word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Configuration Register
    Configuration = 0x00,
    /// Shunt Voltage Register (signed, 2.5 μV/LSB)
    ShuntVoltage = 0x01,
    /// Bus Voltage Register (unsigned, 1.25 mV/LSB)
    BusVoltage = 0x02,
    /// Power Register
    Power = 0x03,
    /// Current Register (signed)
    Current = 0x04,
    /// Calibration Register
    Calibration = 0x05,
    /// Mask/Enable Register
    MaskEnable = 0x06,
    /// Alert Limit Register
    AlertLimit = 0x07,
    /// Manufacturer ID Register
    ManufacturerId = 0xFE,
    /// Die ID Register
    DieId = 0xFF,
}

impl From<Register> for u8 {
    fn from(reg: Register) -> u8 {
        reg as u8
    }
}

// Configuration register layout
//
//  15  | 14-12 | 11-9 |  8-6   |  5-3  | 2-0
//  RST |   -   | AVG  | VBUSCT | VSHCT | MODE
pub const CONFIG_RESET: u16 = 1 << 15;

pub const CONFIG_AVG_SHIFT: u16 = 9;
pub const CONFIG_VBUSCT_SHIFT: u16 = 6;
pub const CONFIG_VSHCT_SHIFT: u16 = 3;
pub const CONFIG_MODE_SHIFT: u16 = 0;

pub const CONFIG_AVG_MASK: u16 = 0b111 << CONFIG_AVG_SHIFT;
pub const CONFIG_VBUSCT_MASK: u16 = 0b111 << CONFIG_VBUSCT_SHIFT;
pub const CONFIG_VSHCT_MASK: u16 = 0b111 << CONFIG_VSHCT_SHIFT;
pub const CONFIG_MODE_MASK: u16 = 0b111 << CONFIG_MODE_SHIFT;

/// Value of the Manufacturer ID register ("TI" in ASCII).
pub const MANUFACTURER_ID: u16 = 0x5449;
/// Value of the Die ID register.
pub const DIE_ID: u16 = 0x2260;

/// Default 7-bit address with A0 and A1 tied to GND.
pub const DEFAULT_ADDRESS: u8 = 0x40;

/// Bus voltage LSB in millivolts.
pub const BUS_VOLTAGE_LSB_MV: f32 = 1.25;
/// Shunt voltage LSB in millivolts (2.5 μV).
pub const SHUNT_VOLTAGE_LSB_MV: f32 = 0.0025;
/// Internal fixed value used by the chip to scale the calibration register, in volts.
pub const CALIBRATION_SCALING: f32 = 0.00512;
/// Power LSB is fixed at this multiple of the current LSB.
pub const POWER_LSB_FACTOR: f32 = 25.0;
/// Full positive range of the signed current register (2^15).
pub const CURRENT_REGISTER_RANGE: f32 = 32768.0;
