use crate::registers::{
    CONFIG_AVG_SHIFT, CONFIG_MODE_SHIFT, CONFIG_VBUSCT_SHIFT, CONFIG_VSHCT_SHIFT,
};
use crate::units::{ElectricCurrent, ElectricalResistance};
use uom::si::{electric_current::ampere, electrical_resistance::ohm};

/// Operating mode (MODE bits 2-0).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum OperatingMode {
    PowerDown = 0b000,
    ShuntTriggered = 0b001,
    BusTriggered = 0b010,
    ShuntBusTriggered = 0b011,
    AdcOff = 0b100,
    ShuntContinuous = 0b101,
    BusContinuous = 0b110,
    ShuntBusContinuous = 0b111,
}

impl OperatingMode {
    /// Field pattern already shifted into place.
    pub fn bits(self) -> u16 {
        (self as u16) << CONFIG_MODE_SHIFT
    }

    /// Decodes the MODE field of a configuration word.
    pub fn from_bits(word: u16) -> Self {
        match (word >> CONFIG_MODE_SHIFT) & 0b111 {
            0b000 => OperatingMode::PowerDown,
            0b001 => OperatingMode::ShuntTriggered,
            0b010 => OperatingMode::BusTriggered,
            0b011 => OperatingMode::ShuntBusTriggered,
            0b100 => OperatingMode::AdcOff,
            0b101 => OperatingMode::ShuntContinuous,
            0b110 => OperatingMode::BusContinuous,
            _ => OperatingMode::ShuntBusContinuous,
        }
    }
}

/// Conversion time levels shared by the shunt and bus ADC channels.
macro_rules! conversion_time {
    ($(#[$meta:meta])* $name:ident, $shift:expr) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[repr(u16)]
        pub enum $name {
            Us140 = 0b000,
            Us204 = 0b001,
            Us332 = 0b010,
            Us588 = 0b011,
            Us1100 = 0b100,
            Us2116 = 0b101,
            Us4156 = 0b110,
            Us8244 = 0b111,
        }

        impl $name {
            /// Field pattern already shifted into place.
            pub fn bits(self) -> u16 {
                (self as u16) << $shift
            }

            /// Decodes this field of a configuration word.
            pub fn from_bits(word: u16) -> Self {
                match (word >> $shift) & 0b111 {
                    0b000 => $name::Us140,
                    0b001 => $name::Us204,
                    0b010 => $name::Us332,
                    0b011 => $name::Us588,
                    0b100 => $name::Us1100,
                    0b101 => $name::Us2116,
                    0b110 => $name::Us4156,
                    _ => $name::Us8244,
                }
            }

            /// Conversion time in microseconds.
            pub fn micros(self) -> u32 {
                match self {
                    $name::Us140 => 140,
                    $name::Us204 => 204,
                    $name::Us332 => 332,
                    $name::Us588 => 588,
                    $name::Us1100 => 1100,
                    $name::Us2116 => 2116,
                    $name::Us4156 => 4156,
                    $name::Us8244 => 8244,
                }
            }
        }
    };
}

conversion_time!(
    /// Shunt voltage conversion time (VSHCT bits 5-3).
    ShuntConversionTime,
    CONFIG_VSHCT_SHIFT
);

conversion_time!(
    /// Bus voltage conversion time (VBUSCT bits 8-6).
    BusConversionTime,
    CONFIG_VBUSCT_SHIFT
);

/// Number of samples averaged per reading (AVG bits 11-9).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum AveragingCount {
    Samples1 = 0b000,
    Samples4 = 0b001,
    Samples16 = 0b010,
    Samples64 = 0b011,
    Samples128 = 0b100,
    Samples256 = 0b101,
    Samples512 = 0b110,
    Samples1024 = 0b111,
}

impl AveragingCount {
    pub fn bits(self) -> u16 {
        (self as u16) << CONFIG_AVG_SHIFT
    }

    pub fn from_bits(word: u16) -> Self {
        match (word >> CONFIG_AVG_SHIFT) & 0b111 {
            0b000 => AveragingCount::Samples1,
            0b001 => AveragingCount::Samples4,
            0b010 => AveragingCount::Samples16,
            0b011 => AveragingCount::Samples64,
            0b100 => AveragingCount::Samples128,
            0b101 => AveragingCount::Samples256,
            0b110 => AveragingCount::Samples512,
            _ => AveragingCount::Samples1024,
        }
    }

    pub fn samples(self) -> u16 {
        match self {
            AveragingCount::Samples1 => 1,
            AveragingCount::Samples4 => 4,
            AveragingCount::Samples16 => 16,
            AveragingCount::Samples64 => 64,
            AveragingCount::Samples128 => 128,
            AveragingCount::Samples256 => 256,
            AveragingCount::Samples512 => 512,
            AveragingCount::Samples1024 => 1024,
        }
    }
}

/// Contents of the Configuration register.
///
/// Fields left as `None` are written as zero, which is the lowest setting of
/// that field on the chip.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration {
    pub mode: Option<OperatingMode>,
    pub shunt_conversion_time: Option<ShuntConversionTime>,
    pub bus_conversion_time: Option<BusConversionTime>,
    pub averaging: Option<AveragingCount>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: OperatingMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_shunt_conversion_time(mut self, time: ShuntConversionTime) -> Self {
        self.shunt_conversion_time = Some(time);
        self
    }

    pub fn with_bus_conversion_time(mut self, time: BusConversionTime) -> Self {
        self.bus_conversion_time = Some(time);
        self
    }

    pub fn with_averaging(mut self, averaging: AveragingCount) -> Self {
        self.averaging = Some(averaging);
        self
    }

    /// Combines the present fields into the 16-bit register word.
    pub fn bits(&self) -> u16 {
        let mut word: u16 = 0;
        if let Some(mode) = self.mode {
            word |= mode.bits();
        }
        if let Some(time) = self.shunt_conversion_time {
            word |= time.bits();
        }
        if let Some(time) = self.bus_conversion_time {
            word |= time.bits();
        }
        if let Some(averaging) = self.averaging {
            word |= averaging.bits();
        }
        word
    }

    /// Decodes a word read back from the Configuration register.
    /// The reset bit and the reserved bits are ignored.
    pub fn from_bits(word: u16) -> Self {
        Self {
            mode: Some(OperatingMode::from_bits(word)),
            shunt_conversion_time: Some(ShuntConversionTime::from_bits(word)),
            bus_conversion_time: Some(BusConversionTime::from_bits(word)),
            averaging: Some(AveragingCount::from_bits(word)),
        }
    }
}

/// Circuit parameters stored by the last calibration.
/// A zero shunt resistance means the driver has not been calibrated yet.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CalibrationState {
    pub shunt_resistance: ElectricalResistance,
    pub max_expected_current: ElectricCurrent,
}

impl Default for CalibrationState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalibrationState {
    pub fn new() -> Self {
        Self {
            shunt_resistance: ElectricalResistance::new::<ohm>(0.0),
            max_expected_current: ElectricCurrent::new::<ampere>(0.0),
        }
    }

    pub fn is_calibrated(&self) -> bool {
        self.shunt_resistance.get::<ohm>() > 0.0
    }
}
