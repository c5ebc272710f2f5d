//! Capabilities of the Primesat rotator.
//!
//! Plain data describing the device: identification, travel limits and the
//! serial line settings the controller expects. Nothing here is registered
//! anywhere; hosts read it to open the port and to validate targets.

/// Development status of the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum BackendStatus {
    /// Incomplete, only partially tested against hardware.
    Alpha,
    /// Feature complete, still being tested.
    Beta,
    /// Tested and in regular use.
    Stable,
}

/// Axes a rotator can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum RotatorType {
    /// Azimuth only.
    Azimuth,
    /// Elevation only.
    Elevation,
    /// Azimuth and elevation.
    AzEl,
}

/// Serial parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum Parity {
    /// No parity bit.
    None,
    /// Odd parity.
    Odd,
    /// Even parity.
    Even,
}

/// Serial flow control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum Handshake {
    /// No flow control.
    None,
    /// XON/XOFF software flow control.
    Software,
    /// RTS/CTS hardware flow control.
    Hardware,
}

/// Serial line settings expected by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct SerialSettings {
    /// Lowest supported baud rate.
    pub rate_min: u32,
    /// Highest supported baud rate.
    pub rate_max: u32,
    /// Data bits per character.
    pub data_bits: u8,
    /// Stop bits per character.
    pub stop_bits: u8,
    /// Parity.
    pub parity: Parity,
    /// Flow control.
    pub handshake: Handshake,
    /// Delay between two written bytes, in milliseconds.
    pub write_delay_ms: u32,
    /// Delay after a complete frame has been written, in milliseconds.
    pub post_write_delay_ms: u32,
    /// Read/write timeout, in milliseconds.
    pub timeout_ms: u32,
    /// Retries a host may attempt on a failed exchange.
    pub retry: u8,
}

/// Static description of a rotator model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct RotatorCaps {
    /// Model name.
    pub model_name: &'static str,
    /// Manufacturer name.
    pub mfg_name: &'static str,
    /// Backend version string.
    pub version: &'static str,
    /// Human readable description returned by `info`.
    pub info: &'static str,
    /// Development status.
    pub status: BackendStatus,
    /// Driven axes.
    pub rot_type: RotatorType,
    /// Serial line settings.
    pub serial: SerialSettings,
    /// Minimum azimuth in degrees.
    pub min_az: f64,
    /// Maximum azimuth in degrees.
    pub max_az: f64,
    /// Minimum elevation in degrees.
    pub min_el: f64,
    /// Maximum elevation in degrees.
    pub max_el: f64,
}

impl RotatorCaps {
    /// Clamps an azimuth into `min_az..=max_az`. NaN maps to `min_az`.
    pub fn clamp_azimuth(&self, az: f64) -> f64 {
        clamp(az, self.min_az, self.max_az)
    }

    /// Clamps an elevation into `min_el..=max_el`. NaN maps to `min_el`.
    pub fn clamp_elevation(&self, el: f64) -> f64 {
        clamp(el, self.min_el, self.max_el)
    }
}

fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Capabilities of the Primetec Primesat controller.
pub static PRIMESAT_CAPS: RotatorCaps = RotatorCaps {
    model_name: "Primesat",
    mfg_name: "Primetec",
    version: "20230706.0",
    info: "Primesat Controller Rotator",
    status: BackendStatus::Alpha,
    rot_type: RotatorType::AzEl,
    serial: SerialSettings {
        rate_min: 9600,
        rate_max: 9600,
        data_bits: 8,
        stop_bits: 1,
        parity: Parity::None,
        handshake: Handshake::None,
        write_delay_ms: 0,
        post_write_delay_ms: 0,
        timeout_ms: 1000,
        retry: 3,
    },
    min_az: 0.0,
    max_az: 360.0,
    min_el: 0.0,
    max_el: 180.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_keeps_in_range_values() {
        assert_eq!(PRIMESAT_CAPS.clamp_azimuth(275.9), 275.9);
        assert_eq!(PRIMESAT_CAPS.clamp_elevation(42.3), 42.3);
    }

    #[test]
    fn test_clamp_limits_out_of_range_values() {
        assert_eq!(PRIMESAT_CAPS.clamp_azimuth(-10.0), 0.0);
        assert_eq!(PRIMESAT_CAPS.clamp_azimuth(1440.0), 360.0);
        assert_eq!(PRIMESAT_CAPS.clamp_elevation(200.0), 180.0);
        assert_eq!(PRIMESAT_CAPS.clamp_elevation(f64::NAN), 0.0);
    }

    #[test]
    fn test_serial_line_is_9600_8n1() {
        let serial = PRIMESAT_CAPS.serial;
        assert_eq!((serial.rate_min, serial.rate_max), (9600, 9600));
        assert_eq!((serial.data_bits, serial.stop_bits), (8, 1));
        assert_eq!(serial.parity, Parity::None);
        assert_eq!(serial.handshake, Handshake::None);
    }
}
