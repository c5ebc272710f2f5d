//! Static protocol fields carried by every frame.

use crate::consts::{
    DEFAULT_G1, DEFAULT_G2, DEFAULT_ST1, DEFAULT_V1, DEFAULT_V2, FREQ_FIELD_LEN, FREQ_PLACEHOLDER,
};

/// The constant part of a Primesat frame.
///
/// Everything in a frame except the azimuth, elevation and checksum comes from
/// this value. It is captured once when a [`Rotator`](crate::rotator::Rotator)
/// is created, so a controller with different calibration or mode bytes only
/// needs a different `ProtocolConfig`.
///
/// The [`Default`] matches the ground station unit the backend was written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct ProtocolConfig {
    /// Uplink frequency field, sent verbatim.
    pub uplink: [u8; FREQ_FIELD_LEN],
    /// Downlink frequency field, sent verbatim.
    pub downlink: [u8; FREQ_FIELD_LEN],
    /// Device mode flags (radio type, radio update, rotator type, rotator update).
    pub st1: u8,
    /// Radio status byte, ignored when radio updates are disabled in `st1`.
    pub st2: u8,
    /// Radio status byte, ignored when radio updates are disabled in `st1`.
    pub st3: u8,
    /// First CI-V address byte (radio only).
    pub civ1: u8,
    /// Second CI-V address byte (radio only).
    pub civ2: u8,
    /// Azimuth calibration byte.
    pub v1: u8,
    /// Elevation calibration byte.
    pub v2: u8,
    /// Azimuth threshold in degrees before the controller starts rotating.
    pub g1: u8,
    /// Elevation threshold in degrees before the controller starts rotating.
    pub g2: u8,
}

impl ProtocolConfig {
    /// The configuration used by the original ground station.
    pub const PRIMESAT: Self = Self {
        uplink: FREQ_PLACEHOLDER,
        downlink: FREQ_PLACEHOLDER,
        st1: DEFAULT_ST1,
        st2: 0,
        st3: 0,
        civ1: 0,
        civ2: 0,
        v1: DEFAULT_V1,
        v2: DEFAULT_V2,
        g1: DEFAULT_G1,
        g2: DEFAULT_G2,
    };

    /// The nine trailing status bytes in wire order: `st1`, `st2`, `st3`,
    /// `civ1`, `civ2`, `v1`, `v2`, `g1`, `g2`.
    pub fn status_bytes(&self) -> [u8; 9] {
        [
            self.st1, self.st2, self.st3, self.civ1, self.civ2, self.v1, self.v2, self.g1,
            self.g2,
        ]
    }
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self::PRIMESAT
    }
}
