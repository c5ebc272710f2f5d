//! The 48-byte Primesat command frame.
//!
//! [`Frame`] owns the serialized bytes directly. Constant fields are written
//! once from a [`ProtocolConfig`] when the frame is built; afterwards only the
//! azimuth and elevation digits change, and every change re-seals the checksum
//! so the buffer is always ready to be written to the wire.
//!
//! ## Example
//!
//! ```rust
//! use primesat::config::ProtocolConfig;
//! use primesat::frame::Frame;
//!
//! let mut frame = Frame::new(&ProtocolConfig::default());
//! frame.encode_position(275.9, 42.3);
//!
//! assert_eq!(frame.azimuth_field(), b"275");
//! assert_eq!(frame.elevation_field(), b"042");
//! assert!(frame.is_sealed());
//! ```

use core::ops::Range;

use crate::checksum::frame_checksum;
use crate::config::ProtocolConfig;
use crate::consts::{
    AZ_FLAG, AZ_FLAG_OFFSET, AZ_OFFSET, CHECKSUM_OFFSET, DL_FLAG, DL_FLAG_OFFSET, DL_OFFSET,
    EL_FLAG, EL_FLAG_OFFSET, EL_OFFSET, END_FLAG, END_OFFSET, FRAME_LEN, FREQ_FIELD_LEN,
    POSITION_DIGITS, ST1_OFFSET, START_FLAG, START_OFFSET, UL_FLAG, UL_FLAG_OFFSET, UL_OFFSET,
    ZERO_POSITION,
};
use crate::encoding::{decode_digits, encode_digits, truncate_degrees};

const AZ_RANGE: Range<usize> = AZ_OFFSET..AZ_OFFSET + POSITION_DIGITS;
const EL_RANGE: Range<usize> = EL_OFFSET..EL_OFFSET + POSITION_DIGITS;

/// A serialized command frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    bytes: [u8; FRAME_LEN],
}

impl Frame {
    /// Builds a frame holding the constant fields of `config` and a `000`/`000`
    /// position, with a valid checksum.
    pub fn new(config: &ProtocolConfig) -> Self {
        let mut frame = Self {
            bytes: [0; FRAME_LEN],
        };
        frame.init(config);
        frame
    }

    /// Rewrites every constant field from `config` and resets the position to
    /// `000`/`000`.
    ///
    /// Calling it twice with the same configuration leaves the frame unchanged.
    pub fn init(&mut self, config: &ProtocolConfig) {
        self.bytes[START_OFFSET] = START_FLAG;
        self.write(AZ_FLAG_OFFSET, &AZ_FLAG);
        self.write(AZ_OFFSET, &ZERO_POSITION);
        self.write(EL_FLAG_OFFSET, &EL_FLAG);
        self.write(EL_OFFSET, &ZERO_POSITION);
        self.write(UL_FLAG_OFFSET, &UL_FLAG);
        self.write(UL_OFFSET, &config.uplink);
        self.write(DL_FLAG_OFFSET, &DL_FLAG);
        self.write(DL_OFFSET, &config.downlink);
        self.write(ST1_OFFSET, &config.status_bytes());
        self.bytes[END_OFFSET] = END_FLAG;
        self.seal();
    }

    /// Writes the integer part of `az` and `el` into the position fields and
    /// recomputes the checksum.
    ///
    /// Values are truncated, not rounded. Angles outside `0..=999` saturate at
    /// the nearest bound instead of wrapping; see [`truncate_degrees`].
    pub fn encode_position(&mut self, az: f64, el: f64) {
        self.write(AZ_OFFSET, &encode_digits(truncate_degrees(az)));
        self.write(EL_OFFSET, &encode_digits(truncate_degrees(el)));
        self.seal();
    }

    /// Computes the checksum of the current contents.
    ///
    /// This is a pure function of the covered bytes; compare it with
    /// [`stored_checksum`](Frame::stored_checksum) to check the frame.
    pub fn checksum(&self) -> u8 {
        frame_checksum(&self.bytes)
    }

    /// The checksum byte as it will be sent.
    pub fn stored_checksum(&self) -> u8 {
        self.bytes[CHECKSUM_OFFSET]
    }

    /// Whether the stored checksum matches the contents.
    pub fn is_sealed(&self) -> bool {
        self.stored_checksum() == self.checksum()
    }

    /// The three azimuth digits.
    pub fn azimuth_field(&self) -> &[u8] {
        &self.bytes[AZ_RANGE]
    }

    /// The three elevation digits.
    pub fn elevation_field(&self) -> &[u8] {
        &self.bytes[EL_RANGE]
    }

    /// The encoded azimuth in whole degrees.
    pub fn azimuth(&self) -> Option<u16> {
        decode_digits(self.azimuth_field())
    }

    /// The encoded elevation in whole degrees.
    pub fn elevation(&self) -> Option<u16> {
        decode_digits(self.elevation_field())
    }

    /// The uplink frequency field.
    pub fn uplink_field(&self) -> &[u8] {
        &self.bytes[UL_OFFSET..UL_OFFSET + FREQ_FIELD_LEN]
    }

    /// The downlink frequency field.
    pub fn downlink_field(&self) -> &[u8] {
        &self.bytes[DL_OFFSET..DL_OFFSET + FREQ_FIELD_LEN]
    }

    /// The full wire representation.
    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.bytes
    }

    fn write(&mut self, offset: usize, field: &[u8]) {
        self.bytes[offset..offset + field.len()].copy_from_slice(field);
    }

    fn seal(&mut self) {
        self.bytes[CHECKSUM_OFFSET] = self.checksum();
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(&ProtocolConfig::default())
    }
}

#[cfg(feature = "defmt-0-3")]
impl defmt::Format for Frame {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Frame({=[u8]:a})", &self.bytes[..]);
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
