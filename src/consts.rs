//! Constants describing the Primesat command frame.
//!
//! The controller accepts a single message type: a fixed 48-byte frame that
//! carries the target azimuth and elevation as ASCII digits, framed by `$` and `#`
//! and protected by a one-byte XOR checksum.
//!
//! ## Layout
//!
//! | Offset | Field        | Size | Content                    |
//! |--------|--------------|------|----------------------------|
//! |      0 | start flag   |    1 | `$`                        |
//! |      1 | az flag      |    2 | `AZ`                       |
//! |      3 | azimuth      |    3 | `000`..=`360`              |
//! |      6 | el flag      |    2 | `EL`                       |
//! |      8 | elevation    |    3 | `000`..=`180`              |
//! |     11 | ul flag      |    2 | `UL`                       |
//! |     13 | uplink       |   11 | `0000.000000`              |
//! |     24 | dl flag      |    2 | `DL`                       |
//! |     26 | downlink     |   11 | `0000.000000`              |
//! |     37 | st1..st3     |    3 | status bytes               |
//! |     40 | civ1, civ2   |    2 | CI-V bytes                 |
//! |     42 | v1, v2       |    2 | calibration bytes          |
//! |     44 | g1, g2       |    2 | rotation thresholds        |
//! |     46 | checksum     |    1 | XOR fold of bytes 2..=45   |
//! |     47 | end flag     |    1 | `#`                        |
//!
//! Offsets are used directly against the serialized buffer held by
//! [`Frame`](crate::frame::Frame); there is no in-memory struct layout involved.

/// Total length (in bytes) of a command frame on the wire.
pub const FRAME_LEN: usize = 48;

/// Width (in bytes) of the azimuth and elevation digit fields.
pub const POSITION_DIGITS: usize = 3;

/// Width (in bytes) of the uplink and downlink frequency fields.
pub const FREQ_FIELD_LEN: usize = 11;

/// Marks the start of a frame.
pub const START_FLAG: u8 = b'$';

/// Marks the end of a frame.
pub const END_FLAG: u8 = b'#';

/// Tag preceding the azimuth digits.
pub const AZ_FLAG: [u8; 2] = *b"AZ";

/// Tag preceding the elevation digits.
pub const EL_FLAG: [u8; 2] = *b"EL";

/// Tag preceding the uplink frequency.
pub const UL_FLAG: [u8; 2] = *b"UL";

/// Tag preceding the downlink frequency.
pub const DL_FLAG: [u8; 2] = *b"DL";

/// Digit field written for a zero position.
pub const ZERO_POSITION: [u8; POSITION_DIGITS] = *b"000";

/// Frequency placeholder. The controller is only used for rotation, so the
/// radio fields are never filled in.
pub const FREQ_PLACEHOLDER: [u8; FREQ_FIELD_LEN] = *b"0000.000000";

/// Offset of the start flag.
pub const START_OFFSET: usize = 0;
/// Offset of the `AZ` tag.
pub const AZ_FLAG_OFFSET: usize = 1;
/// Offset of the azimuth digits.
pub const AZ_OFFSET: usize = 3;
/// Offset of the `EL` tag.
pub const EL_FLAG_OFFSET: usize = 6;
/// Offset of the elevation digits.
pub const EL_OFFSET: usize = 8;
/// Offset of the `UL` tag.
pub const UL_FLAG_OFFSET: usize = 11;
/// Offset of the uplink frequency field.
pub const UL_OFFSET: usize = 13;
/// Offset of the `DL` tag.
pub const DL_FLAG_OFFSET: usize = 24;
/// Offset of the downlink frequency field.
pub const DL_OFFSET: usize = 26;
/// Offset of the first status byte. `st2`, `st3`, `civ1`, `civ2`, `v1`, `v2`,
/// `g1` and `g2` follow contiguously.
pub const ST1_OFFSET: usize = 37;
/// Offset of the checksum byte.
pub const CHECKSUM_OFFSET: usize = 46;
/// Offset of the end flag.
pub const END_OFFSET: usize = 47;

/// First byte covered by the checksum.
pub const CHECKSUM_START: usize = 2;

/// Number of bytes covered by the checksum.
///
/// Together with [`CHECKSUM_START`] this spans everything between the `A` of the
/// `AZ` tag and the checksum byte itself.
pub const CHECKSUM_SPAN: usize = 44;

/// Offset of the byte used as the checksum seed (the `A` of `AZ`).
pub const CHECKSUM_SEED_OFFSET: usize = AZ_FLAG_OFFSET;

/// Default `st1`: Icom radio, no radio update, G-5500 rotator, update rotator.
pub const DEFAULT_ST1: u8 = 0b1010_0001;

/// Default azimuth calibration byte for the ground station unit.
pub const DEFAULT_V1: u8 = 164;

/// Default elevation calibration byte for the ground station unit.
pub const DEFAULT_V2: u8 = 46;

/// Default azimuth threshold: a 1° difference between target and measured
/// position starts a rotation.
pub const DEFAULT_G1: u8 = 0x01;

/// Default elevation threshold, see [`DEFAULT_G1`].
pub const DEFAULT_G2: u8 = 0x01;

/// Largest value a three digit field can carry.
pub const MAX_FIELD_VALUE: u16 = 999;

/// Home position used by `park`, as `(azimuth, elevation)`.
pub const HOME_POSITION: (f64, f64) = (0.0, 0.0);

/// Elevation commanded by an `Up` move.
pub const MOVE_UP_ELEVATION: f64 = 90.0;
/// Elevation commanded by a `Down` move.
pub const MOVE_DOWN_ELEVATION: f64 = 0.0;
/// Azimuth commanded by a counter-clockwise move.
pub const MOVE_CCW_AZIMUTH: f64 = 0.0;
/// Azimuth commanded by a clockwise move.
pub const MOVE_CW_AZIMUTH: f64 = 180.0;

/// Host framework code for an upward move.
pub const ROT_MOVE_UP: i32 = 1 << 1;
/// Host framework code for a downward move.
pub const ROT_MOVE_DOWN: i32 = 1 << 2;
/// Host framework code for a counter-clockwise (left) move.
pub const ROT_MOVE_CCW: i32 = 1 << 3;
/// Host framework code for a clockwise (right) move.
pub const ROT_MOVE_CW: i32 = 1 << 4;
