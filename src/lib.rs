//! # primesat
//!
//! A portable, no_std Rust driver for the Primetec Primesat antenna rotator
//! controller, as used on satellite ground stations with a Yaesu G-5500
//! az/el rotator.
//!
//! The controller is commanded over a serial line with a single fixed-size
//! message: a 48-byte frame carrying the target azimuth and elevation as
//! ASCII digits plus a block of static device bytes, closed by an XOR checksum.
//! This crate keeps the commanded target, encodes it into that frame and hands
//! the bytes to a transport.
//!
//! ## Crate features
//! | Feature            | Description |
//! |--------------------|-------------|
//! | `std`              | Disables `#![no_std]` support and adds `IoTransport` for `std::io::Write` |
//! | `global` (default) | Adds a `critical_section` guarded static slot for one [`rotator::Rotator`] |
//! | `serialport`       | Adds `open_serial` to open a host serial port with the model's line settings |
//! | `defmt-0-3`        | Uses `defmt` logging |
//! | `log`              | Uses `log` logging |
//!
//! ## Usage
//!
//! ```rust
//! # use embedded_hal_mock::eh1::serial::{Mock as SerialMock, Transaction as SerialTransaction};
//! # use primesat::frame::Frame;
//! use primesat::rotator::Rotator;
//! use primesat::transport::SerialTransport;
//!
//! # let mut expected = Frame::default();
//! # expected.encode_position(275.9, 42.3);
//! # let serial = SerialMock::new(&[
//! #     SerialTransaction::write_many(&expected.as_bytes()[..]),
//! #     SerialTransaction::flush(),
//! # ]);
//! let mut rotator = Rotator::new(SerialTransport::new(serial));
//! rotator.set_position(275.9, 42.3).unwrap();
//!
//! assert_eq!(rotator.frame().azimuth_field(), b"275");
//! assert_eq!(rotator.frame().elevation_field(), b"042");
//! # rotator.transport.serial.done();
//! ```
//!
//! ## Integration Notes
//!
//! - The link is transmit-only; the controller's replies are not read
//! - Positions are whole degrees on the wire; fractions are truncated
//! - One [`rotator::Rotator`] per serial link; callers serialize access
//!
//! --
//! Designed for `#![no_std]` use in resource-constrained embedded environments.

#![deny(
    bad_style,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "global")]
pub use critical_section;

#[macro_use]
mod fmt;

pub mod caps;
pub mod checksum;
pub mod config;
pub mod consts;
pub mod encoding;
pub mod error;
pub mod frame;
#[cfg(feature = "global")]
pub mod global;
pub mod rotator;
pub mod transport;

pub use caps::{PRIMESAT_CAPS, RotatorCaps};
pub use config::ProtocolConfig;
pub use error::RotatorError;
pub use frame::Frame;
pub use rotator::{Direction, Position, Rotator, RotatorMode};
pub use transport::Transport;
