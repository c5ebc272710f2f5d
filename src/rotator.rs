//! Position controller for the Primesat rotator.
//!
//! This module provides the [`Rotator`] struct, which keeps the commanded
//! azimuth/elevation target and transmits it to the controller as a
//! [`Frame`] every time it changes.
//!
//! The controller is transmit-only: nothing is read back, so
//! [`position()`](Rotator::position) reports the last commanded target, not
//! where the antenna actually points.
//!
//! ## Example
//!
//! ```rust
//! use primesat::rotator::{Direction, Rotator};
//! use primesat::transport::Transport;
//!
//! struct Sink;
//!
//! impl Transport for Sink {
//!     type Error = ();
//!
//!     fn write_block(&mut self, _bytes: &[u8]) -> Result<(), ()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut rotator = Rotator::new(Sink);
//! rotator.set_position(275.9, 42.3).unwrap();
//! rotator.move_direction(Direction::Up, 0).unwrap();
//!
//! let position = rotator.position();
//! assert_eq!((position.azimuth, position.elevation), (275.9, 90.0));
//! assert_eq!(rotator.frame().elevation_field(), b"090");
//! ```
//!
//! ## Design Notes
//!
//! Targets are clamped to the model's travel limits (see
//! [`RotatorCaps`]) before they are stored and encoded, so the stored target
//! always matches what went out on the wire.
//!
//! One `Rotator` drives one link. It does no locking of its own; see
//! [`crate::global`] for sharing one instance with interrupt handlers.

use crate::caps::{PRIMESAT_CAPS, RotatorCaps};
use crate::config::ProtocolConfig;
use crate::consts::{
    HOME_POSITION, MOVE_CCW_AZIMUTH, MOVE_CW_AZIMUTH, MOVE_DOWN_ELEVATION, MOVE_UP_ELEVATION,
    ROT_MOVE_CCW, ROT_MOVE_CW, ROT_MOVE_DOWN, ROT_MOVE_UP,
};
use crate::error::RotatorError;
use crate::frame::Frame;
use crate::transport::Transport;

/// Operational state of a [`Rotator`].
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum RotatorMode {
    /// No write in progress.
    #[default]
    Idle,
    /// A frame is being written to the transport.
    Transmitting,
}

/// Direction of a discrete move.
///
/// Moves jump straight to a fixed end position; there is no continuous
/// motion or ramping.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum Direction {
    /// Elevation to 90°, azimuth unchanged.
    Up,
    /// Elevation to 0°, azimuth unchanged.
    Down,
    /// Azimuth to 0°, elevation unchanged.
    CounterClockwise,
    /// Azimuth to 180°, elevation unchanged.
    Clockwise,
}

impl Direction {
    /// The host framework code of this direction.
    pub fn code(self) -> i32 {
        match self {
            Self::Up => ROT_MOVE_UP,
            Self::Down => ROT_MOVE_DOWN,
            Self::CounterClockwise => ROT_MOVE_CCW,
            Self::Clockwise => ROT_MOVE_CW,
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = i32;

    /// Converts a host framework move code. Unknown codes are handed back.
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            ROT_MOVE_UP => Ok(Self::Up),
            ROT_MOVE_DOWN => Ok(Self::Down),
            ROT_MOVE_CCW => Ok(Self::CounterClockwise),
            ROT_MOVE_CW => Ok(Self::Clockwise),
            other => Err(other),
        }
    }
}

/// A commanded azimuth/elevation pair, in degrees.
#[derive(PartialEq, Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct Position {
    /// Azimuth in degrees.
    pub azimuth: f64,
    /// Elevation in degrees.
    pub elevation: f64,
}

/// Drives a Primesat controller over a [`Transport`].
///
/// ## Type Parameters
///
/// - `T`: the byte channel frames are written to, e.g.
///   [`SerialTransport`](crate::transport::SerialTransport)
#[derive(Debug)]
pub struct Rotator<T: Transport> {
    /// The current mode of the rotator
    pub mode: RotatorMode,
    /// The channel frames are written to
    pub transport: T,
    frame: Frame,
    config: ProtocolConfig,
    caps: &'static RotatorCaps,
    target: Position,

    /// Counter of frames handed to the transport without error.
    pub tx_good: u16,

    /// Counter of frames the transport failed to write.
    pub tx_bad: u16,
}

impl<T: Transport> Rotator<T> {
    /// Creates a rotator for the Primesat ground station unit.
    ///
    /// The target starts at 0°/0° and nothing is sent until the first
    /// position change.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ProtocolConfig::default(), &PRIMESAT_CAPS)
    }

    /// Creates a rotator with explicit protocol constants and capabilities.
    ///
    /// `config` is captured once; every frame this rotator sends carries it.
    pub fn with_config(
        transport: T,
        config: ProtocolConfig,
        caps: &'static RotatorCaps,
    ) -> Self {
        debug!("rotator init: {}", caps.model_name);
        Self {
            mode: RotatorMode::Idle,
            transport,
            frame: Frame::new(&config),
            config,
            caps,
            target: Position::default(),
            tx_good: 0,
            tx_bad: 0,
        }
    }

    /// Sets a new target and transmits it.
    ///
    /// The target is clamped to the travel limits, stored, encoded into the
    /// frame with a fresh checksum and written to the transport.
    ///
    /// # Errors
    /// [`RotatorError::Transport`] with the transport's own error if the write
    /// fails. The target is updated either way and the write is not retried.
    pub fn set_position(&mut self, az: f64, el: f64) -> Result<(), RotatorError<T::Error>> {
        debug!("set_position called: {} {}", az, el);

        let azimuth = self.caps.clamp_azimuth(az);
        let elevation = self.caps.clamp_elevation(el);
        if azimuth != az || elevation != el {
            warn!(
                "target {} {} outside limits, clamped to {} {}",
                az, el, azimuth, elevation
            );
        }

        self.target = Position { azimuth, elevation };
        self.frame.encode_position(azimuth, elevation);
        self.transmit()
    }

    /// The last commanded target.
    pub fn position(&self) -> Position {
        self.target
    }

    /// Jumps to the fixed end position for `direction`.
    ///
    /// `speed` is accepted for interface compatibility and ignored.
    ///
    /// # Errors
    /// See [`set_position`](Rotator::set_position).
    pub fn move_direction(
        &mut self,
        direction: Direction,
        speed: i32,
    ) -> Result<(), RotatorError<T::Error>> {
        trace!("move: direction = {}, speed = {}", direction.code(), speed);

        let Position { azimuth, elevation } = self.target;
        match direction {
            Direction::Up => self.set_position(azimuth, MOVE_UP_ELEVATION),
            Direction::Down => self.set_position(azimuth, MOVE_DOWN_ELEVATION),
            Direction::CounterClockwise => self.set_position(MOVE_CCW_AZIMUTH, elevation),
            Direction::Clockwise => self.set_position(MOVE_CW_AZIMUTH, elevation),
        }
    }

    /// Like [`move_direction`](Rotator::move_direction), taking a raw host
    /// framework direction code.
    ///
    /// # Errors
    /// [`RotatorError::InvalidArgument`] if `code` is not one of the four
    /// supported directions. Nothing is stored or sent in that case.
    pub fn move_raw(&mut self, code: i32, speed: i32) -> Result<(), RotatorError<T::Error>> {
        let direction = Direction::try_from(code).map_err(|code| {
            warn!("move: unknown direction {}", code);
            RotatorError::InvalidArgument(code)
        })?;
        self.move_direction(direction, speed)
    }

    /// Sends the rotator to its home position, 0°/0°.
    ///
    /// # Errors
    /// See [`set_position`](Rotator::set_position).
    pub fn park(&mut self) -> Result<(), RotatorError<T::Error>> {
        debug!("park called");
        let (az, el) = HOME_POSITION;
        self.set_position(az, el)
    }

    /// Human readable description of the controller.
    pub fn info(&self) -> &'static str {
        self.caps.info
    }

    /// The capabilities this rotator was created with.
    pub fn caps(&self) -> &'static RotatorCaps {
        self.caps
    }

    /// The protocol constants this rotator was created with.
    pub fn config(&self) -> &ProtocolConfig {
        &self.config
    }

    /// The most recently encoded frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Tears the rotator down, returning the transport.
    pub fn release(self) -> T {
        self.transport
    }

    fn transmit(&mut self) -> Result<(), RotatorError<T::Error>> {
        self.mode = RotatorMode::Transmitting;
        let result = self.transport.write_block(self.frame.as_bytes());
        self.mode = RotatorMode::Idle;

        match result {
            Ok(()) => {
                self.tx_good = self.tx_good.wrapping_add(1);
                Ok(())
            }
            Err(e) => {
                self.tx_bad = self.tx_bad.wrapping_add(1);
                warn!("frame write failed");
                Err(RotatorError::Transport(e))
            }
        }
    }
}
