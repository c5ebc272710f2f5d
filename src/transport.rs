//! Byte transports the rotator writes frames to.
//!
//! The rotator only needs one primitive: write a block of bytes and report
//! whether that worked. [`Transport`] captures it; the adapters in this module
//! bind it to the usual serial abstractions.
//!
//! | Adapter                  | Underlying writer                          | Feature      |
//! |--------------------------|--------------------------------------------|--------------|
//! | [`SerialTransport`]      | `embedded_hal_nb::serial::Write<u8>`       |              |
//! | [`PacedSerialTransport`] | the same, plus `embedded_hal::delay::DelayNs` |           |
//! | `IoTransport`            | `std::io::Write`                           | `std`        |
//! | `open_serial`            | a host serial port                         | `serialport` |
//!
//! Timeouts and retries belong to the underlying writer; adapters never retry.

use embedded_hal::delay::DelayNs;
use embedded_hal_nb::serial::Write;
use nb::block;

use crate::caps::SerialSettings;

/// A blocking, write-only byte channel to the controller.
pub trait Transport {
    /// Error reported by the channel.
    type Error;

    /// Writes all of `bytes`, returning once they have been handed to the
    /// hardware or an error occurred.
    fn write_block(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn write_block(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).write_block(bytes)
    }
}

/// Writes frames to an `embedded-hal-nb` serial port, one word at a time,
/// followed by a flush.
#[derive(Debug)]
pub struct SerialTransport<S> {
    /// The wrapped serial port.
    pub serial: S,
}

impl<S: Write<u8>> SerialTransport<S> {
    /// Wraps `serial`.
    pub fn new(serial: S) -> Self {
        Self { serial }
    }

    /// Returns the wrapped serial port.
    pub fn release(self) -> S {
        self.serial
    }
}

impl<S: Write<u8>> Transport for SerialTransport<S> {
    type Error = S::Error;

    fn write_block(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        for &byte in bytes {
            block!(self.serial.write(byte))?;
        }
        block!(self.serial.flush())
    }
}

/// Like [`SerialTransport`], but waits `write_delay_ms` between bytes and
/// `post_write_delay_ms` after the flush.
///
/// Some controllers drop characters when they arrive back to back; the delays
/// come from the model's [`SerialSettings`].
#[derive(Debug)]
pub struct PacedSerialTransport<S, D> {
    /// The wrapped serial port.
    pub serial: S,
    delay: D,
    write_delay_ms: u32,
    post_write_delay_ms: u32,
}

impl<S: Write<u8>, D: DelayNs> PacedSerialTransport<S, D> {
    /// Wraps `serial` with explicit delays, in milliseconds.
    pub fn new(serial: S, delay: D, write_delay_ms: u32, post_write_delay_ms: u32) -> Self {
        Self {
            serial,
            delay,
            write_delay_ms,
            post_write_delay_ms,
        }
    }

    /// Wraps `serial` with the delays of a model's serial settings.
    pub fn from_settings(serial: S, delay: D, settings: &SerialSettings) -> Self {
        Self::new(
            serial,
            delay,
            settings.write_delay_ms,
            settings.post_write_delay_ms,
        )
    }

    /// Returns the wrapped serial port and delay provider.
    pub fn release(self) -> (S, D) {
        (self.serial, self.delay)
    }
}

impl<S: Write<u8>, D: DelayNs> Transport for PacedSerialTransport<S, D> {
    type Error = S::Error;

    fn write_block(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        for (i, &byte) in bytes.iter().enumerate() {
            if i > 0 && self.write_delay_ms > 0 {
                self.delay.delay_ms(self.write_delay_ms);
            }
            block!(self.serial.write(byte))?;
        }
        block!(self.serial.flush())?;
        if self.post_write_delay_ms > 0 {
            self.delay.delay_ms(self.post_write_delay_ms);
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
mod io {
    use super::Transport;

    /// Writes frames to any [`std::io::Write`], e.g. a host serial port.
    #[derive(Debug)]
    pub struct IoTransport<W> {
        /// The wrapped writer.
        pub writer: W,
    }

    impl<W: std::io::Write> IoTransport<W> {
        /// Wraps `writer`.
        pub fn new(writer: W) -> Self {
            Self { writer }
        }

        /// Returns the wrapped writer.
        pub fn release(self) -> W {
            self.writer
        }
    }

    impl<W: std::io::Write> Transport for IoTransport<W> {
        type Error = std::io::Error;

        fn write_block(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
            self.writer.write_all(bytes)?;
            self.writer.flush()
        }
    }
}

#[cfg(feature = "std")]
pub use io::IoTransport;

#[cfg(feature = "serialport")]
mod port {
    use std::time::Duration;

    use serialport::{DataBits, FlowControl, SerialPort, StopBits};

    use super::IoTransport;
    use crate::caps::{Handshake, Parity, RotatorCaps};

    /// Opens `path` with the serial line settings of `caps`, at its highest
    /// supported baud rate.
    pub fn open_serial(
        path: &str,
        caps: &RotatorCaps,
    ) -> Result<IoTransport<Box<dyn SerialPort>>, serialport::Error> {
        let settings = &caps.serial;
        let data_bits = match settings.data_bits {
            5 => DataBits::Five,
            6 => DataBits::Six,
            7 => DataBits::Seven,
            _ => DataBits::Eight,
        };
        let stop_bits = match settings.stop_bits {
            2 => StopBits::Two,
            _ => StopBits::One,
        };
        let parity = match settings.parity {
            Parity::None => serialport::Parity::None,
            Parity::Odd => serialport::Parity::Odd,
            Parity::Even => serialport::Parity::Even,
        };
        let flow_control = match settings.handshake {
            Handshake::None => FlowControl::None,
            Handshake::Software => FlowControl::Software,
            Handshake::Hardware => FlowControl::Hardware,
        };

        let port = serialport::new(path, settings.rate_max)
            .data_bits(data_bits)
            .stop_bits(stop_bits)
            .parity(parity)
            .flow_control(flow_control)
            .timeout(Duration::from_millis(u64::from(settings.timeout_ms)))
            .open()?;

        Ok(IoTransport::new(port))
    }
}

#[cfg(feature = "serialport")]
pub use port::open_serial;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caps::PRIMESAT_CAPS;
    use embedded_hal_mock::eh1::serial::{Mock as SerialMock, Transaction as SerialTransaction};
    use embedded_hal_nb::serial::{ErrorKind, ErrorType};
    use std::vec::Vec;

    #[derive(Debug, Default)]
    struct RecordingDelay {
        calls_ms: Vec<u32>,
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.calls_ms.push(ns / 1_000_000);
        }

        fn delay_ms(&mut self, ms: u32) {
            self.calls_ms.push(ms);
        }
    }

    /// Accepts `budget` words, then fails every write.
    #[derive(Debug)]
    struct FailingSerial {
        budget: usize,
        written: Vec<u8>,
    }

    impl ErrorType for FailingSerial {
        type Error = ErrorKind;
    }

    impl Write<u8> for FailingSerial {
        fn write(&mut self, word: u8) -> nb::Result<(), Self::Error> {
            if self.written.len() == self.budget {
                return Err(nb::Error::Other(ErrorKind::Overrun));
            }
            self.written.push(word);
            Ok(())
        }

        fn flush(&mut self) -> nb::Result<(), Self::Error> {
            Ok(())
        }
    }

    /// Reports `WouldBlock` once before accepting each word.
    #[derive(Debug, Default)]
    struct BusySerial {
        busy: bool,
        written: Vec<u8>,
        flushed: bool,
    }

    impl ErrorType for BusySerial {
        type Error = ErrorKind;
    }

    impl Write<u8> for BusySerial {
        fn write(&mut self, word: u8) -> nb::Result<(), Self::Error> {
            self.busy = !self.busy;
            if self.busy {
                return Err(nb::Error::WouldBlock);
            }
            self.written.push(word);
            Ok(())
        }

        fn flush(&mut self) -> nb::Result<(), Self::Error> {
            self.flushed = true;
            Ok(())
        }
    }

    #[test]
    fn test_serial_transport_writes_every_byte_then_flushes() {
        let bytes: &[u8] = b"$AZ123#";
        let expectations = [
            SerialTransaction::write_many(bytes),
            SerialTransaction::flush(),
        ];
        let mut transport = SerialTransport::new(SerialMock::new(&expectations));

        transport.write_block(bytes).unwrap();
        transport.serial.done();
    }

    #[test]
    fn test_serial_transport_retries_would_block() {
        let mut transport = SerialTransport::new(BusySerial::default());
        transport.write_block(&[1, 2, 3]).unwrap();
        let serial = transport.release();
        assert_eq!(serial.written, [1, 2, 3]);
        assert!(serial.flushed);
    }

    #[test]
    fn test_serial_transport_propagates_write_error() {
        let mut transport = SerialTransport::new(FailingSerial {
            budget: 2,
            written: Vec::new(),
        });
        assert_eq!(transport.write_block(&[1, 2, 3, 4]), Err(ErrorKind::Overrun));
        assert_eq!(transport.serial.written, [1, 2]);
    }

    #[test]
    fn test_paced_transport_delays_between_bytes_and_after_frame() {
        let serial = BusySerial::default();
        let mut transport = PacedSerialTransport::new(serial, RecordingDelay::default(), 2, 50);
        transport.write_block(&[9, 8, 7]).unwrap();

        let (serial, delay) = transport.release();
        assert_eq!(serial.written, [9, 8, 7]);
        assert_eq!(delay.calls_ms, [2, 2, 50]);
    }

    #[test]
    fn test_paced_transport_skips_zero_delays() {
        let mut transport = PacedSerialTransport::from_settings(
            BusySerial::default(),
            RecordingDelay::default(),
            &PRIMESAT_CAPS.serial,
        );
        transport.write_block(&[1, 2]).unwrap();
        let (_, delay) = transport.release();
        assert!(delay.calls_ms.is_empty());
    }

    #[test]
    fn test_io_transport_writes_and_flushes() {
        let mut transport = IoTransport::new(Vec::new());
        transport.write_block(b"$AZ").unwrap();
        transport.write_block(b"#").unwrap();
        assert_eq!(transport.release(), b"$AZ#");
    }

    fn send_dollar<T: Transport>(mut transport: T) -> Result<(), T::Error> {
        transport.write_block(b"$")
    }

    #[test]
    fn test_mut_ref_is_a_transport() {
        let mut inner = IoTransport::new(Vec::new());
        send_dollar(&mut inner).unwrap();
        send_dollar(&mut inner).unwrap();
        assert_eq!(inner.writer, b"$$");
    }
}
