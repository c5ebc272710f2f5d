//! A shared [`Rotator`] slot guarded by `critical_section`.
//!
//! A `Rotator` has no locking of its own. Firmware that commands the rotator
//! from both its main loop and an interrupt handler (a tracking timer, a
//! button) can keep the single instance in a static slot and reach it through
//! [`with_global_rotator`], which serializes every access in a critical section.
//!
//! ## Example
//!
//! ```rust
//! use core::cell::RefCell;
//! use critical_section::Mutex;
//! use primesat::global::{global_rotator_init, global_rotator_setup, with_global_rotator};
//! use primesat::rotator::Rotator;
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
//! static ROTATOR: Mutex<RefCell<Option<Rotator<Sink>>>> = global_rotator_init();
//!
//! global_rotator_setup(&ROTATOR, Sink);
//! let parked = with_global_rotator(&ROTATOR, |rotator| rotator.park());
//! assert_eq!(parked, Some(Ok(())));
//! ```

use core::cell::RefCell;
use critical_section::Mutex;

use crate::rotator::Rotator;
use crate::transport::Transport;

/// Builds an empty slot for a static global [`Rotator`].
///
/// # Example
/// ```rust,ignore
/// static ROTATOR: Mutex<RefCell<Option<Rotator<MyTransport>>>> = global_rotator_init();
/// ```
pub const fn global_rotator_init<T: Transport>() -> Mutex<RefCell<Option<Rotator<T>>>> {
    Mutex::new(RefCell::new(None))
}

/// Creates a [`Rotator`] on `transport` and stores it in `global`, dropping
/// any rotator that was there before.
pub fn global_rotator_setup<T: Transport>(
    global: &'static Mutex<RefCell<Option<Rotator<T>>>>,
    transport: T,
) {
    critical_section::with(|cs| {
        let _ = global.borrow(cs).replace(Some(Rotator::new(transport)));
    });
}

/// Runs `f` on the global rotator inside a critical section.
///
/// # Returns
/// - `Some(result)`: the value returned by `f`
/// - `None`: the slot is empty, `f` was not called
pub fn with_global_rotator<T, R, F>(
    global: &'static Mutex<RefCell<Option<Rotator<T>>>>,
    f: F,
) -> Option<R>
where
    T: Transport,
    F: FnOnce(&mut Rotator<T>) -> R,
{
    critical_section::with(|cs| global.borrow(cs).borrow_mut().as_mut().map(f))
}

/// Takes the rotator out of `global`, leaving the slot empty.
pub fn global_rotator_take<T: Transport>(
    global: &'static Mutex<RefCell<Option<Rotator<T>>>>,
) -> Option<Rotator<T>> {
    critical_section::with(|cs| global.borrow(cs).take())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotator::Direction;
    use std::vec::Vec;

    #[derive(Debug, Default)]
    struct Recorder {
        frames: Vec<[u8; 48]>,
    }

    impl Transport for Recorder {
        type Error = ();

        fn write_block(&mut self, bytes: &[u8]) -> Result<(), ()> {
            let mut frame = [0u8; 48];
            frame.copy_from_slice(bytes);
            self.frames.push(frame);
            Ok(())
        }
    }

    static EMPTY: Mutex<RefCell<Option<Rotator<Recorder>>>> = global_rotator_init();
    static SHARED: Mutex<RefCell<Option<Rotator<Recorder>>>> = global_rotator_init();

    #[test]
    fn test_empty_slot_skips_closure() {
        let mut called = false;
        let result = with_global_rotator(&EMPTY, |_| called = true);
        assert_eq!(result, None);
        assert!(!called);
    }

    #[test]
    fn test_setup_then_use_then_take() {
        global_rotator_setup(&SHARED, Recorder::default());

        let sent = with_global_rotator(&SHARED, |rotator| {
            rotator.set_position(45.0, 10.0)?;
            rotator.move_direction(Direction::Up, 0)
        });
        assert_eq!(sent, Some(Ok(())));

        let rotator = global_rotator_take(&SHARED).unwrap();
        assert_eq!(rotator.position().elevation, 90.0);
        assert_eq!(rotator.transport.frames.len(), 2);
        assert_eq!(&rotator.transport.frames[1][8..11], b"090");
        assert!(global_rotator_take(&SHARED).is_none());
    }
}
