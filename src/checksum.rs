//! XOR checksum used by the Primesat frame.
//!
//! The checksum is a single byte: the XOR of the 44 bytes following the `A`
//! of the `AZ` tag, seeded with that `A`. The receiving controller recomputes it
//! over the same range to reject damaged frames.

use crate::consts::{CHECKSUM_SEED_OFFSET, CHECKSUM_SPAN, CHECKSUM_START, FRAME_LEN};

pub(crate) fn xor_update(acc: u8, data: &u8) -> u8 {
    acc ^ *data
}

/// Folds `bytes` into `seed` with XOR.
pub fn xor_fold(seed: u8, bytes: &[u8]) -> u8 {
    bytes.iter().fold(seed, xor_update)
}

/// Computes the checksum of a serialized frame.
///
/// Only the seed byte and the covered range are read, so the value stored at the
/// checksum offset does not influence the result.
pub fn frame_checksum(frame: &[u8; FRAME_LEN]) -> u8 {
    xor_fold(
        frame[CHECKSUM_SEED_OFFSET],
        &frame[CHECKSUM_START..CHECKSUM_START + CHECKSUM_SPAN],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CHECKSUM_OFFSET;

    #[test]
    fn test_xor_fold_empty_returns_seed() {
        assert_eq!(xor_fold(b'A', &[]), b'A');
    }

    #[test]
    fn test_xor_fold_cancels_repeated_bytes() {
        assert_eq!(xor_fold(0x5a, &[0x13, 0x37, 0x13, 0x37]), 0x5a);
    }

    #[test]
    fn test_frame_checksum_ignores_checksum_and_end_bytes() {
        let mut frame = [0u8; FRAME_LEN];
        frame[CHECKSUM_SEED_OFFSET] = b'A';
        frame[CHECKSUM_START] = 0x0f;
        let before = frame_checksum(&frame);

        frame[0] = 0xff;
        frame[CHECKSUM_OFFSET] = 0xff;
        frame[FRAME_LEN - 1] = 0xff;
        assert_eq!(frame_checksum(&frame), before);
        assert_eq!(before, b'A' ^ 0x0f);
    }

    #[test]
    fn test_last_covered_byte_is_offset_45() {
        let mut frame = [0u8; FRAME_LEN];
        frame[45] = 0x80;
        assert_eq!(frame_checksum(&frame), 0x80);
    }
}
