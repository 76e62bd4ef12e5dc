//! The integrity checksum the game verifies when loading a save.
//!
//! The checksum is an additive fold of little endian words over a fixed window
//! starting at [`WINDOW_OFFSET`], seeded with [`SEED`]. The word the checksum
//! itself is stored in lies inside the window and is skipped.
//!
//! ```
//! use bandicoot::{checksum, RawSave};
//!
//! let mut save = RawSave::from_slice(&[0u8; RawSave::SIZE]).unwrap();
//! assert_eq!(checksum::compute(&save), checksum::SEED);
//!
//! // the stored value never feeds into its own computation
//! checksum::store(&mut save, 0xdead_beef);
//! assert_eq!(checksum::compute(&save), checksum::SEED);
//! assert_eq!(checksum::stored(&save), 0xdead_beef);
//! ```

use crate::{util::le_u32, RawSave};

/// Initial value of the fold
pub const SEED: u32 = 0x1234_5678;

/// Absolute offset of the first word in the window
pub const WINDOW_OFFSET: usize = 0x180;

/// Number of 4 byte words in the window
pub const WINDOW_WORDS: usize = 0x2a4;

/// Absolute offset of the stored checksum
pub const CHECKSUM_OFFSET: usize = 0x1a4;

const SKIPPED_WORD: usize = (CHECKSUM_OFFSET - WINDOW_OFFSET) / 4;

/// Folds a window of words, skipping the tenth word. Trailing bytes that do
/// not form a complete word are ignored.
pub fn compute_window(window: &[u8]) -> u32 {
    window
        .chunks_exact(4)
        .enumerate()
        .filter(|(i, _)| *i != SKIPPED_WORD)
        .filter_map(|(_, word)| le_u32(word))
        .fold(SEED, |acc, x| acc.wrapping_add(x))
}

/// Computes the checksum the game expects for the given save
pub fn compute(save: &RawSave) -> u32 {
    let end = WINDOW_OFFSET + WINDOW_WORDS * 4;
    compute_window(&save.as_bytes()[WINDOW_OFFSET..end])
}

/// Returns the checksum currently stored in the save
pub fn stored(save: &RawSave) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&save.as_bytes()[CHECKSUM_OFFSET..CHECKSUM_OFFSET + 4]);
    u32::from_le_bytes(word)
}

/// Overwrites the stored checksum without recomputing anything
pub fn store(save: &mut RawSave, value: u32) {
    save.as_bytes_mut()[CHECKSUM_OFFSET..CHECKSUM_OFFSET + 4]
        .copy_from_slice(&value.to_le_bytes());
}

/// Recomputes and stores the checksum, returning the new value
pub fn repair(save: &mut RawSave) -> u32 {
    let value = compute(save);
    store(save, value);
    value
}
