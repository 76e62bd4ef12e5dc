//! Crash Bandicoot 2: Cortex Strikes Back, European release (`BESCES-00967`).
//!
//! A save holds four independent slots. Every per slot accessor takes a 1
//! based slot number, levels are numbered 1 through 27 in warp room order, and
//! bosses 1 through 5 in the order they are fought.
//!
//! ```text
//! Crash2Save
//! └── SaveBlock      (title field)
//!     └── RawSave    (8320 owned bytes)
//! ```

mod kinds;
mod layout;
mod name;
mod save;
mod summary;
mod volume;

pub use kinds::{AudioType, ChecksumMode, GemKind, Language};
pub use layout::{
    boss_name, has_crystal, has_second_gem, has_secret_exit, level_name, BOSSES,
    EXTENDED_LEVELS, LEVELS, SLOTS, SLOT_STRIDE,
};
pub use save::{Crash2Save, Crash2SaveBuilder};
pub use summary::SlotSummary;
pub use volume::supported_volumes;
