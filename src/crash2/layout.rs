//! Byte layout of a Crash Bandicoot 2 save.
//!
//! All offsets are absolute offsets of slot 1. The same field of slot `n` is
//! found [`SLOT_STRIDE`] × (n − 1) bytes further along.

use crate::{Error, ErrorKind};

/// Distance between the same field of consecutive slots
pub const SLOT_STRIDE: usize = 676;

/// Number of save slots
pub const SLOTS: u8 = 4;

/// Number of regular levels
pub const LEVELS: u8 = 27;

/// Number of levels when also counting the five boss stages and the intro
pub const EXTENDED_LEVELS: u8 = 33;

/// Number of bosses
pub const BOSSES: u8 = 5;

/// Levels that award no crystal
const CRYSTAL_LESS: [u8; 2] = [26, 27];

const PROGRESS_BASE: usize = 0x1bc;
const CRYSTAL_BASE: usize = 0x1c4;
const GEM_BASE: usize = 0x1cc;
const SECRETS: usize = 0x1b8;
const POLAR_TRICK: u8 = 0x20;

pub(crate) const NAME_OFFSET: usize = 0x18c;
pub(crate) const NAME_LEN: usize = 8;

/// Fixed width values, one per slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Empty,
    LastPlayedLevel,
    Lives,
    WumpaFruits,
    AkuAkuMasks,
    AudioType,
    EffectsVolume,
    MusicVolume,
    Language,
    ScreenOffset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Width {
    Byte,
    Word,
}

impl Field {
    pub(crate) const fn offset(self) -> usize {
        match self {
            Field::Empty => 0x184,
            Field::LastPlayedLevel => 0x188,
            Field::Lives => 0x1ac,
            Field::WumpaFruits => 0x1b0,
            Field::AkuAkuMasks => 0x1b4,
            Field::AudioType => 0x1d4,
            Field::EffectsVolume => 0x1d8,
            Field::MusicVolume => 0x1dc,
            Field::Language => 0x3fd,
            Field::ScreenOffset => 0x41c,
        }
    }

    pub(crate) const fn width(self) -> Width {
        match self {
            Field::Empty | Field::AudioType | Field::Language => Width::Byte,
            _ => Width::Word,
        }
    }
}

/// A bit relative to one of the flag bases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Bit {
    rel: u8,
    mask: u8,
}

const fn bit(mask: u8, rel: u8) -> Bit {
    Bit { rel, mask }
}

/// A single boolean within a shared flag byte of slot 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FlagField {
    pub(crate) offset: usize,
    pub(crate) mask: u8,
}

impl FlagField {
    const fn at(base: usize, bit: Bit) -> FlagField {
        FlagField {
            offset: base + bit.rel as usize,
            mask: bit.mask,
        }
    }
}

/// Shared by the progress, crystal, and all boxes gem bases. Indexed by level - 1.
const LEVEL_BITS: [Bit; LEVELS as usize] = [
    bit(0x02, 0),
    bit(0x04, 0),
    bit(0x08, 0),
    bit(0x10, 0),
    bit(0x20, 0),
    bit(0x80, 0),
    bit(0x01, 1),
    bit(0x02, 1),
    bit(0x04, 1),
    bit(0x08, 1),
    bit(0x20, 1),
    bit(0x40, 1),
    bit(0x80, 1),
    bit(0x01, 2),
    bit(0x02, 2),
    bit(0x04, 2),
    bit(0x10, 2),
    bit(0x20, 2),
    bit(0x40, 2),
    bit(0x80, 2),
    bit(0x01, 3),
    bit(0x04, 3),
    bit(0x08, 3),
    bit(0x10, 3),
    bit(0x20, 3),
    bit(0x40, 4),
    bit(0x80, 4),
];

/// Relative to the gem base, past the all boxes gem bits
const SECOND_GEM_BITS: [Option<Bit>; LEVELS as usize] = [
    None,
    Some(bit(0x01, 5)),
    None,
    Some(bit(0x02, 5)),
    Some(bit(0x04, 5)),
    Some(bit(0x08, 5)),
    Some(bit(0x10, 5)),
    None,
    Some(bit(0x20, 5)),
    None,
    Some(bit(0x40, 5)),
    None,
    Some(bit(0x80, 5)),
    Some(bit(0x01, 6)),
    None,
    Some(bit(0x02, 6)),
    Some(bit(0x04, 6)),
    None,
    Some(bit(0x08, 6)),
    Some(bit(0x10, 6)),
    Some(bit(0x20, 6)),
    Some(bit(0x40, 6)),
    None,
    None,
    None,
    None,
    None,
];

/// Relative to the progress base, in the bits the levels leave free
const BOSS_BITS: [Bit; BOSSES as usize] = [
    bit(0x40, 0),
    bit(0x10, 1),
    bit(0x08, 2),
    bit(0x40, 3),
    bit(0x80, 3),
];

const LEVEL_NAMES: [&str; LEVELS as usize] = [
    "Turtle Woods",
    "Snow Go",
    "Hang Eight",
    "The Pits",
    "Crash Dash",
    "Snow Biz",
    "Air Crash",
    "Bear It",
    "Crash Crush",
    "The Eel Deal",
    "Plant Food",
    "Sewer or Later",
    "Bear Down",
    "Road to Ruin",
    "Un-Bearable",
    "Hangin' Out",
    "Diggin' It",
    "Cold Hard Crash",
    "Ruination",
    "Bee-Having",
    "Piston It Away",
    "Rock It",
    "Night Fight",
    "Pack Attack",
    "Spaced Out",
    "Totally Bear",
    "Totally Fly",
];

const BOSS_NAMES: [&str; BOSSES as usize] =
    ["Ripper Roo", "Komodo Bros", "Tiny Tiger", "N. Gin", "Dr. Neo Cortex"];

/// Validates a level number. The extended range additionally admits the boss
/// stages and the intro, which only the last played level can refer to.
pub(crate) fn validate_level(level: u8, extended: bool) -> Result<u8, Error> {
    let max = if extended { EXTENDED_LEVELS } else { LEVELS };
    if (1..=max).contains(&level) {
        Ok(level)
    } else {
        Err(ErrorKind::LevelOutOfRange { level, max }.into())
    }
}

pub(crate) fn validate_crystal_level(level: u8) -> Result<u8, Error> {
    let level = validate_level(level, false)?;
    if CRYSTAL_LESS.contains(&level) {
        Err(ErrorKind::NoCrystalInLevel(level).into())
    } else {
        Ok(level)
    }
}

pub(crate) fn validate_boss(boss: u8) -> Result<u8, Error> {
    if (1..=BOSSES).contains(&boss) {
        Ok(boss)
    } else {
        Err(ErrorKind::BossOutOfRange(boss).into())
    }
}

pub(crate) fn validate_slot(slot: u8) -> Result<u8, Error> {
    if (1..=SLOTS).contains(&slot) {
        Ok(slot)
    } else {
        Err(ErrorKind::SlotOutOfRange(slot).into())
    }
}

/// Translates a slot 1 offset to the given slot. The slot must already be
/// validated.
#[inline]
pub(crate) fn slot_offset(base: usize, slot: u8) -> usize {
    debug_assert!((1..=SLOTS).contains(&slot));
    base + SLOT_STRIDE * (slot as usize - 1)
}

pub(crate) fn progress(level: u8) -> Result<FlagField, Error> {
    let level = validate_level(level, false)?;
    Ok(FlagField::at(PROGRESS_BASE, LEVEL_BITS[level as usize - 1]))
}

pub(crate) fn crystal(level: u8) -> Result<FlagField, Error> {
    let level = validate_crystal_level(level)?;
    Ok(FlagField::at(CRYSTAL_BASE, LEVEL_BITS[level as usize - 1]))
}

pub(crate) fn all_boxes_gem(level: u8) -> Result<FlagField, Error> {
    let level = validate_level(level, false)?;
    Ok(FlagField::at(GEM_BASE, LEVEL_BITS[level as usize - 1]))
}

pub(crate) fn second_gem(level: u8) -> Result<FlagField, Error> {
    let level = validate_level(level, false)?;
    match SECOND_GEM_BITS[level as usize - 1] {
        Some(bit) => Ok(FlagField::at(GEM_BASE, bit)),
        None => Err(ErrorKind::NoSecondGemInLevel(level).into()),
    }
}

pub(crate) fn secret_exit(level: u8) -> Result<FlagField, Error> {
    let level = validate_level(level, false)?;
    let mask = match level {
        7 => 0x01,
        13 => 0x02,
        15 => 0x04,
        16 => 0x08,
        17 => 0x10,
        _ => return Err(ErrorKind::NoSecretExitInLevel(level).into()),
    };

    Ok(FlagField {
        offset: SECRETS,
        mask,
    })
}

pub(crate) fn boss(boss: u8) -> Result<FlagField, Error> {
    let boss = validate_boss(boss)?;
    Ok(FlagField::at(PROGRESS_BASE, BOSS_BITS[boss as usize - 1]))
}

pub(crate) const fn polar_trick() -> FlagField {
    FlagField {
        offset: SECRETS,
        mask: POLAR_TRICK,
    }
}

/// Returns true if the level awards a second gem
pub fn has_second_gem(level: u8) -> bool {
    second_gem(level).is_ok()
}

/// Returns true if the level has a secret exit
pub fn has_secret_exit(level: u8) -> bool {
    secret_exit(level).is_ok()
}

/// Returns true if the level awards a crystal
pub fn has_crystal(level: u8) -> bool {
    validate_crystal_level(level).is_ok()
}

/// Display name of a level
///
/// ```
/// use bandicoot::crash2::level_name;
/// assert_eq!(level_name(1).unwrap(), "Turtle Woods");
/// assert!(level_name(28).is_err());
/// ```
pub fn level_name(level: u8) -> Result<&'static str, Error> {
    let level = validate_level(level, false)?;
    Ok(LEVEL_NAMES[level as usize - 1])
}

/// Display name of a boss
pub fn boss_name(boss: u8) -> Result<&'static str, Error> {
    let boss = validate_boss(boss)?;
    Ok(BOSS_NAMES[boss as usize - 1])
}
