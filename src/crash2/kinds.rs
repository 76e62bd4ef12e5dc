use crate::{Error, ErrorKind};

/// Menu language. The game does not validate the stored byte, so neither do we.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Italian,

    /// A byte outside of the languages the game ships
    Other(u8),
}

impl Language {
    /// Creates a language from the stored byte
    pub fn new(value: u8) -> Language {
        match value {
            0 => Language::English,
            1 => Language::Spanish,
            2 => Language::French,
            3 => Language::German,
            4 => Language::Italian,
            x => Language::Other(x),
        }
    }

    /// Returns the byte stored for this language
    pub fn value(&self) -> u8 {
        match self {
            Language::English => 0,
            Language::Spanish => 1,
            Language::French => 2,
            Language::German => 3,
            Language::Italian => 4,
            Language::Other(x) => *x,
        }
    }
}

/// Sound output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AudioType {
    Stereo,
    Mono,

    /// A byte outside of the modes the game ships
    Other(u8),
}

impl AudioType {
    /// Creates an audio type from the stored byte
    pub fn new(value: u8) -> AudioType {
        match value {
            0 => AudioType::Stereo,
            1 => AudioType::Mono,
            x => AudioType::Other(x),
        }
    }

    /// Returns the byte stored for this audio type
    pub fn value(&self) -> u8 {
        match self {
            AudioType::Stereo => 0,
            AudioType::Mono => 1,
            AudioType::Other(x) => *x,
        }
    }
}

/// The two kinds of gem a level may award
///
/// ```
/// use bandicoot::crash2::GemKind;
///
/// assert_eq!(GemKind::try_from(1i64).unwrap(), GemKind::SecondGem);
/// assert!(GemKind::try_from(2i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GemKind {
    /// Awarded for breaking every box in a level
    AllBoxesGem,

    /// Colored or hidden route gem, only present in some levels
    SecondGem,
}

impl GemKind {
    pub fn value(&self) -> i64 {
        match self {
            GemKind::AllBoxesGem => 0,
            GemKind::SecondGem => 1,
        }
    }
}

impl TryFrom<i64> for GemKind {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GemKind::AllBoxesGem),
            1 => Ok(GemKind::SecondGem),
            x => Err(ErrorKind::InvalidEnumValue(x).into()),
        }
    }
}

/// What happens to the stored checksum when a save is exported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecksumMode {
    /// Recompute and store the checksum so the game accepts the save
    #[default]
    AutoCorrect,

    /// Export whatever checksum is currently stored, even if stale
    PreserveStored,
}
