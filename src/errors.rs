use std::fmt;

/// An error that can occur when reading or editing a save
#[derive(Debug)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error(Box::new(kind))
    }

    /// Return the specific type of error
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }

    /// Consume the error and return the specific type of error
    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// Returns the byte offset that the error occurs (if available)
    pub fn offset(&self) -> Option<usize> {
        self.0.offset()
    }
}

/// Specific type of error
#[derive(Debug)]
pub enum ErrorKind {
    /// The supplied buffer is not exactly the size of a save
    InvalidLength { len: usize },

    /// A read or write would cross the end of the buffer
    OutOfBounds { offset: usize, width: usize },

    /// The title field does not carry the expected product serial
    UnsupportedTitle { title: String },

    /// Level number outside of `1..=max`
    LevelOutOfRange { level: u8, max: u8 },

    /// Boss number outside of `1..=5`
    BossOutOfRange(u8),

    /// Slot number outside of `1..=4`
    SlotOutOfRange(u8),

    /// The level exists but does not award a crystal
    NoCrystalInLevel(u8),

    /// The level exists but does not award a second gem
    NoSecondGemInLevel(u8),

    /// The level exists but has no secret exit
    NoSecretExitInLevel(u8),

    /// Integer does not map to any variant of the requested enumeration
    InvalidEnumValue(i64),

    /// Username longer than the 8 bytes reserved for it
    NameTooLong { len: usize },

    /// Username contains characters outside of ascii
    NameNotAscii,

    /// Username contains a character the name field cannot store
    NameInvalidChar(char),

    /// Requested volume is not one the game can represent
    UnsupportedVolume(u8),

    /// Stored volume does not map into the volume table
    InvalidStoredVolume { raw: i32 },

    /// IO error while exporting the save
    Io(std::io::Error),
}

impl ErrorKind {
    pub fn offset(&self) -> Option<usize> {
        match *self {
            ErrorKind::OutOfBounds { offset, .. } => Some(offset),
            _ => None,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self.0 {
            ErrorKind::Io(ref err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            ErrorKind::InvalidLength { len } => write!(f,
                "save must be exactly {} bytes, found {}",
                crate::RawSave::SIZE,
                len
            ),
            ErrorKind::OutOfBounds { offset, width } => write!(f,
                "access of {} bytes at offset {:#x} is out of bounds", width, offset
            ),
            ErrorKind::UnsupportedTitle { ref title } => write!(f,
                "unsupported save title: {:?}", title
            ),
            ErrorKind::LevelOutOfRange { level, max } => write!(f,
                "level {} is out of range (1..={})", level, max
            ),
            ErrorKind::BossOutOfRange(boss) => write!(f, "boss {} is out of range (1..=5)", boss),
            ErrorKind::SlotOutOfRange(slot) => write!(f, "slot {} is out of range (1..=4)", slot),
            ErrorKind::NoCrystalInLevel(level) => write!(f, "level {} has no crystal", level),
            ErrorKind::NoSecondGemInLevel(level) => {
                write!(f, "level {} has no second gem", level)
            }
            ErrorKind::NoSecretExitInLevel(level) => {
                write!(f, "level {} has no secret exit", level)
            }
            ErrorKind::InvalidEnumValue(value) => write!(f, "invalid enum value: {}", value),
            ErrorKind::NameTooLong { len } => write!(f,
                "name is {} characters long, at most 8 are allowed", len
            ),
            ErrorKind::NameNotAscii => write!(f, "name must only contain ascii characters"),
            ErrorKind::NameInvalidChar(c) => write!(f, "name cannot contain {:?}", c),
            ErrorKind::UnsupportedVolume(volume) => write!(f, "unsupported volume: {}", volume),
            ErrorKind::InvalidStoredVolume { raw } => write!(f,
                "stored volume {} does not map to a known volume", raw
            ),
            ErrorKind::Io(ref err) => write!(f, "io error: {}", err),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::new(ErrorKind::Io(error))
    }
}
