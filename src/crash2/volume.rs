use crate::{Error, ErrorKind};

/// Percentages shown by the options menu, indexed by the stored value / 4
const VOLUMES: [u8; 65] = [
    0, 2, 3, 5, 6, 8, 9, 11, 13, 14, 16, 17, 19, 20, 22, 23, 25, 27, 28, 30, 31, 33, 34, 36, 38,
    39, 41, 42, 44, 45, 47, 48, 50, 52, 53, 55, 56, 58, 59, 61, 63, 64, 66, 67, 69, 70, 72, 73,
    75, 77, 78, 80, 81, 83, 84, 86, 88, 89, 91, 92, 94, 95, 97, 98, 100,
];

/// Every volume percentage the game can represent, quietest first
pub fn supported_volumes() -> &'static [u8] {
    &VOLUMES
}

/// Converts a menu percentage to the value the game stores
pub(crate) fn to_raw(volume: u8) -> Result<i32, Error> {
    VOLUMES
        .iter()
        .position(|&x| x == volume)
        .map(|i| i as i32 * 4)
        .ok_or_else(|| ErrorKind::UnsupportedVolume(volume).into())
}

/// Converts a stored value back to a menu percentage. The game truncates the
/// division, so values between steps round down.
pub(crate) fn from_raw(raw: i32) -> Result<u8, Error> {
    usize::try_from(raw / 4)
        .ok()
        .filter(|_| raw >= 0)
        .and_then(|i| VOLUMES.get(i).copied())
        .ok_or_else(|| ErrorKind::InvalidStoredVolume { raw }.into())
}
