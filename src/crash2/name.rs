use super::layout::NAME_LEN;
use crate::{ascii, Error, ErrorKind};

/// The game's font places the space glyph where ascii has `[`
const SPACE: u8 = b'[';

/// Encodes a player name into its NUL padded slot representation
pub(crate) fn encode(name: &str) -> Result<[u8; NAME_LEN], Error> {
    if !name.is_ascii() {
        return Err(ErrorKind::NameNotAscii.into());
    }

    let data = name.as_bytes();
    if let Some(&x) = data.iter().find(|&&x| x == SPACE || x == 0) {
        return Err(ErrorKind::NameInvalidChar(x as char).into());
    }

    if data.len() > NAME_LEN {
        return Err(ErrorKind::NameTooLong { len: data.len() }.into());
    }

    let mut out = [0u8; NAME_LEN];
    for (dst, &src) in out.iter_mut().zip(data) {
        *dst = if src == b' ' { SPACE } else { src };
    }

    Ok(out)
}

/// Decodes a stored name. A name occupying all eight bytes has no terminator.
pub(crate) fn decode(data: &[u8]) -> String {
    let data: Vec<u8> = ascii::until_nul(data)
        .iter()
        .map(|&x| if x == SPACE { b' ' } else { x })
        .collect();
    ascii::decode_field(&data)
}
