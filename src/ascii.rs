/// Returns the leading portion of a fixed width ascii field, stopping at the
/// first NUL byte. Fixed width fields are NUL padded and anything after the
/// terminator is leftover garbage from earlier writes.
#[inline]
pub(crate) fn until_nul(data: &[u8]) -> &[u8] {
    let end = data.iter().position(|&x| x == 0).unwrap_or(data.len());
    &data[..end]
}

/// Decodes a fixed width ascii field. Non-ascii bytes are replaced rather than
/// rejected as the title and name regions are written by the console, not by
/// us.
pub(crate) fn decode_field(data: &[u8]) -> String {
    until_nul(data)
        .iter()
        .map(|&x| if x.is_ascii() { x as char } else { char::REPLACEMENT_CHARACTER })
        .collect()
}
