#[inline]
pub(crate) fn le_u32(data: &[u8]) -> Option<u32> {
    data.first_chunk::<4>().map(|x| u32::from_le_bytes(*x))
}

#[inline]
pub(crate) fn le_i32(data: &[u8]) -> Option<i32> {
    data.first_chunk::<4>().map(|x| i32::from_le_bytes(*x))
}
