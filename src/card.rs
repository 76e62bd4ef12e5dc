use crate::{
    util::{le_i32, le_u32},
    Error, ErrorKind,
};
use std::fmt;
use std::io::Read;

/// A single memory card save: an 8192 byte block prefixed with the 128 byte
/// directory frame that memory card tooling exports alongside it.
///
/// The bytes are always copied in and copied out, so neither the slice given
/// at construction nor any exported vector aliases the owned buffer.
///
/// ```
/// use bandicoot::RawSave;
///
/// let mut input = vec![0u8; RawSave::SIZE];
/// let save = RawSave::from_slice(&input).unwrap();
/// input[0] = 0xff;
/// assert_eq!(save.read_u8(0).unwrap(), 0);
///
/// assert!(RawSave::from_slice(&input[1..]).is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct RawSave {
    data: Box<[u8; RawSave::SIZE]>,
}

impl RawSave {
    /// Size of the 128 byte frame plus the 8 KiB block
    pub const SIZE: usize = 8320;

    /// Copies the given bytes into a new save. Fails unless the slice is
    /// exactly [`RawSave::SIZE`] long.
    pub fn from_slice(data: &[u8]) -> Result<Self, Error> {
        let data: [u8; RawSave::SIZE] = data
            .try_into()
            .map_err(|_| ErrorKind::InvalidLength { len: data.len() })?;
        Ok(RawSave {
            data: Box::new(data),
        })
    }

    /// Copies the bytes out of a reader. The reader must yield exactly
    /// [`RawSave::SIZE`] bytes. At most one byte past the limit is consumed.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, Error> {
        let mut buf = Vec::with_capacity(RawSave::SIZE + 1);
        reader
            .take(RawSave::SIZE as u64 + 1)
            .read_to_end(&mut buf)?;
        RawSave::from_slice(&buf)
    }

    #[inline]
    fn range(&self, offset: usize, width: usize) -> Result<std::ops::Range<usize>, Error> {
        match offset.checked_add(width) {
            Some(end) if end <= RawSave::SIZE => Ok(offset..end),
            _ => Err(ErrorKind::OutOfBounds { offset, width }.into()),
        }
    }

    /// Returns `width` bytes starting at `offset`
    pub fn read_at(&self, offset: usize, width: usize) -> Result<&[u8], Error> {
        let range = self.range(offset, width)?;
        Ok(&self.data[range])
    }

    /// Overwrites the bytes starting at `offset`
    pub fn write_at(&mut self, offset: usize, bytes: &[u8]) -> Result<(), Error> {
        let range = self.range(offset, bytes.len())?;
        self.data[range].copy_from_slice(bytes);
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, Error> {
        self.read_at(offset, 1).map(|x| x[0])
    }

    pub fn write_u8(&mut self, offset: usize, value: u8) -> Result<(), Error> {
        self.write_at(offset, &[value])
    }

    /// Reads a little endian u32
    pub fn read_u32(&self, offset: usize) -> Result<u32, Error> {
        let data = self.read_at(offset, 4)?;
        le_u32(data).ok_or_else(|| ErrorKind::OutOfBounds { offset, width: 4 }.into())
    }

    /// Writes a little endian u32
    pub fn write_u32(&mut self, offset: usize, value: u32) -> Result<(), Error> {
        self.write_at(offset, &value.to_le_bytes())
    }

    /// Reads a little endian i32
    pub fn read_i32(&self, offset: usize) -> Result<i32, Error> {
        let data = self.read_at(offset, 4)?;
        le_i32(data).ok_or_else(|| ErrorKind::OutOfBounds { offset, width: 4 }.into())
    }

    /// Writes a little endian i32
    pub fn write_i32(&mut self, offset: usize, value: i32) -> Result<(), Error> {
        self.write_at(offset, &value.to_le_bytes())
    }

    /// View the entire buffer
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..]
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data[..]
    }

    /// Returns an independent copy of the buffer
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.to_vec()
    }
}

impl fmt::Debug for RawSave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawSave")
            .field("len", &self.data.len())
            .finish_non_exhaustive()
    }
}
