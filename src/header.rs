use crate::{ascii, Error, RawSave};

/// Memory card save with access to the fields every single block save on the
/// console shares, regardless of which game wrote it.
///
/// ```
/// use bandicoot::{RawSave, SaveBlock};
///
/// let mut data = vec![0u8; RawSave::SIZE];
/// data[0x0a..0x0a + 12].copy_from_slice(b"BESCES-00967");
/// let block = SaveBlock::from_slice(&data).unwrap();
/// assert_eq!(block.title(), "BESCES-00967");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveBlock {
    raw: RawSave,
}

impl SaveBlock {
    /// Offset of the product code + file name field within the frame
    pub const TITLE_OFFSET: usize = 0x0a;

    /// Width of the NUL padded title field
    pub const TITLE_LEN: usize = 20;

    /// Copies the given bytes into a new save block
    pub fn from_slice(data: &[u8]) -> Result<Self, Error> {
        RawSave::from_slice(data).map(SaveBlock::new)
    }

    /// Wraps an existing container
    pub fn new(raw: RawSave) -> Self {
        SaveBlock { raw }
    }

    /// The raw, NUL padded title field
    pub fn title_bytes(&self) -> &[u8] {
        let start = SaveBlock::TITLE_OFFSET;
        &self.raw.as_bytes()[start..start + SaveBlock::TITLE_LEN]
    }

    /// The title field decoded as ascii with the NUL padding removed
    pub fn title(&self) -> String {
        ascii::decode_field(self.title_bytes())
    }

    pub fn raw(&self) -> &RawSave {
        &self.raw
    }

    pub fn raw_mut(&mut self) -> &mut RawSave {
        &mut self.raw
    }

    pub fn into_raw(self) -> RawSave {
        self.raw
    }
}
