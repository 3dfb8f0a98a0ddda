//! Borrowed, width-tagged views over caller-owned index buffers.

use crate::index_error::IndexError;
use crate::indices::width::{IndexWidth, InputWidth, OutputWidth};

/// Read-only index buffer of 8-, 16- or 32-bit elements.
#[derive(Clone, Copy, Debug)]
pub enum IndexSlice<'a> {
    U8(&'a [u8]),
    U16(&'a [u16]),
    U32(&'a [u32]),
}

/// Writable index buffer of 16- or 32-bit elements.
#[derive(Debug)]
pub enum IndexSliceMut<'a> {
    U16(&'a mut [u16]),
    U32(&'a mut [u32]),
}

fn view_error(width: usize, e: bytemuck::PodCastError) -> IndexError {
    IndexError::UnalignedBytes {
        width,
        reason: format!("{e:?}"),
    }
}

impl<'a> IndexSlice<'a> {
    /// View raw bytes as indices of `width`.
    ///
    /// The byte length must be a whole number of elements and the buffer must
    /// be aligned for the element type.
    pub fn from_bytes(bytes: &'a [u8], width: InputWidth) -> Result<Self, IndexError> {
        let w = width.width().bytes();
        Ok(match width.width() {
            IndexWidth::U8 => IndexSlice::U8(bytes),
            IndexWidth::U16 => {
                IndexSlice::U16(bytemuck::try_cast_slice(bytes).map_err(|e| view_error(w, e))?)
            }
            IndexWidth::U32 => {
                IndexSlice::U32(bytemuck::try_cast_slice(bytes).map_err(|e| view_error(w, e))?)
            }
        })
    }

    #[inline]
    pub fn width(&self) -> InputWidth {
        match self {
            IndexSlice::U8(_) => InputWidth::U8,
            IndexSlice::U16(_) => InputWidth::U16,
            IndexSlice::U32(_) => InputWidth::U32,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            IndexSlice::U8(s) => s.len(),
            IndexSlice::U16(s) => s.len(),
            IndexSlice::U32(s) => s.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a [u8]> for IndexSlice<'a> {
    fn from(s: &'a [u8]) -> Self {
        IndexSlice::U8(s)
    }
}

impl<'a> From<&'a [u16]> for IndexSlice<'a> {
    fn from(s: &'a [u16]) -> Self {
        IndexSlice::U16(s)
    }
}

impl<'a> From<&'a [u32]> for IndexSlice<'a> {
    fn from(s: &'a [u32]) -> Self {
        IndexSlice::U32(s)
    }
}

impl<'a> IndexSliceMut<'a> {
    /// View raw bytes as writable indices of `width`.
    pub fn from_bytes(bytes: &'a mut [u8], width: OutputWidth) -> Result<Self, IndexError> {
        let w = width.width().bytes();
        Ok(match width {
            OutputWidth::U16 => IndexSliceMut::U16(
                bytemuck::try_cast_slice_mut(bytes).map_err(|e| view_error(w, e))?,
            ),
            OutputWidth::U32 => IndexSliceMut::U32(
                bytemuck::try_cast_slice_mut(bytes).map_err(|e| view_error(w, e))?,
            ),
        })
    }

    #[inline]
    pub fn width(&self) -> OutputWidth {
        match self {
            IndexSliceMut::U16(_) => OutputWidth::U16,
            IndexSliceMut::U32(_) => OutputWidth::U32,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            IndexSliceMut::U16(s) => s.len(),
            IndexSliceMut::U32(s) => s.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reborrow for a shorter lifetime.
    pub fn reborrow(&mut self) -> IndexSliceMut<'_> {
        match self {
            IndexSliceMut::U16(s) => IndexSliceMut::U16(s),
            IndexSliceMut::U32(s) => IndexSliceMut::U32(s),
        }
    }
}

impl<'a> From<&'a mut [u16]> for IndexSliceMut<'a> {
    fn from(s: &'a mut [u16]) -> Self {
        IndexSliceMut::U16(s)
    }
}

impl<'a> From<&'a mut [u32]> for IndexSliceMut<'a> {
    fn from(s: &'a mut [u32]) -> Self {
        IndexSliceMut::U32(s)
    }
}
