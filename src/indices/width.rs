//! Index element widths and the size resolvers that map byte widths to them.

use bytemuck::Pod;
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

use crate::index_error::IndexError;
use crate::indices::slice::{IndexSlice, IndexSliceMut};

/// Width tag of one index element.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IndexWidth {
    U8,
    U16,
    U32,
}

impl IndexWidth {
    /// Resolve a byte width in {1,2,4}.
    pub fn from_bytes(bytes: usize) -> Result<Self, IndexError> {
        match bytes {
            1 => Ok(IndexWidth::U8),
            2 => Ok(IndexWidth::U16),
            4 => Ok(IndexWidth::U32),
            _ => Err(IndexError::InvalidWidth {
                bytes,
                role: "index",
            }),
        }
    }

    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            IndexWidth::U8 => 1,
            IndexWidth::U16 => 2,
            IndexWidth::U32 => 4,
        }
    }
}

/// Input-side width tag; any [`IndexWidth`] is a valid input width.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct InputWidth(IndexWidth);

/// Output-side width tag; only 16- and 32-bit outputs exist.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum OutputWidth {
    #[default]
    U16,
    U32,
}

impl InputWidth {
    pub const COUNT: usize = 3;
    pub const ALL: [InputWidth; InputWidth::COUNT] = [
        InputWidth(IndexWidth::U8),
        InputWidth(IndexWidth::U16),
        InputWidth(IndexWidth::U32),
    ];
    pub const U8: InputWidth = InputWidth(IndexWidth::U8);
    pub const U16: InputWidth = InputWidth(IndexWidth::U16);
    pub const U32: InputWidth = InputWidth(IndexWidth::U32);

    #[inline]
    pub const fn width(self) -> IndexWidth {
        self.0
    }

    #[inline]
    pub const fn slot(self) -> usize {
        self.0 as usize
    }
}

impl From<IndexWidth> for InputWidth {
    fn from(w: IndexWidth) -> Self {
        InputWidth(w)
    }
}

impl OutputWidth {
    pub const COUNT: usize = 2;
    pub const ALL: [OutputWidth; OutputWidth::COUNT] = [OutputWidth::U16, OutputWidth::U32];

    #[inline]
    pub const fn width(self) -> IndexWidth {
        match self {
            OutputWidth::U16 => IndexWidth::U16,
            OutputWidth::U32 => IndexWidth::U32,
        }
    }

    #[inline]
    pub const fn slot(self) -> usize {
        self as usize
    }
}

impl TryFrom<IndexWidth> for OutputWidth {
    type Error = IndexError;

    fn try_from(w: IndexWidth) -> Result<Self, Self::Error> {
        match w {
            IndexWidth::U16 => Ok(OutputWidth::U16),
            IndexWidth::U32 => Ok(OutputWidth::U32),
            IndexWidth::U8 => Err(IndexError::InvalidWidth {
                bytes: 1,
                role: "output",
            }),
        }
    }
}

/// Resolve an input element byte width (1, 2 or 4).
pub fn input_width(bytes: usize) -> Result<InputWidth, IndexError> {
    IndexWidth::from_bytes(bytes)
        .map(InputWidth)
        .map_err(|_| IndexError::InvalidWidth {
            bytes,
            role: "input",
        })
}

/// Resolve an output element byte width (2 or 4).
pub fn output_width(bytes: usize) -> Result<OutputWidth, IndexError> {
    match bytes {
        2 => Ok(OutputWidth::U16),
        4 => Ok(OutputWidth::U32),
        _ => Err(IndexError::InvalidWidth {
            bytes,
            role: "output",
        }),
    }
}

/// An element type indices can be read from.
pub trait InIndex: Pod + AsPrimitive<u32> {
    const WIDTH: IndexWidth;
    /// The typed slice behind `s`, if it holds this element type.
    fn view(s: IndexSlice<'_>) -> Option<&[Self]>;
}

/// An element type indices can be written to.
///
/// Values wider than the element are truncated, matching a plain integer cast.
pub trait OutIndex: Pod {
    const WIDTH: OutputWidth;
    fn from_u32(v: u32) -> Self;
    /// The typed slice behind `s`, if it holds this element type.
    fn view_mut(s: IndexSliceMut<'_>) -> Option<&mut [Self]>;
}

impl InIndex for u8 {
    const WIDTH: IndexWidth = IndexWidth::U8;
    fn view(s: IndexSlice<'_>) -> Option<&[Self]> {
        match s {
            IndexSlice::U8(v) => Some(v),
            _ => None,
        }
    }
}

impl InIndex for u16 {
    const WIDTH: IndexWidth = IndexWidth::U16;
    fn view(s: IndexSlice<'_>) -> Option<&[Self]> {
        match s {
            IndexSlice::U16(v) => Some(v),
            _ => None,
        }
    }
}

impl InIndex for u32 {
    const WIDTH: IndexWidth = IndexWidth::U32;
    fn view(s: IndexSlice<'_>) -> Option<&[Self]> {
        match s {
            IndexSlice::U32(v) => Some(v),
            _ => None,
        }
    }
}

impl OutIndex for u16 {
    const WIDTH: OutputWidth = OutputWidth::U16;
    #[inline]
    fn from_u32(v: u32) -> Self {
        v.as_()
    }
    fn view_mut(s: IndexSliceMut<'_>) -> Option<&mut [Self]> {
        match s {
            IndexSliceMut::U16(v) => Some(v),
            IndexSliceMut::U32(_) => None,
        }
    }
}

impl OutIndex for u32 {
    const WIDTH: OutputWidth = OutputWidth::U32;
    #[inline]
    fn from_u32(v: u32) -> Self {
        v
    }
    fn view_mut(s: IndexSliceMut<'_>) -> Option<&mut [Self]> {
        match s {
            IndexSliceMut::U32(v) => Some(v),
            IndexSliceMut::U16(_) => None,
        }
    }
}
