//! Index element widths and borrowed buffer views.

pub mod slice;
pub mod width;

pub use slice::{IndexSlice, IndexSliceMut};
pub use width::{InIndex, IndexWidth, InputWidth, OutIndex, OutputWidth, input_width, output_width};
