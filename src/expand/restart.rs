//! Primitive-restart scanning for the quads, quad-strip and polygon expanders.
//!
//! Before each primitive the expander asks [`scan`] whether the next input
//! window can be assembled. A window that runs past `input_count` or holds the
//! sentinel produces a degenerate primitive instead; on a sentinel hit the
//! cursor jumps just past the sentinel and the normal step is skipped.

use super::VertexSource;

/// Outcome of scanning one input window.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Scan {
    /// The window is complete and free of the sentinel.
    Clear,
    /// The window would read past `input_count`.
    Overrun,
    /// The sentinel sits in the window; resume scanning at this position.
    Cut(u32),
}

/// Scan the `width` positions starting at `cursor`.
#[inline]
pub fn scan<S: VertexSource>(
    src: &S,
    cursor: u32,
    width: u32,
    input_count: u32,
    sentinel: u32,
) -> Scan {
    if u64::from(cursor) + u64::from(width) > u64::from(input_count) {
        return Scan::Overrun;
    }
    for k in 0..width {
        if src.vert(cursor + k) == sentinel {
            return Scan::Cut(cursor + k + 1);
        }
    }
    Scan::Clear
}
