//! Topology expanders.
//!
//! Each expander turns an index window into a canonical list of points,
//! lines, triangles or adjacency primitives. Expanders are generic over where
//! vertex values come from ([`VertexSource`]) and the output element type, and
//! take topology, provoking-vertex conversion and restart sentinel at call
//! time. They never allocate and trust a request that has already been
//! validated: reads stay inside the window reported by
//! [`Topology::input_extent`](crate::primitive::Topology::input_extent) (or
//! inside `input_count` on the restart path) and exactly `output_count`
//! indices are written.

pub mod adjacency;
pub mod lines;
pub mod quads;
pub mod restart;
pub mod triangles;

use crate::indices::width::{InIndex, OutIndex};
use crate::primitive::provoking::Reorder;
use crate::primitive::topology::Topology;

/// The slice of a draw an expander works on.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Window {
    /// First input position (translate) or first generated value (generate).
    pub start: u32,
    /// Number of valid input indices; bounds restart scanning.
    pub input_count: u32,
    /// Number of indices to write.
    pub output_count: u32,
}

impl Window {
    /// Number of expander steps needed to fill `output_count`.
    #[inline]
    pub fn steps(&self, topology: Topology) -> u32 {
        self.output_count / topology.output_group()
    }
}

/// Supplies the vertex value found at an input position.
pub trait VertexSource: Copy {
    fn vert(&self, pos: u32) -> u32;
}

/// Non-indexed draws: the vertex at position `p` is `p`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sequential;

impl VertexSource for Sequential {
    #[inline]
    fn vert(&self, pos: u32) -> u32 {
        pos
    }
}

/// Indexed draws: the vertex at position `p` is `input[p]`.
#[derive(Clone, Copy, Debug)]
pub struct Indexed<'a, I>(pub &'a [I]);

impl<I: InIndex> VertexSource for Indexed<'_, I> {
    #[inline]
    fn vert(&self, pos: u32) -> u32 {
        self.0[pos as usize].as_()
    }
}

/// Output cursor over a caller-sized buffer.
pub(crate) struct Emitter<'o, O> {
    out: &'o mut [O],
    j: usize,
}

impl<'o, O: OutIndex> Emitter<'o, O> {
    #[inline]
    pub(crate) fn new(out: &'o mut [O]) -> Self {
        Self { out, j: 0 }
    }

    #[inline]
    pub(crate) fn emit<const N: usize>(&mut self, prim: [u32; N]) {
        for (slot, v) in self.out[self.j..self.j + N].iter_mut().zip(prim) {
            *slot = O::from_u32(v);
        }
        self.j += N;
    }

    /// Write `n` copies of `value`; used for degenerate restart primitives.
    #[inline]
    pub(crate) fn fill(&mut self, n: usize, value: u32) {
        self.out[self.j..self.j + n].fill(O::from_u32(value));
        self.j += n;
    }

    #[cfg(test)]
    pub(crate) fn written(&self) -> usize {
        self.j
    }
}

/// Run the expander for `topology` over `window`, writing into `out`.
///
/// `restart` carries the sentinel when primitive restart is enabled; it is
/// only consulted by quads, quad strips and polygons.
pub fn expand<S: VertexSource, O: OutIndex>(
    topology: Topology,
    reorder: Reorder,
    restart: Option<u32>,
    src: S,
    window: &Window,
    out: &mut [O],
) {
    let mut em = Emitter::new(&mut out[..window.output_count as usize]);
    match topology {
        Topology::Points => lines::points(src, window, &mut em),
        Topology::Lines => lines::lines(reorder, src, window, &mut em),
        Topology::LineStrip => lines::line_strip(reorder, src, window, &mut em),
        Topology::LineLoop => lines::line_loop(reorder, src, window, &mut em),
        Topology::Triangles => triangles::triangles(reorder, src, window, &mut em),
        Topology::TriangleStrip => triangles::triangle_strip(reorder, src, window, &mut em),
        Topology::TriangleFan => triangles::triangle_fan(reorder, src, window, &mut em),
        Topology::Polygon => match restart {
            Some(sentinel) => triangles::polygon_restart(reorder, src, window, sentinel, &mut em),
            None => triangles::polygon(reorder, src, window, &mut em),
        },
        Topology::Quads => match restart {
            Some(sentinel) => quads::quads_restart(reorder, src, window, sentinel, &mut em),
            None => quads::quads(reorder, src, window, &mut em),
        },
        Topology::QuadStrip => match restart {
            Some(sentinel) => quads::quad_strip_restart(reorder, src, window, sentinel, &mut em),
            None => quads::quad_strip(reorder, src, window, &mut em),
        },
        Topology::LinesAdjacency => adjacency::lines_adjacency(reorder, src, window, &mut em),
        Topology::LineStripAdjacency => {
            adjacency::line_strip_adjacency(reorder, src, window, &mut em)
        }
        Topology::TrianglesAdjacency => {
            adjacency::triangles_adjacency(reorder, src, window, &mut em)
        }
        Topology::TriangleStripAdjacency => {
            adjacency::triangle_strip_adjacency(reorder, src, window, &mut em)
        }
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use super::*;
    use crate::primitive::provoking::ProvokingVertex;

    pub(crate) const SAME_FIRST: Reorder =
        Reorder::new(ProvokingVertex::First, ProvokingVertex::First);
    pub(crate) const SAME_LAST: Reorder =
        Reorder::new(ProvokingVertex::Last, ProvokingVertex::Last);

    /// Expand a sequential (generate-mode) window into a `Vec<u32>`.
    pub(crate) fn run_seq(
        topology: Topology,
        reorder: Reorder,
        start: u32,
        output_count: u32,
    ) -> Vec<u32> {
        let mut out = vec![0u32; output_count as usize];
        let window = Window {
            start,
            input_count: 0,
            output_count,
        };
        expand(topology, reorder, None, Sequential, &window, &mut out);
        out
    }

    /// Expand an indexed (translate-mode) window into a `Vec<u32>`.
    pub(crate) fn run_idx(
        topology: Topology,
        reorder: Reorder,
        restart: Option<u32>,
        input: &[u32],
        start: u32,
        output_count: u32,
    ) -> Vec<u32> {
        let mut out = vec![0u32; output_count as usize];
        let window = Window {
            start,
            input_count: input.len() as u32,
            output_count,
        };
        expand(topology, reorder, restart, Indexed(input), &window, &mut out);
        out
    }
}
