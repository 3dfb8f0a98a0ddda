//! Quads and quad strips, each split into two triangles per step.
//!
//! Under primitive restart neither topology moves its reference point after a
//! cut: the cursor resumes past the sentinel but nothing else is reset. This
//! differs from polygons, whose fan apex tracks the cut.

use super::restart::{Scan, scan};
use super::{Emitter, VertexSource, Window};
use crate::indices::width::OutIndex;
use crate::primitive::provoking::{ProvokingVertex, Reorder, split_quad};
use crate::primitive::topology::Topology;

#[inline]
fn emit_quad<S: VertexSource, O: OutIndex>(
    reorder: Reorder,
    src: &S,
    corners: [u32; 4],
    em: &mut Emitter<'_, O>,
) {
    let [a, b, c, d] = corners.map(|p| src.vert(p));
    let [t0, t1] = split_quad(reorder, a, b, c, d);
    em.emit(t0);
    em.emit(t1);
}

/// Quad-strip vertices zig-zag between two rails; rearrange one step into
/// quad order, keeping the input convention's provoking vertex in the slot
/// [`split_quad`] treats as provoking.
#[inline]
fn strip_corners(reorder: Reorder, i: u32) -> [u32; 4] {
    match reorder.from {
        ProvokingVertex::Last => [i + 2, i, i + 1, i + 3],
        ProvokingVertex::First => [i, i + 1, i + 3, i + 2],
    }
}

pub(crate) fn quads<S: VertexSource, O: OutIndex>(
    reorder: Reorder,
    src: S,
    w: &Window,
    em: &mut Emitter<'_, O>,
) {
    for k in 0..w.steps(Topology::Quads) {
        let i = w.start + 4 * k;
        emit_quad(reorder, &src, [i, i + 1, i + 2, i + 3], em);
    }
}

pub(crate) fn quad_strip<S: VertexSource, O: OutIndex>(
    reorder: Reorder,
    src: S,
    w: &Window,
    em: &mut Emitter<'_, O>,
) {
    for k in 0..w.steps(Topology::QuadStrip) {
        let i = w.start + 2 * k;
        emit_quad(reorder, &src, strip_corners(reorder, i), em);
    }
}

pub(crate) fn quads_restart<S: VertexSource, O: OutIndex>(
    reorder: Reorder,
    src: S,
    w: &Window,
    sentinel: u32,
    em: &mut Emitter<'_, O>,
) {
    let mut i = w.start;
    for _ in 0..w.steps(Topology::Quads) {
        match scan(&src, i, 4, w.input_count, sentinel) {
            Scan::Overrun => {
                em.fill(6, sentinel);
                i = i.saturating_add(4);
            }
            Scan::Cut(next) => {
                em.fill(6, sentinel);
                i = next;
            }
            Scan::Clear => {
                emit_quad(reorder, &src, [i, i + 1, i + 2, i + 3], em);
                i += 4;
            }
        }
    }
}

pub(crate) fn quad_strip_restart<S: VertexSource, O: OutIndex>(
    reorder: Reorder,
    src: S,
    w: &Window,
    sentinel: u32,
    em: &mut Emitter<'_, O>,
) {
    let mut i = w.start;
    for _ in 0..w.steps(Topology::QuadStrip) {
        match scan(&src, i, 4, w.input_count, sentinel) {
            Scan::Overrun => {
                em.fill(6, sentinel);
                i = i.saturating_add(2);
            }
            Scan::Cut(next) => {
                em.fill(6, sentinel);
                i = next;
            }
            Scan::Clear => {
                emit_quad(reorder, &src, strip_corners(reorder, i), em);
                i += 2;
            }
        }
    }
}
