//! Points, lines, line strips and line loops.

use super::{Emitter, VertexSource, Window};
use crate::indices::width::OutIndex;
use crate::primitive::provoking::Reorder;
use crate::primitive::topology::Topology;

pub(crate) fn points<S: VertexSource, O: OutIndex>(src: S, w: &Window, em: &mut Emitter<'_, O>) {
    for k in 0..w.steps(Topology::Points) {
        em.emit([src.vert(w.start + k)]);
    }
}

pub(crate) fn lines<S: VertexSource, O: OutIndex>(
    reorder: Reorder,
    src: S,
    w: &Window,
    em: &mut Emitter<'_, O>,
) {
    for k in 0..w.steps(Topology::Lines) {
        let i = w.start + 2 * k;
        em.emit(reorder.line(src.vert(i), src.vert(i + 1)));
    }
}

pub(crate) fn line_strip<S: VertexSource, O: OutIndex>(
    reorder: Reorder,
    src: S,
    w: &Window,
    em: &mut Emitter<'_, O>,
) {
    for k in 0..w.steps(Topology::LineStrip) {
        let i = w.start + k;
        em.emit(reorder.line(src.vert(i), src.vert(i + 1)));
    }
}

/// A line strip whose final segment closes back to `start`.
pub(crate) fn line_loop<S: VertexSource, O: OutIndex>(
    reorder: Reorder,
    src: S,
    w: &Window,
    em: &mut Emitter<'_, O>,
) {
    let steps = w.steps(Topology::LineLoop);
    if steps == 0 {
        return;
    }
    for k in 0..steps - 1 {
        let i = w.start + k;
        em.emit(reorder.line(src.vert(i), src.vert(i + 1)));
    }
    let last = w.start + steps - 1;
    em.emit(reorder.line(src.vert(last), src.vert(w.start)));
}
