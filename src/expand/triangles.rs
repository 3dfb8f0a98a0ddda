//! Triangle lists, strips, fans and polygons.

use super::restart::{Scan, scan};
use super::{Emitter, VertexSource, Window};
use crate::indices::width::OutIndex;
use crate::primitive::provoking::{ProvokingVertex, Reorder};
use crate::primitive::topology::Topology;

pub(crate) fn triangles<S: VertexSource, O: OutIndex>(
    reorder: Reorder,
    src: S,
    w: &Window,
    em: &mut Emitter<'_, O>,
) {
    for k in 0..w.steps(Topology::Triangles) {
        let i = w.start + 3 * k;
        em.emit(reorder.triangle(src.vert(i), src.vert(i + 1), src.vert(i + 2)));
    }
}

/// Strip triangles alternate winding with the parity of the cursor. The odd
/// triangle swaps the two vertices that are not provoking under the input
/// convention, so the provoking vertex keeps its slot.
pub(crate) fn triangle_strip<S: VertexSource, O: OutIndex>(
    reorder: Reorder,
    src: S,
    w: &Window,
    em: &mut Emitter<'_, O>,
) {
    for k in 0..w.steps(Topology::TriangleStrip) {
        let i = w.start + k;
        let odd = i & 1;
        let [a, b, c] = match reorder.from {
            ProvokingVertex::First => [i, i + 1 + odd, i + 2 - odd],
            ProvokingVertex::Last => [i + odd, i + 1 - odd, i + 2],
        };
        em.emit(reorder.triangle(src.vert(a), src.vert(b), src.vert(c)));
    }
}

pub(crate) fn triangle_fan<S: VertexSource, O: OutIndex>(
    reorder: Reorder,
    src: S,
    w: &Window,
    em: &mut Emitter<'_, O>,
) {
    let apex = src.vert(w.start);
    for k in 0..w.steps(Topology::TriangleFan) {
        let i = w.start + k;
        em.emit(reorder.triangle(apex, src.vert(i + 1), src.vert(i + 2)));
    }
}

/// Fan corner order for one polygon triangle: the apex is provoking under a
/// first-vertex convention, the trailing corner under a last-vertex one.
#[inline]
fn polygon_corners<S: VertexSource>(reorder: Reorder, src: &S, apex: u32, i: u32) -> [u32; 3] {
    let (apex, b, c) = (src.vert(apex), src.vert(i + 1), src.vert(i + 2));
    match reorder.from {
        ProvokingVertex::First => reorder.triangle(apex, b, c),
        ProvokingVertex::Last => reorder.triangle(b, c, apex),
    }
}

pub(crate) fn polygon<S: VertexSource, O: OutIndex>(
    reorder: Reorder,
    src: S,
    w: &Window,
    em: &mut Emitter<'_, O>,
) {
    for k in 0..w.steps(Topology::Polygon) {
        em.emit(polygon_corners(reorder, &src, w.start, w.start + k));
    }
}

/// Polygon with primitive restart. A sentinel starts a new polygon, so the
/// fan apex follows the cursor past the cut.
pub(crate) fn polygon_restart<S: VertexSource, O: OutIndex>(
    reorder: Reorder,
    src: S,
    w: &Window,
    sentinel: u32,
    em: &mut Emitter<'_, O>,
) {
    let mut i = w.start;
    let mut apex = w.start;
    for _ in 0..w.steps(Topology::Polygon) {
        match scan(&src, i, 3, w.input_count, sentinel) {
            Scan::Overrun => {
                em.fill(3, sentinel);
                i = i.saturating_add(1);
            }
            Scan::Cut(next) => {
                em.fill(3, sentinel);
                i = next;
                apex = next;
            }
            Scan::Clear => {
                em.emit(polygon_corners(reorder, &src, apex, i));
                i += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::expand::test_util::*;
    use crate::primitive::provoking::{ProvokingVertex, Reorder};
    use crate::primitive::topology::Topology;

    const R: u32 = 0xFFFF_FFFF;

    #[test]
    fn triangle_list() {
        assert_eq!(
            run_seq(Topology::Triangles, SAME_FIRST, 0, 6),
            vec![0, 1, 2, 3, 4, 5]
        );
        let to_last = Reorder::new(ProvokingVertex::First, ProvokingVertex::Last);
        assert_eq!(run_seq(Topology::Triangles, to_last, 0, 3), vec![1, 2, 0]);
    }

    #[test]
    fn strip_first_provoking_keeps_first_slot() {
        assert_eq!(
            run_seq(Topology::TriangleStrip, SAME_FIRST, 0, 12),
            vec![0, 1, 2, 1, 3, 2, 2, 3, 4, 3, 5, 4]
        );
    }

    #[test]
    fn strip_last_provoking_keeps_last_slot() {
        assert_eq!(
            run_seq(Topology::TriangleStrip, SAME_LAST, 0, 12),
            vec![0, 1, 2, 2, 1, 3, 2, 3, 4, 4, 3, 5]
        );
    }

    #[test]
    fn strip_parity_follows_absolute_position() {
        // starting on an odd position begins with the swapped layout
        assert_eq!(
            run_seq(Topology::TriangleStrip, SAME_FIRST, 1, 3),
            vec![1, 3, 2]
        );
    }

    #[test]
    fn fan_anchors_on_start() {
        let input = [10u32, 11, 12, 13, 14];
        assert_eq!(
            run_idx(Topology::TriangleFan, SAME_FIRST, None, &input, 0, 9),
            vec![10, 11, 12, 10, 12, 13, 10, 13, 14]
        );
    }

    #[test]
    fn polygon_corner_order_per_convention() {
        assert_eq!(
            run_seq(Topology::Polygon, SAME_FIRST, 0, 6),
            vec![0, 1, 2, 0, 2, 3]
        );
        assert_eq!(
            run_seq(Topology::Polygon, SAME_LAST, 0, 6),
            vec![1, 2, 0, 2, 3, 0]
        );
    }

    #[test]
    fn polygon_restart_moves_apex() {
        let input = [0u32, 1, 2, 3, R, 5, 6, 7, 8];
        let out = run_idx(Topology::Polygon, SAME_FIRST, Some(R), &input, 0, 15);
        assert_eq!(
            out,
            vec![
                0, 1, 2, // i = 0
                0, 2, 3, // i = 1
                R, R, R, // i = 2 window holds R at 4 -> cursor 5
                5, 6, 7, // apex moved to 5
                5, 7, 8,
            ]
        );
    }

    #[test]
    fn polygon_restart_overrun_is_degenerate() {
        let input = [0u32, 1, 2, 3];
        let out = run_idx(Topology::Polygon, SAME_FIRST, Some(R), &input, 0, 12);
        assert_eq!(out, vec![0, 1, 2, 0, 2, 3, R, R, R, R, R, R]);
    }

    #[test]
    fn polygon_restart_without_sentinel_matches_plain() {
        let input = [4u32, 5, 6, 7, 8];
        assert_eq!(
            run_idx(Topology::Polygon, SAME_LAST, Some(R), &input, 0, 9),
            run_idx(Topology::Polygon, SAME_LAST, None, &input, 0, 9)
        );
    }
}
