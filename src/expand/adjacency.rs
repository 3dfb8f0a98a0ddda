//! Adjacency topologies: lines and triangles carrying neighbour vertices.

use super::{Emitter, VertexSource, Window};
use crate::indices::width::OutIndex;
use crate::primitive::provoking::Reorder;
use crate::primitive::topology::Topology;

#[inline]
fn fetch<S: VertexSource, const N: usize>(src: &S, pos: [u32; N]) -> [u32; N] {
    pos.map(|p| src.vert(p))
}

pub(crate) fn lines_adjacency<S: VertexSource, O: OutIndex>(
    reorder: Reorder,
    src: S,
    w: &Window,
    em: &mut Emitter<'_, O>,
) {
    for k in 0..w.steps(Topology::LinesAdjacency) {
        let i = w.start + 4 * k;
        em.emit(reorder.line_adjacency(fetch(&src, [i, i + 1, i + 2, i + 3])));
    }
}

pub(crate) fn line_strip_adjacency<S: VertexSource, O: OutIndex>(
    reorder: Reorder,
    src: S,
    w: &Window,
    em: &mut Emitter<'_, O>,
) {
    for k in 0..w.steps(Topology::LineStripAdjacency) {
        let i = w.start + k;
        em.emit(reorder.line_adjacency(fetch(&src, [i, i + 1, i + 2, i + 3])));
    }
}

pub(crate) fn triangles_adjacency<S: VertexSource, O: OutIndex>(
    reorder: Reorder,
    src: S,
    w: &Window,
    em: &mut Emitter<'_, O>,
) {
    for k in 0..w.steps(Topology::TrianglesAdjacency) {
        let i = w.start + 6 * k;
        em.emit(reorder.triangle_adjacency(fetch(
            &src,
            [i, i + 1, i + 2, i + 3, i + 4, i + 5],
        )));
    }
}

/// Window layout for one triangle of a triangle strip with adjacency.
///
/// Even triangles (`i % 4 == 0`) read their six positions in order. Odd
/// triangles swap winding and take the neighbour of their first edge from
/// two positions before the cursor.
#[inline]
pub(crate) fn strip_adjacency_layout(i: u32) -> [u32; 6] {
    if i % 4 == 0 {
        [i, i + 1, i + 2, i + 3, i + 4, i + 5]
    } else {
        [i + 2, i - 2, i, i + 3, i + 4, i + 6]
    }
}

pub(crate) fn triangle_strip_adjacency<S: VertexSource, O: OutIndex>(
    reorder: Reorder,
    src: S,
    w: &Window,
    em: &mut Emitter<'_, O>,
) {
    for k in 0..w.steps(Topology::TriangleStripAdjacency) {
        let i = w.start + 2 * k;
        em.emit(reorder.triangle_adjacency(fetch(&src, strip_adjacency_layout(i))));
    }
}

#[cfg(test)]
mod tests {
    use super::strip_adjacency_layout;
    use crate::expand::test_util::*;
    use crate::primitive::provoking::{ProvokingVertex, Reorder};
    use crate::primitive::topology::Topology;

    const SWAP: Reorder = Reorder::new(ProvokingVertex::First, ProvokingVertex::Last);

    #[test]
    fn lines_adjacency_groups_of_four() {
        assert_eq!(
            run_seq(Topology::LinesAdjacency, SAME_FIRST, 0, 8),
            vec![0, 1, 2, 3, 4, 5, 6, 7]
        );
        assert_eq!(
            run_seq(Topology::LinesAdjacency, SWAP, 0, 4),
            vec![3, 2, 1, 0]
        );
    }

    #[test]
    fn line_strip_adjacency_slides_by_one() {
        assert_eq!(
            run_seq(Topology::LineStripAdjacency, SAME_LAST, 0, 8),
            vec![0, 1, 2, 3, 1, 2, 3, 4]
        );
    }

    #[test]
    fn triangles_adjacency_rotates_by_two() {
        assert_eq!(
            run_seq(Topology::TrianglesAdjacency, SAME_FIRST, 0, 6),
            vec![0, 1, 2, 3, 4, 5]
        );
        assert_eq!(
            run_seq(Topology::TrianglesAdjacency, SWAP, 0, 6),
            vec![4, 5, 0, 1, 2, 3]
        );
    }

    #[test]
    fn strip_adjacency_odd_window_reaches_back() {
        assert_eq!(strip_adjacency_layout(0), [0, 1, 2, 3, 4, 5]);
        assert_eq!(strip_adjacency_layout(2), [4, 0, 2, 5, 6, 8]);
        assert_eq!(strip_adjacency_layout(6), [8, 4, 6, 9, 10, 12]);
        assert_eq!(
            run_seq(Topology::TriangleStripAdjacency, SAME_FIRST, 0, 18),
            vec![
                0, 1, 2, 3, 4, 5, // i = 0
                4, 0, 2, 5, 6, 8, // i = 2
                4, 5, 6, 7, 8, 9, // i = 4
            ]
        );
    }

    #[test]
    fn strip_adjacency_translate_reads_neighbour() {
        let input: Vec<u32> = (100..112).collect();
        let out = run_idx(Topology::TriangleStripAdjacency, SAME_FIRST, None, &input, 0, 12);
        assert_eq!(&out[6..], &[104, 100, 102, 105, 106, 108]);
    }
}
