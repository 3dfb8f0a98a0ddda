//! Primitive topologies accepted by the expanders, and the per-topology
//! grouping facts the rest of the crate relies on.

use serde::{Deserialize, Serialize};

/// Grouping rule that turns a flat index sequence into drawable primitives.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Topology {
    #[default]
    Points,
    Lines,
    LineStrip,
    LineLoop,
    Triangles,
    TriangleStrip,
    TriangleFan,
    Quads,
    QuadStrip,
    Polygon,
    LinesAdjacency,
    LineStripAdjacency,
    TrianglesAdjacency,
    TriangleStripAdjacency,
}

/// Topology of the index list an expander emits.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum AssembledTopology {
    Points,
    Lines,
    Triangles,
    LinesAdjacency,
    TrianglesAdjacency,
}

impl Topology {
    /// Number of topologies; sizes the dispatch table's innermost axis.
    pub const COUNT: usize = 14;

    /// Every topology in table order.
    pub const ALL: [Topology; Topology::COUNT] = [
        Topology::Points,
        Topology::Lines,
        Topology::LineStrip,
        Topology::LineLoop,
        Topology::Triangles,
        Topology::TriangleStrip,
        Topology::TriangleFan,
        Topology::Quads,
        Topology::QuadStrip,
        Topology::Polygon,
        Topology::LinesAdjacency,
        Topology::LineStripAdjacency,
        Topology::TrianglesAdjacency,
        Topology::TriangleStripAdjacency,
    ];

    /// Position of this topology in [`Topology::ALL`].
    #[inline]
    pub const fn slot(self) -> usize {
        self as usize
    }

    /// The primitive list this topology is assembled into.
    pub const fn assembled(self) -> AssembledTopology {
        match self {
            Topology::Points => AssembledTopology::Points,
            Topology::Lines | Topology::LineStrip | Topology::LineLoop => AssembledTopology::Lines,
            Topology::Triangles
            | Topology::TriangleStrip
            | Topology::TriangleFan
            | Topology::Quads
            | Topology::QuadStrip
            | Topology::Polygon => AssembledTopology::Triangles,
            Topology::LinesAdjacency | Topology::LineStripAdjacency => {
                AssembledTopology::LinesAdjacency
            }
            Topology::TrianglesAdjacency | Topology::TriangleStripAdjacency => {
                AssembledTopology::TrianglesAdjacency
            }
        }
    }

    /// Indices emitted per step of the expander.
    ///
    /// Quads and quad strips emit two triangles per step, so their group is 6
    /// even though they assemble into a triangle list.
    pub const fn output_group(self) -> u32 {
        match self {
            Topology::Quads | Topology::QuadStrip => 6,
            _ => self.assembled().vertices_per_primitive(),
        }
    }

    /// Whether a restart sentinel may cut this topology's input.
    pub const fn supports_restart(self) -> bool {
        matches!(self, Topology::Quads | Topology::QuadStrip | Topology::Polygon)
    }

    /// Half-open range of input positions a non-restart expansion reads when
    /// emitting `output_count` indices starting at `start`.
    ///
    /// Returns `None` if the window would reach below position 0 or above
    /// `u32::MAX`. An empty expansion reads nothing and yields `start..start`.
    pub fn input_extent(self, start: u32, output_count: u32) -> Option<std::ops::Range<u32>> {
        let prims = u64::from(output_count / self.output_group());
        let s = u64::from(start);
        if prims == 0 {
            return Some(start..start);
        }
        let (low, end) = match self {
            Topology::Points
            | Topology::Lines
            | Topology::Triangles
            | Topology::LinesAdjacency
            | Topology::TrianglesAdjacency => (s, s + u64::from(output_count)),
            Topology::LineStrip => (s, s + prims + 1),
            Topology::LineLoop => (s, s + prims),
            Topology::TriangleStrip | Topology::TriangleFan | Topology::Polygon => {
                (s, s + prims + 2)
            }
            Topology::Quads => (s, s + 4 * prims),
            Topology::QuadStrip => (s, s + 2 * prims + 2),
            Topology::LineStripAdjacency => (s, s + prims + 3),
            Topology::TriangleStripAdjacency => {
                // odd windows reach two positions back and one past the group
                let last = s + 2 * (prims - 1);
                let end = if last % 4 == 0 { last + 6 } else { last + 7 };
                let first_odd = if s % 4 == 0 { s + 2 } else { s };
                let low = if prims > 1 || s % 4 != 0 {
                    first_odd.checked_sub(2)?.min(s)
                } else {
                    s
                };
                (low, end)
            }
        };
        let end = u32::try_from(end).ok()?;
        Some(low as u32..end)
    }

    /// Output indices produced when `count` input vertices, read from
    /// position 0, are assembled without reading past `count`.
    pub const fn converted_count(self, count: u32) -> u32 {
        match self {
            Topology::Points => count,
            Topology::Lines => count / 2 * 2,
            Topology::LineStrip => {
                if count >= 2 {
                    (count - 1).saturating_mul(2)
                } else {
                    0
                }
            }
            Topology::LineLoop => {
                if count >= 2 {
                    count.saturating_mul(2)
                } else {
                    0
                }
            }
            Topology::Triangles => count / 3 * 3,
            Topology::TriangleStrip | Topology::TriangleFan | Topology::Polygon => {
                if count >= 3 {
                    (count - 2).saturating_mul(3)
                } else {
                    0
                }
            }
            Topology::Quads => (count / 4).saturating_mul(6),
            Topology::QuadStrip => {
                if count >= 4 {
                    ((count - 2) / 2).saturating_mul(6)
                } else {
                    0
                }
            }
            Topology::LinesAdjacency => count / 4 * 4,
            Topology::LineStripAdjacency => {
                if count >= 4 {
                    (count - 3).saturating_mul(4)
                } else {
                    0
                }
            }
            Topology::TrianglesAdjacency => count / 6 * 6,
            Topology::TriangleStripAdjacency => {
                if count < 6 {
                    return 0;
                }
                let mut prims = (count - 4) / 2;
                // an odd last triangle reads one past its group
                let last = 2 * (prims - 1);
                if last % 4 != 0 && last + 7 > count {
                    prims -= 1;
                }
                prims.saturating_mul(6)
            }
        }
    }
}

impl AssembledTopology {
    /// Indices per emitted primitive.
    pub const fn vertices_per_primitive(self) -> u32 {
        match self {
            AssembledTopology::Points => 1,
            AssembledTopology::Lines => 2,
            AssembledTopology::Triangles => 3,
            AssembledTopology::LinesAdjacency => 4,
            AssembledTopology::TrianglesAdjacency => 6,
        }
    }
}
