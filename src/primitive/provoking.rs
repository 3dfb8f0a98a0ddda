//! Provoking-vertex conventions and the permutations that move a primitive
//! between them.
//!
//! Every helper here is a pure permutation of its arguments: the set of
//! referenced vertices never changes, and for triangles the cyclic order (and
//! therefore the winding) is kept. Only which slot carries the provoking
//! vertex moves.

use serde::{Deserialize, Serialize};

/// Which vertex of a primitive supplies flat-shaded attributes.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum ProvokingVertex {
    #[default]
    First,
    Last,
}

impl ProvokingVertex {
    pub const COUNT: usize = 2;
    pub const ALL: [ProvokingVertex; ProvokingVertex::COUNT] =
        [ProvokingVertex::First, ProvokingVertex::Last];

    #[inline]
    pub const fn slot(self) -> usize {
        self as usize
    }
}

/// Conversion between an input and an output provoking convention.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Reorder {
    pub from: ProvokingVertex,
    pub to: ProvokingVertex,
}

impl Reorder {
    #[inline]
    pub const fn new(from: ProvokingVertex, to: ProvokingVertex) -> Self {
        Self { from, to }
    }

    /// True when input and output conventions agree.
    #[inline]
    pub const fn is_identity(self) -> bool {
        self.from as u8 == self.to as u8
    }

    /// Two-vertex primitive: swap ends when conventions differ.
    #[inline]
    pub fn line<T>(self, v0: T, v1: T) -> [T; 2] {
        if self.is_identity() { [v0, v1] } else { [v1, v0] }
    }

    /// Triangle: rotate so the provoking vertex lands in the other end slot.
    ///
    /// First→Last yields (v1, v2, v0); Last→First yields (v2, v0, v1). Both are
    /// rotations, so winding is preserved.
    #[inline]
    pub fn triangle<T>(self, v0: T, v1: T, v2: T) -> [T; 3] {
        match (self.from, self.to) {
            (ProvokingVertex::First, ProvokingVertex::Last) => [v1, v2, v0],
            (ProvokingVertex::Last, ProvokingVertex::First) => [v2, v0, v1],
            _ => [v0, v1, v2],
        }
    }

    /// Line with adjacency: reverse end to end when conventions differ.
    #[inline]
    pub fn line_adjacency<T>(self, v: [T; 4]) -> [T; 4] {
        if self.is_identity() {
            v
        } else {
            let [v0, v1, v2, v3] = v;
            [v3, v2, v1, v0]
        }
    }

    /// Triangle with adjacency: rotate by two slots when conventions differ.
    ///
    /// Corners sit at even slots and neighbours at odd slots; a two-slot
    /// rotation keeps that split.
    #[inline]
    pub fn triangle_adjacency<T>(self, v: [T; 6]) -> [T; 6] {
        if self.is_identity() {
            v
        } else {
            let [v0, v1, v2, v3, v4, v5] = v;
            [v4, v5, v0, v1, v2, v3]
        }
    }
}

/// Split a quad into two triangles sharing one edge, choosing the diagonal
/// so the input convention's provoking vertex stays the provoking vertex of
/// both halves.
///
/// Last-provoking input: (v0,v1,v3),(v1,v2,v3). First-provoking input:
/// (v0,v1,v2),(v0,v2,v3). Each half then goes through [`Reorder::triangle`].
#[inline]
pub fn split_quad<T: Copy>(reorder: Reorder, v0: T, v1: T, v2: T, v3: T) -> [[T; 3]; 2] {
    match reorder.from {
        ProvokingVertex::Last => [
            reorder.triangle(v0, v1, v3),
            reorder.triangle(v1, v2, v3),
        ],
        ProvokingVertex::First => [
            reorder.triangle(v0, v1, v2),
            reorder.triangle(v0, v2, v3),
        ],
    }
}
