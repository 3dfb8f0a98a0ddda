#![cfg_attr(docsrs, feature(doc_cfg))]
//! # index-assembly
//!
//! index-assembly normalizes draw-call index streams into the canonical
//! primitive lists fixed-function assembly stages consume. It either
//! translates an existing index buffer (8-, 16- or 32-bit elements) or
//! generates sequential indices for non-indexed draws, writing 16- or 32-bit
//! output.
//!
//! ## Features
//! - 14 input topologies, from points to triangle strips with adjacency,
//!   assembled into point, line, triangle and adjacency lists
//! - Provoking-vertex conversion between first- and last-vertex conventions
//!   that keeps winding and vertex membership
//! - Primitive restart for quads, quad strips and polygons
//! - A process-wide dispatch table built once and resolved in O(1)
//! - Byte-level entry points and draw planning for driver front ends
//!
//! ## Usage
//!
//! ```rust
//! use index_assembly::prelude::*;
//!
//! let input: [u16; 6] = [0, 1, 2, 3, 4, 5];
//! let mut out = [0u16; 12];
//! let req = GenerationRequest::translate(Topology::QuadStrip, InputWidth::U16, OutputWidth::U16)
//!     .with_counts(6, 12);
//! translate(&req, IndexSlice::U16(&input), IndexSliceMut::U16(&mut out)).unwrap();
//! assert_eq!(out, [0, 1, 3, 0, 3, 2, 2, 3, 5, 2, 5, 4]);
//! ```
//!
//! ## Concurrency
//! Calls are synchronous and re-entrant. The dispatch table is the only
//! shared state; it is built behind a one-time-initialization cell on first
//! use (or by [`initialize`]). With the `rayon` feature,
//! [`parallel::run_batch`] runs independent requests concurrently.

pub mod api;
pub mod debug_invariants;
pub mod dispatch;
pub mod expand;
pub mod index_error;
pub mod indices;
#[cfg(feature = "rayon")]
pub mod parallel;
pub mod plan;
pub mod primitive;

pub use api::{generate, generate_bytes, initialize, run, translate, translate_bytes};
pub use debug_invariants::DebugInvariants;
pub use index_error::IndexError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::api::{generate, generate_bytes, initialize, run, translate, translate_bytes};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::dispatch::{
        DispatchTable, Expander, ExpanderKey, GenerationRequest, Mode, RestartMode, resolve,
    };
    pub use crate::index_error::IndexError;
    pub use crate::indices::{
        IndexSlice, IndexSliceMut, IndexWidth, InputWidth, OutputWidth, input_width, output_width,
    };
    #[cfg(feature = "rayon")]
    pub use crate::parallel::{BatchJob, run_batch};
    pub use crate::plan::{DrawPlan, plan_generate, plan_translate};
    pub use crate::primitive::{AssembledTopology, ProvokingVertex, Topology};
}
