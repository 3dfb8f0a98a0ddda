//! Draw planning: what a driver front end needs to know before it allocates
//! the output buffer for a translated or generated draw.

use serde::{Deserialize, Serialize};

use crate::dispatch::GenerationRequest;
use crate::indices::width::{IndexWidth, InputWidth, OutputWidth};
use crate::primitive::provoking::ProvokingVertex;
use crate::primitive::topology::{AssembledTopology, Topology};

/// Largest generated index that still fits a 16-bit buffer while leaving
/// `0xffff` free for use as a restart value.
const MAX_GENERATED_U16: u64 = 0xfffe;

/// Output shape of a draw after expansion.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DrawPlan {
    pub assembled: AssembledTopology,
    pub output_width: OutputWidth,
    pub output_count: u32,
}

impl DrawPlan {
    /// Bytes needed for the output buffer.
    pub fn output_bytes(&self) -> usize {
        self.output_count as usize * self.output_width.width().bytes()
    }

    /// A translate request that carries out this plan.
    pub fn translate_request(
        &self,
        topology: Topology,
        input: InputWidth,
        start: u32,
        input_count: u32,
        provoking: (ProvokingVertex, ProvokingVertex),
    ) -> GenerationRequest {
        GenerationRequest::translate(topology, input, self.output_width)
            .with_start(start)
            .with_counts(input_count, self.output_count)
            .with_provoking(provoking.0, provoking.1)
    }

    /// A generate request that carries out this plan.
    pub fn generate_request(
        &self,
        topology: Topology,
        start: u32,
        provoking: (ProvokingVertex, ProvokingVertex),
    ) -> GenerationRequest {
        GenerationRequest::generate(topology, self.output_width)
            .with_start(start)
            .with_output_count(self.output_count)
            .with_provoking(provoking.0, provoking.1)
    }
}

/// Plan translating `count` indices of `input` width. 32-bit inputs stay
/// 32-bit; narrower inputs widen to 16-bit.
pub fn plan_translate(topology: Topology, input: InputWidth, count: u32) -> DrawPlan {
    let output_width = match input.width() {
        IndexWidth::U32 => OutputWidth::U32,
        IndexWidth::U8 | IndexWidth::U16 => OutputWidth::U16,
    };
    DrawPlan {
        assembled: topology.assembled(),
        output_width,
        output_count: topology.converted_count(count),
    }
}

/// Plan generating indices for `count` vertices starting at `start`.
pub fn plan_generate(topology: Topology, start: u32, count: u32) -> DrawPlan {
    let output_width = if u64::from(start) + u64::from(count) > MAX_GENERATED_U16 {
        OutputWidth::U32
    } else {
        OutputWidth::U16
    };
    DrawPlan {
        assembled: topology.assembled(),
        output_width,
        output_count: topology.converted_count(count),
    }
}
