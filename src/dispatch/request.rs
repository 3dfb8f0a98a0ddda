//! Draw requests and the eager validation that runs before any expander.

use serde::{Deserialize, Serialize};

use crate::expand::Window;
use crate::index_error::IndexError;
use crate::indices::slice::{IndexSlice, IndexSliceMut};
use crate::indices::width::{InputWidth, OutputWidth};
use crate::primitive::provoking::{ProvokingVertex, Reorder};
use crate::primitive::topology::Topology;

/// Whether indices are read from a buffer or generated.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Mode {
    /// Read indices of the given width from an input buffer.
    Translate(InputWidth),
    /// Emit sequential indices for a non-indexed draw.
    #[default]
    Generate,
}

/// Primitive-restart handling.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum RestartMode {
    #[default]
    Disabled,
    Enabled,
}

impl RestartMode {
    pub const COUNT: usize = 2;
    pub const ALL: [RestartMode; RestartMode::COUNT] =
        [RestartMode::Disabled, RestartMode::Enabled];

    #[inline]
    pub const fn slot(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn is_enabled(self) -> bool {
        matches!(self, RestartMode::Enabled)
    }
}

/// Everything needed to pick an expander and run it over one draw.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub mode: Mode,
    pub topology: Topology,
    pub output_width: OutputWidth,
    pub provoking_in: ProvokingVertex,
    pub provoking_out: ProvokingVertex,
    pub restart_mode: RestartMode,
    pub restart_sentinel: Option<u32>,
    /// First input position (translate) or first generated value (generate).
    pub start: u32,
    /// Valid indices in the input buffer; only bounds restart scanning.
    pub input_count: u32,
    pub output_count: u32,
}

impl GenerationRequest {
    /// Request that translates an index buffer of `input` width.
    pub fn translate(topology: Topology, input: InputWidth, output: OutputWidth) -> Self {
        Self {
            mode: Mode::Translate(input),
            topology,
            output_width: output,
            ..Default::default()
        }
    }

    /// Request that generates indices for a non-indexed draw.
    pub fn generate(topology: Topology, output: OutputWidth) -> Self {
        Self {
            mode: Mode::Generate,
            topology,
            output_width: output,
            ..Default::default()
        }
    }

    pub fn with_start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    pub fn with_counts(mut self, input_count: u32, output_count: u32) -> Self {
        self.input_count = input_count;
        self.output_count = output_count;
        self
    }

    pub fn with_output_count(mut self, output_count: u32) -> Self {
        self.output_count = output_count;
        self
    }

    pub fn with_provoking(
        mut self,
        provoking_in: ProvokingVertex,
        provoking_out: ProvokingVertex,
    ) -> Self {
        self.provoking_in = provoking_in;
        self.provoking_out = provoking_out;
        self
    }

    /// Enable primitive restart on `sentinel`.
    pub fn with_restart(mut self, sentinel: u32) -> Self {
        self.restart_mode = RestartMode::Enabled;
        self.restart_sentinel = Some(sentinel);
        self
    }

    #[inline]
    pub fn reorder(&self) -> Reorder {
        Reorder::new(self.provoking_in, self.provoking_out)
    }

    #[inline]
    pub fn window(&self) -> Window {
        Window {
            start: self.start,
            input_count: self.input_count,
            output_count: self.output_count,
        }
    }

    /// Checks that depend only on the request itself.
    pub fn validate(&self) -> Result<(), IndexError> {
        if self.restart_mode.is_enabled() {
            if matches!(self.mode, Mode::Generate) {
                return Err(IndexError::UnsupportedCombination(
                    "primitive restart requires translate mode",
                ));
            }
            if !self.topology.supports_restart() {
                return Err(IndexError::UnsupportedCombination(
                    "primitive restart is only supported for quads, quad strips and polygons",
                ));
            }
            if self.restart_sentinel.is_none() {
                return Err(IndexError::UnsupportedCombination(
                    "primitive restart enabled without a sentinel",
                ));
            }
        }

        let group = self.topology.output_group();
        if self.output_count % group != 0 {
            return Err(IndexError::MisalignedOutputCount {
                topology: self.topology,
                count: self.output_count,
                group,
            });
        }

        if !self.restart_mode.is_enabled() {
            self.input_extent()?;
        }
        Ok(())
    }

    fn input_extent(&self) -> Result<std::ops::Range<u32>, IndexError> {
        self.topology
            .input_extent(self.start, self.output_count)
            .ok_or(IndexError::WindowOutOfRange {
                topology: self.topology,
                start: self.start,
                count: self.output_count,
            })
    }

    /// Full validation against the buffers the call will touch.
    pub fn validate_buffers(
        &self,
        input: Option<&IndexSlice<'_>>,
        output: &IndexSliceMut<'_>,
    ) -> Result<(), IndexError> {
        self.validate()?;

        if output.width() != self.output_width {
            return Err(IndexError::WidthMismatch {
                role: "output",
                expected: self.output_width.width().bytes(),
                actual: output.width().width().bytes(),
            });
        }
        if output.len() < self.output_count as usize {
            return Err(IndexError::OutputTooSmall {
                required: self.output_count as usize,
                actual: output.len(),
            });
        }

        match (self.mode, input) {
            (Mode::Generate, _) => Ok(()),
            (Mode::Translate(_), None) => Err(IndexError::InputTooSmall {
                required: self.required_input()? as usize,
                actual: 0,
            }),
            (Mode::Translate(width), Some(input)) => {
                if input.width() != width {
                    return Err(IndexError::WidthMismatch {
                        role: "input",
                        expected: width.width().bytes(),
                        actual: input.width().width().bytes(),
                    });
                }
                let required = self.required_input()? as usize;
                if input.len() < required {
                    return Err(IndexError::InputTooSmall {
                        required,
                        actual: input.len(),
                    });
                }
                Ok(())
            }
        }
    }

    /// Input indices the expansion may read: `input_count` under restart,
    /// otherwise the end of the read window.
    fn required_input(&self) -> Result<u32, IndexError> {
        if self.restart_mode.is_enabled() {
            Ok(self.input_count)
        } else if self.output_count == 0 {
            Ok(0)
        } else {
            Ok(self.input_extent()?.end)
        }
    }
}
