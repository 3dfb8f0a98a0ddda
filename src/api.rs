//! Public entry points: initialize the engine, translate index buffers and
//! generate indices for non-indexed draws.
//!
//! Every call validates the request and its buffers before resolving an
//! expander, so a rejected call writes nothing.

use crate::dispatch::{self, GenerationRequest, Mode};
use crate::index_error::IndexError;
use crate::indices::slice::{IndexSlice, IndexSliceMut};
use crate::indices::width::{input_width, output_width};

/// Build the dispatch table. Idempotent; later calls return immediately.
pub fn initialize() {
    let table = dispatch::table();
    log::trace!(
        "index engine ready ({} expanders, invariant checks {})",
        table.expanders().count(),
        if crate::debug_invariants::checks_enabled() { "on" } else { "off" }
    );
}

fn rejected<T>(request: &GenerationRequest, err: IndexError) -> Result<T, IndexError> {
    log::warn!("rejected {:?} request for {:?}: {err}", request.mode, request.topology);
    Err(err)
}

/// Translate `input` into `output` according to `request`.
///
/// `request.mode` must be [`Mode::Translate`] with the width of `input`, and
/// `output` must hold at least `request.output_count` indices of
/// `request.output_width`.
pub fn translate(
    request: &GenerationRequest,
    input: IndexSlice<'_>,
    output: IndexSliceMut<'_>,
) -> Result<(), IndexError> {
    if !matches!(request.mode, Mode::Translate(_)) {
        return rejected(
            request,
            IndexError::UnsupportedCombination("translate called with a generate request"),
        );
    }
    if let Err(e) = request.validate_buffers(Some(&input), &output) {
        return rejected(request, e);
    }
    let expander = match dispatch::resolve(request) {
        Ok(e) => e,
        Err(e) => return rejected(request, e),
    };
    log::trace!(
        "translate {:?}: start={} in={} out={}",
        request.topology,
        request.start,
        request.input_count,
        request.output_count
    );
    let sentinel = request.restart_sentinel.unwrap_or(u32::MAX);
    expander
        .translate(input, &request.window(), sentinel, output)
        .or_else(|e| rejected(request, e))
}

/// Generate sequential indices into `output` according to `request`.
pub fn generate(request: &GenerationRequest, output: IndexSliceMut<'_>) -> Result<(), IndexError> {
    if !matches!(request.mode, Mode::Generate) {
        return rejected(
            request,
            IndexError::UnsupportedCombination("generate called with a translate request"),
        );
    }
    if let Err(e) = request.validate_buffers(None, &output) {
        return rejected(request, e);
    }
    let expander = match dispatch::resolve(request) {
        Ok(e) => e,
        Err(e) => return rejected(request, e),
    };
    log::trace!(
        "generate {:?}: start={} out={}",
        request.topology,
        request.start,
        request.output_count
    );
    expander
        .generate(&request.window(), output)
        .or_else(|e| rejected(request, e))
}

/// Run `request` in whichever mode it names.
pub fn run(
    request: &GenerationRequest,
    input: Option<IndexSlice<'_>>,
    output: IndexSliceMut<'_>,
) -> Result<(), IndexError> {
    match (request.mode, input) {
        (Mode::Generate, _) => generate(request, output),
        (Mode::Translate(_), Some(input)) => translate(request, input, output),
        (Mode::Translate(_), None) => rejected(
            request,
            IndexError::InputTooSmall {
                required: request.input_count as usize,
                actual: 0,
            },
        ),
    }
}

/// Translate between raw byte buffers.
///
/// `input_bytes_per_index` and `output_bytes_per_index` are resolved with the
/// size resolvers and must agree with `request`; the byte buffers are viewed
/// in place as typed index slices.
pub fn translate_bytes(
    request: &GenerationRequest,
    input: &[u8],
    input_bytes_per_index: usize,
    output: &mut [u8],
    output_bytes_per_index: usize,
) -> Result<(), IndexError> {
    let in_width = input_width(input_bytes_per_index)?;
    let out_width = output_width(output_bytes_per_index)?;
    let input = IndexSlice::from_bytes(input, in_width)?;
    let output = IndexSliceMut::from_bytes(output, out_width)?;
    translate(request, input, output)
}

/// Generate into a raw byte buffer of `output_bytes_per_index`-wide indices.
pub fn generate_bytes(
    request: &GenerationRequest,
    output: &mut [u8],
    output_bytes_per_index: usize,
) -> Result<(), IndexError> {
    let out_width = output_width(output_bytes_per_index)?;
    let output = IndexSliceMut::from_bytes(output, out_width)?;
    generate(request, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indices::width::{InputWidth, OutputWidth};
    use crate::primitive::topology::Topology;

    #[test]
    fn translate_u8_to_u16() {
        let input: [u8; 4] = [9, 8, 7, 6];
        let mut out = [0u16; 6];
        let req =
            GenerationRequest::translate(Topology::LineStrip, InputWidth::U8, OutputWidth::U16)
                .with_counts(4, 6);
        translate(&req, IndexSlice::U8(&input), IndexSliceMut::U16(&mut out)).unwrap();
        assert_eq!(out, [9, 8, 8, 7, 7, 6]);
    }

    #[test]
    fn rejected_call_leaves_output_untouched() {
        let input: [u32; 3] = [1, 2, 3];
        let mut out = [0xAAAAu16; 6];
        let req =
            GenerationRequest::translate(Topology::Triangles, InputWidth::U32, OutputWidth::U16)
                .with_counts(3, 6);
        let err = translate(&req, IndexSlice::U32(&input), IndexSliceMut::U16(&mut out));
        assert!(matches!(err, Err(IndexError::InputTooSmall { required: 6, actual: 3 })));
        assert_eq!(out, [0xAAAA; 6]);
    }

    #[test]
    fn mode_must_match_entry_point() {
        let mut out = [0u16; 3];
        let req =
            GenerationRequest::translate(Topology::Triangles, InputWidth::U16, OutputWidth::U16)
                .with_output_count(3);
        assert!(matches!(
            generate(&req, IndexSliceMut::U16(&mut out)),
            Err(IndexError::UnsupportedCombination(_))
        ));
        assert!(run(&req, None, IndexSliceMut::U16(&mut out)).is_err());
    }

    #[test]
    fn byte_entry_points_resolve_widths() {
        let input: [u16; 4] = [3, 4, 5, 6];
        let mut out = [0u32; 6];
        let req = GenerationRequest::translate(Topology::Quads, InputWidth::U16, OutputWidth::U32)
            .with_counts(4, 6);
        translate_bytes(
            &req,
            bytemuck::cast_slice(&input),
            2,
            bytemuck::cast_slice_mut(&mut out),
            4,
        )
        .unwrap();
        assert_eq!(out, [3, 4, 5, 3, 5, 6]);

        let odd = translate_bytes(
            &req,
            bytemuck::cast_slice(&input),
            3,
            bytemuck::cast_slice_mut(&mut out),
            4,
        );
        assert!(matches!(odd, Err(IndexError::InvalidWidth { bytes: 3, .. })));
        assert!(matches!(
            generate_bytes(&req, bytemuck::cast_slice_mut(&mut out), 1),
            Err(IndexError::InvalidWidth { bytes: 1, .. })
        ));
    }

    #[test]
    fn generate_into_bytes() {
        let mut out = [0u16; 4];
        let req = GenerationRequest::generate(Topology::Lines, OutputWidth::U16)
            .with_start(10)
            .with_output_count(4);
        generate_bytes(&req, bytemuck::cast_slice_mut(&mut out), 2).unwrap();
        assert_eq!(out, [10, 11, 12, 13]);
    }
}
