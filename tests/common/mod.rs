#![allow(dead_code)]
use index_assembly::prelude::*;

/// Translate a `u32` index buffer into a fresh `u32` output.
pub fn translate_u32(req: &GenerationRequest, input: &[u32]) -> Result<Vec<u32>, IndexError> {
    let mut out = vec![0u32; req.output_count as usize];
    translate(req, IndexSlice::U32(input), IndexSliceMut::U32(&mut out))?;
    Ok(out)
}

/// Generate into a fresh `u32` output.
pub fn generate_u32(req: &GenerationRequest) -> Result<Vec<u32>, IndexError> {
    let mut out = vec![0u32; req.output_count as usize];
    generate(req, IndexSliceMut::U32(&mut out))?;
    Ok(out)
}

/// Sorted copy, for order-agnostic comparisons.
pub fn sorted(v: &[u32]) -> Vec<u32> {
    let mut v = v.to_vec();
    v.sort_unstable();
    v
}

/// True if `a` is a cyclic rotation of `b`.
pub fn is_rotation(a: &[u32], b: &[u32]) -> bool {
    a.len() == b.len() && (0..a.len()).any(|r| (0..a.len()).all(|k| a[k] == b[(k + r) % a.len()]))
}
