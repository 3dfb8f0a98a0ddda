use std::thread;

use index_assembly::dispatch::{build_count, table};
use index_assembly::prelude::*;
use serial_test::serial;

#[test]
#[serial]
fn repeated_resolution_returns_same_expander() {
    initialize();
    let req = GenerationRequest::translate(Topology::QuadStrip, InputWidth::U16, OutputWidth::U32)
        .with_provoking(ProvokingVertex::Last, ProvokingVertex::First)
        .with_restart(0xFFFF);
    let a = resolve(&req).unwrap();
    let b = resolve(&req).unwrap();
    assert!(std::ptr::eq(a, b));
    assert_eq!(a.key().mode, Mode::Translate(InputWidth::U16));
    assert_eq!(build_count(), 1);
}

#[test]
#[serial]
fn table_passes_self_check() {
    let t = table();
    assert!(t.validate_invariants().is_ok());
    t.debug_assert_invariants();
    assert_eq!(t.expanders().count(), 3 * 2 * 4 * 17 + 2 * 4 * 14);
}

#[test]
#[serial]
fn concurrent_calls_do_not_interfere() {
    let input: Vec<u16> = (0..64).collect();
    thread::scope(|s| {
        for k in 0..8u32 {
            let input = &input;
            s.spawn(move || {
                let topology = Topology::ALL[k as usize];
                let req = GenerationRequest::translate(topology, InputWidth::U16, OutputWidth::U16)
                    .with_counts(64, topology.output_group() * 4);
                let mut a = vec![0u16; req.output_count as usize];
                let mut b = vec![0u16; req.output_count as usize];
                for _ in 0..100 {
                    translate(&req, IndexSlice::U16(input), IndexSliceMut::U16(&mut a)).unwrap();
                    translate(&req, IndexSlice::U16(input), IndexSliceMut::U16(&mut b)).unwrap();
                    assert_eq!(a, b);
                }
            });
        }
    });
}
