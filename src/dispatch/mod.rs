//! Dispatch table: maps a request's (mode, widths, conventions, restart,
//! topology) tuple to its expander by direct array lookup.
//!
//! The table is built once per process behind a [`OnceCell`]; concurrent
//! first callers block on the single build and every caller sees the same
//! immutable table afterwards.

pub mod request;

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::OnceCell;

use crate::debug_invariants::DebugInvariants;
use crate::expand::{Indexed, Sequential, Window, expand};
use crate::index_error::IndexError;
use crate::indices::slice::{IndexSlice, IndexSliceMut};
use crate::indices::width::{InIndex, InputWidth, OutIndex, OutputWidth};
use crate::primitive::provoking::{ProvokingVertex, Reorder};
use crate::primitive::topology::Topology;

pub use request::{GenerationRequest, Mode, RestartMode};

/// The lookup key of one table entry.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ExpanderKey {
    pub mode: Mode,
    pub output_width: OutputWidth,
    pub provoking_in: ProvokingVertex,
    pub provoking_out: ProvokingVertex,
    pub restart_mode: RestartMode,
    pub topology: Topology,
}

impl ExpanderKey {
    #[inline]
    pub fn reorder(&self) -> Reorder {
        Reorder::new(self.provoking_in, self.provoking_out)
    }
}

impl From<&GenerationRequest> for ExpanderKey {
    fn from(req: &GenerationRequest) -> Self {
        Self {
            mode: req.mode,
            output_width: req.output_width,
            provoking_in: req.provoking_in,
            provoking_out: req.provoking_out,
            restart_mode: req.restart_mode,
            topology: req.topology,
        }
    }
}

type TranslateKernel =
    fn(&ExpanderKey, IndexSlice<'_>, &Window, u32, IndexSliceMut<'_>) -> Result<(), IndexError>;
type GenerateKernel = fn(&ExpanderKey, &Window, IndexSliceMut<'_>) -> Result<(), IndexError>;

#[derive(Clone, Copy)]
enum Kernel {
    Translate(TranslateKernel),
    Generate(GenerateKernel),
}

/// A resolved expander: its key plus the kernel monomorphized for the key's
/// input and output element types.
#[derive(Clone, Copy)]
pub struct Expander {
    key: ExpanderKey,
    kernel: Kernel,
}

impl fmt::Debug for Expander {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expander").field("key", &self.key).finish()
    }
}

impl Expander {
    #[inline]
    pub fn key(&self) -> &ExpanderKey {
        &self.key
    }

    /// Run a translate expander. The window must already have been validated
    /// against the buffers; buffer element widths are checked here.
    pub fn translate(
        &self,
        input: IndexSlice<'_>,
        window: &Window,
        restart_sentinel: u32,
        output: IndexSliceMut<'_>,
    ) -> Result<(), IndexError> {
        match self.kernel {
            Kernel::Translate(k) => k(&self.key, input, window, restart_sentinel, output),
            Kernel::Generate(_) => Err(IndexError::UnsupportedCombination(
                "translate on a generate expander",
            )),
        }
    }

    /// Run a generate expander.
    pub fn generate(&self, window: &Window, output: IndexSliceMut<'_>) -> Result<(), IndexError> {
        match self.kernel {
            Kernel::Generate(k) => k(&self.key, window, output),
            Kernel::Translate(_) => Err(IndexError::UnsupportedCombination(
                "generate on a translate expander",
            )),
        }
    }
}

fn typed_input<I: InIndex>(input: IndexSlice<'_>) -> Result<&[I], IndexError> {
    let actual = input.width().width();
    I::view(input).ok_or(IndexError::WidthMismatch {
        role: "input",
        expected: I::WIDTH.bytes(),
        actual: actual.bytes(),
    })
}

fn typed_output<O: OutIndex>(output: IndexSliceMut<'_>) -> Result<&mut [O], IndexError> {
    let actual = output.width().width();
    O::view_mut(output).ok_or(IndexError::WidthMismatch {
        role: "output",
        expected: O::WIDTH.width().bytes(),
        actual: actual.bytes(),
    })
}

fn translate_kernel<I: InIndex, O: OutIndex>(
    key: &ExpanderKey,
    input: IndexSlice<'_>,
    window: &Window,
    restart_sentinel: u32,
    output: IndexSliceMut<'_>,
) -> Result<(), IndexError> {
    let input = typed_input::<I>(input)?;
    let output = typed_output::<O>(output)?;
    let restart = key.restart_mode.is_enabled().then_some(restart_sentinel);
    expand(key.topology, key.reorder(), restart, Indexed(input), window, output);
    Ok(())
}

fn generate_kernel<O: OutIndex>(
    key: &ExpanderKey,
    window: &Window,
    output: IndexSliceMut<'_>,
) -> Result<(), IndexError> {
    let output = typed_output::<O>(output)?;
    expand(key.topology, key.reorder(), None, Sequential, window, output);
    Ok(())
}

fn translate_kernel_for(input: InputWidth, output: OutputWidth) -> TranslateKernel {
    use crate::indices::width::IndexWidth;
    match (input.width(), output) {
        (IndexWidth::U8, OutputWidth::U16) => translate_kernel::<u8, u16>,
        (IndexWidth::U8, OutputWidth::U32) => translate_kernel::<u8, u32>,
        (IndexWidth::U16, OutputWidth::U16) => translate_kernel::<u16, u16>,
        (IndexWidth::U16, OutputWidth::U32) => translate_kernel::<u16, u32>,
        (IndexWidth::U32, OutputWidth::U16) => translate_kernel::<u32, u16>,
        (IndexWidth::U32, OutputWidth::U32) => translate_kernel::<u32, u32>,
    }
}

fn generate_kernel_for(output: OutputWidth) -> GenerateKernel {
    match output {
        OutputWidth::U16 => generate_kernel::<u16>,
        OutputWidth::U32 => generate_kernel::<u32>,
    }
}

const PV: usize = ProvokingVertex::COUNT;
const PRIMS: usize = Topology::COUNT;

type ConventionSlots<T> = [[T; PV]; PV];
type TranslateSlots =
    [[ConventionSlots<[[Option<Expander>; PRIMS]; RestartMode::COUNT]>; OutputWidth::COUNT];
        InputWidth::COUNT];
type GenerateSlots = [ConventionSlots<[Option<Expander>; PRIMS]>; OutputWidth::COUNT];

/// Every registered expander, indexed by key components.
pub struct DispatchTable {
    translate: TranslateSlots,
    generate: GenerateSlots,
}

static_assertions::assert_impl_all!(DispatchTable: Send, Sync);
static_assertions::assert_impl_all!(Expander: Send, Sync, Copy);

static TABLE: OnceCell<DispatchTable> = OnceCell::new();
static BUILDS: AtomicUsize = AtomicUsize::new(0);

impl DispatchTable {
    fn build() -> Self {
        BUILDS.fetch_add(1, Ordering::SeqCst);
        let mut table = DispatchTable {
            translate: [[[[[[None; PRIMS]; RestartMode::COUNT]; PV]; PV]; OutputWidth::COUNT];
                InputWidth::COUNT],
            generate: [[[[None; PRIMS]; PV]; PV]; OutputWidth::COUNT],
        };
        let mut registered = 0usize;

        for input in InputWidth::ALL {
            for output in OutputWidth::ALL {
                let kernel = translate_kernel_for(input, output);
                for pv_in in ProvokingVertex::ALL {
                    for pv_out in ProvokingVertex::ALL {
                        for restart in RestartMode::ALL {
                            for topology in Topology::ALL {
                                if restart.is_enabled() && !topology.supports_restart() {
                                    continue;
                                }
                                table.translate[input.slot()][output.slot()][pv_in.slot()]
                                    [pv_out.slot()][restart.slot()][topology.slot()] =
                                    Some(Expander {
                                        key: ExpanderKey {
                                            mode: Mode::Translate(input),
                                            output_width: output,
                                            provoking_in: pv_in,
                                            provoking_out: pv_out,
                                            restart_mode: restart,
                                            topology,
                                        },
                                        kernel: Kernel::Translate(kernel),
                                    });
                                registered += 1;
                            }
                        }
                    }
                }
            }
        }

        for output in OutputWidth::ALL {
            let kernel = generate_kernel_for(output);
            for pv_in in ProvokingVertex::ALL {
                for pv_out in ProvokingVertex::ALL {
                    for topology in Topology::ALL {
                        table.generate[output.slot()][pv_in.slot()][pv_out.slot()]
                            [topology.slot()] = Some(Expander {
                            key: ExpanderKey {
                                mode: Mode::Generate,
                                output_width: output,
                                provoking_in: pv_in,
                                provoking_out: pv_out,
                                restart_mode: RestartMode::Disabled,
                                topology,
                            },
                            kernel: Kernel::Generate(kernel),
                        });
                        registered += 1;
                    }
                }
            }
        }

        log::debug!("index dispatch table built: {registered} expanders registered");
        table.debug_assert_invariants();
        table
    }

    /// Look up the expander for `key`.
    pub fn lookup(&self, key: &ExpanderKey) -> Result<&Expander, IndexError> {
        let slot = match key.mode {
            Mode::Translate(input) => {
                &self.translate[input.slot()][key.output_width.slot()][key.provoking_in.slot()]
                    [key.provoking_out.slot()][key.restart_mode.slot()][key.topology.slot()]
            }
            Mode::Generate => {
                if key.restart_mode.is_enabled() {
                    return Err(IndexError::UnsupportedCombination(
                        "primitive restart requires translate mode",
                    ));
                }
                &self.generate[key.output_width.slot()][key.provoking_in.slot()]
                    [key.provoking_out.slot()][key.topology.slot()]
            }
        };
        slot.as_ref().ok_or(IndexError::UnsupportedCombination(
            "no expander registered for this combination",
        ))
    }

    /// Iterate every registered expander.
    pub fn expanders(&self) -> impl Iterator<Item = &Expander> {
        self.translate
            .iter()
            .flatten()
            .flatten()
            .flatten()
            .flatten()
            .flatten()
            .chain(self.generate.iter().flatten().flatten().flatten())
            .filter_map(Option::as_ref)
    }
}

impl DebugInvariants for DispatchTable {
    fn debug_assert_invariants(&self) {
        if crate::debug_invariants::checks_enabled() {
            if let Err(e) = self.validate_invariants() {
                panic!("[invariants] dispatch table: {e}");
            }
        }
    }

    fn validate_invariants(&self) -> Result<(), IndexError> {
        for input in InputWidth::ALL {
            for output in OutputWidth::ALL {
                for pv_in in ProvokingVertex::ALL {
                    for pv_out in ProvokingVertex::ALL {
                        for restart in RestartMode::ALL {
                            for topology in Topology::ALL {
                                let key = ExpanderKey {
                                    mode: Mode::Translate(input),
                                    output_width: output,
                                    provoking_in: pv_in,
                                    provoking_out: pv_out,
                                    restart_mode: restart,
                                    topology,
                                };
                                let expect = !restart.is_enabled() || topology.supports_restart();
                                check_slot(self.lookup(&key).ok(), &key, expect)?;
                            }
                        }
                    }
                }
            }
        }
        for output in OutputWidth::ALL {
            for pv_in in ProvokingVertex::ALL {
                for pv_out in ProvokingVertex::ALL {
                    for topology in Topology::ALL {
                        let key = ExpanderKey {
                            mode: Mode::Generate,
                            output_width: output,
                            provoking_in: pv_in,
                            provoking_out: pv_out,
                            restart_mode: RestartMode::Disabled,
                            topology,
                        };
                        check_slot(self.lookup(&key).ok(), &key, true)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn check_slot(slot: Option<&Expander>, key: &ExpanderKey, expect: bool) -> Result<(), IndexError> {
    match slot {
        Some(_) if !expect => {
            log::warn!("unexpected expander registered for {key:?}");
            Err(IndexError::UnsupportedCombination(
                "expander registered for an unsupported combination",
            ))
        }
        Some(e) if e.key != *key => Err(IndexError::UnsupportedCombination(
            "expander registered under the wrong key",
        )),
        None if expect => Err(IndexError::UnsupportedCombination(
            "valid combination has no expander",
        )),
        _ => Ok(()),
    }
}

/// The process-wide table, building it on first use.
pub fn table() -> &'static DispatchTable {
    TABLE.get_or_init(DispatchTable::build)
}

/// Number of times the table has been built in this process (0 or 1).
pub fn build_count() -> usize {
    BUILDS.load(Ordering::SeqCst)
}

/// Resolve the expander for `request` without validating its buffers.
pub fn resolve(request: &GenerationRequest) -> Result<&'static Expander, IndexError> {
    if request.restart_mode.is_enabled() && !request.topology.supports_restart() {
        return Err(IndexError::UnsupportedCombination(
            "primitive restart is only supported for quads, quad strips and polygons",
        ));
    }
    table().lookup(&ExpanderKey::from(request))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_every_valid_combination_once() {
        let t = table();
        let translate = t
            .expanders()
            .filter(|e| matches!(e.key().mode, Mode::Translate(_)))
            .count();
        let generate = t.expanders().count() - translate;
        // 3 inputs * 2 outputs * 4 convention pairs * (14 plain + 3 restart)
        assert_eq!(translate, 3 * 2 * 4 * (14 + 3));
        // 2 outputs * 4 convention pairs * 14 topologies
        assert_eq!(generate, 2 * 4 * 14);
        assert!(t.validate_invariants().is_ok());
    }

    #[test]
    fn resolution_is_stable() {
        let req = GenerationRequest::translate(Topology::Polygon, InputWidth::U8, OutputWidth::U32)
            .with_restart(0xFF);
        let a = resolve(&req).unwrap();
        let b = resolve(&req).unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.key().topology, Topology::Polygon);
        assert_eq!(a.key().restart_mode, RestartMode::Enabled);
    }

    #[test]
    fn rejects_unsupported_restart() {
        let lines = GenerationRequest::translate(Topology::Lines, InputWidth::U16, OutputWidth::U16)
            .with_restart(0xFFFF);
        assert!(matches!(
            resolve(&lines),
            Err(IndexError::UnsupportedCombination(_))
        ));

        let mut generated = GenerationRequest::generate(Topology::Quads, OutputWidth::U16);
        generated.restart_mode = RestartMode::Enabled;
        assert!(matches!(
            resolve(&generated),
            Err(IndexError::UnsupportedCombination(_))
        ));
    }

    #[test]
    fn kernels_run_through_the_table() {
        let req = GenerationRequest::generate(Topology::TriangleFan, OutputWidth::U16)
            .with_start(2)
            .with_output_count(6);
        let mut out = [0u16; 6];
        resolve(&req)
            .unwrap()
            .generate(&req.window(), IndexSliceMut::U16(&mut out))
            .unwrap();
        assert_eq!(out, [2, 3, 4, 2, 4, 5]);
    }

    #[test]
    fn kernels_report_mismatched_buffers() {
        let req = GenerationRequest::translate(Topology::Lines, InputWidth::U8, OutputWidth::U32)
            .with_counts(2, 2);
        let expander = resolve(&req).unwrap();
        let input = [1u16, 2];
        let mut out = [0u32; 2];
        let window = req.window();
        assert_eq!(
            expander.translate(IndexSlice::U16(&input), &window, 0, IndexSliceMut::U32(&mut out)),
            Err(IndexError::WidthMismatch {
                role: "input",
                expected: 1,
                actual: 2
            })
        );
        let mut narrow = [0u16; 2];
        let narrow = IndexSliceMut::U16(&mut narrow);
        assert_eq!(
            expander.translate(IndexSlice::U8(&[1, 2]), &window, 0, narrow),
            Err(IndexError::WidthMismatch {
                role: "output",
                expected: 4,
                actual: 2
            })
        );
        assert_eq!(out, [0, 0]);

        let generated = GenerationRequest::generate(Topology::Lines, OutputWidth::U32);
        let generator = resolve(&generated).unwrap();
        assert!(matches!(
            generator.translate(IndexSlice::U8(&[1, 2]), &window, 0, IndexSliceMut::U32(&mut out)),
            Err(IndexError::UnsupportedCombination(_))
        ));
    }
}
