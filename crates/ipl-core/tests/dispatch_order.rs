//! Propiedades de orden y abort del recorrido de rango, observadas a través
//! del chip-ops simulado de ipl-steps.

use std::sync::Arc;

use ipl_core::map::{BootStepMap, BootStepMapBuilder, ExecutorKind};
use ipl_core::{BootControl, BootError, InMemoryEventStore, MinorSelector};
use ipl_steps::sim::{SimChipOps, SimInventory};

// Mapa mínimo {0: [0,1,2], 1: [0]}, todo SBE para que cada despacho quede
// registrado en el chip-ops.
fn two_major_map() -> BootStepMap {
    BootStepMapBuilder::new().major(0, "first", ExecutorKind::Sbe)
                             .minor(0, "a")
                             .minor(1, "b")
                             .minor(2, "c")
                             .major(1, "second", ExecutorKind::Sbe)
                             .minor(0, "d")
                             .build()
}

fn control_over(ops: Arc<SimChipOps>) -> BootControl<InMemoryEventStore> {
    BootControl::builder(InMemoryEventStore::default())
        .platform("test")
        .map(two_major_map())
        .chip_ops(ops)
        .inventory(Arc::new(SimInventory::single_enabled()))
        .build()
        .expect("control construible")
}

#[test]
fn range_walk_is_strictly_ascending() {
    let ops = Arc::new(SimChipOps::new());
    let mut control = control_over(ops.clone());

    control.execute_range(0, 1).expect("rango completo");
    assert_eq!(ops.istep_sequence(), vec![(0, 0), (0, 1), (0, 2), (1, 0)]);
}

#[test]
fn range_aborts_on_first_failure() {
    let ops = Arc::new(SimChipOps::new());
    ops.fail_step(0, 1);
    let mut control = control_over(ops.clone());

    let err = control.execute_range(0, 1).unwrap_err();
    assert!(matches!(err, BootError::StepExecution { major: 0, minor: 1, .. }));

    // (0,2) y (1,0) nunca se intentan.
    assert_eq!(ops.istep_sequence(), vec![(0, 0), (0, 1)]);
}

#[test]
fn inverted_range_is_rejected_before_any_dispatch() {
    let ops = Arc::new(SimChipOps::new());
    let mut control = control_over(ops.clone());

    let err = control.execute_range(1, 0).unwrap_err();
    assert_eq!(err, BootError::InvalidRange { start: 1, end: 0 });
    assert!(ops.istep_sequence().is_empty());
}

#[test]
fn range_with_missing_endpoint_fails_fast() {
    let ops = Arc::new(SimChipOps::new());
    let mut control = control_over(ops.clone());

    let err = control.execute_range(0, 9).unwrap_err();
    assert_eq!(err, BootError::InvalidMajorStep(9));
    assert!(ops.istep_sequence().is_empty());
}

#[test]
fn all_minors_selector_runs_the_whole_major() {
    let ops = Arc::new(SimChipOps::new());
    let mut control = control_over(ops.clone());

    control.execute_step(0, MinorSelector::All).expect("major completo");
    assert_eq!(ops.istep_sequence(), vec![(0, 0), (0, 1), (0, 2)]);
}

#[test]
fn specific_selector_runs_exactly_one_step() {
    let ops = Arc::new(SimChipOps::new());
    let mut control = control_over(ops.clone());

    control.execute_step(1, MinorSelector::Specific(0)).expect("paso único");
    assert_eq!(ops.istep_sequence(), vec![(1, 0)]);
}

#[test]
fn sbe_dispatch_targets_the_master_only() {
    let ops = Arc::new(SimChipOps::new());
    let mut control = BootControl::builder(InMemoryEventStore::default())
        .platform("test")
        .map(two_major_map())
        .chip_ops(ops.clone())
        .inventory(Arc::new(SimInventory::dual_with_disabled()))
        .build()
        .expect("control construible");

    control.execute_step(0, MinorSelector::Specific(0)).expect("paso único");
    // El primer habilitado (proc0) es el único invocado.
    assert_eq!(ops.calls(), vec![(0, 0, 0)]);
}
