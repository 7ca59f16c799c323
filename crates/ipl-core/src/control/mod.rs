//! Control de pasos de arranque (el despachador).
//!
//! Provee `BootControl`, el único autómata del repositorio: resuelve
//! (major, minor) contra el Boot Step Map, decide el subsistema dueño y lo
//! invoca, con política fail-fast sobre rangos.

pub mod builder;
pub mod core;

pub use builder::ControlBuilder;
pub use core::BootControl;

pub use crate::event::{BootEvent, BootEventKind, EventStore, InMemoryEventStore};
pub use crate::map::{BootStepMap, ExecutorKind};
pub use crate::step::{MinorSelector, StepFailure};

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::collab::{ChipOps, ProcInventory};
    use crate::errors::BootError;
    use crate::map::BootStepMapBuilder;
    use crate::step::{BmcStepAction, BmcStepTable};

    // Chip-ops de ejemplo: registra la secuencia y puede fallar un paso.
    struct RecordingOps {
        calls: Mutex<Vec<(u8, u8, u8)>>,
        fail_on: Option<(u8, u8)>,
    }

    impl RecordingOps {
        fn new(fail_on: Option<(u8, u8)>) -> Self {
            Self { calls: Mutex::new(Vec::new()), fail_on }
        }

        fn sequence(&self) -> Vec<(u8, u8, u8)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl ChipOps for RecordingOps {
        fn istep(&self, proc_index: u8, major: u8, minor: u8) -> Result<(), StepFailure> {
            self.calls.lock().unwrap().push((proc_index, major, minor));
            if self.fail_on == Some((major, minor)) {
                return Err(StepFailure::rc(0x0F, "istep rejected"));
            }
            Ok(())
        }

        fn enter_mpipl(&self, _proc_index: u8) -> Result<(), StepFailure> {
            Ok(())
        }
    }

    struct OneProc;

    impl ProcInventory for OneProc {
        fn enabled_procs(&self) -> Vec<u8> {
            vec![0]
        }
    }

    struct NoProcs;

    impl ProcInventory for NoProcs {
        fn enabled_procs(&self) -> Vec<u8> {
            vec![]
        }
    }

    // Acción BMC de ejemplo que cuenta sus ejecuciones.
    struct CountingAction(Arc<Mutex<u32>>);

    impl BmcStepAction for CountingAction {
        fn name(&self) -> &str { "counting" }
        fn execute(&self) -> Result<(), StepFailure> {
            *self.0.lock().unwrap() += 1;
            Ok(())
        }
    }

    fn small_map() -> BootStepMap {
        BootStepMapBuilder::new().major(0, "poweron", ExecutorKind::Bmc)
                                 .minor(0, "power_on_chassis")
                                 .major(2, "sbe_config", ExecutorKind::Sbe)
                                 .minor(1, "sbe_config_update")
                                 .minor(2, "sbe_check_master")
                                 .major(6, "hb_discover", ExecutorKind::Hostboot)
                                 .minor(1, "host_discover_targets")
                                 .build()
    }

    fn control_with(ops: Arc<RecordingOps>,
                    counter: Arc<Mutex<u32>>)
                    -> BootControl<InMemoryEventStore> {
        BootControl::builder(InMemoryEventStore::default())
            .platform("test")
            .map(small_map())
            .bmc_steps(BmcStepTable::new().register(0, Box::new(CountingAction(counter))))
            .chip_ops(ops)
            .inventory(Arc::new(OneProc))
            .build()
            .expect("control construible")
    }

    #[test]
    fn full_range_runs_every_executor_kind() {
        let ops = Arc::new(RecordingOps::new(None));
        let counter = Arc::new(Mutex::new(0));
        let mut control = control_with(ops.clone(), counter.clone());

        control.execute_range(0, 6).expect("rango completo");

        // BMC in-process, SBE delegado, Hostboot no-op.
        assert_eq!(*counter.lock().unwrap(), 1);
        assert_eq!(ops.sequence(), vec![(0, 2, 1), (0, 2, 2)]);

        let events = control.events();
        assert!(events.iter().any(|e| matches!(e.kind, BootEventKind::IplCompleted { .. })));
    }

    #[test]
    fn invalid_major_fails_without_dispatch() {
        let ops = Arc::new(RecordingOps::new(None));
        let counter = Arc::new(Mutex::new(0));
        let mut control = control_with(ops.clone(), counter.clone());

        let err = control.execute_step(99, MinorSelector::All).unwrap_err();
        assert_eq!(err, BootError::InvalidMajorStep(99));
        assert!(ops.sequence().is_empty());
        assert_eq!(*counter.lock().unwrap(), 0);
    }

    #[test]
    fn invalid_minor_fails_without_dispatch() {
        let ops = Arc::new(RecordingOps::new(None));
        let counter = Arc::new(Mutex::new(0));
        let mut control = control_with(ops.clone(), counter.clone());

        let err = control.execute_step(2, MinorSelector::Specific(9)).unwrap_err();
        assert_eq!(err, BootError::InvalidMinorStep { major: 2, minor: 9 });
        assert!(ops.sequence().is_empty());
    }

    #[test]
    fn missing_bmc_action_is_map_inconsistency() {
        let map = BootStepMapBuilder::new().major(0, "poweron", ExecutorKind::Bmc)
                                           .minor(7, "unwired")
                                           .build();
        let mut control = BootControl::builder(InMemoryEventStore::default())
            .platform("test")
            .map(map)
            .bmc_steps(BmcStepTable::new())
            .chip_ops(Arc::new(RecordingOps::new(None)))
            .inventory(Arc::new(OneProc))
            .build()
            .expect("control construible");

        let err = control.execute_step(0, MinorSelector::Specific(7)).unwrap_err();
        assert_eq!(err, BootError::MapInconsistency(7));
    }

    #[test]
    fn sbe_step_without_enabled_target_fails() {
        let map = small_map();
        let mut control = BootControl::builder(InMemoryEventStore::default())
            .platform("test")
            .map(map)
            .bmc_steps(BmcStepTable::new())
            .chip_ops(Arc::new(RecordingOps::new(None)))
            .inventory(Arc::new(NoProcs))
            .build()
            .expect("control construible");

        let err = control.execute_step(2, MinorSelector::Specific(1)).unwrap_err();
        assert!(matches!(err, BootError::StepExecution { major: 2, minor: 1, .. }));
    }

    #[test]
    fn resolve_is_idempotent() {
        let ops = Arc::new(RecordingOps::new(None));
        let counter = Arc::new(Mutex::new(0));
        let control = control_with(ops, counter);

        let first = control.resolve(2, 2).expect("resuelve");
        let second = control.resolve(2, 2).expect("resuelve igual");
        assert_eq!(first, second);
        assert_eq!(first, (ExecutorKind::Sbe, "sbe_check_master".to_string()));
    }

    #[test]
    fn begin_attempt_separates_event_logs() {
        let ops = Arc::new(RecordingOps::new(None));
        let counter = Arc::new(Mutex::new(0));
        let mut control = control_with(ops, counter);

        control.execute_step(6, MinorSelector::All).expect("hostboot no-op");
        let first_id = control.ipl_id().expect("intento iniciado");
        let first_events = control.events().len();

        let second_id = control.begin_attempt();
        assert_ne!(first_id, second_id);
        // El intento nuevo arranca sólo con su IplInitialized.
        assert_eq!(control.events().len(), 1);
        assert!(first_events > 1);
    }

    #[test]
    fn step_failure_emits_step_failed_event() {
        let ops = Arc::new(RecordingOps::new(Some((2, 2))));
        let counter = Arc::new(Mutex::new(0));
        let mut control = control_with(ops, counter);

        let err = control.execute_range(0, 6).unwrap_err();
        assert!(matches!(err, BootError::StepExecution { major: 2, minor: 2, rc: 0x0F, .. }));

        let events = control.events();
        assert!(events.iter().any(|e| matches!(&e.kind,
                BootEventKind::StepFailed { major: 2, minor: 2, .. })));
        assert!(!events.iter().any(|e| matches!(e.kind, BootEventKind::IplCompleted { .. })));
    }
}
