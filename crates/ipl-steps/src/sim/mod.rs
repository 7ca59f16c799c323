//! Colaboradores simulados: backend de desarrollo y tests.
//!
//! Permiten ejercitar el despachador completo sin hardware: control de
//! potencia que transiciona tras N sondeos, un espacio CFAM en memoria y un
//! chip-ops que registra la secuencia de isteps y admite fallos
//! programados. Las implementaciones reales (pdbg/libipl, power sequencer)
//! se inyectan por los mismos seams.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use ipl_core::collab::{ChipOps, ProcInventory};
use ipl_core::step::StepFailure;
use ipl_targets::cfam::{CfamAccess, CfamAddress};
use ipl_targets::error::TargetError;
use ipl_targets::power::{PowerControl, PowerState};
use ipl_targets::target::{ProbeStatus, ProcTarget};

/// Control de potencia simulado: tras `power_on()`, pasa a `On` luego de
/// `polls_until_on` consultas de estado.
pub struct SimPowerControl {
    polls_until_on: u32,
    state: Mutex<PowerInner>,
}

struct PowerInner {
    current: PowerState,
    on_requested: bool,
    polls: u32,
}

impl SimPowerControl {
    pub fn new(polls_until_on: u32) -> Self {
        Self { polls_until_on,
               state: Mutex::new(PowerInner { current: PowerState::Off,
                                              on_requested: false,
                                              polls: 0 }) }
    }

    /// Variante que nunca llega a `On` (para ejercitar el timeout).
    pub fn stuck_off() -> Self {
        Self::new(u32::MAX)
    }
}

impl PowerControl for SimPowerControl {
    fn power_on(&self) -> Result<(), TargetError> {
        let mut inner = self.state.lock().unwrap();
        inner.on_requested = true;
        if self.polls_until_on == 0 {
            inner.current = PowerState::On;
        }
        Ok(())
    }

    fn power_off(&self) -> Result<(), TargetError> {
        let mut inner = self.state.lock().unwrap();
        inner.current = PowerState::Off;
        inner.on_requested = false;
        inner.polls = 0;
        Ok(())
    }

    fn state(&self) -> Result<PowerState, TargetError> {
        let mut inner = self.state.lock().unwrap();
        if inner.on_requested && inner.current != PowerState::On {
            inner.polls += 1;
            inner.current = if inner.polls >= self.polls_until_on {
                PowerState::On
            } else {
                PowerState::TransitioningOn
            };
        }
        Ok(inner.current)
    }
}

/// Acceso CFAM simulado: (target, dirección) → valor, lecturas de registros
/// no escritos devuelven 0.
#[derive(Default)]
pub struct SimCfam {
    regs: Mutex<HashMap<(u8, u32), u32>>,
}

impl SimCfam {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lectura directa para asserts de tests (None si nunca se escribió).
    pub fn read_back(&self, target: u8, addr: CfamAddress) -> Option<u32> {
        self.regs.lock().unwrap().get(&(target, addr.0)).copied()
    }
}

impl CfamAccess for SimCfam {
    fn read_cfam(&self, target: u8, addr: CfamAddress) -> Result<u32, TargetError> {
        Ok(self.regs.lock().unwrap().get(&(target, addr.0)).copied().unwrap_or(0))
    }

    fn write_cfam(&self, target: u8, addr: CfamAddress, value: u32) -> Result<(), TargetError> {
        self.regs.lock().unwrap().insert((target, addr.0), value);
        Ok(())
    }
}

/// Chip-ops simulado: registra la secuencia de isteps y de disparos MPIPL,
/// con fallos programables por paso o por target.
#[derive(Default)]
pub struct SimChipOps {
    calls: Mutex<Vec<(u8, u8, u8)>>,
    fail_on: Mutex<HashSet<(u8, u8)>>,
    mpipl_calls: Mutex<Vec<u8>>,
    fail_mpipl_on: Mutex<HashSet<u8>>,
}

impl SimChipOps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Programa el fallo del istep (major, minor).
    pub fn fail_step(&self, major: u8, minor: u8) {
        self.fail_on.lock().unwrap().insert((major, minor));
    }

    /// Programa el fallo del disparo MPIPL sobre un target.
    pub fn fail_mpipl(&self, proc_index: u8) {
        self.fail_mpipl_on.lock().unwrap().insert(proc_index);
    }

    /// Secuencia completa observada: (proc, major, minor).
    pub fn calls(&self) -> Vec<(u8, u8, u8)> {
        self.calls.lock().unwrap().clone()
    }

    /// Secuencia observada sin el target: (major, minor).
    pub fn istep_sequence(&self) -> Vec<(u8, u8)> {
        self.calls.lock().unwrap().iter().map(|(_, ma, mi)| (*ma, *mi)).collect()
    }

    /// Targets sobre los que se disparó MPIPL, en orden de llegada.
    pub fn mpipl_procs(&self) -> Vec<u8> {
        self.mpipl_calls.lock().unwrap().clone()
    }
}

impl ChipOps for SimChipOps {
    fn istep(&self, proc_index: u8, major: u8, minor: u8) -> Result<(), StepFailure> {
        self.calls.lock().unwrap().push((proc_index, major, minor));
        if self.fail_on.lock().unwrap().contains(&(major, minor)) {
            return Err(StepFailure::rc(0x0F, format!("istep {major}.{minor} rejected by sbe")));
        }
        Ok(())
    }

    fn enter_mpipl(&self, proc_index: u8) -> Result<(), StepFailure> {
        self.mpipl_calls.lock().unwrap().push(proc_index);
        if self.fail_mpipl_on.lock().unwrap().contains(&proc_index) {
            return Err(StepFailure::rc(0x20, format!("mpipl rejected on proc{proc_index}")));
        }
        Ok(())
    }
}

/// Inventario fijo de targets.
pub struct SimInventory {
    targets: Vec<ProcTarget>,
}

impl SimInventory {
    pub fn new(targets: Vec<ProcTarget>) -> Self {
        Self { targets }
    }

    /// Un solo procesador habilitado en el índice 0 (el caso común).
    pub fn single_enabled() -> Self {
        Self::new(vec![ProcTarget::new(0, "/fsi0/proc0", ProbeStatus::Enabled)])
    }

    /// Dos habilitados y uno deshabilitado, para escenarios multi-target.
    pub fn dual_with_disabled() -> Self {
        Self::new(vec![ProcTarget::new(0, "/fsi0/proc0", ProbeStatus::Enabled),
                       ProcTarget::new(1, "/fsi0/proc1", ProbeStatus::Disabled),
                       ProcTarget::new(2, "/fsi0/proc2", ProbeStatus::Enabled)])
    }

    pub fn targets(&self) -> &[ProcTarget] {
        &self.targets
    }
}

impl ProcInventory for SimInventory {
    fn enabled_procs(&self) -> Vec<u8> {
        self.targets.iter().filter(|t| t.is_enabled()).map(|t| t.index).collect()
    }
}
