//! Reconstrucción de un resumen de intento a partir del log de eventos.
//!
//! Replay lineal: consume eventos en orden y actualiza un registro por paso.
//! No almacena nada que el log no contenga; sirve para el análisis
//! post-mortem de arranques fallidos.

use crate::errors::BootError;
use crate::event::{BootEvent, BootEventKind};
use crate::step::{StepId, StepStatus};

/// Registro de un paso observado en el log.
#[derive(Debug, Clone)]
pub struct StepRecord {
    pub step: StepId,
    pub label: String,
    pub status: StepStatus,
    pub error: Option<BootError>,
}

/// Resumen de un intento de IPL.
#[derive(Debug, Clone, Default)]
pub struct IplSummary {
    pub platform: Option<String>,
    pub map_hash: Option<String>,
    pub steps: Vec<StepRecord>,
    pub completed: bool,
}

impl IplSummary {
    pub fn replay(events: &[BootEvent]) -> Self {
        let mut summary = IplSummary::default();
        for ev in events {
            match &ev.kind {
                BootEventKind::IplInitialized { platform, map_hash, .. } => {
                    summary.platform = Some(platform.clone());
                    summary.map_hash = Some(map_hash.clone());
                }
                BootEventKind::StepStarted { major, minor, label } => {
                    summary.steps.push(StepRecord { step: StepId::new(*major, *minor),
                                                    label: label.clone(),
                                                    status: StepStatus::Running,
                                                    error: None });
                }
                BootEventKind::StepFinished { major, minor, .. } => {
                    if let Some(rec) = summary.find_running(*major, *minor) {
                        rec.status = StepStatus::FinishedOk;
                    }
                }
                BootEventKind::StepFailed { major, minor, error } => {
                    if let Some(rec) = summary.find_running(*major, *minor) {
                        rec.status = StepStatus::Failed;
                        rec.error = Some(error.clone());
                    }
                }
                BootEventKind::IplCompleted { .. } => summary.completed = true,
            }
        }
        summary
    }

    // Último registro del paso (un mismo paso puede reintentarse en
    // intentos encadenados; gana la aparición más reciente).
    fn find_running(&mut self, major: u8, minor: u8) -> Option<&mut StepRecord> {
        self.steps
            .iter_mut()
            .rev()
            .find(|r| r.step.major == major && r.step.minor == minor)
    }

    /// Primer paso fallido, si lo hay.
    pub fn failed_step(&self) -> Option<&StepRecord> {
        self.steps.iter().find(|r| r.status == StepStatus::Failed)
    }
}
