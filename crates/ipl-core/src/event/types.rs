//! Tipos de evento de un intento de IPL.
//!
//! Rol:
//! - Cada intento (identificado por un `Uuid`) emite eventos a un
//!   `EventStore` append-only mientras el despachador avanza.
//! - El log permite reconstruir el resumen post-mortem (`history`) sin que
//!   el despachador acumule estado mutable propio.
//! - `BootEventKind` es el contrato observable y estable del control.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::BootError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BootEventKind {
    /// Primer evento de un intento: identifica la plataforma y el hash de la
    /// tabla que va a ejecutarse. Invariante: precede a todo StepStarted.
    IplInitialized { platform: String, map_hash: String, step_count: usize },
    /// Un paso comenzó a despacharse. No implica éxito.
    StepStarted { major: u8, minor: u8, label: String },
    /// Un paso terminó correctamente.
    StepFinished { major: u8, minor: u8, label: String },
    /// Un paso terminó con error terminal. El intento no continúa
    /// (abort-on-first-failure).
    StepFailed { major: u8, minor: u8, error: BootError },
    /// Cierre de un intento que ejecutó todo lo solicitado.
    IplCompleted { steps_run: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootEvent {
    pub seq: u64, // asignado por el EventStore (orden de append)
    pub ipl_id: Uuid,
    pub kind: BootEventKind,
    pub ts: DateTime<Utc>, // metadato, no participa en ningún hash
}
