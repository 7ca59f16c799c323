//! IplFlow Rust Library
//!
//! Este crate actúa como paraguas del workspace:
//! - `ipl_core`: despachador (`BootControl`), mapa de pasos, eventos y
//!   errores.
//! - `ipl_targets`: modelo de targets, CFAM y potencia.
//! - `ipl_steps`: acciones BMC, tablas de plataforma y backend simulado.
//!
//! Puede usarse desde `main.rs` (demo) o por otros crates/clientes.

pub use ipl_core::{BootControl, BootError, BootStepMap, ExecutorKind, InMemoryEventStore,
                   IplSummary, MinorSelector, StepId};
pub use ipl_steps::maps::Platform;
pub use ipl_targets::target::{ProbeStatus, ProcTarget};
