//! Definiciones relacionadas a pasos IPL.
//!
//! Un paso es la unidad mínima de la secuencia de arranque, identificada por
//! el par (major, minor). Este módulo define:
//! - `StepId` y `MinorSelector`: identificación y selección de minors.
//! - `BmcStepAction` y `BmcStepTable`: las únicas acciones ejecutadas
//!   in-process (major 0); el resto se delega a colaboradores externos.
//! - `StepFailure`: fallo reportado por un colaborador.
//! - `StepStatus`: estado reconstruido desde el log de eventos.

mod action;
mod failure;
mod id;
mod status;

pub use action::{BmcStepAction, BmcStepTable};
pub use failure::StepFailure;
pub use id::{MinorSelector, StepId};
pub use status::StepStatus;
