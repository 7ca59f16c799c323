//! Modelo de alimentación del chasis.

use serde::{Deserialize, Serialize};

use crate::error::TargetError;

/// Estado observable de la alimentación del chasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerState {
    Off,
    TransitioningOn,
    On,
}

/// Control de alimentación del chasis.
///
/// Colaborador externo: la implementación real habla con el power sequencer
/// del sistema. Las consultas de estado son las que la acción de encendido
/// sondea con espera acotada.
pub trait PowerControl {
    fn power_on(&self) -> Result<(), TargetError>;
    fn power_off(&self) -> Result<(), TargetError>;
    fn state(&self) -> Result<PowerState, TargetError>;
}
