use serde::{Deserialize, Serialize};

/// Fallo reportado por un colaborador (acción BMC o chip-op).
///
/// Equivale al código de retorno no-cero de las librerías de procedimientos;
/// el despachador lo convierte en `BootError::StepExecution` en la frontera,
/// añadiendo las coordenadas (major, minor) del paso.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepFailure {
    pub rc: i32,
    pub msg: String,
}

impl StepFailure {
    pub fn rc(rc: i32, msg: impl Into<String>) -> Self {
        Self { rc, msg: msg.into() }
    }
}
