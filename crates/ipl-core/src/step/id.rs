//! Identificadores de paso (major.minor) y selección de minors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identificador de un paso IPL: par (major, minor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepId {
    pub major: u8,
    pub minor: u8,
}

impl StepId {
    pub fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Selección de minors al despachar un major.
///
/// Variante explícita en lugar del sentinel numérico `0xFF` del front end
/// legado: `All` y un minor literal 255 dejan de ser ambiguos en la API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinorSelector {
    /// Un minor concreto bajo el major solicitado.
    Specific(u8),
    /// Todos los minors del major, en orden ascendente.
    All,
}
