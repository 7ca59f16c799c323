//! Modelo de target de procesador alcanzable por el bus sideband (FSI).

use serde::{Deserialize, Serialize};

/// Estado de probe de un target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeStatus {
    Enabled,
    Disabled,
    Unknown,
}

/// Un procesador del sistema, identificado por índice de descubrimiento.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcTarget {
    pub index: u8,
    /// Ruta del dispositivo en el árbol FSI (informativa).
    pub fsi_path: String,
    pub probe: ProbeStatus,
}

impl ProcTarget {
    pub fn new(index: u8, fsi_path: impl Into<String>, probe: ProbeStatus) -> Self {
        Self { index, fsi_path: fsi_path.into(), probe }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self.probe, ProbeStatus::Enabled)
    }
}

/// Primer target habilitado: el master autoritativo para la ejecución de
/// pasos (convencionalmente el índice 0).
pub fn master_candidate(targets: &[ProcTarget]) -> Option<&ProcTarget> {
    targets.iter().find(|t| t.is_enabled())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn master_is_first_enabled() {
        let targets = vec![ProcTarget::new(0, "fsi0", ProbeStatus::Disabled),
                           ProcTarget::new(1, "fsi1", ProbeStatus::Enabled),
                           ProcTarget::new(2, "fsi2", ProbeStatus::Enabled)];
        assert_eq!(master_candidate(&targets).map(|t| t.index), Some(1));
    }

    #[test]
    fn no_master_when_all_disabled() {
        let targets = vec![ProcTarget::new(0, "fsi0", ProbeStatus::Disabled),
                           ProcTarget::new(1, "fsi1", ProbeStatus::Unknown)];
        assert!(master_candidate(&targets).is_none());
    }
}
