//! Seams de colaboración externa del despachador.
//!
//! El despachador nunca toca hardware directamente: los pasos propiedad del
//! SBE se delegan vía `ChipOps` (entry point de chip-ops estilo istep) y la
//! elegibilidad de targets se consulta vía `ProcInventory`. Las
//! implementaciones reales viven fuera de este crate; `ipl-steps` provee
//! implementaciones simuladas para desarrollo y tests.

use crate::step::StepFailure;

/// Entry point de chip-ops hacia el procesador.
pub trait ChipOps {
    /// Ejecuta el istep (major, minor) sobre el target indicado.
    fn istep(&self, proc_index: u8, major: u8, minor: u8) -> Result<(), StepFailure>;

    /// Dispara la entrada a MPIPL (reboot con preservación de memoria) en el
    /// target indicado. Usado por el fan-out de `ipl-steps::mpipl`, no por el
    /// despachador.
    fn enter_mpipl(&self, proc_index: u8) -> Result<(), StepFailure>;
}

/// Enumeración de procesadores con su estado de probe.
pub trait ProcInventory {
    /// Índices de los targets con probe "enabled", en orden de
    /// descubrimiento. El primero es el master autoritativo.
    fn enabled_procs(&self) -> Vec<u8>;
}
