//! Tipos del Boot Step Map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Subsistema dueño de la ejecución de un major step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutorKind {
    /// El BMC ejecuta el paso in-process (secuenciado de potencia y
    /// preparación previa a que corra lógica del procesador).
    Bmc,
    /// Delegado al firmware en-chip vía el entry point de chip-ops.
    Sbe,
    /// Passthrough reservado al canal Hostboot (aún no cableado).
    Hostboot,
}

/// Entrada de un major step: dueño + tabla minor → etiqueta.
///
/// Invariante: las etiquetas existen sólo para logging; no llevan semántica
/// de control.
#[derive(Debug, Clone)]
pub struct MajorStepEntry {
    pub major: u8,
    pub name: String,
    pub executor: ExecutorKind,
    minors: IndexMap<u8, String>,
}

impl MajorStepEntry {
    pub(crate) fn new(major: u8, name: String, executor: ExecutorKind, minors: IndexMap<u8, String>) -> Self {
        Self { major, name, executor, minors }
    }

    pub fn lookup_minor(&self, minor: u8) -> Option<&str> {
        self.minors.get(&minor).map(|l| l.as_str())
    }

    /// Minors en orden ascendente (el builder ordena al construir).
    pub fn minors(&self) -> impl Iterator<Item = (u8, &str)> {
        self.minors.iter().map(|(m, l)| (*m, l.as_str()))
    }

    pub fn len(&self) -> usize {
        self.minors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minors.is_empty()
    }
}

/// Tabla inmutable del conjunto de la secuencia de arranque.
#[derive(Debug, Clone)]
pub struct BootStepMap {
    entries: IndexMap<u8, MajorStepEntry>,
    /// Hash canónico de la tabla (identifica la variante de plataforma en el
    /// log de eventos).
    pub map_hash: String,
}

impl BootStepMap {
    pub(crate) fn new(entries: IndexMap<u8, MajorStepEntry>, map_hash: String) -> Self {
        Self { entries, map_hash }
    }

    pub fn lookup_major(&self, major: u8) -> Option<&MajorStepEntry> {
        self.entries.get(&major)
    }

    pub fn contains_major(&self, major: u8) -> bool {
        self.entries.contains_key(&major)
    }

    /// Entradas en orden ascendente de major.
    pub fn majors(&self) -> impl Iterator<Item = &MajorStepEntry> {
        self.entries.values()
    }

    pub fn first_major(&self) -> Option<u8> {
        self.entries.keys().next().copied()
    }

    pub fn last_major(&self) -> Option<u8> {
        self.entries.keys().last().copied()
    }

    /// Cantidad total de pasos (minors) de la tabla.
    pub fn step_count(&self) -> usize {
        self.entries.values().map(|e| e.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
