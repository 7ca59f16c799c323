//! Builder del `BootStepMap`.
//!
//! Construcción explícita: los builders de plataforma declaran majors y
//! minors y `build()` devuelve la tabla inmutable, ya ordenada y con su hash
//! canónico. No hay registro por efectos de inicialización estática.

use indexmap::IndexMap;
use serde_json::json;

use crate::constants::CONTROL_VERSION;
use crate::hashing::hash_value;
use super::types::{BootStepMap, ExecutorKind, MajorStepEntry};

#[derive(Default)]
pub struct BootStepMapBuilder {
    entries: Vec<PendingMajor>,
}

struct PendingMajor {
    major: u8,
    name: String,
    executor: ExecutorKind,
    minors: Vec<(u8, String)>,
}

impl BootStepMapBuilder {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Abre la declaración de un major step. Los `minor()` siguientes se
    /// acumulan bajo este major hasta el próximo `major()`.
    pub fn major(mut self, major: u8, name: &str, executor: ExecutorKind) -> Self {
        self.entries.push(PendingMajor { major,
                                         name: name.to_string(),
                                         executor,
                                         minors: Vec::new() });
        self
    }

    /// Añade un minor al major abierto. Llamar sin un `major()` previo es un
    /// error de programación del builder de plataforma.
    pub fn minor(mut self, minor: u8, label: &str) -> Self {
        debug_assert!(!self.entries.is_empty(), "minor() requiere un major() previo");
        if let Some(current) = self.entries.last_mut() {
            current.minors.push((minor, label.to_string()));
        }
        self
    }

    /// Ordena majors y minors en forma ascendente, calcula el hash canónico
    /// y devuelve la tabla inmutable.
    pub fn build(mut self) -> BootStepMap {
        self.entries.sort_by_key(|e| e.major);
        for e in &mut self.entries {
            e.minors.sort_by_key(|(m, _)| *m);
        }

        let canonical = json!({
            "control_version": CONTROL_VERSION,
            "majors": self.entries.iter()
                                  .map(|e| json!({
                                      "major": e.major,
                                      "name": e.name,
                                      "executor": format!("{:?}", e.executor),
                                      "minors": e.minors.iter()
                                                        .map(|(m, l)| json!([m, l]))
                                                        .collect::<Vec<_>>(),
                                  }))
                                  .collect::<Vec<_>>(),
        });
        let map_hash = hash_value(&canonical);

        let mut entries: IndexMap<u8, MajorStepEntry> = IndexMap::new();
        for e in self.entries {
            let minors: IndexMap<u8, String> = e.minors.into_iter().collect();
            entries.insert(e.major, MajorStepEntry::new(e.major, e.name, e.executor, minors));
        }
        BootStepMap::new(entries, map_hash)
    }
}
