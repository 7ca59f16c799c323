//! Builder para `BootControl`.
//!
//! Configuración explícita e inmutable: el mapa de pasos, la tabla BMC y
//! los colaboradores se entregan al construir, nunca por registro estático.
//! `build()` valida que las piezas obligatorias estén presentes.

use std::sync::Arc;

use crate::collab::{ChipOps, ProcInventory};
use crate::errors::BootError;
use crate::event::EventStore;
use crate::map::BootStepMap;
use crate::step::BmcStepTable;

use super::core::BootControl;

pub struct ControlBuilder<E: EventStore> {
    event_store: E,
    platform: String,
    map: Option<BootStepMap>,
    bmc_steps: BmcStepTable,
    chip_ops: Option<Arc<dyn ChipOps>>,
    inventory: Option<Arc<dyn ProcInventory>>,
}

impl<E: EventStore> ControlBuilder<E> {
    pub fn new(event_store: E) -> Self {
        Self { event_store,
               platform: "unknown".to_string(),
               map: None,
               bmc_steps: BmcStepTable::new(),
               chip_ops: None,
               inventory: None }
    }

    /// Nombre de la plataforma, sólo informativo (va al `IplInitialized`).
    pub fn platform(mut self, name: &str) -> Self {
        self.platform = name.to_string();
        self
    }

    pub fn map(mut self, map: BootStepMap) -> Self {
        self.map = Some(map);
        self
    }

    pub fn bmc_steps(mut self, table: BmcStepTable) -> Self {
        self.bmc_steps = table;
        self
    }

    pub fn chip_ops(mut self, ops: Arc<dyn ChipOps>) -> Self {
        self.chip_ops = Some(ops);
        self
    }

    pub fn inventory(mut self, inventory: Arc<dyn ProcInventory>) -> Self {
        self.inventory = Some(inventory);
        self
    }

    /// Construye el control final. Falla si falta el mapa o algún
    /// colaborador obligatorio.
    pub fn build(self) -> Result<BootControl<E>, BootError> {
        let map = self.map
                      .ok_or_else(|| BootError::Internal("boot step map not configured".into()))?;
        let chip_ops = self.chip_ops
                           .ok_or_else(|| BootError::Internal("chip-ops collaborator not configured".into()))?;
        let inventory = self.inventory
                            .ok_or_else(|| BootError::Internal("proc inventory not configured".into()))?;
        Ok(BootControl::new_with_parts(map,
                                       self.platform,
                                       self.bmc_steps,
                                       chip_ops,
                                       inventory,
                                       self.event_store))
    }
}
