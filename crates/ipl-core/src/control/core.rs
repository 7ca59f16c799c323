//! Implementación del despachador `BootControl`.

use std::sync::Arc;

use log::{debug, error, info};
use uuid::Uuid;

use crate::collab::{ChipOps, ProcInventory};
use crate::errors::BootError;
use crate::event::{BootEvent, BootEventKind, EventStore};
use crate::history::IplSummary;
use crate::map::{BootStepMap, ExecutorKind, MajorStepEntry};
use crate::step::{BmcStepTable, MinorSelector};

use super::builder::ControlBuilder;

/// Despachador de pasos de arranque.
///
/// Resuelve (major, minor) contra el Boot Step Map, decide el subsistema
/// dueño (BMC / SBE / Hostboot) y lo invoca. Sin estado de control entre
/// invocaciones: el log de eventos es observabilidad, no memoria del
/// autómata. Determinista dado el mismo mapa y el mismo estado de los
/// colaboradores.
pub struct BootControl<E: EventStore> {
    map: BootStepMap,
    platform: String,
    bmc_steps: BmcStepTable,
    chip_ops: Arc<dyn ChipOps>,
    inventory: Arc<dyn ProcInventory>,
    event_store: E,
    ipl_id: Option<Uuid>,
}

impl<E: EventStore> BootControl<E> {
    /// Crea un nuevo builder para configurar el control.
    #[inline]
    pub fn builder(event_store: E) -> ControlBuilder<E> {
        ControlBuilder::new(event_store)
    }

    pub(crate) fn new_with_parts(map: BootStepMap,
                                 platform: String,
                                 bmc_steps: BmcStepTable,
                                 chip_ops: Arc<dyn ChipOps>,
                                 inventory: Arc<dyn ProcInventory>,
                                 event_store: E)
                                 -> Self {
        Self { map,
               platform,
               bmc_steps,
               chip_ops,
               inventory,
               event_store,
               ipl_id: None }
    }

    /// Id del intento actual; se crea perezosamente en el primer despacho y
    /// emite el `IplInitialized` correspondiente.
    fn ensure_ipl_id(&mut self) -> Uuid {
        if self.ipl_id.is_none() {
            let id = Uuid::new_v4();
            self.ipl_id = Some(id);
            self.event_store
                .append_kind(id,
                             BootEventKind::IplInitialized { platform: self.platform.clone(),
                                                             map_hash: self.map.map_hash.clone(),
                                                             step_count: self.map.step_count() });
        }
        self.ipl_id.unwrap()
    }

    /// Fuerza un intento nuevo (id + IplInitialized frescos). Útil cuando un
    /// mismo proceso encadena más de una operación.
    pub fn begin_attempt(&mut self) -> Uuid {
        self.ipl_id = None;
        self.ensure_ipl_id()
    }

    pub fn ipl_id(&self) -> Option<Uuid> {
        self.ipl_id
    }

    pub fn map(&self) -> &BootStepMap {
        &self.map
    }

    /// Eventos del intento actual (vacío si aún no se despachó nada).
    pub fn events(&self) -> Vec<BootEvent> {
        self.ipl_id
            .map(|id| self.event_store.list(id))
            .unwrap_or_default()
    }

    /// Resumen post-mortem del intento actual (replay del log).
    pub fn summary(&self) -> IplSummary {
        IplSummary::replay(&self.events())
    }

    /// Resolución pura, sin efectos: (dueño, etiqueta) de un paso concreto.
    pub fn resolve(&self, major: u8, minor: u8) -> Result<(ExecutorKind, String), BootError> {
        let entry = self.map
                        .lookup_major(major)
                        .ok_or(BootError::InvalidMajorStep(major))?;
        let label = entry.lookup_minor(minor)
                         .ok_or(BootError::InvalidMinorStep { major, minor })?;
        Ok((entry.executor, label.to_string()))
    }

    /// Ejecuta exactamente un paso, o todos los minors de un major cuando el
    /// selector es `All` (orden ascendente, abortando en el primer fallo).
    pub fn execute_step(&mut self, major: u8, minor: MinorSelector) -> Result<(), BootError> {
        match minor {
            MinorSelector::Specific(m) => {
                let (executor, label) = self.resolve(major, m)?;
                self.dispatch_one(executor, major, m, &label)
            }
            MinorSelector::All => {
                let entry = self.map
                                .lookup_major(major)
                                .cloned()
                                .ok_or(BootError::InvalidMajorStep(major))?;
                self.run_major(&entry)
            }
        }
    }

    /// Ejecuta el rango inclusivo [start, end] de majors, en orden
    /// ascendente de (major, minor), abortando en el primer fallo.
    ///
    /// Fail fast: ambos extremos deben existir en el mapa antes de ejecutar
    /// nada; los majors ausentes entre medio no forman parte de la secuencia
    /// (las tablas reales tienen huecos).
    pub fn execute_range(&mut self, start: u8, end: u8) -> Result<(), BootError> {
        if start > end {
            error!("rango de isteps inválido: {start} > {end}");
            return Err(BootError::InvalidRange { start, end });
        }
        for edge in [start, end] {
            if !self.map.contains_major(edge) {
                return Err(BootError::InvalidMajorStep(edge));
            }
        }

        let entries: Vec<MajorStepEntry> = self.map
                                               .majors()
                                               .filter(|e| e.major >= start && e.major <= end)
                                               .cloned()
                                               .collect();
        let mut steps_run = 0usize;
        for entry in &entries {
            info!("istep major {} ({}) -> {:?}", entry.major, entry.name, entry.executor);
            self.run_major(entry)?;
            steps_run += entry.len();
        }

        let ipl_id = self.ensure_ipl_id();
        self.event_store
            .append_kind(ipl_id, BootEventKind::IplCompleted { steps_run });
        Ok(())
    }

    /// Todos los minors de una entrada, ascendente, abort-on-first-failure.
    fn run_major(&mut self, entry: &MajorStepEntry) -> Result<(), BootError> {
        for (minor, label) in entry.minors() {
            let label = label.to_string();
            self.dispatch_one(entry.executor, entry.major, minor, &label)?;
        }
        Ok(())
    }

    fn dispatch_one(&mut self,
                    executor: ExecutorKind,
                    major: u8,
                    minor: u8,
                    label: &str)
                    -> Result<(), BootError> {
        let ipl_id = self.ensure_ipl_id();
        self.event_store
            .append_kind(ipl_id,
                         BootEventKind::StepStarted { major,
                                                      minor,
                                                      label: label.to_string() });
        debug!("despachando istep {major}.{minor} ({label})");

        let res = match executor {
            ExecutorKind::Bmc => self.run_bmc_step(major, minor),
            ExecutorKind::Sbe => self.run_sbe_step(major, minor),
            // Passthrough reservado: el canal Hostboot aún no está cableado.
            ExecutorKind::Hostboot => Ok(()),
        };

        match res {
            Ok(()) => {
                self.event_store
                    .append_kind(ipl_id,
                                 BootEventKind::StepFinished { major,
                                                               minor,
                                                               label: label.to_string() });
                Ok(())
            }
            Err(err) => {
                error!("istep {major}.{minor} ({label}) falló: {err}");
                self.event_store
                    .append_kind(ipl_id,
                                 BootEventKind::StepFailed { major,
                                                             minor,
                                                             error: err.clone() });
                Err(err)
            }
        }
    }

    fn run_bmc_step(&self, major: u8, minor: u8) -> Result<(), BootError> {
        // Ausencia de acción = bug de configuración de la tabla, no
        // condición de runtime.
        let action = self.bmc_steps
                         .get(minor)
                         .ok_or(BootError::MapInconsistency(minor))?;
        action.execute().map_err(|f| BootError::StepExecution { major,
                                                                minor,
                                                                rc: f.rc,
                                                                msg: f.msg })
    }

    fn run_sbe_step(&self, major: u8, minor: u8) -> Result<(), BootError> {
        // Single-master: el primer target enabled es autoritativo.
        let master = match self.inventory.enabled_procs().first().copied() {
            Some(p) => p,
            None => {
                return Err(BootError::StepExecution { major,
                                                      minor,
                                                      rc: -1,
                                                      msg: "no enabled processor target".to_string() })
            }
        };
        self.chip_ops
            .istep(master, major, minor)
            .map_err(|f| BootError::StepExecution { major,
                                                    minor,
                                                    rc: f.rc,
                                                    msg: f.msg })
    }
}
