use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use super::{BootEvent, BootEventKind};

/// Almacenamiento de eventos append-only por intento de IPL.
pub trait EventStore {
    /// Agrega un evento a partir de su kind y devuelve el evento completo
    /// (con seq y ts).
    fn append_kind(&mut self, ipl_id: Uuid, kind: BootEventKind) -> BootEvent;
    /// Lista eventos de un intento (orden ascendente por seq).
    fn list(&self, ipl_id: Uuid) -> Vec<BootEvent>;
}

pub struct InMemoryEventStore { pub inner: HashMap<Uuid, Vec<BootEvent>> }

impl Default for InMemoryEventStore {
    fn default() -> Self { Self { inner: HashMap::new() } }
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, ipl_id: Uuid, kind: BootEventKind) -> BootEvent {
        let vec = self.inner.entry(ipl_id).or_insert_with(Vec::new);
        let seq = vec.len() as u64;
        let ev = BootEvent { seq, ipl_id, kind, ts: Utc::now() };
        vec.push(ev.clone());
        ev
    }

    fn list(&self, ipl_id: Uuid) -> Vec<BootEvent> {
        self.inner.get(&ipl_id).cloned().unwrap_or_default()
    }
}
