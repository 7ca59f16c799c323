//! Tabla de acciones BMC: callbacks niládicos por minor del major 0.

use indexmap::IndexMap;

use super::StepFailure;

/// Acción ejecutable in-process para un minor del major BMC.
///
/// Las implementaciones capturan sus colaboradores en construcción (objetos
/// de capacidad), por eso `execute` no recibe argumentos. Deben ser
/// deterministas respecto al estado observable de esos colaboradores.
pub trait BmcStepAction {
    /// Nombre estable, sólo para logging.
    fn name(&self) -> &str;

    /// Ejecuta la acción; los fallos se reportan como `StepFailure`.
    fn execute(&self) -> Result<(), StepFailure>;
}

/// Tabla inmutable minor → acción. Se construye una vez al arranque del
/// proceso; la búsqueda es por clave, la inserción en orden ascendente es
/// convención de los builders de plataforma.
#[derive(Default)]
pub struct BmcStepTable {
    actions: IndexMap<u8, Box<dyn BmcStepAction>>,
}

impl BmcStepTable {
    pub fn new() -> Self {
        Self { actions: IndexMap::new() }
    }

    /// Registra una acción para un minor. Consume y devuelve la tabla para
    /// permitir encadenar registros en los builders de plataforma.
    pub fn register(mut self, minor: u8, action: Box<dyn BmcStepAction>) -> Self {
        self.actions.insert(minor, action);
        self
    }

    pub fn get(&self, minor: u8) -> Option<&dyn BmcStepAction> {
        self.actions.get(&minor).map(|a| a.as_ref())
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
