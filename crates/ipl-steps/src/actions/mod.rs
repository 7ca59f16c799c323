//! Acciones BMC del major 0.
//!
//! Son los únicos pasos que corren in-process: secuenciado de potencia y
//! preparación del procesador antes de que exista firmware ejecutándose.
//! Cada acción captura sus colaboradores en construcción (objetos de
//! capacidad) y se registra por minor en la `BmcStepTable`.

mod power_on;
mod ref_clock;
mod start_sbe;

pub use power_on::{PowerOnChassis, PowerOnCfg};
pub use ref_clock::{SetRefClock, REF_CLOCK_CONFIG};
pub use start_sbe::StartSbe;
