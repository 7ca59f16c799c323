//! Tablas de plataforma.
//!
//! El mapa de pasos es un artefacto de configuración seleccionado en
//! runtime (`--platform` / `IPL_PLATFORM`), no una variante canónica
//! cableada: P9 y P10 difieren en qué majors y minors existen, el
//! despachador es el mismo para ambos.

mod p10;
mod p9;

pub use p10::build_p10_map;
pub use p9::build_p9_map;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use ipl_core::map::BootStepMap;
use ipl_core::step::BmcStepTable;
use ipl_targets::cfam::CfamAccess;
use ipl_targets::power::PowerControl;
use ipl_targets::target::ProcTarget;

use crate::actions::{PowerOnChassis, PowerOnCfg, SetRefClock, StartSbe, REF_CLOCK_CONFIG};

/// Generación de procesador soportada.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    P9,
    P10,
}

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Platform::P9 => "p9",
            Platform::P10 => "p10",
        }
    }

    /// Tabla de pasos de la generación.
    pub fn boot_step_map(&self) -> BootStepMap {
        match self {
            Platform::P9 => build_p9_map(),
            Platform::P10 => build_p10_map(),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "p9" | "power9" => Ok(Platform::P9),
            "p10" | "power10" => Ok(Platform::P10),
            other => Err(format!("plataforma desconocida: {other}")),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tabla de acciones BMC del major 0, común a ambas generaciones. Los
/// minors registrados aquí deben cubrir exactamente los minors BMC de la
/// tabla de plataforma (la discrepancia se detecta como MapInconsistency al
/// despachar).
pub fn build_bmc_table(power: Arc<dyn PowerControl>,
                       cfam: Arc<dyn CfamAccess>,
                       targets: Vec<ProcTarget>,
                       power_cfg: PowerOnCfg)
                       -> BmcStepTable {
    BmcStepTable::new()
        .register(0, Box::new(PowerOnChassis::new(power, power_cfg)))
        .register(1, Box::new(SetRefClock::new(cfam.clone(), targets.clone(), REF_CLOCK_CONFIG)))
        .register(2, Box::new(StartSbe::new(cfam, targets)))
}
