//! Acción 0.1: publicación de la configuración de ref clock vía CFAM.
//!
//! El SBE consume la palabra publicada en el scratch de mailbox al arrancar;
//! debe quedar escrita en todos los procesadores habilitados antes del
//! arranque del SBE (0.2).

use std::sync::Arc;

use ipl_core::bmc_step;
use ipl_core::step::StepFailure;
use ipl_targets::cfam::{CfamAccess, MBOX_SCRATCH3};
use ipl_targets::target::ProcTarget;
use log::debug;

/// Palabra de configuración de ref clock por defecto. El valor concreto es
/// un artefacto de configuración de plataforma.
pub const REF_CLOCK_CONFIG: u32 = 0x0000_00A5;

bmc_step! {
    action SetRefClock {
        name: "set_ref_clock",
        fields { cfam: Arc<dyn CfamAccess>, targets: Vec<ProcTarget>, config_word: u32 },
        run(me) {
            let mut published = 0usize;
            for t in me.targets.iter().filter(|t| t.is_enabled()) {
                if let Err(e) = me.cfam.write_cfam(t.index, MBOX_SCRATCH3, me.config_word) {
                    return Err(StepFailure::rc(-1, format!("ref clock publish failed on proc{}: {e}", t.index)));
                }
                debug!("ref clock config publicada en proc{}", t.index);
                published += 1;
            }
            if published == 0 {
                return Err(StepFailure::rc(-1, "no enabled processor target".to_string()));
            }
            Ok(())
        }
    }
}
