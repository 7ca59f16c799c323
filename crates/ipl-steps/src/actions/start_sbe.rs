//! Acción 0.2: arranque del Self-Boot Engine en el master.

use std::sync::Arc;

use ipl_core::bmc_step;
use ipl_core::step::StepFailure;
use ipl_targets::cfam::{CfamAccess, SbeMsg, SBE_MESSAGING};
use ipl_targets::target::{master_candidate, ProcTarget};
use log::info;

bmc_step! {
    action StartSbe {
        name: "start_sbe",
        fields { cfam: Arc<dyn CfamAccess>, targets: Vec<ProcTarget> },
        run(me) {
            // Single-master: sólo el primer target habilitado arranca su SBE
            // desde el BMC; el resto entra vía fabric más adelante.
            let master = match master_candidate(&me.targets) {
                Some(t) => t,
                None => return Err(StepFailure::rc(-1, "no enabled processor target".to_string())),
            };

            // Selección de boot side + condición de arranque en el registro
            // de mensajería.
            let word = (SbeMsg::SELECT_SEEPROM | SbeMsg::START_SBE).bits();
            match me.cfam.write_cfam(master.index, SBE_MESSAGING, word) {
                Ok(()) => {
                    info!("SBE iniciado en proc{}", master.index);
                    Ok(())
                }
                Err(e) => Err(StepFailure::rc(-1, format!("sbe start write failed: {e}"))),
            }
        }
    }
}
