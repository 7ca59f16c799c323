//! Acción 0.0: encendido del chasis con espera acotada.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use ipl_core::bmc_step;
use ipl_core::step::StepFailure;
use ipl_targets::power::{PowerControl, PowerState};
use log::{debug, info};

/// Parámetros de la espera de encendido.
#[derive(Debug, Clone)]
pub struct PowerOnCfg {
    pub poll_interval: Duration,
    pub timeout: Duration,
}

impl Default for PowerOnCfg {
    fn default() -> Self {
        Self { poll_interval: Duration::from_secs(3),
               timeout: Duration::from_secs(20) }
    }
}

bmc_step! {
    action PowerOnChassis {
        name: "power_on_chassis",
        fields { power: Arc<dyn PowerControl>, cfg: PowerOnCfg },
        run(me) {
            // Si ya está encendido no se repite el secuenciado de potencia.
            match me.power.state() {
                Ok(PowerState::On) => {
                    debug!("chassis ya encendido, nada que hacer");
                    return Ok(());
                }
                Ok(_) => {}
                Err(e) => return Err(StepFailure::rc(-1, format!("power state query failed: {e}"))),
            }

            if let Err(e) = me.power.power_on() {
                return Err(StepFailure::rc(-1, format!("power on trigger failed: {e}")));
            }

            // Espera bloqueante sondeo-y-reintento con tope total.
            let deadline = Instant::now() + me.cfg.timeout;
            loop {
                match me.power.state() {
                    Ok(PowerState::On) => {
                        info!("chassis encendido");
                        return Ok(());
                    }
                    Ok(_) => {}
                    Err(e) => return Err(StepFailure::rc(-1, format!("power state query failed: {e}"))),
                }
                if Instant::now() >= deadline {
                    return Err(StepFailure::rc(-2, "chassis power on timed out".to_string()));
                }
                thread::sleep(me.cfg.poll_interval);
            }
        }
    }
}
