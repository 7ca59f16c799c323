//! Carga de configuración desde variables de entorno.
//! Convención `IPL_*`, con defaults seguros para desarrollo.

use std::env;
use std::time::Duration;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

use crate::maps::Platform;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone)]
pub struct IplConfig {
    pub platform: Platform,
    /// Intervalo de sondeo del estado de potencia del chasis.
    pub power_poll_interval: Duration,
    /// Tope total de la espera de encendido (~20 s en el agente real).
    pub power_timeout: Duration,
}

impl IplConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let platform = env::var("IPL_PLATFORM").ok()
                                               .and_then(|v| v.parse().ok())
                                               .unwrap_or(Platform::P10);
        let poll_ms: u64 = env::var("IPL_POWER_POLL_INTERVAL_MS").ok()
                                                                 .and_then(|v| v.parse().ok())
                                                                 .unwrap_or(3_000);
        let timeout_ms: u64 = env::var("IPL_POWER_TIMEOUT_MS").ok()
                                                              .and_then(|v| v.parse().ok())
                                                              .unwrap_or(20_000);
        Self { platform,
               power_poll_interval: Duration::from_millis(poll_ms),
               power_timeout: Duration::from_millis(timeout_ms) }
    }
}

/// Forzar carga temprana de .env desde los binarios si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
