//! Front end CLI del control de pasos de arranque.
//!
//! Superficie:
//!   ipl-cli --major <N> [--minor <N>]        ejecuta un paso (255 = todos los minors)
//!   ipl-cli --step <N> | --step <A>..<B>     un major completo o un rango inclusivo
//!   ipl-cli --mode <Normal|step>             Normal = secuencia completa
//!   ipl-cli --type <on|off|reboot>           on = IPL, off = apagado, reboot = MPIPL
//!   ipl-cli --platform <p9|p10>              pisa IPL_PLATFORM
//!
//! Códigos de salida: 0 éxito, 2 error de uso, 1 cualquier fallo de
//! despacho o ejecución. Sin código de éxito parcial: un solo resultado
//! pasa/falla por operación.

use std::process;
use std::sync::Arc;

use ipl_core::collab::ProcInventory;
use ipl_core::{BootControl, InMemoryEventStore, MinorSelector};
use ipl_steps::actions::PowerOnCfg;
use ipl_steps::config::IplConfig;
use ipl_steps::maps::{build_bmc_table, Platform};
use ipl_steps::mpipl::trigger_mpipl_all;
use ipl_steps::sim::{SimCfam, SimChipOps, SimInventory, SimPowerControl};
use ipl_targets::power::PowerControl;
use log::info;

/// Operación pedida por línea de comandos.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BootRequest {
    Single { major: u8, minor: MinorSelector },
    Range { start: u8, end: u8 },
    FullSequence,
    PowerOff,
    Mpipl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliRequest {
    platform: Option<Platform>,
    request: BootRequest,
}

fn usage() -> String {
    "Uso: ipl-cli [--major <N> [--minor <N>]] [--step <N>|<A>..<B>] \
     [--mode <Normal|step>] [--type <on|off|reboot>] [--platform <p9|p10>]"
        .to_string()
}

// "N" o "A..B" (rango inclusivo de majors).
fn parse_step_arg(raw: &str) -> Result<(u8, u8), String> {
    if let Some((a, b)) = raw.split_once("..") {
        let start: u8 = a.trim().parse().map_err(|_| format!("major inválido: {a}"))?;
        let end: u8 = b.trim().parse().map_err(|_| format!("major inválido: {b}"))?;
        Ok((start, end))
    } else {
        let major: u8 = raw.trim().parse().map_err(|_| format!("major inválido: {raw}"))?;
        Ok((major, major))
    }
}

fn parse_args(args: &[String]) -> Result<CliRequest, String> {
    let mut major: Option<u8> = None;
    let mut minor: Option<u8> = None;
    let mut step: Option<(u8, u8)> = None;
    let mut mode: Option<String> = None;
    let mut op_type: Option<String> = None;
    let mut platform: Option<Platform> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--major" => {
                i += 1;
                let raw = args.get(i).ok_or_else(usage)?;
                major = Some(raw.parse().map_err(|_| format!("major inválido: {raw}"))?);
            }
            "--minor" => {
                i += 1;
                let raw = args.get(i).ok_or_else(usage)?;
                minor = Some(raw.parse().map_err(|_| format!("minor inválido: {raw}"))?);
            }
            "--step" => {
                i += 1;
                let raw = args.get(i).ok_or_else(usage)?;
                step = Some(parse_step_arg(raw)?);
            }
            "--mode" => {
                i += 1;
                let raw = args.get(i).ok_or_else(usage)?;
                match raw.as_str() {
                    "Normal" | "normal" | "step" => mode = Some(raw.to_ascii_lowercase()),
                    other => return Err(format!("modo inválido: {other}")),
                }
            }
            "--type" => {
                i += 1;
                let raw = args.get(i).ok_or_else(usage)?;
                match raw.as_str() {
                    "on" | "off" | "reboot" => op_type = Some(raw.clone()),
                    other => return Err(format!("tipo inválido: {other}")),
                }
            }
            "--platform" => {
                i += 1;
                let raw = args.get(i).ok_or_else(usage)?;
                platform = Some(raw.parse()?);
            }
            "--help" | "-h" => return Err(usage()),
            other => return Err(format!("opción desconocida: {other}\n{}", usage())),
        }
        i += 1;
    }

    if step.is_some() && major.is_some() {
        return Err("--step y --major son excluyentes".to_string());
    }
    if minor.is_some() && major.is_none() {
        return Err(format!("--minor requiere --major\n{}", usage()));
    }

    let request = match op_type.as_deref() {
        Some("off") => BootRequest::PowerOff,
        Some("reboot") => BootRequest::Mpipl,
        // "on" o ausente: operación de arranque según selección.
        _ => {
            if let Some((start, end)) = step {
                BootRequest::Range { start, end }
            } else if let Some(major) = major {
                // 255 conserva el sentinel histórico "todos los minors".
                let minor = match minor {
                    Some(0xFF) | None => MinorSelector::All,
                    Some(m) => MinorSelector::Specific(m),
                };
                BootRequest::Single { major, minor }
            } else if mode.as_deref() == Some("step") {
                return Err(format!("--mode step requiere --major o --step\n{}", usage()));
            } else {
                BootRequest::FullSequence
            }
        }
    };

    Ok(CliRequest { platform, request })
}

fn run(request: BootRequest, platform: Platform, cfg: &IplConfig) -> Result<(), String> {
    // Backend simulado; las implementaciones reales (pdbg/libipl, power
    // sequencer) se inyectan por estos mismos seams.
    let inventory = Arc::new(SimInventory::single_enabled());
    let power = Arc::new(SimPowerControl::new(1));
    let cfam = Arc::new(SimCfam::new());
    let chip_ops = Arc::new(SimChipOps::new());

    match request {
        BootRequest::PowerOff => {
            power.power_off().map_err(|e| e.to_string())?;
            info!("chassis apagado");
            return Ok(());
        }
        BootRequest::Mpipl => {
            let procs = inventory.enabled_procs();
            return trigger_mpipl_all(chip_ops.as_ref(), &procs)
                .map_err(|f| format!("mpipl falló (rc={}): {}", f.rc, f.msg));
        }
        _ => {}
    }

    let power_cfg = PowerOnCfg { poll_interval: cfg.power_poll_interval,
                                 timeout: cfg.power_timeout };
    let mut control = BootControl::builder(InMemoryEventStore::default())
        .platform(platform.name())
        .map(platform.boot_step_map())
        .bmc_steps(build_bmc_table(power, cfam, inventory.targets().to_vec(), power_cfg))
        .chip_ops(chip_ops)
        .inventory(inventory)
        .build()
        .map_err(|e| e.to_string())?;

    let result = match request {
        BootRequest::Single { major, minor } => control.execute_step(major, minor),
        BootRequest::Range { start, end } => control.execute_range(start, end),
        BootRequest::FullSequence => {
            let (start, end) = match (control.map().first_major(), control.map().last_major()) {
                (Some(s), Some(e)) => (s, e),
                _ => return Err("tabla de plataforma vacía".to_string()),
            };
            control.execute_range(start, end)
        }
        BootRequest::PowerOff | BootRequest::Mpipl => unreachable!("atendidos arriba"),
    };

    if let Err(err) = result {
        if let Some(rec) = control.summary().failed_step() {
            eprintln!("[ipl-cli] paso fallido: {} ({})", rec.step, rec.label);
        }
        return Err(err.to_string());
    }
    Ok(())
}

fn main() {
    env_logger::init();
    // Cargar .env si existe (IPL_PLATFORM, tiempos de potencia).
    let _ = dotenvy::dotenv();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let parsed = match parse_args(&argv) {
        Ok(p) => p,
        Err(msg) => {
            eprintln!("{msg}");
            process::exit(2);
        }
    };

    let cfg = IplConfig::from_env();
    let platform = parsed.platform.unwrap_or(cfg.platform);
    match run(parsed.request, platform, &cfg) {
        Ok(()) => process::exit(0),
        Err(msg) => {
            eprintln!("[ipl-cli] {msg}");
            process::exit(1);
        }
    }
}
