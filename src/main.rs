//! Demo guiada del control de arranque sobre el backend simulado.
//!
//! Recorre tres escenarios:
//! 1. IPL completo P10 que termina bien.
//! 2. IPL que aborta en el primer fallo (istep 3.2 programado para fallar).
//! 3. Despachos puntuales: un paso concreto y un paso inexistente.
//!
//! Ejecutar con: cargo run --bin iplflow

use std::sync::Arc;

use ipl_core::{BootControl, BootEventKind, InMemoryEventStore, MinorSelector};
use ipl_steps::actions::PowerOnCfg;
use ipl_steps::config::IplConfig;
use ipl_steps::maps::{build_bmc_table, Platform};
use ipl_steps::sim::{SimCfam, SimChipOps, SimInventory, SimPowerControl};
use std::time::Duration;

struct SimBackend {
    inventory: Arc<SimInventory>,
    chip_ops: Arc<SimChipOps>,
}

fn build_control(platform: Platform) -> (BootControl<InMemoryEventStore>, SimBackend) {
    let inventory = Arc::new(SimInventory::single_enabled());
    let power = Arc::new(SimPowerControl::new(1));
    let cfam = Arc::new(SimCfam::new());
    let chip_ops = Arc::new(SimChipOps::new());

    // En la demo no queremos esperas reales de encendido.
    let power_cfg = PowerOnCfg { poll_interval: Duration::from_millis(0),
                                 timeout: Duration::from_millis(100) };
    let control = BootControl::builder(InMemoryEventStore::default())
        .platform(platform.name())
        .map(platform.boot_step_map())
        .bmc_steps(build_bmc_table(power, cfam, inventory.targets().to_vec(), power_cfg))
        .chip_ops(chip_ops.clone())
        .inventory(inventory.clone())
        .build()
        .expect("control construible");

    (control, SimBackend { inventory, chip_ops })
}

fn print_summary(control: &BootControl<InMemoryEventStore>) {
    let summary = control.summary();
    println!("  plataforma: {}  completado: {}",
             summary.platform.as_deref().unwrap_or("?"),
             summary.completed);
    for rec in &summary.steps {
        println!("    {:>5}  {:<40} {:?}", rec.step.to_string(), rec.label, rec.status);
    }
}

fn main() {
    env_logger::init();
    // Cargar .env si existe (IPL_PLATFORM, tiempos de potencia).
    let _ = dotenvy::dotenv();
    let cfg = IplConfig::from_env();

    println!("== 1. IPL completo ({}) ==", cfg.platform);
    let (mut control, backend) = build_control(cfg.platform);
    let map = control.map();
    let (first, last) = (map.first_major().expect("tabla no vacía"),
                         map.last_major().expect("tabla no vacía"));
    control.execute_range(first, last).expect("la secuencia completa termina bien");
    println!("  isteps delegados al SBE: {}", backend.chip_ops.istep_sequence().len());
    let completed = control.events()
                           .iter()
                           .any(|e| matches!(e.kind, BootEventKind::IplCompleted { .. }));
    println!("  IplCompleted emitido: {completed}");

    // Un evento serializado, como lo vería un consumidor externo del log.
    if let Some(ev) = control.events().first() {
        println!("  primer evento: {}", serde_json::to_string(ev).expect("evento serializable"));
    }

    println!("\n== 2. Abort-on-first-failure (fallo programado en 3.2) ==");
    let (mut control, backend) = build_control(cfg.platform);
    backend.chip_ops.fail_step(3, 2);
    let err = control.execute_range(first, last).expect_err("el rango debe abortar");
    println!("  error: {err}");
    println!("  secuencia observada: {:?}", backend.chip_ops.istep_sequence());
    print_summary(&control);

    println!("\n== 3. Despachos puntuales ==");
    let (mut control, backend) = build_control(cfg.platform);
    control.execute_step(0, MinorSelector::Specific(0)).expect("0.0 enciende el chasis");
    println!("  0.0 ok");
    let err = control.execute_step(99, MinorSelector::All).expect_err("99 no existe");
    println!("  99.* rechazado: {err}");
    let procs = {
        use ipl_core::collab::ProcInventory;
        backend.inventory.enabled_procs()
    };
    match ipl_steps::mpipl::trigger_mpipl_all(backend.chip_ops.as_ref(), &procs) {
        Ok(()) => println!("  mpipl disparado en {} target(s)", procs.len()),
        Err(f) => println!("  mpipl falló: {}", f.msg),
    }
}
