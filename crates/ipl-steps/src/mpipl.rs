//! Disparo de MPIPL (reboot con preservación de memoria) en abanico.
//!
//! Propiedad del colaborador, no del despachador: un hilo por target
//! habilitado, join de todos. Un fallo marca el agregado como fallido pero
//! los hermanos terminan su trabajo (a diferencia del recorrido de rango
//! del despachador, que es secuencial y aborta en el primer fallo).

use ipl_core::collab::ChipOps;
use ipl_core::step::StepFailure;
use log::{error, info};

pub fn trigger_mpipl_all(chip_ops: &(dyn ChipOps + Sync), procs: &[u8]) -> Result<(), StepFailure> {
    if procs.is_empty() {
        return Err(StepFailure::rc(-1, "no enabled processor target".to_string()));
    }

    let mut failures: Vec<StepFailure> = Vec::new();
    std::thread::scope(|scope| {
        let handles: Vec<_> = procs.iter()
                                   .copied()
                                   .map(|p| scope.spawn(move || (p, chip_ops.enter_mpipl(p))))
                                   .collect();
        for handle in handles {
            match handle.join() {
                Ok((p, Ok(()))) => info!("mpipl disparado en proc{p}"),
                Ok((p, Err(f))) => {
                    error!("mpipl falló en proc{p}: rc={} {}", f.rc, f.msg);
                    failures.push(StepFailure::rc(f.rc, format!("proc{p}: {}", f.msg)));
                }
                Err(_) => failures.push(StepFailure::rc(-1, "mpipl worker panicked".to_string())),
            }
        }
    });

    match failures.into_iter().next() {
        Some(first) => Err(first),
        None => Ok(()),
    }
}
