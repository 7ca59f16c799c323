//! ipl-targets: modelo de dominio del lado hardware.
//!
//! Este crate describe lo que el agente de arranque puede tocar antes de que
//! el firmware del procesador esté corriendo:
//! - `target`: procesadores alcanzables por el bus sideband y su estado de
//!   probe.
//! - `cfam`: el espacio de registros CFAM y el seam de acceso
//!   lectura/escritura.
//! - `power`: estado y control de la alimentación del chasis.
//!
//! No depende del despachador: la adaptación dominio ↔ control vive en
//! `ipl-steps`.

pub mod cfam;
pub mod error;
pub mod power;
pub mod target;

pub use cfam::{CfamAccess, CfamAddress, SbeMsg, MBOX_SCRATCH3, SBE_MESSAGING};
pub use error::TargetError;
pub use power::{PowerControl, PowerState};
pub use target::{master_candidate, ProbeStatus, ProcTarget};
