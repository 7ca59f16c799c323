//! ipl-steps: capa de adaptación dominio ↔ control.
//!
//! Este crate provee:
//! - Las acciones BMC del major 0 (encendido de chasis, ref clock, arranque
//!   del SBE), declaradas con la macro `bmc_step!` del core y con sus
//!   colaboradores capturados en construcción.
//! - Las tablas de plataforma (`maps`): P9 y P10 como artefactos de
//!   configuración intercambiables.
//! - El fan-out de MPIPL (`mpipl`).
//! - Colaboradores simulados (`sim`) para desarrollo y tests.
//! - Configuración por entorno (`config`).
//!
//! Nota: el core sólo conoce traits (`BmcStepAction`, `ChipOps`,
//! `ProcInventory`); aquí se cablean contra el modelo de `ipl-targets`.

pub mod actions;
pub mod config;
pub mod maps;
pub mod mpipl;
pub mod sim;
