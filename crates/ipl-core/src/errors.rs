//! Errores del despachador de pasos de arranque (taxonomía cerrada).

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum BootError {
    #[error("major step {0} not present in boot step map")] InvalidMajorStep(u8),
    #[error("minor step {major}.{minor} not present in boot step map")] InvalidMinorStep { major: u8, minor: u8 },
    #[error("invalid step range: start {start} > end {end}")] InvalidRange { start: u8, end: u8 },
    #[error("step {major}.{minor} failed (rc={rc}): {msg}")] StepExecution { major: u8, minor: u8, rc: i32, msg: String },
    #[error("bmc step table has no action for minor {0} (map inconsistency)")] MapInconsistency(u8),
    #[error("internal: {0}")] Internal(String),
}
