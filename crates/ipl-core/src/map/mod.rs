//! Boot Step Map: tabla inmutable que describe la forma de la secuencia de
//! arranque completa (major → dueño + minors).
//!
//! La tabla es un artefacto de configuración por plataforma (P9 y P10
//! difieren en qué pasos existen), construido una vez al arranque mediante
//! `BootStepMapBuilder` y de sólo lectura después. Las búsquedas son puras.

mod builder;
mod types;

pub use builder::BootStepMapBuilder;
pub use types::{BootStepMap, ExecutorKind, MajorStepEntry};
