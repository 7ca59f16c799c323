use thiserror::Error;

/// Errores del acceso a targets y recursos de plataforma.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("cfam access failed on proc{target}: {msg}")]
    CfamAccess { target: u8, msg: String },
    #[error("power operation failed: {0}")]
    Power(String),
    #[error("{0}")]
    Validation(String),
}
