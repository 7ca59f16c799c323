//! Constantes del control de arranque.
//!
//! Valores estáticos que participan en el cálculo del `map_hash` de las
//! tablas de plataforma. Un cambio de versión del control invalida los
//! hashes aunque la tabla no cambie, de modo que un log de eventos siempre
//! identifica la combinación exacta control+tabla que lo produjo.

/// Versión lógica del despachador. Mantener estable mientras no haya
/// cambios incompatibles en la forma canónica de la tabla.
pub const CONTROL_VERSION: &str = "B1.0";
