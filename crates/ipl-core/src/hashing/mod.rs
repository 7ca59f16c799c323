//! Módulo de hashing y canonicalización JSON.
//!
//! Usado para derivar el `map_hash` de una tabla de pasos: JSON canónico
//! (claves ordenadas) + blake3 en hex.

pub mod canonical_json;
pub mod hash;

pub use canonical_json::to_canonical_json;
pub use hash::{hash_str, hash_value};
