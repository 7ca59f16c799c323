//! Macro utilitaria para reducir boilerplate al declarar acciones BMC.
//!
//! Exportada en la raíz del crate para poder usarla como:
//!   use ipl_core::bmc_step;

/// Declara un struct que implementa `BmcStepAction`.
///
/// Formas soportadas:
/// - con fields (colaboradores capturados en construcción):
///   bmc_step! { action Nombre { name: "...", fields { f: Ty, ... }, run(me) { ... } } }
/// - unit (sin estado):
///   bmc_step! { action Nombre { name: "...", run(me) { ... } } }
///
/// El cuerpo de `run` debe evaluar a `Result<(), StepFailure>`.
#[macro_export]
macro_rules! bmc_step {
    // ---------------- Acción con fields ----------------
    (
        action $name:ident {
            name: $id:expr,
            fields { $($fname:ident : $fty:ty),+ $(,)? },
            run($self_ident:ident) $body:block
        }
    ) => {
        pub struct $name { $(pub $fname: $fty),+ }
        impl $name {
            pub fn new($($fname: $fty),+) -> Self { Self { $($fname),+ } }
        }
        impl $crate::step::BmcStepAction for $name {
            fn name(&self) -> &str { $id }
            fn execute(&self) -> Result<(), $crate::step::StepFailure> {
                let $self_ident = self;
                $body
            }
        }
    };

    // ---------------- Acción unit (sin fields) ----------------
    (
        action $name:ident {
            name: $id:expr,
            run($self_ident:ident) $body:block
        }
    ) => {
        pub struct $name;
        impl $name {
            pub fn new() -> Self { Self }
        }
        impl Default for $name {
            fn default() -> Self { Self::new() }
        }
        impl $crate::step::BmcStepAction for $name {
            fn name(&self) -> &str { $id }
            fn execute(&self) -> Result<(), $crate::step::StepFailure> {
                #[allow(unused_variables)]
                let $self_ident = self;
                $body
            }
        }
    };
}
