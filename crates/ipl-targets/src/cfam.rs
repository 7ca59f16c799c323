//! Espacio de registros CFAM (acceso sideband previo al arranque).
//!
//! El CFAM permite controlar y consultar un procesador antes de que su
//! propio firmware corra. Aquí se modelan las direcciones y los bits que
//! usan las acciones BMC; el transporte FSI real queda detrás del trait
//! `CfamAccess`.

use bitflags::bitflags;

use crate::error::TargetError;

/// Dirección dentro del espacio CFAM de un procesador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CfamAddress(pub u32);

/// Registro de mensajería del SBE: selección de boot side y condición de
/// arranque.
pub const SBE_MESSAGING: CfamAddress = CfamAddress(0x2809);

/// Scratch de mailbox donde se publica la palabra de configuración de ref
/// clock que el SBE consume al arrancar.
pub const MBOX_SCRATCH3: CfamAddress = CfamAddress(0x283A);

bitflags! {
    /// Bits del registro de mensajería del SBE.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SbeMsg: u32 {
        /// Condición de arranque del SBE.
        const START_SBE      = 0x8000_0000;
        /// Boot side 1 (por defecto side 0).
        const BOOT_SIDE_1    = 0x0002_0000;
        /// Arranque desde SEEPROM.
        const SELECT_SEEPROM = 0x0001_0000;
    }
}

/// Lectura/escritura de registros CFAM sobre un target dado.
pub trait CfamAccess {
    fn read_cfam(&self, target: u8, addr: CfamAddress) -> Result<u32, TargetError>;
    fn write_cfam(&self, target: u8, addr: CfamAddress, value: u32) -> Result<(), TargetError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sbe_msg_bits_compose() {
        let word = SbeMsg::SELECT_SEEPROM | SbeMsg::START_SBE;
        assert_eq!(word.bits(), 0x8001_0000);
        assert!(!word.contains(SbeMsg::BOOT_SIDE_1));
    }
}
