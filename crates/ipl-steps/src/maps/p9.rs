//! Secuencia IPL POWER9.
//!
//! Misma forma que P10 pero con menos pasos SBE publicados y sin los majors
//! de entrenamiento de memoria tardíos (Hostboot los colapsa en esta
//! generación).

use ipl_core::map::{BootStepMap, BootStepMapBuilder, ExecutorKind};

pub fn build_p9_map() -> BootStepMap {
    BootStepMapBuilder::new()
        .major(0, "poweron", ExecutorKind::Bmc)
        .minor(0, "power_on_chassis")
        .minor(1, "set_ref_clock")
        .minor(2, "start_sbe")
        .major(2, "sbe_config", ExecutorKind::Sbe)
        .minor(1, "sbe_config_update")
        .major(3, "sbe_chiplet_init", ExecutorKind::Sbe)
        .minor(1, "sbe_chiplet_reset")
        .minor(2, "sbe_chiplet_pll_initf")
        .major(4, "sbe_scom_init", ExecutorKind::Sbe)
        .minor(1, "sbe_scominit")
        .minor(2, "sbe_fabricinit")
        .major(5, "sbe_load_hostboot", ExecutorKind::Sbe)
        .minor(1, "sbe_load_bootloader")
        .major(6, "hb_discover_targets", ExecutorKind::Hostboot)
        .minor(1, "host_discover_targets")
        .major(8, "hb_slave_sbe", ExecutorKind::Hostboot)
        .minor(1, "host_slave_sbe_config")
        .major(10, "hb_build_smp", ExecutorKind::Hostboot)
        .minor(1, "proc_build_smp")
        .major(14, "hb_dram_poststart", ExecutorKind::Hostboot)
        .minor(1, "mss_memdiag")
        .minor(2, "proc_exit_cache_contained")
        .build()
}
