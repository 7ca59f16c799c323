//! Secuencia IPL POWER10.
//!
//! Major 0 pertenece al BMC; 2..5 al SBE; 6..16 a Hostboot. El major 1 no
//! existe en esta generación (hueco legítimo de la tabla).

use ipl_core::map::{BootStepMap, BootStepMapBuilder, ExecutorKind};

pub fn build_p10_map() -> BootStepMap {
    BootStepMapBuilder::new()
        .major(0, "poweron", ExecutorKind::Bmc)
        .minor(0, "power_on_chassis")
        .minor(1, "set_ref_clock")
        .minor(2, "start_sbe")
        .major(2, "sbe_config", ExecutorKind::Sbe)
        .minor(1, "sbe_config_update")
        .minor(2, "sbe_check_master")
        .major(3, "sbe_chiplet_init", ExecutorKind::Sbe)
        .minor(1, "sbe_gptr_time_initf")
        .minor(2, "sbe_chiplet_reset")
        .minor(3, "sbe_chiplet_pll_initf")
        .minor(4, "sbe_arrayinit")
        .major(4, "sbe_scom_init", ExecutorKind::Sbe)
        .minor(1, "sbe_scominit")
        .minor(2, "sbe_lpc_init")
        .minor(3, "sbe_fabricinit")
        .major(5, "sbe_load_hostboot", ExecutorKind::Sbe)
        .minor(1, "sbe_load_bootloader")
        .minor(2, "sbe_instruct_start")
        .major(6, "hb_discover_targets", ExecutorKind::Hostboot)
        .minor(1, "host_discover_targets")
        .minor(2, "host_update_primary_tpm")
        .major(7, "hb_mc_config", ExecutorKind::Hostboot)
        .minor(1, "mss_attr_cleanup")
        .minor(2, "mss_freq")
        .minor(3, "mss_eff_config")
        .major(8, "hb_slave_sbe", ExecutorKind::Hostboot)
        .minor(1, "host_slave_sbe_config")
        .minor(2, "proc_check_slave_sbe_seeprom_complete")
        .major(10, "hb_build_smp", ExecutorKind::Hostboot)
        .minor(1, "proc_build_smp")
        .minor(2, "host_slave_sbe_update")
        .major(12, "hb_dram_init", ExecutorKind::Hostboot)
        .minor(1, "mss_getecid")
        .minor(2, "mss_ddr_phy_reset")
        .minor(3, "mss_draminit")
        .major(13, "hb_dram_training", ExecutorKind::Hostboot)
        .minor(1, "mss_draminit_training")
        .major(14, "hb_dram_poststart", ExecutorKind::Hostboot)
        .minor(1, "mss_memdiag")
        .minor(2, "proc_pcie_config")
        .minor(3, "proc_exit_cache_contained")
        .major(15, "hb_stop_image", ExecutorKind::Hostboot)
        .minor(1, "host_build_stop_image")
        .minor(2, "proc_set_pba_homer_bar")
        .major(16, "hb_core_activate", ExecutorKind::Hostboot)
        .minor(1, "host_activate_master")
        .minor(2, "host_activate_slave_cores")
        .build()
}
