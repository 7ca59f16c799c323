use std::sync::Arc;

use ipl_core::map::ExecutorKind;
use ipl_steps::actions::PowerOnCfg;
use ipl_steps::maps::{build_bmc_table, build_p10_map, build_p9_map, Platform};
use ipl_steps::sim::{SimCfam, SimInventory, SimPowerControl};

#[test]
fn p10_map_shape() {
    let map = build_p10_map();

    // Major 0 es del BMC y existe el hueco del major 1.
    let poweron = map.lookup_major(0).expect("major 0");
    assert_eq!(poweron.executor, ExecutorKind::Bmc);
    assert!(!map.contains_major(1));

    // 2..5 SBE, 6+ Hostboot.
    for major in [2u8, 3, 4, 5] {
        assert_eq!(map.lookup_major(major).expect("major sbe").executor, ExecutorKind::Sbe);
    }
    assert_eq!(map.lookup_major(6).expect("major 6").executor, ExecutorKind::Hostboot);
    assert_eq!(map.last_major(), Some(16));

    // Las etiquetas son puramente informativas pero estables.
    assert_eq!(poweron.lookup_minor(2), Some("start_sbe"));
}

#[test]
fn p9_and_p10_are_distinct_artifacts() {
    let p9 = build_p9_map();
    let p10 = build_p10_map();
    assert_ne!(p9.map_hash, p10.map_hash);
    assert!(p9.step_count() < p10.step_count());
}

#[test]
fn platform_selects_matching_map() {
    assert_eq!(Platform::P9.boot_step_map().map_hash, build_p9_map().map_hash);
    assert_eq!(Platform::P10.boot_step_map().map_hash, build_p10_map().map_hash);
}

#[test]
fn bmc_table_covers_every_bmc_minor_of_both_maps() {
    let inventory = SimInventory::single_enabled();
    let table = build_bmc_table(Arc::new(SimPowerControl::new(0)),
                                Arc::new(SimCfam::new()),
                                inventory.targets().to_vec(),
                                PowerOnCfg::default());

    for map in [build_p9_map(), build_p10_map()] {
        for entry in map.majors().filter(|e| e.executor == ExecutorKind::Bmc) {
            for (minor, label) in entry.minors() {
                assert!(table.get(minor).is_some(),
                        "minor BMC {minor} ({label}) sin acción registrada");
            }
        }
    }
}
