use std::sync::Arc;
use std::time::Duration;

use ipl_core::step::BmcStepAction;
use ipl_steps::actions::{PowerOnChassis, PowerOnCfg};
use ipl_steps::sim::SimPowerControl;
use ipl_targets::power::{PowerControl, PowerState};

// Config sin esperas reales: los tests no deben dormir.
fn fast_cfg() -> PowerOnCfg {
    PowerOnCfg { poll_interval: Duration::from_millis(0),
                 timeout: Duration::from_millis(50) }
}

#[test]
fn power_on_waits_until_chassis_is_on() {
    let power = Arc::new(SimPowerControl::new(3));
    let action = PowerOnChassis::new(power.clone(), fast_cfg());

    action.execute().expect("el chasis termina encendido");
    assert_eq!(power.state().unwrap(), PowerState::On);
}

#[test]
fn power_on_is_noop_when_already_on() {
    let power = Arc::new(SimPowerControl::new(0));
    power.power_on().unwrap();
    assert_eq!(power.state().unwrap(), PowerState::On);

    let action = PowerOnChassis::new(power, fast_cfg());
    action.execute().expect("sin trabajo pendiente");
}

#[test]
fn power_on_times_out_when_chassis_never_turns_on() {
    let power = Arc::new(SimPowerControl::stuck_off());
    let cfg = PowerOnCfg { poll_interval: Duration::from_millis(0),
                           timeout: Duration::from_millis(0) };
    let action = PowerOnChassis::new(power, cfg);

    let failure = action.execute().unwrap_err();
    assert_eq!(failure.rc, -2);
    assert!(failure.msg.contains("timed out"));
}
