//! End-to-end gait-cycle behavior: a decoded command in, joint writes out.
use embassy_futures::block_on;
use hexapod_robot::kinematics::gait_engine::Hexapod;
use hexapod_robot::robot::commands::{decode, encode, Buttons, DirectionKeys};
use hexapod_robot::robot::config::WAVE_STEPS;
use hexapod_robot::robot::joint::Joint;
use hexapod_robot::robot::leg::LegId;
use hexapod_robot::robot::servo::ServoBus;

struct RecordingBus {
    calls: Vec<(LegId, Joint, f32)>,
}

impl RecordingBus {
    fn new() -> Self {
        Self { calls: Vec::new() }
    }
}

impl ServoBus for RecordingBus {
    fn set_angle(&mut self, leg: LegId, joint: Joint, degrees: f32) {
        self.calls.push((leg, joint, degrees));
    }
}

const CALLS_PER_WAYPOINT: usize = 6 * 3;
const CALLS_PER_PHASE: usize = CALLS_PER_WAYPOINT * (WAVE_STEPS + 1);

#[test]
fn idle_command_issues_no_joint_writes() {
    let mut hex = Hexapod::new();
    let mut bus = RecordingBus::new();

    block_on(hex.move_cycle(&mut bus, 0, 0.0));

    assert!(bus.calls.is_empty());
}

#[test]
fn a_cycle_walks_both_phases_in_lockstep() {
    let mut hex = Hexapod::new();
    let mut bus = RecordingBus::new();

    // a plain "forward" press from the remote
    let keys = DirectionKeys {
        forward: true,
        back: false,
        left: false,
        right: false,
    };
    let cmd = decode(&encode(Buttons::NONE, keys)).expect("well-formed frame");
    assert_eq!(cmd.yaw_degrees(), 0.0);

    block_on(hex.move_cycle(&mut bus, cmd.speed(), cmd.yaw_degrees()));

    assert_eq!(bus.calls.len(), 2 * CALLS_PER_PHASE);

    // waypoint i of every leg lands before waypoint i + 1 of any leg,
    // within each of the two phases
    for phase in bus.calls.chunks(CALLS_PER_PHASE) {
        for block in phase.chunks(CALLS_PER_WAYPOINT) {
            for (slot, (leg, joint, _)) in block.iter().enumerate() {
                assert_eq!(leg.index(), slot / 3);
                assert_eq!(*joint as usize, slot % 3);
            }
        }
    }
}

#[test]
fn consecutive_cycles_keep_striding() {
    let mut hex = Hexapod::new();
    let mut bus = RecordingBus::new();

    block_on(hex.move_cycle(&mut bus, 7, 0.0));
    block_on(hex.move_cycle(&mut bus, 7, 0.0));

    assert_eq!(bus.calls.len(), 4 * CALLS_PER_PHASE);
}

#[test]
fn rotation_command_flows_through_the_buttons() {
    let keys = DirectionKeys {
        forward: false,
        back: false,
        left: true,
        right: false,
    };
    let cmd = decode(&encode(Buttons::TRIANGLE, keys)).expect("well-formed frame");

    let mut hex = Hexapod::new();
    hex.set_rotation(cmd.buttons.contains(Buttons::TRIANGLE));
    assert!(hex.rotation());

    let mut bus = RecordingBus::new();
    block_on(hex.move_cycle(&mut bus, cmd.speed(), cmd.yaw_degrees()));
    assert_eq!(bus.calls.len(), 2 * CALLS_PER_PHASE);
}
