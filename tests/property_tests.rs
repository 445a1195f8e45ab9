//! Property-based tests for the machine and its history.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated operation sequences.

use proptest::prelude::*;
use waypoint::{machine_config, Machine, MachineConfig, MachineError};

const STATES: [&str; 3] = ["idle", "running", "paused"];
const EVENTS: [&str; 4] = ["run", "stop", "pause", "fly"];

fn player() -> MachineConfig {
    machine_config! {
        initial: idle,
        idle => { run => running },
        running => { stop => idle, pause => paused },
        paused => { run => running },
    }
}

#[derive(Clone, Debug)]
enum Op {
    Change(&'static str),
    Trigger(&'static str),
    Undo,
    Redo,
}

prop_compose! {
    fn arbitrary_state()(i in 0..STATES.len()) -> &'static str {
        STATES[i]
    }
}

prop_compose! {
    fn arbitrary_event()(i in 0..EVENTS.len()) -> &'static str {
        EVENTS[i]
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arbitrary_state().prop_map(Op::Change),
        Just(Op::Change("flying")),
        arbitrary_event().prop_map(Op::Trigger),
        Just(Op::Undo),
        Just(Op::Redo),
    ]
}

fn apply(machine: &mut Machine, op: &Op) {
    match op {
        Op::Change(state) => {
            let _ = machine.change_state(state);
        }
        Op::Trigger(event) => {
            let _ = machine.trigger(event);
        }
        Op::Undo => {
            machine.undo();
        }
        Op::Redo => {
            machine.redo();
        }
    }
}

proptest! {
    #[test]
    fn starts_in_initial_state(initial in "[a-z]{1,8}") {
        let machine = Machine::new(MachineConfig::new(initial.clone()));
        prop_assert_eq!(machine.state(), initial.as_str());
    }

    #[test]
    fn change_state_then_undo_returns(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        target in arbitrary_state(),
    ) {
        let mut machine = Machine::new(player());
        for op in &ops {
            apply(&mut machine, op);
        }

        let before = machine.state().to_string();
        machine.change_state(target).unwrap();
        prop_assert_eq!(machine.state(), target);
        prop_assert!(machine.undo());
        prop_assert_eq!(machine.state(), before.as_str());
    }

    #[test]
    fn redo_restores_undone_state(ops in prop::collection::vec(arbitrary_op(), 0..20)) {
        let mut machine = Machine::new(player());
        for op in &ops {
            apply(&mut machine, op);
        }

        let before = machine.state().to_string();
        if machine.undo() {
            prop_assert!(machine.redo());
            prop_assert_eq!(machine.state(), before.as_str());
        } else {
            prop_assert_eq!(machine.state(), before.as_str());
        }
    }

    #[test]
    fn new_transition_after_undo_discards_redo(
        ops in prop::collection::vec(arbitrary_op(), 1..20),
        target in arbitrary_state(),
    ) {
        let mut machine = Machine::new(player());
        for op in &ops {
            apply(&mut machine, op);
        }

        machine.undo();
        machine.change_state(target).unwrap();
        prop_assert!(!machine.redo());
    }

    #[test]
    fn failed_operations_leave_machine_unchanged(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        event in arbitrary_event(),
    ) {
        let mut machine = Machine::new(player());
        for op in &ops {
            apply(&mut machine, op);
        }

        let state = machine.state().to_string();
        let cursor = machine.history().cursor();
        let len = machine.history().len();

        let changed = machine.change_state("flying");
        prop_assert_eq!(
            changed,
            Err(MachineError::InvalidState { state: "flying".to_string() })
        );

        if machine.config().resolve(&state, event).is_none() {
            let triggered = machine.trigger(event);
            let is_invalid_transition =
                matches!(triggered, Err(MachineError::InvalidTransition { .. }));
            prop_assert!(is_invalid_transition);
        }

        prop_assert_eq!(machine.state(), state.as_str());
        prop_assert_eq!(machine.history().cursor(), cursor);
        prop_assert_eq!(machine.history().len(), len);
    }

    #[test]
    fn reset_and_clear_history_forget_everything(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        clear in any::<bool>(),
    ) {
        let mut machine = Machine::new(player());
        for op in &ops {
            apply(&mut machine, op);
        }

        if clear {
            machine.clear_history();
        } else {
            machine.reset();
        }

        prop_assert_eq!(machine.state(), "idle");
        prop_assert!(!machine.undo());
        prop_assert!(!machine.redo());
    }

    #[test]
    fn states_by_event_matches_config(event in arbitrary_event()) {
        let machine = Machine::new(player());
        let expected: Vec<&str> = machine
            .config()
            .states()
            .iter()
            .filter(|s| s.transitions.contains_key(event))
            .map(|s| s.name.as_str())
            .collect();

        prop_assert_eq!(machine.states(Some(event)), expected);
        prop_assert_eq!(machine.states(None), STATES.to_vec());
    }

    #[test]
    fn path_ends_at_current_state(ops in prop::collection::vec(arbitrary_op(), 0..30)) {
        let mut machine = Machine::new(player());
        for op in &ops {
            apply(&mut machine, op);
        }

        let path = machine.history().path();
        prop_assert_eq!(path.first().copied(), Some("idle"));
        prop_assert_eq!(path.last().copied(), Some(machine.state()));
        prop_assert_eq!(path.len(), machine.history().cursor() + 1);
    }
}

#[test]
fn documented_walkthrough() {
    let mut machine = Machine::new(player());
    assert_eq!(machine.state(), "idle");

    machine.trigger("run").unwrap();
    assert_eq!(machine.state(), "running");
    machine.trigger("pause").unwrap();
    assert_eq!(machine.state(), "paused");

    assert!(machine.undo());
    assert_eq!(machine.state(), "running");
    assert!(machine.undo());
    assert_eq!(machine.state(), "idle");
    assert!(!machine.undo());
    assert_eq!(machine.state(), "idle");

    assert!(machine.redo());
    assert_eq!(machine.state(), "running");
}
