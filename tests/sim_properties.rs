//! Property tests for the simulation invariants

use proptest::prelude::*;

use sky_hop::sim::{GameState, PlatformKind, TickInput, tick};

fn tick_input() -> impl Strategy<Value = TickInput> {
    any::<[bool; 5]>().prop_map(|[left, right, charge_held, charge_pressed, charge_released]| {
        TickInput {
            left,
            right,
            charge_held,
            charge_pressed,
            charge_released,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn invariants_hold_every_tick(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 1..400),
    ) {
        let mut state = GameState::new(seed);
        let max_jump = state.tuning.max_jump_power;
        let interval = state.tuning.obstacle_score_interval;

        for input in &inputs {
            let score_before = state.score;
            let report = tick(&mut state, input);

            prop_assert!(state.platforms.len() <= state.tuning.max_platforms);
            prop_assert!(state.player.charge >= 0.0 && state.player.charge <= max_jump);
            prop_assert!(state.player.pos.x >= 0.0);
            prop_assert!(state.player.pos.x <= state.tuning.view_width - state.player.size.x);

            // Vanished platforms are dropped in the same tick they vanish
            for platform in &state.platforms {
                prop_assert!(!platform.is_gone());
                if let PlatformKind::Disappearing { timer, .. } = platform.kind {
                    prop_assert!(timer <= state.tuning.disappear_ticks);
                }
            }
            for obstacle in &state.obstacles {
                prop_assert!(obstacle.pos.y <= state.tuning.view_height);
            }

            prop_assert_eq!(state.score, score_before + report.climbed as u64);
            prop_assert_eq!(
                report.obstacle_spawned,
                report.climbed && state.score % interval == 0
            );

            if state.is_over() {
                break;
            }
        }
    }

    #[test]
    fn frozen_state_never_changes(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 1..50),
    ) {
        let mut state = GameState::new(seed);
        state.player.pos.y = state.tuning.view_height + 1.0;
        tick(&mut state, &TickInput::default());
        prop_assert!(state.is_over());

        let before = state.snapshot();
        for input in &inputs {
            tick(&mut state, input);
        }
        prop_assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn same_seed_same_run(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 1..200),
    ) {
        let mut a = GameState::new(seed);
        let mut b = GameState::new(seed);
        for input in &inputs {
            tick(&mut a, input);
            tick(&mut b, input);
        }
        prop_assert_eq!(a.snapshot(), b.snapshot());
    }
}
