// tests/session_engine_test.rs — Integration test: session engine timing and transitions

use std::sync::Arc;

use stovetop::cooking::progress::overall_progress_percent;
use stovetop::cooking::{SessionEngine, SessionStatus, Transition};
use stovetop::infra::clock::ManualClock;
use stovetop::recipes::{CookingSettings, Difficulty, Recipe, Step, StepKind};

fn recipe(durations: &[u32]) -> Recipe {
    let steps = durations
        .iter()
        .enumerate()
        .map(|(i, d)| Step {
            id: format!("step-{i}"),
            description: format!("Step {}", i + 1),
            duration_seconds: *d,
            kind: if i % 2 == 0 {
                StepKind::Cooking {
                    settings: CookingSettings {
                        temperature_c: 100,
                        speed: 2,
                    },
                }
            } else {
                StepKind::Instruction {
                    ingredient_ids: vec!["ing-1".into()],
                }
            },
        })
        .collect();
    Recipe {
        id: "recipe-1".into(),
        title: "Test".into(),
        cuisine: None,
        difficulty: Difficulty::Medium,
        favorite: false,
        ingredients: vec![],
        steps,
        total_time_minutes: 0,
        total_ingredients: 0,
        complexity_score: 0,
    }
}

fn engine() -> (SessionEngine, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(1_700_000_000_000));
    (SessionEngine::new(clock.clone()), clock)
}

/// Tick every `step_ms` until `total_ms` has passed.
fn tick_for(engine: &mut SessionEngine, clock: &ManualClock, r: &Recipe, total_ms: i64, step_ms: i64) {
    let mut passed = 0;
    while passed < total_ms {
        clock.advance(step_ms);
        passed += step_ms;
        engine.tick(r);
    }
}

#[test]
fn test_walks_through_two_steps_to_completion() {
    let (mut engine, clock) = engine();
    let r = recipe(&[60, 30]);

    engine.start(&r.id);
    assert_eq!(engine.status(), SessionStatus::Running);
    assert_eq!(engine.active().unwrap().step_index, 0);

    tick_for(&mut engine, &clock, &r, 60_000, 200);
    let s = engine.active().unwrap();
    assert_eq!(s.step_index, 1);
    assert_eq!(s.elapsed_ms_in_step, 0);
    assert_eq!(engine.status(), SessionStatus::Running);

    tick_for(&mut engine, &clock, &r, 30_000, 200);
    assert_eq!(engine.status(), SessionStatus::Completed);
    let s = engine.active().unwrap();
    assert_eq!(s.step_index, 1);
    assert_eq!(s.total_elapsed_ms, 90_000);
}

#[test]
fn test_paused_time_is_not_counted() {
    let (mut engine, clock) = engine();
    let r = recipe(&[60]);

    engine.start(&r.id);
    clock.advance(10_000);
    engine.pause();
    clock.advance(5_000);
    engine.resume();
    clock.advance(5_000);
    engine.tick(&r);

    assert_eq!(engine.active().unwrap().total_elapsed_ms, 15_000);
}

#[test]
fn test_resume_does_not_advance_time() {
    let (mut engine, clock) = engine();
    engine.start("recipe-1");
    clock.advance(2_500);
    engine.pause();
    let before = engine.active().unwrap().total_elapsed_ms;
    for _ in 0..4 {
        engine.resume();
        clock.advance(1_000);
        engine.pause();
        clock.advance(7_000);
        engine.resume();
        engine.pause();
    }
    // Each resume→pause pair with 1s running accrues exactly that second
    assert_eq!(engine.active().unwrap().total_elapsed_ms, before + 4_000);
}

#[test]
fn test_stop_skips_one_step_and_keeps_running() {
    let (mut engine, clock) = engine();
    let r = recipe(&[60, 30, 45]);
    engine.start(&r.id);
    clock.advance(4_000);
    engine.tick(&r);

    assert_eq!(engine.stop(&r), Transition::Advanced { step_index: 1 });
    let s = engine.active().unwrap();
    assert_eq!(s.step_index, 1);
    assert_eq!(s.elapsed_ms_in_step, 0);
    assert_eq!(s.total_elapsed_ms, 4_000);
    assert_eq!(engine.status(), SessionStatus::Running);

    assert_eq!(engine.stop(&r), Transition::Advanced { step_index: 2 });
    assert_eq!(engine.stop(&r), Transition::Completed);
    assert_eq!(engine.active().unwrap().step_index, 2);
}

#[test]
fn test_one_advance_per_tick_even_with_huge_delta() {
    let (mut engine, clock) = engine();
    let r = recipe(&[10, 10, 10]);
    engine.start(&r.id);

    clock.advance(45_000);
    assert_eq!(engine.tick(&r), Transition::Advanced { step_index: 1 });
    let s = engine.active().unwrap();
    assert_eq!(s.step_index, 1);
    assert_eq!(s.elapsed_ms_in_step, 0);
    assert_eq!(s.total_elapsed_ms, 45_000);
}

#[test]
fn test_completed_session_is_frozen() {
    let (mut engine, clock) = engine();
    let r = recipe(&[1]);
    engine.start(&r.id);
    clock.advance(1_000);
    assert_eq!(engine.tick(&r), Transition::Completed);

    clock.advance(60_000);
    assert_eq!(engine.tick(&r), Transition::Ignored);
    engine.pause();
    engine.resume();
    assert_eq!(engine.status(), SessionStatus::Completed);
    assert_eq!(engine.active().unwrap().total_elapsed_ms, 1_000);
}

#[test]
fn test_reset_from_every_state() {
    let (mut engine, clock) = engine();
    let r = recipe(&[1]);

    for setup in 0..4 {
        engine.start(&r.id);
        match setup {
            1 => engine.pause(),
            2 => {
                clock.advance(2_000);
                engine.tick(&r);
            }
            3 => engine.reset(),
            _ => {}
        }
        engine.reset();
        assert_eq!(engine.status(), SessionStatus::Idle);
        assert!(engine.active().is_none());
    }
}

#[test]
fn test_overall_progress_stays_in_range() {
    let (mut engine, clock) = engine();
    let r = recipe(&[5, 5]);
    engine.start(&r.id);
    for _ in 0..30 {
        clock.advance(700);
        engine.tick(&r);
        let pct = overall_progress_percent(engine.active().unwrap(), &r);
        assert!((0.0..=100.0).contains(&pct));
    }
    assert_eq!(engine.status(), SessionStatus::Completed);
}

#[test]
fn test_start_replaces_existing_session() {
    let (mut engine, clock) = engine();
    let r = recipe(&[60, 60]);
    engine.start(&r.id);
    clock.advance(5_000);
    engine.stop(&r);

    engine.start("other");
    let s = engine.active().unwrap();
    assert_eq!(s.recipe_id, "other");
    assert_eq!(s.step_index, 0);
    assert_eq!(s.total_elapsed_ms, 0);
}
