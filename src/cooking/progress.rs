// src/cooking/progress.rs — Progress views derived from session + recipe
//
// Nothing here is stored; every value is recomputed from the counters.

use super::session::ActiveSession;
use crate::recipes::{Recipe, Step};

/// Everything a progress display needs, computed in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionProgress {
    pub overall_percent: f64,
    pub step_percent: f64,
    /// Negative briefly when a step has run out but the next tick hasn't
    /// advanced yet. Clamp before display.
    pub step_remaining_ms: i64,
    /// 1-based for display.
    pub step_number: usize,
    pub step_count: usize,
}

impl SessionProgress {
    pub fn compute(session: &ActiveSession, recipe: &Recipe) -> Self {
        Self {
            overall_percent: overall_progress_percent(session, recipe),
            step_percent: step_progress_percent(session, recipe),
            step_remaining_ms: step_remaining_ms(session, recipe),
            step_number: session.step_index + 1,
            step_count: recipe.steps.len(),
        }
    }

    pub fn current_step<'a>(&self, recipe: &'a Recipe) -> Option<&'a Step> {
        recipe.step(self.step_number.saturating_sub(1))
    }
}

fn percent(part: i64, whole: i64) -> f64 {
    if whole <= 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 100.0).clamp(0.0, 100.0)
}

pub fn overall_progress_percent(session: &ActiveSession, recipe: &Recipe) -> f64 {
    percent(session.total_elapsed_ms, recipe.total_duration_ms())
}

pub fn step_progress_percent(session: &ActiveSession, recipe: &Recipe) -> f64 {
    match recipe.step(session.step_index) {
        Some(step) => percent(session.elapsed_ms_in_step, step.duration_ms()),
        None => 0.0,
    }
}

pub fn step_remaining_ms(session: &ActiveSession, recipe: &Recipe) -> i64 {
    match recipe.step(session.step_index) {
        Some(step) => step.duration_ms() - session.elapsed_ms_in_step,
        None => 0,
    }
}

/// `m:ss`, rounding partial seconds up and showing negatives as 0:00.
pub fn format_remaining(ms: i64) -> String {
    let total = (ms.max(0) + 999) / 1000;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::{Difficulty, StepKind};

    fn recipe(durations: &[u32]) -> Recipe {
        Recipe {
            id: "r".into(),
            title: "R".into(),
            cuisine: None,
            difficulty: Difficulty::Easy,
            favorite: false,
            ingredients: vec![],
            steps: durations
                .iter()
                .map(|d| Step {
                    id: format!("s{d}"),
                    description: "x".into(),
                    duration_seconds: *d,
                    kind: StepKind::Instruction {
                        ingredient_ids: vec!["i".into()],
                    },
                })
                .collect(),
            total_time_minutes: 0,
            total_ingredients: 0,
            complexity_score: 0,
        }
    }

    fn session(step_index: usize, in_step: i64, total: i64) -> ActiveSession {
        ActiveSession {
            recipe_id: "r".into(),
            step_index,
            started_at_ms: 0,
            elapsed_ms_in_step: in_step,
            total_elapsed_ms: total,
        }
    }

    #[test]
    fn test_progress_midway() {
        let r = recipe(&[60, 30]);
        let p = SessionProgress::compute(&session(1, 15_000, 75_000), &r);
        assert!((p.overall_percent - 75_000.0 / 90_000.0 * 100.0).abs() < 1e-9);
        assert!((p.step_percent - 50.0).abs() < 1e-9);
        assert_eq!(p.step_remaining_ms, 15_000);
        assert_eq!(p.step_number, 2);
        assert_eq!(p.step_count, 2);
        assert_eq!(p.current_step(&r).unwrap().duration_seconds, 30);
    }

    #[test]
    fn test_overall_is_clamped() {
        let r = recipe(&[10]);
        assert_eq!(overall_progress_percent(&session(0, 0, 50_000), &r), 100.0);
        assert_eq!(step_progress_percent(&session(0, 50_000, 0), &r), 100.0);
    }

    #[test]
    fn test_remaining_may_go_negative() {
        let r = recipe(&[10]);
        assert_eq!(step_remaining_ms(&session(0, 10_150, 10_150), &r), -150);
    }

    #[test]
    fn test_zero_duration_recipe_reports_zero() {
        let r = recipe(&[]);
        let p = SessionProgress::compute(&session(0, 100, 100), &r);
        assert_eq!(p.overall_percent, 0.0);
        assert_eq!(p.step_percent, 0.0);
        assert_eq!(p.step_remaining_ms, 0);
    }

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(0), "0:00");
        assert_eq!(format_remaining(-500), "0:00");
        assert_eq!(format_remaining(1), "0:01");
        assert_eq!(format_remaining(59_001), "1:00");
        assert_eq!(format_remaining(125_000), "2:05");
    }
}
