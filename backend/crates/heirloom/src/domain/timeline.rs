//! Dinner-Party Timeline Calculator
//!
//! Computes when to start each recipe so everything is ready at meal
//! time, working backwards from the target (reverse timeline). Pure
//! computation; no persistence.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Per-recipe timing input
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeTime {
    pub recipe_id: String,
    pub recipe_name: String,
    pub prep_time_minutes: i64,
    pub cook_time_minutes: i64,
    /// Whether this recipe's cook phase can overlap other recipes' cooking
    pub can_cook_simultaneously: bool,
}

impl RecipeTime {
    pub fn total_minutes(&self) -> i64 {
        self.prep_time_minutes + self.cook_time_minutes
    }
}

/// Cooking status of one scheduled recipe at a given moment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeStatus {
    Upcoming,
    Prep,
    Cooking,
    Completed,
}

/// One recipe's computed schedule
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeTimeline {
    pub recipe_id: String,
    pub recipe_name: String,
    pub start_time: DateTime<Utc>,
    pub prep_start_time: DateTime<Utc>,
    pub cook_start_time: DateTime<Utc>,
    pub finish_time: DateTime<Utc>,
    pub total_duration_minutes: i64,
    pub prep_time_minutes: i64,
    pub cook_time_minutes: i64,
    pub status: RecipeStatus,
    /// 0-100 within the current phase
    pub progress: f64,
}

/// One bar in the Gantt-style visualization
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSlot {
    pub recipe_id: String,
    pub recipe_name: String,
    pub phase: SlotPhase,
    /// Minutes from the earliest recipe start
    pub start_minutes: i64,
    pub duration_minutes: i64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotPhase {
    Prep,
    Cook,
}

const RECIPE_COLORS: [&str; 8] = [
    "#F59E0B", "#10B981", "#3B82F6", "#EF4444", "#8B5CF6", "#EC4899", "#F97316", "#14B8A6",
];

/// Schedule recipes backwards from `meal_time`
///
/// Longest total time first. Each recipe finishes at the current chain
/// end; a recipe that cannot cook simultaneously pulls the chain end
/// back to its own cook start, so the next recipe finishes before this
/// one occupies the oven. Output is sorted by start time, earliest
/// first.
pub fn calculate_timeline(recipes: &[RecipeTime], meal_time: DateTime<Utc>) -> Vec<RecipeTimeline> {
    let mut sorted: Vec<&RecipeTime> = recipes.iter().collect();
    sorted.sort_by_key(|r| std::cmp::Reverse(r.total_minutes()));

    let mut timelines = Vec::with_capacity(sorted.len());
    let mut chain_end = meal_time;

    for recipe in sorted {
        let finish_time = chain_end;
        let cook_start_time = finish_time - Duration::minutes(recipe.cook_time_minutes);
        let prep_start_time = cook_start_time - Duration::minutes(recipe.prep_time_minutes);

        timelines.push(RecipeTimeline {
            recipe_id: recipe.recipe_id.clone(),
            recipe_name: recipe.recipe_name.clone(),
            start_time: prep_start_time,
            prep_start_time,
            cook_start_time,
            finish_time,
            total_duration_minutes: recipe.total_minutes(),
            prep_time_minutes: recipe.prep_time_minutes,
            cook_time_minutes: recipe.cook_time_minutes,
            status: RecipeStatus::Upcoming,
            progress: 0.0,
        });

        if !recipe.can_cook_simultaneously {
            chain_end = cook_start_time;
        }
    }

    timelines.sort_by_key(|t| t.start_time);
    timelines
}

/// Re-derive status and progress for a moment in time
pub fn update_status(timelines: &mut [RecipeTimeline], now: DateTime<Utc>) {
    for timeline in timelines {
        let (status, progress) = if now >= timeline.finish_time {
            (RecipeStatus::Completed, 100.0)
        } else if now >= timeline.cook_start_time {
            let elapsed = (now - timeline.cook_start_time).num_seconds() as f64;
            let total = (timeline.finish_time - timeline.cook_start_time).num_seconds() as f64;
            (RecipeStatus::Cooking, phase_progress(elapsed, total))
        } else if now >= timeline.start_time {
            let elapsed = (now - timeline.start_time).num_seconds() as f64;
            let total = (timeline.cook_start_time - timeline.start_time).num_seconds() as f64;
            (RecipeStatus::Prep, phase_progress(elapsed, total))
        } else {
            (RecipeStatus::Upcoming, 0.0)
        };

        timeline.status = status;
        timeline.progress = progress;
    }
}

fn phase_progress(elapsed: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 100.0;
    }
    (elapsed / total * 100.0).min(100.0)
}

/// Convert schedules to Gantt bars (one prep + one cook per recipe)
pub fn timeline_slots(timelines: &[RecipeTimeline]) -> Vec<TimelineSlot> {
    let Some(first_start) = timelines.iter().map(|t| t.start_time).min() else {
        return Vec::new();
    };

    let mut slots = Vec::with_capacity(timelines.len() * 2);
    for (index, timeline) in timelines.iter().enumerate() {
        let color = RECIPE_COLORS[index % RECIPE_COLORS.len()];

        slots.push(TimelineSlot {
            recipe_id: timeline.recipe_id.clone(),
            recipe_name: timeline.recipe_name.clone(),
            phase: SlotPhase::Prep,
            start_minutes: (timeline.prep_start_time - first_start).num_minutes(),
            duration_minutes: timeline.prep_time_minutes,
            color,
        });
        slots.push(TimelineSlot {
            recipe_id: timeline.recipe_id.clone(),
            recipe_name: timeline.recipe_name.clone(),
            phase: SlotPhase::Cook,
            start_minutes: (timeline.cook_start_time - first_start).num_minutes(),
            duration_minutes: timeline.cook_time_minutes,
            color,
        });
    }

    slots
}

/// Span from the earliest start to the latest finish, in minutes
pub fn total_time_span(timelines: &[RecipeTimeline]) -> i64 {
    let Some(first_start) = timelines.iter().map(|t| t.start_time).min() else {
        return 0;
    };
    let last_finish = timelines
        .iter()
        .map(|t| t.finish_time)
        .max()
        .unwrap_or(first_start);

    (last_finish - first_start).num_minutes()
}

/// Format minutes as "2h 15m", "2h", or "45m"
pub fn format_duration(minutes: i64) -> String {
    if minutes < 60 {
        return format!("{minutes}m");
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {mins}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn meal_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 25, 18, 0, 0).unwrap()
    }

    fn recipe(id: &str, prep: i64, cook: i64, simultaneous: bool) -> RecipeTime {
        RecipeTime {
            recipe_id: id.to_string(),
            recipe_name: id.to_uppercase(),
            prep_time_minutes: prep,
            cook_time_minutes: cook,
            can_cook_simultaneously: simultaneous,
        }
    }

    #[test]
    fn test_single_recipe_ends_at_meal_time() {
        let timelines = calculate_timeline(&[recipe("roast", 20, 90, false)], meal_time());

        assert_eq!(timelines.len(), 1);
        let t = &timelines[0];
        assert_eq!(t.finish_time, meal_time());
        assert_eq!(t.cook_start_time, meal_time() - Duration::minutes(90));
        assert_eq!(t.prep_start_time, meal_time() - Duration::minutes(110));
        assert_eq!(t.start_time, t.prep_start_time);
        assert_eq!(t.total_duration_minutes, 110);
    }

    #[test]
    fn test_simultaneous_recipes_all_finish_at_meal_time() {
        let timelines = calculate_timeline(
            &[
                recipe("roast", 20, 90, true),
                recipe("gratin", 15, 45, true),
                recipe("salad", 10, 0, true),
            ],
            meal_time(),
        );

        for t in &timelines {
            assert_eq!(t.finish_time, meal_time(), "{}", t.recipe_id);
        }
    }

    #[test]
    fn test_exclusive_recipe_pulls_next_finish_back() {
        // Roast cannot share the oven; the gratin must be done before
        // the roast starts cooking.
        let timelines = calculate_timeline(
            &[recipe("roast", 20, 90, false), recipe("gratin", 15, 45, true)],
            meal_time(),
        );

        let roast = timelines.iter().find(|t| t.recipe_id == "roast").unwrap();
        let gratin = timelines.iter().find(|t| t.recipe_id == "gratin").unwrap();

        assert_eq!(roast.finish_time, meal_time());
        assert_eq!(gratin.finish_time, roast.cook_start_time);
    }

    #[test]
    fn test_longest_total_time_scheduled_first() {
        // The longest recipe anchors the chain at meal time even when
        // listed last.
        let timelines = calculate_timeline(
            &[recipe("quick", 5, 10, false), recipe("slow", 30, 120, false)],
            meal_time(),
        );

        let slow = timelines.iter().find(|t| t.recipe_id == "slow").unwrap();
        assert_eq!(slow.finish_time, meal_time());
    }

    #[test]
    fn test_output_sorted_by_start_time() {
        let timelines = calculate_timeline(
            &[
                recipe("a", 5, 10, true),
                recipe("b", 30, 120, false),
                recipe("c", 10, 40, true),
            ],
            meal_time(),
        );

        for pair in timelines.windows(2) {
            assert!(pair[0].start_time <= pair[1].start_time);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(calculate_timeline(&[], meal_time()).is_empty());
        assert_eq!(total_time_span(&[]), 0);
        assert!(timeline_slots(&[]).is_empty());
    }

    #[test]
    fn test_status_progression() {
        let mut timelines = calculate_timeline(&[recipe("roast", 20, 90, false)], meal_time());
        let t = timelines[0].clone();

        update_status(&mut timelines, t.start_time - Duration::minutes(5));
        assert_eq!(timelines[0].status, RecipeStatus::Upcoming);
        assert_eq!(timelines[0].progress, 0.0);

        update_status(&mut timelines, t.start_time + Duration::minutes(10));
        assert_eq!(timelines[0].status, RecipeStatus::Prep);
        assert!((timelines[0].progress - 50.0).abs() < 0.01);

        update_status(&mut timelines, t.cook_start_time + Duration::minutes(45));
        assert_eq!(timelines[0].status, RecipeStatus::Cooking);
        assert!((timelines[0].progress - 50.0).abs() < 0.01);

        update_status(&mut timelines, t.finish_time);
        assert_eq!(timelines[0].status, RecipeStatus::Completed);
        assert_eq!(timelines[0].progress, 100.0);
    }

    #[test]
    fn test_zero_prep_phase_does_not_divide_by_zero() {
        let mut timelines = calculate_timeline(&[recipe("stew", 0, 60, false)], meal_time());
        let start = timelines[0].start_time;
        update_status(&mut timelines, start);
        // With no prep phase the recipe jumps straight to cooking
        assert_eq!(timelines[0].status, RecipeStatus::Cooking);
    }

    #[test]
    fn test_slots_cover_prep_and_cook() {
        let timelines = calculate_timeline(
            &[recipe("roast", 20, 90, false), recipe("gratin", 15, 45, true)],
            meal_time(),
        );
        let slots = timeline_slots(&timelines);

        assert_eq!(slots.len(), 4);
        assert!(slots.iter().any(|s| s.phase == SlotPhase::Prep));
        assert!(slots.iter().any(|s| s.phase == SlotPhase::Cook));
        // Earliest slot starts at minute zero
        assert_eq!(slots.iter().map(|s| s.start_minutes).min(), Some(0));
    }

    #[test]
    fn test_total_time_span() {
        let timelines = calculate_timeline(
            &[recipe("roast", 20, 90, false), recipe("gratin", 15, 45, true)],
            meal_time(),
        );
        // Gratin finishes at roast cook start; roast spans 110 minutes,
        // gratin starts 60 before its finish, i.e. 150 before meal time.
        assert_eq!(total_time_span(&timelines), 150);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(60), "1h");
        assert_eq!(format_duration(135), "2h 15m");
    }
}
