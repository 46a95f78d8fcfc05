//! Rule battery for insight generation.
//!
//! Each rule inspects the check-in windows independently and returns zero or
//! more insights. Rules gate themselves on a minimum number of qualifying
//! days (days on which the field they read was actually logged):
//!
//! | rule        | qualifying days | window  |
//! |-------------|-----------------|---------|
//! | diet        | 3               | 7-day   |
//! | exercise    | 3               | 7-day   |
//! | elimination | 2               | 7-day   |
//! | health      | none            | 7-day   |
//! | mood        | 3               | 7-day   |
//! | trends      | 7               | 14-day  |
//!
//! Data completeness runs whenever the recent window holds 3 or more days.

mod completeness;
mod diet;
mod elimination;
mod exercise;
mod mood;
mod trends;

pub use completeness::DataCompletenessRule;
pub use diet::DietRule;
pub use elimination::{EliminationRule, HealthRule};
pub use exercise::{exercise_label, ExerciseRule, EXERCISE_LABELS};
pub use mood::MoodRule;
pub use trends::WeeklyTrendsRule;

use crate::{CheckinRecord, Insight, PetProfile, Result};

/// Read-only inputs shared by every rule
#[derive(Clone, Copy, Debug)]
pub struct RuleContext<'a> {
    pub pet: &'a PetProfile,
    /// Last 7 days, newest first
    pub recent: &'a [CheckinRecord],
    /// Last 14 days, newest first
    pub trend: &'a [CheckinRecord],
}

/// A single category of analysis
pub trait Rule {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Produce this rule's insights for the given context
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Insight>>;
}

/// The fixed rule battery, in evaluation order
///
/// Ranking is stable, so this order breaks ties between equal priorities.
pub fn default_battery() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(DietRule),
        Box::new(ExerciseRule),
        Box::new(EliminationRule),
        Box::new(HealthRule),
        Box::new(MoodRule),
        Box::new(WeeklyTrendsRule),
        Box::new(DataCompletenessRule),
    ]
}

/// Arithmetic mean, 0 for an empty input
fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::{CheckinRecord, FoodItem, Mood, PetProfile, PetType};
    use chrono::{Duration, NaiveDate};

    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
    }

    pub fn dog() -> PetProfile {
        PetProfile::new("Rex", PetType::Dog)
    }

    pub fn cat() -> PetProfile {
        PetProfile::new("Luna", PetType::Cat)
    }

    /// Blank check-in `days_ago` days before `today()`
    pub fn checkin(days_ago: i64) -> CheckinRecord {
        CheckinRecord::new(today() - Duration::days(days_ago))
    }

    pub fn food(count: usize) -> Vec<FoodItem> {
        (0..count)
            .map(|i| FoodItem {
                name: format!("item {}", i),
                time: "08:00".into(),
                amount: "1 cup".into(),
            })
            .collect()
    }

    pub fn with_meals(days_ago: i64, meals: usize) -> CheckinRecord {
        let mut c = checkin(days_ago);
        c.meals = food(meals);
        c
    }

    pub fn with_exercise(days_ago: i64, exercise: u8) -> CheckinRecord {
        let mut c = checkin(days_ago);
        c.exercise = Some(exercise);
        c
    }

    pub fn with_mood(days_ago: i64, mood: Mood) -> CheckinRecord {
        let mut c = checkin(days_ago);
        c.mood = Some(mood);
        c
    }
}
