//! Activity level and sustained low-activity streaks.

use super::{mean, Rule, RuleContext};
use crate::{
    CheckinRecord, Error, Insight, InsightCategory, InsightKind, PetType, Priority, Result,
};

/// Labels for the 0..=4 exercise scale
pub const EXERCISE_LABELS: [&str; 5] = [
    "Not at all",
    "Light",
    "Moderate",
    "Active",
    "Above Average",
];

/// Qualifying exercise days needed before judging activity
pub const MIN_EXERCISE_DAYS: usize = 3;

/// Qualifying exercise days needed before looking for streaks
pub const MIN_STREAK_DAYS: usize = 5;

const DOG_MIN_AVG: f64 = 1.5;
const LOW_SCORE: u8 = 1;
const STREAK_ALERT: usize = 3;

/// Assumed score for a day without an exercise entry, streak scan only
const STREAK_DEFAULT_SCORE: u8 = 2;

/// Look up the label for an exercise score
pub fn exercise_label(score: usize) -> Result<&'static str> {
    EXERCISE_LABELS
        .get(score)
        .copied()
        .ok_or(Error::ExerciseLabel(score))
}

/// Count of consecutive most-recent days with exercise at or below "Light"
///
/// Days without an exercise entry are scored as "Moderate" here, which ends
/// the streak. Every other exercise statistic skips such days instead.
pub fn consecutive_low_days(recent: &[CheckinRecord]) -> usize {
    recent
        .iter()
        .take_while(|c| c.exercise.unwrap_or(STREAK_DEFAULT_SCORE) <= LOW_SCORE)
        .count()
}

pub struct ExerciseRule;

impl Rule for ExerciseRule {
    fn name(&self) -> &'static str {
        "exercise"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Insight>> {
        let mut insights = Vec::new();
        let scores: Vec<u8> = ctx.recent.iter().filter_map(|c| c.exercise).collect();

        if scores.len() < MIN_EXERCISE_DAYS {
            tracing::debug!(
                "Exercise: {} exercise days (< {}), skipping",
                scores.len(),
                MIN_EXERCISE_DAYS
            );
            return Ok(insights);
        }

        let pet = ctx.pet;
        let avg = mean(scores.iter().map(|&s| f64::from(s)));

        if pet.pet_type == PetType::Dog && avg < DOG_MIN_AVG {
            let label = exercise_label(avg.round() as usize)?;
            insights.push(Insight {
                kind: InsightKind::Exercise,
                priority: Priority::High,
                title: "Low Activity Level".into(),
                message: format!(
                    "{} is averaging \"{}\" exercise over {} days.",
                    pet.name,
                    label,
                    scores.len()
                ),
                recommendation: "Dogs need regular exercise for physical and mental health. \
                                 Start with short walks."
                    .into(),
                icon: "🏃".into(),
                category: InsightCategory::Activity,
                data_points: Some(scores.len()),
            });
        }

        if scores.len() >= MIN_STREAK_DAYS {
            let streak = consecutive_low_days(ctx.recent);
            tracing::debug!("Exercise: {} consecutive low days", streak);

            if streak >= STREAK_ALERT {
                insights.push(Insight {
                    kind: InsightKind::Exercise,
                    priority: Priority::Medium,
                    title: "Extended Low Activity Period".into(),
                    message: format!(
                        "{} has had {} consecutive days of minimal exercise.",
                        pet.name, streak
                    ),
                    recommendation: "Consider increasing physical activity to prevent weight \
                                     gain and behavioral issues."
                        .into(),
                    icon: "📉".into(),
                    category: InsightCategory::Activity,
                    data_points: None,
                });
            }
        }

        Ok(insights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::*;

    fn run(pet: &crate::PetProfile, recent: &[CheckinRecord]) -> Vec<Insight> {
        let ctx = RuleContext {
            pet,
            recent,
            trend: recent,
        };
        ExerciseRule.evaluate(&ctx).unwrap()
    }

    fn titles(insights: &[Insight]) -> Vec<&str> {
        insights.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn test_label_lookup() {
        assert_eq!(exercise_label(0).unwrap(), "Not at all");
        assert_eq!(exercise_label(4).unwrap(), "Above Average");
        assert!(matches!(exercise_label(5), Err(Error::ExerciseLabel(5))));
    }

    #[test]
    fn test_low_activity_dog() {
        let recent = vec![
            with_exercise(0, 1),
            with_exercise(1, 0),
            with_exercise(2, 2),
            checkin(3),
        ];
        let insights = run(&dog(), &recent);

        assert_eq!(titles(&insights), vec!["Low Activity Level"]);
        assert_eq!(insights[0].data_points, Some(3));
        assert_eq!(
            insights[0].message,
            "Rex is averaging \"Light\" exercise over 3 days."
        );
    }

    #[test]
    fn test_zero_counts_as_logged() {
        let recent = vec![with_exercise(0, 0), with_exercise(1, 0), with_exercise(2, 0)];
        let insights = run(&dog(), &recent);
        assert_eq!(
            insights[0].message,
            "Rex is averaging \"Not at all\" exercise over 3 days."
        );
    }

    #[test]
    fn test_cats_not_judged_on_average() {
        let recent = vec![with_exercise(0, 0), with_exercise(1, 0), with_exercise(2, 0)];
        assert!(run(&cat(), &recent).is_empty());
    }

    #[test]
    fn test_extended_low_activity() {
        let mut recent = vec![
            with_exercise(0, 1),
            with_exercise(1, 0),
            with_exercise(2, 1),
            with_exercise(3, 4),
            with_exercise(4, 4),
        ];
        let insights = run(&dog(), &recent);
        assert_eq!(titles(&insights), vec!["Extended Low Activity Period"]);
        assert_eq!(
            insights[0].message,
            "Rex has had 3 consecutive days of minimal exercise."
        );

        // A good most-recent day breaks the streak
        recent[0].exercise = Some(3);
        assert_eq!(consecutive_low_days(&recent), 0);
        assert!(run(&dog(), &recent).is_empty());
    }

    #[test]
    fn test_streak_needs_five_exercise_days() {
        let recent = vec![
            with_exercise(0, 1),
            with_exercise(1, 1),
            with_exercise(2, 1),
            with_exercise(3, 4),
            checkin(4),
        ];
        let insights = run(&cat(), &recent);
        assert!(insights.is_empty());
    }

    #[test]
    fn test_missing_day_ends_streak() {
        let recent = vec![
            with_exercise(0, 1),
            checkin(1),
            with_exercise(2, 0),
            with_exercise(3, 0),
        ];
        assert_eq!(consecutive_low_days(&recent), 1);
    }
}
