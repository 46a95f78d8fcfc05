//! Nudges toward more consistent logging.

use super::{Rule, RuleContext};
use crate::{DataQuality, Insight, InsightCategory, InsightKind, Priority, Result};

/// Recent days needed before completeness is judged
pub const MIN_COMPLETENESS_DAYS: usize = 3;

const MEAL_COMPLETENESS_TARGET: f64 = 60.0;
const MOOD_COMPLETENESS_TARGET: f64 = 50.0;

pub struct DataCompletenessRule;

impl Rule for DataCompletenessRule {
    fn name(&self) -> &'static str {
        "data_completeness"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Insight>> {
        let quality = DataQuality::from_window(ctx.recent);
        let mut insights = Vec::new();

        if quality.total_days < MIN_COMPLETENESS_DAYS {
            return Ok(insights);
        }

        let completeness = &quality.completeness;

        if completeness.meals < MEAL_COMPLETENESS_TARGET {
            insights.push(Insight {
                kind: InsightKind::DataQuality,
                priority: Priority::Low,
                title: "Improve Meal Tracking".into(),
                message: format!(
                    "Meals are logged in only {}% of your check-ins.",
                    completeness.meals.round()
                ),
                recommendation: "Try to log meals more consistently to get better nutrition \
                                 insights."
                    .into(),
                icon: "🍽️".into(),
                category: InsightCategory::DataImprovement,
                data_points: None,
            });
        }

        if completeness.mood < MOOD_COMPLETENESS_TARGET {
            insights.push(Insight {
                kind: InsightKind::DataQuality,
                priority: Priority::Low,
                title: "Track Mood More Often".into(),
                message: format!(
                    "Mood is logged in only {}% of your check-ins.",
                    completeness.mood.round()
                ),
                recommendation: "Recording your pet's daily mood helps identify behavior \
                                 patterns."
                    .into(),
                icon: "😊".into(),
                category: InsightCategory::DataImprovement,
                data_points: None,
            });
        }

        Ok(insights)
    }
}
