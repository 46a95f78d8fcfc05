//! Balance of negative versus positive moods.

use super::{Rule, RuleContext};
use crate::{Insight, InsightCategory, InsightKind, Priority, Result};

/// Days with a logged mood needed before judging mood balance
pub const MIN_MOOD_DAYS: usize = 3;

pub struct MoodRule;

impl Rule for MoodRule {
    fn name(&self) -> &'static str {
        "mood"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Insight>> {
        let moods: Vec<_> = ctx.recent.iter().filter_map(|c| c.mood).collect();

        if moods.len() < MIN_MOOD_DAYS {
            tracing::debug!(
                "Mood: {} mood days (< {}), skipping",
                moods.len(),
                MIN_MOOD_DAYS
            );
            return Ok(Vec::new());
        }

        let negative = moods.iter().filter(|m| m.is_negative()).count();
        let positive = moods.iter().filter(|m| m.is_positive()).count();

        if negative <= positive {
            return Ok(Vec::new());
        }

        Ok(vec![Insight {
            kind: InsightKind::Mood,
            priority: Priority::Medium,
            title: "Mood Concerns".into(),
            message: format!(
                "{} has shown more negative moods ({}) than positive ones ({}) over {} days.",
                ctx.pet.name,
                negative,
                positive,
                moods.len()
            ),
            recommendation: "Consider increasing exercise, play time, or environmental enrichment."
                .into(),
            icon: "😔".into(),
            category: InsightCategory::Behavior,
            data_points: Some(moods.len()),
        }])
    }
}
