//! Week-over-week trend analysis over the 14-day window.

use super::{Rule, RuleContext};
use crate::{Insight, Result};

/// Days in the trend window needed before looking for trends
pub const MIN_TREND_DAYS: usize = 7;

/// Gated on the 14-day window; emits nothing yet
pub struct WeeklyTrendsRule;

impl Rule for WeeklyTrendsRule {
    fn name(&self) -> &'static str {
        "weekly_trends"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Insight>> {
        if ctx.trend.len() < MIN_TREND_DAYS {
            tracing::debug!(
                "Trends: {} days in trend window (< {}), skipping",
                ctx.trend.len(),
                MIN_TREND_DAYS
            );
            return Ok(Vec::new());
        }

        tracing::debug!("Trends: {} days available, no trend rules registered", ctx.trend.len());
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::*;

    #[test]
    fn test_trends_emit_nothing() {
        let pet = dog();
        let trend: Vec<_> = (0..14).map(|d| with_exercise(d, 0)).collect();
        let ctx = RuleContext {
            pet: &pet,
            recent: &trend[..8],
            trend: &trend,
        };
        assert!(WeeklyTrendsRule.evaluate(&ctx).unwrap().is_empty());
    }
}
