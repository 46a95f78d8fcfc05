//! Elimination frequency and health symptom checks.

use super::{mean, Rule, RuleContext};
use crate::{Insight, InsightCategory, InsightKind, PetType, Priority, Result};

/// Days with any elimination activity needed before judging frequency
pub const MIN_ELIMINATION_DAYS: usize = 2;

const DOG_MIN_POOS: f64 = 1.0;

pub struct EliminationRule;

impl Rule for EliminationRule {
    fn name(&self) -> &'static str {
        "elimination"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Insight>> {
        let active_days: Vec<_> = ctx
            .recent
            .iter()
            .filter(|c| c.elimination.has_activity())
            .collect();

        if active_days.len() < MIN_ELIMINATION_DAYS {
            tracing::debug!(
                "Elimination: {} active days (< {}), skipping",
                active_days.len(),
                MIN_ELIMINATION_DAYS
            );
            return Ok(Vec::new());
        }

        let pet = ctx.pet;
        let avg_poos = mean(active_days.iter().map(|c| f64::from(c.elimination.poos)));

        if pet.pet_type == PetType::Dog && avg_poos < DOG_MIN_POOS {
            return Ok(vec![Insight {
                kind: InsightKind::Elimination,
                priority: Priority::High,
                title: "Low Poop Frequency".into(),
                message: format!(
                    "{} is averaging {:.1} poops per day over {} days.",
                    pet.name,
                    avg_poos,
                    active_days.len()
                ),
                recommendation: "Dogs typically poop 1-3 times daily. Consider increasing fiber \
                                 or consulting your vet."
                    .into(),
                icon: "💩".into(),
                category: InsightCategory::Health,
                data_points: Some(active_days.len()),
            }]);
        }

        Ok(Vec::new())
    }
}

/// Vomiting, diarrhea or blood on any recent day
///
/// Not gated: a single day with a symptom is enough.
pub struct HealthRule;

impl Rule for HealthRule {
    fn name(&self) -> &'static str {
        "health"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Insight>> {
        let concern_days: Vec<_> = ctx
            .recent
            .iter()
            .filter(|c| c.elimination.has_symptoms())
            .collect();

        if concern_days.is_empty() {
            return Ok(Vec::new());
        }

        let mut symptoms = Vec::new();
        if concern_days.iter().any(|c| c.elimination.vomit) {
            symptoms.push("vomiting");
        }
        if concern_days.iter().any(|c| c.elimination.diarrhea) {
            symptoms.push("diarrhea");
        }
        if concern_days.iter().any(|c| c.elimination.blood) {
            symptoms.push("blood in stool/urine");
        }

        tracing::info!(
            "Health: {} symptom day(s) for {}: {:?}",
            concern_days.len(),
            ctx.pet.name,
            symptoms
        );

        Ok(vec![Insight {
            kind: InsightKind::Health,
            priority: Priority::Urgent,
            title: "Health Concerns Detected".into(),
            message: format!(
                "{} has shown {} over {} day(s).",
                ctx.pet.name,
                symptoms.join(", "),
                concern_days.len()
            ),
            recommendation: "Contact your veterinarian for guidance, especially if symptoms \
                             persist."
                .into(),
            icon: "⚠️".into(),
            category: InsightCategory::Health,
            data_points: None,
        }])
    }
}
