//! Meal frequency and treat consumption.

use super::{mean, Rule, RuleContext};
use crate::{Insight, InsightCategory, InsightKind, PetType, Priority, Result};

/// Qualifying meal days needed before judging meal frequency
pub const MIN_MEAL_DAYS: usize = 3;

/// Qualifying snack days needed before judging treats
pub const MIN_SNACK_DAYS: usize = 3;

const DOG_MIN_MEALS: f64 = 2.0;
const CAT_MIN_MEALS: f64 = 1.5;
const MAX_TREATS: f64 = 5.0;

pub struct DietRule;

impl Rule for DietRule {
    fn name(&self) -> &'static str {
        "diet"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Insight>> {
        let mut insights = Vec::new();
        let meal_days: Vec<_> = ctx.recent.iter().filter(|c| !c.meals.is_empty()).collect();

        if meal_days.len() < MIN_MEAL_DAYS {
            tracing::debug!(
                "Diet: {} meal days (< {}), skipping",
                meal_days.len(),
                MIN_MEAL_DAYS
            );
            return Ok(insights);
        }

        let pet = ctx.pet;
        let avg_meals = mean(meal_days.iter().map(|c| c.meals.len() as f64));

        match pet.pet_type {
            PetType::Dog if avg_meals < DOG_MIN_MEALS => insights.push(Insight {
                kind: InsightKind::Diet,
                priority: Priority::High,
                title: "Low Meal Frequency".into(),
                message: format!(
                    "{} is averaging {:.1} meals per day over {} days.",
                    pet.name,
                    avg_meals,
                    meal_days.len()
                ),
                recommendation: "Most dogs need 2-3 meals daily. Consider splitting food into \
                                 more frequent, smaller meals."
                    .into(),
                icon: "🍽️".into(),
                category: InsightCategory::Nutrition,
                data_points: Some(meal_days.len()),
            }),
            PetType::Cat if avg_meals < CAT_MIN_MEALS => insights.push(Insight {
                kind: InsightKind::Diet,
                priority: Priority::Medium,
                title: "Meal Frequency Check".into(),
                message: format!(
                    "{} is averaging {:.1} meals per day over {} days.",
                    pet.name,
                    avg_meals,
                    meal_days.len()
                ),
                recommendation: "Cats typically do well with 2-4 smaller meals throughout the day."
                    .into(),
                icon: "🍽️".into(),
                category: InsightCategory::Nutrition,
                data_points: Some(meal_days.len()),
            }),
            _ => {}
        }

        // Treats are only judged on days that also logged meals
        let snack_days: Vec<_> = meal_days
            .iter()
            .filter(|c| !c.snacks.is_empty())
            .collect();

        if snack_days.len() >= MIN_SNACK_DAYS {
            let avg_treats = mean(snack_days.iter().map(|c| c.snacks.len() as f64));

            if avg_treats > MAX_TREATS {
                insights.push(Insight {
                    kind: InsightKind::Diet,
                    priority: Priority::Medium,
                    title: "High Treat Consumption".into(),
                    message: format!(
                        "{} is getting {:.1} treats per day on average.",
                        pet.name, avg_treats
                    ),
                    recommendation: "Treats should make up less than 10% of daily calories. \
                                     Consider reducing portions."
                        .into(),
                    icon: "🦴".into(),
                    category: InsightCategory::Nutrition,
                    data_points: Some(snack_days.len()),
                });
            }
        }

        Ok(insights)
    }
}
