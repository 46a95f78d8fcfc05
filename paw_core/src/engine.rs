//! Insight engine: windowing, rule evaluation and ranking.
//!
//! An engine is built per request from a pet profile, its check-in history
//! and an explicit reference date:
//!
//! 1. **Windowing** - derive the 7-day and 14-day windows once
//! 2. **Onboarding gate** - fewer than 2 recent check-ins short-circuits
//!    to a single onboarding insight
//! 3. **Rules** - run the fixed battery, each rule gating itself
//! 4. **Ranking** - stable sort by priority, emission order breaks ties

use crate::rules::{default_battery, Rule, RuleContext};
use crate::window::Windows;
use crate::{
    CheckinRecord, CheckinSource, DataQuality, Error, Insight, InsightCategory, InsightKind,
    PetProfile, Priority, ProfileSource, Result,
};
use chrono::{Duration, NaiveDate};

/// Recent check-ins required before any rule runs
pub const MIN_RECENT_CHECKINS: usize = 2;

/// Rule-based insight generator for one pet
#[derive(Clone, Debug)]
pub struct InsightEngine {
    pet: PetProfile,
    today: NaiveDate,
    windows: Windows,
}

impl InsightEngine {
    /// Build an engine, rejecting exercise scores outside the label scale
    pub fn new(pet: PetProfile, history: &[CheckinRecord], today: NaiveDate) -> Result<Self> {
        let windows = Windows::build(history, today);

        // The trend window contains the recent window
        for checkin in &windows.trend {
            checkin.validate()?;
        }

        Ok(Self {
            pet,
            today,
            windows,
        })
    }

    pub fn pet(&self) -> &PetProfile {
        &self.pet
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Check-ins from the last 7 days, newest first
    pub fn recent(&self) -> &[CheckinRecord] {
        &self.windows.recent
    }

    /// Check-ins from the last 14 days, newest first
    pub fn trend(&self) -> &[CheckinRecord] {
        &self.windows.trend
    }

    /// Completeness of the recent window
    pub fn data_quality(&self) -> DataQuality {
        DataQuality::from_window(&self.windows.recent)
    }

    /// Generate ranked insights using the default rule battery
    pub fn generate_insights(&self) -> Result<Vec<Insight>> {
        self.generate_with(&default_battery())
    }

    /// Generate ranked insights using a caller-supplied rule battery
    pub fn generate_with(&self, rules: &[Box<dyn Rule>]) -> Result<Vec<Insight>> {
        let recent = &self.windows.recent;

        if recent.is_empty() {
            tracing::info!("No recent check-ins for {}, returning onboarding", self.pet.name);
            return Ok(vec![start_journey()]);
        }

        if recent.len() < MIN_RECENT_CHECKINS {
            tracing::info!(
                "Only {} recent check-in(s) for {}, returning onboarding",
                recent.len(),
                self.pet.name
            );
            return Ok(vec![keep_building(recent.len())]);
        }

        let ctx = RuleContext {
            pet: &self.pet,
            recent,
            trend: &self.windows.trend,
        };

        let mut insights = Vec::new();
        for rule in rules {
            let found = rule.evaluate(&ctx)?;
            tracing::debug!("Rule {} produced {} insight(s)", rule.name(), found.len());
            insights.extend(found);
        }

        prioritize(&mut insights);

        tracing::info!(
            "Generated {} insight(s) for {} from {} recent check-ins",
            insights.len(),
            self.pet.name,
            recent.len()
        );

        Ok(insights)
    }
}

/// Sort insights most urgent first, keeping emission order within a priority
pub fn prioritize(insights: &mut [Insight]) {
    insights.sort_by_key(|i| i.priority);
}

/// One-shot convenience wrapper around [`InsightEngine`]
pub fn generate_insights(
    pet: &PetProfile,
    history: &[CheckinRecord],
    today: NaiveDate,
) -> Result<Vec<Insight>> {
    InsightEngine::new(pet.clone(), history, today)?.generate_insights()
}

/// Look up a pet, fetch its recent history and generate insights
///
/// `history_days` bounds the history query; the engine itself only looks
/// at the last 14 days of whatever it is given.
pub fn generate_pet_insights<P, C>(
    profiles: &P,
    checkins: &C,
    pet_id: &str,
    today: NaiveDate,
    history_days: i64,
) -> Result<Vec<Insight>>
where
    P: ProfileSource + ?Sized,
    C: CheckinSource + ?Sized,
{
    let engine = build_engine(profiles, checkins, pet_id, today, history_days)?;
    engine.generate_insights()
}

/// Look up a pet and its history and build an engine over them
pub fn build_engine<P, C>(
    profiles: &P,
    checkins: &C,
    pet_id: &str,
    today: NaiveDate,
    history_days: i64,
) -> Result<InsightEngine>
where
    P: ProfileSource + ?Sized,
    C: CheckinSource + ?Sized,
{
    let pet = profiles
        .load_profile(pet_id)?
        .ok_or_else(|| Error::PetNotFound(pet_id.to_string()))?;

    let since = today - Duration::days(history_days);
    let history = checkins.checkins_since(pet_id, since)?;

    tracing::debug!(
        "Loaded {} check-ins for {} since {}",
        history.len(),
        pet_id,
        since
    );

    InsightEngine::new(pet, &history, today)
}

fn start_journey() -> Insight {
    Insight {
        kind: InsightKind::Onboarding,
        priority: Priority::Medium,
        title: "Start Your Journey!".into(),
        message: "Begin daily check-ins to unlock personalized insights for your pet.".into(),
        recommendation: "Complete your first daily check-in to start building your pet's \
                         health profile."
            .into(),
        icon: "🌟".into(),
        category: InsightCategory::GettingStarted,
        data_points: None,
    }
}

fn keep_building(count: usize) -> Insight {
    Insight {
        kind: InsightKind::Onboarding,
        priority: Priority::Medium,
        title: "Keep Building Data".into(),
        message: format!(
            "You've completed {} check-in. Keep going to unlock insights!",
            count
        ),
        recommendation: "Complete a few more daily check-ins to start seeing personalized \
                         analytics."
            .into(),
        icon: "📈".into(),
        category: InsightCategory::GettingStarted,
        data_points: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::*;
    use crate::Mood;
    use std::collections::HashMap;

    fn generate(pet: &PetProfile, history: &[CheckinRecord]) -> Vec<Insight> {
        crate::logging::init_test();
        generate_insights(pet, history, today()).unwrap()
    }

    fn titles(insights: &[Insight]) -> Vec<&str> {
        insights.iter().map(|i| i.title.as_str()).collect()
    }

    fn assert_sorted(insights: &[Insight]) {
        for pair in insights.windows(2) {
            assert!(pair[0].priority.rank() <= pair[1].priority.rank());
        }
    }

    #[test]
    fn test_no_recent_checkins() {
        // Only stale history
        let history = vec![with_meals(10, 1), with_meals(20, 1)];
        let insights = generate(&dog(), &history);

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, "Start Your Journey!");
        assert_eq!(insights[0].priority, Priority::Medium);
        assert_eq!(insights[0].kind, InsightKind::Onboarding);
    }

    #[test]
    fn test_single_recent_checkin() {
        let mut only = checkin(0);
        only.elimination.blood = true;
        let insights = generate(&dog(), &[only, checkin(9)]);

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, "Keep Building Data");
        assert!(insights[0].message.contains('1'));
    }

    #[test]
    fn test_blood_is_urgent_with_sparse_data() {
        let mut bloody = checkin(5);
        bloody.elimination.blood = true;
        let history = vec![checkin(0), bloody];

        let insights = generate(&cat(), &history);
        let urgent: Vec<_> = insights
            .iter()
            .filter(|i| i.priority == Priority::Urgent)
            .collect();

        assert_eq!(urgent.len(), 1);
        assert_eq!(urgent[0].title, "Health Concerns Detected");
        assert!(urgent[0].message.contains("blood in stool/urine"));
    }

    #[test]
    fn test_full_week_ranked() {
        let mut history = Vec::new();
        for days_ago in 0..6 {
            let mut c = with_meals(days_ago, 1);
            c.exercise = Some(1);
            c.mood = Some(if days_ago % 2 == 0 { Mood::Anxious } else { Mood::Lethargic });
            c.elimination.pees = 2;
            history.push(c);
        }
        history[3].elimination.diarrhea = true;

        let insights = generate(&dog(), &history);
        assert_sorted(&insights);
        assert_eq!(
            titles(&insights),
            vec![
                "Health Concerns Detected",
                "Low Meal Frequency",
                "Low Activity Level",
                "Low Poop Frequency",
                "Extended Low Activity Period",
                "Mood Concerns",
            ]
        );
    }

    #[test]
    fn test_ties_keep_rule_order() {
        let mut history = Vec::new();
        for days_ago in 0..5 {
            let mut c = with_exercise(days_ago, 0);
            c.mood = Some(Mood::Irritable);
            history.push(c);
        }

        let insights = generate(&cat(), &history);
        assert_sorted(&insights);
        assert_eq!(
            titles(&insights),
            vec![
                "Extended Low Activity Period",
                "Mood Concerns",
                "Improve Meal Tracking",
            ]
        );
    }

    #[test]
    fn test_symptom_outside_recent_window_ignored() {
        for days_ago in 8..=14 {
            let mut bloody = checkin(days_ago);
            bloody.elimination.blood = true;
            let history = vec![checkin(0), checkin(1), bloody];

            let engine = InsightEngine::new(dog(), &history, today()).unwrap();
            assert_eq!(engine.recent().len(), 2);
            assert_eq!(engine.trend().len(), 3);

            let insights = engine.generate_insights().unwrap();
            assert!(
                insights.iter().all(|i| i.priority != Priority::Urgent
                    && i.title != "Health Concerns Detected"),
                "symptom {} days ago raised {:?}",
                days_ago,
                insights
            );
        }
    }

    #[test]
    fn test_idempotent() {
        let history = vec![with_meals(0, 1), with_meals(1, 1), with_meals(2, 1), checkin(3)];
        let engine = InsightEngine::new(dog(), &history, today()).unwrap();
        assert_eq!(
            engine.generate_insights().unwrap(),
            engine.generate_insights().unwrap()
        );
    }

    #[test]
    fn test_out_of_range_exercise_rejected() {
        let history = vec![with_exercise(0, 2), with_exercise(3, 7)];
        let err = InsightEngine::new(dog(), &history, today()).unwrap_err();
        assert!(matches!(err, Error::InvalidExercise { value: 7, .. }));
    }

    #[test]
    fn test_stale_out_of_range_exercise_ignored() {
        let history = vec![with_exercise(0, 2), with_exercise(30, 9)];
        assert!(InsightEngine::new(dog(), &history, today()).is_ok());
    }

    #[test]
    fn test_data_quality_report() {
        let history = vec![with_meals(0, 2), with_exercise(1, 3), checkin(2), checkin(3)];
        let engine = InsightEngine::new(dog(), &history, today()).unwrap();
        let quality = engine.data_quality();

        assert_eq!(quality.total_days, 4);
        assert_eq!(quality.completeness.meals, 25.0);
        assert_eq!(quality.completeness.exercise, 25.0);
    }

    struct MemoryStore {
        profiles: HashMap<String, PetProfile>,
        checkins: Vec<CheckinRecord>,
    }

    impl ProfileSource for MemoryStore {
        fn load_profile(&self, pet_id: &str) -> Result<Option<PetProfile>> {
            Ok(self.profiles.get(pet_id).cloned())
        }
    }

    impl CheckinSource for MemoryStore {
        fn checkins_since(&self, _pet_id: &str, since: NaiveDate) -> Result<Vec<CheckinRecord>> {
            Ok(self
                .checkins
                .iter()
                .filter(|c| c.date >= since)
                .cloned()
                .collect())
        }
    }

    #[test]
    fn test_generate_pet_insights_via_sources() {
        let store = MemoryStore {
            profiles: HashMap::from([("rex".to_string(), dog())]),
            checkins: vec![with_meals(0, 1), with_meals(1, 1), with_meals(2, 1)],
        };

        let insights = generate_pet_insights(&store, &store, "rex", today(), 30).unwrap();
        assert_eq!(insights[0].title, "Low Meal Frequency");
        assert_eq!(insights[0].data_points, Some(3));

        let err = generate_pet_insights(&store, &store, "ghost", today(), 30).unwrap_err();
        assert!(matches!(err, Error::PetNotFound(id) if id == "ghost"));
    }
}
