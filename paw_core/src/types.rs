//! Core domain types for PawTracker.
//!
//! This module defines the fundamental types used throughout the system:
//! - Pet profiles
//! - Daily check-in records (meals, elimination, exercise, mood)
//! - Insights and their priority ordering

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Pet Profile
// ============================================================================

/// Species of pet; rule thresholds differ between them
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Dog,
    Cat,
}

impl PetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PetType::Dog => "dog",
            PetType::Cat => "cat",
        }
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A pet profile as supplied by the profile store
///
/// Breed, age and weight are free text from the onboarding form and are
/// not read by any rule.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PetProfile {
    pub name: String,
    pub pet_type: PetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

impl PetProfile {
    pub fn new(name: impl Into<String>, pet_type: PetType) -> Self {
        Self {
            name: name.into(),
            pet_type,
            breed: None,
            age: None,
            weight: None,
        }
    }
}

// ============================================================================
// Check-in Records
// ============================================================================

/// A single meal or snack entry
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FoodItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub amount: String,
}

/// Elimination counts and symptom flags for one day
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Elimination {
    pub poos: u32,
    pub pees: u32,
    pub vomit: bool,
    pub diarrhea: bool,
    pub blood: bool,
    pub other: String,
}

impl Elimination {
    /// True when any poo or pee was logged
    pub fn has_activity(&self) -> bool {
        self.poos > 0 || self.pees > 0
    }

    /// True when any symptom flag is set
    pub fn has_symptoms(&self) -> bool {
        self.vomit || self.diarrhea || self.blood
    }
}

/// Logged mood for one day
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Content,
    Anxious,
    Lethargic,
    Playful,
    Irritable,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Content => "content",
            Mood::Anxious => "anxious",
            Mood::Lethargic => "lethargic",
            Mood::Playful => "playful",
            Mood::Irritable => "irritable",
        }
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Mood::Anxious | Mood::Lethargic | Mood::Irritable)
    }

    pub fn is_positive(&self) -> bool {
        !self.is_negative()
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "happy" => Ok(Mood::Happy),
            "content" => Ok(Mood::Content),
            "anxious" => Ok(Mood::Anxious),
            "lethargic" => Ok(Mood::Lethargic),
            "playful" => Ok(Mood::Playful),
            "irritable" => Ok(Mood::Irritable),
            _ => Err(format!("Unknown mood: {}", s)),
        }
    }
}

/// One daily check-in for a pet
///
/// Optional fields model "not logged yet": a missing `exercise` or `mood`
/// never counts as zero.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckinRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub meals: Vec<FoodItem>,
    #[serde(default)]
    pub snacks: Vec<FoodItem>,
    #[serde(default)]
    pub elimination: Elimination,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise: Option<u8>,
    #[serde(
        default,
        deserialize_with = "empty_mood_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub notes: String,
}

impl CheckinRecord {
    /// An empty check-in for the given day
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            meals: Vec::new(),
            snacks: Vec::new(),
            elimination: Elimination::default(),
            exercise: None,
            mood: None,
            notes: String::new(),
        }
    }

    /// Reject values serde accepts but the engine cannot score
    ///
    /// Exercise must index into the five-step label scale.
    pub fn validate(&self) -> crate::Result<()> {
        match self.exercise {
            Some(value) if usize::from(value) >= crate::rules::EXERCISE_LABELS.len() => {
                Err(crate::Error::InvalidExercise {
                    date: self.date,
                    value,
                })
            }
            _ => Ok(()),
        }
    }
}

/// The entry form submits `""` for an untouched mood picker
fn empty_mood_as_none<'de, D>(deserializer: D) -> Result<Option<Mood>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

// ============================================================================
// Insights
// ============================================================================

/// Urgency of an insight
///
/// Variant order is the ranking order: `Urgent` sorts first.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
    Positive,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::Positive => "positive",
        }
    }

    /// Numeric rank for sorting (lower = more urgent)
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Urgent => 1,
            Priority::High => 2,
            Priority::Medium => 3,
            Priority::Low => 4,
            Priority::Positive => 5,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which rule family produced an insight
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum InsightKind {
    Onboarding,
    Diet,
    Exercise,
    Elimination,
    Health,
    Mood,
    DataQuality,
}

/// Display grouping for an insight
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum InsightCategory {
    GettingStarted,
    Nutrition,
    Activity,
    Health,
    Behavior,
    DataImprovement,
}

/// A single prioritized observation about a pet
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub priority: Priority,
    pub title: String,
    pub message: String,
    pub recommendation: String,
    pub icon: String,
    pub category: InsightCategory,
    /// Number of days backing the claim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_points: Option<usize>,
}
