//! Data completeness report for the recent window.

use crate::CheckinRecord;
use serde::Serialize;

/// Percentage of recent days on which each category was logged
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Completeness {
    pub meals: f64,
    pub exercise: f64,
    pub elimination: f64,
    pub mood: f64,
}

/// Summary of how much usable data a window holds
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataQuality {
    pub total_days: usize,
    pub completeness: Completeness,
}

impl DataQuality {
    /// Compute completeness over a window of check-ins
    ///
    /// An empty window reports 0% for every category.
    pub fn from_window(window: &[CheckinRecord]) -> Self {
        let total_days = window.len();
        let pct = |qualifying: usize| {
            if total_days == 0 {
                0.0
            } else {
                qualifying as f64 / total_days as f64 * 100.0
            }
        };

        let meals = window.iter().filter(|c| !c.meals.is_empty()).count();
        let exercise = window.iter().filter(|c| c.exercise.is_some()).count();
        let elimination = window
            .iter()
            .filter(|c| c.elimination.has_activity())
            .count();
        let mood = window.iter().filter(|c| c.mood.is_some()).count();

        Self {
            total_days,
            completeness: Completeness {
                meals: pct(meals),
                exercise: pct(exercise),
                elimination: pct(elimination),
                mood: pct(mood),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FoodItem, Mood};
    use chrono::NaiveDate;

    #[test]
    fn test_completeness_percentages() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let mut logged = CheckinRecord::new(date);
        logged.meals.push(FoodItem::default());
        logged.exercise = Some(0);
        logged.mood = Some(Mood::Happy);
        logged.elimination.pees = 1;

        let window = vec![
            logged,
            CheckinRecord::new(date),
            CheckinRecord::new(date),
            CheckinRecord::new(date),
        ];
        let quality = DataQuality::from_window(&window);

        assert_eq!(quality.total_days, 4);
        assert_eq!(quality.completeness.meals, 25.0);
        assert_eq!(quality.completeness.exercise, 25.0);
        assert_eq!(quality.completeness.elimination, 25.0);
        assert_eq!(quality.completeness.mood, 25.0);
    }

    #[test]
    fn test_empty_window_is_zero() {
        let quality = DataQuality::from_window(&[]);
        assert_eq!(quality.total_days, 0);
        assert_eq!(quality.completeness.meals, 0.0);
    }
}
