// recipe.rs

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;

/// Bytes escaped when an identifier becomes one path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Compact recipe record shown as a card in the list view
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub categories: Vec<String>,
    pub calories: u32,
    pub estimated_time_min: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
    pub unit: String,
}

impl Ingredient {
    pub fn line(&self) -> String {
        format!("{} {} {}", self.amount, self.unit, self.name)
    }
}

/// Full recipe record as returned by the backend's detail endpoint
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub categories: Vec<String>,
    pub calories: u32,
    pub estimated_time_min: u32,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    pub source_url: String,
    pub language: String,
}

impl From<&Recipe> for RecipeSummary {
    fn from(r: &Recipe) -> Self {
        RecipeSummary {
            id: r.id.clone(),
            title: r.title.clone(),
            image_url: r.image_url.clone(),
            categories: r.categories.clone(),
            calories: r.calories,
            estimated_time_min: r.estimated_time_min,
        }
    }
}

impl RecipeSummary {
    /// Route of the detail screen for this recipe
    pub fn href(&self) -> String {
        detail_href(&self.id)
    }

    pub fn time_label(&self) -> String {
        time_label(self.estimated_time_min)
    }

    pub fn calories_label(&self) -> String {
        calories_label(self.calories)
    }
}

impl Recipe {
    pub fn time_label(&self) -> String {
        time_label(self.estimated_time_min)
    }

    pub fn calories_label(&self) -> String {
        calories_label(self.calories)
    }
}

fn time_label(minutes: u32) -> String {
    format!("🕒 {} min", minutes)
}

fn calories_label(calories: u32) -> String {
    format!("🔥 {} kcal", calories)
}

fn detail_href(id: &str) -> String {
    format!("/recipe/{}", utf8_percent_encode(id, PATH_SEGMENT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_summary_and_ignores_extra_fields() {
        let body = r#"{
            "id": "r1", "title": "Pancakes", "image_url": "http://img/p.jpg",
            "categories": ["breakfast", "sweet"], "calories": 350,
            "estimated_time_min": 20, "user_id": "u9", "created_at": "2024-01-01"
        }"#;
        let summary: RecipeSummary = serde_json::from_str(body).unwrap();
        assert_eq!(summary.id, "r1");
        assert_eq!(summary.categories, vec!["breakfast", "sweet"]);
        assert_eq!(summary.calories, 350);
    }

    #[test]
    fn negative_counts_are_rejected() {
        let body = r#"{"id": "r1", "title": "t", "image_url": "", "categories": [],
            "calories": -5, "estimated_time_min": 1}"#;
        assert!(serde_json::from_str::<RecipeSummary>(body).is_err());
    }

    #[test]
    fn summary_from_detail() {
        let recipe = Recipe {
            id: "r2".into(),
            title: "Soup".into(),
            image_url: "http://img/s.jpg".into(),
            categories: vec!["dinner".into()],
            calories: 120,
            estimated_time_min: 45,
            ingredients: vec![],
            steps: vec![],
            source_url: "http://example.com/soup".into(),
            language: "en".into(),
        };
        let summary = RecipeSummary::from(&recipe);
        assert_eq!(summary.id, "r2");
        assert_eq!(summary.estimated_time_min, 45);
    }

    #[test]
    fn ingredient_line_is_plain_interpolation() {
        let salt = Ingredient { name: "salt".into(), amount: "1".into(), unit: "tsp".into() };
        let eggs = Ingredient { name: "eggs".into(), amount: "2".into(), unit: "".into() };
        assert_eq!(salt.line(), "1 tsp salt");
        assert_eq!(eggs.line(), "2  eggs");
    }

    #[test]
    fn labels_and_href() {
        let mut summary = RecipeSummary {
            id: "65f0a1".into(),
            title: "Pancakes".into(),
            image_url: "".into(),
            categories: vec![],
            calories: 0,
            estimated_time_min: 15,
        };
        assert_eq!(summary.href(), "/recipe/65f0a1");
        assert_eq!(summary.time_label(), "🕒 15 min");
        assert_eq!(summary.calories_label(), "🔥 0 kcal");

        summary.id = "a b/c".into();
        assert_eq!(summary.href(), "/recipe/a%20b%2Fc");
        summary.id = "r-1_x.y~z".into();
        assert_eq!(summary.href(), "/recipe/r-1_x.y~z");
    }
}
