//! Domain Entities

use chrono::{DateTime, Duration, Utc};
use kernel::id::RecipeId;
use nid::Nanoid;
use serde::{Deserialize, Serialize};

/// Where a recipe came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Manual,
    Web,
    Book,
    Person,
}

impl SourceType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SourceType::Manual => "manual",
            SourceType::Web => "web",
            SourceType::Book => "book",
            SourceType::Person => "person",
        }
    }

    pub fn from_str_or_manual(s: &str) -> Self {
        match s {
            "web" => SourceType::Web,
            "book" => SourceType::Book,
            "person" => SourceType::Person,
            _ => SourceType::Manual,
        }
    }
}

/// A stored recipe
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: RecipeId,
    pub user_id: String,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub servings: Option<i32>,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    pub source_type: SourceType,
    pub tags: Vec<String>,
    pub is_favorite: bool,
    pub times_cooked: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Recipe creation input, pre-validation
pub struct NewRecipe {
    pub user_id: String,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub servings: Option<i32>,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    pub source_type: SourceType,
    pub tags: Vec<String>,
}

impl NewRecipe {
    /// Validate required fields
    ///
    /// Runs before any write: a recipe missing a title, ingredients, or
    /// instructions never reaches storage.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title is required".to_string());
        }
        if self.ingredients.is_empty() || self.ingredients.iter().all(|i| i.trim().is_empty()) {
            return Err("at least one ingredient is required".to_string());
        }
        if self.instructions.is_empty() || self.instructions.iter().all(|i| i.trim().is_empty()) {
            return Err("at least one instruction is required".to_string());
        }
        Ok(())
    }

    pub fn into_recipe(self) -> Recipe {
        let now = Utc::now();
        Recipe {
            id: RecipeId::new(),
            user_id: self.user_id,
            title: self.title,
            ingredients: self.ingredients,
            instructions: self.instructions,
            servings: self.servings,
            prep_time_minutes: self.prep_time_minutes,
            cook_time_minutes: self.cook_time_minutes,
            source_type: self.source_type,
            tags: self.tags,
            is_favorite: false,
            times_cooked: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Share-link ID length (URL-friendly Nanoid)
pub type ShareNanoid = Nanoid<8>;

/// A public share link for one recipe
///
/// Lives in its own table so anonymous viewers never touch the recipe
/// owner's data directly. Can be deactivated without deleting.
#[derive(Debug, Clone)]
pub struct RecipeShare {
    pub share_id: String,
    pub recipe_id: RecipeId,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub views: i64,
    pub is_active: bool,
}

impl RecipeShare {
    pub fn new(recipe_id: RecipeId, created_by: String, expires_in_days: Option<i64>) -> Self {
        let now = Utc::now();
        Self {
            share_id: ShareNanoid::new().to_string(),
            recipe_id,
            created_by,
            created_at: now,
            expires_at: expires_in_days.map(|days| now + Duration::days(days)),
            views: 0,
            is_active: true,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| at < Utc::now())
    }

    /// Whether an anonymous viewer may resolve this share
    pub fn is_viewable(&self) -> bool {
        self.is_active && !self.is_expired()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_recipe() -> NewRecipe {
        NewRecipe {
            user_id: "user-1".into(),
            title: "Braised Leeks".into(),
            ingredients: vec!["4 leeks".into(), "2 tbsp butter".into()],
            instructions: vec!["Trim the leeks".into(), "Braise 40 minutes".into()],
            servings: Some(4),
            prep_time_minutes: Some(15),
            cook_time_minutes: Some(40),
            source_type: SourceType::Person,
            tags: vec!["side".into()],
        }
    }

    #[test]
    fn test_valid_recipe_passes() {
        assert!(new_recipe().validate().is_ok());
    }

    #[test]
    fn test_missing_title_fails() {
        let mut r = new_recipe();
        r.title = "  ".into();
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_empty_ingredients_fail() {
        let mut r = new_recipe();
        r.ingredients.clear();
        assert!(r.validate().is_err());

        let mut r = new_recipe();
        r.ingredients = vec!["".into(), "  ".into()];
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_empty_instructions_fail() {
        let mut r = new_recipe();
        r.instructions.clear();
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_share_id_is_eight_chars() {
        let share = RecipeShare::new(RecipeId::new(), "user-1".into(), None);
        assert_eq!(share.share_id.len(), 8);
        assert!(share.is_viewable());
    }

    #[test]
    fn test_share_without_expiry_never_expires() {
        let share = RecipeShare::new(RecipeId::new(), "user-1".into(), None);
        assert!(!share.is_expired());
    }

    #[test]
    fn test_expired_share_not_viewable() {
        let mut share = RecipeShare::new(RecipeId::new(), "user-1".into(), Some(7));
        share.expires_at = Some(Utc::now() - Duration::hours(1));
        assert!(share.is_expired());
        assert!(!share.is_viewable());
    }

    #[test]
    fn test_deactivated_share_not_viewable() {
        let mut share = RecipeShare::new(RecipeId::new(), "user-1".into(), None);
        share.is_active = false;
        assert!(!share.is_viewable());
    }

    #[test]
    fn test_source_type_round_trip() {
        assert_eq!(SourceType::from_str_or_manual("book"), SourceType::Book);
        assert_eq!(SourceType::from_str_or_manual("bogus"), SourceType::Manual);
        assert_eq!(SourceType::Web.as_str(), "web");
    }
}
