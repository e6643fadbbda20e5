//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Recipe, RecipeShare};
use crate::domain::timeline::{RecipeTime, RecipeTimeline, TimelineSlot};

// ============================================================================
// Recipes
// ============================================================================

/// Recipe create request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    pub servings: Option<i32>,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    pub source_type: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Recipe representation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDto {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub servings: Option<i32>,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    pub source_type: String,
    pub tags: Vec<String>,
    pub is_favorite: bool,
    pub times_cooked: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Recipe> for RecipeDto {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.to_string(),
            user_id: recipe.user_id.clone(),
            title: recipe.title.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            servings: recipe.servings,
            prep_time_minutes: recipe.prep_time_minutes,
            cook_time_minutes: recipe.cook_time_minutes,
            source_type: recipe.source_type.as_str().to_string(),
            tags: recipe.tags.clone(),
            is_favorite: recipe.is_favorite,
            times_cooked: recipe.times_cooked,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        }
    }
}

// ============================================================================
// Shares
// ============================================================================

/// Share create request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShareRequest {
    pub created_by: String,
    pub expires_in_days: Option<i64>,
}

/// Share create response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareDto {
    pub share_id: String,
    pub recipe_id: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub views: i64,
    pub is_active: bool,
}

impl From<&RecipeShare> for ShareDto {
    fn from(share: &RecipeShare) -> Self {
        Self {
            share_id: share.share_id.clone(),
            recipe_id: share.recipe_id.to_string(),
            created_at: share.created_at,
            expires_at: share.expires_at,
            views: share.views,
            is_active: share.is_active,
        }
    }
}

/// Resolved share: the share record plus its recipe
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedRecipeResponse {
    pub share: ShareDto,
    pub recipe: RecipeDto,
}

// ============================================================================
// Timeline
// ============================================================================

/// Timeline calculation request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRequest {
    pub recipes: Vec<RecipeTime>,
    pub meal_time: DateTime<Utc>,
    /// Evaluate status/progress against this moment (default: now)
    pub now: Option<DateTime<Utc>>,
}

/// Timeline calculation response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineResponse {
    pub timelines: Vec<RecipeTimeline>,
    pub slots: Vec<TimelineSlot>,
    pub total_time_span_minutes: i64,
    pub total_time_span_label: String,
}
