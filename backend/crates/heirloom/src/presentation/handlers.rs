//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use chrono::Utc;
use kernel::id::RecipeId;
use uuid::Uuid;

use crate::domain::entities::{NewRecipe, RecipeShare, SourceType};
use crate::domain::repository::HeirloomRepository;
use crate::domain::timeline::{calculate_timeline, format_duration, timeline_slots, total_time_span, update_status};
use crate::error::{HeirloomError, HeirloomResult};
use crate::presentation::dto::{
    CreateRecipeRequest, CreateShareRequest, RecipeDto, ShareDto, SharedRecipeResponse,
    TimelineRequest, TimelineResponse,
};

/// Shared state for heirloom handlers
#[derive(Clone)]
pub struct HeirloomAppState<R>
where
    R: HeirloomRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

fn parse_recipe_id(raw: &str) -> HeirloomResult<RecipeId> {
    Uuid::parse_str(raw)
        .map(RecipeId::from_uuid)
        .map_err(|_| HeirloomError::Validation(format!("invalid recipe id: {raw}")))
}

// ============================================================================
// Recipes
// ============================================================================

/// POST /api/heirloom/recipes
pub async fn create_recipe<R>(
    State(state): State<HeirloomAppState<R>>,
    Json(req): Json<CreateRecipeRequest>,
) -> HeirloomResult<impl IntoResponse + std::fmt::Debug>
where
    R: HeirloomRepository + Clone + Send + Sync + 'static,
{
    let new_recipe = NewRecipe {
        user_id: req.user_id,
        title: req.title,
        ingredients: req.ingredients,
        instructions: req.instructions,
        servings: req.servings,
        prep_time_minutes: req.prep_time_minutes,
        cook_time_minutes: req.cook_time_minutes,
        source_type: req
            .source_type
            .as_deref()
            .map(SourceType::from_str_or_manual)
            .unwrap_or(SourceType::Manual),
        tags: req.tags,
    };

    // Reject before anything is written
    new_recipe
        .validate()
        .map_err(HeirloomError::Validation)?;

    let recipe = new_recipe.into_recipe();
    state.repo.create_recipe(&recipe).await?;

    tracing::info!(recipe_id = %recipe.id, title = %recipe.title, "Recipe created");

    Ok((StatusCode::CREATED, Json(RecipeDto::from(&recipe))))
}

/// GET /api/heirloom/recipes/{id}
pub async fn get_recipe<R>(
    State(state): State<HeirloomAppState<R>>,
    Path(id): Path<String>,
) -> HeirloomResult<Json<RecipeDto>>
where
    R: HeirloomRepository + Clone + Send + Sync + 'static,
{
    let id = parse_recipe_id(&id)?;
    let recipe = state
        .repo
        .find_recipe(&id)
        .await?
        .ok_or(HeirloomError::RecipeNotFound)?;

    Ok(Json(RecipeDto::from(&recipe)))
}

// ============================================================================
// Shares
// ============================================================================

/// POST /api/heirloom/recipes/{id}/share
pub async fn create_share<R>(
    State(state): State<HeirloomAppState<R>>,
    Path(id): Path<String>,
    Json(req): Json<CreateShareRequest>,
) -> HeirloomResult<impl IntoResponse + std::fmt::Debug>
where
    R: HeirloomRepository + Clone + Send + Sync + 'static,
{
    if let Some(days) = req.expires_in_days {
        if days <= 0 {
            return Err(HeirloomError::Validation(
                "expiresInDays must be positive".to_string(),
            ));
        }
    }

    let recipe_id = parse_recipe_id(&id)?;
    // The share must point at a real recipe
    state
        .repo
        .find_recipe(&recipe_id)
        .await?
        .ok_or(HeirloomError::RecipeNotFound)?;

    let share = RecipeShare::new(recipe_id, req.created_by, req.expires_in_days);
    state.repo.create_share(&share).await?;

    tracing::info!(share_id = %share.share_id, recipe_id = %recipe_id, "Share link created");

    Ok((StatusCode::CREATED, Json(ShareDto::from(&share))))
}

/// GET /api/heirloom/shared/{shareId}
///
/// Anonymous resolution of a share link. Deactivated or expired shares
/// are 410, not 404: the link once existed and the distinction helps
/// the viewer understand the sender can re-share.
pub async fn get_shared_recipe<R>(
    State(state): State<HeirloomAppState<R>>,
    Path(share_id): Path<String>,
) -> HeirloomResult<Json<SharedRecipeResponse>>
where
    R: HeirloomRepository + Clone + Send + Sync + 'static,
{
    let share = state
        .repo
        .find_share(&share_id)
        .await?
        .ok_or(HeirloomError::ShareNotFound)?;

    if !share.is_viewable() {
        return Err(HeirloomError::ShareGone);
    }

    let recipe = state
        .repo
        .find_recipe(&share.recipe_id)
        .await?
        .ok_or(HeirloomError::RecipeNotFound)?;

    state.repo.increment_share_views(&share.share_id).await?;

    Ok(Json(SharedRecipeResponse {
        share: ShareDto::from(&share),
        recipe: RecipeDto::from(&recipe),
    }))
}

// ============================================================================
// Timeline
// ============================================================================

/// POST /api/heirloom/timeline
///
/// Pure computation; nothing is persisted.
pub async fn compute_timeline(
    Json(req): Json<TimelineRequest>,
) -> HeirloomResult<Json<TimelineResponse>> {
    for recipe in &req.recipes {
        if recipe.prep_time_minutes < 0 || recipe.cook_time_minutes < 0 {
            return Err(HeirloomError::Validation(format!(
                "negative duration for recipe {}",
                recipe.recipe_id
            )));
        }
    }

    let mut timelines = calculate_timeline(&req.recipes, req.meal_time);
    update_status(&mut timelines, req.now.unwrap_or_else(Utc::now));

    let slots = timeline_slots(&timelines);
    let span = total_time_span(&timelines);

    Ok(Json(TimelineResponse {
        slots,
        total_time_span_minutes: span,
        total_time_span_label: format_duration(span),
        timelines,
    }))
}
