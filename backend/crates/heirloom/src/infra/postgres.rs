//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::RecipeId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Recipe, RecipeShare, SourceType};
use crate::domain::repository::HeirloomRepository;
use crate::error::HeirloomResult;

/// PostgreSQL-backed heirloom repository
#[derive(Clone)]
pub struct PgHeirloomRepository {
    pool: PgPool,
}

impl PgHeirloomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl HeirloomRepository for PgHeirloomRepository {
    async fn create_recipe(&self, recipe: &Recipe) -> HeirloomResult<()> {
        sqlx::query(
            r#"
            INSERT INTO recipes (
                recipe_id,
                user_id,
                title,
                ingredients,
                instructions,
                servings,
                prep_time_minutes,
                cook_time_minutes,
                source_type,
                tags,
                is_favorite,
                times_cooked,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(recipe.id.as_uuid())
        .bind(&recipe.user_id)
        .bind(&recipe.title)
        .bind(&recipe.ingredients)
        .bind(&recipe.instructions)
        .bind(recipe.servings)
        .bind(recipe.prep_time_minutes)
        .bind(recipe.cook_time_minutes)
        .bind(recipe.source_type.as_str())
        .bind(&recipe.tags)
        .bind(recipe.is_favorite)
        .bind(recipe.times_cooked)
        .bind(recipe.created_at)
        .bind(recipe.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_recipe(&self, id: &RecipeId) -> HeirloomResult<Option<Recipe>> {
        let row = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT
                recipe_id, user_id, title, ingredients, instructions, servings,
                prep_time_minutes, cook_time_minutes, source_type, tags,
                is_favorite, times_cooked, created_at, updated_at
            FROM recipes
            WHERE recipe_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(RecipeRow::into_recipe))
    }

    async fn create_share(&self, share: &RecipeShare) -> HeirloomResult<()> {
        sqlx::query(
            r#"
            INSERT INTO recipe_shares (
                share_id,
                recipe_id,
                created_by,
                created_at,
                expires_at,
                views,
                is_active
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&share.share_id)
        .bind(share.recipe_id.as_uuid())
        .bind(&share.created_by)
        .bind(share.created_at)
        .bind(share.expires_at)
        .bind(share.views)
        .bind(share.is_active)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_share(&self, share_id: &str) -> HeirloomResult<Option<RecipeShare>> {
        let row = sqlx::query_as::<_, ShareRow>(
            r#"
            SELECT share_id, recipe_id, created_by, created_at, expires_at, views, is_active
            FROM recipe_shares
            WHERE share_id = $1
            "#,
        )
        .bind(share_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ShareRow::into_share))
    }

    async fn increment_share_views(&self, share_id: &str) -> HeirloomResult<()> {
        sqlx::query("UPDATE recipe_shares SET views = views + 1 WHERE share_id = $1")
            .bind(share_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct RecipeRow {
    recipe_id: Uuid,
    user_id: String,
    title: String,
    ingredients: Vec<String>,
    instructions: Vec<String>,
    servings: Option<i32>,
    prep_time_minutes: Option<i32>,
    cook_time_minutes: Option<i32>,
    source_type: String,
    tags: Vec<String>,
    is_favorite: bool,
    times_cooked: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl RecipeRow {
    fn into_recipe(self) -> Recipe {
        Recipe {
            id: RecipeId::from_uuid(self.recipe_id),
            user_id: self.user_id,
            title: self.title,
            ingredients: self.ingredients,
            instructions: self.instructions,
            servings: self.servings,
            prep_time_minutes: self.prep_time_minutes,
            cook_time_minutes: self.cook_time_minutes,
            source_type: SourceType::from_str_or_manual(&self.source_type),
            tags: self.tags,
            is_favorite: self.is_favorite,
            times_cooked: self.times_cooked,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ShareRow {
    share_id: String,
    recipe_id: Uuid,
    created_by: String,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    views: i64,
    is_active: bool,
}

impl ShareRow {
    fn into_share(self) -> RecipeShare {
        RecipeShare {
            share_id: self.share_id,
            recipe_id: RecipeId::from_uuid(self.recipe_id),
            created_by: self.created_by,
            created_at: self.created_at,
            expires_at: self.expires_at,
            views: self.views,
            is_active: self.is_active,
        }
    }
}
