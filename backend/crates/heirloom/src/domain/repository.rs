//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::RecipeId;

use crate::domain::entities::{Recipe, RecipeShare};
use crate::error::HeirloomResult;

/// Recipe + share repository trait
#[trait_variant::make(HeirloomRepository: Send)]
pub trait LocalHeirloomRepository {
    /// Persist a validated recipe
    async fn create_recipe(&self, recipe: &Recipe) -> HeirloomResult<()>;

    /// Find a recipe by ID
    async fn find_recipe(&self, id: &RecipeId) -> HeirloomResult<Option<Recipe>>;

    /// Persist a new share link
    async fn create_share(&self, share: &RecipeShare) -> HeirloomResult<()>;

    /// Find a share by its URL-friendly ID
    async fn find_share(&self, share_id: &str) -> HeirloomResult<Option<RecipeShare>>;

    /// Bump a share's view counter
    async fn increment_share_views(&self, share_id: &str) -> HeirloomResult<()>;
}
