use async_trait::async_trait;

use crate::destination::BilingualDestination;
use crate::error::ApiError;
use crate::language::Language;
use crate::progress::TranslationProgress;

/// Remote content API surface. `ContentClient` talks to the real service;
/// tests substitute their own implementation.
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Fetch one destination for display. The server may answer with the
    /// full bilingual aggregate or with an already-localized projection;
    /// both decode into `BilingualDestination` (projected fields arrive as
    /// plain values), so localizing the result is idempotent.
    async fn fetch_destination(
        &self,
        slug: &str,
        language: Language,
    ) -> Result<BilingualDestination, ApiError>;

    /// Fetch the full bilingual aggregate. Admin only.
    async fn fetch_raw(&self, slug: &str) -> Result<BilingualDestination, ApiError>;

    /// Create a new destination and return the persisted record. Admin only.
    async fn create_destination(
        &self,
        destination: &BilingualDestination,
    ) -> Result<BilingualDestination, ApiError>;

    /// Update an existing destination by id. Admin only.
    async fn update_destination(
        &self,
        id: &str,
        destination: &BilingualDestination,
    ) -> Result<BilingualDestination, ApiError>;

    /// Delete a destination by id. Admin only.
    async fn delete_destination(&self, id: &str) -> Result<(), ApiError>;

    /// Server-side translation completion percentages for one destination.
    async fn translation_status(&self, slug: &str) -> Result<TranslationProgress, ApiError>;
}
