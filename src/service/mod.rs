pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::{errors::AppError, types::FriendsDTO};

pub use memory::InMemoryFriends;
pub use postgres::{PgFriendsRepository, PgFriendsService};

/// Business operations over the friends resource. The handler layer owns no
/// storage; everything below the validation checks goes through here, so
/// tests can swap in doubles.
#[async_trait]
pub trait FriendsService: Send + Sync {
    /// Persists a new entity and assigns it an id.
    async fn save(&self, dto: FriendsDTO) -> Result<FriendsDTO, AppError>;

    /// Replaces the stored entity wholesale.
    async fn update(&self, dto: FriendsDTO) -> Result<FriendsDTO, AppError>;

    /// Merges the non-null fields of `dto` into the stored entity. Returns
    /// `None` when the entity no longer exists at merge time.
    async fn partial_update(&self, dto: FriendsDTO) -> Result<Option<FriendsDTO>, AppError>;

    async fn find_all(&self) -> Result<Vec<FriendsDTO>, AppError>;

    async fn find_one(&self, id: i64) -> Result<Option<FriendsDTO>, AppError>;

    /// Deletes by id; deleting an absent id is not an error.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

/// Pre-mutation existence checks, kept separate from the service so the
/// handler's validation path is explicit about what it consults.
#[async_trait]
pub trait FriendsRepository: Send + Sync {
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;
}
