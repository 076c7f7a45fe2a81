pub mod db;
pub mod memory;

pub use db::DbAdapter;
pub use memory::MemoryStore;

use crate::error::ApiError;
use trivia_core::ports::QuestionStore;

/// Startup readiness check: the store must answer a category listing.
/// Returns the number of categories it holds.
pub async fn ensure_ready(store: &dyn QuestionStore) -> Result<usize, ApiError> {
    let categories = store.list_categories().await?;
    Ok(categories.len())
}
