/// Mutex-guarded in-process store.
pub mod memory;

use futures::future::BoxFuture;

use crate::dao::models::Game;

pub use self::memory::MemoryGameStore;

/// Outcome of [`GameStore::create`], carrying the identifier the game was stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Created {
    /// No record existed under the requested identifier; a new one was generated.
    New(String),
    /// The requested identifier was known and its record was overwritten.
    Overwritten(String),
}

impl Created {
    /// Identifier the game was stored under.
    pub fn id(&self) -> &str {
        match self {
            Created::New(id) | Created::Overwritten(id) => id,
        }
    }
}

/// Abstraction over the storage holding game records.
///
/// Records are always keyed by their own [`Game::id`]. Lookups that miss are
/// reported through `Option`/`bool` results; the operations themselves cannot
/// fail.
pub trait GameStore: Send + Sync {
    /// Insert `game` under its identifier, overwriting any previous record.
    fn insert(&self, game: Game) -> BoxFuture<'static, ()>;
    /// Store `game` under its identifier if that identifier is already known,
    /// otherwise under a freshly generated one. The check and the write happen
    /// under the same lock.
    fn create(&self, game: Game) -> BoxFuture<'static, Created>;
    /// Fetch the record stored under `id`.
    fn find(&self, id: String) -> BoxFuture<'static, Option<Game>>;
    /// Snapshot every stored record, in no particular order.
    fn list(&self) -> BoxFuture<'static, Vec<Game>>;
    /// Overwrite the record stored under `id` only if it is still present.
    fn replace(&self, id: String, game: Game) -> BoxFuture<'static, bool>;
    /// Remove the record stored under `id`, returning whether it existed.
    fn delete(&self, id: String) -> BoxFuture<'static, bool>;
    /// Number of stored records.
    fn count(&self) -> BoxFuture<'static, usize>;
}
