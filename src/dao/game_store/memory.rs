use std::{collections::HashMap, sync::Arc};

use futures::{FutureExt, future::BoxFuture};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::dao::{
    game_store::{Created, GameStore},
    models::Game,
};

/// Process-local [`GameStore`] backed by a single mutex-guarded map.
///
/// Reads and writes share the same lock, so every operation is mutually
/// exclusive with every other one.
#[derive(Clone, Default)]
pub struct MemoryGameStore {
    games: Arc<Mutex<HashMap<String, Game>>>,
}

impl MemoryGameStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `seed`, keyed by each game's id.
    pub fn with_games(seed: impl IntoIterator<Item = Game>) -> Self {
        let games = seed
            .into_iter()
            .map(|game| (game.id.clone(), game))
            .collect::<HashMap<_, _>>();
        Self {
            games: Arc::new(Mutex::new(games)),
        }
    }
}

impl GameStore for MemoryGameStore {
    fn insert(&self, game: Game) -> BoxFuture<'static, ()> {
        let games = self.games.clone();
        async move {
            let mut guard = games.lock().await;
            if guard.insert(game.id.clone(), game).is_some() {
                debug!("overwrote existing game record");
            }
        }
        .boxed()
    }

    fn create(&self, mut game: Game) -> BoxFuture<'static, Created> {
        let games = self.games.clone();
        async move {
            let mut guard = games.lock().await;
            let created = if !game.id.is_empty() && guard.contains_key(&game.id) {
                Created::Overwritten(game.id.clone())
            } else {
                game.id = Uuid::new_v4().to_string();
                Created::New(game.id.clone())
            };
            guard.insert(game.id.clone(), game);
            created
        }
        .boxed()
    }

    fn find(&self, id: String) -> BoxFuture<'static, Option<Game>> {
        let games = self.games.clone();
        async move { games.lock().await.get(&id).cloned() }.boxed()
    }

    fn list(&self) -> BoxFuture<'static, Vec<Game>> {
        let games = self.games.clone();
        async move { games.lock().await.values().cloned().collect() }.boxed()
    }

    fn replace(&self, id: String, game: Game) -> BoxFuture<'static, bool> {
        let games = self.games.clone();
        async move {
            let mut guard = games.lock().await;
            let Some(slot) = guard.get_mut(&id) else {
                return false;
            };
            *slot = game;
            true
        }
        .boxed()
    }

    fn delete(&self, id: String) -> BoxFuture<'static, bool> {
        let games = self.games.clone();
        async move { games.lock().await.remove(&id).is_some() }.boxed()
    }

    fn count(&self) -> BoxFuture<'static, usize> {
        let games = self.games.clone();
        async move { games.lock().await.len() }.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: &str, name: &str) -> Game {
        Game {
            id: id.into(),
            name: name.into(),
            ..Game::default()
        }
    }

    #[tokio::test]
    async fn insert_then_find() {
        let store = MemoryGameStore::new();
        store.insert(game("a", "Celeste")).await;

        let found = store.find("a".into()).await.unwrap();
        assert_eq!(found.name, "Celeste");
        assert!(store.find("b".into()).await.is_none());
    }

    #[tokio::test]
    async fn insert_overwrites_same_id() {
        let store = MemoryGameStore::new();
        store.insert(game("a", "Celeste")).await;
        store.insert(game("a", "Hades")).await;

        assert_eq!(store.count().await, 1);
        assert_eq!(store.find("a".into()).await.unwrap().name, "Hades");
    }

    #[tokio::test]
    async fn create_keeps_known_id_and_replaces_unknown_one() {
        let store = MemoryGameStore::with_games([game("a", "Celeste")]);

        let created = store.create(game("a", "Celeste B-Sides")).await;
        assert_eq!(created, Created::Overwritten("a".into()));
        assert_eq!(store.find("a".into()).await.unwrap().name, "Celeste B-Sides");

        let created = store.create(game("zzz", "Hades")).await;
        let Created::New(id) = created else {
            panic!("expected a generated id, got {created:?}");
        };
        assert_ne!(id, "zzz");
        assert!(store.find("zzz".into()).await.is_none());
        assert_eq!(store.find(id.clone()).await.unwrap().id, id);

        let created = store.create(game("", "Tetris")).await;
        assert!(matches!(created, Created::New(ref id) if !id.is_empty()));
        assert_eq!(store.count().await, 3);
    }

    #[tokio::test]
    async fn create_after_delete_does_not_resurrect_id() {
        let store = MemoryGameStore::with_games([game("a", "Celeste")]);
        assert!(store.delete("a".into()).await);

        let created = store.create(game("a", "Celeste")).await;
        assert!(matches!(created, Created::New(ref id) if id != "a"));
        assert!(store.find("a".into()).await.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn racing_create_and_delete_never_restore_deleted_id() {
        for _ in 0..64 {
            let store = MemoryGameStore::with_games([game("a", "Celeste")]);
            let creator = {
                let store = store.clone();
                tokio::spawn(async move { store.create(game("a", "Celeste")).await })
            };
            let deleter = {
                let store = store.clone();
                tokio::spawn(async move { store.delete("a".into()).await })
            };
            let created = creator.await.unwrap();
            let deleted = deleter.await.unwrap();

            assert!(deleted);
            // Either the create landed first and was deleted afterwards, or it
            // saw the key gone and stored under a fresh id.
            if let Created::New(id) = created {
                assert_ne!(id, "a");
            }
            assert!(store.find("a".into()).await.is_none());
        }
    }

    #[tokio::test]
    async fn replace_requires_existing_key() {
        let store = MemoryGameStore::new();
        assert!(!store.replace("a".into(), game("a", "Celeste")).await);
        assert_eq!(store.count().await, 0);

        store.insert(game("a", "Celeste")).await;
        assert!(store.replace("a".into(), game("a", "Hades")).await);
        assert_eq!(store.find("a".into()).await.unwrap().name, "Hades");
    }

    #[tokio::test]
    async fn delete_reports_presence() {
        let store = MemoryGameStore::with_games([game("a", "Celeste"), game("b", "Hades")]);

        assert!(store.delete("a".into()).await);
        assert!(!store.delete("a".into()).await);
        assert_eq!(store.list().await, vec![game("b", "Hades")]);
    }

    #[tokio::test]
    async fn concurrent_inserts_are_all_kept() {
        let store = MemoryGameStore::new();
        let tasks = (0..32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.insert(game(&i.to_string(), "Tetris")).await })
            })
            .collect::<Vec<_>>();
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(store.count().await, 32);
    }
}
