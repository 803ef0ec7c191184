use serde::Deserialize;
use utoipa::ToSchema;

use crate::dao::models::Game;

/// Merge patch accepted by `PUT /games/{id}`.
///
/// Fields present in the body overwrite the stored record. Absent fields and
/// explicit `null`s keep the stored value, unknown fields are ignored and
/// `genres` is replaced as a whole.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct GamePatch {
    /// Identifier; must match the path identifier when provided.
    pub id: Option<String>,
    /// Replacement title.
    pub name: Option<String>,
    /// Replacement developer.
    pub developer: Option<String>,
    /// Replacement content rating.
    pub rating: Option<String>,
    /// Replacement genre list.
    pub genres: Option<Vec<String>>,
}

impl GamePatch {
    /// Identifier requested by the patch, ignoring empty strings.
    pub fn requested_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Overlay the patch on `game`. The identifier is never rewritten here.
    pub fn apply(self, mut game: Game) -> Game {
        let GamePatch {
            id: _,
            name,
            developer,
            rating,
            genres,
        } = self;

        if let Some(name) = name {
            game.name = name;
        }
        if let Some(developer) = developer {
            game.developer = developer;
        }
        if let Some(rating) = rating {
            game.rating = rating;
        }
        if let Some(genres) = genres {
            game.genres = genres;
        }
        game
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Game {
        Game {
            id: "id1".into(),
            name: "Monster Hunter: World".into(),
            developer: "Capcom".into(),
            rating: "T".into(),
            genres: vec!["Role-Playing".into(), "Action RPG".into()],
        }
    }

    #[test]
    fn partial_patch_keeps_other_fields() {
        let patch: GamePatch = serde_json::from_str(r#"{"rating":"E"}"#).unwrap();
        let merged = patch.apply(stored());

        assert_eq!(merged.rating, "E");
        assert_eq!(merged.name, "Monster Hunter: World");
        assert_eq!(merged.developer, "Capcom");
        assert_eq!(merged.genres.len(), 2);
    }

    #[test]
    fn null_keeps_stored_value() {
        let patch: GamePatch = serde_json::from_str(r#"{"name":null,"developer":""}"#).unwrap();
        let merged = patch.apply(stored());

        assert_eq!(merged.name, "Monster Hunter: World");
        assert_eq!(merged.developer, "");
    }

    #[test]
    fn genres_are_replaced_whole() {
        let patch: GamePatch = serde_json::from_str(r#"{"genres":["Co-op"]}"#).unwrap();
        assert_eq!(patch.apply(stored()).genres, vec!["Co-op".to_string()]);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let patch: GamePatch = serde_json::from_str(r#"{"publisher":"Capcom"}"#).unwrap();
        assert_eq!(patch.apply(stored()), stored());
    }

    #[test]
    fn empty_id_is_not_a_request() {
        let patch: GamePatch = serde_json::from_str(r#"{"id":""}"#).unwrap();
        assert_eq!(patch.requested_id(), None);

        let patch: GamePatch = serde_json::from_str(r#"{"id":"id2"}"#).unwrap();
        assert_eq!(patch.requested_id(), Some("id2"));
    }
}
