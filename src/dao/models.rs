use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use utoipa::ToSchema;

/// Game record held by the store and exchanged over the REST API.
///
/// Every field is optional on input: absent or `null` values fall back to the
/// empty string (or an empty genre list), mirroring how clients submit sparse
/// payloads when creating a game.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Game {
    /// Store key; generated by the server when missing or unknown on creation.
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    /// Title of the game.
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    /// Studio that developed the game.
    #[serde_as(as = "DefaultOnNull")]
    pub developer: String,
    /// Content rating (e.g. "E", "T", "M").
    #[serde_as(as = "DefaultOnNull")]
    pub rating: String,
    /// Ordered list of genres.
    #[serde_as(as = "DefaultOnNull")]
    pub genres: Vec<String>,
}

impl Game {
    /// Replace the identifier, keeping every other field.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_empty_values() {
        let game: Game = serde_json::from_str(r#"{"name":"Celeste"}"#).unwrap();
        assert_eq!(game.name, "Celeste");
        assert!(game.id.is_empty());
        assert!(game.genres.is_empty());
    }

    #[test]
    fn null_fields_take_empty_values() {
        let game: Game =
            serde_json::from_str(r#"{"id":null,"name":"Hades","genres":null}"#).unwrap();
        assert!(game.id.is_empty());
        assert_eq!(game.name, "Hades");
        assert!(game.genres.is_empty());
    }

    #[test]
    fn serializes_every_field() {
        let game = Game {
            id: "id1".into(),
            name: "Monster Hunter: World".into(),
            developer: "Capcom".into(),
            rating: "T".into(),
            genres: vec!["Role-Playing".into(), "Action RPG".into()],
        };

        let value = serde_json::to_value(&game).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "id1",
                "name": "Monster Hunter: World",
                "developer": "Capcom",
                "rating": "T",
                "genres": ["Role-Playing", "Action RPG"],
            })
        );
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        assert!(serde_json::from_str::<Game>(r#"{"genres":"Action"}"#).is_err());
    }
}
