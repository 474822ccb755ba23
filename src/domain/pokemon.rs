//! Pokémon domain model: the wire types returned by the detail endpoint.
//!
//! The shapes mirror the PokeAPI JSON contract. Only the fields the
//! application displays are declared; serde ignores the (many) others. All
//! types derive `Deserialize` for the wire and `Serialize` so fetch outcomes
//! can travel through event payloads unchanged.

use serde::{Deserialize, Serialize};

/// A single Pokémon's detail record as returned by `GET /pokemon/{name}`.
///
/// This is the `SelectedEntity` of the search screen: replaced wholesale on
/// every successful fetch, cleared on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Canonical lowercase name (e.g. `"pikachu"`).
    pub name: String,

    /// Sprite image URLs.
    pub sprites: Sprites,

    /// Type slots in display order (one or two for every real Pokémon).
    pub types: Vec<TypeSlot>,

    /// Base stat entries (hp, attack, defense, ...).
    pub stats: Vec<StatEntry>,
}

/// Sprite URL set for one Pokémon.
///
/// The live API returns `null` for `front_default` on some forms, so the
/// field is optional rather than an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    /// URL of the default front-facing sprite, if the API has one.
    #[serde(default)]
    pub front_default: Option<String>,
}

/// One entry of the `types` array: a slot pointing at a named type resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    /// The type resource (`{ "name": "electric", ... }`).
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// One entry of the `stats` array: a named stat and its base value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    /// The stat resource (`{ "name": "speed", ... }`).
    pub stat: NamedResource,

    /// Base value of the stat (e.g. 90).
    pub base_stat: u32,
}

/// A named API resource reference — PokeAPI's `{ name, url }` pair, reduced
/// to the name the UI needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name (e.g. `"electric"` or `"speed"`).
    pub name: String,
}

/// The paginated name listing returned by `GET /pokemon?limit={n}`.
///
/// Consumed once at startup to populate the name index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResourceList {
    /// Listed resources in the API's canonical order.
    pub results: Vec<NamedResource>,
}

impl Pokemon {
    /// Names of this Pokémon's types, in slot order.
    #[must_use]
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.kind.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_payload_deserializes() {
        let json = r#"{
            "name": "pikachu",
            "id": 25,
            "height": 4,
            "sprites": { "front_default": "https://img.example/25.png", "back_default": null },
            "types": [ { "slot": 1, "type": { "name": "electric", "url": "https://api.example/type/13/" } } ],
            "stats": [
                { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "https://api.example/stat/1/" } },
                { "base_stat": 90, "effort": 2, "stat": { "name": "speed", "url": "https://api.example/stat/6/" } }
            ]
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(
            pokemon.sprites.front_default.as_deref(),
            Some("https://img.example/25.png")
        );
        assert_eq!(pokemon.type_names(), vec!["electric"]);
        assert_eq!(pokemon.stats[1].stat.name, "speed");
        assert_eq!(pokemon.stats[1].base_stat, 90);
    }

    #[test]
    fn null_sprite_deserializes_to_none() {
        let json = r#"{
            "name": "missingno",
            "sprites": { "front_default": null },
            "types": [],
            "stats": []
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.sprites.front_default, None);
    }

    #[test]
    fn name_listing_deserializes_in_order() {
        let json = r#"{
            "count": 1302,
            "next": "https://api.example/pokemon?offset=3&limit=3",
            "results": [
                { "name": "bulbasaur", "url": "https://api.example/pokemon/1/" },
                { "name": "ivysaur", "url": "https://api.example/pokemon/2/" },
                { "name": "venusaur", "url": "https://api.example/pokemon/3/" }
            ]
        }"#;

        let listing: NamedResourceList = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = listing.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["bulbasaur", "ivysaur", "venusaur"]);
    }
}
