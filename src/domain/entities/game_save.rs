use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::wire::field::{as_object, instant_to_wire, require_instant, require_int, require_str};
use crate::wire::DecodeError;

/// One save slot for one user on one game.
///
/// `(username, game_id, save_name)` identifies the slot. `saved_time` is set
/// at save time; the save service keeps it non-decreasing when a slot is
/// overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSave {
    pub username: String,
    pub game_id: i64,
    pub save_name: String,
    pub saved_time: DateTime<Utc>,
}

impl GameSave {
    /// Serialize to the wire format. All four fields are always emitted.
    pub fn to_wire(&self) -> Value {
        json!({
            "username": self.username,
            "gameId": self.game_id,
            "saveName": self.save_name,
            "savedTime": instant_to_wire(&self.saved_time),
        })
    }

    /// Deserialize from the wire format. Every field is required; none is
    /// optional or defaulted.
    pub fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(value)?;
        Ok(GameSave {
            username: require_str(obj, "username")?.to_owned(),
            game_id: require_int(obj, "gameId")?,
            save_name: require_str(obj, "saveName")?.to_owned(),
            saved_time: require_instant(obj, "savedTime")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn autosave() -> GameSave {
        GameSave {
            username: "ann".into(),
            game_id: 7,
            save_name: "autosave".into(),
            saved_time: "2024-03-01T12:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_to_wire_emits_every_field() {
        let wire = autosave().to_wire();

        assert_eq!(wire["username"], "ann");
        assert_eq!(wire["gameId"], 7);
        assert_eq!(wire["saveName"], "autosave");
        assert_eq!(wire["savedTime"], "2024-03-01T12:00:00Z");
        assert_eq!(wire.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_round_trip() {
        let save = autosave();
        assert_eq!(GameSave::from_wire(&save.to_wire()).unwrap(), save);
    }

    #[test]
    fn test_from_wire_missing_game_id_fails() {
        let mut wire = autosave().to_wire();
        wire.as_object_mut().unwrap().remove("gameId");
        assert!(matches!(
            GameSave::from_wire(&wire),
            Err(DecodeError::MissingField("gameId"))
        ));
    }

    #[test]
    fn test_from_wire_game_id_as_string_fails() {
        let mut wire = autosave().to_wire();
        wire["gameId"] = "7".into();
        assert!(matches!(
            GameSave::from_wire(&wire),
            Err(DecodeError::TypeMismatch { field: "gameId", .. })
        ));
    }

    #[test]
    fn test_from_wire_mistyped_saved_time_fails() {
        let mut wire = autosave().to_wire();
        wire["savedTime"] = serde_json::json!(1709294400);
        assert!(matches!(
            GameSave::from_wire(&wire),
            Err(DecodeError::TypeMismatch { field: "savedTime", .. })
        ));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
            (0i64..=253_402_300_799, 0u32..1_000_000_000)
                .prop_map(|(secs, nanos)| DateTime::from_timestamp(secs, nanos).unwrap())
        }

        proptest! {
            #[test]
            fn save_round_trips(
                username in ".*",
                game_id in any::<i64>(),
                save_name in ".*",
                saved_time in instant_strategy(),
            ) {
                let save = GameSave {
                    username,
                    game_id,
                    save_name,
                    saved_time,
                };
                prop_assert_eq!(GameSave::from_wire(&save.to_wire()).unwrap(), save);
            }
        }
    }
}
