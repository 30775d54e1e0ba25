use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::wire::field::{
    as_object, instant_to_wire, opt_str, require_instant, require_int, require_str,
};
use crate::wire::DecodeError;

/// Catalog entry for a published game.
///
/// Immutable value: the catalog service constructs it from storage or client
/// input, and an update produces a new instance. `id` is assigned once by
/// the persistence layer; `price` is in the smallest currency unit and kept
/// non-negative by the catalog service, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub publish_date: DateTime<Utc>,
    pub author: String,
    pub introduction: Option<String>,
    pub description: Option<String>,
}

impl Game {
    /// Serialize to the wire format.
    ///
    /// All seven fields are always emitted; an absent `introduction` or
    /// `description` becomes an explicit `null`, never an omitted key.
    pub fn to_wire(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "price": self.price,
            "publishDate": instant_to_wire(&self.publish_date),
            "author": self.author,
            "introduction": self.introduction,
            "description": self.description,
        })
    }

    /// Deserialize from the wire format.
    ///
    /// Every field is read by exact name; there is no defaulted or partial
    /// construction. Unknown keys are ignored.
    pub fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let obj = as_object(value)?;
        Ok(Game {
            id: require_int(obj, "id")?,
            name: require_str(obj, "name")?.to_owned(),
            price: require_int(obj, "price")?,
            publish_date: require_instant(obj, "publishDate")?,
            author: require_str(obj, "author")?.to_owned(),
            introduction: opt_str(obj, "introduction")?,
            description: opt_str(obj, "description")?,
        })
    }
}
