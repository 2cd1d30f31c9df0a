use serde_json::{Map, Value as JsonValue};

use meterops_records::{KindDescriptor, Record, Stored};

/// Which mutation a response envelope reports.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mutation {
    Created,
    Updated,
    Deleted,
}

impl Mutation {
    fn verb(self) -> &'static str {
        match self {
            Mutation::Created => "created",
            Mutation::Updated => "updated",
            Mutation::Deleted => "deleted",
        }
    }

    fn key(self, d: &KindDescriptor) -> &'static str {
        match self {
            Mutation::Created => d.key,
            Mutation::Updated => d.updated_key,
            Mutation::Deleted => d.deleted_key,
        }
    }
}

/// `{ "message": "<Label> <verb> successfully", "<key>": <document> }`
pub fn mutation_envelope<R: Record>(
    mutation: Mutation,
    stored: &Stored<R>,
) -> Result<JsonValue, serde_json::Error> {
    let d = R::descriptor();
    let mut body = Map::new();
    body.insert(
        "message".to_string(),
        JsonValue::String(format!("{} {} successfully", d.label, mutation.verb())),
    );
    body.insert(mutation.key(d).to_string(), serde_json::to_value(stored)?);
    Ok(JsonValue::Object(body))
}
