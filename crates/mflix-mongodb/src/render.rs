//! Rendering matched documents for the console

use bson::{Bson, Document as BsonDocument};
use mflix_common::Result;

/// Written to stdout when the lookup matches nothing
pub const EMPTY_MATCH: &str = "null";

/// Render a document as pretty-printed relaxed Extended JSON
pub fn render_document(doc: &BsonDocument) -> Result<String> {
    let value = Bson::Document(doc.clone()).into_relaxed_extjson();
    Ok(serde_json::to_string_pretty(&value)?)
}
