use crate::{
    data::Row,
    error::{Error, Result},
};

/// Decodes a JSON payload into rows.
///
/// The payload must be a JSON array of objects. An empty array is reported as
/// [`Error::EmptyDataset`], since nothing downstream can work without rows.
pub fn parse_rows(text: &str) -> Result<Vec<Row>> {
    let payload: serde_json::Value = serde_json::from_str(text)?;

    let entries = match payload {
        serde_json::Value::Array(entries) => entries,
        other => {
            return Err(Error::InvalidRows(format!(
                "expected a JSON array of objects, got {}",
                json_kind(&other)
            )))
        }
    };

    if entries.is_empty() {
        return Err(Error::EmptyDataset);
    }

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            serde_json::Value::Object(map) => {
                if map.keys().any(String::is_empty) {
                    return Err(Error::InvalidRows(format!(
                        "row {} has an empty column name",
                        index + 1
                    )));
                }
                Ok(serde_json::from_value::<Row>(serde_json::Value::Object(map))?)
            }
            other => Err(Error::InvalidRows(format!(
                "row {} is {}, expected an object",
                index + 1,
                json_kind(&other)
            ))),
        })
        .collect()
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
