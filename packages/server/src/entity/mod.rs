pub mod artist;
pub mod show;
pub mod venue;

/// Convert an ordered genre list into its stored JSON form.
pub fn genres_to_json(genres: &[String]) -> serde_json::Value {
    serde_json::Value::Array(
        genres
            .iter()
            .map(|g| serde_json::Value::String(g.clone()))
            .collect(),
    )
}

/// Read the stored genre list back, skipping anything that is not a string.
pub fn genres_from_json(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
