/// Build a query string from key-value pairs
///
/// Values are percent-encoded; keys are expected to be plain identifiers.
/// Returns an empty string for an empty pair list, otherwise the string
/// includes the leading `?`.
pub fn build_query(pairs: &[(&str, &str)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let encoded: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect();
    format!("?{}", encoded.join("&"))
}

/// Percent-encode a single path segment (usernames can carry spaces or
/// unicode; ids are formatted upstream and never need encoding).
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Join ids into the comma-separated list the feed endpoint expects.
pub fn csv_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
