//! Small string helpers for filter and field lists.

/// Trim spaces and tabs from each entry and drop entries that end up empty.
pub fn clean_list<S: AsRef<str>>(list: &[S]) -> Vec<String> {
    list.iter()
        .map(|item| item.as_ref().trim_matches(|c| c == ' ' || c == '\t'))
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Exact membership test.
pub fn contains_str<S: AsRef<str>>(needle: &str, list: &[S]) -> bool {
    list.iter().any(|item| item.as_ref() == needle)
}
