/// Appends a templated sentence built from the first two keywords.
///
/// Returns `text` unchanged when `keywords` is empty.
pub fn enhance_text<S: AsRef<str>>(text: &str, keywords: &[S]) -> String {
    if keywords.is_empty() {
        return text.to_string();
    }

    let phrase = keywords
        .iter()
        .take(2)
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" and ");

    format!("{text} Experienced in {phrase} with strong focus on delivering results.")
}
