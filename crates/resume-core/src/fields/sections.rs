/// Lines whose lowercase form contains any of `keywords` as a substring.
///
/// Text is split on `\n` only; matching lines are returned trimmed, in
/// document order. Keywords are expected in lowercase.
pub fn extract_section_lines(text: &str, keywords: &[String]) -> Vec<String> {
    text.split('\n')
        .filter(|line| {
            let lower = line.to_lowercase();
            keywords.iter().any(|k| lower.contains(k.as_str()))
        })
        .map(|line| line.trim().to_string())
        .collect()
}
