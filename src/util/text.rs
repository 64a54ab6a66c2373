// src/util/text.rs

/// Flatten a message to a single display line of at most `max_chars`
/// characters.
///
/// This function:
/// 1. Joins all lines with a single space
/// 2. Collapses runs of whitespace
/// 3. Truncates on a character boundary, marking the cut with `…`
///
/// # Examples
///
/// ```
/// use wavenote::util::text::single_line;
///
/// assert_eq!(single_line("Hello\n  world", 20), "Hello world");
/// assert_eq!(single_line("abcdefgh", 5), "abcd…");
/// ```
pub fn single_line(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if flat.chars().count() <= max_chars {
        return flat;
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut cut: String = flat.chars().take(max_chars - 1).collect();
    cut.push('…');
    cut
}
