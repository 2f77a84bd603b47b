//! Input sanitization for contact form fields.
//!
//! Submitted text ends up in mail headers, a plain-text mail body and a
//! line-oriented log file, so anything that can change how those are
//! interpreted is removed here: markup tags, control characters, and line
//! breaks in single-line fields.

/// Removes markup tags from `input`.
///
/// A tag starts at `<` followed by a non-whitespace character and runs to the
/// next `>`. An unterminated tag swallows the rest of the input. A `<`
/// followed by whitespace (as in `a < b`) is kept as text.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(strip_tags("<b>Hello</b> world"), "Hello world");
/// assert_eq!(strip_tags("1 < 2"), "1 < 2");
/// ```
pub fn strip_tags(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_tag = false;

    while let Some(c) = chars.next() {
        if in_tag {
            if c == '>' {
                in_tag = false;
            }
            continue;
        }

        if c == '<' {
            match chars.peek() {
                Some(next) if !next.is_whitespace() => in_tag = true,
                _ => output.push(c),
            }
            continue;
        }

        output.push(c);
    }

    output
}

/// Removes control characters.
///
/// With `keep_line_breaks`, `\n` and `\t` survive and `\r\n` / `\r` are
/// normalized to `\n`; otherwise line breaks and tabs become a single space.
pub fn strip_control(input: &str, keep_line_breaks: bool) -> String {
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");

    normalized
        .chars()
        .filter_map(|c| match c {
            '\n' | '\t' if keep_line_breaks => Some(c),
            '\n' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

/// Sanitizes a single-line text field (name, subject).
pub fn sanitize_line(input: &str) -> String {
    strip_control(&strip_tags(input), false).trim().to_string()
}

/// Sanitizes a multi-line text field (message body).
pub fn sanitize_text(input: &str) -> String {
    strip_control(&strip_tags(input), true).trim().to_string()
}

/// Keeps only characters that may appear in an email address.
///
/// Allowed: ASCII letters and digits and ``!#$%&'*+-=?^_`{|}~@.[]``.
pub fn sanitize_email(input: &str) -> String {
    const ALLOWED_PUNCTUATION: &str = "!#$%&'*+-=?^_`{|}~@.[]";

    input
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || ALLOWED_PUNCTUATION.contains(*c))
        .collect()
}

/// Returns the first `max_chars` characters of `input`.
///
/// Never splits a multi-byte character.
pub fn truncate_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &input[..byte_index],
        None => input,
    }
}
