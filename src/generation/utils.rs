//! String transformation utilities for code generation
//!
//! Used to normalize user-supplied names (`ping-site`, `ping_site`) into the
//! PascalCase class names and camelCase method names of generated PHP code.

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Converts a string to PascalCase for class names.
///
/// Splits on `-`, `_`, `.` and whitespace and uppercases the first letter of
/// every segment. The rest of each segment is kept as typed, so `APIWorkflow`
/// stays `APIWorkflow`.
///
/// # Examples
/// ```
/// use temporal_scaffold::generation::utils::to_proper_case;
///
/// assert_eq!(to_proper_case("ping_site"), "PingSite");
/// assert_eq!(to_proper_case("ping-site"), "PingSite");
/// assert_eq!(to_proper_case("PingSiteWorkflow"), "PingSiteWorkflow");
/// assert_eq!(to_proper_case("APIWorkflow"), "APIWorkflow");
/// ```
pub fn to_proper_case(s: &str) -> String {
    s.split(|c: char| matches!(c, '-' | '_' | '.') || c.is_whitespace())
        .filter(|segment| !segment.is_empty())
        .map(upper_first)
        .collect()
}

/// Converts a string to camelCase for method names.
///
/// # Examples
/// ```
/// use temporal_scaffold::generation::utils::to_camel_case;
///
/// assert_eq!(to_camel_case("add_name"), "addName");
/// assert_eq!(to_camel_case("get-greetings"), "getGreetings");
/// assert_eq!(to_camel_case("pauseHTTP"), "pauseHTTP");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_proper_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Quotes a value as a single-quoted PHP string literal
///
/// # Examples
/// ```
/// use temporal_scaffold::generation::utils::php_string_literal;
///
/// assert_eq!(php_string_literal("emails"), "'emails'");
/// assert_eq!(php_string_literal("it's"), "'it\\'s'");
/// ```
pub fn php_string_literal(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}
