/// Reads a boolean written the way form and query encoders commonly spell it
/// (`True`, `1`, `yes`, `on`, ...). Case and surrounding whitespace are
/// ignored; anything else is `None`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}
