/// Presence check for required text fields: `None` and `Some("")` are both
/// treated as missing. Whitespace-only values pass, matching the contract's
/// "non-empty" requirement and nothing more.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_empty_are_rejected() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(String::new())), None);
    }

    #[test]
    fn present_values_pass_through() {
        assert_eq!(non_empty(Some("Flood Alert".into())), Some("Flood Alert".into()));
        // whitespace counts as present
        assert_eq!(non_empty(Some(" ".into())), Some(" ".into()));
    }
}
