pub(crate) fn normalize_username(value: &str) -> String {
    value.trim().to_lowercase()
}

pub(crate) fn normalize_password(value: &str) -> &str {
    value.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_is_trimmed_and_lowercased() {
        assert_eq!(normalize_username("  Ada.Lovelace \t"), "ada.lovelace");
        assert_eq!(normalize_username("ÉMILIE"), "émilie");
    }

    #[test]
    fn password_keeps_case() {
        assert_eq!(normalize_password("  S3cret!  "), "S3cret!");
    }
}
