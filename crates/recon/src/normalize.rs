/// Canonical matching form of a SKU: trimmed, then upper-cased with the
/// locale-independent Unicode mapping. Idempotent.
///
/// Used only for matching and ordering; the report shows a raw spelling
/// chosen by the display policy.
pub fn normalize_sku(raw: &str) -> String {
    raw.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_upcases() {
        assert_eq!(normalize_sku("  abc-1  "), "ABC-1");
        assert_eq!(normalize_sku("wIdGeT_9"), "WIDGET_9");
    }

    #[test]
    fn already_normalized_unchanged() {
        assert_eq!(normalize_sku("ABC-1"), "ABC-1");
    }

    #[test]
    fn idempotent() {
        for raw in ["  abc-1", "ABC-1  ", "MiXeD 42", "", "   "] {
            let once = normalize_sku(raw);
            assert_eq!(normalize_sku(&once), once);
        }
    }

    #[test]
    fn equivalent_spellings_collide() {
        assert_eq!(normalize_sku("abc-1"), normalize_sku(" ABC-1 "));
    }
}
