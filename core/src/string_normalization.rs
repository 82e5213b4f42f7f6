use unidecode::unidecode;

/// Folds a name for lookup: ASCII transliteration, lowercase, single spaces.
pub fn clean_str(input: &str) -> String {
    unidecode(input)
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::clean_str;

    #[test]
    fn test_clean_str() {
        assert_eq!(clean_str("Penélope Cruz"), "penelope cruz");
        assert_eq!(clean_str("  JENNIFER\tLawrence "), "jennifer lawrence");
        assert_eq!(clean_str(""), "");
    }
}
