/// Collapses whitespace runs to one space, trims, and lowercases.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_and_lowercases() {
        assert_eq!(
            normalize("  Work\tHistory\n\n  SKILLS \r\n"),
            "work history skills"
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        for sample in ["", "   ", "A  b\nC", "Ünïcode\u{00a0}Text  •  Bullet"] {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn normalize_of_blank_is_empty() {
        assert_eq!(normalize(" \n\t "), "");
    }
}
