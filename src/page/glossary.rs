//! Hover explanations for financial terms used on the page

pub const FINANCIAL_TERMS: [(&str, &str); 4] = [
    (
        "ELSS",
        "Equity Linked Savings Scheme - Tax saving mutual funds with 3-year lock-in",
    ),
    (
        "PPF",
        "Public Provident Fund - 15-year tax-free investment scheme",
    ),
    (
        "FD",
        "Fixed Deposit - Guaranteed return investment with capital protection",
    ),
    (
        "Flexi Cap",
        "Flexible market capitalization funds that can invest across all market caps",
    ),
];

pub fn tooltip_for(term: &str) -> Option<&'static str> {
    FINANCIAL_TERMS
        .iter()
        .find(|(t, _)| *t == term)
        .map(|(_, description)| *description)
}

/// Glossary entries whose term appears in `text`, in glossary order
pub fn terms_in(text: &str) -> Vec<(&'static str, &'static str)> {
    FINANCIAL_TERMS
        .iter()
        .filter(|(term, _)| text.contains(term))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert!(tooltip_for("PPF").unwrap().starts_with("Public Provident Fund"));
        assert_eq!(tooltip_for("NPS"), None);
    }

    #[test]
    fn test_terms_in_text() {
        let found: Vec<_> = terms_in("Bank FD (6 months) and Parag Parikh Flexi Cap")
            .into_iter()
            .map(|(term, _)| term)
            .collect();
        assert_eq!(found, vec!["FD", "Flexi Cap"]);
        assert!(terms_in("Savings Account").is_empty());
    }
}
