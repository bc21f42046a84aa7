//! Lexical scan for wording that tends to violate neutral-point-of-view
//! guidance. Flags are advisory and shown to the reviewer; nothing here
//! rejects an edit.

const PROMOTIONAL: &[&str] = &[
    "best",
    "greatest",
    "leading",
    "premier",
    "top-rated",
    "award-winning",
    "world-class",
    "cutting-edge",
    "revolutionary",
];

const PEACOCK: &[&str] = &[
    "clearly",
    "obviously",
    "undoubtedly",
    "of course",
    "naturally",
    "essentially",
    "basically",
];

const WEASEL: &[&str] = &[
    "some say",
    "many believe",
    "it is said",
    "critics say",
    "experts claim",
    "arguably",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyCategory {
    Promotional,
    Peacock,
    Weasel,
}

impl PolicyCategory {
    fn terms(self) -> &'static [&'static str] {
        match self {
            Self::Promotional => PROMOTIONAL,
            Self::Peacock => PEACOCK,
            Self::Weasel => WEASEL,
        }
    }

    fn flag(self, term: &str) -> String {
        match self {
            Self::Promotional => format!("Potential promotional language: '{term}'"),
            Self::Peacock => format!("Peacock term: '{term}'"),
            Self::Weasel => format!("Weasel words: '{term}'"),
        }
    }
}

/// Scan order is fixed: promotional, peacock, weasel.
const SCAN_ORDER: [PolicyCategory; 3] = [
    PolicyCategory::Promotional,
    PolicyCategory::Peacock,
    PolicyCategory::Weasel,
];

/// Every table term that occurs as a substring of the lower-cased text, in
/// table order. Substring matching is intentional: "bestseller" flags "best".
pub fn check_policy_violations(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    SCAN_ORDER
        .iter()
        .flat_map(|&category| {
            category
                .terms()
                .iter()
                .filter(|term| lower.contains(*term))
                .map(move |term| category.flag(term))
        })
        .collect()
}
