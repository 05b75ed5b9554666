use std::fmt;

use serde::{Deserialize, Serialize};

use super::dosha::{Dosha, DoshaProfile};

/// Top-two spread, in percentage points, at or under which a constitution is dual.
pub const DUAL_TYPE_MARGIN: u8 = 10;

/// Prakruti label: one dominant dosha, or two when the leaders are close.
///
/// Labels read from user records or requests are parsed leniently; text that does not
/// name one or two distinct doshas is kept as [`ConstitutionLabel::Unrecognized`] and
/// matches no dosha at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConstitutionLabel {
    Single(Dosha),
    Dual(Dosha, Dosha),
    Unrecognized(String),
}

impl ConstitutionLabel {
    pub fn parse(raw: &str) -> Self {
        let parts: Vec<Option<Dosha>> = raw.split('-').map(Dosha::from_label).collect();
        match parts.as_slice() {
            [Some(only)] => Self::Single(*only),
            [Some(first), Some(second)] if first != second => Self::Dual(*first, *second),
            _ => Self::Unrecognized(raw.to_string()),
        }
    }

    pub fn contains(&self, dosha: Dosha) -> bool {
        match self {
            Self::Single(only) => *only == dosha,
            Self::Dual(first, second) => *first == dosha || *second == dosha,
            Self::Unrecognized(_) => false,
        }
    }

    /// Constituent doshas in label order; empty when unrecognized.
    pub fn doshas(&self) -> Vec<Dosha> {
        match self {
            Self::Single(only) => vec![*only],
            Self::Dual(first, second) => vec![*first, *second],
            Self::Unrecognized(_) => Vec::new(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for ConstitutionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(only) => f.write_str(only.label()),
            Self::Dual(first, second) => write!(f, "{}-{}", first.label(), second.label()),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

impl From<String> for ConstitutionLabel {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ConstitutionLabel> for String {
    fn from(value: ConstitutionLabel) -> Self {
        value.to_string()
    }
}

impl From<Dosha> for ConstitutionLabel {
    fn from(value: Dosha) -> Self {
        Self::Single(value)
    }
}

/// Reduces a profile to its constitution label.
///
/// Scores are ranked high to low with equal scores kept in Vata, Pitta, Kapha order.
pub fn classify_constitution(profile: &DoshaProfile) -> ConstitutionLabel {
    let mut ranked = Dosha::ordered().map(|dosha| (dosha, profile.score(dosha)));
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let (first, first_score) = ranked[0];
    let (second, second_score) = ranked[1];

    if first_score - second_score <= DUAL_TYPE_MARGIN {
        ConstitutionLabel::Dual(first, second)
    } else {
        ConstitutionLabel::Single(first)
    }
}
