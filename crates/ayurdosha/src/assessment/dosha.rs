use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Constitutional category. Declaration order is the tie-break order used when
/// two categories score the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    pub const fn ordered() -> [Self; 3] {
        [Self::Vata, Self::Pitta, Self::Kapha]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Vata => "Vata",
            Self::Pitta => "Pitta",
            Self::Kapha => "Kapha",
        }
    }

    /// Single-letter code used by questionnaire answers.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Vata => "V",
            Self::Pitta => "P",
            Self::Kapha => "K",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|dosha| dosha.code() == code)
    }

    /// Case-insensitive match against the dosha name.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ordered()
            .into_iter()
            .find(|dosha| dosha.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Questionnaire answers keyed by question identifier. Values are expected to be
/// `V`, `P` or `K`; anything else, including non-string JSON, is carried but never counted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, Value>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question: impl Into<String>, code: impl Into<String>) {
        self.0.insert(question.into(), Value::String(code.into()));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Recognized answers only, in question order.
    pub fn doshas(&self) -> impl Iterator<Item = Dosha> + '_ {
        self.0
            .values()
            .filter_map(|code| code.as_str().and_then(Dosha::from_code))
    }
}

impl<Q, C> FromIterator<(Q, C)> for AnswerSet
where
    Q: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (Q, C)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(question, code)| (question.into(), Value::String(code.into())))
                .collect(),
        )
    }
}

/// Percentage share of each dosha in a questionnaire. Rounded shares may sum to 99..=101.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoshaProfile {
    #[serde(rename = "Vata")]
    pub vata: u8,
    #[serde(rename = "Pitta")]
    pub pitta: u8,
    #[serde(rename = "Kapha")]
    pub kapha: u8,
}

impl DoshaProfile {
    pub const fn new(vata: u8, pitta: u8, kapha: u8) -> Self {
        Self { vata, pitta, kapha }
    }

    pub const fn score(&self, dosha: Dosha) -> u8 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    pub fn total(&self) -> u16 {
        u16::from(self.vata) + u16::from(self.pitta) + u16::from(self.kapha)
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl fmt::Display for DoshaProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vata={}, Pitta={}, Kapha={}",
            self.vata, self.pitta, self.kapha
        )
    }
}
