use std::fmt;

use chrono::Month;
use serde::{Deserialize, Serialize};

use super::dosha::Dosha;

/// Dosha(s) aggravated by the calendar season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonalDosha {
    Vata,
    Pitta,
    Kapha,
    #[serde(rename = "Vata-Kapha")]
    VataKapha,
}

impl SeasonalDosha {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vata => "Vata",
            Self::Pitta => "Pitta",
            Self::Kapha => "Kapha",
            Self::VataKapha => "Vata-Kapha",
        }
    }

    pub const fn doshas(self) -> &'static [Dosha] {
        match self {
            Self::Vata => &[Dosha::Vata],
            Self::Pitta => &[Dosha::Pitta],
            Self::Kapha => &[Dosha::Kapha],
            Self::VataKapha => &[Dosha::Vata, Dosha::Kapha],
        }
    }

    pub fn aggravates(self, dosha: Dosha) -> bool {
        self.doshas().contains(&dosha)
    }

    /// Fixed calendar: Feb-May Kapha, Jun-Sep Pitta, Oct-Nov Vata, Dec-Jan Vata-Kapha.
    pub const fn for_month(month: Month) -> Self {
        match month {
            Month::February | Month::March | Month::April | Month::May => Self::Kapha,
            Month::June | Month::July | Month::August | Month::September => Self::Pitta,
            Month::October | Month::November => Self::Vata,
            Month::December | Month::January => Self::VataKapha,
        }
    }

    /// Unknown month names fall back to the Vata season.
    pub fn for_month_name(name: &str) -> Self {
        parse_month(name).map(Self::for_month).unwrap_or(Self::Vata)
    }
}

impl fmt::Display for SeasonalDosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Full English month name, any case. Abbreviations are not accepted.
pub fn parse_month(name: &str) -> Option<Month> {
    let name = name.trim();
    MONTHS
        .into_iter()
        .find(|month| month.name().eq_ignore_ascii_case(name))
}
