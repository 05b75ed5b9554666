use std::fmt;

use serde::{Deserialize, Serialize};

use super::catalog::{DiseaseCatalog, DiseaseEntry};
use super::constitution::ConstitutionLabel;
use super::dosha::Dosha;
use super::season::{parse_month, SeasonalDosha};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    High,
    Medium,
    Low,
}

impl RiskTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Catalog entry annotated with the tier it earned for one user and month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessedDisease {
    pub name: &'static str,
    pub description: &'static str,
    pub prevention: &'static str,
    pub routine: &'static str,
    pub diet: &'static str,
    pub risk_level: RiskTier,
    pub dosha_type: Dosha,
    pub note: String,
}

/// Catalog partitioned by tier, each list in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiseaseRiskReport {
    pub season_dosha: SeasonalDosha,
    pub user_dosha: ConstitutionLabel,
    pub high_risk: Vec<AssessedDisease>,
    pub medium_risk: Vec<AssessedDisease>,
    pub low_risk: Vec<AssessedDisease>,
}

impl DiseaseRiskReport {
    pub fn tier(&self, tier: RiskTier) -> &[AssessedDisease] {
        match tier {
            RiskTier::High => &self.high_risk,
            RiskTier::Medium => &self.medium_risk,
            RiskTier::Low => &self.low_risk,
        }
    }

    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.high_risk.len(),
            self.medium_risk.len(),
            self.low_risk.len(),
        )
    }
}

/// High when the season aggravates the disease category; Medium when the user is
/// purely of that category; otherwise Low. Dual users never land in Medium.
pub fn disease_tier(governing: Dosha, user: &ConstitutionLabel, season: SeasonalDosha) -> RiskTier {
    if season.aggravates(governing) {
        RiskTier::High
    } else if *user == ConstitutionLabel::Single(governing) {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}

pub fn classify_diseases(
    catalog: &DiseaseCatalog,
    user: &ConstitutionLabel,
    month: &str,
) -> DiseaseRiskReport {
    let season = SeasonalDosha::for_month_name(month);
    let month_label = parse_month(month)
        .map(|month| month.name().to_string())
        .unwrap_or_else(|| month.trim().to_string());

    let mut report = DiseaseRiskReport {
        season_dosha: season,
        user_dosha: user.clone(),
        high_risk: Vec::new(),
        medium_risk: Vec::new(),
        low_risk: Vec::new(),
    };

    for governing in Dosha::ordered() {
        for entry in catalog.entries_for(governing) {
            let tier = disease_tier(governing, user, season);
            let assessed = AssessedDisease {
                name: entry.name,
                description: entry.description,
                prevention: entry.prevention,
                routine: entry.routine,
                diet: entry.diet,
                risk_level: tier,
                dosha_type: governing,
                note: risk_note(tier, entry, user, season, &month_label),
            };

            match tier {
                RiskTier::High => report.high_risk.push(assessed),
                RiskTier::Medium => report.medium_risk.push(assessed),
                RiskTier::Low => report.low_risk.push(assessed),
            }
        }
    }

    report
}

fn risk_note(
    tier: RiskTier,
    entry: &DiseaseEntry,
    user: &ConstitutionLabel,
    season: SeasonalDosha,
    month: &str,
) -> String {
    match tier {
        RiskTier::High if user.contains(entry.dosha) => format!(
            "High Risk! {month} is a {season} season, which aggravates {}. Since you are {user}, you are doubly susceptible.",
            entry.dosha
        ),
        RiskTier::High => format!(
            "High Risk! {month} is a {season} season, which aggravates {} regardless of your {user} constitution.",
            entry.dosha
        ),
        RiskTier::Medium => format!(
            "Medium Risk. As a {user} type, you are naturally prone to {}, but the current season ({season}) is not the primary aggravator.",
            entry.name
        ),
        RiskTier::Low => {
            "Low Risk. Currently, environmental factors are not significantly increasing your risk for this."
                .to_string()
        }
    }
}
