use serde::Serialize;

use super::climate::ClimateImpact;
use super::constitution::ConstitutionLabel;
use super::risk::RiskTier;
use super::season::SeasonalDosha;

pub const SEASON_MATCH_POINTS: u32 = 2;
pub const HIGH_IMBALANCE_AT: u32 = 5;
pub const MEDIUM_IMBALANCE_AT: u32 = 3;

/// Overall imbalance verdict with the points that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImbalanceScore {
    pub season_points: u32,
    pub climate_points: u32,
    pub total: u32,
    pub risk_level: RiskTier,
}

/// Season points apply when every dosha of a recognized label is aggravated by the
/// season. Climate points are summed over each dosha in the label.
pub fn score_imbalance(
    user: &ConstitutionLabel,
    season: SeasonalDosha,
    impact: &ClimateImpact,
) -> ImbalanceScore {
    let doshas = user.doshas();

    let season_points = if !doshas.is_empty() && doshas.iter().all(|d| season.aggravates(*d)) {
        SEASON_MATCH_POINTS
    } else {
        0
    };

    let climate_points = doshas.iter().map(|d| impact.points(*d)).sum::<u32>();
    let total = season_points + climate_points;

    ImbalanceScore {
        season_points,
        climate_points,
        total,
        risk_level: imbalance_tier(total),
    }
}

pub const fn imbalance_tier(total: u32) -> RiskTier {
    if total >= HIGH_IMBALANCE_AT {
        RiskTier::High
    } else if total >= MEDIUM_IMBALANCE_AT {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}
