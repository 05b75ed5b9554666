//! Dosha assessment and seasonal/climate risk engine.
//!
//! Every function here is pure: inputs are plain values, the disease catalog is a
//! process-wide constant, and anomalous input degrades to a defined default instead of
//! an error. Fetching weather and persisting results belong to callers.

pub mod catalog;
pub mod climate;
pub mod constitution;
pub mod context;
pub mod dosha;
pub mod imbalance;
pub mod risk;
pub mod scoring;
pub mod season;

#[cfg(test)]
mod tests;

pub use catalog::{DiseaseCatalog, DiseaseEntry};
pub use climate::{
    score_climate, score_climate_with_factors, ClimateImpact, ImpactFactor, WeatherSnapshot,
};
pub use constitution::{classify_constitution, ConstitutionLabel, DUAL_TYPE_MARGIN};
pub use context::{assistant_context, weather_summary, ProfileContext};
pub use dosha::{AnswerSet, Dosha, DoshaProfile};
pub use imbalance::{imbalance_tier, score_imbalance, ImbalanceScore};
pub use risk::{classify_diseases, disease_tier, AssessedDisease, DiseaseRiskReport, RiskTier};
pub use scoring::score_answers;
pub use season::{parse_month, SeasonalDosha};

use serde::Serialize;
use tracing::debug;

/// Scores and label produced by a questionnaire submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizOutcome {
    pub scores: DoshaProfile,
    pub prakruti: ConstitutionLabel,
}

pub fn submit_quiz(answers: &AnswerSet) -> QuizOutcome {
    let scores = score_answers(answers);
    let prakruti = classify_constitution(&scores);
    debug!(answered = answers.len(), %scores, %prakruti, "questionnaire scored");
    QuizOutcome { scores, prakruti }
}

pub fn seasonal_risk(user: &ConstitutionLabel, month: &str) -> DiseaseRiskReport {
    let report = classify_diseases(&DiseaseCatalog::standard(), user, month);
    let (high, medium, low) = report.counts();
    debug!(
        %user,
        month,
        season = %report.season_dosha,
        high,
        medium,
        low,
        "seasonal disease risk classified"
    );
    report
}

/// Climate verdict for one user, with the rules that fired and the snapshot used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateRiskReport {
    pub user_dosha: ConstitutionLabel,
    pub season_dosha: SeasonalDosha,
    pub impact_factors: ClimateImpact,
    pub fired_rules: Vec<ImpactFactor>,
    pub imbalance: ImbalanceScore,
    pub weather: Option<WeatherSnapshot>,
}

pub fn climate_risk(
    user: &ConstitutionLabel,
    month: &str,
    weather: Option<&WeatherSnapshot>,
) -> ClimateRiskReport {
    let season = SeasonalDosha::for_month_name(month);
    let (impact, fired_rules) = score_climate_with_factors(weather);
    let imbalance = score_imbalance(user, season, &impact);

    debug!(
        %user,
        %season,
        has_weather = weather.is_some(),
        total = imbalance.total,
        risk = %imbalance.risk_level,
        "climate imbalance scored"
    );

    ClimateRiskReport {
        user_dosha: user.clone(),
        season_dosha: season,
        impact_factors: impact,
        fired_rules,
        imbalance,
        weather: weather.copied(),
    }
}
