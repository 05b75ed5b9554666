//! End-to-end scenarios through the public assessment facade: questionnaire to label,
//! label to seasonal disease risk, and label plus forecast to an imbalance verdict.

use ayurdosha::assessment::{
    self, AnswerSet, ConstitutionLabel, Dosha, DoshaProfile, RiskTier, SeasonalDosha,
};
use ayurdosha::weather::Forecast;
use serde_json::json;

fn questionnaire(vata: usize, pitta: usize, kapha: usize) -> AnswerSet {
    let codes = std::iter::repeat("V")
        .take(vata)
        .chain(std::iter::repeat("P").take(pitta))
        .chain(std::iter::repeat("K").take(kapha));
    codes
        .enumerate()
        .map(|(idx, code)| (format!("question_{idx:02}"), code))
        .collect()
}

#[test]
fn questionnaire_feeds_seasonal_risk() {
    let outcome = assessment::submit_quiz(&questionnaire(2, 7, 1));
    assert_eq!(outcome.scores, DoshaProfile::new(20, 70, 10));
    assert_eq!(outcome.prakruti, ConstitutionLabel::Single(Dosha::Pitta));

    let report = assessment::seasonal_risk(&outcome.prakruti, "July");
    assert_eq!(report.season_dosha, SeasonalDosha::Pitta);
    assert_eq!(report.counts(), (10, 0, 20));

    let report = assessment::seasonal_risk(&outcome.prakruti, "November");
    assert_eq!(report.counts(), (10, 10, 10));
    assert!(report
        .medium_risk
        .iter()
        .all(|disease| disease.dosha_type == Dosha::Pitta));
}

#[test]
fn balanced_questionnaire_yields_dual_type() {
    let outcome = assessment::submit_quiz(&questionnaire(4, 1, 4));
    assert_eq!(outcome.scores, DoshaProfile::new(44, 11, 44));
    assert_eq!(
        outcome.prakruti,
        ConstitutionLabel::Dual(Dosha::Vata, Dosha::Kapha)
    );
    assert_eq!(outcome.prakruti.to_string(), "Vata-Kapha");
}

#[test]
fn empty_questionnaire_degrades_without_error() {
    let outcome = assessment::submit_quiz(&AnswerSet::new());
    assert!(outcome.scores.is_empty());
}

#[test]
fn winter_forecast_pushes_dual_type_to_high() {
    let forecast = Forecast::from_value(json!({
        "latitude": 31.1,
        "longitude": 77.17,
        "current": {
            "temperature_2m": 6.5,
            "relative_humidity_2m": 74,
            "wind_speed_10m": 7.0,
            "rain": 0.0
        }
    }))
    .expect("forecast decodes");

    let label = ConstitutionLabel::parse("Vata-Kapha");
    let report = assessment::climate_risk(&label, "January", forecast.current.as_ref());

    assert_eq!(report.season_dosha, SeasonalDosha::VataKapha);
    assert_eq!(report.impact_factors.vata, 2);
    assert_eq!(report.impact_factors.kapha, 3);
    assert_eq!(report.imbalance.season_points, 2);
    assert_eq!(report.imbalance.total, 7);
    assert_eq!(report.imbalance.risk_level, RiskTier::High);
}

#[test]
fn unreachable_weather_still_produces_a_verdict() {
    let forecast = Forecast::from_value(json!({ "error": true })).expect("decodes");
    let report = assessment::climate_risk(
        &ConstitutionLabel::Single(Dosha::Kapha),
        "March",
        forecast.current.as_ref(),
    );

    assert_eq!(report.imbalance.climate_points, 0);
    assert_eq!(report.imbalance.season_points, 2);
    assert_eq!(report.imbalance.risk_level, RiskTier::Low);
}

#[test]
fn climate_report_serializes_with_dosha_keys() {
    let report = assessment::climate_risk(&ConstitutionLabel::Single(Dosha::Vata), "October", None);
    let encoded = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(encoded["user_dosha"], "Vata");
    assert_eq!(encoded["season_dosha"], "Vata");
    assert_eq!(encoded["impact_factors"], json!({ "Vata": 0, "Pitta": 0, "Kapha": 0 }));
    assert_eq!(encoded["imbalance"]["risk_level"], "Low");
    assert!(encoded.get("risk_level").is_none());
}
