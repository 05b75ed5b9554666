use crate::assessment::{parse_month, Dosha, SeasonalDosha};
use chrono::Month;

#[test]
fn every_month_maps_to_a_known_season() {
    let expected = [
        ("January", SeasonalDosha::VataKapha),
        ("February", SeasonalDosha::Kapha),
        ("March", SeasonalDosha::Kapha),
        ("April", SeasonalDosha::Kapha),
        ("May", SeasonalDosha::Kapha),
        ("June", SeasonalDosha::Pitta),
        ("July", SeasonalDosha::Pitta),
        ("August", SeasonalDosha::Pitta),
        ("September", SeasonalDosha::Pitta),
        ("October", SeasonalDosha::Vata),
        ("November", SeasonalDosha::Vata),
        ("December", SeasonalDosha::VataKapha),
    ];

    for (name, season) in expected {
        assert_eq!(SeasonalDosha::for_month_name(name), season, "{name}");
        assert_eq!(
            SeasonalDosha::for_month_name(&name.to_uppercase()),
            season,
            "{name} upper-cased"
        );
        assert_eq!(
            SeasonalDosha::for_month_name(&name.to_lowercase()),
            season,
            "{name} lower-cased"
        );
    }
}

#[test]
fn unknown_months_default_to_vata() {
    assert_eq!(SeasonalDosha::for_month_name("Smarch"), SeasonalDosha::Vata);
    assert_eq!(SeasonalDosha::for_month_name(""), SeasonalDosha::Vata);
    assert_eq!(SeasonalDosha::for_month_name("Jul"), SeasonalDosha::Vata);
}

#[test]
fn month_names_parse_to_calendar_months() {
    assert_eq!(parse_month(" march "), Some(Month::March));
    assert_eq!(parse_month("13"), None);
}

#[test]
fn winter_window_aggravates_vata_and_kapha() {
    let season = SeasonalDosha::for_month(Month::December);
    assert_eq!(season.label(), "Vata-Kapha");
    assert!(season.aggravates(Dosha::Vata));
    assert!(season.aggravates(Dosha::Kapha));
    assert!(!season.aggravates(Dosha::Pitta));

    let encoded = serde_json::to_string(&season).expect("season serializes");
    assert_eq!(encoded, "\"Vata-Kapha\"");
}
