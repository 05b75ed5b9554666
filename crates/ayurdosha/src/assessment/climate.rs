use serde::{Deserialize, Serialize};

use super::dosha::Dosha;

/// Current conditions at the user's location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_c: f64,
    pub relative_humidity_pct: f64,
    pub wind_speed_kmh: f64,
    pub rain_mm: f64,
}

/// Aggravation points per dosha. Unbounded and never normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClimateImpact {
    #[serde(rename = "Vata")]
    pub vata: u32,
    #[serde(rename = "Pitta")]
    pub pitta: u32,
    #[serde(rename = "Kapha")]
    pub kapha: u32,
}

impl ClimateImpact {
    pub const fn points(&self, dosha: Dosha) -> u32 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    fn add(&mut self, dosha: Dosha, points: u32) {
        match dosha {
            Dosha::Vata => self.vata += points,
            Dosha::Pitta => self.pitta += points,
            Dosha::Kapha => self.kapha += points,
        }
    }
}

/// One weather rule that fired, kept so reports can explain the vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactFactor {
    pub dosha: Dosha,
    pub points: u32,
    pub reason: String,
}

pub const COLD_BELOW_C: f64 = 20.0;
pub const DRY_BELOW_PCT: f64 = 40.0;
pub const WINDY_ABOVE_KMH: f64 = 15.0;
pub const HOT_ABOVE_C: f64 = 30.0;
pub const EXTREME_HEAT_ABOVE_C: f64 = 35.0;
pub const DAMP_ABOVE_PCT: f64 = 70.0;

/// Scores a snapshot into per-dosha points. No snapshot scores zero everywhere.
pub fn score_climate(weather: Option<&WeatherSnapshot>) -> ClimateImpact {
    score_climate_with_factors(weather).0
}

pub fn score_climate_with_factors(
    weather: Option<&WeatherSnapshot>,
) -> (ClimateImpact, Vec<ImpactFactor>) {
    let mut impact = ClimateImpact::default();
    let mut factors = Vec::new();

    let Some(weather) = weather else {
        return (impact, factors);
    };

    let mut apply = |dosha: Dosha, points: u32, reason: String| {
        impact.add(dosha, points);
        factors.push(ImpactFactor {
            dosha,
            points,
            reason,
        });
    };

    let temp = weather.temperature_c;
    let humidity = weather.relative_humidity_pct;
    let wind = weather.wind_speed_kmh;

    // Vata: cold, dry, wind.
    if temp < COLD_BELOW_C {
        apply(
            Dosha::Vata,
            2,
            format!("cold air ({temp:.1}C below {COLD_BELOW_C:.0}C)"),
        );
    }
    if humidity < DRY_BELOW_PCT {
        apply(
            Dosha::Vata,
            2,
            format!("dry air ({humidity:.0}% humidity below {DRY_BELOW_PCT:.0}%)"),
        );
    }
    if wind > WINDY_ABOVE_KMH {
        apply(
            Dosha::Vata,
            2,
            format!("strong wind ({wind:.1} km/h above {WINDY_ABOVE_KMH:.0} km/h)"),
        );
    }

    // Pitta: heat, with extra points for extreme heat.
    if temp > HOT_ABOVE_C {
        apply(
            Dosha::Pitta,
            3,
            format!("heat ({temp:.1}C above {HOT_ABOVE_C:.0}C)"),
        );
    }
    if temp > EXTREME_HEAT_ABOVE_C {
        apply(
            Dosha::Pitta,
            2,
            format!("extreme heat ({temp:.1}C above {EXTREME_HEAT_ABOVE_C:.0}C)"),
        );
    }

    // Kapha: cold, damp, rain.
    if temp < COLD_BELOW_C {
        apply(
            Dosha::Kapha,
            1,
            format!("cold air ({temp:.1}C below {COLD_BELOW_C:.0}C)"),
        );
    }
    if humidity > DAMP_ABOVE_PCT {
        apply(
            Dosha::Kapha,
            2,
            format!("damp air ({humidity:.0}% humidity above {DAMP_ABOVE_PCT:.0}%)"),
        );
    }
    if weather.rain_mm > 0.0 {
        apply(
            Dosha::Kapha,
            3,
            format!("rainfall ({:.1} mm)", weather.rain_mm),
        );
    }

    (impact, factors)
}
