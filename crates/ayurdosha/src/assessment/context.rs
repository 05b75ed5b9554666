//! Short profile and weather summaries handed to the conversational assistant.

use serde::{Deserialize, Serialize};

use super::climate::WeatherSnapshot;
use super::constitution::ConstitutionLabel;
use super::dosha::DoshaProfile;

const UNKNOWN: &str = "Unknown";

/// Who the assistant is talking to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfileContext {
    Registered {
        #[serde(default)]
        prakruti: Option<ConstitutionLabel>,
        #[serde(default)]
        age: Option<u16>,
        #[serde(default)]
        gender: Option<String>,
        #[serde(default)]
        weight_kg: Option<f64>,
    },
    Guest {
        #[serde(default)]
        prakruti: Option<ConstitutionLabel>,
        #[serde(default)]
        scores: Option<DoshaProfile>,
    },
}

impl ProfileContext {
    pub fn summary(&self) -> String {
        match self {
            Self::Registered {
                prakruti,
                age,
                gender,
                weight_kg,
            } => format!(
                "User Profile: Dosha={}, Age={}, Gender={}, Weight={}kg.",
                or_unknown(prakruti.as_ref()),
                or_unknown(age.as_ref()),
                or_unknown(gender.as_deref().filter(|g| !g.trim().is_empty())),
                or_unknown(weight_kg.as_ref()),
            ),
            Self::Guest { prakruti, scores } => format!(
                "User Profile (Guest): Dosha={}, Scores={}.",
                or_unknown(prakruti.as_ref()),
                scores
                    .map(|scores| format!("{{{scores}}}"))
                    .unwrap_or_else(|| "{}".to_string()),
            ),
        }
    }
}

fn or_unknown<T: ToString + ?Sized>(value: Option<&T>) -> String {
    value
        .map(ToString::to_string)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub fn weather_summary(city: &str, weather: &WeatherSnapshot) -> String {
    format!(
        "Current Weather in {city}: Temp {}C, Humidity {}%, Wind {}km/h.",
        weather.temperature_c, weather.relative_humidity_pct, weather.wind_speed_kmh
    )
}

/// Profile line, then the weather line when conditions are known.
pub fn assistant_context(
    profile: Option<&ProfileContext>,
    city: &str,
    weather: Option<&WeatherSnapshot>,
) -> String {
    let mut lines = Vec::new();
    if let Some(profile) = profile {
        lines.push(profile.summary());
    }
    if let Some(weather) = weather {
        lines.push(weather_summary(city, weather));
    }
    lines.join("\n")
}
