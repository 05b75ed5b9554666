use crate::infra::{current_month, read_forecast_file, resolve_weather, ResolvedWeather};
use ayurdosha::assessment::{
    self, AnswerSet, AssessedDisease, ClimateRiskReport, ConstitutionLabel, DiseaseRiskReport,
    QuizOutcome, RiskTier, WeatherSnapshot,
};
use ayurdosha::config::AssessmentDefaults;
use ayurdosha::error::AppError;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct QuizArgs {
    /// Answer as QUESTION=CODE where CODE is V, P or K (repeatable)
    #[arg(long = "answer", value_parser = parse_answer)]
    answers: Vec<(String, String)>,
}

#[derive(Args, Debug)]
pub(crate) struct SeasonalArgs {
    /// Constitution label, e.g. Pitta or Vata-Kapha
    #[arg(long, default_value = "Vata")]
    dosha: String,
    /// Month name (defaults to the current month)
    #[arg(long)]
    month: Option<String>,
    /// Print prevention, routine, and diet guidance for each condition
    #[arg(long)]
    details: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ClimateArgs {
    /// Constitution label (defaults to APP_DEFAULT_DOSHA)
    #[arg(long)]
    dosha: Option<String>,
    /// City shown in the report (defaults to APP_DEFAULT_CITY)
    #[arg(long)]
    city: Option<String>,
    /// Month name (defaults to the current month)
    #[arg(long)]
    month: Option<String>,
    /// Air temperature in Celsius
    #[arg(long, allow_hyphen_values = true, requires_all = ["humidity", "wind", "rain"])]
    temperature: Option<f64>,
    /// Relative humidity in percent
    #[arg(long, requires = "temperature")]
    humidity: Option<f64>,
    /// Wind speed in km/h
    #[arg(long, requires = "temperature")]
    wind: Option<f64>,
    /// Rain in mm
    #[arg(long, requires = "temperature")]
    rain: Option<f64>,
    /// Saved forecast response to read current conditions from
    #[arg(long, conflicts_with = "temperature")]
    forecast_json: Option<PathBuf>,
}

fn parse_answer(raw: &str) -> Result<(String, String), String> {
    let (question, code) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=CODE, got '{raw}'"))?;
    let question = question.trim();
    if question.is_empty() {
        return Err(format!("missing question identifier in '{raw}'"));
    }
    Ok((question.to_string(), code.trim().to_string()))
}

pub(crate) fn run_quiz(args: QuizArgs) -> Result<(), AppError> {
    let answers: AnswerSet = args.answers.into_iter().collect();
    let outcome = assessment::submit_quiz(&answers);
    render_quiz(&answers, &outcome);
    Ok(())
}

pub(crate) fn run_seasonal(args: SeasonalArgs) -> Result<(), AppError> {
    let dosha = ConstitutionLabel::parse(&args.dosha);
    let month = args.month.unwrap_or_else(current_month);
    let report = assessment::seasonal_risk(&dosha, &month);
    render_seasonal(&report, &month, args.details);
    Ok(())
}

pub(crate) fn run_climate(args: ClimateArgs, defaults: AssessmentDefaults) -> Result<(), AppError> {
    let dosha = args
        .dosha
        .map(|raw| ConstitutionLabel::parse(&raw))
        .unwrap_or(defaults.dosha);
    let city = args.city.unwrap_or(defaults.city);
    let month = args.month.unwrap_or_else(current_month);

    let snapshot = match (args.temperature, args.humidity, args.wind, args.rain) {
        (Some(temperature_c), Some(relative_humidity_pct), Some(wind_speed_kmh), Some(rain_mm)) => {
            Some(WeatherSnapshot {
                temperature_c,
                relative_humidity_pct,
                wind_speed_kmh,
                rain_mm,
            })
        }
        _ => None,
    };

    let forecast = match args.forecast_json {
        Some(path) => read_forecast_file(&path)?,
        None => None,
    };

    let resolved = resolve_weather(snapshot, forecast);
    let report = assessment::climate_risk(&dosha, &month, resolved.snapshot.as_ref());
    render_climate(&report, &resolved, &city, &month);
    Ok(())
}

fn render_quiz(answers: &AnswerSet, outcome: &QuizOutcome) {
    println!("Dosha questionnaire");
    println!(
        "Answers: {} submitted, {} recognized",
        answers.len(),
        answers.doshas().count()
    );
    println!("Scores: {}", outcome.scores);
    println!("Prakruti: {}", outcome.prakruti);
}

fn render_seasonal(report: &DiseaseRiskReport, month: &str, details: bool) {
    println!("Seasonal disease risk");
    println!(
        "Constitution: {} | Month: {} | Season aggravates: {}",
        report.user_dosha, month, report.season_dosha
    );

    for tier in [RiskTier::High, RiskTier::Medium, RiskTier::Low] {
        let diseases = report.tier(tier);
        if diseases.is_empty() {
            println!("\n{tier} risk: none");
            continue;
        }
        println!("\n{tier} risk ({})", diseases.len());
        for disease in diseases {
            render_disease(disease, details);
        }
    }
}

fn render_disease(disease: &AssessedDisease, details: bool) {
    println!("- {} [{}]", disease.name, disease.dosha_type);
    if details {
        println!("    {}", disease.description);
        println!("    Prevention: {}", disease.prevention);
        println!("    Routine: {}", disease.routine);
        println!("    Diet: {}", disease.diet);
        println!("    {}", disease.note);
    }
}

fn render_climate(report: &ClimateRiskReport, resolved: &ResolvedWeather, city: &str, month: &str) {
    println!("Climate imbalance");
    println!(
        "Constitution: {} | City: {} | Month: {} | Season aggravates: {}",
        report.user_dosha, city, month, report.season_dosha
    );

    match &report.weather {
        Some(weather) => println!("{}", assessment::weather_summary(city, weather)),
        None => println!("Weather: unavailable, climate points default to zero"),
    }

    let impact = &report.impact_factors;
    println!(
        "\nImpact points: Vata {}, Pitta {}, Kapha {}",
        impact.vata, impact.pitta, impact.kapha
    );
    for factor in &report.fired_rules {
        println!("- {} +{}: {}", factor.dosha, factor.points, factor.reason);
    }

    println!(
        "\nSeason points {} + climate points {} = {} -> {} risk",
        report.imbalance.season_points,
        report.imbalance.climate_points,
        report.imbalance.total,
        report.imbalance.risk_level
    );

    if !resolved.outlook.is_empty() {
        println!("\nOutlook");
        for day in &resolved.outlook {
            let range = match (day.temperature_min_c, day.temperature_max_c) {
                (Some(min), Some(max)) => format!("{min:.0}-{max:.0}C"),
                _ => "n/a".to_string(),
            };
            let rain = day
                .precipitation_sum_mm
                .map(|mm| format!("{mm:.1} mm"))
                .unwrap_or_else(|| "n/a".to_string());
            println!("- {}: {range}, rain {rain}", day.date);
        }
    }
}
