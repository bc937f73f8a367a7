use serde::Serialize;

use super::weather::{ForecastPeriod, TemperatureUnit, to_celsius};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyChartPoint {
    pub time: String,
    pub temperature: f64,
    pub precip: f64,
}

impl HourlyChartPoint {
    #[must_use]
    pub fn in_unit(&self, unit: TemperatureUnit) -> Self {
        Self {
            temperature: convert_temperature(self.temperature, unit),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyChartPoint {
    pub day: String,
    pub high: f64,
    pub low: Option<f64>,
    pub precip: f64,
}

impl DailyChartPoint {
    #[must_use]
    pub fn in_unit(&self, unit: TemperatureUnit) -> Self {
        Self {
            high: convert_temperature(self.high, unit),
            low: self.low.map(|low| convert_temperature(low, unit)),
            ..self.clone()
        }
    }
}

/// One point per period. Missing precipitation plots as zero.
#[must_use]
pub fn to_hourly_chart_data(periods: &[ForecastPeriod]) -> Vec<HourlyChartPoint> {
    periods
        .iter()
        .map(|period| HourlyChartPoint {
            time: period.start_time.format("%-I %p").to_string(),
            temperature: period.temperature,
            precip: period.precip_chance().unwrap_or(0.0),
        })
        .collect()
}

/// Pairs each daytime period with the period right after it when that one is
/// a night. Unlike `pair_forecast_days` this never looks at dates, and a
/// leading night period is dropped.
#[must_use]
pub fn to_daily_chart_data(periods: &[ForecastPeriod]) -> Vec<DailyChartPoint> {
    periods
        .iter()
        .enumerate()
        .filter(|(_, period)| period.is_daytime)
        .map(|(idx, day)| {
            let night = periods.get(idx + 1).filter(|next| !next.is_daytime);
            let night_precip = night.and_then(|n| n.precip_chance()).unwrap_or(0.0);

            DailyChartPoint {
                day: day.start_time.format("%a").to_string(),
                high: day.temperature,
                low: night.map(|n| n.temperature),
                precip: day.precip_chance().unwrap_or(0.0).max(night_precip),
            }
        })
        .collect()
}

/// Forecast data stays Fahrenheit; this is for display only.
#[must_use]
pub fn convert_temperature(fahrenheit: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Fahrenheit => fahrenheit,
        TemperatureUnit::Celsius => to_celsius(fahrenheit),
    }
}
