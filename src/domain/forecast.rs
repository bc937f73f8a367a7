use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use super::weather::ForecastPeriod;

const TONIGHT: &str = "Tonight";
const NIGHT_SUFFIX: &str = " Night";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    #[error("No temperature data available")]
    NoTemperatureData,
}

/// One calendar day of the 7-day forecast. Temperatures stay in the source
/// unit of the periods they came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayForecast {
    pub day_name: String,
    pub date: NaiveDate,
    pub high_temp: Option<f64>,
    pub low_temp: Option<f64>,
    pub short_forecast: String,
    pub precip_chance: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TempRange {
    pub week_min: f64,
    pub week_max: f64,
}

/// Horizontal placement of a day's low..high span, in percent of the week's range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeBar {
    pub left_pct: f64,
    pub width_pct: f64,
}

impl RangeBar {
    /// Projects the bar onto `width` character cells as `(start, end)`.
    #[must_use]
    pub fn cells(&self, width: usize) -> (usize, usize) {
        let scale = width as f64 / 100.0;
        let start = (self.left_pct * scale).round().clamp(0.0, width as f64) as usize;
        let end = ((self.left_pct + self.width_pct) * scale)
            .round()
            .clamp(0.0, width as f64) as usize;
        (start, end.max(start))
    }
}

#[derive(Debug)]
struct DaySlots<'a> {
    date: NaiveDate,
    day: Option<&'a ForecastPeriod>,
    night: Option<&'a ForecastPeriod>,
}

impl<'a> DaySlots<'a> {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            day: None,
            night: None,
        }
    }

    fn day_name(&self) -> String {
        match (self.day, self.night) {
            (Some(day), _) => day.name.clone(),
            (None, Some(night)) if night.name == TONIGHT => TONIGHT.to_string(),
            (None, Some(night)) => night
                .name
                .strip_suffix(NIGHT_SUFFIX)
                .unwrap_or(&night.name)
                .to_string(),
            (None, None) => self.date.to_string(),
        }
    }

    fn into_day_forecast(self) -> DayForecast {
        let short_forecast = self
            .day
            .or(self.night)
            .map(|period| period.short_forecast.clone())
            .unwrap_or_default();
        let precip_chance = [self.day, self.night]
            .into_iter()
            .flatten()
            .filter_map(ForecastPeriod::precip_chance)
            .reduce(f64::max);

        DayForecast {
            day_name: self.day_name(),
            date: self.date,
            high_temp: self.day.map(|period| period.temperature),
            low_temp: self.night.map(|period| period.temperature),
            short_forecast,
            precip_chance,
        }
    }
}

/// Groups interleaved day/night periods into one entry per calendar date,
/// ordered by the first period seen for each date.
#[must_use]
pub fn pair_forecast_days(periods: &[ForecastPeriod]) -> Vec<DayForecast> {
    let mut slots: Vec<DaySlots<'_>> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for period in periods {
        let date = period.local_date();
        let idx = *index.entry(date).or_insert_with(|| {
            slots.push(DaySlots::new(date));
            slots.len() - 1
        });

        let slot = &mut slots[idx];
        if period.is_daytime {
            slot.day = Some(period);
        } else {
            slot.night = Some(period);
        }
    }

    slots.into_iter().map(DaySlots::into_day_forecast).collect()
}

/// Lowest and highest reported temperature across all days.
pub fn calc_temp_range(days: &[DayForecast]) -> Result<TempRange, ForecastError> {
    let mut temps = days
        .iter()
        .flat_map(|day| [day.high_temp, day.low_temp])
        .flatten();

    let first = temps.next().ok_or(ForecastError::NoTemperatureData)?;
    let (week_min, week_max) =
        temps.fold((first, first), |(min, max), t| (min.min(t), max.max(t)));

    Ok(TempRange { week_min, week_max })
}

/// Places a day's span on a 0..100 scale. A missing temperature borrows its
/// counterpart, then the week bound; a zero-width week fills the whole bar.
#[must_use]
pub fn temp_range_bar(day: &DayForecast, week_min: f64, week_max: f64) -> RangeBar {
    let span = week_max - week_min;
    if span == 0.0 {
        return RangeBar {
            left_pct: 0.0,
            width_pct: 100.0,
        };
    }

    let low = day.low_temp.or(day.high_temp).unwrap_or(week_min);
    let high = day.high_temp.or(day.low_temp).unwrap_or(week_max);

    RangeBar {
        left_pct: (low - week_min) / span * 100.0,
        width_pct: (high - low) / span * 100.0,
    }
}
