use serde::Serialize;

use super::{
    charts::{DailyChartPoint, HourlyChartPoint, to_daily_chart_data, to_hourly_chart_data},
    forecast::{
        DayForecast, ForecastError, RangeBar, TempRange, calc_temp_range, pair_forecast_days,
        temp_range_bar,
    },
    weather::{CurrentConditions, ForecastPeriod, PointData},
};

/// Everything the presentation layer needs for one location, built from
/// already-fetched API data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub place: String,
    pub point: PointData,
    pub current: CurrentConditions,
    pub days: Vec<DayForecast>,
    #[serde(serialize_with = "serialize_range")]
    pub range: Result<TempRange, ForecastError>,
    pub bars: Vec<RangeBar>,
    pub hourly: Vec<HourlyChartPoint>,
    pub daily_chart: Vec<DailyChartPoint>,
}

impl WeatherReport {
    #[must_use]
    pub fn build(
        place: String,
        point: PointData,
        current: CurrentConditions,
        forecast: &[ForecastPeriod],
        hourly: &[ForecastPeriod],
        hours: usize,
    ) -> Self {
        let days = pair_forecast_days(forecast);
        let range = calc_temp_range(&days);
        let bars = match range {
            Ok(TempRange { week_min, week_max }) => days
                .iter()
                .map(|day| temp_range_bar(day, week_min, week_max))
                .collect(),
            Err(_) => Vec::new(),
        };
        let hourly = to_hourly_chart_data(&hourly[..hours.min(hourly.len())]);
        let daily_chart = to_daily_chart_data(forecast);

        Self {
            place,
            point,
            current,
            days,
            range,
            bars,
            hourly,
            daily_chart,
        }
    }
}

fn serialize_range<S>(
    range: &Result<TempRange, ForecastError>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    range.as_ref().ok().serialize(serializer)
}
