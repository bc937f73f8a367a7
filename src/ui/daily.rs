use crate::{
    app::settings::RuntimeSettings,
    cli::IconMode,
    domain::{
        charts::DailyChartPoint,
        forecast::{DayForecast, RangeBar},
        report::WeatherReport,
        weather::{
            TemperatureUnit, condition_for_forecast, condition_icon, display_from_fahrenheit,
            format_temperature, round_half_up,
        },
    },
};

pub const BAR_WIDTH: usize = 20;

struct BarGlyphs {
    fill: char,
    empty: char,
    marker: char,
}

impl BarGlyphs {
    fn for_mode(mode: IconMode) -> Self {
        match mode {
            IconMode::Ascii => Self {
                fill: '=',
                empty: '.',
                marker: 'o',
            },
            IconMode::Unicode | IconMode::Emoji => Self {
                fill: '━',
                empty: '·',
                marker: '●',
            },
        }
    }
}

pub fn lines(report: &WeatherReport, settings: &RuntimeSettings) -> Vec<String> {
    let mut out = vec!["7-day forecast".to_string()];

    if let Err(err) = &report.range {
        out.push(format!("  {err}"));
        return out;
    }

    let name_width = report
        .days
        .iter()
        .map(|day| day.day_name.chars().count())
        .max()
        .unwrap_or_default();
    out.extend(
        report
            .days
            .iter()
            .zip(&report.bars)
            .map(|(day, bar)| day_row(day, bar, name_width, settings)),
    );

    if let Some(trend) = trend_line(&report.daily_chart, settings.units) {
        out.push(String::new());
        out.push(trend);
    }
    out
}

fn day_row(
    day: &DayForecast,
    bar: &RangeBar,
    name_width: usize,
    settings: &RuntimeSettings,
) -> String {
    let units = settings.units;
    let temp = |value: Option<f64>| format_temperature(display_from_fahrenheit(value, units), units);
    let icon = condition_icon(
        condition_for_forecast(&day.short_forecast, day.high_temp.is_some()),
        settings.icon_mode,
    );
    let precip = day
        .precip_chance
        .filter(|pct| *pct > 0.0)
        .map(|pct| format!("{}%", pct.round() as i64))
        .unwrap_or_default();

    format!(
        "  {icon} {:<name_width$} {:>5} {} {:<5} {precip:>4}  {}",
        day.day_name,
        temp(day.low_temp),
        render_bar(bar, BAR_WIDTH, settings.icon_mode),
        temp(day.high_temp),
        day.short_forecast,
    )
    .trim_end()
    .to_string()
}

/// A zero-width span still shows a single marker so the day stays visible.
#[must_use]
pub fn render_bar(bar: &RangeBar, width: usize, mode: IconMode) -> String {
    let glyphs = BarGlyphs::for_mode(mode);
    let (start, end) = bar.cells(width);

    if start == end {
        let marker = start.min(width.saturating_sub(1));
        return (0..width)
            .map(|i| if i == marker { glyphs.marker } else { glyphs.empty })
            .collect();
    }

    (0..width)
        .map(|i| {
            if (start..end).contains(&i) {
                glyphs.fill
            } else {
                glyphs.empty
            }
        })
        .collect()
}

fn trend_line(points: &[DailyChartPoint], units: TemperatureUnit) -> Option<String> {
    if points.is_empty() {
        return None;
    }

    let entries = points
        .iter()
        .map(|point| {
            let point = point.in_unit(units);
            let low = point
                .low
                .map_or_else(|| "--".to_string(), |low| (round_half_up(low) as i64).to_string());
            format!("{} {}/{low}", point.day, round_half_up(point.high) as i64)
        })
        .collect::<Vec<_>>();

    Some(format!("  Highs/lows  {}", entries.join(" · ")))
}
