use crate::{
    app::settings::RuntimeSettings,
    cli::IconMode,
    domain::{charts::HourlyChartPoint, weather::format_temperature},
};

const PRECIP_CELLS: usize = 10;

pub fn lines(points: &[HourlyChartPoint], settings: &RuntimeSettings) -> Vec<String> {
    let mut out = vec![format!("Hourly · next {}h", points.len())];
    if points.is_empty() {
        out.push("  No hourly data available".to_string());
        return out;
    }

    let units = settings.units;
    out.extend(points.iter().map(|point| {
        let point = point.in_unit(units);
        format!(
            "  {:>5}  {:>5}  {} {:>3}%",
            point.time,
            format_temperature(Some(point.temperature), units),
            precip_bar(point.precip, settings.icon_mode),
            point.precip.round() as i64,
        )
    }));
    out
}

fn precip_bar(pct: f64, mode: IconMode) -> String {
    let filled = (pct / 100.0 * PRECIP_CELLS as f64)
        .round()
        .clamp(0.0, PRECIP_CELLS as f64) as usize;
    let (on, off) = match mode {
        IconMode::Ascii => ('#', '.'),
        IconMode::Unicode | IconMode::Emoji => ('▮', '▯'),
    };

    std::iter::repeat_n(on, filled)
        .chain(std::iter::repeat_n(off, PRECIP_CELLS - filled))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{charts::to_hourly_chart_data, weather::TemperatureUnit},
        test_support::{period, with_precip},
    };

    fn settings(units: TemperatureUnit) -> RuntimeSettings {
        RuntimeSettings {
            units,
            icon_mode: IconMode::Ascii,
            ..RuntimeSettings::default()
        }
    }

    fn points() -> Vec<HourlyChartPoint> {
        to_hourly_chart_data(&[
            with_precip(
                period("", "2026-02-23T14:00:00-06:00", true, 41.0),
                Some(20.0),
            ),
            with_precip(
                period("", "2026-02-23T15:00:00-06:00", true, 39.0),
                Some(100.0),
            ),
            period("", "2026-02-23T16:00:00-06:00", true, 38.0),
        ])
    }

    #[test]
    fn rows_show_time_temperature_and_precip() {
        assert_eq!(
            lines(&points(), &settings(TemperatureUnit::Fahrenheit)),
            vec![
                "Hourly · next 3h",
                "   2 PM   41°F  ##........  20%",
                "   3 PM   39°F  ########## 100%",
                "   4 PM   38°F  ..........   0%",
            ]
        );
    }

    #[test]
    fn celsius_converts_at_display_time() {
        let rendered = lines(&points(), &settings(TemperatureUnit::Celsius));
        assert_eq!(rendered[1], "   2 PM    5°C  ##........  20%");
    }

    #[test]
    fn empty_strip_says_so() {
        assert_eq!(
            lines(&[], &settings(TemperatureUnit::Fahrenheit)),
            vec!["Hourly · next 0h", "  No hourly data available"]
        );
    }

    #[test]
    fn unicode_bar_uses_block_glyphs() {
        assert_eq!(precip_bar(50.0, IconMode::Unicode), "▮▮▮▮▮▯▯▯▯▯");
        assert_eq!(precip_bar(140.0, IconMode::Ascii), "##########");
    }
}
