pub mod current;
pub mod daily;
pub mod hourly;

use crate::{app::settings::RuntimeSettings, domain::report::WeatherReport};

/// Plain-text rendering of a full report, one section after another.
#[must_use]
pub fn render(report: &WeatherReport, settings: &RuntimeSettings) -> String {
    let mut lines = vec![report.place.clone(), "=".repeat(report.place.chars().count())];

    lines.push(String::new());
    lines.extend(current::lines(&report.current, settings));
    lines.push(String::new());
    lines.extend(hourly::lines(&report.hourly, settings));
    lines.push(String::new());
    lines.extend(daily::lines(report, settings));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
