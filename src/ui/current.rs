use crate::{
    app::settings::RuntimeSettings,
    domain::weather::{
        CurrentConditions, condition_for_forecast, condition_icon, degrees_to_compass,
        display_from_celsius, format_temperature, kmh_to_mph, meters_to_miles, pascals_to_in_hg,
    },
};

const LABEL_WIDTH: usize = 11;

pub fn lines(current: &CurrentConditions, settings: &RuntimeSettings) -> Vec<String> {
    let units = settings.units;
    let icon = condition_icon(
        condition_for_forecast(&current.description, true),
        settings.icon_mode,
    );
    let temperature = format_temperature(display_from_celsius(current.temperature_c, units), units);

    let mut out = vec![
        format!("Current conditions · {}", current.station_name),
        format!("  {icon} {temperature}  {}", current.description),
    ];
    out.extend(detail_rows(current, settings).into_iter().map(|(label, value)| {
        format!("  {label:<LABEL_WIDTH$}{value}")
    }));
    out
}

fn detail_rows(current: &CurrentConditions, settings: &RuntimeSettings) -> Vec<(&'static str, String)> {
    let units = settings.units;
    let temp = |celsius: Option<f64>| {
        celsius.map(|c| format_temperature(display_from_celsius(Some(c), units), units))
    };

    let mut rows = Vec::new();
    if let Some(humidity) = current.humidity {
        rows.push(("Humidity", format!("{}%", humidity.round() as i64)));
    }
    if let Some(wind) = wind_summary(current) {
        rows.push(("Wind", wind));
    }
    if let Some(dewpoint) = temp(current.dewpoint_c) {
        rows.push(("Dew point", dewpoint));
    }
    if let Some(miles) = meters_to_miles(current.visibility_m) {
        rows.push(("Visibility", format!("{miles:.1} mi")));
    }
    if let Some(in_hg) = pascals_to_in_hg(current.pressure_pa) {
        rows.push(("Pressure", format!("{in_hg:.2} inHg")));
    }
    if let Some(chill) = temp(current.wind_chill_c) {
        rows.push(("Wind chill", chill));
    }
    if let Some(heat) = temp(current.heat_index_c) {
        rows.push(("Heat index", heat));
    }
    rows
}

/// "NW 10 mph (gusts 18)"; `None` when no wind speed was reported.
pub fn wind_summary(current: &CurrentConditions) -> Option<String> {
    let mph = kmh_to_mph(current.wind_speed_kmh)?;
    let direction = degrees_to_compass(current.wind_direction_deg).unwrap_or_default();
    let gusts = kmh_to_mph(current.wind_gust_kmh)
        .map(|gust| format!(" (gusts {})", gust.round() as i64))
        .unwrap_or_default();

    Some(
        format!("{direction} {} mph{gusts}", mph.round() as i64)
            .trim_start()
            .to_string(),
    )
}
