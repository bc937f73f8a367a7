use crate::cli::IconMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCategory {
    Thunder,
    Ice,
    Rain,
    Snow,
    Fog,
    Wind,
    Cloudy,
    Clear,
    ClearNight,
}

/// Keyword table checked in order, most severe first.
const KEYWORDS: &[(&[&str], WeatherCategory)] = &[
    (&["thunder"], WeatherCategory::Thunder),
    (&["sleet", "ice", "freezing"], WeatherCategory::Ice),
    (&["rain", "shower", "drizzle"], WeatherCategory::Rain),
    (&["snow", "blizzard"], WeatherCategory::Snow),
    (&["fog", "haze", "mist"], WeatherCategory::Fog),
    (&["wind", "breezy"], WeatherCategory::Wind),
    (&["cloud", "overcast"], WeatherCategory::Cloudy),
];

/// Classifies a free-text NWS summary such as "Chance Rain Showers".
#[must_use]
pub fn condition_for_forecast(short_forecast: &str, is_daytime: bool) -> WeatherCategory {
    let text = short_forecast.to_lowercase();

    if let Some(category) = KEYWORDS.iter().find_map(|(words, category)| {
        words
            .iter()
            .any(|word| text.contains(word))
            .then_some(*category)
    }) {
        return category;
    }

    if ["sunny", "clear", "fair"]
        .iter()
        .any(|word| text.contains(word))
    {
        return if is_daytime {
            WeatherCategory::Clear
        } else {
            WeatherCategory::ClearNight
        };
    }

    WeatherCategory::Cloudy
}

#[must_use]
pub fn condition_icon(category: WeatherCategory, mode: IconMode) -> &'static str {
    let (ascii, emoji, unicode) = icon_tokens(category);
    match mode {
        IconMode::Ascii => ascii,
        IconMode::Emoji => emoji,
        IconMode::Unicode => unicode,
    }
}

fn icon_tokens(category: WeatherCategory) -> (&'static str, &'static str, &'static str) {
    match category {
        WeatherCategory::Thunder => ("THN", "⛈️", "⚡"),
        WeatherCategory::Ice => ("ICE", "🌨️", "❆"),
        WeatherCategory::Rain => ("RAN", "🌧️", "☂"),
        WeatherCategory::Snow => ("SNW", "❄️", "❄"),
        WeatherCategory::Fog => ("FOG", "🌫️", "░"),
        WeatherCategory::Wind => ("WND", "💨", "≋"),
        WeatherCategory::Cloudy => ("CLD", "☁️", "☁"),
        WeatherCategory::Clear => ("SUN", "☀️", "☀"),
        WeatherCategory::ClearNight => ("MON", "🌙", "☾"),
    }
}
