//! WMO weather code classification.
//!
//! See <https://open-meteo.com/en/docs#weathervariables> for the code table.

/// Display category for a WMO weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCategory {
    Clear,
    PartlyCloudy,
    Fog,
    Drizzle,
    FreezingDrizzle,
    Rain,
    FreezingRain,
    Snow,
    SnowGrains,
    RainShowers,
    SnowShowers,
    Thunderstorm,
    ThunderstormWithHail,
    Unknown,
}

impl WeatherCategory {
    /// Convert a WMO weather code to its category. Total: unrecognized codes map to `Unknown`.
    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1 | 2 | 3 => Self::PartlyCloudy,
            45 | 48 => Self::Fog,
            51 | 53 | 55 => Self::Drizzle,
            56 | 57 => Self::FreezingDrizzle,
            61 | 63 | 65 => Self::Rain,
            66 | 67 => Self::FreezingRain,
            71 | 73 | 75 => Self::Snow,
            77 => Self::SnowGrains,
            80 | 81 | 82 => Self::RainShowers,
            85 | 86 => Self::SnowShowers,
            95 => Self::Thunderstorm,
            96 | 99 => Self::ThunderstormWithHail,
            _ => Self::Unknown,
        }
    }

    /// Symbol shown next to the forecast text
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Clear => "\u{2600}\u{fe0f}",
            Self::PartlyCloudy => "\u{1f324}\u{fe0f}",
            Self::Fog => "\u{1f32b}\u{fe0f}",
            Self::Drizzle => "\u{1f326}\u{fe0f}",
            Self::FreezingDrizzle | Self::Rain | Self::RainShowers => "\u{1f327}\u{fe0f}",
            Self::FreezingRain | Self::SnowGrains => "\u{1f328}\u{fe0f}",
            Self::Snow | Self::SnowShowers => "\u{2744}\u{fe0f}",
            Self::Thunderstorm | Self::ThunderstormWithHail => "\u{26c8}\u{fe0f}",
            Self::Unknown => "\u{2753}",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear sky",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::FreezingDrizzle => "Freezing drizzle",
            Self::Rain => "Rain",
            Self::FreezingRain => "Freezing rain",
            Self::Snow => "Snow",
            Self::SnowGrains => "Snow grains",
            Self::RainShowers => "Rain showers",
            Self::SnowShowers => "Snow showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::ThunderstormWithHail => "Thunderstorm with hail",
            Self::Unknown => "Unknown",
        }
    }
}

/// Decorative background drawn behind the current conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundTheme {
    Sun,
    Rain,
    Clouds,
}

impl BackgroundTheme {
    /// Coarse theme for a weather code; `None` clears the background.
    pub fn from_wmo_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Sun),
            61 | 63 | 65 | 80 | 81 | 82 => Some(Self::Rain),
            1 | 2 | 3 => Some(Self::Clouds),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Rain => "rain",
            Self::Clouds => "clouds",
        }
    }
}

/// Classify a weather code into its display category
pub fn classify(code: i32) -> WeatherCategory {
    WeatherCategory::from_wmo_code(code)
}

/// Select the background theme for a weather code
pub fn theme(code: i32) -> Option<BackgroundTheme> {
    BackgroundTheme::from_wmo_code(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wmo_code_groups() {
        let table: &[(&[i32], WeatherCategory)] = &[
            (&[0], WeatherCategory::Clear),
            (&[1, 2, 3], WeatherCategory::PartlyCloudy),
            (&[45, 48], WeatherCategory::Fog),
            (&[51, 53, 55], WeatherCategory::Drizzle),
            (&[56, 57], WeatherCategory::FreezingDrizzle),
            (&[61, 63, 65], WeatherCategory::Rain),
            (&[66, 67], WeatherCategory::FreezingRain),
            (&[71, 73, 75], WeatherCategory::Snow),
            (&[77], WeatherCategory::SnowGrains),
            (&[80, 81, 82], WeatherCategory::RainShowers),
            (&[85, 86], WeatherCategory::SnowShowers),
            (&[95], WeatherCategory::Thunderstorm),
            (&[96, 99], WeatherCategory::ThunderstormWithHail),
        ];

        for (codes, expected) in table {
            for code in *codes {
                assert_eq!(classify(*code), *expected, "code {code}");
            }
        }
    }

    #[test]
    fn test_classify_examples() {
        assert_eq!(classify(61), WeatherCategory::Rain);
        assert_eq!(classify(2), WeatherCategory::PartlyCloudy);
        assert_eq!(classify(100), WeatherCategory::Unknown);
    }

    #[test]
    fn test_classify_is_total() {
        for code in [i32::MIN, -1, 4, 44, 50, 98, 100, 1000, i32::MAX] {
            assert_eq!(classify(code), WeatherCategory::Unknown, "code {code}");
        }
        for code in -200..=200 {
            let category = classify(code);
            assert!(!category.symbol().is_empty());
            assert!(!category.description().is_empty());
        }
    }

    #[test]
    fn test_theme_selection() {
        assert_eq!(theme(0), Some(BackgroundTheme::Sun));
        assert_eq!(theme(82), Some(BackgroundTheme::Rain));
        assert_eq!(theme(61), Some(BackgroundTheme::Rain));
        assert_eq!(theme(3), Some(BackgroundTheme::Clouds));
        assert_eq!(theme(45), None);
        assert_eq!(theme(95), None);
        assert_eq!(theme(-7), None);
    }

    #[test]
    fn test_symbols_follow_categories() {
        assert_eq!(classify(0).symbol(), "\u{2600}\u{fe0f}");
        assert_eq!(classify(65).symbol(), classify(81).symbol());
        assert_eq!(classify(12).symbol(), "\u{2753}");
    }

    #[test]
    fn test_theme_name() {
        assert_eq!(BackgroundTheme::Clouds.name(), "clouds");
    }
}
