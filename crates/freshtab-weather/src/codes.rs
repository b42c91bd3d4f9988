//! WMO weather code catalog.

use crate::types::{CategoryTag, WeatherDescription};

/// Map a WMO weather code to its description and icon category.
/// Total over all integers; unrecognized codes degrade to the unknown entry.
/// See: https://open-meteo.com/en/docs#weathervariables
pub fn describe(code: i32) -> WeatherDescription {
    let (label, icon) = match code {
        0 => ("Clear sky", CategoryTag::Clear),
        1 => ("Mainly clear", CategoryTag::PartlyCloudy),
        2 => ("Partly cloudy", CategoryTag::PartlyCloudy),
        3 => ("Overcast", CategoryTag::Overcast),
        45 => ("Fog", CategoryTag::Fog),
        48 => ("Depositing rime fog", CategoryTag::Fog),
        51 => ("Drizzle: Light intensity", CategoryTag::Drizzle),
        53 => ("Drizzle: Moderate intensity", CategoryTag::Drizzle),
        55 => ("Drizzle: Dense intensity", CategoryTag::Drizzle),
        56 => ("Freezing Drizzle: Light intensity", CategoryTag::Drizzle),
        57 => ("Freezing Drizzle: Dense intensity", CategoryTag::Drizzle),
        61 => ("Rain: Slight intensity", CategoryTag::Rain),
        63 => ("Rain: Moderate intensity", CategoryTag::Rain),
        65 => ("Rain: Heavy intensity", CategoryTag::Rain),
        66 => ("Freezing Rain: Light intensity", CategoryTag::Rain),
        67 => ("Freezing Rain: Heavy intensity", CategoryTag::Rain),
        71 => ("Snow fall: Slight intensity", CategoryTag::Snow),
        73 => ("Snow fall: Moderate intensity", CategoryTag::Snow),
        75 => ("Snow fall: Heavy intensity", CategoryTag::Snow),
        77 => ("Snow grains", CategoryTag::Snow),
        80 => ("Rain showers: Slight intensity", CategoryTag::Rain),
        81 => ("Rain showers: Moderate intensity", CategoryTag::Rain),
        82 => ("Rain showers: Violent intensity", CategoryTag::Rain),
        85 => ("Snow showers slight", CategoryTag::Snow),
        86 => ("Snow showers heavy", CategoryTag::Snow),
        95 => ("Thunderstorm: Slight or moderate", CategoryTag::Thunderstorm),
        96 => ("Thunderstorm with slight hail", CategoryTag::Thunderstorm),
        99 => ("Thunderstorm with heavy hail", CategoryTag::Thunderstorm),
        _ => ("Unknown weather condition", CategoryTag::Unknown),
    };
    WeatherDescription { label, icon }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECOGNIZED: [i32; 28] = [
        0, 1, 2, 3, 45, 48, 51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 71, 73, 75, 77, 80, 81, 82,
        85, 86, 95, 96, 99,
    ];

    #[test]
    fn test_clear_codes() {
        assert_eq!(describe(0).label, "Clear sky");
        assert_eq!(describe(0).icon, CategoryTag::Clear);
        assert_eq!(describe(1).label, "Mainly clear");
        assert_eq!(describe(1).icon, CategoryTag::PartlyCloudy);
        assert_eq!(describe(2).icon, CategoryTag::PartlyCloudy);
        assert_eq!(describe(3).label, "Overcast");
        assert_eq!(describe(3).icon, CategoryTag::Overcast);
    }

    #[test]
    fn test_fog_codes() {
        assert_eq!(describe(45).label, "Fog");
        assert_eq!(describe(48).label, "Depositing rime fog");
        assert_eq!(describe(45).icon, CategoryTag::Fog);
        assert_eq!(describe(48).icon, CategoryTag::Fog);
    }

    #[test]
    fn test_drizzle_codes() {
        for code in [51, 53, 55, 56, 57] {
            assert_eq!(describe(code).icon, CategoryTag::Drizzle, "code {code}");
        }
        assert_eq!(describe(51).label, "Drizzle: Light intensity");
        assert_eq!(describe(57).label, "Freezing Drizzle: Dense intensity");
    }

    #[test]
    fn test_rain_codes() {
        for code in [61, 63, 65, 66, 67, 80, 81, 82] {
            assert_eq!(describe(code).icon, CategoryTag::Rain, "code {code}");
        }
        assert_eq!(describe(61).label, "Rain: Slight intensity");
        assert_eq!(describe(82).label, "Rain showers: Violent intensity");
    }

    #[test]
    fn test_snow_codes() {
        for code in [71, 73, 75, 77, 85, 86] {
            assert_eq!(describe(code).icon, CategoryTag::Snow, "code {code}");
        }
        assert_eq!(describe(77).label, "Snow grains");
    }

    #[test]
    fn test_thunderstorm_codes() {
        for code in [95, 96, 99] {
            assert_eq!(describe(code).icon, CategoryTag::Thunderstorm, "code {code}");
        }
        assert_eq!(describe(95).label, "Thunderstorm: Slight or moderate");
    }

    #[test]
    fn test_unrecognized_codes_degrade_to_unknown() {
        for code in [-1, 4, 44, 100, i32::MAX, i32::MIN] {
            let description = describe(code);
            assert_eq!(description.label, "Unknown weather condition");
            assert_eq!(description.icon, CategoryTag::Unknown);
        }
    }

    #[test]
    fn test_total_over_full_code_range() {
        for code in 0..=99 {
            let description = describe(code);
            if RECOGNIZED.contains(&code) {
                assert_ne!(description.icon, CategoryTag::Unknown, "code {code}");
            } else {
                assert_eq!(description.label, "Unknown weather condition", "code {code}");
            }
        }
    }

    #[test]
    fn test_describe_is_deterministic() {
        assert_eq!(describe(61), describe(61));
    }
}
