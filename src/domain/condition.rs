// Weather conditions and the icon/scene each one is drawn with
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WeatherCondition {
    Sunny,
    Clear,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Drizzle,
    Snowy,
    Thunderstorm,
    Night,
    #[default]
    Unknown,
}

impl WeatherCondition {
    #[cfg(test)]
    pub const ALL: [WeatherCondition; 10] = [
        Self::Sunny,
        Self::Clear,
        Self::PartlyCloudy,
        Self::Cloudy,
        Self::Rainy,
        Self::Drizzle,
        Self::Snowy,
        Self::Thunderstorm,
        Self::Night,
        Self::Unknown,
    ];

    /// Unrecognised tags map to `Unknown` instead of failing.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "sunny" => Self::Sunny,
            "clear" => Self::Clear,
            "partly-cloudy" => Self::PartlyCloudy,
            "cloudy" => Self::Cloudy,
            "rainy" => Self::Rainy,
            "drizzle" => Self::Drizzle,
            "snowy" => Self::Snowy,
            "thunderstorm" => Self::Thunderstorm,
            "night" => Self::Night,
            _ => Self::Unknown,
        }
    }

    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Clear => "clear",
            Self::PartlyCloudy => "partly-cloudy",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Drizzle => "drizzle",
            Self::Snowy => "snowy",
            Self::Thunderstorm => "thunderstorm",
            Self::Night => "night",
            Self::Unknown => "unknown",
        }
    }

    pub const fn icon(self) -> Icon {
        match self {
            Self::Sunny | Self::Clear | Self::Unknown => {
                Icon::new(IconGlyph::Sun, "#FACC15", IconAnimation::SpinSlow)
            }
            Self::PartlyCloudy => Icon::new(IconGlyph::Cloud, "#93C5FD", IconAnimation::Float),
            Self::Cloudy => Icon::new(IconGlyph::Cloud, "#9CA3AF", IconAnimation::Float),
            Self::Rainy => Icon::new(IconGlyph::CloudRain, "#60A5FA", IconAnimation::Bounce),
            Self::Drizzle => Icon::new(IconGlyph::CloudDrizzle, "#93C5FD", IconAnimation::Pulse),
            Self::Snowy => Icon::new(IconGlyph::CloudSnow, "#BFDBFE", IconAnimation::Pulse),
            Self::Thunderstorm => Icon::new(IconGlyph::Zap, "#FDE047", IconAnimation::Pulse),
            Self::Night => Icon::new(IconGlyph::Moon, "#BFDBFE", IconAnimation::Pulse),
        }
    }

    /// Backdrop animation for the forecast detail view.
    pub const fn scene(self) -> Scene {
        match self {
            Self::Rainy => Scene::Rain,
            Self::Sunny => Scene::Sun,
            Self::Cloudy | Self::PartlyCloudy => Scene::Clouds,
            _ => Scene::Calm,
        }
    }
}

impl Serialize for WeatherCondition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for WeatherCondition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconGlyph {
    Sun,
    Cloud,
    CloudRain,
    CloudDrizzle,
    CloudSnow,
    Zap,
    Moon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconAnimation {
    SpinSlow,
    Float,
    Bounce,
    Pulse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub glyph: IconGlyph,
    pub tint: &'static str,
    pub animation: IconAnimation,
}

impl Icon {
    const fn new(glyph: IconGlyph, tint: &'static str, animation: IconAnimation) -> Self {
        Self {
            glyph,
            tint,
            animation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scene {
    Rain,
    Sun,
    Clouds,
    Calm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        for condition in WeatherCondition::ALL {
            assert_eq!(WeatherCondition::from_tag(condition.as_tag()), condition);
        }
    }

    #[test]
    fn test_unrecognised_tag_falls_back() {
        assert_eq!(WeatherCondition::from_tag("hail"), WeatherCondition::Unknown);
        assert_eq!(WeatherCondition::from_tag(""), WeatherCondition::Unknown);
        assert_eq!(WeatherCondition::from_tag(" Rainy "), WeatherCondition::Rainy);
    }

    #[test]
    fn test_unknown_renders_as_sun() {
        assert_eq!(WeatherCondition::Unknown.icon(), WeatherCondition::Sunny.icon());
        assert_eq!(WeatherCondition::Clear.icon().glyph, IconGlyph::Sun);
    }

    #[test]
    fn test_icon_table() {
        assert_eq!(WeatherCondition::Rainy.icon().glyph, IconGlyph::CloudRain);
        assert_eq!(WeatherCondition::Rainy.icon().animation, IconAnimation::Bounce);
        assert_eq!(WeatherCondition::Thunderstorm.icon().glyph, IconGlyph::Zap);
        assert_eq!(WeatherCondition::Night.icon().glyph, IconGlyph::Moon);
        assert_ne!(
            WeatherCondition::Cloudy.icon().tint,
            WeatherCondition::PartlyCloudy.icon().tint
        );
    }

    #[test]
    fn test_scenes() {
        assert_eq!(WeatherCondition::Rainy.scene(), Scene::Rain);
        assert_eq!(WeatherCondition::Sunny.scene(), Scene::Sun);
        assert_eq!(WeatherCondition::PartlyCloudy.scene(), Scene::Clouds);
        assert_eq!(WeatherCondition::Snowy.scene(), Scene::Calm);
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&WeatherCondition::PartlyCloudy).unwrap();
        assert_eq!(json, "\"partly-cloudy\"");
        let parsed: WeatherCondition = serde_json::from_str("\"tornado\"").unwrap();
        assert_eq!(parsed, WeatherCondition::Unknown);
    }
}
