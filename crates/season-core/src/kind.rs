use std::fmt;
use std::str::FromStr;

use crate::error::EffectError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Rain,
    Snow,
    Sakura,
    AutumnLeaves,
    Willow,
}

/// Which slot an effect occupies on the page. At most one effect per layer
/// should be running at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Weather,
    Foliage,
}

impl EffectKind {
    pub const ALL: [EffectKind; 5] = [
        EffectKind::Rain,
        EffectKind::Snow,
        EffectKind::Sakura,
        EffectKind::AutumnLeaves,
        EffectKind::Willow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EffectKind::Rain => "rain",
            EffectKind::Snow => "snow",
            EffectKind::Sakura => "sakura",
            EffectKind::AutumnLeaves => "autumn-leaves",
            EffectKind::Willow => "willow",
        }
    }

    pub fn layer(self) -> Layer {
        match self {
            EffectKind::Rain | EffectKind::Snow => Layer::Weather,
            EffectKind::Sakura | EffectKind::AutumnLeaves | EffectKind::Willow => Layer::Foliage,
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EffectKind {
    type Err = EffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rain" => Ok(EffectKind::Rain),
            "snow" => Ok(EffectKind::Snow),
            "sakura" | "petals" => Ok(EffectKind::Sakura),
            "autumn" | "autumn-leaves" | "autumn_leaves" | "leaves" => Ok(EffectKind::AutumnLeaves),
            "willow" => Ok(EffectKind::Willow),
            _ => Err(EffectError::UnknownEffect(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    /// Early-summer rainy season.
    Tsuyu,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 5] = [
        Season::Spring,
        Season::Tsuyu,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
    ];

    /// Effects that run while this season is selected; never more than one
    /// per [`Layer`].
    pub fn effects(self) -> &'static [EffectKind] {
        match self {
            Season::Spring => &[EffectKind::Sakura],
            Season::Tsuyu => &[EffectKind::Rain],
            Season::Summer => &[EffectKind::Willow],
            Season::Autumn => &[EffectKind::AutumnLeaves],
            Season::Winter => &[EffectKind::Snow],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Tsuyu => "tsuyu",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Season {
    type Err = EffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "tsuyu" | "rainy" => Ok(Season::Tsuyu),
            "summer" => Ok(Season::Summer),
            "autumn" | "fall" => Ok(Season::Autumn),
            "winter" => Ok(Season::Winter),
            _ => Err(EffectError::UnknownSeason(s.to_string())),
        }
    }
}
