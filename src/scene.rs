//! Zone → presentation mapping
//!
//! Plain data for whatever draws the scene: what the speech bubble says,
//! how the rider looks and what the sky does. Nothing here renders.

use serde::Serialize;

use crate::sim::Zone;

/// Message language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Lang {
    #[default]
    Zh,
    En,
}

impl Lang {
    /// Parse a language tag such as `en`, `en-US`, `zh-CN`
    pub fn from_str(s: &str) -> Option<Self> {
        let primary = s.split(['-', '_']).next().unwrap_or_default();
        match primary.to_lowercase().as_str() {
            "zh" => Some(Lang::Zh),
            "en" => Some(Lang::En),
            _ => None,
        }
    }
}

/// Text shown in the speech bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Message {
    PushToStart,
    GoFaster,
    Happy,
    TooFast,
    AtLimit,
}

impl Message {
    pub fn for_zone(zone: Zone) -> Self {
        match zone {
            Zone::Stopped => Message::PushToStart,
            Zone::Low => Message::GoFaster,
            Zone::Fun => Message::Happy,
            Zone::High => Message::TooFast,
            Zone::Max => Message::AtLimit,
        }
    }

    pub fn text(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (Message::PushToStart, Lang::Zh) => "点击屏幕推一下！",
            (Message::PushToStart, Lang::En) => "Tap to push!",
            (Message::GoFaster, Lang::Zh) => "再快点！",
            (Message::GoFaster, Lang::En) => "Faster!",
            (Message::Happy, Lang::Zh) => "好开心！再快点！",
            (Message::Happy, Lang::En) => "So fun! Faster!",
            (Message::TooFast, Lang::Zh) => "太快了太快了！",
            (Message::TooFast, Lang::En) => "Too fast, too fast!",
            (Message::AtLimit, Lang::Zh) => "已经最高了！",
            (Message::AtLimit, Lang::En) => "That's the highest!",
        }
    }
}

/// Fixed hint under the speech bubble
pub fn hint(lang: Lang) -> &'static str {
    match lang {
        Lang::Zh => "点击屏幕任何位置推秋千",
        Lang::En => "Tap anywhere to push the swing",
    }
}

/// Extra motion on the message text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Emphasis {
    None,
    Pulse,
    Bounce,
}

impl Emphasis {
    /// CSS animation class, empty for none
    pub fn css_class(&self) -> &'static str {
        match self {
            Emphasis::None => "",
            Emphasis::Pulse => "animate-pulse",
            Emphasis::Bounce => "animate-bounce",
        }
    }
}

/// How the message text is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageStyle {
    /// Text color as `#rrggbb`
    pub color: &'static str,
    pub emphasis: Emphasis,
}

impl MessageStyle {
    pub fn for_zone(zone: Zone) -> Self {
        match zone {
            Zone::Max => Self {
                color: "#7e22ce",
                emphasis: Emphasis::Pulse,
            },
            Zone::High => Self {
                color: "#ef4444",
                emphasis: Emphasis::Bounce,
            },
            Zone::Fun => Self {
                color: "#db2777",
                emphasis: Emphasis::None,
            },
            Zone::Stopped | Zone::Low => Self {
                color: "#374151",
                emphasis: Emphasis::None,
            },
        }
    }
}

/// Rider's mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Normal,
    Happy,
    Scared,
}

impl Mood {
    pub fn for_zone(zone: Zone) -> Self {
        match zone {
            Zone::Max | Zone::High => Mood::Scared,
            Zone::Fun => Mood::Happy,
            Zone::Stopped | Zone::Low => Mood::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Normal => "normal",
            Mood::Happy => "happy",
            Mood::Scared => "scared",
        }
    }

    pub fn face(&self) -> Face {
        match self {
            Mood::Normal => Face {
                mouth: Mouth::SmallSmile,
                eyes: Eyes::BigShiny,
                arm_raised: false,
            },
            Mood::Happy => Face {
                mouth: Mouth::BigSmile,
                eyes: Eyes::BigShiny,
                arm_raised: true,
            },
            Mood::Scared => Face {
                mouth: Mouth::OpenO,
                eyes: Eyes::WideSmallPupils,
                arm_raised: true,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mouth {
    SmallSmile,
    BigSmile,
    OpenO,
}

impl Mouth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mouth::SmallSmile => "small-smile",
            Mouth::BigSmile => "big-smile",
            Mouth::OpenO => "open",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Eyes {
    BigShiny,
    WideSmallPupils,
}

impl Eyes {
    pub fn as_str(&self) -> &'static str {
        match self {
            Eyes::BigShiny => "shiny",
            Eyes::WideSmallPupils => "wide",
        }
    }
}

/// Facial features for a mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Face {
    pub mouth: Mouth,
    pub eyes: Eyes,
    /// Right arm up (excited or scared)
    pub arm_raised: bool,
}

impl Face {
    /// `data-*` attributes the page styles the rider by
    pub fn data_attributes(&self) -> [(&'static str, &'static str); 3] {
        [
            ("data-mouth", self.mouth.as_str()),
            ("data-eyes", self.eyes.as_str()),
            ("data-arm", if self.arm_raised { "up" } else { "down" }),
        ]
    }
}

/// Background sky, calm to most intense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkyGradient {
    Calm,
    Bright,
    Intense,
    MostIntense,
}

impl SkyGradient {
    pub fn for_zone(zone: Zone) -> Self {
        match zone {
            Zone::Max => SkyGradient::MostIntense,
            Zone::High => SkyGradient::Intense,
            Zone::Fun => SkyGradient::Bright,
            Zone::Stopped | Zone::Low => SkyGradient::Calm,
        }
    }

    /// Top and bottom color stops as `#rrggbb`
    pub fn stops(&self) -> (&'static str, &'static str) {
        match self {
            SkyGradient::Calm => ("#bfdbfe", "#dcfce7"),
            SkyGradient::Bright => ("#67e8f9", "#60a5fa"),
            SkyGradient::Intense => ("#fdba74", "#fca5a5"),
            SkyGradient::MostIntense => ("#6b21a8", "#ef4444"),
        }
    }

    /// CSS background value, top to bottom
    pub fn css(&self) -> String {
        let (top, bottom) = self.stops();
        format!("linear-gradient(to bottom, {}, {})", top, bottom)
    }
}

/// Scale of the message bubble while the push flash is showing
pub const PUSH_BUBBLE_SCALE: f64 = 1.05;

/// Everything the renderer needs for one zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub message: Message,
    pub style: MessageStyle,
    pub mood: Mood,
    pub sky: SkyGradient,
}

impl Presentation {
    pub fn for_zone(zone: Zone) -> Self {
        Self {
            message: Message::for_zone(zone),
            style: MessageStyle::for_zone(zone),
            mood: Mood::for_zone(zone),
            sky: SkyGradient::for_zone(zone),
        }
    }
}
