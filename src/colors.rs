use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::Command;
use std::fmt;

/// Terminal colors used for entry names, logos and severity tiers.
// The whole palette stays: logos pick their color slots from it.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colors {
    Clear,
    RedNormal,
    RedBright,
    GreenNormal,
    GreenBright,
    YellowNormal,
    YellowBright,
    BlueNormal,
    BlueBright,
    MagentaNormal,
    MagentaBright,
    CyanNormal,
    CyanBright,
    WhiteNormal,
    WhiteBright,
}

impl Colors {
    fn color(self) -> Option<Color> {
        match self {
            Self::Clear         => None,
            Self::RedNormal     => Some(Color::DarkRed),
            Self::RedBright     => Some(Color::Red),
            Self::GreenNormal   => Some(Color::DarkGreen),
            Self::GreenBright   => Some(Color::Green),
            Self::YellowNormal  => Some(Color::DarkYellow),
            Self::YellowBright  => Some(Color::Yellow),
            Self::BlueNormal    => Some(Color::DarkBlue),
            Self::BlueBright    => Some(Color::Blue),
            Self::MagentaNormal => Some(Color::DarkMagenta),
            Self::MagentaBright => Some(Color::Magenta),
            Self::CyanNormal    => Some(Color::DarkCyan),
            Self::CyanBright    => Some(Color::Cyan),
            Self::WhiteNormal   => Some(Color::Grey),
            Self::WhiteBright   => Some(Color::White),
        }
    }

    /// The ANSI escape sequence selecting this color (`Clear` resets).
    pub fn escape(self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = match self.color() {
            Some(c) => SetForegroundColor(c).write_ansi(&mut out),
            None    => ResetColor.write_ansi(&mut out),
        };
        out
    }
}

impl fmt::Display for Colors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.escape())
    }
}
