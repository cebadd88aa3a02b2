use crate::colors::Colors;
use serde::{Deserialize, Serialize};

/// Severity of a utilization ratio, ordered Normal < Warning < Danger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Normal,
    Warning,
    Danger,
}

impl Tier {
    pub fn color(self) -> Colors {
        match self {
            Tier::Normal  => Colors::GreenNormal,
            Tier::Warning => Colors::YellowNormal,
            Tier::Danger  => Colors::RedNormal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Normal  => "normal",
            Tier::Warning => "warning",
            Tier::Danger  => "danger",
        }
    }
}

/// A `{warning, danger}` pair of percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub warning: f64,
    pub danger:  f64,
}

impl Breakpoints {
    pub fn classify(&self, value: f64) -> Tier {
        classify(value, self.warning, self.danger)
    }

    /// Swap the pair if it was configured descending.
    pub fn ascending(self) -> Self {
        if self.warning <= self.danger {
            self
        } else {
            Self { warning: self.danger, danger: self.warning }
        }
    }
}

/// Breakpoint values themselves belong to the higher tier.
pub fn classify(value: f64, warning: f64, danger: f64) -> Tier {
    if value >= danger {
        Tier::Danger
    } else if value >= warning {
        Tier::Warning
    } else {
        Tier::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ties_go_up() {
        assert_eq!(classify(50.0, 50.0, 75.0), Tier::Warning);
        assert_eq!(classify(75.0, 50.0, 75.0), Tier::Danger);
        assert_eq!(classify(49.999, 50.0, 75.0), Tier::Normal);
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(Tier::Normal < Tier::Warning);
        assert!(Tier::Warning < Tier::Danger);
    }

    #[test]
    fn descending_pair_is_swapped() {
        let b = Breakpoints { warning: 90.0, danger: 10.0 }.ascending();
        assert_eq!(b, Breakpoints { warning: 10.0, danger: 90.0 });
    }

    proptest! {
        #[test]
        fn tier_matches_breakpoint_intervals(
            v in -10.0f64..200.0,
            w in 0.0f64..100.0,
            gap in 0.001f64..100.0,
        ) {
            let d = w + gap;
            let tier = classify(v, w, d);
            prop_assert_eq!(tier == Tier::Normal,  v < w);
            prop_assert_eq!(tier == Tier::Warning, w <= v && v < d);
            prop_assert_eq!(tier == Tier::Danger,  v >= d);
        }
    }
}
