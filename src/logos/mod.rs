pub mod arch_linux;

use crate::colors::Colors;

/// ASCII art with `{c0}`/`{c1}` color slots.
pub struct Logo {
    pub colors: [Colors; 2],
    pub lines:  &'static [&'static str],
}

impl Logo {
    /// Lines with color slots substituted.
    pub fn painted(&self) -> Vec<String> {
        self.lines.iter()
            .map(|l| {
                l.replace("{c0}", &self.colors[0].escape())
                    .replace("{c1}", &self.colors[1].escape())
            })
            .collect()
    }

    /// Visible width of the widest line.
    pub fn width(&self) -> usize {
        self.lines.iter()
            .map(|l| l.replace("{c0}", "").replace("{c1}", "").chars().count())
            .max()
            .unwrap_or(0)
    }
}
