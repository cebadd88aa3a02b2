use crate::colors::Colors;
use crate::entries::Entry;
use crate::logos::Logo;
use anyhow::Result;
use serde_json::{json, Value};

/// The logo with one entry beside each of its lines. Entries that don't fit
/// continue below, aligned with the others.
pub fn render(logo: &Logo, entries: &[Entry]) -> String {
    let art = logo.painted();
    let pad = " ".repeat(logo.width());
    let rows = art.len().max(entries.len());
    let clear = Colors::Clear;

    let mut out = String::new();
    for i in 0..rows {
        match art.get(i) {
            Some(line) => out.push_str(line),
            None       => out.push_str(&pad),
        }
        if let Some(e) = entries.get(i) {
            out.push_str(&format!(" {}{}:{} {}", logo.colors[0], e.name, clear, e.value));
        }
        out.push_str(&format!("{}\n", clear));
    }
    out
}

/// Uncolored snapshot of every entry.
pub fn to_json(entries: &[Entry]) -> Result<String> {
    let list: Vec<Value> = entries.iter().map(|e| {
        json!({
            "name":  e.name,
            "value": e.plain,
            "tier":  e.tier.map(|t| t.label()),
        })
    }).collect();

    let snapshot = json!({
        "version":   env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Local::now().to_rfc3339(),
        "entries":   list,
    });
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logos::arch_linux::ARCH_LINUX;
    use crate::severity::Tier;

    fn entry(name: &'static str, value: &str) -> Entry {
        Entry::text(name, value.to_string())
    }

    #[test]
    fn entries_sit_beside_logo() {
        let out = render(&ARCH_LINUX, &[entry("Shell", "/bin/bash"), entry("Packages", "42")]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), ARCH_LINUX.lines.len());
        assert!(lines[0].contains("Shell:"));
        assert!(lines[0].ends_with(&format!("/bin/bash{}", Colors::Clear)));
        assert!(lines[1].contains("42"));
        assert!(!lines[2].contains(':'));
    }

    #[test]
    fn overflow_entries_are_padded() {
        let many: Vec<Entry> = (0..ARCH_LINUX.lines.len() + 2).map(|_| entry("X", "y")).collect();
        let out = render(&ARCH_LINUX, &many);
        let last = out.lines().last().unwrap();
        assert!(last.starts_with(&" ".repeat(ARCH_LINUX.width())));
        assert!(last.contains("X:"));
    }

    #[test]
    fn json_uses_plain_values() {
        let colored = Entry {
            name:  "Disk",
            value: format!("{}1.0 GiB / 2.0 GiB{}", Colors::GreenNormal, Colors::Clear),
            plain: "1.0 GiB / 2.0 GiB".to_string(),
            tier:  Some(Tier::Normal),
        };
        let text = to_json(&[colored, entry("Shell", "/bin/sh")]).unwrap();
        let v: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["entries"][0]["value"], "1.0 GiB / 2.0 GiB");
        assert_eq!(v["entries"][0]["tier"], "normal");
        assert!(v["entries"][1]["tier"].is_null());
        assert!(!text.contains('\x1b'));
    }
}
