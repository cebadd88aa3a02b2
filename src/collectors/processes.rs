use crate::host::{probe, Host};
use std::cell::OnceCell;

/// Running command names, probed once per run on first use and shared by
/// every entry that asks.
#[derive(Default)]
pub struct Processes {
    list: OnceCell<Vec<String>>,
}

impl Processes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, host: &dyn Host) -> &[String] {
        self.list.get_or_init(|| read_processes(host))
    }
}

fn read_processes(host: &dyn Host) -> Vec<String> {
    if let Some(text) = probe(host, "ps", &["-e", "-o", "comm="]) {
        return collect(text.lines());
    }
    // BusyBox `ps` has no -e and always prints a header
    if let Some(text) = probe(host, "ps", &["-o", "comm"]) {
        return collect(text.lines().skip(1));
    }
    tracing::warn!("ps is not available, process list is empty");
    Vec::new()
}

fn collect<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
