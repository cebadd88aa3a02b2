pub mod disk;
pub mod packages;
pub mod processes;
pub mod ram;
pub mod shell;

use crate::collectors::processes::Processes;
use crate::config::Config;
use crate::host::Host;
use crate::severity::Tier;

/// Shared handles for one reporting run.
pub struct Context<'a> {
    pub config:    &'a Config,
    pub host:      &'a dyn Host,
    pub processes: &'a Processes,
}

impl Context<'_> {
    /// The configured placeholder, for an entry nothing could detect.
    pub fn not_detected(&self, name: &'static str) -> Entry {
        Entry::text(name, self.config.default_strings.not_detected.clone())
    }
}

/// One line of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name:  &'static str,
    /// What the terminal shows, possibly colored.
    pub value: String,
    /// `value` without escapes.
    pub plain: String,
    pub tier:  Option<Tier>,
}

impl Entry {
    pub fn text(name: &'static str, value: String) -> Self {
        Self { name, plain: value.clone(), value, tier: None }
    }
}

/// Build every enabled entry, in display order.
pub fn collect(ctx: &Context) -> Vec<Entry> {
    let on = &ctx.config.entries;
    let mut out = Vec::new();
    if on.processes { out.push(processes::build(ctx)); }
    if on.shell     { out.push(shell::build(ctx)); }
    if on.packages  { out.push(packages::build(ctx)); }
    if on.ram       { out.push(ram::build(ctx)); }
    if on.disk      { out.push(disk::build(ctx)); }
    out
}
