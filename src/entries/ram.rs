use super::{Context, Entry};
use crate::collectors::memory::read_memory;
use crate::colors::Colors;
use crate::models::memory::Memory;
use crate::severity::Breakpoints;

const NAME: &str = "RAM";

pub fn build(ctx: &Context) -> Entry {
    match read_memory(ctx.host) {
        Some(mem) if mem.total_mib > 0.0 => render(mem, &ctx.config.limits.ram),
        _ => ctx.not_detected(NAME),
    }
}

fn render(mem: Memory, limits: &Breakpoints) -> Entry {
    let tier = limits.classify(mem.use_pct());
    let used = mem.used_mib as u64;
    let total = mem.total_mib as u64;
    Entry {
        name:  NAME,
        value: format!("{}{} MiB{} / {} MiB", tier.color(), used, Colors::Clear, total),
        plain: format!("{} MiB / {} MiB", used, total),
        tier:  Some(tier),
    }
}
