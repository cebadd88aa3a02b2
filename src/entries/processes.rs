use super::{Context, Entry};

const NAME: &str = "Processes";

pub fn build(ctx: &Context) -> Entry {
    let procs = ctx.processes.get(ctx.host);
    if procs.is_empty() {
        return ctx.not_detected(NAME);
    }
    Entry::text(NAME, procs.len().to_string())
}
