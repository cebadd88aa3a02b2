use super::{Context, Entry};
use crate::collectors::packages::count_packages;

const NAME: &str = "Packages";

pub fn build(ctx: &Context) -> Entry {
    match count_packages(ctx.host) {
        Some(n) => Entry::text(NAME, n.to_string()),
        None    => ctx.not_detected(NAME),
    }
}
