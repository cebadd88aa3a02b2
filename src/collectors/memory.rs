use crate::host::{probe, Host};
use crate::models::memory::Memory;
use std::collections::HashMap;
use std::path::Path;

/// `free -m` first, `/proc/meminfo` when `free` is missing or unreadable.
pub fn read_memory(host: &dyn Host) -> Option<Memory> {
    if let Some(mem) = probe(host, "free", &["-m"]).and_then(|t| parse_free(&t)) {
        return Some(mem);
    }
    tracing::debug!("falling back to /proc/meminfo");
    let text = match host.read_to_string(Path::new("/proc/meminfo")) {
        Ok(t) => t,
        Err(e) => {
            tracing::debug!(error = %e, "meminfo unavailable");
            return None;
        }
    };
    parse_meminfo(&text)
}

/// The `Mem:` row: label, total, used, free, ...
pub fn parse_free(text: &str) -> Option<Memory> {
    let row = text.lines().find(|l| l.trim_start().starts_with("Mem"))?;
    let f: Vec<&str> = row.split_whitespace().collect();
    if f.len() < 3 { return None; }
    Some(Memory {
        total_mib: f[1].parse().ok()?,
        used_mib:  f[2].parse().ok()?,
    })
}

/// Used memory the way neofetch counts it: shared memory in, caches and buffers out.
pub fn parse_meminfo(text: &str) -> Option<Memory> {
    let kv: HashMap<&str, f64> = text.lines()
        .filter_map(|l| {
            let (key, rest) = l.split_once(':')?;
            let kb: f64 = rest.trim().trim_end_matches("kB").trim().parse().ok()?;
            Some((key.trim(), kb / 1024.0))
        })
        .collect();

    let get = |k: &str| kv.get(k).copied().unwrap_or(0.0);
    let total = *kv.get("MemTotal")?;
    let mut used = total + get("Shmem")
        - (get("MemFree") + get("Cached") + get("SReclaimable") + get("Buffers"));
    // procps does the same when the estimate goes negative
    if used < 0.0 {
        used = total - get("MemFree");
    }
    Some(Memory { total_mib: total, used_mib: used })
}
