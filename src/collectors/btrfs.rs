use crate::host::{probe, Host};
use crate::models::disk::{DeviceEntry, Usage, VolumeRecord};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

const OVERALL_MARKER: &str = "Overall:";

/// Collect every mounted btrfs volume, each physical volume once.
/// Returns None when no btrfs filesystem is mounted (or `df` can't tell us).
pub fn read_btrfs_volumes(host: &dyn Host) -> Option<Vec<VolumeRecord>> {
    let text = probe(host, "df", &["-l", "--type=btrfs", "--output=target"])?;
    let mounts = parse_mount_targets(&text);
    if mounts.is_empty() { return None; }

    // Without device info a mount point stays a volume of its own.
    let devices: Vec<BTreeSet<DeviceEntry>> = mounts.iter()
        .map(|m| {
            let arg = path_arg(m);
            probe(host, "btrfs", &["device", "usage", arg.as_str()])
                .map(|t| parse_device_usage(&t))
                .unwrap_or_default()
        })
        .collect();

    let mut found = Vec::new();
    for (mount, devs) in mounts.into_iter().zip(devices) {
        let arg = path_arg(&mount);
        let Some(text) = probe(host, "btrfs", &["filesystem", "usage", "-g", arg.as_str()]) else {
            continue;
        };
        // One volume per invocation; later blocks describe the same pool.
        let mut blocks = parse_filesystem_usage(&text);
        if blocks.len() > 1 {
            tracing::debug!(mount = %mount.display(), blocks = blocks.len(), "several Overall blocks, keeping the last");
        }
        match blocks.pop() {
            Some(usage) => found.push(VolumeRecord { mount, devices: devs, usage }),
            None => tracing::debug!(mount = %mount.display(), "no Overall block in btrfs output"),
        }
    }

    let volumes = dedup_volumes(found);
    tracing::debug!(count = volumes.len(), "btrfs volumes");
    Some(volumes)
}

fn path_arg(p: &Path) -> String {
    p.to_string_lossy().into_owned()
}

/// Merge records whose device sets intersect. The merged record keeps the
/// union of devices and the usage of the last mount point seen.
pub fn dedup_volumes(records: Vec<VolumeRecord>) -> Vec<VolumeRecord> {
    let mut out: Vec<VolumeRecord> = Vec::new();

    for rec in records {
        let mut merged = rec;
        let mut slot = None;
        let mut i = 0;
        while i < out.len() {
            if !out[i].devices.is_disjoint(&merged.devices) {
                let prev = out.remove(i);
                merged.devices.extend(prev.devices);
                slot.get_or_insert(i);
            } else {
                i += 1;
            }
        }
        match slot {
            Some(i) => out.insert(i, merged),
            None    => out.push(merged),
        }
    }

    out
}

/// `df --output=target`: a `Mounted on` header, then one mount point per line.
pub fn parse_mount_targets(text: &str) -> Vec<PathBuf> {
    text.lines()
        .skip(1)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// `btrfs device usage`: every stanza opens with `<path>, ID: <devid>`.
pub fn parse_device_usage(text: &str) -> BTreeSet<DeviceEntry> {
    text.lines()
        .filter(|l| !l.starts_with(char::is_whitespace))
        .filter_map(|l| {
            let (path, id) = l.trim().split_once(", ID: ")?;
            Some(DeviceEntry { path: path.to_string(), id: id.trim().parse().ok()? })
        })
        .collect()
}

/// Every `Overall:` block of `btrfs filesystem usage`, in GiB, with replicated
/// profiles folded back to their logical size via `Data ratio`.
pub fn parse_filesystem_usage(text: &str) -> Vec<Usage> {
    #[derive(Default)]
    struct Block {
        size:  Option<f64>,
        used:  Option<f64>,
        ratio: Option<f64>,
    }

    fn finish(b: Block, out: &mut Vec<Usage>) {
        let (Some(size), Some(used)) = (b.size, b.used) else { return };
        let ratio = b.ratio.filter(|r| *r > 0.0).unwrap_or(1.0);
        out.push(Usage { total: size / ratio, used: used / ratio });
    }

    let mut out = Vec::new();
    let mut current: Option<Block> = None;

    for line in text.lines() {
        let line = line.trim();
        if line == OVERALL_MARKER {
            if let Some(b) = current.take() { finish(b, &mut out); }
            current = Some(Block::default());
            continue;
        }
        let Some(block) = current.as_mut() else { continue };

        if let Some(v) = line.strip_prefix("Device size:") {
            block.size = first_token(v).and_then(parse_size_gib);
        } else if let Some(v) = line.strip_prefix("Used:") {
            block.used = first_token(v).and_then(parse_size_gib);
        } else if let Some(v) = line.strip_prefix("Data ratio:") {
            block.ratio = first_token(v).and_then(|t| t.parse().ok());
        }
    }
    if let Some(b) = current.take() { finish(b, &mut out); }

    out
}

fn first_token(s: &str) -> Option<&str> {
    s.split_whitespace().next()
}

/// "476.44GiB" → 476.44, "3.64TiB" → 3727.36.
pub fn parse_size_gib(s: &str) -> Option<f64> {
    let split = s.find(|c: char| !(c.is_ascii_digit() || c == '.')).unwrap_or(s.len());
    let (num, unit) = s.split_at(split);
    let value: f64 = num.parse().ok()?;
    let factor = match unit {
        "" | "G" | "GiB" => 1.0,
        "B"              => 1.0 / (1024.0 * 1024.0 * 1024.0),
        "K" | "KiB"      => 1.0 / (1024.0 * 1024.0),
        "M" | "MiB"      => 1.0 / 1024.0,
        "T" | "TiB"      => 1024.0,
        "P" | "PiB"      => 1024.0 * 1024.0,
        "E" | "EiB"      => 1024.0 * 1024.0 * 1024.0,
        _                => return None,
    };
    Some(value * factor)
}
