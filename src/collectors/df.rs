use crate::host::{probe, Host};
use crate::models::disk::{DfReport, MountRecord};

/// Local filesystems in MiB blocks with a grand-total row. btrfs is left to
/// the `btrfs` collector so the two never count the same filesystem.
const DF_ARGS: &[&str] = &[
    "-l", "-B", "M", "--total",
    "-x", "btrfs", "-x", "tmpfs", "-x", "devtmpfs", "-x", "squashfs", "-x", "overlay",
];

/// First column of the aggregate row.
const TOTAL_MARKER: &str = "total";

/// Run `df` and parse it. None if `df` failed or reported no filesystem.
pub fn read_df(host: &dyn Host) -> Option<DfReport> {
    let text = probe(host, "df", DF_ARGS)?;
    let report = parse_df(&text);
    if report.is_empty() {
        tracing::debug!("df printed no usable rows");
        return None;
    }
    for m in &report.mounts {
        tracing::trace!(device = %m.device, mount = %m.mount, total_mib = m.total_mib, "df row");
    }
    Some(report)
}

/// Columns: source, size, used, avail, use%, mount point.
pub fn parse_df(text: &str) -> DfReport {
    let mut report = DfReport::default();

    for line in text.lines().skip(1) {
        let f: Vec<&str> = line.split_whitespace().collect();
        if f.len() < 6 { continue; }

        let (Some(total_mib), Some(used_mib)) = (parse_blocks(f[1]), parse_blocks(f[2])) else {
            continue;
        };
        let record = MountRecord {
            device: f[0].to_string(),
            // Mount points may contain spaces
            mount: f[5..].join(" "),
            total_mib,
            used_mib,
        };

        if record.device == TOTAL_MARKER {
            report.total = Some(record);
        } else {
            report.mounts.push(record);
        }
    }

    report
}

/// "39101MB" → 39101. The unit suffix is glued to the number.
fn parse_blocks(field: &str) -> Option<u64> {
    field.trim_end_matches(|c: char| !c.is_ascii_digit()).parse().ok()
}
