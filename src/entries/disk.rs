//! Disk space across every local filesystem.
//!
//! `df` covers everything except btrfs; btrfs volumes come from `btrfs` itself,
//! deduplicated by backing devices so a volume mounted twice counts once.

use super::{Context, Entry};
use crate::collectors::{btrfs, df};
use crate::colors::Colors;
use crate::models::disk::{DfReport, Usage, VolumeRecord};
use crate::severity::Breakpoints;

const NAME: &str = "Disk";
const MIB_PER_GIB: f64 = 1024.0;

pub fn build(ctx: &Context) -> Entry {
    let primary = df::read_df(ctx.host);
    let secondary = btrfs::read_btrfs_volumes(ctx.host);
    match aggregate(primary.as_ref(), secondary.as_deref()) {
        Some(usage) => render(usage, &ctx.config.limits.disk),
        None        => ctx.not_detected(NAME),
    }
}

/// Total and used GiB over both probes, or None if neither measured anything.
pub fn aggregate(primary: Option<&DfReport>, volumes: Option<&[VolumeRecord]>) -> Option<Usage> {
    let mut acc = Usage::default();

    if let Some(report) = primary {
        let mib = report.aggregate_mib();
        acc += Usage { total: mib.total / MIB_PER_GIB, used: mib.used / MIB_PER_GIB };
    }

    for vol in volumes.unwrap_or_default() {
        if vol.usage.is_empty() {
            tracing::debug!(mount = %vol.mount.display(), "skipping zero-sized btrfs volume");
            continue;
        }
        acc += vol.usage;
    }

    if acc.is_empty() { None } else { Some(acc) }
}

pub fn render(usage: Usage, limits: &Breakpoints) -> Entry {
    let tier = limits.classify(usage.use_pct());
    let plain = format!("{:.1} GiB / {:.1} GiB", usage.used, usage.total);
    Entry {
        name:  NAME,
        value: format!("{}{}{}", tier.color(), plain, Colors::Clear),
        plain,
        tier:  Some(tier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collectors::btrfs::fixtures::*;
    use crate::collectors::processes::Processes;
    use crate::config::Config;
    use crate::host::scripted::ScriptedHost;
    use crate::severity::Tier;

    const DF_NORMAL: &str = "\
Filesystem       1000000-blocks    Used Available Capacity Mounted on
/dev/mapper/root        39101MB 14216MB   22870MB      39% /
/dev/sda1                 967MB    91MB     810MB      11% /boot
/dev/mapper/home       265741MB 32700MB  219471MB      13% /home
total                  305809MB 47006MB  243149MB      17% -
";

    const DF_FULL_HOME: &str = "\
Filesystem       1000000-blocks     Used Available Capacity Mounted on
/dev/mapper/root        39101MB  14216MB   22870MB      39% /
/dev/sda1                 967MB     91MB     810MB      11% /boot
/dev/mapper/home       265741MB 243291MB   22450MB      92% /home
total                  305809MB 257598MB   46130MB      84% -
";

    const NO_FS: &str = "df: no file systems processed";

    fn run(host: &ScriptedHost, config: &Config) -> Entry {
        let procs = Processes::new();
        let ctx = Context { config, host, processes: &procs };
        build(&ctx)
    }

    fn limits(warning: f64, danger: f64) -> Config {
        let mut c = Config::default();
        c.limits.disk = Breakpoints { warning, danger };
        c
    }

    #[test]
    fn df_only() {
        let host = ScriptedHost::new().ok(DF_NORMAL).fail("df", NO_FS);
        let e = run(&host, &limits(50.0, 75.0));
        assert_eq!(e.plain, "45.9 GiB / 298.6 GiB");
        assert_eq!(e.tier, Some(Tier::Normal));
        assert!(e.value.starts_with(&Colors::GreenNormal.to_string()));
        assert!(e.value.ends_with(&Colors::Clear.to_string()));
    }

    #[test]
    fn df_only_warning() {
        let host = ScriptedHost::new().ok(DF_FULL_HOME).fail("df", NO_FS);
        let e = run(&host, &limits(80.0, 90.0));
        assert_eq!(e.plain, "251.6 GiB / 298.6 GiB");
        assert_eq!(e.tier, Some(Tier::Warning));
        assert!(e.value.contains(&Colors::YellowNormal.to_string()));
    }

    #[test]
    fn df_and_btrfs() {
        let host = ScriptedHost::new()
            .ok(DF_NORMAL)
            .ok(MOUNTS)
            .ok(DEV_NVME)
            .ok(DEV_SDA)
            .ok(USAGE_NVME)
            .ok(USAGE_SDA);
        let e = run(&host, &limits(50.0, 75.0));
        assert_eq!(e.plain, "989.3 GiB / 4501.1 GiB");
        assert_eq!(e.tier, Some(Tier::Normal));
        assert_eq!(host.pending(), 0);
    }

    #[test]
    fn btrfs_only_raid1() {
        let host = ScriptedHost::new()
            .fail("df", NO_FS)
            .ok(MOUNTS)
            .ok(DEV_NVME)
            .ok(DEV_SDA_SDB)
            .ok(USAGE_NVME)
            .ok(USAGE_RAID1);
        let e = run(&host, &limits(50.0, 75.0));
        assert_eq!(e.plain, "943.4 GiB / 4202.5 GiB");
        assert!(e.value.contains(&Colors::GreenNormal.to_string()));
    }

    #[test]
    fn same_volume_under_two_mounts_counts_once() {
        let host = ScriptedHost::new()
            .fail("df", NO_FS)
            .ok(MOUNTS)
            .ok(DEV_SDA)
            .ok(DEV_SDA)
            .ok(USAGE_SDA)
            .ok(USAGE_SDA);
        let e = run(&host, &limits(50.0, 75.0));
        assert_eq!(e.plain, "591.3 GiB / 3726.0 GiB");
    }

    #[test]
    fn busybox_df_is_not_detected() {
        let host = ScriptedHost::new()
            .fail("df", "df: unrecognized option: l")
            .fail("df", "df: unrecognized option: l");
        let e = run(&host, &Config::default());
        assert_eq!(e.value, "Not detected");
        assert_eq!(e.plain, "Not detected");
        assert_eq!(e.tier, None);
    }

    #[test]
    fn no_recognised_disks() {
        let host = ScriptedHost::new().fail("df", NO_FS).fail("df", NO_FS);
        assert_eq!(run(&host, &Config::default()).value, "Not detected");
        // one attempt per probe, no retries
        assert_eq!(host.calls().len(), 2);
    }

    #[test]
    fn zero_sized_volume_alone_is_not_detected() {
        let empty = "Overall:\n    Device size: 0.00GiB\n    Used: 0.00GiB\n";
        let host = ScriptedHost::new()
            .fail("df", NO_FS)
            .ok("Mounted on\n/\n")
            .ok(DEV_NVME)
            .ok(empty);
        assert_eq!(run(&host, &Config::default()).value, "Not detected");
    }

    #[test]
    fn zero_sized_volume_is_ignored_beside_data() {
        let zero = VolumeRecord {
            mount:   "/empty".into(),
            devices: Default::default(),
            usage:   Usage { total: 0.0, used: 0.0 },
        };
        let report = df::parse_df(DF_NORMAL);
        let agg = aggregate(Some(&report), Some(&[zero])).unwrap();
        assert!((agg.total - 305809.0 / 1024.0).abs() < 1e-9);
    }

    #[test]
    fn nothing_at_all() {
        assert!(aggregate(None, None).is_none());
        assert!(aggregate(None, Some(&[])).is_none());
    }

    #[test]
    fn same_probe_output_same_display() {
        let script = || ScriptedHost::new()
            .ok(DF_NORMAL)
            .ok(MOUNTS)
            .ok(DEV_NVME)
            .ok(DEV_SDA)
            .ok(USAGE_NVME)
            .ok(USAGE_SDA);
        let config = Config::default();
        assert_eq!(run(&script(), &config), run(&script(), &config));
    }

    #[test]
    fn full_disk_is_danger() {
        let u = Usage { total: 100.0, used: 75.0 };
        let e = render(u, &Breakpoints { warning: 50.0, danger: 75.0 });
        assert_eq!(e.tier, Some(Tier::Danger));
        assert!(e.value.starts_with(&Colors::RedNormal.to_string()));
    }
}
