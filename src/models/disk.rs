use std::collections::BTreeSet;
use std::path::PathBuf;

/// A (total, used) pair in one unit. The unit is carried by the field name at use sites.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Usage {
    pub total: f64,
    pub used:  f64,
}

impl Usage {
    pub fn is_empty(&self) -> bool {
        self.total <= 0.0
    }

    pub fn use_pct(&self) -> f64 {
        if self.total <= 0.0 { return 0.0; }
        self.used / self.total * 100.0
    }
}

impl std::ops::AddAssign for Usage {
    fn add_assign(&mut self, rhs: Self) {
        self.total += rhs.total;
        self.used  += rhs.used;
    }
}

/// One row of `df` output, capacities in MiB.
#[derive(Debug, Clone, PartialEq)]
pub struct MountRecord {
    pub device:   String,
    pub mount:    String,
    pub total_mib: u64,
    pub used_mib:  u64,
}

/// Everything the primary probe reported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DfReport {
    pub mounts: Vec<MountRecord>,
    /// The `total` row, when `df` printed one.
    pub total:  Option<MountRecord>,
}

impl DfReport {
    /// Aggregate in MiB: the tool's own total row, else the sum of its rows.
    pub fn aggregate_mib(&self) -> Usage {
        match &self.total {
            Some(t) => Usage { total: t.total_mib as f64, used: t.used_mib as f64 },
            None => self.mounts.iter().fold(Usage::default(), |mut acc, m| {
                acc += Usage { total: m.total_mib as f64, used: m.used_mib as f64 };
                acc
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty() && self.total.is_none()
    }
}

/// A device backing a btrfs filesystem. `id` is only unique within its filesystem.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceEntry {
    pub path: String,
    pub id:   u64,
}

/// One deduplicated btrfs volume, capacities in GiB.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeRecord {
    /// Mount point whose accounting block was used (the last one seen).
    pub mount:   PathBuf,
    pub devices: BTreeSet<DeviceEntry>,
    pub usage:   Usage,
}
