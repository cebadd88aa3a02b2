/// RAM figures in MiB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Memory {
    pub total_mib: f64,
    pub used_mib:  f64,
}

impl Memory {
    pub fn use_pct(&self) -> f64 {
        if self.total_mib <= 0.0 { return 0.0; }
        self.used_mib / self.total_mib * 100.0
    }
}
