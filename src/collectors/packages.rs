use crate::host::Host;

/// A package manager and how to count what it lists.
struct Manager {
    program: &'static str,
    args:    &'static [&'static str],
    count:   fn(&str) -> usize,
}

/// Probed in order; the first one that runs wins.
const MANAGERS: &[Manager] = &[
    Manager { program: "apk",    args: &["list", "--installed"],  count: count_lines },
    Manager { program: "dnf",    args: &["list", "installed"],    count: count_after_installed_header },
    Manager { program: "dpkg",   args: &["--get-selections"],     count: count_dpkg },
    Manager { program: "emerge", args: &["-ep", "world"],         count: count_emerge },
    Manager { program: "pacman", args: &["-Q"],                   count: count_lines },
    Manager { program: "rpm",    args: &["-qa"],                  count: count_lines },
    Manager { program: "yum",    args: &["list", "installed"],    count: count_after_installed_header },
    Manager { program: "zypper", args: &["search", "-i"],         count: count_zypper },
];

/// Installed package count from the first package manager available.
pub fn count_packages(host: &dyn Host) -> Option<usize> {
    for m in MANAGERS {
        match host.run(m.program, m.args) {
            Ok(text) => {
                let n = (m.count)(&text);
                tracing::debug!(manager = m.program, packages = n, "package manager found");
                return Some(n);
            }
            Err(e) => tracing::trace!(manager = m.program, error = %e, "skipping"),
        }
    }
    None
}

fn count_lines(text: &str) -> usize {
    text.lines().filter(|l| !l.trim().is_empty()).count()
}

fn count_after_installed_header(text: &str) -> usize {
    text.lines()
        .skip_while(|l| l.trim() != "Installed Packages")
        .skip(1)
        .filter(|l| !l.trim().is_empty())
        .count()
}

fn count_dpkg(text: &str) -> usize {
    text.lines()
        .filter(|l| l.split_whitespace().nth(1) == Some("install"))
        .count()
}

fn count_emerge(text: &str) -> usize {
    text.lines().filter(|l| l.starts_with("[ebuild")).count()
}

fn count_zypper(text: &str) -> usize {
    text.lines()
        .filter_map(|l| l.split_once('|'))
        .filter(|(status, _)| status.trim_start().starts_with('i'))
        .count()
}
