use super::{Context, Entry};
use crate::host::probe;

const NAME: &str = "Shell";

/// `$SHELL`, else the login shell from the passwd database.
pub fn build(ctx: &Context) -> Entry {
    if let Some(shell) = ctx.host.env_var("SHELL") {
        return Entry::text(NAME, shell);
    }

    let uid = ctx.host.uid().to_string();
    let from_passwd = probe(ctx.host, "getent", &["passwd", uid.as_str()])
        .and_then(|t| login_shell(&t));
    match from_passwd {
        Some(shell) => Entry::text(NAME, shell),
        None        => ctx.not_detected(NAME),
    }
}

/// Last field of `name:x:uid:gid:gecos:home:shell`.
fn login_shell(passwd: &str) -> Option<String> {
    let line = passwd.lines().next()?;
    let shell = line.rsplit(':').next()?.trim();
    if shell.is_empty() { None } else { Some(shell.to_string()) }
}
