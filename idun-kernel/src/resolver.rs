//! Unknown-command resolution - the enclosing shell's not-found hook.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use idun_api::CommandRequest;

use crate::config::Config;
use crate::expand::expand_args;

/// Outcome of resolving an unrecognized command name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Forward to the device as the given request.
    Forward(CommandRequest),
    /// Nothing matched; the caller reports "command not found".
    NotFound,
}

/// Resolver for command names the built-in registry does not know.
pub struct CommandResolver;

impl CommandResolver {
    /// Resolve `name` against the search order: device system
    /// directory, drive-prefixed names, then local tool binaries.
    /// Arguments are glob-expanded first. Missing or unreadable
    /// candidates fall through silently to the next rule.
    ///
    /// The working directory is passed explicitly; only rule three
    /// consults it.
    pub fn resolve(name: &str, args: &[String], config: &Config, cwd: &Path) -> Resolution {
        let args = expand_args(args);

        if config.sys_dir.join(name).is_file() {
            return Resolution::Forward(CommandRequest::exec(name, args));
        }
        if drive_prefix().is_match(name) {
            return Resolution::Forward(CommandRequest::exec(name, args));
        }
        if is_device_tool(&cwd.join(name)) {
            return Resolution::Forward(CommandRequest::exec(name, args));
        }
        Resolution::NotFound
    }
}

/// Names addressed to a device drive, like `a:` or `a:game`.
fn drive_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("^[A-Za-z]:").expect("valid pattern"))
}

/// First 8 bytes identifying a device-executable tool: a 6502 JMP at
/// byte 0, the tool marker at byte 3, and the fixed load signature in
/// bytes 4-7. Bytes 1-2 carry the jump target and are ignored.
fn is_device_tool(path: &Path) -> bool {
    let mut header = [0u8; 8];
    match File::open(path).and_then(|mut f| f.read_exact(&mut header)) {
        Ok(()) => {
            header[0] == 0x4c && header[3] == 0xcb && header[4..] == [0x06, 0x10, 0x40, 0x00]
        }
        Err(_) => false,
    }
}
