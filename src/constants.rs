use std::collections::HashSet;

pub const TRUTHY_SPELLINGS: &[&str] = &["true", "t", "yes", "y", "on", "1"];
pub const FALSY_SPELLINGS: &[&str] = &["false", "f", "no", "n", "off", "0", ""];

pub const EXIT_FAILURE: i32 = 2;

#[cfg(windows)]
pub const DEFAULT_SHELL: &str = "cmd";
#[cfg(windows)]
pub const DEFAULT_SHELL_FLAG: &str = "/C";

#[cfg(not(windows))]
pub const DEFAULT_SHELL: &str = "sh";
#[cfg(not(windows))]
pub const DEFAULT_SHELL_FLAG: &str = "-c";

lazy_static! {
    pub static ref TRUTHY: HashSet<&'static str> = TRUTHY_SPELLINGS.iter().copied().collect();
    pub static ref FALSY: HashSet<&'static str> = FALSY_SPELLINGS.iter().copied().collect();
}
