//! Tool Registry
//!
//! Static descriptions of every external binary reposeek knows about.
//! Descriptors are `const` data; whether a tool is actually installed is
//! answered separately by [`SystemToolProbe`](super::probe::SystemToolProbe).
//!
//! | Tool | Used for | Without it |
//! |------|----------|------------|
//! | `fd` | file search | built-in directory walk |
//! | `rg` | content search | built-in line scan |
//! | `fzf` | interactive selection | numbered prompt |
//! | `bat` | nothing in the core | plain text preview |
//! | `git` | commit previews | none |

use reposeek_domain::{Platform, ToolDescriptor};
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};

pub const FD: ToolDescriptor = ToolDescriptor {
    name: "fd",
    command: "fd",
    version_args: &["--version"],
    purpose: "fast file search",
    fallback: "built-in directory walk",
    install_hints: &[
        (Platform::MacOs, "brew install fd"),
        (Platform::Linux, "apt install fd-find (or: cargo install fd-find)"),
        (Platform::Windows, "winget install sharkdp.fd"),
    ],
    required: false,
};

pub const RG: ToolDescriptor = ToolDescriptor {
    name: "rg",
    command: "rg",
    version_args: &["--version"],
    purpose: "fast content search",
    fallback: "built-in line scan",
    install_hints: &[
        (Platform::MacOs, "brew install ripgrep"),
        (Platform::Linux, "apt install ripgrep"),
        (Platform::Windows, "winget install BurntSushi.ripgrep.MSVC"),
    ],
    required: false,
};

pub const FZF: ToolDescriptor = ToolDescriptor {
    name: "fzf",
    command: "fzf",
    version_args: &["--version"],
    purpose: "interactive fuzzy selection",
    fallback: "numbered prompt",
    install_hints: &[
        (Platform::MacOs, "brew install fzf"),
        (Platform::Linux, "apt install fzf"),
        (Platform::Windows, "winget install junegunn.fzf"),
    ],
    required: false,
};

pub const BAT: ToolDescriptor = ToolDescriptor {
    name: "bat",
    command: "bat",
    version_args: &["--version"],
    purpose: "syntax-highlighted previews",
    fallback: "plain text preview",
    install_hints: &[
        (Platform::MacOs, "brew install bat"),
        (Platform::Linux, "apt install bat"),
        (Platform::Windows, "winget install sharkdp.bat"),
    ],
    required: false,
};

pub const GIT: ToolDescriptor = ToolDescriptor {
    name: "git",
    command: "git",
    version_args: &["--version"],
    purpose: "commit previews",
    fallback: "none",
    install_hints: &[
        (Platform::MacOs, "xcode-select --install"),
        (Platform::Linux, "apt install git"),
        (Platform::Windows, "winget install Git.Git"),
    ],
    required: true,
};

/// Every known tool, in diagnostic display order
pub const ALL_TOOLS: &[ToolDescriptor] = &[FD, RG, FZF, BAT, GIT];

/// Lookup over the static tool table
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolRegistry;

impl ToolRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Descriptor by tool name
    pub fn get(&self, name: &str) -> Option<&'static ToolDescriptor> {
        ALL_TOOLS.iter().find(|t| t.name == name)
    }

    pub fn all(&self) -> &'static [ToolDescriptor] {
        ALL_TOOLS
    }

    pub fn file_finder(&self) -> &'static ToolDescriptor {
        &FD
    }

    pub fn content_finder(&self) -> &'static ToolDescriptor {
        &RG
    }

    /// Picker descriptor, with the command overridden by configuration.
    ///
    /// Only `fzf`-compatible pickers are supported; an override keeps
    /// every other field of the fzf descriptor.
    pub fn picker(&self, command: &str) -> ToolDescriptor {
        match leak_command(command) {
            Some(command) => ToolDescriptor { command, ..FZF },
            None => FZF,
        }
    }
}

/// Static command string for a configured picker binary.
///
/// Descriptors hold `&'static str`, so each distinct command is leaked
/// once and reused on later calls.
fn leak_command(command: &str) -> Option<&'static str> {
    static INTERNED: OnceLock<Mutex<HashMap<String, &'static str>>> = OnceLock::new();

    if command.is_empty() || command == FZF.command {
        return None;
    }

    let mut interned = INTERNED
        .get_or_init(Mutex::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    let leaked = *interned
        .entry(command.to_string())
        .or_insert_with(|| Box::leak(command.to_string().into_boxed_str()));
    Some(leaked)
}
