use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Per-invocation output settings, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub quiet: bool,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, quiet: bool) -> Self {
        Self::from_caps(json, verbose, quiet, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        quiet: bool,
        caps: TerminalCapabilities,
    ) -> Self {
        // CI logs keep ANSI noise out even when a pty is attached.
        Self {
            json,
            verbose,
            quiet,
            color: caps.supports_color && !caps.is_ci,
            unicode: caps.supports_unicode,
        }
    }

    /// Should human-readable progress be printed at all?
    pub fn chatty(&self) -> bool {
        !self.json && !self.quiet
    }
}
