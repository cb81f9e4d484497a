use std::io::IsTerminal;

pub mod csv;
pub mod table;
pub mod violations;

/// ANSI styling for terminal output, following `NO_COLOR` and `CLICOLOR`.
pub struct Colors {
    enabled: bool,
}

impl Colors {
    pub fn enabled() -> Self {
        let force = std::env::var("CLICOLOR_FORCE")
            .ok()
            .filter(|v| v != "0")
            .is_some();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        let clicolor_zero = std::env::var("CLICOLOR").is_ok_and(|v| v == "0");
        let term = std::io::stdout().is_terminal();
        let enabled = if force {
            true
        } else if no_color || clicolor_zero {
            false
        } else {
            term
        };
        Self { enabled }
    }

    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn paint(&self, s: &str, code: &str) -> String {
        if self.enabled {
            format!("\x1b[{code}m{s}\x1b[0m")
        } else {
            s.to_string()
        }
    }

    pub fn bold(&self, s: &str) -> String {
        self.paint(s, "1")
    }
}
