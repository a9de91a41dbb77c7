//! # Output Configuration
//!
//! Decides whether status lines printed by git-helper carry color and emoji.
//!
//! The decision respects, in order:
//! - `--color=always|never|auto`
//! - `NO_COLOR` (any value, see https://no-color.org/)
//! - `CLICOLOR=0` and `CLICOLOR_FORCE=1`
//! - `TERM=dumb`
//! - whether stdout is a terminal
//!
//! ```rust,ignore
//! use git_helper::output::OutputConfig;
//!
//! let out = OutputConfig::from_env_and_flag("auto");
//! println!("{} Pushed to origin/main", out.success_mark());
//! ```

use std::env;

use console::style;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Build the configuration from the `--color` flag value and the
    /// environment. Unknown flag values behave like `auto`.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Configuration with colors and emoji enabled.
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Configuration with plain text only.
    pub fn without_color() -> Self {
        Self { use_color: false }
    }

    /// Prefix for a completed step.
    pub fn success_mark(&self) -> &'static str {
        emoji(self, "✅", "[OK]")
    }

    /// Prefix for an outcome that needed no work.
    pub fn info_mark(&self) -> &'static str {
        emoji(self, "ℹ️ ", "[INFO]")
    }

    /// Prefix for a step in progress.
    pub fn progress_mark(&self) -> &'static str {
        emoji(self, "⏳", "[..]")
    }

    /// Render a warning line, highlighted when color is enabled.
    pub fn warning(&self, text: &str) -> String {
        if self.use_color {
            format!("⚠️  {}", style(text).yellow().bold().force_styling(true))
        } else {
            format!("WARNING: {}", text)
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns `emoji_str` when colors are enabled, `plain` otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}
