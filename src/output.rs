//! Output configuration for the progress summaries the commands print.
//!
//! Respects `--color=never|always|auto`, the `NO_COLOR` convention
//! (https://no-color.org/) and `TERM=dumb`, falling back to the console
//! crate's TTY detection in auto mode.

use std::env;

/// Whether decorated output (colors, check marks) should be used.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// Build from the `--color` CLI flag: "always", "never" or "auto".
    pub fn from_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect(),
        };
        OutputConfig { use_color }
    }

    fn detect() -> bool {
        // NO_COLOR disables when present, even if empty
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }
        console::Term::stdout().features().colors_supported()
    }

    #[cfg(test)]
    pub fn with_color() -> Self {
        OutputConfig { use_color: true }
    }

    #[cfg(test)]
    pub fn without_color() -> Self {
        OutputConfig { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig::from_flag("auto")
    }
}

/// Pick the decorated or plain marker depending on the configuration.
pub fn marker<'a>(config: &OutputConfig, decorated: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        decorated
    } else {
        plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_always() {
        assert!(OutputConfig::from_flag("always").use_color);
    }

    #[test]
    fn test_flag_never() {
        assert!(!OutputConfig::from_flag("never").use_color);
    }

    #[test]
    fn test_marker_decorated() {
        let config = OutputConfig::with_color();
        assert_eq!(marker(&config, "✓", "[OK]"), "✓");
    }

    #[test]
    fn test_marker_plain() {
        let config = OutputConfig::without_color();
        assert_eq!(marker(&config, "✓", "[OK]"), "[OK]");
    }
}
