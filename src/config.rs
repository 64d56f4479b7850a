use clap::ValueEnum;

/// How a failed suggested-location fetch is handled.
///
/// The source behavior is `Silent` (render nothing); the alternatives exist
/// because this is a product decision worth revisiting, not a technical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SuggestionErrorPolicy {
    /// Render nothing; the panel stays empty.
    #[default]
    Silent,
    /// Render nothing, but record a warning in the log file.
    Log,
    /// Show a one-line notice in the suggestion panel.
    Surface,
}

/// Runtime options resolved from CLI flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppConfig {
    pub suggestion_errors: SuggestionErrorPolicy,
}
