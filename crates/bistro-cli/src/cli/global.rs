use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Indented JSON.
    Json,
    /// Single-line JSON.
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: Option<OutputFormat>,
    pub quiet: bool,
    pub verbose: bool,
    pub database: Option<String>,
}

impl GlobalFlags {
    /// The explicit `--format`, else the configured default.
    #[must_use]
    pub fn output_format(&self, pretty: bool) -> OutputFormat {
        self.format
            .unwrap_or(if pretty { OutputFormat::Json } else { OutputFormat::Raw })
    }
}
