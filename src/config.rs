//! Session configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `MULTI_WORDLE_*` environment variables, then command-line overrides. The
//! result is normalised once and treated as immutable for the session.

use clap::{Args, ValueEnum};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Largest guess limit the prompt layout supports (two digits)
pub const MAX_GUESS_LIMIT: u32 = 99;

/// Width of each clue or status cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FieldLength {
    /// One character followed by a space
    #[default]
    Long,
    /// One character only
    Short,
}

impl FieldLength {
    /// Characters per cell
    #[must_use]
    pub const fn factor(self) -> usize {
        match self {
            Self::Long => 2,
            Self::Short => 1,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Short => "short",
        }
    }
}

/// What the status field summarises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Best outcome seen for each letter; specific to one game
    #[default]
    ClueInfo,
    /// Letters not yet tried; the same for every game
    GuessInfo,
}

impl StatusKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ClueInfo => "clue_info",
            Self::GuessInfo => "guess_info",
        }
    }
}

/// How clue and status fields are arranged on a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DisplayFormat {
    /// `clue1>status1| clue2>status2|`
    #[default]
    Paired,
    /// `clue1|clue2>status|`
    SingleStatus,
    /// `clue1|clue2|`
    NoStatus,
}

impl DisplayFormat {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Paired => "paired",
            Self::SingleStatus => "single_status",
            Self::NoStatus => "no_status",
        }
    }
}

/// A word list file used only for one word length
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordFileOverride {
    pub length: usize,
    pub path: PathBuf,
}

/// Word list files; the embedded list is used when neither applies
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct WordFiles {
    /// List used for any word length without an override
    pub default: Option<PathBuf>,
    pub by_length: Vec<WordFileOverride>,
}

impl WordFiles {
    /// File to load `length`-letter words from, `None` for the embedded list
    #[must_use]
    pub fn for_length(&self, length: usize) -> Option<&Path> {
        self.by_length
            .iter()
            .find(|o| o.length == length)
            .map(|o| o.path.as_path())
            .or(self.default.as_deref())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self
            .default
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(ConfigError::EmptyWordFile(None));
        }
        for (i, entry) in self.by_length.iter().enumerate() {
            if entry.length == 0 {
                return Err(ConfigError::ZeroLengthWordFile);
            }
            if entry.path.as_os_str().is_empty() {
                return Err(ConfigError::EmptyWordFile(Some(entry.length)));
            }
            if self.by_length[..i].iter().any(|o| o.length == entry.length) {
                return Err(ConfigError::DuplicateWordFile(entry.length));
            }
        }
        Ok(())
    }
}

/// Errors from reading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    Read(::config::ConfigError),
    #[error("invalid configuration: {0}")]
    Parse(::config::ConfigError),
    #[error("{} word list file has an empty path", .0.map_or_else(|| "default".to_string(), |n| format!("{n}-letter")))]
    EmptyWordFile(Option<usize>),
    #[error("word list overrides must name a word length of at least 1")]
    ZeroLengthWordFile,
    #[error("more than one word list file configured for {0}-letter words")]
    DuplicateWordFile(usize),
}

impl ConfigError {
    /// Process exit status for this error category
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Read(_) | Self::Parse(_) => 1,
            Self::EmptyWordFile(_) | Self::ZeroLengthWordFile | Self::DuplicateWordFile(_) => 2,
        }
    }
}

/// Complete configuration for a session
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Letters in each target word
    pub word_length: usize,
    /// Simultaneous games sharing the guess stream
    pub num_games: usize,
    pub max_guesses: u32,

    /// Separates a clue field from its status field
    pub delim: String,
    /// Ends each game's section of a row
    pub section_delim: String,
    pub word_prompt: String,

    pub clue_length: FieldLength,
    pub status_length: FieldLength,
    pub status_kind: StatusKind,
    pub display_format: DisplayFormat,

    /// Allow `:s` to reveal the target words
    pub allow_reveal: bool,
    /// Print the configuration before play
    pub show_config: bool,
    /// Print a column ruler this many characters wide before play (0 = off)
    pub column_ruler: usize,

    pub word_files: WordFiles,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_length: 5,
            num_games: 1,
            max_guesses: 6,
            delim: ">".to_string(),
            section_delim: "|".to_string(),
            word_prompt: "Word? ".to_string(),
            clue_length: FieldLength::Long,
            status_length: FieldLength::Long,
            status_kind: StatusKind::ClueInfo,
            display_format: DisplayFormat::Paired,
            allow_reveal: false,
            show_config: false,
            column_ruler: 0,
            word_files: WordFiles::default(),
        }
    }
}

impl Config {
    /// Load from an optional TOML file and the environment, then validate
    ///
    /// The result is not yet normalised; apply overrides first, then call
    /// [`Config::normalized`].
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, a value has the
    /// wrong type or an unknown option, or the word file mapping is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder =
                builder.add_source(::config::File::from(path).format(::config::FileFormat::Toml));
        }

        let config: Self = builder
            .add_source(::config::Environment::with_prefix("MULTI_WORDLE"))
            .build()
            .map_err(ConfigError::Read)?
            .try_deserialize()
            .map_err(ConfigError::Parse)?;

        config.word_files.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// Returns `ConfigError` on malformed TOML, bad values, or an invalid word
    /// file mapping.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ::config::Config::builder()
            .add_source(::config::File::from_str(text, ::config::FileFormat::Toml))
            .build()
            .map_err(ConfigError::Read)?
            .try_deserialize()
            .map_err(ConfigError::Parse)?;

        config.word_files.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of loaded values
    #[must_use]
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(n) = overrides.word_length {
            self.word_length = n;
        }
        if let Some(n) = overrides.num_games {
            self.num_games = n;
        }
        if let Some(n) = overrides.max_guesses {
            self.max_guesses = n;
        }
        if let Some(len) = overrides.clue_length {
            self.clue_length = len;
        }
        if let Some(len) = overrides.status_length {
            self.status_length = len;
        }
        if let Some(kind) = overrides.status_kind {
            self.status_kind = kind;
        }
        if let Some(format) = overrides.display_format {
            self.display_format = format;
        }
        if let Some(path) = &overrides.word_file {
            self.word_files.default = Some(path.clone());
            self.word_files.by_length.clear();
        }
        self.allow_reveal |= overrides.allow_reveal;
        self.show_config |= overrides.show_config;
        self
    }

    /// Clamp out-of-range values and resolve conflicting options
    ///
    /// - `max_guesses` is kept within `1..=99`
    /// - `num_games` and `word_length` are at least 1
    /// - several games sharing one status field must show tried letters,
    ///   since per-game letter outcomes cannot share a field
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let max_guesses = self.max_guesses.clamp(1, MAX_GUESS_LIMIT);
        if max_guesses != self.max_guesses {
            warn!(requested = self.max_guesses, used = max_guesses, "max_guesses out of range");
            self.max_guesses = max_guesses;
        }
        self.num_games = self.num_games.max(1);
        self.word_length = self.word_length.max(1);

        if self.num_games > 1
            && self.display_format == DisplayFormat::SingleStatus
            && self.status_kind != StatusKind::GuessInfo
        {
            warn!("a shared status field needs guess_info; switching status kind");
            self.status_kind = StatusKind::GuessInfo;
        }
        self
    }
}

/// Command-line overrides for configuration values
#[derive(Debug, Clone, Default, Args)]
pub struct Overrides {
    /// Letters per word
    #[arg(short = 'l', long, global = true)]
    pub word_length: Option<usize>,

    /// Number of simultaneous games
    #[arg(short = 'g', long, global = true)]
    pub num_games: Option<usize>,

    /// Maximum number of guesses (1-99)
    #[arg(short = 'm', long, global = true)]
    pub max_guesses: Option<u32>,

    /// Clue cell width
    #[arg(long, global = true, value_enum)]
    pub clue_length: Option<FieldLength>,

    /// Status cell width
    #[arg(long, global = true, value_enum)]
    pub status_length: Option<FieldLength>,

    /// Status field content
    #[arg(long, global = true, value_enum)]
    pub status_kind: Option<StatusKind>,

    /// Arrangement of clue and status fields
    #[arg(short = 'f', long, global = true, value_enum)]
    pub display_format: Option<DisplayFormat>,

    /// Word list file for every word length
    #[arg(short = 'w', long, global = true)]
    pub word_file: Option<PathBuf>,

    /// Allow ':s' to reveal the target words
    #[arg(long, global = true)]
    pub allow_reveal: bool,

    /// Print the configuration before play
    #[arg(long, global = true)]
    pub show_config: bool,
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration parameters:")?;
        let rows: [(&str, String); 13] = [
            ("word_length", self.word_length.to_string()),
            ("num_games", self.num_games.to_string()),
            ("max_guesses", self.max_guesses.to_string()),
            ("delim", format!("{:?}", self.delim)),
            ("section_delim", format!("{:?}", self.section_delim)),
            ("word_prompt", format!("{:?}", self.word_prompt)),
            ("clue_length", self.clue_length.name().to_string()),
            ("status_length", self.status_length.name().to_string()),
            ("status_kind", self.status_kind.name().to_string()),
            ("display_format", self.display_format.name().to_string()),
            ("allow_reveal", self.allow_reveal.to_string()),
            ("show_config", self.show_config.to_string()),
            ("column_ruler", self.column_ruler.to_string()),
        ];
        for (key, value) in rows {
            writeln!(f, "  {key:<24} => {value}")?;
        }

        writeln!(f, "\nWord list files:")?;
        let default = self
            .word_files
            .default
            .as_ref()
            .map_or_else(|| "embedded word list".to_string(), |p| p.display().to_string());
        writeln!(f, "  {:<24} => {default}", "default")?;

        let mut overrides: Vec<&WordFileOverride> = self.word_files.by_length.iter().collect();
        overrides.sort_by_key(|o| o.length);
        for entry in overrides {
            let key = format!("{}-letter", entry.length);
            writeln!(f, "  {key:<24} => {}", entry.path.display())?;
        }
        Ok(())
    }
}
