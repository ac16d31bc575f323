//! Field widths, headings and row arrangement for the game grid
//!
//! `LayoutPolicy` is computed once from the configuration. Presentation code
//! hands it already-rendered clue and status fields and gets back a full row;
//! it never needs to look at the display format itself.

use crate::config::{Config, DisplayFormat, StatusKind};
use crate::core::ALPHABET_LEN;

/// Label squeezed into clue headings
const CLUE_LABEL: &str = "Clue";
/// Games needed before concatenated clue headings switch to game numbers
const NUMBERED_HEADINGS_FROM: usize = 5;

/// The fields one game contributes to a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFields {
    pub clue: String,
    /// `None` shows a blank status field
    pub status: Option<String>,
    /// Game is complete; its status is blanked in paired format
    pub finished: bool,
}

/// Layout derived from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPolicy {
    format: DisplayFormat,
    status_kind: StatusKind,
    num_games: usize,
    clue_width: usize,
    status_width: usize,
    delim: String,
    section_delim: String,
}

impl LayoutPolicy {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            format: config.display_format,
            status_kind: config.status_kind,
            num_games: config.num_games,
            clue_width: config.clue_length.factor() * config.word_length,
            status_width: config.status_length.factor() * ALPHABET_LEN,
            delim: config.delim.clone(),
            section_delim: config.section_delim.clone(),
        }
    }

    #[must_use]
    pub const fn format(&self) -> DisplayFormat {
        self.format
    }

    /// Display width of each game's clue field
    #[must_use]
    pub const fn clue_width(&self) -> usize {
        self.clue_width
    }

    /// Display width of a status field
    #[must_use]
    pub const fn status_width(&self) -> usize {
        self.status_width
    }

    /// Number of status fields on each row
    #[must_use]
    pub const fn status_fields(&self) -> usize {
        match self.format {
            DisplayFormat::Paired => self.num_games,
            DisplayFormat::SingleStatus => 1,
            DisplayFormat::NoStatus => 0,
        }
    }

    fn numbered_headings(&self) -> bool {
        self.format != DisplayFormat::Paired && self.num_games >= NUMBERED_HEADINGS_FROM
    }

    /// Heading for the clue field of game `index` (zero-based)
    ///
    /// Normally the label "Clue", cut to fit. When many games share one row
    /// without per-game status, the 1-based game number is centred instead;
    /// a one-character field keeps only the last digit.
    #[must_use]
    pub fn clue_heading(&self, index: usize) -> String {
        let width = self.clue_width;
        let heading = if self.numbered_headings() {
            let number = (index + 1).to_string();
            let lead = (1 + width).saturating_sub(number.len()) / 2;
            let mut heading = format!("{}{number}", " ".repeat(lead));
            if width == 1 && heading.len() > 1 {
                heading = heading.split_off(heading.len() - 1);
            }
            heading
        } else {
            CLUE_LABEL.to_string()
        };
        fit(&heading, width)
    }

    /// Heading for a status field
    #[must_use]
    pub fn status_heading(&self) -> String {
        let label = match self.status_kind {
            StatusKind::ClueInfo => "Status",
            StatusKind::GuessInfo => "Untried letters",
        };
        fit(label, self.status_width)
    }

    /// Blank clue field
    #[must_use]
    pub fn clue_padding(&self) -> String {
        " ".repeat(self.clue_width)
    }

    /// Blank status field
    #[must_use]
    pub fn status_padding(&self) -> String {
        " ".repeat(self.status_width)
    }

    fn pad_delim(&self) -> String {
        " ".repeat(self.delim.chars().count())
    }

    fn pad_section_delim(&self) -> String {
        " ".repeat(self.section_delim.chars().count())
    }

    /// Heading row printed once above the grid
    #[must_use]
    pub fn heading_line(&self) -> String {
        let headings = (0..self.num_games).map(|i| self.clue_heading(i));
        match self.format {
            DisplayFormat::Paired => headings
                .map(|clue| {
                    format!(
                        "{clue}{}{}{}",
                        self.delim,
                        self.status_heading(),
                        self.section_delim
                    )
                })
                .collect(),
            DisplayFormat::SingleStatus => format!(
                "{}{}{}{}",
                headings.collect::<Vec<_>>().join(&self.section_delim),
                self.delim,
                self.status_heading(),
                self.section_delim
            ),
            DisplayFormat::NoStatus => format!(
                "{}{}",
                headings.collect::<Vec<_>>().join(&self.section_delim),
                self.section_delim
            ),
        }
    }

    /// Blank row prefix used to line a repeated prompt up with the grid
    #[must_use]
    pub fn padding_line(&self) -> String {
        let pad_section = self.pad_section_delim();
        match self.format {
            DisplayFormat::Paired => {
                let game = format!(
                    "{}{}{}",
                    self.clue_padding(),
                    self.pad_delim(),
                    self.status_padding()
                );
                format!(
                    "{}{}",
                    vec![game; self.num_games].join(&pad_section),
                    self.section_delim
                )
            }
            DisplayFormat::SingleStatus => format!(
                "{}{}{}{}",
                vec![self.clue_padding(); self.num_games].join(&pad_section),
                self.pad_delim(),
                self.status_padding(),
                self.section_delim
            ),
            DisplayFormat::NoStatus => format!(
                "{}{}",
                vec![self.clue_padding(); self.num_games].join(&pad_section),
                self.section_delim
            ),
        }
    }

    /// Arrange one row from per-game fields, in game order
    ///
    /// The single shared status field is taken from the first game.
    #[must_use]
    pub fn arrange_row(&self, games: &[GameFields]) -> String {
        match self.format {
            DisplayFormat::Paired => games
                .iter()
                .map(|game| {
                    let (delim, status) = match (&game.status, game.finished) {
                        (Some(status), false) => (self.delim.clone(), status.clone()),
                        _ => (self.pad_delim(), self.status_padding()),
                    };
                    format!("{}{delim}{status}{}", game.clue, self.section_delim)
                })
                .collect(),
            DisplayFormat::SingleStatus => {
                let status = games
                    .first()
                    .and_then(|g| g.status.clone())
                    .unwrap_or_else(|| self.status_padding());
                format!(
                    "{}{}{status}{}",
                    clue_fields(games).join(&self.section_delim),
                    self.delim,
                    self.section_delim
                )
            }
            DisplayFormat::NoStatus => format!(
                "{}{}",
                clue_fields(games).join(&self.section_delim),
                self.section_delim
            ),
        }
    }
}

fn clue_fields(games: &[GameFields]) -> Vec<&str> {
    games.iter().map(|g| g.clue.as_str()).collect()
}

/// Left-align `text` in a field of `width` characters, cutting it if needed
fn fit(text: &str, width: usize) -> String {
    let cut: String = text.chars().take(width).collect();
    format!("{cut:<width$}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldLength;

    fn layout(games: usize, format: DisplayFormat, clue: FieldLength, length: usize) -> LayoutPolicy {
        LayoutPolicy::new(&Config {
            num_games: games,
            display_format: format,
            clue_length: clue,
            word_length: length,
            ..Config::default()
        })
    }

    fn fields(clue: &str, status: Option<&str>, finished: bool) -> GameFields {
        GameFields {
            clue: clue.to_string(),
            status: status.map(str::to_string),
            finished,
        }
    }

    #[test]
    fn field_widths() {
        let long = layout(1, DisplayFormat::Paired, FieldLength::Long, 5);
        assert_eq!(long.clue_width(), 10);
        assert_eq!(long.status_width(), 52);

        let short = LayoutPolicy::new(&Config {
            clue_length: FieldLength::Short,
            status_length: FieldLength::Short,
            ..Config::default()
        });
        assert_eq!(short.clue_width(), 5);
        assert_eq!(short.status_width(), 26);
    }

    #[test]
    fn status_field_count_per_format() {
        assert_eq!(layout(3, DisplayFormat::Paired, FieldLength::Long, 5).status_fields(), 3);
        assert_eq!(layout(3, DisplayFormat::SingleStatus, FieldLength::Long, 5).status_fields(), 1);
        assert_eq!(layout(3, DisplayFormat::NoStatus, FieldLength::Long, 5).status_fields(), 0);
    }

    #[test]
    fn clue_heading_label_is_cut_to_fit() {
        assert_eq!(layout(1, DisplayFormat::Paired, FieldLength::Long, 5).clue_heading(0), "Clue      ");
        assert_eq!(layout(1, DisplayFormat::Paired, FieldLength::Short, 3).clue_heading(0), "Clu");
        assert_eq!(layout(1, DisplayFormat::Paired, FieldLength::Short, 1).clue_heading(0), "C");
    }

    #[test]
    fn clue_heading_uses_numbers_for_many_games() {
        let four = layout(4, DisplayFormat::NoStatus, FieldLength::Short, 5);
        assert_eq!(four.clue_heading(2), "Clue ");

        let five = layout(5, DisplayFormat::NoStatus, FieldLength::Short, 5);
        assert_eq!(five.clue_heading(2), "  3  ");

        let twelve = layout(12, DisplayFormat::SingleStatus, FieldLength::Long, 5);
        assert_eq!(twelve.clue_heading(11), "    12    ");

        let paired = layout(6, DisplayFormat::Paired, FieldLength::Short, 5);
        assert_eq!(paired.clue_heading(3), "Clue ");
    }

    #[test]
    fn one_character_field_keeps_last_digit() {
        let tiny = layout(12, DisplayFormat::NoStatus, FieldLength::Short, 1);
        assert_eq!(tiny.clue_heading(2), "3");
        assert_eq!(tiny.clue_heading(11), "2");
    }

    #[test]
    fn status_heading_depends_on_kind() {
        let clue_info = LayoutPolicy::new(&Config::default());
        assert!(clue_info.status_heading().starts_with("Status "));
        assert_eq!(clue_info.status_heading().len(), 52);

        let guess_info = LayoutPolicy::new(&Config {
            status_kind: StatusKind::GuessInfo,
            status_length: FieldLength::Short,
            ..Config::default()
        });
        assert_eq!(guess_info.status_heading(), format!("{:<26}", "Untried letters"));
    }

    #[test]
    fn heading_and_padding_have_equal_width() {
        for format in [DisplayFormat::Paired, DisplayFormat::SingleStatus, DisplayFormat::NoStatus] {
            for games in [1, 2, 5] {
                let layout = layout(games, format, FieldLength::Long, 5);
                assert_eq!(
                    layout.heading_line().len(),
                    layout.padding_line().len(),
                    "{format:?} with {games} games"
                );
            }
        }
    }

    #[test]
    fn paired_row() {
        let layout = LayoutPolicy::new(&Config {
            num_games: 2,
            clue_length: FieldLength::Short,
            status_length: FieldLength::Short,
            word_length: 3,
            ..Config::default()
        });
        let row = layout.arrange_row(&[
            fields("ABC", Some("ab........................"), false),
            fields("ABC", Some("ABC......................."), true),
        ]);
        assert_eq!(
            row,
            format!("ABC>ab........................|ABC {}|", " ".repeat(26))
        );
    }

    #[test]
    fn single_status_row_uses_first_status() {
        let layout = layout(2, DisplayFormat::SingleStatus, FieldLength::Short, 3);
        let row = layout.arrange_row(&[fields("ABC", Some("first"), false), fields("   ", Some("second"), true)]);
        assert_eq!(row, "ABC|   >first|");
    }

    #[test]
    fn no_status_row() {
        let layout = layout(3, DisplayFormat::NoStatus, FieldLength::Short, 3);
        let row = layout.arrange_row(&[
            fields("ABC", None, false),
            fields("DEF", None, false),
            fields("GHI", None, false),
        ]);
        assert_eq!(row, "ABC|DEF|GHI|");
    }

    #[test]
    fn single_status_heading_line() {
        let layout = LayoutPolicy::new(&Config {
            num_games: 2,
            word_length: 4,
            clue_length: FieldLength::Short,
            status_length: FieldLength::Short,
            display_format: DisplayFormat::SingleStatus,
            status_kind: StatusKind::GuessInfo,
            ..Config::default()
        });
        assert_eq!(
            layout.heading_line(),
            format!("Clue|Clue>{:<26}|", "Untried letters")
        );
        assert_eq!(layout.padding_line(), format!("{}|", " ".repeat(4 + 1 + 4 + 1 + 26)));
    }
}
