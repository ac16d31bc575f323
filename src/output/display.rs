//! Messages shown around the game grid

use crate::config::Config;
use crate::game::{EndReason, SessionSummary};
use colored::Colorize;

/// Banner explaining the rules and commands
#[must_use]
pub fn help_text(config: &Config) -> String {
    let reveal = if config.allow_reveal {
        "\n- ':s' to show the target words (without the quotes)"
    } else {
        ""
    };
    let games = if config.num_games == 1 {
        "There is 1 secret word! Try to guess it.".to_string()
    } else {
        format!("There are {} secret words! Try to guess them.", config.num_games)
    };

    format!(
        "\n=======================\n\
         M U L T I - W O R D L E\n\
         =======================\n\
         \n\
         {games}\n\
         - For each guess, enter a single {}-letter word\n\
         - You have {} guesses\n\
         - Better results are indicated by fewer guesses\n\
         - Only words in the word list are accepted\n\
         - Green implies the right letter in the right position\n\
         - Yellow implies the right letter in the wrong position\n\
         - ':q' to quit (without the quotes){reveal}\n",
        config.word_length, config.max_guesses
    )
}

/// Target words, e.g. `The words were: APPLE, GRAPE.`
#[must_use]
pub fn words_text(summary: &SessionSummary, past_tense: bool) -> String {
    let verb = if past_tense { "were" } else { "are" };
    let words: Vec<&str> = summary.targets.iter().map(|w| w.text()).collect();
    format!("The words {verb}: {}.", words.join(", "))
}

/// Per-game scores and the one-line summary
#[must_use]
pub fn score_text(summary: &SessionSummary) -> String {
    format!(
        "You had {} guesses.\nScore summary: {summary}",
        summary.score_line()
    )
}

/// Closing message for an ended session
#[must_use]
pub fn end_text(summary: &SessionSummary, reason: EndReason, color: bool) -> String {
    match reason {
        EndReason::AllComplete => {
            let banner = if color {
                "Congratulations!!!".bright_green().bold().to_string()
            } else {
                "Congratulations!!!".to_string()
            };
            format!("\n\n{banner}\n{}", score_text(summary))
        }
        EndReason::OutOfGuesses => format!(
            "\n\nBad luck!  {}\n{}",
            words_text(summary, true),
            score_text(summary)
        ),
        EndReason::Quit => format!("\n{}\n{}", words_text(summary, true), score_text(summary)),
    }
}
