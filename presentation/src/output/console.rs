//! Console output formatter for rounds, results and game reports

use colored::Colorize;
use flagquiz_application::GameReport;
use flagquiz_domain::{AnswerResult, Item, OutputFormat, RoundView};

/// Shown for an item without a description
pub const UNKNOWN_FLAG: &str = "Unknown flag";

/// Formats quiz state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a dealt round: the target to find and the numbered choices
    pub fn format_round(round: &RoundView, score: i64, rounds_per_game: usize) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!(
            "Round {}/{}    Score: {}",
            round.number, rounds_per_game, score
        )));
        output.push('\n');

        output.push_str(&format!(
            "{}\n{}\n\n",
            "Tap the flag of".dimmed(),
            round.target.name().bold()
        ));

        for (i, item) in round.choices.iter().enumerate() {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{})", i + 1).cyan().bold(),
                Self::choice_label(item)
            ));
        }

        output
    }

    /// What a choice looks like on screen
    pub fn choice_label(item: &Item) -> &str {
        item.description().unwrap_or(UNKNOWN_FLAG)
    }

    /// Title of a result: "Correct" or which flag was picked by mistake
    pub fn result_title(result: &AnswerResult) -> String {
        match result.mistaken_item() {
            None => "Correct".to_string(),
            Some(item) => format!("Wrong! That's the flag of {}", item.name()),
        }
    }

    /// Format the result of an answer
    pub fn format_result(result: &AnswerResult) -> String {
        let title = Self::result_title(result);
        let title = if result.is_correct() {
            title.green().bold()
        } else {
            title.red().bold()
        };

        format!("\n{}\nYour score is {}\n", title, result.score_after)
    }

    /// Format the end of a game
    pub fn format_game_over(report: &GameReport) -> String {
        if report.completed {
            format!(
                "\n{}\nYour final score is {}\n",
                "Game over".yellow().bold(),
                report.final_score
            )
        } else {
            format!(
                "\n{}\nScore after {} of {} rounds: {}\n",
                "Game abandoned".yellow().bold(),
                report.rounds_played,
                report.rounds_per_game,
                report.final_score
            )
        }
    }

    /// Format a report in the requested format
    pub fn format_report(report: &GameReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::Score => Self::format_score_only(report),
            OutputFormat::Full => Self::format(report),
            OutputFormat::Json => Self::format_json(report),
        }
    }

    /// Format the complete report, one line per round
    pub fn format(report: &GameReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Game Report"));
        output.push('\n');

        for record in &report.rounds {
            let mark = if record.outcome.is_correct() {
                "v".green()
            } else {
                "x".red()
            };
            output.push_str(&format!(
                "  {} Round {}: find {:<10} picked {:<10} score {}\n",
                mark, record.round, record.target, record.chosen, record.score_after
            ));
        }

        output.push_str(&format!(
            "\n{} {} correct, {} wrong\n",
            "Answers:".cyan().bold(),
            report.correct_count(),
            report.incorrect_count()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Final score:".cyan().bold(),
            report.final_score
        ));

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(report: &GameReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the final score only (concise output)
    pub fn format_score_only(report: &GameReport) -> String {
        format!("{} {}", "Final score:".bold(), report.final_score)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(50);
        format!("{}\n{:^50}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(50).cyan())
    }
}
