//! Interactive terminal play
//!
//! Reads the player's choices with a line editor and forwards them to the
//! game. Rendering is left to the progress notifier.

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use flagquiz_application::{
    AnswerSource, AnswerSourceError, GameProgressNotifier, GameReport, PlayGameError,
    PlayGameUseCase, PlayerAction,
};
use flagquiz_domain::{AnswerResult, CHOICES_PER_ROUND, OutputFormat, RandomSource, RoundView};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

/// Parse one line of player input
///
/// `1`..`3` pick a choice, `q`/`quit`/`/quit` give up; anything else is
/// not understood.
pub fn parse_action(line: &str) -> Option<PlayerAction> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" | "/quit" | "/q" => return Some(PlayerAction::Quit),
        _ => {}
    }

    match line.parse::<usize>() {
        Ok(n) if (1..=CHOICES_PER_ROUND).contains(&n) => Some(PlayerAction::Choose(n - 1)),
        _ => None,
    }
}

/// Parse the answer to "New game?"; only an explicit yes starts over
pub fn parse_yes(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Read lines until one of them is an action
///
/// Blank lines are skipped and anything unparseable is re-prompted. Running
/// out of input (Ctrl-C, Ctrl-D) counts as quitting.
pub fn read_action<I>(lines: I) -> Result<PlayerAction, AnswerSourceError>
where
    I: IntoIterator<Item = Result<String, AnswerSourceError>>,
{
    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_action(&line) {
            Some(action) => return Ok(action),
            None => println!(
                "{}",
                format!("Please enter 1-{} or q", CHOICES_PER_ROUND).yellow()
            ),
        }
    }

    println!("^C");
    Ok(PlayerAction::Quit)
}

/// Interactive quiz REPL
pub struct QuizRepl {
    editor: DefaultEditor,
    output_format: OutputFormat,
}

impl QuizRepl {
    /// Create a new QuizRepl
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            output_format: OutputFormat::default(),
        })
    }

    /// Set the format of the end-of-game report
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Play games until the player declines another one
    pub fn run<R: RandomSource>(
        &mut self,
        use_case: &mut PlayGameUseCase<R>,
        progress: &dyn GameProgressNotifier,
    ) -> Result<Vec<GameReport>, PlayGameError> {
        self.print_welcome(use_case.engine().rounds_per_game());

        let mut reports = Vec::new();
        loop {
            let report = use_case.execute_with_progress(self, progress)?;
            println!();
            println!(
                "{}",
                ConsoleFormatter::format_report(&report, self.output_format)
            );

            let completed = report.completed;
            reports.push(report);

            if !completed || !self.ask_new_game() {
                break;
            }
        }

        println!("Bye!");
        Ok(reports)
    }

    fn print_welcome(&self, rounds_per_game: usize) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│               Guess the Flag                │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "{} rounds per game. Correct: +1, wrong: -2.",
            rounds_per_game
        );
        println!("Type 1-3 to pick a flag, q to quit.");
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AnswerSourceError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(AnswerSourceError::IoError(err.to_string())),
        }
    }

    fn ask_new_game(&mut self) -> bool {
        match self.read_line("New game? [y/N] ") {
            Ok(Some(line)) => parse_yes(&line),
            Ok(None) => false,
            Err(e) => {
                debug!("Could not read answer to new game prompt: {}", e);
                false
            }
        }
    }
}

impl AnswerSource for QuizRepl {
    fn choose(
        &mut self,
        _round: &RoundView,
        _score: i64,
    ) -> Result<PlayerAction, AnswerSourceError> {
        println!();
        read_action(std::iter::from_fn(|| self.read_line(">>> ").transpose()))
    }

    fn acknowledge(&mut self, _result: &AnswerResult) -> Result<(), AnswerSourceError> {
        self.read_line("Press Enter to continue ")?;
        Ok(())
    }
}
