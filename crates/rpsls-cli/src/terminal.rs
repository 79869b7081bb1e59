//! Line-oriented terminal console over any reader and writer.

use std::io::{BufRead, Write};

use colored::Colorize;

use rpsls_core::{Console, Move, Notice, Prompt, RoundOutcome, RpsResult, Score, Side};

const BANNER: &str = "  WELCOME TO 'Rock-Paper-Scissors-SPOCK-LIZARD' GAME  ";

/// Renders notices as plain lines and reads one line per prompt.
pub struct TerminalConsole<R, W> {
    reader: R,
    writer: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Wrap a reader and writer. With `clear_screen` the screen is cleared
    /// before each round.
    pub fn new(reader: R, writer: W, clear_screen: bool) -> Self {
        Self {
            reader,
            writer,
            clear_screen,
        }
    }

    fn prompt(&mut self, message: &str) -> RpsResult<()> {
        writeln!(self.writer, "=> {message}")?;
        Ok(())
    }

    fn rule(&mut self, ch: char) -> RpsResult<()> {
        writeln!(self.writer, "{}", ch.to_string().repeat(BANNER.len()))?;
        Ok(())
    }

    fn score(&mut self, score: Score) -> RpsResult<()> {
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "   PLAYER| {}   -   {} |COMPUTER",
            score.player, score.computer
        )?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn read_line(&mut self, prompt: Prompt) -> RpsResult<Option<String>> {
        match prompt {
            Prompt::Move => self.prompt("Choose one, you also can type abbreviations:")?,
            Prompt::NextRound => {
                writeln!(self.writer)?;
                self.prompt("Hit 'Enter' to play the next round...")?;
            }
            Prompt::Replay => self.prompt("Do you want to play again? (enter y/yes or n/no)")?,
        }
        self.writer.flush()?;

        // Non-UTF-8 bytes are replaced, never an error.
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn show(&mut self, notice: Notice<'_>) -> RpsResult<()> {
        match notice {
            Notice::Welcome { target } => {
                if self.clear_screen {
                    write!(self.writer, "\x1B[2J\x1B[1;1H")?;
                }
                self.rule('=')?;
                writeln!(self.writer, "{}", BANNER.bold())?;
                writeln!(
                    self.writer,
                    "      Game is over when either player reaches {target}"
                )?;
                self.rule('=')?;
            }
            Notice::Score(score) => self.score(score)?,
            Notice::Menu => {
                for m in Move::ALL {
                    writeln!(self.writer, "    * {} ({})", title_case(m), m.alias())?;
                }
            }
            Notice::InvalidMove => {
                writeln!(self.writer, "=> {}", "That's not a valid choice.".yellow())?;
            }
            Notice::InvalidReplay => {
                writeln!(
                    self.writer,
                    "=> {}",
                    "Invalid input...Enter y/yes to play again, n/no to stop.".yellow()
                )?;
            }
            Notice::Choices { player, computer } => {
                let text = format!(
                    "You chose: {}; Computer chose: {}",
                    player.name().to_uppercase(),
                    computer.name().to_uppercase()
                );
                self.prompt(&text)?;
            }
            Notice::Round(result) => match result.outcome {
                RoundOutcome::Tie => self.prompt("It is a tie!")?,
                RoundOutcome::Win(side) => {
                    let banner = format!("{} won!", side_label(side));
                    let banner = match side {
                        Side::Player => banner.green(),
                        Side::Computer => banner.red(),
                    };
                    if result.phrase.is_empty() {
                        writeln!(self.writer, "=> {banner}")?;
                    } else {
                        writeln!(self.writer, "=> {}. ###### {banner}", result.phrase)?;
                    }
                }
            },
            Notice::MatchOver { winner, score } => {
                self.prompt("GAME OVER...")?;
                self.score(score)?;
                let line = match winner {
                    Side::Player => "Player won the game",
                    Side::Computer => "Computer won the game",
                };
                writeln!(self.writer, "{}", line.bold())?;
                writeln!(self.writer)?;
            }
            Notice::Farewell => self.prompt("Thank you for playing. Good bye!")?,
        }
        Ok(())
    }
}

fn side_label(side: Side) -> &'static str {
    match side {
        Side::Player => "PLAYER",
        Side::Computer => "COMPUTER",
    }
}

fn title_case(m: Move) -> String {
    let name = m.name();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
