use std::io::{self, BufRead, Write};

use log::{debug, info};

use super::input::{parse_column, wants_restart};
use super::render::render_grid;
use crate::ai::{Agent, LeftmostAgent};
use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{Grid, Player, Round, RoundOutcome, TurnOutcome, COLUMN_COUNT};

const BANNER: &str =
    "************************************************************************************************";

/// Totals over every round that was played to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: usize,
    /// Wins per player, in turn order.
    pub wins: [usize; 2],
    pub draws: usize,
}

impl SessionSummary {
    fn record(&mut self, outcome: RoundOutcome) {
        self.rounds += 1;
        match outcome {
            RoundOutcome::Winner(index) => self.wins[index] += 1,
            RoundOutcome::Draw => self.draws += 1,
        }
    }
}

/// A human against the computer over a line-based reader and writer.
pub struct ConsoleSession<R, W> {
    input: R,
    output: W,
    players: [Player; 2],
    agent: Box<dyn Agent>,
    pause_before_ai: bool,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(input: R, output: W, config: &AppConfig) -> Self {
        ConsoleSession {
            input,
            output,
            players: config.players(),
            agent: Box::new(LeftmostAgent::new()),
            pause_before_ai: config.console.pause_before_ai,
        }
    }

    /// Play rounds until the player declines a restart or input runs out.
    pub fn run(&mut self) -> io::Result<SessionSummary> {
        self.write_instructions()?;

        let mut summary = SessionSummary::default();
        loop {
            let Some(outcome) = self.play_round()? else {
                debug!("input closed mid-round");
                break;
            };
            summary.record(outcome);

            writeln!(
                self.output,
                "Game over. Type '-r' to start a new round, or press any other key to close this application...\n"
            )?;
            match self.read_line()? {
                Some(line) if wants_restart(&line) => continue,
                _ => break,
            }
        }

        info!(
            "session finished: {} round(s), wins {:?}, {} draw(s)",
            summary.rounds, summary.wins, summary.draws
        );
        Ok(summary)
    }

    /// Returns `None` if input ran out before the round finished.
    fn play_round(&mut self) -> io::Result<Option<RoundOutcome>> {
        let mut round = Round::new(self.players.clone());
        info!("new round started");
        writeln!(self.output, "New round started!\n")?;
        self.write_grid(round.grid())?;

        loop {
            let mover = round.current_player().clone();
            let turn = if mover.is_human() {
                match self.human_turn(&mut round)? {
                    Some(turn) => turn,
                    None => return Ok(None),
                }
            } else {
                self.ai_turn(&mut round)?
            };

            self.write_grid(round.grid())?;

            match turn.outcome {
                Some(outcome @ RoundOutcome::Winner(_)) => {
                    writeln!(self.output, "Game won by {}!", mover.name())?;
                    return Ok(Some(outcome));
                }
                Some(RoundOutcome::Draw) => {
                    writeln!(self.output, "The game ends in a draw as the board is full.")?;
                    return Ok(Some(RoundOutcome::Draw));
                }
                None => {
                    if mover.is_human() && !round.current_player().is_human() && self.pause_before_ai {
                        writeln!(self.output, "Press enter to place the AI disc...")?;
                        if self.read_line()?.is_none() {
                            return Ok(None);
                        }
                    }
                }
            }
        }
    }

    /// Prompt until the human lands a disc. `None` when input runs out.
    fn human_turn(&mut self, round: &mut Round) -> io::Result<Option<TurnOutcome>> {
        loop {
            writeln!(
                self.output,
                "{} - Enter a number between 1 and {}:",
                round.current_player().name(),
                COLUMN_COUNT
            )?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            let Some(column) = parse_column(&line) else {
                writeln!(self.output, "Column supplied is invalid.")?;
                continue;
            };

            match round.play(column) {
                Ok(turn) => return Ok(Some(turn)),
                Err(MoveError::ColumnFull(_)) => {
                    writeln!(self.output, "Column is full, choose another column.")?;
                }
                Err(MoveError::InvalidColumn(_)) => {
                    writeln!(self.output, "Column supplied is invalid.")?;
                }
                Err(err @ MoveError::RoundOver) => return Err(io::Error::other(err)),
            }
        }
    }

    fn ai_turn(&mut self, round: &mut Round) -> io::Result<TurnOutcome> {
        let name = round.current_player().name().to_string();
        let column = self
            .agent
            .select_column(round.grid())
            .ok_or_else(|| io::Error::other("no open column left for the computer"))?;
        let turn = round.play(column).map_err(io::Error::other)?;
        debug!("{} agent chose column {}", self.agent.name(), column);
        writeln!(self.output, "{name} has placed their disc.")?;
        Ok(turn)
    }

    fn write_instructions(&mut self) -> io::Result<()> {
        let [human, ai] = &self.players;
        writeln!(self.output, "{BANNER}")?;
        writeln!(self.output, "Welcome to Connect Four!\n")?;
        writeln!(self.output, "You will be facing an AI opponent.")?;
        writeln!(self.output, "Human discs will be marked with \"{}\".", human.marker())?;
        writeln!(self.output, "AI discs will be marked with \"{}\".", ai.marker())?;
        writeln!(
            self.output,
            "Drop a disc into a column by entering a number between 1 and {COLUMN_COUNT}, then press the return key."
        )?;
        writeln!(self.output, "{BANNER}\n")?;
        Ok(())
    }

    fn write_grid(&mut self, grid: &Grid) -> io::Result<()> {
        write!(self.output, "\n{}", render_grid(grid))?;
        self.output.flush()
    }

    /// Next input line without its line ending, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
