use crate::ai::{Agent, LeftmostAgent};
use crate::error::MoveError;
use crate::game::{Player, Round, RoundOutcome, COLUMN_COUNT};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::debug;
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    round: Round,
    agent: Box<dyn Agent>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(players: [Player; 2]) -> Self {
        App {
            round: Round::new(players),
            agent: Box::new(LeftmostAgent::new()),
            selected_column: COLUMN_COUNT / 2, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLUMN_COUNT - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
                self.drop_disc();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_disc();
            }
            KeyCode::Char('r') => {
                self.round = self.round.restart();
                self.selected_column = COLUMN_COUNT / 2;
                self.message = Some("New round started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the human's disc in the selected column, then let the computer
    /// answer if the round is still running.
    fn drop_disc(&mut self) {
        if self.round.is_over() {
            self.message = Some("Game over! Press 'r' to start a new round.".to_string());
            return;
        }

        match self.round.play(self.selected_column) {
            Ok(turn) => {
                if turn.outcome.is_none() {
                    self.ai_turn();
                }
                self.report_outcome();
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full, choose another column.".to_string());
            }
            Err(MoveError::InvalidColumn(_)) => {
                self.message = Some("Column supplied is invalid.".to_string());
            }
            Err(MoveError::RoundOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    fn ai_turn(&mut self) {
        let Some(column) = self.agent.select_column(self.round.grid()) else {
            return;
        };
        let name = self.round.current_player().name().to_string();
        match self.round.play(column) {
            Ok(_) => self.message = Some(format!("{name} has placed their disc.")),
            Err(err) => debug!("computer move into column {column} refused: {err}"),
        }
    }

    fn report_outcome(&mut self) {
        match self.round.outcome() {
            Some(RoundOutcome::Winner(_)) => {
                let name = self.round.winner().map(Player::name).unwrap_or_default();
                self.message = Some(format!("Game won by {name}!"));
            }
            Some(RoundOutcome::Draw) => {
                self.message = Some("The game ends in a draw as the board is full.".to_string());
            }
            None => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self);
    }
}
