use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::debug;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::ai::Agent;
use crate::config::Seat;
use crate::game::{GameOutcome, GameState, Player, COLS};

/// Pause between computer moves so they can be followed on screen.
const COMPUTER_MOVE_DELAY: Duration = Duration::from_millis(300);

pub struct App {
    game_state: GameState,
    seats: [Seat; 2],
    agents: [Option<Box<dyn Agent>>; 2],
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(red: Seat, yellow: Seat) -> Self {
        let build = |seat: Seat| seat.strategy().map(|strategy| strategy.build(None));
        App {
            game_state: GameState::initial(),
            seats: [red, yellow],
            agents: [build(red), build(yellow)],
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    fn index(player: Player) -> usize {
        match player {
            Player::Red => 0,
            Player::Yellow => 1,
        }
    }

    fn computer_to_move(&self) -> bool {
        !self.game_state.is_terminal()
            && self.agents[Self::index(self.game_state.current_player())].is_some()
    }

    /// Main application loop
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.computer_to_move() {
                // Still listen for quit/restart while the computer plays
                self.handle_events(COMPUTER_MOVE_DELAY)?;
                if !self.should_quit && self.computer_to_move() {
                    self.play_computer_move();
                }
            } else {
                self.handle_events(Duration::from_millis(100))?;
            }
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ if self.computer_to_move() => {}
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
                self.drop_piece(self.selected_column);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        self.game_state = GameState::initial();
        self.agents = [
            self.seats[0].strategy().map(|s| s.build(None)),
            self.seats[1].strategy().map(|s| s.build(None)),
        ];
        self.selected_column = 3;
        self.message = Some("New game started!".to_string());
    }

    /// Let the computer seat whose turn it is pick and play a column.
    fn play_computer_move(&mut self) {
        let player = self.game_state.current_player();
        let Some(agent) = self.agents[Self::index(player)].as_mut() else {
            return;
        };

        let started = Instant::now();
        match agent.select_column(self.game_state.board(), player) {
            Ok(col) => {
                let elapsed = started.elapsed();
                debug!("{} ({}) chose column {} in {:?}", player.name(), agent.name(), col, elapsed);
                self.selected_column = col;
                self.message = Some(format!(
                    "{} played column {} ({:.3} s)",
                    agent.name(),
                    col + 1,
                    elapsed.as_secs_f64()
                ));
                self.drop_piece(col);
            }
            Err(err) => {
                self.message = Some(format!("{} could not move: {err}", agent.name()));
            }
        }
    }

    /// Drop the current player's piece in `column`
    fn drop_piece(&mut self, column: usize) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.play(column) {
            Ok(_) => {
                // Check if game just ended
                if let Some(outcome) = self.game_state.outcome() {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(player) => {
                            format!("{} wins! Press 'r' to play again.", player.name())
                        }
                        GameOutcome::Draw => "It's a draw!".to_string(),
                    });
                }
            }
            Err(err) => {
                self.message = Some(format!("{err}!"));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let mode = format!("Red: {}  vs  Yellow: {}", self.seats[0], self.seats[1]);
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            &mode,
        );
    }
}
