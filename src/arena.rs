//! Repeated agent-vs-agent trials: win tallies and mean think time per side.

use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::ai::Agent;
use crate::config::{ArenaConfig, Seat};
use crate::error::ArenaError;
use crate::game::{Board, GameOutcome, GameState, Player};

/// Result of a single game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub winner: Option<Player>,
    pub game_length: usize,
    pub final_board: Board,
}

/// Running totals for one colour.
#[derive(Debug, Clone, Default)]
pub struct SideStats {
    pub wins: usize,
    pub moves: usize,
    pub think_time: Duration,
}

impl SideStats {
    fn record_move(&mut self, elapsed: Duration) {
        self.moves += 1;
        self.think_time += elapsed;
    }

    /// Mean seconds spent choosing a move.
    pub fn mean_move_secs(&self) -> f64 {
        if self.moves == 0 {
            return 0.0;
        }
        self.think_time.as_secs_f64() / self.moves as f64
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct SideReport {
    pub player: Player,
    pub agent: String,
    pub wins: usize,
    pub moves: usize,
    pub mean_move_secs: f64,
}

/// Summary of an arena run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ArenaReport {
    pub games: usize,
    pub draws: usize,
    pub average_game_length: f64,
    pub red: SideReport,
    pub yellow: SideReport,
}

impl fmt::Display for ArenaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} games played", self.games)?;
        for side in [&self.red, &self.yellow] {
            writeln!(
                f,
                "  {:<6} {:<10} won {:>4} times, {:.6} s per move on average",
                side.player.name(),
                side.agent,
                side.wins,
                side.mean_move_secs
            )?;
        }
        write!(
            f,
            "  draws: {}  |  average game length: {:.1} moves",
            self.draws, self.average_game_length
        )
    }
}

/// Two agents facing each other; Red always moves first.
pub struct Arena {
    red: Box<dyn Agent>,
    yellow: Box<dyn Agent>,
    labels: [String; 2],
}

impl Arena {
    pub fn new(red: Box<dyn Agent>, yellow: Box<dyn Agent>) -> Self {
        let labels = [red.name().to_string(), yellow.name().to_string()];
        Arena { red, yellow, labels }
    }

    /// Build both agents from config. Yellow's seed is offset from Red's so
    /// two agents of the same kind do not mirror each other.
    pub fn from_config(config: &ArenaConfig) -> Result<Self, ArenaError> {
        let build = |seat: Seat, offset: u64| {
            seat.strategy()
                .map(|strategy| strategy.build(config.seed.map(|s| s.wrapping_add(offset))))
                .ok_or(ArenaError::HumanSeat)
        };
        let red = build(config.red, 0)?;
        let yellow = build(config.yellow, 1)?;
        info!("arena seats: Red {} vs Yellow {}", config.red, config.yellow);
        Ok(Arena::new(red, yellow))
    }

    fn index(player: Player) -> usize {
        match player {
            Player::Red => 0,
            Player::Yellow => 1,
        }
    }

    /// Play one game to the end, adding think times to `stats`.
    pub fn play_game(&mut self, stats: &mut [SideStats; 2]) -> Result<GameRecord, ArenaError> {
        let mut state = GameState::initial();

        while !state.is_terminal() {
            let player = state.current_player();
            let agent = match player {
                Player::Red => self.red.as_mut(),
                Player::Yellow => self.yellow.as_mut(),
            };

            let started = Instant::now();
            let column = agent
                .select_column(state.board(), player)
                .map_err(|source| ArenaError::Search {
                    agent: agent.name().to_string(),
                    source,
                })?;
            stats[Self::index(player)].record_move(started.elapsed());

            state.play(column).map_err(|source| ArenaError::IllegalMove {
                agent: agent.name().to_string(),
                column,
                source,
            })?;
        }

        let winner = match state.outcome() {
            Some(GameOutcome::Winner(player)) => Some(player),
            _ => None,
        };
        if let Some(player) = winner {
            stats[Self::index(player)].wins += 1;
        }

        Ok(GameRecord {
            winner,
            game_length: state.moves_played(),
            final_board: *state.board(),
        })
    }

    /// Play `games` games and summarise them.
    pub fn run(&mut self, games: usize) -> Result<ArenaReport, ArenaError> {
        let mut stats = [SideStats::default(), SideStats::default()];
        let mut draws = 0;
        let mut total_length = 0;

        info!(
            "starting {} games: Red {} vs Yellow {}",
            games, self.labels[0], self.labels[1]
        );

        for game in 1..=games {
            let record = self.play_game(&mut stats)?;
            total_length += record.game_length;

            match record.winner {
                Some(player) => info!(
                    "game {}/{}: {} ({}) wins in {} moves",
                    game,
                    games,
                    player.name(),
                    self.labels[Self::index(player)],
                    record.game_length
                ),
                None => {
                    draws += 1;
                    info!("game {}/{}: draw", game, games);
                }
            }
            debug!("final board:\n{}", record.final_board);
        }

        let side = |player: Player, stats: &SideStats| SideReport {
            player,
            agent: self.labels[Self::index(player)].clone(),
            wins: stats.wins,
            moves: stats.moves,
            mean_move_secs: stats.mean_move_secs(),
        };

        Ok(ArenaReport {
            games,
            draws,
            average_game_length: if games == 0 {
                0.0
            } else {
                total_length as f64 / games as f64
            },
            red: side(Player::Red, &stats[0]),
            yellow: side(Player::Yellow, &stats[1]),
        })
    }
}
