//! Bot-vs-bot match loop.
//!
//! Each game starts from a fresh engine built from the match's `GameConfig`.
//! The seated bot for the current turn picks a move, the engine applies it,
//! and the loop repeats until no player can move. Finished games are folded
//! into a [`MatchReport`].

use log::{debug, info};

use crate::bots::{Bot, BotKind, Strategy};
use crate::core::{GameRng, PlayerId, PlayerMap, Result, ReversiError};
use crate::rules::{GameResult, ReversiEngine};

use super::config::MatchConfig;
use super::stats::MatchReport;

/// Plays a series of games between a fixed seating of bots.
#[derive(Clone, Debug)]
pub struct MatchRunner {
    config: MatchConfig,
    seats: PlayerMap<BotKind>,
}

impl MatchRunner {
    /// Seat one bot per player.
    ///
    /// Fails with `InvalidConstruction` if the game config is invalid, or if
    /// any player is left without a bot, seated twice, or outside the
    /// configured player count.
    pub fn new(
        config: MatchConfig,
        bots: impl IntoIterator<Item = (PlayerId, BotKind)>,
    ) -> Result<Self> {
        config.game.validate()?;
        let num_players = config.game.num_players;

        let mut seats: PlayerMap<Option<BotKind>> = PlayerMap::with_default(num_players);
        for (player, kind) in bots {
            let seat = seats.get_mut(player).ok_or_else(|| {
                ReversiError::InvalidConstruction(format!(
                    "{player} is not seated in a {num_players}-player game"
                ))
            })?;
            if seat.replace(kind).is_some() {
                return Err(ReversiError::InvalidConstruction(format!(
                    "{player} has more than one bot"
                )));
            }
        }

        if let Some((player, _)) = seats.iter().find(|(_, kind)| kind.is_none()) {
            return Err(ReversiError::InvalidConstruction(format!(
                "{player} has no bot"
            )));
        }
        let seats = seats.transpose().ok_or_else(|| {
            ReversiError::InvalidConstruction("every player needs a bot".to_string())
        })?;

        Ok(Self { config, seats })
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The bot kind seated as `player`.
    #[must_use]
    pub fn seat(&self, player: PlayerId) -> Option<BotKind> {
        self.seats.get(player).copied()
    }

    /// Fresh bots for one game, each drawing from its own RNG stream.
    fn deal_bots(&self, game_rng: &GameRng) -> PlayerMap<Bot> {
        PlayerMap::new(self.seats.player_count(), |player| {
            let stream = game_rng.for_context(&format!("seat-{}", player.number()));
            Bot::with_rng(self.seats[player], player, stream)
        })
    }

    /// Play one game to completion with the given bots.
    ///
    /// Fails with `InvalidState` if a bot passes while it still has moves or
    /// the game overruns the board's capacity, and propagates `IllegalMove`
    /// if a bot picks an illegal square.
    pub fn play_game(&self, bots: &mut PlayerMap<Bot>) -> Result<GameResult> {
        let mut engine = ReversiEngine::new(self.config.game)?;

        for _ in 0..self.config.max_moves() {
            if engine.is_done() {
                break;
            }

            let player = engine.turn();
            let bot = bots.get_mut(player).ok_or_else(|| {
                ReversiError::InvalidState(format!("{player} has no bot"))
            })?;
            let pos = bot.choose(&engine).ok_or_else(|| {
                ReversiError::InvalidState(format!(
                    "{} bot for {player} passed with moves available",
                    bot.name()
                ))
            })?;
            engine.apply_move(pos)?;
        }

        engine.result().ok_or_else(|| {
            ReversiError::InvalidState(format!(
                "game did not finish within {} moves",
                self.config.max_moves()
            ))
        })
    }

    /// Play every game of the match and tally the results.
    pub fn run(&self) -> Result<MatchReport> {
        let mut report = MatchReport::new(self.seats.iter().map(|(p, kind)| (p, *kind)));
        let mut rng = GameRng::new(self.config.seed);

        for game in 0..self.config.num_games {
            let game_rng = rng.fork();
            let mut bots = self.deal_bots(&game_rng);
            let result = self.play_game(&mut bots)?;
            debug!("game {} finished: {:?}", game, result);
            report.record(&result);
        }

        info!(
            "match of {} games on {}x{} finished, {} tied",
            report.games_played, self.config.game.side, self.config.game.side, report.tied_games
        );
        Ok(report)
    }
}

/// Play `num_games` of classic Othello between the given seating.
pub fn run_match(
    num_games: usize,
    bots: impl IntoIterator<Item = (PlayerId, BotKind)>,
) -> Result<MatchReport> {
    MatchRunner::new(MatchConfig::default().with_games(num_games), bots)?.run()
}
