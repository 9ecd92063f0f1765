//! Bot selection by name and enum dispatch over the strategies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{GameRng, PlayerId, Pos};
use crate::rules::ReversiEngine;

use super::greedy::GreedyBot;
use super::random::RandomBot;
use super::strategy::Strategy;
use super::two_ply::TwoPlyBot;

/// The available strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BotKind {
    Random,
    Greedy,
    TwoPly,
}

impl BotKind {
    pub const ALL: [BotKind; 3] = [BotKind::Random, BotKind::Greedy, BotKind::TwoPly];
}

impl fmt::Display for BotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BotKind::Random => "random",
            BotKind::Greedy => "greedy",
            BotKind::TwoPly => "two-ply",
        };
        f.write_str(name)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseBotKindError(pub String);

impl fmt::Display for ParseBotKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown bot '{}' (expected random, smart/greedy, very-smart/two-ply)",
            self.0
        )
    }
}

impl std::error::Error for ParseBotKindError {}

/// Accepts both the descriptive names and the `smart` / `very-smart` aliases.
impl FromStr for BotKind {
    type Err = ParseBotKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(BotKind::Random),
            "greedy" | "smart" => Ok(BotKind::Greedy),
            "two-ply" | "twoply" | "very-smart" => Ok(BotKind::TwoPly),
            _ => Err(ParseBotKindError(s.to_string())),
        }
    }
}

/// Any strategy, chosen at runtime.
#[derive(Clone, Debug)]
pub enum Bot {
    Random(RandomBot),
    Greedy(GreedyBot),
    TwoPly(TwoPlyBot),
}

impl Bot {
    /// Build a bot of `kind` for `player`. `seed` only matters for random bots.
    pub fn new(kind: BotKind, player: PlayerId, seed: u64) -> Self {
        Self::with_rng(kind, player, GameRng::new(seed))
    }

    pub(crate) fn with_rng(kind: BotKind, player: PlayerId, rng: GameRng) -> Self {
        match kind {
            BotKind::Random => Bot::Random(RandomBot::with_rng(player, rng)),
            BotKind::Greedy => Bot::Greedy(GreedyBot::new(player)),
            BotKind::TwoPly => Bot::TwoPly(TwoPlyBot::new(player)),
        }
    }

    #[must_use]
    pub fn kind(&self) -> BotKind {
        match self {
            Bot::Random(_) => BotKind::Random,
            Bot::Greedy(_) => BotKind::Greedy,
            Bot::TwoPly(_) => BotKind::TwoPly,
        }
    }
}

impl Strategy for Bot {
    fn player(&self) -> PlayerId {
        match self {
            Bot::Random(bot) => bot.player(),
            Bot::Greedy(bot) => bot.player(),
            Bot::TwoPly(bot) => bot.player(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Bot::Random(bot) => bot.name(),
            Bot::Greedy(bot) => bot.name(),
            Bot::TwoPly(bot) => bot.name(),
        }
    }

    fn choose(&mut self, engine: &ReversiEngine) -> Option<Pos> {
        match self {
            Bot::Random(bot) => bot.choose(engine),
            Bot::Greedy(bot) => bot.choose(engine),
            Bot::TwoPly(bot) => bot.choose(engine),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("random".parse(), Ok(BotKind::Random));
        assert_eq!("Smart".parse(), Ok(BotKind::Greedy));
        assert_eq!("greedy".parse(), Ok(BotKind::Greedy));
        assert_eq!("VERY-SMART".parse(), Ok(BotKind::TwoPly));
        assert_eq!("two-ply".parse(), Ok(BotKind::TwoPly));
        assert!("minimax".parse::<BotKind>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for kind in BotKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }

    #[test]
    fn test_bot_dispatch() {
        let bot = Bot::new(BotKind::TwoPly, PlayerId::new(2), 0);
        assert_eq!(bot.kind(), BotKind::TwoPly);
        assert_eq!(bot.player(), PlayerId::new(2));
        assert_eq!(bot.name(), "two-ply");
    }
}
