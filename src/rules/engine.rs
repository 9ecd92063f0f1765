//! The N-player Reversi state machine.
//!
//! ## Legality
//!
//! Two regimes, selected by whether every center cell is occupied:
//!
//! - **Center not filled**: any empty center cell is legal, for every player.
//! - **Center filled**: an empty cell is legal if, in some compass direction,
//!   it is followed by one or more pieces of *other* players and then a piece
//!   of the mover. The run may mix several other players.
//!
//! ## Flipping
//!
//! A move outside the center walks each direction to the first of the
//! mover's pieces and takes every square strictly between, empty squares
//! included. A direction that reaches the edge first takes nothing.
//!
//! ## Turns
//!
//! After a move the turn passes cyclically to the next player holding a
//! legal move. If nobody has one, the game is `Done` and `turn` is stale.

use log::{debug, trace};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

use crate::board::{Board, Direction, Grid, Ray};
use crate::core::{GameConfig, PlayerId, Pos, Result, ReversiError};

use super::result::{GameResult, GameStatus, Outcome};
use super::snapshot::GameSnapshot;

/// Squares captured along one direction.
type Run = SmallVec<[Pos; 8]>;

/// A Reversi game for any valid board size and player count.
///
/// Cloning is cheap: the board shares structure with the original until
/// either side writes, and the center set is shared outright.
#[derive(Clone, Debug)]
pub struct ReversiEngine {
    config: GameConfig,
    board: Board,
    center: Arc<FxHashSet<Pos>>,
    turn: PlayerId,
    status: GameStatus,
}

impl ReversiEngine {
    /// Start a new game.
    ///
    /// Fails with `InvalidConstruction` if `side` and the player count differ
    /// in parity, or if the Othello start is requested for other than 2 players.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let mut board = Board::new(config.side, config.num_players);
        if config.othello {
            let n = config.side / 2;
            let (first, second) = (PlayerId::new(1), PlayerId::new(2));
            board.place(Pos::new(n - 1, n), first)?;
            board.place(Pos::new(n, n - 1), first)?;
            board.place(Pos::new(n - 1, n - 1), second)?;
            board.place(Pos::new(n, n), second)?;
        }

        let mut engine = Self {
            config,
            board,
            center: Arc::new(center_cells(config.side, config.num_players)),
            turn: PlayerId::FIRST,
            status: GameStatus::InProgress,
        };
        engine.settle_turn(PlayerId::FIRST);

        debug!(
            "new game: {}x{} board, {} players, othello={}, {} center cells",
            config.side,
            config.side,
            config.num_players,
            config.othello,
            engine.center.len()
        );
        Ok(engine)
    }

    // === Queries ===

    /// The configuration this game was built from.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Squares per side.
    #[must_use]
    pub fn size(&self) -> usize {
        self.config.side
    }

    /// Number of players.
    #[must_use]
    pub fn num_players(&self) -> usize {
        self.config.num_players
    }

    /// Whether the game started from the Othello cross.
    #[must_use]
    pub fn is_othello(&self) -> bool {
        self.config.othello
    }

    /// All player ids in turn order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.config.num_players)
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board contents as rows of optional player ids.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.board.grid()
    }

    /// The piece at `pos`, if any.
    pub fn piece_at(&self, pos: Pos) -> Result<Option<PlayerId>> {
        self.board.piece_at(pos)
    }

    /// Whose move it is. Meaningless once the game is done.
    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True iff no player has a legal move.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status == GameStatus::Done
    }

    /// Pieces `player` has on the board.
    #[must_use]
    pub fn count(&self, player: PlayerId) -> usize {
        self.board.count(player)
    }

    /// Positions holding `player`'s pieces, row-major.
    #[must_use]
    pub fn locations(&self, player: PlayerId) -> Vec<Pos> {
        self.board.locations(player)
    }

    /// The center cells, row-major.
    #[must_use]
    pub fn center(&self) -> Vec<Pos> {
        let mut cells: Vec<Pos> = self.center.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    #[must_use]
    pub fn is_center(&self, pos: Pos) -> bool {
        self.center.contains(&pos)
    }

    /// Whether every center cell is occupied (sandwich regime).
    #[must_use]
    pub fn center_filled(&self) -> bool {
        self.center.iter().all(|pos| self.board.get(*pos).is_some())
    }

    /// Whether the current player may move at `pos`.
    pub fn legal_move(&self, pos: Pos) -> Result<bool> {
        self.legal_move_for(pos, self.turn)
    }

    /// Whether `player` may move at `pos`.
    pub fn legal_move_for(&self, pos: Pos, player: PlayerId) -> Result<bool> {
        self.board.piece_at(pos)?;
        if !player.is_valid_for(self.config.num_players) {
            return Ok(false);
        }
        Ok(self.is_legal(pos, player, self.center_filled()))
    }

    /// Legal moves for the current player, row-major.
    #[must_use]
    pub fn available_moves(&self) -> Vec<Pos> {
        self.available_moves_for(self.turn)
    }

    /// Legal moves for `player`, row-major. Empty for unknown players.
    #[must_use]
    pub fn available_moves_for(&self, player: PlayerId) -> Vec<Pos> {
        if !player.is_valid_for(self.config.num_players) {
            return Vec::new();
        }
        let center_filled = self.center_filled();
        Pos::all(self.config.side)
            .filter(|pos| self.is_legal(*pos, player, center_filled))
            .collect()
    }

    /// Players tied for the most pieces. Empty while the game is in progress.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if !self.is_done() {
            return Outcome::new();
        }
        let best = self
            .players()
            .map(|p| self.board.count(p))
            .max()
            .unwrap_or(0);
        self.players()
            .filter(|p| self.board.count(*p) == best)
            .collect()
    }

    /// The outcome classified as a win or a tie. `None` while in progress.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        GameResult::from_outcome(&self.outcome())
    }

    // === Mutation ===

    /// Place the current player's piece at `pos`, flip captured runs, and
    /// pass the turn to the next player who can move.
    ///
    /// Fails with `OutOfBounds` or `IllegalMove` before touching any state.
    pub fn apply_move(&mut self, pos: Pos) -> Result<()> {
        self.board.piece_at(pos)?;
        let player = self.turn;
        if self.is_done() || !self.is_legal(pos, player, self.center_filled()) {
            return Err(ReversiError::IllegalMove { pos, player });
        }

        let captured: Run = if self.is_center(pos) {
            Run::new()
        } else {
            Direction::ALL
                .iter()
                .filter_map(|dir| self.flip_run(pos, *dir, player))
                .flatten()
                .collect()
        };

        self.board.place(pos, player)?;
        for square in &captured {
            self.board.place(*square, player)?;
        }
        trace!("{} plays {} flipping {}", player, pos, captured.len());

        self.settle_turn(player.next(self.config.num_players));
        Ok(())
    }

    /// Replace the board and turn wholesale.
    ///
    /// Fails with `InvalidState`, leaving the game untouched, if `turn` is not
    /// a player of this game, the grid is not `side × side`, or a cell holds an
    /// unknown player. Counts are rebuilt from the grid. If `turn` has no
    /// legal move, the turn passes on as it would after a move.
    pub fn load_game(&mut self, turn: PlayerId, grid: &[Vec<Option<PlayerId>>]) -> Result<()> {
        if !turn.is_valid_for(self.config.num_players) {
            return Err(ReversiError::InvalidState(format!(
                "turn {} is not a player of a {}-player game",
                turn.0, self.config.num_players
            )));
        }
        let board = Board::from_grid(self.config.side, self.config.num_players, grid)?;

        self.board = board;
        self.settle_turn(turn);
        debug!(
            "loaded game: {} pieces, turn {}, status {:?}",
            self.board.occupied(),
            self.turn,
            self.status
        );
        Ok(())
    }

    /// Play `moves` on a copy of this game and return the copy.
    ///
    /// Each move is made by whoever's turn it naturally is, with turn skips
    /// applied exactly as in [`apply_move`](Self::apply_move). Replay stops
    /// early once the copy is done. The receiver is never modified.
    pub fn simulate(&self, moves: &[Pos]) -> Result<ReversiEngine> {
        let mut branch = self.clone();
        for (played, pos) in moves.iter().enumerate() {
            if branch.is_done() {
                trace!(
                    "simulation finished after {} of {} moves",
                    played,
                    moves.len()
                );
                break;
            }
            branch.apply_move(*pos)?;
        }
        Ok(branch)
    }

    // === Persistence ===

    /// Capture the board, turn, and configuration.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            side: self.config.side,
            num_players: self.config.num_players,
            othello: self.config.othello,
            turn: self.turn,
            grid: self.board.grid(),
        }
    }

    /// Load a snapshot taken from a game with the same board size and players.
    pub fn restore(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        if snapshot.side != self.config.side || snapshot.num_players != self.config.num_players {
            return Err(ReversiError::InvalidState(format!(
                "snapshot is for a {}x{} board with {} players, game is {}x{} with {}",
                snapshot.side,
                snapshot.side,
                snapshot.num_players,
                self.config.side,
                self.config.side,
                self.config.num_players
            )));
        }
        self.load_game(snapshot.turn, &snapshot.grid)
    }

    /// Build a game directly from a snapshot.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Result<Self> {
        let config =
            GameConfig::new(snapshot.side, snapshot.num_players).with_othello(snapshot.othello);
        let mut engine = Self::new(config)?;
        engine.restore(snapshot)?;
        Ok(engine)
    }

    // === Internals ===

    fn is_legal(&self, pos: Pos, player: PlayerId, center_filled: bool) -> bool {
        if self.board.get(pos).is_some() {
            return false;
        }
        if !center_filled {
            return self.is_center(pos);
        }
        Direction::ALL
            .iter()
            .any(|dir| self.capture_run(pos, *dir, player).is_some())
    }

    /// Pieces `player` would flip in `dir` by moving at `pos`, if any.
    ///
    /// The walk is bounded by the board edge; an empty square or the edge
    /// ends it without a capture.
    fn capture_run(&self, pos: Pos, dir: Direction, player: PlayerId) -> Option<Run> {
        let mut run = Run::new();
        for square in Ray::new(pos, dir, self.config.side) {
            match self.board.get(square) {
                None => return None,
                Some(owner) if owner == player => return (!run.is_empty()).then_some(run),
                Some(_) => run.push(square),
            }
        }
        None
    }

    /// Squares `player` takes over in `dir` after moving at `pos`.
    ///
    /// Unlike [`capture_run`](Self::capture_run), empty squares do not end
    /// the walk: everything strictly between `pos` and the first of the
    /// mover's pieces is taken, gaps included. No mover piece before the
    /// edge means nothing is taken.
    fn flip_run(&self, pos: Pos, dir: Direction, player: PlayerId) -> Option<Run> {
        let mut run = Run::new();
        for square in Ray::new(pos, dir, self.config.side) {
            if self.board.get(square) == Some(player) {
                return (!run.is_empty()).then_some(run);
            }
            run.push(square);
        }
        None
    }

    fn has_moves(&self, player: PlayerId, center_filled: bool) -> bool {
        Pos::all(self.config.side).any(|pos| self.is_legal(pos, player, center_filled))
    }

    /// Hand the turn to the first player, starting at `first` and cycling,
    /// who has a legal move. Marks the game done if nobody does.
    fn settle_turn(&mut self, first: PlayerId) {
        let n = self.config.num_players;
        let center_filled = self.center_filled();
        let mut candidate = first;
        for _ in 0..n {
            if self.has_moves(candidate, center_filled) {
                self.turn = candidate;
                self.status = GameStatus::InProgress;
                return;
            }
            trace!("{} has no legal move, skipping", candidate);
            candidate = candidate.next(n);
        }

        self.turn = first;
        self.status = GameStatus::Done;
        debug!("game over: outcome {:?}", self.outcome().as_slice());
    }
}

/// Cells with `|i - m| < players / 2` on both axes, `m = (side - 1) / 2`.
///
/// Computed in doubled integer coordinates to stay exact.
fn center_cells(side: usize, players: usize) -> FxHashSet<Pos> {
    let near_middle = |i: usize| (2 * i).abs_diff(side - 1) < players;
    Pos::all(side)
        .filter(|pos| near_middle(pos.row) && near_middle(pos.col))
        .collect()
}

impl fmt::Display for ReversiEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        match self.status {
            GameStatus::InProgress => writeln!(f, "Turn: {}", self.turn),
            GameStatus::Done => {
                let leaders: Vec<String> =
                    self.outcome().iter().map(|p| p.0.to_string()).collect();
                writeln!(f, "Game over. Outcome: [{}]", leaders.join(", "))
            }
        }
    }
}
