//! Randomized depth-first maze explorer.
//!
//! ```text
//!            unexplored exit found: move, map, infer
//!              ┌──────────┐
//!              ▼          │
//!   Idle ──► Exploring ───┘
//!              │    ▲
//!   dead end   │    │ route to nearest frontier walked
//!              ▼    │
//!           Backtracking ──► Done   (no frontier reachable)
//!              ▲    │
//!              └────┘  inferred edge on the route refused: block it, replan
//! ```

use std::collections::HashSet;

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::core::{Direction, ExitState, GridCoord, RoomId};
use crate::error::{MazeError, Result, Violation};
use crate::map::{MapSnapshot, MapStore};
use crate::query::{find_frontier, shortest_path, to_directions};

use super::config::ExplorerConfig;
use super::path::TraversalPath;
use super::source::{Arrival, Mover, RoomProvider};
use super::state::{ExplorationProgress, ExplorationState};

/// Maze explorer.
///
/// Owns the map it builds. Drive it to completion with [`Explorer::explore`],
/// or one transition at a time with [`Explorer::begin`] and
/// [`Explorer::step`].
pub struct Explorer {
    config: ExplorerConfig,
    /// Current state
    state: ExplorationState,
    /// Everything discovered so far
    map: MapStore,
    /// Every successful move
    path: TraversalPath,
    /// Room the player is in
    current: Option<RoomId>,
    /// Room exploration started from, placed at (0, 0)
    origin: Option<RoomId>,
    /// Rooms found with no unexplored exit left
    finished: HashSet<RoomId>,
    rng: StdRng,
    steps: usize,
    blocked_exits: usize,
    shortcuts_inferred: usize,
    backtracks: usize,
}

impl Explorer {
    /// Create a new explorer with configuration.
    pub fn new(config: ExplorerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            state: ExplorationState::Idle,
            map: MapStore::new(),
            path: TraversalPath::new(),
            current: None,
            origin: None,
            finished: HashSet::new(),
            rng,
            steps: 0,
            blocked_exits: 0,
            shortcuts_inferred: 0,
            backtracks: 0,
        }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::new(ExplorerConfig::default())
    }

    /// Get current state
    pub fn state(&self) -> ExplorationState {
        self.state
    }

    /// Get configuration
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// The map built so far.
    pub fn map(&self) -> &MapStore {
        &self.map
    }

    /// Moves taken so far.
    pub fn path(&self) -> &TraversalPath {
        &self.path
    }

    /// Room the player is believed to be in.
    pub fn current_room(&self) -> Option<RoomId> {
        self.current
    }

    /// Room placed at the origin.
    pub fn origin(&self) -> Option<RoomId> {
        self.origin
    }

    /// Get exploration progress
    pub fn progress(&self) -> ExplorationProgress {
        ExplorationProgress {
            state: self.state.name().to_string(),
            rooms_known: self.map.len(),
            rooms_finished: self.finished.len(),
            moves: self.path.len(),
            blocked_exits: self.blocked_exits,
            shortcuts_inferred: self.shortcuts_inferred,
            backtracks: self.backtracks,
            steps: self.steps,
        }
    }

    /// Read-only copy of the map for diagnostics.
    pub fn map_snapshot(&self) -> MapSnapshot {
        self.map.snapshot()
    }

    /// Explore every room reachable from the player's position.
    ///
    /// Returns the full list of moves taken once no frontier remains.
    pub fn explore<P>(&mut self, player: &mut P) -> Result<TraversalPath>
    where
        P: Mover + RoomProvider,
    {
        self.begin(player)?;
        while !self.state.is_terminal() {
            self.step(player)?;
        }
        Ok(self.path.clone())
    }

    /// Register the starting room at the origin and enter `Exploring`.
    ///
    /// Does nothing once exploration has started.
    pub fn begin<P>(&mut self, player: &mut P) -> Result<()>
    where
        P: Mover + RoomProvider,
    {
        if self.state != ExplorationState::Idle {
            return Ok(());
        }

        let start = player.current_room();
        let exits = player.exits(start)?;
        self.map.register_room(start, exits);
        self.map.place(start, GridCoord::ORIGIN)?;

        self.current = Some(start);
        self.origin = Some(start);
        self.state = ExplorationState::Exploring;
        info!(
            "Exploration started in room {} with {} exits",
            start,
            self.map.exits_of(start)?.len()
        );
        Ok(())
    }

    /// Run one state machine transition.
    pub fn step<P>(&mut self, player: &mut P) -> Result<ExplorationState>
    where
        P: Mover + RoomProvider,
    {
        if self.state == ExplorationState::Idle {
            return Err(MazeError::NotStarted);
        }
        if !self.state.is_active() {
            return Ok(self.state);
        }

        self.steps += 1;
        if self.steps > self.config.max_steps {
            return Err(MazeError::StepLimitExceeded {
                limit: self.config.max_steps,
            });
        }

        match self.state {
            ExplorationState::Exploring => self.explore_step(player)?,
            ExplorationState::Backtracking => self.backtrack_step(player)?,
            ExplorationState::Idle | ExplorationState::Done => {}
        }
        Ok(self.state)
    }

    /// Shortest known route from the current room to `target`.
    pub fn path_to(&self, target: RoomId) -> Result<Vec<Direction>> {
        let from = self.current.ok_or(MazeError::NotStarted)?;
        let route =
            shortest_path(&self.map, from, target)?.ok_or(MazeError::NotFound { from, to: target })?;
        to_directions(&self.map, &route)
    }

    /// Try one unexplored exit of the current room, or give up on the room.
    fn explore_step<P>(&mut self, player: &mut P) -> Result<()>
    where
        P: Mover + RoomProvider,
    {
        let current = self.current.ok_or(MazeError::NotStarted)?;

        let Some(direction) = self.pick_unexplored(current)? else {
            self.finished.insert(current);
            debug!("Room {} fully explored, backtracking", current);
            self.state = ExplorationState::Backtracking;
            return Ok(());
        };

        match player.travel(direction) {
            Ok(arrival) => self.record_move(player, current, direction, arrival),
            Err(MazeError::BlockedExit { .. }) => {
                warn!("Exit {} of room {} is blocked, skipping it", direction, current);
                self.map.mark_blocked(current, direction)?;
                self.blocked_exits += 1;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// First `Unknown` exit in this step's (possibly shuffled) direction order.
    fn pick_unexplored(&mut self, room: RoomId) -> Result<Option<Direction>> {
        let mut order = Direction::ALL;
        if self.config.shuffle_directions {
            order.shuffle(&mut self.rng);
        }
        let exits = self.map.exits_of(room)?;
        Ok(order
            .into_iter()
            .find(|dir| exits.get(dir).is_some_and(ExitState::is_unknown)))
    }

    /// Map the room just entered through an unexplored exit.
    ///
    /// The provider is asked for the exits of each room the first time it is
    /// entered.
    fn record_move<P: RoomProvider>(
        &mut self,
        player: &P,
        from: RoomId,
        direction: Direction,
        arrival: Arrival,
    ) -> Result<()> {
        let room = arrival.room;
        self.path.push(direction);
        if !self.map.contains(room) {
            let mut exits = player.exits(room)?;
            exits.sort();
            let mut advertised = arrival.exits;
            advertised.sort();
            if advertised != exits {
                warn!(
                    "Room {} advertised exits {:?} on arrival, provider reports {:?}",
                    room, advertised, exits
                );
            }
            self.map.register_room(room, exits);
        }
        self.map.connect(from, room, direction)?;

        let coord = self
            .map
            .coordinate_of(from)?
            .ok_or(Violation::UnplacedRoom(from))?
            .step(direction);
        let shortcuts = self.map.place(room, coord)?;
        self.shortcuts_inferred += shortcuts.len();
        self.current = Some(room);

        debug!(
            "Moved {} from {} to {} at {} ({} shortcuts)",
            direction,
            from,
            room,
            coord,
            shortcuts.len()
        );
        Ok(())
    }

    /// Walk to the nearest frontier, or finish if there is none.
    ///
    /// If the mover refuses an inferred edge on the way, that edge is blocked
    /// on both sides and the next step plans a new route from wherever the
    /// player stopped.
    fn backtrack_step<P: Mover>(&mut self, player: &mut P) -> Result<()> {
        let current = self.current.ok_or(MazeError::NotStarted)?;

        let Some(route) = find_frontier(&self.map, current)? else {
            self.state = ExplorationState::Done;
            info!(
                "Exploration complete: {} rooms, {} moves, {} shortcuts, {} blocked exits",
                self.map.len(),
                self.path.len(),
                self.shortcuts_inferred,
                self.blocked_exits
            );
            return Ok(());
        };

        let moves = to_directions(&self.map, &route)?;
        let frontier = route[route.len() - 1];
        let distance = self
            .map
            .coordinate_of(current)?
            .zip(self.map.coordinate_of(frontier)?)
            .map_or(0, |(a, b)| a.manhattan_distance(&b));
        self.backtracks += 1;
        debug!(
            "Backtracking {} moves from {} to frontier {} ({} cells away)",
            moves.len(),
            current,
            frontier,
            distance
        );

        let mut here = current;
        for (direction, &expected) in moves.into_iter().zip(route.iter().skip(1)) {
            let inferred = self
                .map
                .exits_of(here)?
                .get(&direction)
                .is_some_and(ExitState::is_inferred);

            let arrival = match player.travel(direction) {
                Ok(arrival) => arrival,
                Err(MazeError::BlockedExit { .. }) if inferred => {
                    let neighbor = self.map.sever(here, direction)?;
                    self.blocked_exits += 1;
                    warn!(
                        "Inferred edge {} -{}-> {} is blocked, replanning",
                        here, direction, neighbor
                    );
                    return Ok(());
                }
                Err(e) => return Err(e),
            };
            if arrival.room != expected {
                return Err(Violation::UnexpectedArrival {
                    expected,
                    actual: arrival.room,
                }
                .into());
            }
            if inferred {
                self.map.connect(here, arrival.room, direction)?;
            }
            self.path.push(direction);
            here = arrival.room;
            self.current = Some(here);
        }

        self.state = ExplorationState::Exploring;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{MazeBuilder, SimulatedMaze};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use Direction::*;

    /// 0 -e- 1 -e- 2
    fn corridor() -> SimulatedMaze {
        MazeBuilder::new()
            .room(0, (0, 0))
            .room(1, (1, 0))
            .room(2, (2, 0))
            .link(0, East, 1)
            .link(1, East, 2)
            .start(1)
            .build()
            .unwrap()
    }

    #[test]
    fn test_step_before_begin_fails() {
        let mut maze = corridor();
        let mut explorer = Explorer::with_defaults();
        assert_eq!(explorer.step(&mut maze).unwrap_err(), MazeError::NotStarted);
        assert_eq!(explorer.path_to(RoomId(0)).unwrap_err(), MazeError::NotStarted);
    }

    #[test]
    fn test_deterministic_corridor() {
        let mut maze = corridor();
        let mut explorer = Explorer::new(ExplorerConfig::deterministic());

        let path = explorer.explore(&mut maze).unwrap();
        // East first (no north/south), dead end, back west twice
        assert_eq!(path.as_slice(), &[East, West, West]);
        assert_eq!(explorer.state(), ExplorationState::Done);
        assert_eq!(explorer.origin(), Some(RoomId(1)));
        assert_eq!(explorer.current_room(), Some(RoomId(0)));
        assert_eq!(
            explorer.map().coordinate_of(RoomId(0)).unwrap(),
            Some(GridCoord::new(-1, 0))
        );
    }

    #[test]
    fn test_step_by_step() {
        let mut maze = corridor();
        let mut explorer = Explorer::new(ExplorerConfig::deterministic());
        explorer.begin(&mut maze).unwrap();
        assert_eq!(explorer.state(), ExplorationState::Exploring);

        // move east into room 2
        assert_eq!(explorer.step(&mut maze).unwrap(), ExplorationState::Exploring);
        assert_eq!(explorer.current_room(), Some(RoomId(2)));
        // room 2 is a dead end
        assert_eq!(
            explorer.step(&mut maze).unwrap(),
            ExplorationState::Backtracking
        );
        // route back to room 1, which still has its west exit open
        assert_eq!(explorer.step(&mut maze).unwrap(), ExplorationState::Exploring);
        assert_eq!(explorer.current_room(), Some(RoomId(1)));

        let progress = explorer.progress();
        assert_eq!(progress.moves, 2);
        assert_eq!(progress.backtracks, 1);
        assert_eq!(progress.rooms_finished, 1);
        assert_eq!(progress.steps, 3);
    }

    #[test]
    fn test_path_to_after_exploration() {
        let mut maze = corridor();
        let mut explorer = Explorer::new(ExplorerConfig::seeded(3));
        explorer.explore(&mut maze).unwrap();

        // Exploration ends at whichever end of the corridor was visited last
        let here = explorer.current_room().unwrap();
        assert!(explorer.path_to(here).unwrap().is_empty());
        let (other_end, heading) = if here == RoomId(0) {
            (RoomId(2), East)
        } else {
            (RoomId(0), West)
        };
        assert_eq!(explorer.path_to(other_end).unwrap(), vec![heading, heading]);
        assert_eq!(explorer.path_to(RoomId(1)).unwrap(), vec![heading]);
    }

    #[test]
    fn test_path_to_unknown_room() {
        let mut maze = corridor();
        let mut explorer = Explorer::new(ExplorerConfig::deterministic());
        explorer.explore(&mut maze).unwrap();
        assert_eq!(
            explorer.path_to(RoomId(42)).unwrap_err(),
            MazeError::MissingRoom(RoomId(42))
        );
    }

    #[test]
    fn test_step_limit() {
        let mut maze = corridor();
        let mut explorer = Explorer::new(ExplorerConfig::deterministic().with_max_steps(2));
        assert_eq!(
            explorer.explore(&mut maze).unwrap_err(),
            MazeError::StepLimitExceeded { limit: 2 }
        );
    }

    #[test]
    fn test_begin_is_idempotent() {
        let mut maze = corridor();
        let mut explorer = Explorer::new(ExplorerConfig::deterministic());
        explorer.begin(&mut maze).unwrap();
        explorer.step(&mut maze).unwrap();
        explorer.begin(&mut maze).unwrap();
        assert_eq!(explorer.current_room(), Some(RoomId(2)));
    }

    /// Walks a simulated maze and counts provider queries per room.
    struct CountingPlayer {
        maze: SimulatedMaze,
        asked: RefCell<HashMap<RoomId, usize>>,
    }

    impl RoomProvider for CountingPlayer {
        fn exits(&self, room: RoomId) -> Result<Vec<Direction>> {
            *self.asked.borrow_mut().entry(room).or_default() += 1;
            self.maze.exits(room)
        }
    }

    impl Mover for CountingPlayer {
        fn current_room(&self) -> RoomId {
            self.maze.current_room()
        }

        fn travel(&mut self, direction: Direction) -> Result<Arrival> {
            self.maze.travel(direction)
        }
    }

    #[test]
    fn test_provider_asked_once_per_room() {
        let mut player = CountingPlayer {
            maze: SimulatedMaze::grid(3, 3, RoomId(0)).unwrap(),
            asked: RefCell::new(HashMap::new()),
        };
        let mut explorer = Explorer::new(ExplorerConfig::seeded(11));
        explorer.explore(&mut player).unwrap();

        let asked = player.asked.borrow();
        assert_eq!(asked.len(), 9);
        assert!(asked.values().all(|&count| count == 1));
    }

    /// ```text
    ///   2 ── 1
    ///   │    │
    ///   3 ╳  0      3.e and 0.w are advertised but refused
    ///        │
    ///        4
    /// ```
    fn refused_shortcut() -> SimulatedMaze {
        MazeBuilder::new()
            .room(0, (0, 0))
            .room(1, (0, 1))
            .room(2, (-1, 1))
            .room(3, (-1, 0))
            .room(4, (0, -1))
            .link(0, North, 1)
            .link(1, West, 2)
            .link(2, South, 3)
            .link(0, South, 4)
            .blocked(0, West)
            .blocked(3, East)
            .build()
            .unwrap()
    }

    #[test]
    fn test_refused_inferred_edge_is_blocked_and_replanned() {
        let mut maze = refused_shortcut();
        let mut explorer = Explorer::new(ExplorerConfig::deterministic());
        explorer.begin(&mut maze).unwrap();

        // North, west, south: room 3 lands east of room 0's coordinate
        for _ in 0..3 {
            explorer.step(&mut maze).unwrap();
        }
        assert_eq!(explorer.current_room(), Some(RoomId(3)));
        assert_eq!(
            explorer.map().exits_of(RoomId(3)).unwrap()[&East],
            ExitState::Inferred(RoomId(0))
        );

        // Dead end, then the one-hop route to room 0 is refused
        assert_eq!(
            explorer.step(&mut maze).unwrap(),
            ExplorationState::Backtracking
        );
        assert_eq!(
            explorer.step(&mut maze).unwrap(),
            ExplorationState::Backtracking
        );
        assert_eq!(explorer.current_room(), Some(RoomId(3)));
        assert_eq!(explorer.map().exits_of(RoomId(3)).unwrap()[&East], ExitState::Blocked);
        assert_eq!(explorer.map().exits_of(RoomId(0)).unwrap()[&West], ExitState::Blocked);

        // The long way round
        assert_eq!(explorer.step(&mut maze).unwrap(), ExplorationState::Exploring);
        assert_eq!(explorer.current_room(), Some(RoomId(0)));

        while !explorer.state().is_terminal() {
            explorer.step(&mut maze).unwrap();
        }
        assert_eq!(
            explorer.path().as_slice(),
            &[North, West, South, North, East, South, South]
        );
        assert_eq!(maze.refused_moves(), 1);
        assert_eq!(explorer.progress().blocked_exits, 1);
        assert_eq!(explorer.map().len(), 5);
    }

    #[test]
    fn test_walked_inferred_edge_becomes_concrete() {
        //   1 ── 2
        //   │    │
        //   0 ┄┄ 3      0.e and 3.w are only inferred until walked
        //   │
        //   4 (west of 0)
        let mut maze = MazeBuilder::new()
            .room(0, (0, 0))
            .room(1, (0, 1))
            .room(2, (1, 1))
            .room(3, (1, 0))
            .room(4, (-1, 0))
            .link(0, North, 1)
            .link(1, East, 2)
            .link(2, South, 3)
            .link(3, West, 0)
            .link(0, West, 4)
            .build()
            .unwrap();
        let mut explorer = Explorer::new(ExplorerConfig::deterministic());
        let path = explorer.explore(&mut maze).unwrap();

        assert_eq!(path.as_slice(), &[North, East, South, West, West]);
        assert_eq!(
            explorer.map().exits_of(RoomId(3)).unwrap()[&West],
            ExitState::Room(RoomId(0))
        );
        assert_eq!(
            explorer.map().exits_of(RoomId(0)).unwrap()[&East],
            ExitState::Room(RoomId(3))
        );
        assert_eq!(explorer.progress().shortcuts_inferred, 1);
        assert_eq!(explorer.progress().blocked_exits, 0);
    }
}
