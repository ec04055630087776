use crate::algorithm::selection::generate_children;
use crate::algorithm::tiling::Tiling;
use crate::algorithm::tree::{NodeId, SearchTree};
use crate::io::error::{Result, TilingError, invariant_violation};
use crate::spatial::Tile;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, trace};

/// Search parameters controlling branching and input validation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Apply forced single-neighbour placements to every new child
    pub forced_moves: bool,
    /// Bias exploration order away from the grid centre
    pub center_bias: bool,
    /// Reject grids whose free area is odd at construction time
    pub require_even_area: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            forced_moves: true,
            center_bias: true,
            require_even_area: true,
        }
    }
}

/// Lifecycle of a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorStatus {
    /// Nothing emitted yet; the first step reports the starting tiling
    Pending,
    /// Walking the search tree
    Searching,
    /// A complete tiling was emitted
    Complete,
    /// The search was exhausted or aborted
    Failed,
}

/// Counters describing the work done by a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Calls to `advance` that produced a step
    pub steps: usize,
    /// Nodes whose children were generated
    pub expansions: usize,
    /// Moves from a node to one of its children
    pub descents: usize,
    /// Steps that moved the cursor back towards the root
    pub backtracks: usize,
    /// Ancestors skipped because the search had split their free region
    pub accelerated_backtracks: usize,
    /// Nodes discarded because a free region had an odd number of cells
    pub pruned: usize,
    /// Expanded nodes left with no viable child
    pub dead_ends: usize,
}

/// Outcome of one generator step
#[derive(Debug)]
pub enum StepResult {
    /// Partial tiling at the cursor after this step
    InProgress(Vec<Tile>),
    /// Complete tiling; the run is over
    Done(Vec<Tile>),
    /// No complete tiling is reachable; the run is over
    Failed(TilingError),
}

impl StepResult {
    /// Tiles emitted by this step, if any
    pub fn tiles(&self) -> Option<&[Tile]> {
        match self {
            Self::InProgress(tiles) | Self::Done(tiles) => Some(tiles),
            Self::Failed(_) => None,
        }
    }

    /// No further steps follow this one
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done(_) | Self::Failed(_))
    }
}

/// Resumable randomized backtracking search for a complete domino tiling
///
/// Each call to [`advance`](Self::advance) performs one transition of the
/// tree walk and reports the tiles at the cursor: either an expansion
/// followed by a descent into a random viable child, or a backtrack to the
/// nearest ancestor whose free region the search has not split. The caller
/// drives the loop and may drop the generator at any point.
///
/// Children with an odd free region are discarded as they are created. A
/// node counts as split when it has more free regions than the starting
/// tiling, so a prefilled grid that starts out in several pieces is not
/// abandoned for that alone.
#[derive(Debug)]
pub struct TilingGenerator<R = StdRng> {
    width: i32,
    height: i32,
    config: SearchConfig,
    tree: SearchTree,
    cursor: NodeId,
    root_regions: usize,
    rng: R,
    status: GeneratorStatus,
    stats: GenerationStats,
}

impl TilingGenerator<StdRng> {
    /// Create a generator with default configuration and a seeded RNG
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are negative, too large, or give an
    /// odd area.
    pub fn from_seed(width: i32, height: i32, seed: u64) -> Result<Self> {
        Self::new(width, height, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TilingGenerator<R> {
    /// Create a generator for an empty `width` x `height` grid
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are negative, too large, or give an
    /// odd area.
    pub fn new(width: i32, height: i32, rng: R) -> Result<Self> {
        Self::with_config(width, height, rng, SearchConfig::default())
    }

    /// Create a generator with explicit search parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are negative or too large, or if
    /// `require_even_area` is set and the area is odd.
    pub fn with_config(width: i32, height: i32, rng: R, config: SearchConfig) -> Result<Self> {
        Self::from_tiling(Tiling::empty(width, height)?, rng, config)
    }

    /// Resume the search from a partially tiled grid
    ///
    /// # Errors
    ///
    /// Returns `OddArea` if `require_even_area` is set and an odd number of
    /// cells remain free.
    pub fn from_tiling(root: Tiling, rng: R, config: SearchConfig) -> Result<Self> {
        let width = root.width();
        let height = root.height();
        if config.require_even_area && root.free_count() % 2 != 0 {
            return Err(TilingError::OddArea { width, height });
        }

        debug!(
            width,
            height,
            prefilled = root.tile_count(),
            forced_moves = config.forced_moves,
            "starting tiling search"
        );

        let root_regions = root.free_region_count();
        let tree = SearchTree::new(root);
        let cursor = tree.root();
        Ok(Self {
            width,
            height,
            config,
            tree,
            cursor,
            root_regions,
            rng,
            status: GeneratorStatus::Pending,
            stats: GenerationStats::default(),
        })
    }

    /// Grid width
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Grid height
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Search parameters of this run
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Current lifecycle state
    pub const fn status(&self) -> GeneratorStatus {
        self.status
    }

    /// Work counters so far
    pub const fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// The search tree built so far
    pub const fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// Node under the cursor
    pub const fn cursor(&self) -> NodeId {
        self.cursor
    }

    /// The run has emitted `Done` or `Failed`
    pub const fn is_finished(&self) -> bool {
        matches!(
            self.status,
            GeneratorStatus::Complete | GeneratorStatus::Failed
        )
    }

    /// Tiling under the cursor
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if the cursor does not point into the tree.
    pub fn current_tiling(&self) -> Result<&Tiling> {
        self.tree.tiling(self.cursor)
    }

    /// Perform one step of the search
    ///
    /// The first call reports the starting tiling. Afterwards every call
    /// either descends one level or backtracks, collapsing any chain of
    /// accelerated backtracks into the same step.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorFinished` once `Done` or `Failed` has been emitted,
    /// and `InvariantViolation` if the tree or a generated tiling is found
    /// inconsistent; the run is then aborted.
    pub fn advance(&mut self) -> Result<StepResult> {
        if self.is_finished() {
            return Err(TilingError::GeneratorFinished {
                width: self.width,
                height: self.height,
            });
        }

        let result = self.step();
        if result.is_err() {
            self.status = GeneratorStatus::Failed;
        }
        result
    }

    /// Advance until the run finishes
    ///
    /// # Errors
    ///
    /// Returns `SearchExhausted` if no complete tiling is reachable, or any
    /// error raised by [`advance`](Self::advance).
    pub fn run_to_completion(&mut self) -> Result<Vec<Tile>> {
        loop {
            match self.advance()? {
                StepResult::InProgress(_) => {}
                StepResult::Done(tiles) => return Ok(tiles),
                StepResult::Failed(error) => return Err(error),
            }
        }
    }

    fn step(&mut self) -> Result<StepResult> {
        self.stats.steps += 1;

        if self.status == GeneratorStatus::Pending {
            self.status = GeneratorStatus::Searching;
            return self.emit();
        }

        loop {
            let node = self.tree.get(self.cursor)?;
            if !node.is_viable() {
                return self.backtrack();
            }

            if !node.is_expanded() {
                if node.tiling().has_odd_region() {
                    self.stats.pruned += 1;
                    self.tree.mark_non_viable(self.cursor)?;
                    continue;
                }
                self.expand()?;
            }

            let viable = self.tree.viable_children(self.cursor)?;
            if viable.is_empty() {
                self.stats.dead_ends += 1;
                self.tree.mark_non_viable(self.cursor)?;
                continue;
            }

            let pick = self.rng.random_range(0..viable.len());
            self.cursor = viable.get(pick).copied().ok_or_else(|| {
                invariant_violation("descend", &format!("child index {pick} out of range"))
            })?;
            self.stats.descents += 1;
            return self.emit();
        }
    }

    fn expand(&mut self) -> Result<()> {
        let tiling = self.tree.tiling(self.cursor)?;
        let children = generate_children(tiling, &mut self.rng, &self.config)?;

        let mut pruned = 0;
        let ids = self.tree.expand(self.cursor, children, |child| {
            let odd = child.has_odd_region();
            if odd {
                pruned += 1;
            }
            !odd
        })?;

        self.stats.expansions += 1;
        self.stats.pruned += pruned;
        trace!(
            node = self.cursor.index(),
            children = ids.len(),
            pruned,
            "expanded node"
        );
        Ok(())
    }

    fn backtrack(&mut self) -> Result<StepResult> {
        self.stats.backtracks += 1;

        let mut cursor = self.cursor;
        loop {
            let Some(parent) = self.tree.parent(cursor)? else {
                self.status = GeneratorStatus::Failed;
                let error = TilingError::SearchExhausted {
                    width: self.width,
                    height: self.height,
                    steps: self.stats.steps,
                };
                debug!(%error, nodes = self.tree.len(), "search exhausted");
                return Ok(StepResult::Failed(error));
            };
            cursor = parent;

            if !self.is_split(cursor)? {
                break;
            }
            // Split by the search: this ancestor is abandoned as well
            self.tree.mark_non_viable(cursor)?;
            self.stats.accelerated_backtracks += 1;
        }

        trace!(from = self.cursor.index(), to = cursor.index(), "backtracked");
        self.cursor = cursor;
        self.emit()
    }

    fn is_split(&self, id: NodeId) -> Result<bool> {
        Ok(self.tree.tiling(id)?.free_region_count() > self.root_regions)
    }

    fn emit(&mut self) -> Result<StepResult> {
        let tiling = self.tree.tiling(self.cursor)?;
        let tiles = tiling.tiles().to_vec();

        if tiling.is_complete() {
            self.status = GeneratorStatus::Complete;
            debug!(
                width = self.width,
                height = self.height,
                steps = self.stats.steps,
                backtracks = self.stats.backtracks,
                nodes = self.tree.len(),
                "tiling complete"
            );
            return Ok(StepResult::Done(tiles));
        }

        Ok(StepResult::InProgress(tiles))
    }
}

impl<R: Rng> Iterator for TilingGenerator<R> {
    type Item = Result<StepResult>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            None
        } else {
            Some(self.advance())
        }
    }
}

/// Generate a complete tiling in one call
///
/// # Errors
///
/// Returns an error if the dimensions are invalid or the search fails.
pub fn build_complete_tiling(width: i32, height: i32, seed: u64) -> Result<Vec<Tile>> {
    TilingGenerator::from_seed(width, height, seed)?.run_to_completion()
}
