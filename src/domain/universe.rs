use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;
use rayon::prelude::*;

use super::{Cell, EdgePolicy};
use crate::error::LifeError;

/// Grid size above which the row-parallel tick pays for itself.
/// Below this the rayon fork/join overhead dominates.
pub const PARALLEL_THRESHOLD: usize = 100 * 100;

static NEXT_UNIVERSE_ID: AtomicU64 = AtomicU64::new(0);

/// Universe manages the 2D cellular automaton grid.
///
/// Dimensions are fixed for the lifetime of an instance; resizing means
/// constructing a new Universe. The cell buffer is exclusively owned here
/// and mutated only by `tick`/`tick_parallel`. Readers borrow it through
/// [`cells`](Universe::cells), which the borrow checker keeps from
/// outliving the next tick.
#[derive(Debug)]
pub struct Universe {
    id: u64,
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    /// Second buffer for double-buffered evolution: neighbor counts are
    /// always taken from `cells` while the next generation is written
    /// here, then the two are swapped.
    scratch: Vec<Cell>,
    edge_policy: EdgePolicy,
    generation: u64,
}

impl Universe {
    /// Create a new universe, seeding each cell from `seed(x, y)`.
    /// Fails with `InvalidDimensions` before any allocation if either
    /// dimension is zero.
    pub fn new(
        width: usize,
        height: usize,
        mut seed: impl FnMut(usize, usize) -> Cell,
    ) -> Result<Self, LifeError> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimensions { width, height });
        }

        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| seed(x, y))
            .collect();

        Ok(Self {
            id: NEXT_UNIVERSE_ID.fetch_add(1, Ordering::Relaxed),
            width,
            height,
            cells,
            scratch: vec![Cell::Dead; width * height],
            edge_policy: EdgePolicy::default(),
            generation: 0,
        })
    }

    /// Create a universe with roughly 30% of cells alive.
    pub fn random(width: usize, height: usize) -> Result<Self, LifeError> {
        let mut rng = rand::rng();
        Self::new(width, height, move |_, _| {
            if rng.random_bool(0.3) {
                Cell::Alive
            } else {
                Cell::Dead
            }
        })
    }

    /// Set the edge policy (builder pattern)
    pub fn with_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    /// Identity token for this instance. Replacing a universe wholesale
    /// yields a new token, which is how the frame scheduler detects a
    /// reset without holding a reference across frames.
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of generations elapsed since creation
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    /// The cell buffer view: a read-only borrow of the live buffer,
    /// length `width * height`, row-major, one byte per cell. Valid until
    /// the next `tick`; re-acquire every frame rather than caching.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell state at (x, y), or None outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    /// Advance one generation (serial).
    ///
    /// Neighbor counts are computed entirely from the pre-tick buffer and
    /// the result written into the scratch buffer, so a cell never sees a
    /// half-updated generation. The buffers swap at the end, which is the
    /// only point the visible state changes.
    pub fn tick(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let neighbors = live_neighbors(
                    &self.cells,
                    self.width,
                    self.height,
                    self.edge_policy,
                    x,
                    y,
                );
                self.scratch[idx] = self.cells[idx].next_state(neighbors);
            }
        }

        self.finish_generation();
    }

    /// Advance one generation using rayon, one row per work item.
    /// Produces exactly the same result as `tick`; worth it for grids
    /// larger than roughly 100x100.
    pub fn tick_parallel(&mut self) {
        let (width, height, edge_policy) = (self.width, self.height, self.edge_policy);
        let cells = &self.cells;

        self.scratch
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, slot) in row.iter_mut().enumerate() {
                    let neighbors = live_neighbors(cells, width, height, edge_policy, x, y);
                    *slot = cells[y * width + x].next_state(neighbors);
                }
            });

        self.finish_generation();
    }

    fn finish_generation(&mut self) {
        std::mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;
    }
}

/// Count live neighbors of (x, y) in a row-major buffer, honoring the
/// edge policy. Free function so the parallel tick can call it while the
/// scratch buffer is mutably borrowed.
fn live_neighbors(
    cells: &[Cell],
    width: usize,
    height: usize,
    edge_policy: EdgePolicy,
    x: usize,
    y: usize,
) -> u8 {
    let (w, h) = (width as i32, height as i32);

    (-1..=1)
        .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
        .filter(|&(dx, dy)| dx != 0 || dy != 0)
        .filter_map(|(dx, dy)| {
            let (nx, ny) = (x as i32 + dx, y as i32 + dy);
            match edge_policy {
                EdgePolicy::Wraparound => {
                    Some((nx.rem_euclid(w) as usize, ny.rem_euclid(h) as usize))
                }
                EdgePolicy::Bounded => (nx >= 0 && ny >= 0 && nx < w && ny < h)
                    .then_some((nx as usize, ny as usize)),
            }
        })
        .filter(|&(nx, ny)| cells[ny * width + nx].is_alive())
        .count() as u8
}
