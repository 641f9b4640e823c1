use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniformly random placement by rejection sampling: draw a cell, retry if it already holds a mine.
#[derive(Clone, Debug)]
pub struct RandomMinefieldGenerator<R = SmallRng> {
    rng: R,
}

impl RandomMinefieldGenerator<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        log::debug!("minefield seed: {seed}");
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomMinefieldGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MinefieldGenerator for RandomMinefieldGenerator<R> {
    fn generate(mut self, config: GameConfig) -> Result<MineLayout> {
        let config = config.validate().inspect_err(|err| {
            log::warn!("Refusing to generate minefield: {err}");
        })?;
        let (rows, cols) = config.size;

        let mut mines: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut mines_placed = 0;
        while mines_placed < config.mines {
            let coords = (
                self.rng.random_range(0..rows),
                self.rng.random_range(0..cols),
            );
            let cell = &mut mines[coords.to_nd_index()];
            if !*cell {
                *cell = true;
                mines_placed += 1;
            }
        }

        log::debug!("Generated {rows}x{cols} minefield with {mines_placed} mines");
        MineLayout::from_mine_mask(mines)
    }
}
