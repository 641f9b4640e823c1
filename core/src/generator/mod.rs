use crate::*;
pub use random::*;

mod random;

pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout>;
}

/// Replays a known layout, for deterministic games.
impl MinefieldGenerator for MineLayout {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        if self.game_config() != config {
            log::warn!(
                "Fixed layout {:?} does not match requested {:?}",
                self.game_config(),
                config
            );
        }
        Ok(self)
    }
}
