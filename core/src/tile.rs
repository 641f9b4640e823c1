/// Canonical player-visible state stored by the gameplay engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EngineCell {
    #[default]
    Hidden,
    Flagged,
    Revealed(u8),
}

impl EngineCell {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }

    /// Glyph used by the console board, before any game-over mine overlay.
    pub const fn glyph(self) -> char {
        match self {
            Self::Hidden => '.',
            Self::Flagged => 'F',
            Self::Revealed(0) => ' ',
            Self::Revealed(count) => (b'0' + count) as char,
        }
    }
}
