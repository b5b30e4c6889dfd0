//! Spawner module - current/next piece sequencing
//!
//! Pieces are drawn uniformly and independently from the seven kinds using a
//! seeded RNG, so the same seed always produces the same game. There is no
//! bag: streaks of the same kind are possible. A fixed sequence can be
//! supplied instead (puzzle boards, tests); it is cycled in order.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ConfigError;
use crate::types::PieceKind;

/// Where new kinds come from
#[derive(Debug, Clone)]
enum Source {
    Uniform(StdRng),
    Fixed { pieces: Vec<PieceKind>, cursor: usize },
}

impl Source {
    fn draw(&mut self) -> PieceKind {
        match self {
            Source::Uniform(rng) => PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())],
            Source::Fixed { pieces, cursor } => {
                let kind = pieces[*cursor % pieces.len()];
                *cursor = (*cursor + 1) % pieces.len();
                kind
            }
        }
    }
}

/// Current/next piece lookahead
#[derive(Debug, Clone)]
pub struct Spawner {
    source: Source,
    current: PieceKind,
    next: PieceKind,
}

impl Spawner {
    /// Uniform random draws from `seed`
    pub fn new(seed: u64) -> Self {
        Self::from_source(Source::Uniform(StdRng::seed_from_u64(seed)))
    }

    /// Cycle through `pieces` in order
    pub fn fixed(pieces: &[PieceKind]) -> Result<Self, ConfigError> {
        if pieces.is_empty() {
            return Err(ConfigError::EmptySequence);
        }
        Ok(Self::from_source(Source::Fixed {
            pieces: pieces.to_vec(),
            cursor: 0,
        }))
    }

    fn from_source(mut source: Source) -> Self {
        let current = source.draw();
        let next = source.draw();
        Self {
            source,
            current,
            next,
        }
    }

    pub fn current(&self) -> PieceKind {
        self.current
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }

    /// Shift next into current and draw a new next
    pub fn advance(&mut self) -> (PieceKind, PieceKind) {
        self.current = self.next;
        self.next = self.source.draw();
        (self.current, self.next)
    }
}
