use shakmaty::Move;
use std::ops::Index;

// Legal chess positions never exceed 218 moves.
const MAX_MOVES: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

#[derive(Debug, Clone)]
pub struct MoveList {
    moves: Vec<ScoredMove>,
}

impl Default for MoveList {
    fn default() -> Self {
        Self {
            moves: Vec::with_capacity(MAX_MOVES),
        }
    }
}

impl MoveList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mv: Move, score: i32) {
        debug_assert!(
            self.moves.len() < MAX_MOVES,
            "MoveList overflow! Max moves: {MAX_MOVES}"
        );
        self.moves.push(ScoredMove { mv, score });
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredMove> {
        self.moves.iter()
    }

    /// Best first. The sort is stable, so equal scores keep the order in
    /// which they were pushed.
    pub fn sort_descending(&mut self) {
        self.moves.sort_by(|a, b| b.score.cmp(&a.score));
    }

    pub fn first(&self) -> Option<&ScoredMove> {
        self.moves.first()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a ScoredMove;
    type IntoIter = std::slice::Iter<'a, ScoredMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = ScoredMove;
    type IntoIter = std::vec::IntoIter<ScoredMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl Index<usize> for MoveList {
    type Output = ScoredMove;

    #[allow(clippy::indexing_slicing)]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}
