pub mod puzzle;

pub use puzzle::{
    // Grid types
    Cell, Grid, Position,
    // Placement directions
    Direction,
    // Word list and lifecycle
    GameStatus, Word, WordEntry,
};
