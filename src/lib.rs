#![warn(missing_docs)]

//! # Word hunts
//!
//! A crate that generates word hunt grids and plays them. Words are hidden as bending paths of orthogonally
//! adjacent cells rather than straight lines, and the player finds them by dragging across the grid.
//!
//! ```
//! use word_hunt::{LevelData, MatchResult, PuzzleConfig, WordHunt};
//!
//! let mut hunt = WordHunt::new(PuzzleConfig::with_size(6, 6).seeded(7)).unwrap();
//! hunt.setup(LevelData::new("The cat sat.", &["cat"]));
//!
//! let path = hunt.placed_words().next().unwrap().path().to_vec();
//! hunt.press(path[0].x as i32, path[0].y as i32).unwrap();
//! for cell in &path[1..] {
//!     hunt.enter(cell.x as i32, cell.y as i32).unwrap();
//! }
//!
//! assert!(matches!(hunt.release().unwrap(), Some(MatchResult::Found { completed: true, .. })));
//! ```

pub mod config;
pub mod coord;
pub mod events;
pub mod grid;
pub mod hint;
pub mod level;
pub mod log;
pub mod placement;
pub mod puzzle;
pub mod registry;
pub mod selection;
pub mod shuffle;
pub mod validator;

pub use config::{PuzzleConfig, Rgb, CYRILLIC_ALPHABET, LATIN_ALPHABET};
pub use coord::{Coord, Direction};
pub use events::{ObserverId, PuzzleEvent, PuzzleObserver};
pub use grid::Grid;
pub use hint::LevelHint;
pub use level::LevelData;
pub use placement::{Placement, PlacementEngine};
pub use puzzle::WordHunt;
pub use registry::{PlacedWord, WordRegistry};
pub use selection::{SelectionChange, SelectionController, SelectionState};
pub use shuffle::RandomOrder;
pub use validator::{MatchResult, WordValidator};

/// An error from configuring a word hunt, loading a level, or an interaction event that was rejected.
///
/// A word that could not be placed is not an error; it is listed by [WordHunt::omitted_words].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The grid must have at least one row and one column.
    #[error("grid dimensions {width} columns x {height} rows must both be non-zero")]
    InvalidDimensions {
        /// The configured number of columns.
        width: usize,

        /// The configured number of rows.
        height: usize,
    },

    /// The filler alphabet has no letters.
    #[error("the filler alphabet is empty")]
    EmptyAlphabet,

    /// The highlight palette has no colours.
    #[error("the highlight palette is empty")]
    EmptyPalette,

    /// A colour string was not of the form `#rrggbb`.
    #[error("invalid colour {0:?}, expected #rrggbb")]
    InvalidColor(String),

    /// An interaction event named a cell outside the grid.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    InvalidCoordinate {
        /// The event's column.
        x: i32,

        /// The event's row.
        y: i32,

        /// The number of columns.
        width: usize,

        /// The number of rows.
        height: usize,
    },

    /// An interaction event arrived before a level was set up.
    #[error("no level is set up yet")]
    NotReady,

    /// A level file could not be read.
    #[error("could not read level: {0}")]
    Io(#[from] std::io::Error),

    /// A level file was not valid level JSON.
    #[error("could not parse level: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
