//! The puzzle context object tying generation, selection and validation together.

use log::{debug, info};

use crate::{
    config::{PuzzleConfig, Rgb},
    coord::Coord,
    events::{ObserverId, Observers, PuzzleEvent, PuzzleObserver},
    grid::Grid,
    hint::LevelHint,
    level::LevelData,
    placement::PlacementEngine,
    registry::{PlacedWord, WordRegistry},
    selection::{SelectionChange, SelectionController},
    shuffle::RandomOrder,
    validator::{MatchResult, WordValidator},
    Error, Result,
};

/// Everything that belongs to the level currently set up.
#[derive(Debug)]
struct ActiveLevel {
    grid: Grid,
    registry: WordRegistry,
    omitted: Vec<String>,
    hint: LevelHint,
}

/// A word hunt: owns the grid of the current level, the player's selection and the observers listening for finds.
///
/// Interaction events are only accepted between [WordHunt::setup] and [WordHunt::teardown]; before that they fail
/// with [Error::NotReady]. Events for cells outside the grid fail with [Error::InvalidCoordinate]. A failed event
/// changes nothing, so callers are free to ignore the error.
#[derive(Debug)]
pub struct WordHunt {
    config: PuzzleConfig,
    level: Option<ActiveLevel>,
    selection: SelectionController,
    validator: WordValidator,
    observers: Observers,
}

impl WordHunt {
    /// Creates a word hunt with no level set up, or returns an error if `config` can't be used to generate a grid.
    pub fn new(config: PuzzleConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            selection: SelectionController::new(config.palette.len()),
            config,
            level: None,
            validator: WordValidator::new(),
            observers: Observers::new(),
        })
    }

    /// The configuration this word hunt was created with.
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Subscribes `observer` to every event from now on.
    pub fn subscribe(&mut self, observer: impl PuzzleObserver + 'static) -> ObserverId {
        self.observers.subscribe(Box::new(observer))
    }

    /// Removes a subscription. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id).is_some()
    }

    /// Tears down any current level, then generates a grid for `level`.
    ///
    /// [PuzzleEvent::LevelStarted] is sent before the grid is generated. Words that can't be placed are left out;
    /// see [WordHunt::omitted_words].
    pub fn setup(&mut self, level: LevelData) {
        self.teardown();

        self.observers.publish(&PuzzleEvent::LevelStarted(level.clone()));

        let mut order = RandomOrder::new(self.config.seed);
        let placement = PlacementEngine::from_config(&self.config).place(&level.words, &mut order);

        info!(
            "set up a {}x{} grid with {} of {} words",
            self.config.width,
            self.config.height,
            placement.registry.outstanding().len(),
            level.words.len()
        );

        self.validator = WordValidator::new();
        self.level = Some(ActiveLevel {
            grid: placement.grid,
            registry: placement.registry,
            omitted: placement.omitted,
            hint: LevelHint::new(level),
        });
    }

    /// Discards the current level: its grid, words, hint and any selection in progress. Sends
    /// [PuzzleEvent::TornDown] and returns true if there was a level to discard.
    pub fn teardown(&mut self) -> bool {
        self.selection.cancel();

        if self.level.take().is_none() {
            return false;
        }

        debug!("tore down the current level");
        self.observers.publish(&PuzzleEvent::TornDown);

        true
    }

    /// Returns whether a level is set up and accepting interaction events.
    pub fn is_ready(&self) -> bool {
        self.level.is_some()
    }

    fn active(&self) -> Result<&ActiveLevel> {
        self.level.as_ref().ok_or(Error::NotReady)
    }

    fn cell(&self, x: i32, y: i32) -> Result<Coord> {
        let grid = &self.active()?.grid;

        grid.coord(x, y).ok_or(Error::InvalidCoordinate {
            x,
            y,
            width: grid.width(),
            height: grid.height(),
        })
    }

    /// The pointer went down on cell `(x, y)`.
    pub fn press(&mut self, x: i32, y: i32) -> Result<SelectionChange> {
        let cell = self.cell(x, y)?;

        Ok(self.selection.press(cell))
    }

    /// The pointer moved onto cell `(x, y)`.
    pub fn enter(&mut self, x: i32, y: i32) -> Result<SelectionChange> {
        let cell = self.cell(x, y)?;

        Ok(self.selection.enter(cell))
    }

    /// The pointer was released. The finished selection is validated and cleared whatever the outcome. Returns
    /// [`Option::None`] if no selection was in progress.
    pub fn release(&mut self) -> Result<Option<MatchResult>> {
        let level = self.level.as_mut().ok_or(Error::NotReady)?;

        let Some(path) = self.selection.release() else {
            return Ok(None);
        };

        let result = self
            .validator
            .validate(&path, &level.grid, &mut level.registry);

        if let MatchResult::Found {
            word,
            path,
            ordinal,
            completed,
        } = &result
        {
            level.hint.mark_found(word);

            self.observers.publish(&PuzzleEvent::FoundWord {
                word: word.clone(),
                path: path.clone(),
                color: self.selection.color().unwrap_or(0),
                ordinal: *ordinal,
            });

            if *completed {
                self.observers.publish(&PuzzleEvent::Completed);
            }
        }

        Ok(Some(result))
    }

    /// The grid of the current level.
    pub fn grid(&self) -> Option<&Grid> {
        self.level.as_ref().map(|level| &level.grid)
    }

    /// The letter at `(x, y)`, or [`Option::None`] if no level is set up or the cell is outside the grid.
    pub fn letter_at(&self, x: i32, y: i32) -> Option<char> {
        let grid = self.grid()?;

        grid.get(grid.coord(x, y)?)
    }

    /// Every word placed in the current level, with its path.
    pub fn placed_words(&self) -> impl Iterator<Item = &PlacedWord> {
        self.level.iter().flat_map(|level| level.registry.placed())
    }

    /// The words not found yet.
    pub fn outstanding_words(&self) -> &[PlacedWord] {
        self.level
            .as_ref()
            .map(|level| level.registry.outstanding())
            .unwrap_or_default()
    }

    /// The words found so far, in the order they were found.
    pub fn found_words(&self) -> &[PlacedWord] {
        self.level
            .as_ref()
            .map(|level| level.registry.found())
            .unwrap_or_default()
    }

    /// The words of the current level that could not be placed.
    pub fn omitted_words(&self) -> &[String] {
        self.level
            .as_ref()
            .map(|level| level.omitted.as_slice())
            .unwrap_or_default()
    }

    /// The selection in progress.
    pub fn selection(&self) -> &[Coord] {
        self.selection.path()
    }

    /// The palette colour at `index`.
    pub fn palette_color(&self, index: usize) -> Option<Rgb> {
        self.config.palette.get(index).copied()
    }

    /// Returns whether every placed word of the current level has been found.
    pub fn is_completed(&self) -> bool {
        self.is_ready() && self.validator.is_completed()
    }

    /// The level text tracker of the current level.
    pub fn hint(&self) -> Option<&LevelHint> {
        self.level.as_ref().map(|level| &level.hint)
    }

    /// The data of the current level.
    pub fn level(&self) -> Option<&LevelData> {
        self.hint().map(LevelHint::level)
    }
}
