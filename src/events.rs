//! Events published by a [`WordHunt`](crate::WordHunt) and the observers that receive them.

use crate::{coord::Coord, level::LevelData};

/// Something that happened in a puzzle that renderers, audio or UI may want to react to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PuzzleEvent {
    /// A level was set up. Sent before the grid is generated.
    LevelStarted(LevelData),

    /// The player found a word.
    FoundWord {
        /// The word as it was placed.
        word: String,

        /// The selected cells, in the order the player selected them.
        path: Vec<Coord>,

        /// The palette index of the selection that found the word.
        color: usize,

        /// How many words were found before this one in the level. Useful for a cue that rises with each find.
        ordinal: usize,
    },

    /// The last outstanding word was found. Sent once per level.
    Completed,

    /// The level was torn down. Anything tied to its grid should be released.
    TornDown,
}

/// Receives [PuzzleEvent]s. Implemented for every `FnMut(&PuzzleEvent)`.
pub trait PuzzleObserver {
    /// Called once per event, in the order the events happen.
    fn notify(&mut self, event: &PuzzleEvent);
}

impl<F> PuzzleObserver for F
where
    F: FnMut(&PuzzleEvent),
{
    fn notify(&mut self, event: &PuzzleEvent) {
        self(event)
    }
}

/// Identifies a subscription, for unsubscribing later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// The list of subscribed observers.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    entries: Vec<(ObserverId, Box<dyn PuzzleObserver>)>,
}

impl Observers {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `observer` to the end of the list.
    pub fn subscribe(&mut self, observer: Box<dyn PuzzleObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));

        id
    }

    /// Removes the observer subscribed as `id`, handing it back.
    pub fn unsubscribe(&mut self, id: ObserverId) -> Option<Box<dyn PuzzleObserver>> {
        let index = self.entries.iter().position(|(entry, _)| *entry == id)?;

        Some(self.entries.remove(index).1)
    }

    /// The number of subscribed observers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sends `event` to every observer in subscription order.
    pub fn publish(&mut self, event: &PuzzleEvent) {
        for (_, observer) in &mut self.entries {
            observer.notify(event);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
