use std::{cell::RefCell, rc::Rc};

use word_hunt::{Coord, MatchResult, PuzzleEvent, WordHunt};

pub type EventLog = Rc<RefCell<Vec<PuzzleEvent>>>;

/// Subscribes a recorder that keeps every event `hunt` publishes.
pub fn record(hunt: &mut WordHunt) -> EventLog {
    let events: EventLog = Rc::default();
    let sink = Rc::clone(&events);
    hunt.subscribe(move |event: &PuzzleEvent| sink.borrow_mut().push(event.clone()));

    events
}

/// Drags across `path`: press on the first cell, enter the rest, release.
pub fn drag(hunt: &mut WordHunt, path: &[Coord]) -> Option<MatchResult> {
    let (first, rest) = path.split_first()?;

    hunt.press(first.x as i32, first.y as i32).unwrap();
    for cell in rest {
        hunt.enter(cell.x as i32, cell.y as i32).unwrap();
    }

    hunt.release().unwrap()
}

pub fn count(events: &EventLog, wanted: fn(&PuzzleEvent) -> bool) -> usize {
    events.borrow().iter().filter(|event| wanted(event)).count()
}
