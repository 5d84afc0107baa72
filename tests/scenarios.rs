mod common;

use common::{count, drag, record};
use word_hunt::{
    coord::is_simple_path, Coord, LevelData, MatchResult, PuzzleConfig, PuzzleEvent, WordHunt,
};

#[test]
fn single_word_on_small_grid() {
    let mut hunt = WordHunt::new(PuzzleConfig::with_size(5, 5).seeded(2024)).unwrap();
    hunt.setup(LevelData::new("", &["cat"]));

    let placed: Vec<_> = hunt.placed_words().collect();
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].word(), "cat");

    let path = placed[0].path();
    assert_eq!(path.len(), 3);
    assert!(is_simple_path(path));

    let grid = hunt.grid().unwrap();
    assert_eq!(grid.spell(path).as_deref(), Some("cat"));

    let filler = grid.coords().filter(|cell| !path.contains(cell)).collect::<Vec<_>>();
    assert_eq!(filler.len(), 22);
    assert!(filler.iter().all(|&cell| grid.get(cell).is_some()));
}

#[test]
fn reversed_selection_finds_word() {
    let config = PuzzleConfig::with_size(5, 5).seeded(9).reversed(true);
    let mut hunt = WordHunt::new(config).unwrap();
    let events = record(&mut hunt);
    hunt.setup(LevelData::new("", &["sun"]));

    let placed = hunt.placed_words().next().unwrap().clone();
    assert!(placed.word() == "sun" || placed.word() == "nus");

    let mut path = placed.path().to_vec();
    if hunt.grid().unwrap().spell(&path).as_deref() != Some("nus") {
        path.reverse();
    }
    assert_eq!(hunt.grid().unwrap().spell(&path).as_deref(), Some("nus"));

    let result = drag(&mut hunt, &path);

    assert!(matches!(result, Some(MatchResult::Found { .. })));
    assert!(hunt.outstanding_words().is_empty());
    assert!(events.borrow().iter().any(|event| matches!(
        event,
        PuzzleEvent::FoundWord { path: found, .. } if *found == path
    )));
}

#[test]
fn completed_fires_once() {
    let mut hunt = WordHunt::new(PuzzleConfig::with_size(6, 4).seeded(77)).unwrap();
    let events = record(&mut hunt);
    hunt.setup(LevelData::new("", &["lamp"]));

    let path = hunt.placed_words().next().unwrap().path().to_vec();

    assert!(matches!(
        drag(&mut hunt, &path),
        Some(MatchResult::Found { completed: true, .. })
    ));
    assert!(matches!(
        drag(&mut hunt, &path),
        Some(MatchResult::Rejected { .. })
    ));

    assert_eq!(count(&events, |e| *e == PuzzleEvent::Completed), 1);
    assert_eq!(
        count(&events, |e| matches!(e, PuzzleEvent::FoundWord { .. })),
        1
    );
    assert!(hunt.is_completed());
}

#[test]
fn hovering_back_shrinks_selection() {
    let mut hunt = WordHunt::new(PuzzleConfig::with_size(5, 5).seeded(5)).unwrap();
    let events = record(&mut hunt);
    hunt.setup(LevelData::new("", &["cat"]));

    hunt.press(0, 0).unwrap();
    hunt.enter(1, 0).unwrap();
    hunt.enter(2, 0).unwrap();
    assert_eq!(hunt.selection().len(), 3);

    hunt.enter(1, 0).unwrap();

    assert_eq!(hunt.selection(), &[Coord::new(0, 0), Coord::new(1, 0)]);
    assert_eq!(
        count(&events, |e| matches!(e, PuzzleEvent::FoundWord { .. })),
        0
    );
}

#[test]
fn unplaceable_word_is_left_out() {
    let mut hunt = WordHunt::new(PuzzleConfig::with_size(3, 3).seeded(1)).unwrap();
    hunt.setup(LevelData::new("", &["encyclopedia"]));

    assert_eq!(hunt.placed_words().count(), 0);
    assert_eq!(hunt.omitted_words(), &["encyclopedia".to_string()]);
    assert!(hunt.grid().unwrap().is_filled());
}

#[test]
fn same_seed_same_puzzle() {
    let level = LevelData::new("", &["river", "stone", "moss", "fern"]);
    let config = PuzzleConfig::with_size(7, 7).seeded(123).reversed(true);

    let mut first = WordHunt::new(config.clone()).unwrap();
    let mut second = WordHunt::new(config).unwrap();
    first.setup(level.clone());
    second.setup(level.clone());

    assert_eq!(first.grid(), second.grid());
    assert_eq!(
        first.placed_words().collect::<Vec<_>>(),
        second.placed_words().collect::<Vec<_>>()
    );

    let grid = first.grid().cloned();
    first.setup(level);
    assert_eq!(first.grid().cloned(), grid);
}

#[test]
fn level_text_highlights_found_words() {
    let level = LevelData::from_json(
        r#"{
            "text": "Foxes run past the old oak.",
            "words": ["fox", "oak"],
            "highlighted_words": ["Foxes", "oak"]
        }"#,
    )
    .unwrap();

    let mut hunt = WordHunt::new(PuzzleConfig::with_size(6, 6).seeded(31)).unwrap();
    let events = record(&mut hunt);
    hunt.setup(level.clone());

    assert_eq!(events.borrow()[0], PuzzleEvent::LevelStarted(level));

    let fox = hunt
        .placed_words()
        .find(|placed| placed.word() == "fox")
        .unwrap()
        .path()
        .to_vec();
    drag(&mut hunt, &fox);

    let text = hunt.hint().unwrap().render(|word, color| format!("<{word}|{color}>"));
    assert_eq!(text, "<Foxes|0> run past the old oak.");
}

#[test]
fn unsubscribed_observer_hears_nothing() {
    let mut hunt = WordHunt::new(PuzzleConfig::with_size(4, 4).seeded(8)).unwrap();
    let events = record(&mut hunt);
    let listener: common::EventLog = Default::default();
    let sink = listener.clone();
    let id = hunt.subscribe(move |event: &PuzzleEvent| sink.borrow_mut().push(event.clone()));

    assert!(hunt.unsubscribe(id));
    hunt.setup(LevelData::new("", &["ok"]));

    assert!(listener.borrow().is_empty());
    assert_eq!(events.borrow().len(), 1);
}
