use std::{
    cell::RefCell,
    collections::HashMap,
    io::{self, BufRead},
    path::PathBuf,
    process::ExitCode,
    rc::Rc,
};

use clap::Parser;
use log::{error, info, warn};
use word_hunt::{
    Coord, LevelData, MatchResult, PuzzleConfig, PuzzleEvent, Rgb, WordHunt, CYRILLIC_ALPHABET,
    LATIN_ALPHABET,
};

/// Generate a word hunt and play it from the terminal.
///
/// Selections are read from stdin, one per line, as space separated `x,y` cells, for example `0,0 1,0 1,1`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON level file with `text`, `words` and `highlighted_words`.
    #[arg(long)]
    level: Option<PathBuf>,

    /// Comma separated words, used when no level file is given.
    #[arg(long, value_delimiter = ',', default_value = "nap,sleep,pillow,eggplant,sandwich,anklet,rats,skater")]
    words: Vec<String>,

    /// Number of columns.
    #[arg(long, default_value_t = 10)]
    width: usize,

    /// Number of rows.
    #[arg(long, default_value_t = 10)]
    height: usize,

    /// Seed for a reproducible grid.
    #[arg(long)]
    seed: Option<u64>,

    /// Allow words to be placed back to front.
    #[arg(long)]
    reversed: bool,

    /// Filler letters: `latin`, `cyrillic`, `words` (only letters found in the words), or the letters themselves.
    #[arg(long, default_value = "latin")]
    alphabet: String,

    /// Comma separated highlight colours such as `#f9c74f,#90be6d`.
    #[arg(long, value_delimiter = ',')]
    palette: Vec<Rgb>,

    /// Find every word automatically instead of reading selections.
    #[arg(long)]
    solve: bool,

    /// Log debug output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    word_hunt::log::init_logger(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> word_hunt::Result<()> {
    let level = match &args.level {
        Some(path) => LevelData::load(path)?,
        None => {
            let words: Vec<&str> = args.words.iter().map(String::as_str).collect();
            LevelData::new(String::new(), &words)
        }
    };

    let mut config = PuzzleConfig {
        seed: args.seed,
        allow_reversed: args.reversed,
        ..PuzzleConfig::with_size(args.width, args.height)
    };

    if !args.palette.is_empty() {
        config.palette = args.palette.clone();
    }

    let config = match args.alphabet.as_str() {
        "latin" => config.alphabet(LATIN_ALPHABET),
        "cyrillic" => config.alphabet(CYRILLIC_ALPHABET),
        "words" => config.alphabet_from_words(&level.words),
        letters => config.alphabet(letters),
    };

    let mut hunt = WordHunt::new(config)?;
    let found_cells: FoundCells = Rc::default();

    let cells = Rc::clone(&found_cells);
    hunt.subscribe(move |event: &PuzzleEvent| match event {
        PuzzleEvent::LevelStarted(level) if !level.text.is_empty() => println!("{}\n", level.text),
        PuzzleEvent::FoundWord {
            word,
            path,
            color,
            ordinal,
        } => {
            println!("found {} (#{})", word.to_uppercase(), ordinal + 1);
            cells
                .borrow_mut()
                .extend(path.iter().map(|&cell| (cell, *color)));
        }
        PuzzleEvent::Completed => println!("all words found!"),
        PuzzleEvent::TornDown => cells.borrow_mut().clear(),
        _ => {}
    });

    hunt.setup(level);

    for word in hunt.omitted_words() {
        warn!("{word:?} did not fit and was left out");
    }

    print_board(&hunt, &found_cells.borrow());

    if args.solve {
        solve(&mut hunt, &found_cells)?;
    } else {
        play(&mut hunt, &found_cells)?;
    }

    Ok(())
}

/// Palette index of the selection that found each cell.
type FoundCells = Rc<RefCell<HashMap<Coord, usize>>>;

fn print_board(hunt: &WordHunt, colors: &HashMap<Coord, usize>) {
    let Some(grid) = hunt.grid() else {
        return;
    };

    let words: Vec<&str> = hunt.outstanding_words().iter().map(|placed| placed.word()).collect();
    let (beside, below) = split_word_list(&words, grid.height());
    let mut beside = beside.iter();

    for y in 0..grid.height() {
        let mut line = String::new();

        for x in 0..grid.width() {
            let coord = Coord::new(x, y);
            let letter: String = grid.get(coord).map(|ch| ch.to_uppercase().collect()).unwrap_or_default();

            match colors.get(&coord).and_then(|&index| hunt.palette_color(index)) {
                Some(color) => line.push_str(&format!(
                    "\x1b[1;38;2;{};{};{}m{letter}\x1b[0m ",
                    color.0, color.1, color.2
                )),
                None => line.push_str(&format!("{letter} ")),
            }
        }

        println!("{line}| {}", beside.next().copied().unwrap_or(""));
    }

    if !below.is_empty() {
        println!("{}", below.join(", "));
    }

    println!();
}

/// Splits the word list into the words printed beside the grid, one per row, and the rest printed below it.
fn split_word_list<'a, 'w>(words: &'a [&'w str], rows: usize) -> (&'a [&'w str], &'a [&'w str]) {
    words.split_at(rows.min(words.len()))
}

fn print_hint(hunt: &WordHunt) {
    let Some(hint) = hunt.hint() else {
        return;
    };

    if hint.level().text.is_empty() {
        return;
    }

    let palette_len = hunt.config().palette.len();
    let text = hint.render(|word, index| match hunt.palette_color(index % palette_len) {
        Some(color) => format!("\x1b[1;38;2;{};{};{}m{word}\x1b[0m", color.0, color.1, color.2),
        None => word.to_uppercase(),
    });

    println!("{text}\n");
}

fn parse_selection(line: &str) -> Option<Vec<(i32, i32)>> {
    line.split_whitespace()
        .map(|cell| {
            let (x, y) = cell.split_once(',')?;
            Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
        })
        .collect()
}

fn select(hunt: &mut WordHunt, cells: &[(i32, i32)]) -> word_hunt::Result<Option<MatchResult>> {
    let Some((&(x, y), rest)) = cells.split_first() else {
        return Ok(None);
    };

    hunt.press(x, y)?;
    for &(x, y) in rest {
        if let Err(e) = hunt.enter(x, y) {
            warn!("{e}");
        }
    }

    hunt.release()
}

fn play(hunt: &mut WordHunt, found_cells: &FoundCells) -> word_hunt::Result<()> {
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line?;

        let Some(cells) = parse_selection(&line) else {
            warn!("expected cells like `0,0 1,0 1,1`, got {line:?}");
            continue;
        };

        match select(hunt, &cells) {
            Ok(Some(MatchResult::Found { .. })) => {
                print_board(hunt, &found_cells.borrow());
                print_hint(hunt);
            }
            Ok(Some(MatchResult::Rejected { candidate })) => info!("{candidate:?} is not hidden here"),
            Ok(None) => {}
            Err(e) => warn!("{e}"),
        }

        if hunt.is_completed() {
            break;
        }
    }

    Ok(())
}

fn solve(hunt: &mut WordHunt, found_cells: &FoundCells) -> word_hunt::Result<()> {
    let paths: Vec<Vec<(i32, i32)>> = hunt
        .outstanding_words()
        .iter()
        .map(|placed| {
            placed
                .path()
                .iter()
                .map(|cell| (cell.x as i32, cell.y as i32))
                .collect()
        })
        .collect();

    for path in paths {
        select(hunt, &path)?;
    }

    print_board(hunt, &found_cells.borrow());
    print_hint(hunt);

    Ok(())
}
