//! Terminal shell over the VoxNote core.
//!
//! # Responsibility
//! - Drive the root composition from an interactive line loop.
//! - Keep all business rules in `voxnote_core`; this binary only renders.
//!
//! A plain terminal exposes no speech recognition facility, so the capture
//! affordance reports unavailable here; voice capture is exercised by
//! environments that can provide a [`SpeechEngine`].

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::Utc;
use log::warn;
use voxnote_core::db::open_db;
use voxnote_core::{
    default_log_level, init_logging, App, CreationPanel, EngineConfig, EngineError, PanelEvent,
    SpeechEngine, SqliteKeyValueStore,
};

/// Capability probe for a bare terminal: no recognizer is present.
struct NoRecognizer;

impl SpeechEngine for NoRecognizer {
    fn is_available(&self) -> bool {
        false
    }

    fn start(&mut self, _config: &EngineConfig) -> Result<(), EngineError> {
        Err(EngineError::Aborted("no recognizer in this environment".into()))
    }

    fn stop(&mut self) {}
}

fn main() {
    if let Err(err) = run() {
        eprintln!("voxnote: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let data_dir = data_dir();
    std::fs::create_dir_all(&data_dir)?;

    // Logging failure must not take the app down with it.
    let log_dir = data_dir.join("logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("voxnote: logging disabled: {err}");
    }

    let conn = open_db(data_dir.join("voxnote.sqlite3"))?;
    let store = SqliteKeyValueStore::try_new(&conn)?;
    let mut app = App::new(store)?;
    let mut panel = CreationPanel::new(NoRecognizer);

    println!(
        "voxnote: {} note(s) loaded. Type `help` for commands.",
        app.collection().len()
    );

    let stdin = io::stdin();
    let mut out = io::stdout();
    loop {
        print!("> ");
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim_end_matches(['\n', '\r']);
        let (command, rest) = split_command(line);
        match command {
            "" => {}
            "help" => print_help(),
            "add" => {
                panel.start_editor();
                panel.set_draft(rest);
                match panel.submit(app.collection_mut())? {
                    PanelEvent::NoteCreated(_) => println!("Note created."),
                    _ => println!("Nothing to save: note content is empty."),
                }
            }
            "record" => match panel.start_recording() {
                Ok(PanelEvent::CaptureUnavailable) => {
                    println!("Speech recording is not supported in this environment.");
                }
                Ok(_) => println!("Recording... (not expected on a terminal)"),
                Err(err) => {
                    warn!("event=cli_record module=cli status=error error={err}");
                    println!("Could not start recording: {err}");
                }
            },
            "search" => {
                app.set_search(rest);
                render_grid(&app);
            }
            "list" => {
                app.set_search("");
                render_grid(&app);
            }
            "view" => {
                let detail =
                    visible_id(&app, rest).and_then(|id| app.detail(id, Utc::now()));
                match detail {
                    Some(detail) => {
                        println!("[{}]", detail.time_label);
                        println!("{}", detail.content);
                    }
                    None => println!("No such note. Run `list` or `search` first."),
                }
            }
            "delete" => match visible_id(&app, rest) {
                Some(id) => {
                    app.delete_note(id)?;
                    println!("Note deleted.");
                }
                None => println!("No such note. Run `list` or `search` first."),
            },
            "quit" | "exit" => break,
            other => println!("Unknown command `{other}`. Type `help`."),
        }
    }

    Ok(())
}

fn data_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir)
        .join(".voxnote")
}

fn split_command(line: &str) -> (&str, &str) {
    let trimmed = line.trim_start();
    match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    }
}

/// Resolves a 1-based index from the currently visible grid to a note id.
fn visible_id(
    app: &App<SqliteKeyValueStore<'_>>,
    raw_index: &str,
) -> Option<voxnote_core::NoteId> {
    let index: usize = raw_index.parse().ok()?;
    let notes = app.visible_notes();
    notes.get(index.checked_sub(1)?).map(|note| note.id)
}

fn render_grid(app: &App<SqliteKeyValueStore<'_>>) {
    let previews = app.previews(Utc::now());
    if previews.is_empty() {
        if app.search_query().is_empty() {
            println!("No notes yet. Use `add <text>` to create one.");
        } else {
            println!("No notes match `{}`.", app.search_query());
        }
        return;
    }

    for (position, card) in previews.iter().enumerate() {
        println!("{:>3}. [{}] {}", position + 1, card.time_label, card.excerpt);
    }
}

fn print_help() {
    println!("Commands:");
    println!("  add <text>    create a note from typed text");
    println!("  record        start voice capture (needs a speech engine)");
    println!("  list          show every note, newest first");
    println!("  search <q>    narrow the grid to notes containing <q>");
    println!("  view <n>      show the full content of note <n>");
    println!("  delete <n>    delete note <n>");
    println!("  quit          leave");
}
