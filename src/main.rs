use eframe::egui;
use termlink::{
    core::{
        DictionarySnapshot,
        ScoredItem,
    },
    editor::EditorSession,
    gui::TermlinkApp,
    TermlinkError,
};

fn main() -> eframe::Result {
    let session = match std::env::args().nth(1) {
        Some(path) => match load_session(&path) {
            Ok(session) => session,
            Err(e) => {
                eprintln!("[Termlink] Failed to load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => EditorSession::empty(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Termlink")
            .with_inner_size([1280.0, 820.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Termlink",
        options,
        Box::new(|cc| Ok(Box::new(TermlinkApp::new(cc, session)))),
    )
}

/// A saved dictionary snapshot reopens where it left off; a plain array of scored
/// items starts a fresh session with everything in the intake column.
fn load_session(path: &str) -> Result<EditorSession, TermlinkError> {
    let raw = std::fs::read_to_string(path)?;

    if let Ok(snapshot) = serde_json::from_str::<DictionarySnapshot>(&raw) {
        return Ok(EditorSession::from_snapshot(snapshot));
    }

    let items: Vec<ScoredItem> = serde_json::from_str(&raw).map_err(|_| {
        TermlinkError::Custom(
            "expected a dictionary snapshot or a scored item list".to_string(),
        )
    })?;
    Ok(EditorSession::from_intake(items, String::new()))
}
