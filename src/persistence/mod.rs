//! Local app data under the platform data directory. Dictionary content lives
//! in the external store; only configuration is kept on disk here.

use std::{
    fs,
    path::PathBuf,
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};

use crate::core::TermlinkError;

const APP_NAME: &str = "termlink";

/// Name of the settings file inside the app data directory.
pub const SETTINGS_FILE: &str = "settings.json";

pub fn app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

fn data_file_path(filename: &str) -> PathBuf {
    app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), TermlinkError> {
    let path = data_file_path(filename);
    fs::write(&path, serde_json::to_string_pretty(data)?)?;
    println!("[Persistence] Saved {}", path.display());
    Ok(())
}

pub fn load_json<T: DeserializeOwned + Default>(filename: &str) -> Result<T, TermlinkError> {
    let path = data_file_path(filename);

    if !path.exists() {
        return Ok(T::default());
    }

    Ok(serde_json::from_str(&fs::read_to_string(&path)?)?)
}

/// A missing or unreadable file is not fatal; the defaults carry the session.
pub fn load_json_or_default<T: DeserializeOwned + Default>(filename: &str) -> T {
    match load_json(filename) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("[Persistence] Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}
