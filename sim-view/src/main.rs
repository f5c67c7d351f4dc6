//! Application entry point for the constellation viewer.
//!
//! This binary sets up logging and eframe/egui, then delegates the
//! animation and drawing to [`Viewer`] from the `viewer` module.

mod viewer;

use constellation_core::store::JsonFileStore;
use viewer::Viewer;

const SETTINGS_ENV: &str = "CONSTELLATIONS_SETTINGS";
const SEED_ENV: &str = "CONSTELLATIONS_SEED";
const DEFAULT_SETTINGS_PATH: &str = "constellations.json";

/// Starts the native eframe application.
///
/// Settings are read from the JSON file named by `CONSTELLATIONS_SETTINGS`
/// (default `constellations.json`). `CONSTELLATIONS_SEED` fixes the RNG
/// seed so a run can be replayed; otherwise a random seed is logged.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let settings_path =
        std::env::var(SETTINGS_ENV).unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_owned());
    let seed = match std::env::var(SEED_ENV) {
        Ok(s) => match s.parse::<u64>() {
            Ok(seed) => seed,
            Err(e) => {
                log::warn!("ignoring {SEED_ENV}={s:?}: {e}");
                rand::random()
            }
        },
        Err(_) => rand::random(),
    };
    log::info!("starting with settings {settings_path:?}, seed {seed}");

    let store = JsonFileStore::new(settings_path);
    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Constellations",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(Box::new(store), seed)))),
    )
}
