//! Coin Dash entry point
//!
//! Native builds run a headless autopilot session and print the result. The
//! browser build is driven from JavaScript through `coin_dash::web::WebGame`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use coin_dash::sim::{Field, GameEvent, GameOverSummary, HudSnapshot};
    use coin_dash::{FrameDriver, Tuning};

    /// Frames per run before giving up (10 minutes at 60 fps)
    const MAX_FRAMES: u64 = 60 * 60 * 10;

    env_logger::init();
    log::info!("Coin Dash (native) starting...");

    // Usage: coin-dash [tuning.json] [seed] [runs]
    let mut args = std::env::args().skip(1);
    let tuning_path = args
        .next()
        .filter(|a| !a.is_empty() && a != "-")
        .or_else(|| std::env::var("COIN_DASH_TUNING").ok())
        .map(PathBuf::from);
    let tuning = match tuning_path {
        Some(path) => Tuning::load_or_default(&path),
        None => Tuning::default(),
    };
    let seed = args.next().and_then(|s| s.parse::<u64>().ok()).unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    let runs = args.next().and_then(|s| s.parse::<u32>().ok()).unwrap_or(1).max(1);

    let mut driver = FrameDriver::new(seed, Field::default(), tuning);
    driver.set_autopilot(true);

    for run in 1..=runs {
        if run > 1 {
            driver.restart();
        }
        let frames = driver.run_until_game_over(MAX_FRAMES);
        let pickups = driver
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::CoinCollected { .. }))
            .count();
        log::debug!("Run {} saw {} coin pickups", run, pickups);

        match GameOverSummary::capture(&driver.state) {
            Some(summary) => println!("Run {run} (seed {seed}): {} after {frames} frames", summary.text()),
            None => {
                let hud = HudSnapshot::capture(&driver.state);
                println!(
                    "Run {run} (seed {seed}): survived {frames} frames, {} | {}",
                    hud.distance_text(),
                    hud.coins_text()
                );
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is WebGame, this is just to satisfy the compiler
}
