//! Headless walkthrough: plays Campus from scripted input on stdin.
//!
//! One event per line:
//!
//! ```text
//! +w          press W
//! -w          release W
//! wait 250    let the game run for 250 ms
//! resize 1024x768
//! quit
//! ```
//!
//! The final score ledger is printed as JSON. Set `CAMPUS_SEED` for a
//! reproducible minigame deal and `RUST_LOG` for more or less logging.

use std::time::Duration;

use campus::prelude::*;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

// ---------------------------------------------------------------------------
// Script reader
// ---------------------------------------------------------------------------

/// Forwards stdin lines as input events until EOF or `quit`.
async fn read_script(tx: mpsc::Sender<InputEvent>) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(ms) = line.strip_prefix("wait ") {
            match ms.trim().parse::<u64>() {
                Ok(ms) => tokio::time::sleep(Duration::from_millis(ms)).await,
                Err(_) => tracing::warn!(line, "bad wait duration, skipping"),
            }
            continue;
        }
        match line.parse::<InputEvent>() {
            Ok(event) => {
                let quit = event == InputEvent::Quit;
                if tx.send(event).await.is_err() || quit {
                    break;
                }
            }
            Err(e) => tracing::warn!(line, error = %e, "skipping line"),
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    campus::init_tracing().map_err(|e| e.to_string())?;

    let mut config = CampusConfig::default();
    if let Ok(seed) = std::env::var("CAMPUS_SEED") {
        config.minigame_seed = Some(seed.parse()?);
    }

    let mut game = Campus::new(config, HeadlessStage::new())?;
    let (tx, rx) = mpsc::channel(64);
    let reader = tokio::spawn(read_script(tx));

    game.run(rx).await;
    reader.abort();

    for notice in game.stage().notices() {
        eprintln!("[{}] {}", notice.title, notice.message.replace('\n', " | "));
    }
    let ledger = game.into_ledger();
    for (room, data) in ledger.iter() {
        eprintln!("{room}: {data}");
    }
    println!("{}", serde_json::to_string_pretty(&ledger)?);
    Ok(())
}
