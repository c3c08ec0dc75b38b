use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordsearch_engine::models::WordEntry;
use wordsearch_engine::{Difficulty, EngineEvent, SessionRegistry};

/// Scripted demo: generate a puzzle from a sample vocabulary list, replay
/// every placed word's path as pointer gestures, and print the event stream.
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordsearch_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting word-search demo game...");

    let vocabulary = vec![
        entry("apple", "a round fruit with red or green skin"),
        entry("bridge", "a structure carrying a road across a river"),
        entry("candle", "a stick of wax with a wick for burning"),
        entry("desert", "a dry, barren area of land"),
        entry("eager", "wanting to do something very much"),
        entry("fossil", "remains of a prehistoric organism"),
    ];

    let registry = SessionRegistry::new();
    let (session, mut events) = registry.create(vocabulary, Difficulty::Easy.settings())?;
    session.start().await;

    let snapshot = session.snapshot().await;
    tracing::info!(
        "puzzle has {} active words on a {}x{} grid",
        snapshot.words.len(),
        snapshot.grid.len(),
        snapshot.grid.len()
    );
    for row in &snapshot.grid {
        let line: String = row
            .iter()
            .map(|cell| cell.letter)
            .flat_map(|letter| [letter, ' '])
            .collect();
        println!("{}", line.trim_end());
    }

    // Replay each placed word's recorded path as a drag gesture
    for word in &snapshot.words {
        let Some(path) = snapshot.word_positions.get(&word.text) else {
            continue;
        };
        let mut cells = path.iter();
        if let Some(first) = cells.next() {
            session.pointer_down(*first).await;
        }
        for cell in cells {
            session.pointer_move(*cell).await;
        }
        session.pointer_up().await;
    }

    while let Some(event) = events.recv().await {
        println!("{}", serde_json::to_string(&event)?);
        if matches!(event, EngineEvent::Complete { .. }) {
            break;
        }
    }

    registry.remove(session.session_id).await?;
    tracing::info!("Demo game finished");

    Ok(())
}

fn entry(text: &str, definition: &str) -> WordEntry {
    WordEntry {
        text: text.to_string(),
        definition: definition.to_string(),
    }
}
