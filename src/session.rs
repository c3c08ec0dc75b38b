use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::config::DifficultySettings;
use crate::error::EngineError;
use crate::events::EngineEvent;
use crate::game::{GameState, GridGenerator};
use crate::models::{GameStatus, Position, WordEntry};
use crate::{HINT_REVEAL_DURATION, TICK_INTERVAL};

/// Capacity of a session's event channel
const EVENT_CHANNEL_CAPACITY: usize = 100;

/// One in-memory puzzle instance plus its timers and event channel. All
/// mutation funnels through the state mutex, so ordering follows the event
/// sequence the host delivers (pointer-down before its moves and up).
pub struct PuzzleSession {
    pub session_id: Uuid,
    entries: Vec<WordEntry>,
    settings: DifficultySettings,
    state: Mutex<GameState>,
    events: mpsc::Sender<EngineEvent>,
    tick_task: Mutex<Option<JoinHandle<()>>>,
    hint_task: Mutex<Option<JoinHandle<()>>>,
}

impl PuzzleSession {
    /// Begin play and start the 1-second clock
    pub async fn start(self: &Arc<Self>) {
        {
            let mut state = self.state.lock().await;
            if state.status != GameStatus::Idle {
                return;
            }
            state.start();
        }
        self.spawn_tick_task().await;
        tracing::info!("session {} started", self.session_id);
    }

    async fn spawn_tick_task(self: &Arc<Self>) {
        let session = Arc::clone(self);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            // the first interval tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                // stops on its own once the puzzle leaves Playing
                if !session.state.lock().await.tick() {
                    break;
                }
            }
        });
        *self.tick_task.lock().await = Some(handle);
    }

    /// Pointer-down from the host: starts a new gesture. A pending hint
    /// reveal is cancelled first so it cannot wipe this selection later.
    pub async fn pointer_down(&self, pos: Position) {
        self.cancel_hint_reveal().await;
        self.state.lock().await.pointer_down(pos);
    }

    pub async fn pointer_move(&self, pos: Position) {
        self.state.lock().await.pointer_move(pos);
    }

    /// Pointer-up: resolve the gesture against the unfound words. Emits
    /// `WordFound` (and `Complete` for the last word) on a match; the
    /// selection is cleared whatever the outcome.
    pub async fn pointer_up(&self) {
        let mut pending = Vec::new();
        {
            let mut state = self.state.lock().await;
            let path = state.finish_selection();
            let outcome = state.apply_match(&path);

            if let Some(matched) = outcome.matched {
                tracing::info!(
                    "session {}: word {} found for {} points",
                    self.session_id,
                    matched.word,
                    matched.points_awarded
                );
                pending.push(EngineEvent::WordFound {
                    word: matched.word,
                    points_awarded: matched.points_awarded,
                    score: state.score,
                });
            }
            if outcome.completed {
                tracing::info!("session {} complete", self.session_id);
                pending.push(EngineEvent::Complete {
                    score: state.score,
                    time_elapsed_seconds: state.time_elapsed_secs,
                    hints_used: state.hints_used,
                });
            }
        }
        for event in pending {
            let _ = self.events.send(event).await;
        }
    }

    /// Reveal the first cell of a random unfound word for a flat score
    /// cost. The reveal clears itself after `HINT_REVEAL_DURATION` unless a
    /// new gesture or a reset cancels it first.
    pub async fn use_hint(self: &Arc<Self>) {
        let outcome = {
            let mut state = self.state.lock().await;
            let mut rng = rand::rng();
            state.apply_hint(&mut rng)
        };
        let Some(hint) = outcome else {
            return;
        };

        self.cancel_hint_reveal().await;
        let session = Arc::clone(self);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(HINT_REVEAL_DURATION).await;
            session.state.lock().await.clear_selection();
        });
        *self.hint_task.lock().await = Some(handle);

        tracing::debug!(
            "session {}: hint revealed start of {}",
            self.session_id,
            hint.word
        );
        let _ = self
            .events
            .send(EngineEvent::HintUsed {
                word_start: hint.position,
                remaining_score: hint.remaining_score,
                hints_used: hint.hints_used,
            })
            .await;
    }

    /// Retry the same word list and difficulty on a brand new grid with a
    /// zeroed score, clock, and hint counter
    pub async fn reset(self: &Arc<Self>) -> Result<(), EngineError> {
        self.stop_timers().await;

        let fresh = build_state(&self.entries, &self.settings)?;
        {
            let mut state = self.state.lock().await;
            *state = fresh;
            state.start();
        }
        self.spawn_tick_task().await;
        tracing::info!("session {} reset", self.session_id);
        Ok(())
    }

    /// Clone of the current state for the host to render
    pub async fn snapshot(&self) -> GameState {
        self.state.lock().await.clone()
    }

    async fn cancel_hint_reveal(&self) {
        if let Some(handle) = self.hint_task.lock().await.take() {
            handle.abort();
        }
    }

    async fn stop_timers(&self) {
        self.cancel_hint_reveal().await;
        if let Some(handle) = self.tick_task.lock().await.take() {
            handle.abort();
        }
    }
}

fn build_state(
    entries: &[WordEntry],
    settings: &DifficultySettings,
) -> Result<GameState, EngineError> {
    if entries.is_empty() {
        return Err(EngineError::EmptyWordList);
    }

    let puzzle = GridGenerator::generate(entries, settings.grid_size, &settings.directions);
    if puzzle.positions.is_empty() {
        return Err(EngineError::NoWordsPlaced);
    }

    Ok(GameState::new(entries, puzzle))
}

/// All live puzzle sessions, keyed by session id
pub struct SessionRegistry {
    sessions: DashMap<Uuid, Arc<PuzzleSession>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Create a session from a word list and difficulty. Words the
    /// generator had to drop are excluded from the active list; creation
    /// fails only if nothing could be placed at all.
    pub fn create(
        &self,
        entries: Vec<WordEntry>,
        settings: DifficultySettings,
    ) -> Result<(Arc<PuzzleSession>, mpsc::Receiver<EngineEvent>), EngineError> {
        let state = build_state(&entries, &settings)?;
        let word_count = state.words.len();

        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let session = Arc::new(PuzzleSession {
            session_id: Uuid::new_v4(),
            entries,
            settings,
            state: Mutex::new(state),
            events: tx,
            tick_task: Mutex::new(None),
            hint_task: Mutex::new(None),
        });
        self.sessions.insert(session.session_id, Arc::clone(&session));

        tracing::info!(
            "created session {} with {} active words",
            session.session_id,
            word_count
        );
        Ok((session, rx))
    }

    pub fn get(&self, id: Uuid) -> Result<Arc<PuzzleSession>, EngineError> {
        self.sessions
            .get(&id)
            .map(|entry| Arc::clone(&entry))
            .ok_or(EngineError::SessionNotFound(id))
    }

    /// Tear a session down, stopping its timers
    pub async fn remove(&self, id: Uuid) -> Result<(), EngineError> {
        let (_, session) = self
            .sessions
            .remove(&id)
            .ok_or(EngineError::SessionNotFound(id))?;
        session.stop_timers().await;
        tracing::info!("removed session {}", id);
        Ok(())
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
