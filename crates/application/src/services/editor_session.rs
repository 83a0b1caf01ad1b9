//! Editor session - the interactive editing loop
//!
//! Client-side state machine behind the block's editor preview. Location
//! edits are debounced; unit and hourly-toggle changes only re-render.
//! Fetches carry a generation number so that a stale in-flight response is
//! discarded when a newer fetch has been started (last-request-wins). The
//! superseded transport call is not aborted; its result is simply ignored
//! on arrival.

use std::sync::Arc;
use std::time::Duration;

use domain::entities::BlockSettings;
use domain::value_objects::{Location, MeasurementSystem};
use parking_lot::Mutex;
use tracing::debug;

use crate::ports::WeatherSnapshot;
use crate::services::{DebounceTimer, WeatherService};
use crate::view::{BlockView, ClockContext, build_block_view};

/// Quiet period after the last location keystroke before fetching
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Phase of the interactive editing loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    /// No location configured, nothing to do
    Idle,
    /// Debounce window open after a location edit
    AwaitingInput,
    /// A fetch is in flight
    Loading,
    /// Weather data is displayed
    Loaded,
    /// The last fetch failed (logical or transport)
    Errored,
}

struct SessionState {
    settings: BlockSettings,
    phase: EditorPhase,
    snapshot: Option<WeatherSnapshot>,
    generation: u64,
}

/// Interactive editor session for one block
///
/// Cheap to clone; clones share the same state and timer.
#[derive(Clone)]
pub struct EditorSession {
    service: Arc<WeatherService>,
    debounce: Duration,
    timer: Arc<DebounceTimer>,
    state: Arc<Mutex<SessionState>>,
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("EditorSession")
            .field("phase", &state.phase)
            .field("generation", &state.generation)
            .finish_non_exhaustive()
    }
}

impl EditorSession {
    /// Create a session over existing block settings
    pub(crate) fn new(
        service: Arc<WeatherService>,
        settings: BlockSettings,
        debounce: Duration,
    ) -> Self {
        Self {
            service,
            debounce,
            timer: Arc::new(DebounceTimer::new()),
            state: Arc::new(Mutex::new(SessionState {
                settings,
                phase: EditorPhase::Idle,
                snapshot: None,
                generation: 0,
            })),
        }
    }

    /// Called when the editor opens
    ///
    /// A previously configured location loads immediately, without the
    /// debounce delay.
    pub fn mount(&self) {
        let configured = {
            let mut state = self.state.lock();
            if state.settings.has_location() {
                state.phase = EditorPhase::AwaitingInput;
                true
            } else {
                false
            }
        };
        if configured {
            self.dispatch_fetch();
        }
    }

    /// Called on every location keystroke
    pub fn edit_location(&self, value: &str) {
        self.timer.cancel();

        let mut state = self.state.lock();
        state.settings.location = value.to_string();

        if value.trim().is_empty() {
            // Invalidate any in-flight fetch so a late response cannot
            // resurrect data for the cleared location
            state.generation += 1;
            state.snapshot = None;
            state.phase = EditorPhase::Idle;
            return;
        }

        state.phase = EditorPhase::AwaitingInput;
        drop(state);

        let session = self.clone();
        self.timer.schedule(self.debounce, async move {
            session.dispatch_fetch();
        });
    }

    /// Change the measurement system; render-only, no re-fetch
    pub fn set_measurement_unit(&self, unit: MeasurementSystem) {
        self.state.lock().settings.measurementunit = unit;
    }

    /// Toggle the hourly list; render-only, no re-fetch
    pub fn set_show_hourly(&self, show: bool) {
        self.state.lock().settings.show_hourly = show;
    }

    /// Current phase of the session
    pub fn phase(&self) -> EditorPhase {
        self.state.lock().phase
    }

    /// Snapshot currently backing the preview, if any
    pub fn snapshot(&self) -> Option<WeatherSnapshot> {
        self.state.lock().snapshot.clone()
    }

    /// Current settings (as they would be persisted)
    pub fn settings(&self) -> BlockSettings {
        self.state.lock().settings.clone()
    }

    /// Build the preview view for the current state
    ///
    /// Uses the same view builder as the static render path, so a given
    /// snapshot previews exactly as it will publish.
    pub fn preview(&self, now_epoch: i64, clock: ClockContext) -> BlockView {
        let state = self.state.lock();
        if !state.settings.has_location() {
            return BlockView::MissingLocation;
        }
        match state.phase {
            EditorPhase::AwaitingInput | EditorPhase::Loading => BlockView::Loading,
            EditorPhase::Errored if state.snapshot.is_none() => BlockView::Unavailable,
            _ => build_block_view(&state.settings, state.snapshot.as_ref(), now_epoch, clock),
        }
    }

    /// Start a fetch for the current location on the runtime
    fn dispatch_fetch(&self) {
        let session = self.clone();
        tokio::spawn(async move {
            session.run_fetch().await;
        });
    }

    async fn run_fetch(&self) {
        let (raw_location, generation) = {
            let mut state = self.state.lock();
            state.generation += 1;
            state.phase = EditorPhase::Loading;
            (state.settings.location.clone(), state.generation)
        };

        // The location can have been cleared between scheduling and firing
        let Ok(location) = Location::new(raw_location) else {
            let mut state = self.state.lock();
            if state.generation == generation {
                state.snapshot = None;
                state.phase = EditorPhase::Idle;
            }
            return;
        };

        let result = self.service.snapshot_for(&location).await;

        let mut state = self.state.lock();
        if state.generation != generation {
            debug!(
                stale = generation,
                latest = state.generation,
                "Discarding superseded fetch result"
            );
            return;
        }

        match result {
            Ok(snapshot) => {
                state.phase = if snapshot.is_report() {
                    EditorPhase::Loaded
                } else {
                    EditorPhase::Errored
                };
                state.snapshot = Some(snapshot);
            }
            Err(error) => {
                debug!(error = %error, "Fetch failed");
                state.snapshot = None;
                state.phase = EditorPhase::Errored;
            }
        }
    }
}
