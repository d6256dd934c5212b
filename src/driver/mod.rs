//! Event-driven shell around a [`GuessSession`].
//!
//! The session itself is pure state; this module supplies the clock and the
//! input plumbing. All events (ticks and player intents) go through a single
//! queue and are applied one at a time, so the session never sees
//! overlapping mutations and needs no locking.

mod ticker;
mod view;

pub use ticker::{Ticker, TickerError};
pub use view::{TerminalView, View};

use crate::core::{Phase, State};
use crate::session::{GuessSession, SessionSnapshot};
use rand::Rng;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

const EVENT_QUEUE_CAPACITY: usize = 64;

/// Something the game loop must react to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// One clock second elapsed on timer `generation`.
    Tick { generation: u64 },
    /// The pending guess text changed.
    InputChanged(String),
    /// Submit this guess.
    Submit(String),
    /// Submit the pending guess text.
    SubmitCurrent,
    /// Show a different hint.
    Refresh,
    Restart,
    Quit,
}

impl GameEvent {
    /// Interpret a line typed by the player.
    ///
    /// `:refresh`, `:restart` and `:quit` are commands; anything else is a
    /// guess.
    pub fn from_line(line: &str) -> Self {
        match line.trim() {
            ":refresh" | ":r" => Self::Refresh,
            ":restart" => Self::Restart,
            ":quit" | ":q" => Self::Quit,
            _ => Self::Submit(line.to_string()),
        }
    }
}

/// Runs a session against its event queue until the player quits.
pub struct GameLoop<R> {
    session: GuessSession<R>,
    ticker: Ticker,
    events_tx: mpsc::Sender<GameEvent>,
    events_rx: mpsc::Receiver<GameEvent>,
}

impl<R: Rng> GameLoop<R> {
    /// Fails if `tick_interval` is zero.
    pub fn new(session: GuessSession<R>, tick_interval: Duration) -> Result<Self, TickerError> {
        let ticker = Ticker::new(tick_interval)?;
        let (events_tx, events_rx) = mpsc::channel(EVENT_QUEUE_CAPACITY);
        Ok(Self {
            session,
            ticker,
            events_tx,
            events_rx,
        })
    }

    /// Handle for feeding player intents into the loop.
    pub fn sender(&self) -> mpsc::Sender<GameEvent> {
        self.events_tx.clone()
    }

    pub fn session(&self) -> &GuessSession<R> {
        &self.session
    }

    /// Show the first hint, start the clock and process events until
    /// [`GameEvent::Quit`]. Returns the final state of the session.
    pub async fn run<V: View>(mut self, view: &mut V) -> SessionSnapshot {
        info!(
            session = %self.session.id(),
            characters = self.session.catalog().len(),
            time_budget = self.session.time_budget(),
            "game started"
        );
        self.session.start_or_refresh_hint();
        self.sync_ticker();
        self.render(view);

        while let Some(event) = self.events_rx.recv().await {
            if event == GameEvent::Quit {
                break;
            }
            if self.handle(event) {
                self.render(view);
            }
        }

        self.ticker.stop();
        let snapshot = self.session.snapshot();
        info!(
            session = %snapshot.session_id,
            score = snapshot.score,
            phase = snapshot.phase.name(),
            "game finished"
        );
        snapshot
    }

    fn render<V: View>(&self, view: &mut V) {
        if let Err(err) = view.render(&self.session.snapshot()) {
            warn!(%err, "failed to render session");
        }
    }

    /// Apply one event. Returns whether the view needs redrawing.
    fn handle(&mut self, event: GameEvent) -> bool {
        match event {
            GameEvent::Tick { generation } => {
                if !self.ticker.accepts(generation) {
                    debug!(generation, "dropping stale tick");
                    return false;
                }
                self.session.tick();
            }
            GameEvent::InputChanged(text) => self.session.set_guess_text(text),
            GameEvent::Submit(guess) => {
                self.session.submit_guess(&guess);
            }
            GameEvent::SubmitCurrent => {
                self.session.submit_current_guess();
            }
            GameEvent::Refresh => {
                self.session.start_or_refresh_hint();
            }
            GameEvent::Restart => {
                self.ticker.stop();
                self.session.restart();
            }
            GameEvent::Quit => return false,
        }
        self.sync_ticker();
        true
    }

    /// Keep exactly one timer running while the session is active.
    fn sync_ticker(&mut self) {
        match self.session.phase() {
            Phase::Active if !self.ticker.is_running() => {
                self.ticker.start(self.events_tx.clone());
            }
            Phase::Expired if self.ticker.is_running() => self.ticker.stop(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SessionBuilder;
    use crate::catalog::{Catalog, Character};
    use crate::session::MSG_CORRECT;
    use std::io;
    use tokio::time::sleep;

    #[derive(Default)]
    struct RecordingView {
        snapshots: Vec<SessionSnapshot>,
    }

    impl View for RecordingView {
        fn render(&mut self, snapshot: &SessionSnapshot) -> io::Result<()> {
            self.snapshots.push(snapshot.clone());
            Ok(())
        }
    }

    fn game(characters: Vec<Character>) -> GameLoop<rand::rngs::StdRng> {
        let session = SessionBuilder::new()
            .catalog(Catalog::new(characters).unwrap())
            .seed(5)
            .build()
            .unwrap();
        GameLoop::new(session, Duration::from_secs(1)).unwrap()
    }

    fn crew() -> Vec<Character> {
        vec![
            Character::new("Luffy", "Wants to be Pirate King"),
            Character::new("Zoro", "Wants to be world's greatest swordsman"),
        ]
    }

    fn quit_after(events: mpsc::Sender<GameEvent>, delay: Duration) {
        tokio::spawn(async move {
            sleep(delay).await;
            events.send(GameEvent::Quit).await.ok();
        });
    }

    #[tokio::test(start_paused = true)]
    async fn queued_guesses_are_applied_in_order() {
        let game = game(vec![Character::new("Luffy", "Wants to be Pirate King")]);
        let events = game.sender();
        events.send(GameEvent::Submit("zz".to_string())).await.unwrap();
        events.send(GameEvent::InputChanged("LUF".to_string())).await.unwrap();
        events.send(GameEvent::SubmitCurrent).await.unwrap();
        events.send(GameEvent::Quit).await.unwrap();

        let mut view = RecordingView::default();
        let summary = game.run(&mut view).await;

        assert_eq!(summary.score, 1);
        assert_eq!(summary.submissions, 2);
        assert_eq!(summary.message, MSG_CORRECT);
        assert_eq!(summary.phase, Phase::Expired);
        assert_eq!(view.snapshots.len(), 4);
        assert_eq!(view.snapshots[2].guess_text, "LUF");
    }

    #[tokio::test(start_paused = true)]
    async fn clock_expires_session() {
        let game = game(crew());
        quit_after(game.sender(), Duration::from_secs(75));

        let mut view = RecordingView::default();
        let summary = game.run(&mut view).await;

        assert_eq!(summary.phase, Phase::Expired);
        assert_eq!(summary.time_remaining, 0);
        assert_eq!(summary.score, 0);
        // first hint plus one render per second
        assert_eq!(view.snapshots.len(), 61);
        assert!(view
            .snapshots
            .windows(2)
            .all(|w| w[1].time_remaining + 1 == w[0].time_remaining));
    }

    #[tokio::test(start_paused = true)]
    async fn restart_keeps_a_single_timer() {
        let game = game(crew());
        let events = game.sender();
        tokio::spawn(async move {
            sleep(Duration::from_millis(10_500)).await;
            events.send(GameEvent::Restart).await.ok();
            sleep(Duration::from_millis(4_700)).await;
            events.send(GameEvent::Quit).await.ok();
        });

        let mut view = RecordingView::default();
        let summary = game.run(&mut view).await;

        assert_eq!(summary.phase, Phase::Active);
        assert_eq!(summary.time_remaining, 56);
        assert_ne!(view.snapshots[0].session_id, summary.session_id);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_after_expiry_restarts_clock() {
        let game = game(crew());
        let events = game.sender();
        tokio::spawn(async move {
            sleep(Duration::from_secs(65)).await;
            events.send(GameEvent::Restart).await.ok();
            sleep(Duration::from_millis(3_500)).await;
            events.send(GameEvent::Quit).await.ok();
        });

        let mut view = RecordingView::default();
        let summary = game.run(&mut view).await;

        assert_eq!(summary.phase, Phase::Active);
        assert_eq!(summary.time_remaining, 57);
        assert_eq!(summary.score, 0);
    }

    #[test]
    fn zero_tick_interval_is_rejected() {
        let session = SessionBuilder::new()
            .catalog(Catalog::new(crew()).unwrap())
            .build()
            .unwrap();

        let result = GameLoop::new(session, Duration::ZERO);
        assert!(matches!(result, Err(TickerError::ZeroPeriod)));
    }

    #[test]
    fn lines_map_to_events() {
        assert_eq!(GameEvent::from_line(":refresh"), GameEvent::Refresh);
        assert_eq!(GameEvent::from_line(" :restart "), GameEvent::Restart);
        assert_eq!(GameEvent::from_line(":q"), GameEvent::Quit);
        assert_eq!(
            GameEvent::from_line("luf"),
            GameEvent::Submit("luf".to_string())
        );
        assert_eq!(GameEvent::from_line(""), GameEvent::Submit(String::new()));
    }
}
