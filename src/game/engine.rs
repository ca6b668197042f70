use crate::backend::{AttemptRecorder, AttemptSaveError, LocationFetchError, LocationProvider};
use crate::config::GameConfig;
use crate::game::consts::{NO_GUESS_MESSAGE, NO_PANORAMA_MESSAGE, TIME_EXPIRED_MESSAGE};
use crate::game::events::{Event, PlayerAction};
use crate::game::models::{GamePhase, GameState, RoundTransition, SubmitGuessError};
use crate::map::models::LatLng;
use crate::report::GameReport;
use crate::timer::{format_countdown, RoundTimer, TimerSignal};
use crate::widgets::{GameScreen, MapWidget, PanoramaError, PanoramaWidget};
use tokio::sync::mpsc;
use uuid::Uuid;

/// Cloneable handle for feeding player actions into a running engine. Sends
/// to an engine that has already exited are dropped silently.
#[derive(Clone)]
pub struct GameHandle {
    events: mpsc::UnboundedSender<Event>,
}

impl GameHandle {
    pub fn place_guess(&self, location: LatLng) {
        self.send(PlayerAction::PlaceGuess(location));
    }

    pub fn submit_guess(&self) {
        self.send(PlayerAction::SubmitGuess);
    }

    pub fn acknowledge_result(&self) {
        self.send(PlayerAction::AcknowledgeResult);
    }

    pub fn play_again(&self) {
        self.send(PlayerAction::PlayAgain);
    }

    pub fn exit(&self) {
        self.send(PlayerAction::Exit);
    }

    fn send(&self, action: PlayerAction) {
        let _ = self.events.send(Event::Player(action));
    }
}

/// Drives one game session: owns the state, the single round timer, and the
/// collaborators, and processes events strictly one at a time.
pub struct GameEngine<B, M, P, S> {
    config: GameConfig,
    session: Uuid,
    state: GameState,
    timer: RoundTimer,
    backend: B,
    map: M,
    panorama: P,
    screen: S,
    events_tx: mpsc::UnboundedSender<Event>,
    events_rx: mpsc::UnboundedReceiver<Event>,
    /// Bumped on every "play again"; outstanding requests of the previous
    /// game carry the old value and get discarded on arrival.
    epoch: u64,
    panorama_retries: u32,
    /// Whether the next accepted location starts a round (as opposed to
    /// replacing the target of a round already in progress).
    awaiting_location: bool,
}

impl<B, M, P, S> GameEngine<B, M, P, S>
where
    B: LocationProvider + AttemptRecorder + Clone + Send + Sync + 'static,
    M: MapWidget,
    P: PanoramaWidget,
    S: GameScreen,
{
    pub fn new(config: GameConfig, backend: B, map: M, panorama: P, screen: S) -> (Self, GameHandle) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let handle = GameHandle {
            events: events_tx.clone(),
        };
        let state = GameState::new(config.rounds_per_game, config.round_duration_secs);
        let engine = Self {
            config,
            session: Uuid::new_v4(),
            state,
            timer: RoundTimer::new(),
            backend,
            map,
            panorama,
            screen,
            events_tx,
            events_rx,
            epoch: 0,
            panorama_retries: 0,
            awaiting_location: true,
        };
        (engine, handle)
    }

    /// Runs until the player exits, then returns the final state.
    pub async fn run(mut self) -> GameState {
        tracing::info!(
            task = "game_started",
            session = %self.session,
            rounds = self.config.rounds_per_game,
        );
        self.request_location();
        while let Some(event) = self.events_rx.recv().await {
            if !self.handle_event(event).await {
                break;
            }
        }
        self.timer.stop();
        self.state
    }

    async fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Player(action) => return self.handle_action(action),
            Event::Timer {
                epoch,
                round,
                signal,
            } => self.handle_timer(epoch, round, signal),
            Event::LocationReady {
                epoch,
                round,
                outcome,
            } => self.handle_location(epoch, round, outcome).await,
            Event::AttemptSaved { epoch, outcome } => self.handle_attempt_saved(epoch, outcome),
        }
        true
    }

    fn handle_action(&mut self, action: PlayerAction) -> bool {
        match action {
            PlayerAction::PlaceGuess(location) => self.state.place_guess(location),
            PlayerAction::SubmitGuess => self.submit_guess(),
            PlayerAction::AcknowledgeResult => self.acknowledge_result(),
            PlayerAction::PlayAgain => self.play_again(),
            PlayerAction::Exit => {
                self.timer.stop();
                tracing::info!(task = "game_exited", session = %self.session);
                return false;
            }
        }
        true
    }

    fn submit_guess(&mut self) {
        match self.state.submit_guess() {
            Ok(outcome) => {
                self.timer.stop();
                tracing::info!(
                    task = "guess_submitted",
                    session = %self.session,
                    round = outcome.result.round,
                    distance_meters = outcome.result.distance_meters,
                    points = outcome.result.points,
                );
                self.map.show_round_outcome(outcome.target, outcome.guess);
                self.screen.show_result(&outcome.result);
            }
            Err(SubmitGuessError::NoGuessSelected) => self.screen.show_message(NO_GUESS_MESSAGE),
            Err(SubmitGuessError::RoundNotStarted) => {
                tracing::warn!(
                    task = "guess_ignored",
                    session = %self.session,
                    round = self.state.current_round,
                );
            }
        }
    }

    fn acknowledge_result(&mut self) {
        // A repeated acknowledgment while the next round's location is still
        // in flight must not advance the round a second time.
        if self.awaiting_location {
            return;
        }
        match self.state.acknowledge_result() {
            Some(RoundTransition::NextRound) => {
                self.awaiting_location = true;
                self.request_location();
            }
            Some(RoundTransition::GameFinished) => self.finish_game(false),
            None => {}
        }
    }

    fn play_again(&mut self) {
        if self.state.phase != GamePhase::GameOver {
            return;
        }
        self.epoch += 1;
        self.session = Uuid::new_v4();
        self.timer.stop();
        self.state.reset();
        self.panorama_retries = 0;
        self.awaiting_location = true;
        tracing::info!(task = "game_restarted", session = %self.session);
        self.request_location();
    }

    fn handle_timer(&mut self, epoch: u64, round: u8, signal: TimerSignal) {
        if epoch != self.epoch
            || round != self.state.current_round
            || self.state.phase != GamePhase::AwaitingGuess
        {
            return;
        }
        match signal {
            TimerSignal::Tick { remaining_secs } => {
                self.state.record_tick(remaining_secs);
                self.screen
                    .update_countdown(&format_countdown(remaining_secs.max(0) as u64));
            }
            TimerSignal::Expired => {
                tracing::info!(task = "round_timer_expired", session = %self.session, round = round);
                self.state.expire();
                self.screen.show_message(TIME_EXPIRED_MESSAGE);
                self.finish_game(true);
            }
        }
    }

    async fn handle_location(
        &mut self,
        epoch: u64,
        round: u8,
        outcome: Result<LatLng, LocationFetchError>,
    ) {
        if epoch != self.epoch || round != self.state.current_round {
            tracing::warn!(
                task = "stale_location_discarded",
                session = %self.session,
                requested_for_round = round,
                current_round = self.state.current_round,
            );
            return;
        }
        let location = match outcome {
            Ok(location) => location,
            Err(error) => {
                tracing::error!(
                    task = "location_fetch_failed",
                    session = %self.session,
                    round = round,
                    error = %error,
                );
                self.screen.show_message(&error.to_string());
                return;
            }
        };
        match self.panorama.show(location).await {
            Ok(()) => {
                self.panorama_retries = 0;
                if self.awaiting_location {
                    self.awaiting_location = false;
                    self.map.reset();
                    self.state.begin_round(location);
                    self.start_round_timer();
                    self.screen.update_status(
                        self.state.current_round,
                        self.config.rounds_per_game,
                        self.state.score,
                    );
                    self.screen
                        .update_countdown(&format_countdown(self.config.round_duration_secs));
                    tracing::info!(
                        task = "round_started",
                        session = %self.session,
                        round = self.state.current_round,
                    );
                } else {
                    self.state.replace_target(location);
                    tracing::info!(
                        task = "target_replaced",
                        session = %self.session,
                        round = self.state.current_round,
                    );
                }
            }
            Err(PanoramaError::Unavailable) => {
                self.panorama_retries += 1;
                if self.panorama_retries >= self.config.max_panorama_retries {
                    tracing::warn!(
                        task = "panorama_retries_exhausted",
                        session = %self.session,
                        round = round,
                        retries = self.panorama_retries,
                    );
                    self.panorama_retries = 0;
                    self.screen.show_message(NO_PANORAMA_MESSAGE);
                } else {
                    self.request_location();
                }
            }
            Err(PanoramaError::Other(message)) => {
                tracing::warn!(
                    task = "panorama_error",
                    session = %self.session,
                    round = round,
                    error = %message,
                );
                self.screen.show_message(&message);
            }
        }
    }

    fn handle_attempt_saved(&mut self, epoch: u64, outcome: Result<(), AttemptSaveError>) {
        if epoch != self.epoch {
            return;
        }
        match outcome {
            Ok(()) => tracing::info!(task = "attempt_saved", session = %self.session),
            Err(error) => {
                tracing::error!(
                    task = "attempt_save_failed",
                    session = %self.session,
                    error = %error,
                );
                self.screen.show_message(&error.to_string());
            }
        }
    }

    /// Shows the final report and, when the game was completed normally with
    /// time still on the clock, records the attempt.
    fn finish_game(&mut self, expired: bool) {
        let report = GameReport::new(&self.state.rounds, self.state.score);
        tracing::info!(
            task = "game_finished",
            session = %self.session,
            expired = expired,
            total_distance_meters = report.total_distance_meters,
            total_points = report.total_points,
        );
        self.screen.show_game_over(&report);
        if !expired && self.state.remaining_secs > 0 {
            let attempt = report.totals();
            let backend = self.backend.clone();
            let events = self.events_tx.clone();
            let epoch = self.epoch;
            tokio::spawn(async move {
                let outcome = backend.record_attempt(&attempt).await;
                let _ = events.send(Event::AttemptSaved { epoch, outcome });
            });
        }
    }

    fn request_location(&self) {
        let backend = self.backend.clone();
        let events = self.events_tx.clone();
        let epoch = self.epoch;
        let round = self.state.current_round;
        tokio::spawn(async move {
            let outcome = backend.next_location().await;
            let _ = events.send(Event::LocationReady {
                epoch,
                round,
                outcome,
            });
        });
    }

    fn start_round_timer(&mut self) {
        let events = self.events_tx.clone();
        let epoch = self.epoch;
        let round = self.state.current_round;
        self.timer.start(self.config.round_duration_secs, move |signal| {
            let _ = events.send(Event::Timer {
                epoch,
                round,
                signal,
            });
        });
    }
}
