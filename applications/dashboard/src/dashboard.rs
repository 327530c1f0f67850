//! The dashboard: tone player, goal slideshow and past successes
//!
//! One `Dashboard` owns all state. Timers only send [`RotationTick`]s; the
//! event loop feeds them back through [`Dashboard::on_tick`].

use crate::command::{Command, ParseCommandError, Step, TrackRef, WinCommand};
use crate::render;
use motive_core::{GoalImage, LocalStore, ResourceFetcher};
use motive_playback::TonePlayer;
use motive_rotation::{
    load_goals, AffirmationBoard, AutoAdvance, Carousel, RotationTarget, RotationTick,
    SubmitOutcome,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, info};

const DRAFT_HINT: &str = "A win needs some text. Type it, or `win cancel` to stop.";

/// What the event loop should do after a line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Print this text
    Show(String),
    /// Nothing to print
    Silent,
    /// Leave the event loop
    Quit,
}

pub struct Dashboard {
    player: TonePlayer,
    goals: Carousel<GoalImage>,
    wins: AffirmationBoard,
    goal_timer: AutoAdvance,
    win_timer: AutoAdvance,
}

impl Dashboard {
    /// Load both collections and arm their timers
    ///
    /// Must be called inside a tokio runtime. The returned receiver yields a
    /// tick per collection every `period`.
    pub async fn load(
        player: TonePlayer,
        store: Arc<dyn LocalStore>,
        fetcher: &dyn ResourceFetcher,
        period: Duration,
    ) -> (Self, UnboundedReceiver<RotationTick>) {
        let (goals, wins) = tokio::join!(
            load_goals(fetcher),
            AffirmationBoard::load(store, fetcher)
        );

        let (tx, rx) = mpsc::unbounded_channel();
        let mut dashboard = Self {
            player,
            goals: Carousel::new(goals),
            wins,
            goal_timer: AutoAdvance::new(RotationTarget::Goals, period, tx.clone()),
            win_timer: AutoAdvance::new(RotationTarget::Affirmations, period, tx),
        };

        dashboard.goal_timer.rearm(dashboard.goals.len());
        dashboard.win_timer.rearm(dashboard.wins.len());

        info!(
            goals = dashboard.goals.len(),
            wins = dashboard.wins.len(),
            "Dashboard loaded"
        );

        (dashboard, rx)
    }

    pub fn player(&self) -> &TonePlayer {
        &self.player
    }

    pub fn goals(&self) -> &Carousel<GoalImage> {
        &self.goals
    }

    pub fn wins(&self) -> &AffirmationBoard {
        &self.wins
    }

    pub fn goal_timer(&self) -> &AutoAdvance {
        &self.goal_timer
    }

    pub fn win_timer(&self) -> &AutoAdvance {
        &self.win_timer
    }

    pub fn status(&self) -> String {
        render::status(&self.player, &self.goals, &self.wins)
    }

    /// Handle one line of user input
    ///
    /// While the add form is open every line is taken as the draft, except
    /// `win cancel`.
    pub async fn handle_line(&mut self, line: &str) -> Response {
        if self.wins.is_form_open() {
            if matches!(line.parse::<Command>(), Ok(Command::Win(WinCommand::Cancel))) {
                return self.handle(Command::Win(WinCommand::Cancel)).await;
            }
            self.wins.set_draft(line);
            return self.submit_draft().await;
        }

        match line.parse::<Command>() {
            Ok(command) => self.handle(command).await,
            Err(ParseCommandError::Empty) => Response::Silent,
            Err(e) => Response::Show(e.to_string()),
        }
    }

    /// Apply a parsed command
    pub async fn handle(&mut self, command: Command) -> Response {
        let response = match command {
            Command::Play => self.player_result(|p| p.play()),
            Command::Pause => {
                self.player.pause();
                self.player_response()
            }
            Command::Toggle => self.player_result(|p| p.toggle_play_pause()),
            Command::Track(TrackRef::Index(index)) => {
                self.player_result(|p| p.select_index(index))
            }
            Command::Track(TrackRef::File(file)) => {
                self.player_result(|p| p.select_track(&file))
            }
            Command::Volume(level) => {
                self.player.set_volume(level);
                self.player_response()
            }
            Command::Mute => {
                self.player.set_muted(true);
                self.player_response()
            }
            Command::Unmute => {
                self.player.set_muted(false);
                self.player_response()
            }
            Command::ToggleMute => {
                self.player.toggle_mute();
                self.player_response()
            }
            Command::Goal(step) => {
                match step {
                    Step::Next => self.goals.next(),
                    Step::Prev => self.goals.prev(),
                }
                Response::Show(render::goal_line(&self.goals))
            }
            Command::Win(WinCommand::Step(step)) => {
                match step {
                    Step::Next => self.wins.next(),
                    Step::Prev => self.wins.prev(),
                }
                Response::Show(render::win_line(&self.wins))
            }
            Command::Win(WinCommand::Add(Some(text))) => {
                self.wins.open_form();
                self.wins.set_draft(text);
                self.submit_draft().await
            }
            Command::Win(WinCommand::Add(None)) => {
                self.wins.open_form();
                Response::Show("New win (press enter to add, `win cancel` to stop):".into())
            }
            Command::Win(WinCommand::Cancel) => {
                if self.wins.is_form_open() {
                    self.wins.close_form();
                    Response::Show("Discarded.".into())
                } else {
                    Response::Show("No win in progress.".into())
                }
            }
            Command::Status => Response::Show(self.status()),
            Command::Help => Response::Show(render::HELP.into()),
            Command::Quit => Response::Quit,
        };

        self.log_player_events();
        response
    }

    /// Advance the collection a timer fired for
    ///
    /// Returns the refreshed panel line, or `None` for a tick left over from
    /// before the timer was last re-armed or cancelled.
    pub fn on_tick(&mut self, tick: RotationTick) -> Option<String> {
        let timer = match tick.target {
            RotationTarget::Goals => &self.goal_timer,
            RotationTarget::Affirmations => &self.win_timer,
        };
        if !timer.is_current(&tick) {
            debug!(target = ?tick.target, generation = tick.generation, "Dropping stale tick");
            return None;
        }

        let line = match tick.target {
            RotationTarget::Goals => {
                self.goals.next();
                debug!(index = ?self.goals.index(), "Goal slideshow advanced");
                render::goal_line(&self.goals)
            }
            RotationTarget::Affirmations => {
                self.wins.next();
                debug!(index = ?self.wins.carousel().index(), "Past successes advanced");
                render::win_line(&self.wins)
            }
        };
        Some(line)
    }

    /// Check the media element for end of track
    pub fn poll_media(&mut self) -> Option<String> {
        if !self.player.poll_ended() {
            return None;
        }
        self.log_player_events();
        Some(format!(
            "{} finished. {}",
            self.player.selected_track().label,
            render::player_line(&self.player)
        ))
    }

    /// Stop timers and audio
    pub fn shutdown(&mut self) {
        self.goal_timer.cancel();
        self.win_timer.cancel();
        self.player.pause();
        self.log_player_events();
        info!("Dashboard stopped");
    }

    async fn submit_draft(&mut self) -> Response {
        match self.wins.submit().await {
            SubmitOutcome::Added(win) => {
                self.win_timer.rearm(self.wins.len());
                Response::Show(format!("Added: {}", win.text))
            }
            SubmitOutcome::Rejected => Response::Show(DRAFT_HINT.into()),
        }
    }

    fn player_result(
        &mut self,
        op: impl FnOnce(&mut TonePlayer) -> motive_playback::Result<()>,
    ) -> Response {
        match op(&mut self.player) {
            Ok(()) => self.player_response(),
            Err(e) => Response::Show(format!("{e}. {}", render::player_line(&self.player))),
        }
    }

    fn player_response(&self) -> Response {
        Response::Show(render::player_line(&self.player))
    }

    fn log_player_events(&mut self) {
        for event in self.player.drain_events() {
            debug!(event = %render::event_line(&event), "Player event");
        }
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("player", &self.player)
            .field("goals", &self.goals.len())
            .field("wins", &self.wins.len())
            .finish_non_exhaustive()
    }
}
