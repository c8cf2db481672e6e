//! The quiz session state machine.
//!
//! The session is an explicit value: every host event is folded through
//! [`Session::handle`], which consumes the current session and returns the
//! next one plus the side-effect [`Command`]s the host should run. Nothing
//! here touches a map, a DOM or a clock; events carry the host's clock
//! reading where one is needed.

mod command;
mod event;
pub mod view;

pub use command::{
    verdict_color, Command, MarkerAnimation, MarkerStyle, OverlayStyle, Panel, TextTarget,
    CORRECT_COLOR, INCORRECT_COLOR,
};
pub use event::Event;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::analysis::contains::Contains;
use crate::error::ConfigError;
use crate::geometry::latlng::LatLng;
use crate::region::{catalog, Extent, Region};

/// Seconds between recording an answer and advancing to the next landmark.
pub const ADVANCE_DELAY_SECS: u64 = 2;

/// Where the session is within one game.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Tsify)]
#[serde(tag = "kind")]
pub enum Phase {
    /// Waiting for the player to double-click an answer.
    Question,
    /// Answer recorded; a deferred advance is in flight.
    Feedback,
    /// All landmarks exhausted.
    Complete,
}

/// One game in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
pub struct Session {
    pub regions: Vec<Region>,
    pub current: usize,
    pub correct: usize,
    /// Host clock reading (whole seconds) when this game started.
    pub started_at: u64,
    /// Bumped on every reset; stale deferred advances carry an older value.
    pub generation: u64,
    pub phase: Phase,
    /// Last persisted best time, for display only.
    pub high_score: Option<u64>,
}

/// The result of folding one event through the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
pub struct Transition {
    pub session: Session,
    pub commands: Vec<Command>,
}

impl Session {
    /// Validate the region list and start a new game.
    pub fn new(
        regions: Vec<Region>,
        high_score: Option<u64>,
        now: u64,
    ) -> Result<Transition, ConfigError> {
        catalog::validate(&regions)?;
        let session = Session {
            regions,
            current: 0,
            correct: 0,
            started_at: now,
            generation: 0,
            phase: Phase::Question,
            high_score,
        };
        let commands = session.start_commands();
        Ok(Transition { session, commands })
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn score(&self) -> usize {
        self.correct
    }

    pub fn elapsed(&self, now: u64) -> u64 {
        now.saturating_sub(self.started_at)
    }

    fn current_region(&self) -> &Region {
        &self.regions[self.current]
    }

    /// Fold one host event through the session.
    pub fn handle(self, event: Event) -> Transition {
        match event {
            Event::MapReady => self.map_ready(),
            Event::ViewFitted { zoom } => self.view_fitted(zoom),
            Event::DoubleClick { point, now } => self.double_click(point, now),
            Event::Tick { now } => self.tick(now),
            Event::AdvanceDue { generation, now } => self.advance_due(generation, now),
            Event::PlayAgain { now } => self.play_again(now),
        }
    }

    fn map_ready(self) -> Transition {
        let commands = vec![Command::FitView {
            bounds: view::fit_bounds(&self.regions),
            padding: view::VIEW_PADDING_PX,
        }];
        Transition {
            session: self,
            commands,
        }
    }

    fn view_fitted(self, zoom: f64) -> Transition {
        let commands = vec![Command::LockView {
            center: view::centroid(&self.regions),
            zoom: view::lock_zoom(zoom),
        }];
        Transition {
            session: self,
            commands,
        }
    }

    fn double_click(mut self, point: LatLng, now: u64) -> Transition {
        if self.phase != Phase::Question {
            debug!("ignoring double-click at {} during {:?}", point, self.phase);
            return Transition {
                session: self,
                commands: vec![],
            };
        }
        let region = self.current_region().clone();
        let correct = region.contains(&point);
        info!(
            "{}: {} at {} ({}s in)",
            region.name,
            if correct { "hit" } else { "miss" },
            point,
            self.elapsed(now)
        );
        if correct {
            self.correct += 1;
        }
        let mut commands = vec![
            Command::DrawMarker {
                at: point,
                style: MarkerStyle::answer(correct),
            },
            Command::DrawMarker {
                at: region.center(),
                style: MarkerStyle::target(correct),
            },
            Self::overlay(&region, correct),
            Command::SetText {
                target: TextTarget::Feedback,
                text: feedback_text(correct).into(),
            },
            Command::ShowPanel {
                panel: Panel::Feedback,
            },
        ];
        if correct {
            commands.push(Command::SetText {
                target: TextTarget::Score,
                text: self.correct.to_string(),
            });
        }
        commands.push(Command::ScheduleAdvance {
            after_secs: ADVANCE_DELAY_SECS,
            generation: self.generation,
        });
        self.phase = Phase::Feedback;
        Transition {
            session: self,
            commands,
        }
    }

    /// The target overlay: rotated extents render as polygons, everything
    /// else as an axis-aligned rectangle.
    fn overlay(region: &Region, correct: bool) -> Command {
        let style = OverlayStyle::verdict(correct);
        match region.extent() {
            Extent::Quad { rotation, .. } if rotation != 0. => {
                let mut vertices = region.corners().to_vec();
                vertices.push(vertices[0]);
                Command::DrawPolygon { vertices, style }
            }
            _ => Command::DrawRectangle {
                bounds: region.bounds(),
                style,
            },
        }
    }

    fn advance_due(mut self, generation: u64, now: u64) -> Transition {
        if generation != self.generation || self.phase != Phase::Feedback {
            debug!(
                "ignoring advance (generation {} vs {}, {:?})",
                generation, self.generation, self.phase
            );
            return Transition {
                session: self,
                commands: vec![],
            };
        }
        self.current += 1;
        if self.current >= self.regions.len() {
            return self.finish(now);
        }
        self.phase = Phase::Question;
        let commands = vec![
            Command::ClearOverlays,
            Command::HidePanel {
                panel: Panel::Feedback,
            },
            Command::SetText {
                target: TextTarget::LocationName,
                text: self.current_region().name.clone(),
            },
        ];
        Transition {
            session: self,
            commands,
        }
    }

    fn finish(mut self, now: u64) -> Transition {
        self.phase = Phase::Complete;
        let seconds = self.elapsed(now);
        let incorrect = self.regions.len() - self.correct;
        info!(
            "game over: {}/{} in {}s",
            self.correct,
            self.regions.len(),
            seconds
        );
        let commands = vec![
            Command::SetText {
                target: TextTarget::FinalScore,
                text: format!("{} Correct, {} Incorrect", self.correct, incorrect),
            },
            Command::SetText {
                target: TextTarget::FinalTime,
                text: format!("Time: {} seconds", seconds),
            },
            Command::ShowPanel {
                panel: Panel::GameOver,
            },
            Command::RecordTime { seconds },
        ];
        Transition {
            session: self,
            commands,
        }
    }

    fn tick(self, now: u64) -> Transition {
        if self.is_complete() {
            return Transition {
                session: self,
                commands: vec![],
            };
        }
        let commands = vec![Command::SetText {
            target: TextTarget::Timer,
            text: self.elapsed(now).to_string(),
        }];
        Transition {
            session: self,
            commands,
        }
    }

    fn play_again(mut self, now: u64) -> Transition {
        self.current = 0;
        self.correct = 0;
        self.started_at = now;
        self.generation += 1;
        self.phase = Phase::Question;
        let commands = self.start_commands();
        Transition {
            session: self,
            commands,
        }
    }

    /// Display and overlay reset emitted at game start and on replay.
    fn start_commands(&self) -> Vec<Command> {
        vec![
            Command::ClearOverlays,
            Command::SetText {
                target: TextTarget::Score,
                text: "0".into(),
            },
            Command::SetText {
                target: TextTarget::Timer,
                text: "0".into(),
            },
            Command::SetText {
                target: TextTarget::HighScore,
                text: self
                    .high_score
                    .map_or_else(|| "--".into(), |s| s.to_string()),
            },
            Command::HidePanel {
                panel: Panel::GameOver,
            },
            Command::HidePanel {
                panel: Panel::Feedback,
            },
            Command::SetText {
                target: TextTarget::LocationName,
                text: self.current_region().name.clone(),
            },
        ]
    }
}

fn feedback_text(correct: bool) -> &'static str {
    if correct {
        "Your answer is correct!!"
    } else {
        "Sorry wrong location."
    }
}

#[cfg(test)]
mod tests;
