// SPDX-License-Identifier: MPL-2.0
//! Gallery viewer component encapsulating session state and message handling.
//!
//! The viewer is closed until [`State::open`] receives a [`ProjectRecord`].
//! While open it owns the slideshow position, the info panel flag, the slide
//! transition and the background scroll claim. Closing drops all of them at
//! once, whatever the transition is doing.
//!
//! Navigation (`Next`, `Previous`, `JumpTo`) is dropped, not queued, while a
//! transition runs or the info panel is open.

use super::info_panel;
use super::input;
use super::navigation::{Direction, Slideshow};
use super::pane;
use super::scroll_lock::{ScrollGuard, ScrollLock};
use super::transition::{Transition, FRAME_INTERVAL};
use crate::catalog::ProjectRecord;
use crate::error::GalleryError;
use crate::i18n::I18n;
use iced::{event, time, Element, Subscription};
use std::path::Path;
use std::time::{Duration, Instant};

/// Environment information required to render the viewer.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    /// Directory image references are resolved against.
    pub image_root: &'a Path,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Next,
    Previous,
    JumpTo(usize),
    ToggleInfo,
    /// Escape: closes the info panel if open, otherwise the viewer.
    Cancel,
    Close,
    Tick(Instant),
}

/// Side effects the application should perform after handling a viewer message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Navigated { index: usize, direction: Direction },
    InfoPanelToggled(bool),
    Closed,
}

/// Observable state of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Viewing,
    InfoVisible,
}

/// Everything that exists only while the viewer is open.
#[derive(Debug)]
struct Session {
    record: ProjectRecord,
    slideshow: Slideshow,
    info_panel_open: bool,
    transition: Transition,
    _scroll: ScrollGuard,
}

#[derive(Debug)]
pub struct State {
    session: Option<Session>,
    scroll_lock: ScrollLock,
    transition_duration: Duration,
}

impl State {
    /// Creates a closed viewer sharing `scroll_lock` with the rest of the app.
    pub fn new(scroll_lock: ScrollLock, transition_duration: Duration) -> Self {
        Self {
            session: None,
            scroll_lock,
            transition_duration,
        }
    }

    /// Opens the viewer on `record`, starting at its first image.
    ///
    /// Reopening replaces the current session. Fails without touching the
    /// current session when the record has no images, and fails when another
    /// viewer holds the scroll lock.
    pub fn open(&mut self, record: ProjectRecord) -> Result<(), GalleryError> {
        let slideshow = Slideshow::new(record.images.len()).ok_or(
            GalleryError::EmptyImageList {
                project_id: record.id,
            },
        )?;

        // Release our own claim before taking a fresh one.
        self.session = None;
        let guard = self
            .scroll_lock
            .try_acquire()
            .ok_or(GalleryError::ScrollLockHeld)?;

        tracing::debug!(
            project = record.id,
            images = slideshow.len(),
            "gallery opened"
        );
        self.session = Some(Session {
            record,
            slideshow,
            info_panel_open: false,
            transition: Transition::Idle,
            _scroll: guard,
        });
        Ok(())
    }

    /// Closes the viewer. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                tracing::debug!(project = session.record.id, "gallery closed");
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match &self.session {
            None => Phase::Closed,
            Some(session) if session.info_panel_open => Phase::InfoVisible,
            Some(_) => Phase::Viewing,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn record(&self) -> Option<&ProjectRecord> {
        self.session.as_ref().map(|session| &session.record)
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.session
            .as_ref()
            .map(|session| session.slideshow.index())
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.session
            .as_ref()
            .map_or(0, |session| session.slideshow.len())
    }

    /// Direction of the last accepted navigation in this session.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.session
            .as_ref()
            .map_or(Direction::None, |session| session.slideshow.direction())
    }

    #[must_use]
    pub fn is_info_panel_open(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.info_panel_open)
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.transition.is_running())
    }

    #[must_use]
    pub fn transition(&self) -> Transition {
        self.session
            .as_ref()
            .map_or(Transition::Idle, |session| session.transition)
    }

    /// Completes a running transition immediately.
    pub fn finish_transition(&mut self) {
        if let Some(session) = &mut self.session {
            session.transition.finish();
        }
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Next => self.navigate(Instant::now(), Slideshow::next),
            Message::Previous => self.navigate(Instant::now(), Slideshow::previous),
            Message::JumpTo(target) => self.jump_to(target, Instant::now()),
            Message::ToggleInfo => self.toggle_info(),
            Message::Cancel => self.cancel(),
            Message::Close => {
                if self.close() {
                    Effect::Closed
                } else {
                    Effect::None
                }
            }
            Message::Tick(now) => {
                let duration = self.transition_duration;
                if let Some(session) = &mut self.session {
                    if session.transition.tick(now, duration) {
                        tracing::trace!(index = session.slideshow.index(), "transition finished");
                    }
                }
                Effect::None
            }
        }
    }

    /// Keyboard input while open, plus frame ticks while a transition runs.
    pub fn subscription(&self) -> Subscription<Message> {
        let Some(session) = &self.session else {
            return Subscription::none();
        };

        let keyboard = event::listen_with(input::map_event);
        if session.transition.is_running() {
            Subscription::batch([keyboard, time::every(FRAME_INTERVAL).map(Message::Tick)])
        } else {
            keyboard
        }
    }

    /// Renders the open viewer, or `None` while closed.
    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Option<Element<'a, Message>> {
        let session = self.session.as_ref()?;

        let slide = pane::Slide {
            record: &session.record,
            index: session.slideshow.index(),
            count: session.slideshow.len(),
            direction: session.transition.direction(),
            progress: session.transition.progress(),
            navigation_enabled: !session.info_panel_open,
        };
        let info = session
            .info_panel_open
            .then(|| info_panel::InfoSheet::from_record(&session.record, env.i18n));

        Some(pane::view(env.i18n, env.image_root, slide, info))
    }

    fn navigation_session(&mut self) -> Option<&mut Session> {
        let session = self.session.as_mut()?;
        if session.info_panel_open {
            tracing::trace!("navigation ignored while info panel is open");
            return None;
        }
        if session.transition.is_running() {
            tracing::trace!("navigation dropped during transition");
            return None;
        }
        Some(session)
    }

    fn navigate(&mut self, now: Instant, step: fn(&mut Slideshow) -> usize) -> Effect {
        let duration = self.transition_duration;
        let Some(session) = self.navigation_session() else {
            return Effect::None;
        };
        let before = session.slideshow.index();
        let index = step(&mut session.slideshow);
        if index == before {
            // Single image: nothing to slide in.
            return Effect::None;
        }
        Self::accepted(session, index, now, duration)
    }

    fn jump_to(&mut self, target: usize, now: Instant) -> Effect {
        let duration = self.transition_duration;
        let Some(session) = self.navigation_session() else {
            return Effect::None;
        };
        match session.slideshow.jump_to(target) {
            Some(index) => Self::accepted(session, index, now, duration),
            None => Effect::None,
        }
    }

    fn accepted(session: &mut Session, index: usize, now: Instant, duration: Duration) -> Effect {
        let direction = session.slideshow.direction();
        if !duration.is_zero() {
            session.transition = Transition::begin(direction, now);
        }
        Effect::Navigated { index, direction }
    }

    fn toggle_info(&mut self) -> Effect {
        match &mut self.session {
            Some(session) => {
                session.info_panel_open = !session.info_panel_open;
                Effect::InfoPanelToggled(session.info_panel_open)
            }
            None => Effect::None,
        }
    }

    fn cancel(&mut self) -> Effect {
        if let Some(session) = self.session.as_mut().filter(|s| s.info_panel_open) {
            session.info_panel_open = false;
            return Effect::InfoPanelToggled(false);
        }
        if self.close() {
            Effect::Closed
        } else {
            Effect::None
        }
    }
}
