// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the pages and the
//! gallery viewer.
//!
//! The `App` struct wires together the domains (catalog, localization,
//! gallery, contact form) and translates their events into side effects
//! such as config persistence, opening a project or posting an enquiry.

mod external;
mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::Catalog;
use crate::config::{self, Config};
use crate::contact;
use crate::gallery::{self, ScrollLock};
use crate::i18n::I18n;
use crate::ui::{about, contact as contact_page, footer, header, home, media, notifications};
use iced::widget::scrollable::{RelativeOffset, Viewport};
use iced::widget::{opaque, operation, scrollable, Column, Container, Id, Stack};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 900.0;
pub const MIN_WINDOW_HEIGHT: f32 = 640.0;

const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    config: Config,
    /// Explicit config directory from [`Flags`], used for every save.
    config_dir: Option<PathBuf>,
    screen: Screen,
    catalog: Catalog,
    image_root: PathBuf,
    scroll_lock: ScrollLock,
    /// Page position to restore once the viewer releases the scroll lock.
    page_offset: RelativeOffset,
    gallery: gallery::State,
    contact: contact_page::State,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("locale", &self.i18n.current_locale())
            .field("gallery_open", &self.gallery.is_open())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config, translations and the catalog, and reports any load
    /// problem as a toast.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        let i18n = I18n::new(flags.lang.as_deref(), &config);
        let image_root = flags.image_root.unwrap_or_else(|| config.image_root());

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(notifications::Notification::warning(key));
        }

        let catalog = Catalog::embedded().unwrap_or_else(|error| {
            tracing::error!(%error, "project catalog unavailable");
            notifications.push(notifications::Notification::error(
                "notification-catalog-error",
            ));
            Catalog::default()
        });

        let scroll_lock = ScrollLock::new();
        let gallery = gallery::State::new(scroll_lock.clone(), config.transition_duration());

        tracing::info!(
            locale = %i18n.current_locale(),
            projects = catalog.len(),
            image_root = %image_root.display(),
            "application started"
        );

        let app = App {
            i18n,
            config,
            config_dir: flags.config_dir,
            screen: Screen::default(),
            catalog,
            image_root,
            scroll_lock,
            page_offset: RelativeOffset::START,
            gallery,
            contact: contact_page::State::default(),
            notifications,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.gallery.record() {
            Some(record) => format!("{} - {}", record.title, self.i18n.tr("window-title")),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_gallery_subscription(&self.gallery),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(message) => {
                match header::update(message, self.i18n.current_locale()) {
                    header::Event::None => Task::none(),
                    header::Event::Navigate(screen) => self.switch_screen(screen),
                    header::Event::SelectLocale(locale) => {
                        persistence::apply_language_change(
                            &mut self.i18n,
                            &mut self.config,
                            self.config_dir.clone(),
                            locale,
                        );
                        Task::none()
                    }
                }
            }
            Message::Home(message) => match home::update(message) {
                home::Event::OpenProject(id) => {
                    self.open_project(id);
                    Task::none()
                }
            },
            Message::About(message) => match about::update(&message) {
                about::Event::OpenContact => self.switch_screen(Screen::Contact),
            },
            Message::Media(message) => {
                if let media::Event::OpenUrl(url) = media::update(message) {
                    external::open_url(&url);
                }
                Task::none()
            }
            Message::Contact(message) => match self.contact.update(message) {
                contact_page::Event::None => Task::none(),
                contact_page::Event::OpenUrl(url) => {
                    external::open_url(&url);
                    Task::none()
                }
                contact_page::Event::Submit(request) => Task::perform(
                    contact::submit(
                        self.config.contact_endpoint(),
                        self.config.contact_timeout(),
                        request,
                    ),
                    |result| Message::Contact(contact_page::Message::Submitted(result)),
                ),
            },
            Message::Gallery(message) => self.handle_gallery_message(message),
            Message::Notification(message) => {
                self.notifications.handle_message(message);
                Task::none()
            }
            Message::PageScrolled(offset) => {
                self.page_offset = offset;
                Task::none()
            }
        }
    }

    fn switch_screen(&mut self, screen: Screen) -> Task<Message> {
        if self.screen == screen {
            return Task::none();
        }
        self.screen = screen;
        self.page_offset = RelativeOffset::START;
        operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), RelativeOffset::START)
    }

    fn open_project(&mut self, id: u32) {
        let Some(record) = self.catalog.record(id, &self.i18n) else {
            tracing::warn!(project_id = id, "project not in catalog");
            self.notifications
                .push(notifications::Notification::error("viewer-open-missing"));
            return;
        };

        match self.gallery.open(record) {
            Ok(()) => tracing::debug!(project_id = id, "viewer opened"),
            Err(error) => {
                tracing::warn!(project_id = id, %error, "viewer refused to open");
                self.notifications
                    .push(notifications::Notification::error(error.i18n_key()));
            }
        }
    }

    fn handle_gallery_message(&mut self, message: gallery::Message) -> Task<Message> {
        match self.gallery.handle_message(message) {
            gallery::Effect::None => Task::none(),
            gallery::Effect::Navigated { index, direction } => {
                tracing::debug!(index, ?direction, "viewer navigated");
                Task::none()
            }
            gallery::Effect::InfoPanelToggled(open) => {
                tracing::debug!(open, "viewer info panel toggled");
                Task::none()
            }
            gallery::Effect::Closed => {
                tracing::debug!("viewer closed");
                operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), self.page_offset)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let i18n = &self.i18n;

        let page: Element<'_, Message> = match self.screen {
            Screen::Home => home::view(home::ViewContext {
                i18n,
                catalog: &self.catalog,
                image_root: &self.image_root,
            })
            .map(Message::Home),
            Screen::About => about::view(about::ViewContext { i18n }).map(Message::About),
            Screen::Media => media::view(media::ViewContext { i18n }).map(Message::Media),
            Screen::Contact => self
                .contact
                .view(contact_page::ViewContext { i18n })
                .map(Message::Contact),
        };

        let body = Column::new()
            .push(page)
            .push(footer::view(i18n))
            .width(Length::Fill);

        // No scrollable while the viewer holds the lock, so the page under
        // it cannot move.
        let body: Element<'_, Message> = if self.scroll_lock.is_held() {
            Container::new(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .clip(true)
                .into()
        } else {
            scrollable(body)
                .id(Id::new(PAGE_SCROLLABLE_ID))
                .on_scroll(|viewport: Viewport| Message::PageScrolled(viewport.relative_offset()))
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        };

        let base = Column::new()
            .push(
                header::view(header::ViewContext {
                    i18n,
                    screen: self.screen,
                })
                .map(Message::Header),
            )
            .push(body)
            .width(Length::Fill)
            .height(Length::Fill);

        let mut layers = Stack::new()
            .push(base)
            .width(Length::Fill)
            .height(Length::Fill);

        if let Some(viewer) = self.gallery.view(gallery::ViewEnv {
            i18n,
            image_root: &self.image_root,
        }) {
            layers = layers.push(opaque(viewer.map(Message::Gallery)));
        }

        layers
            .push(notifications::view_overlay(&self.notifications, i18n).map(Message::Notification))
            .into()
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    #[must_use]
    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    #[must_use]
    pub fn is_page_scroll_locked(&self) -> bool {
        self.scroll_lock.is_held()
    }

    pub fn notifications(&self) -> impl Iterator<Item = &notifications::Notification> {
        self.notifications.visible()
    }
}
