// SPDX-License-Identifier: MPL-2.0
//! Contact page: studio details and the enquiry form.
//!
//! The form owns its field values and submission status; the actual request
//! is run by the application as an async task and its result fed back as
//! [`Message::Submitted`].

use crate::contact::{ContactRequest, ProjectType};
use crate::error::ContactError;
use crate::i18n::I18n;
use crate::ui::components::{self, error_display::ErrorDisplay};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, pick_list, text_editor, text_input, Column, Row, Text};
use iced::{Element, Length};
use std::fmt;

pub const STUDIO_EMAIL: &str = "karakayaceylin@gmail.com";

#[must_use]
pub fn mailto_url() -> String {
    format!("mailto:{STUDIO_EMAIL}")
}

const SERVICES: [&str; 5] = [
    "contact-service1",
    "contact-service2",
    "contact-service3",
    "contact-service4",
    "contact-service5",
];

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(ContactError),
}

#[derive(Default)]
pub struct State {
    name: String,
    email: String,
    project_type: Option<ProjectType>,
    message: text_editor::Content,
    status: Status,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    ProjectTypeSelected(ProjectType),
    MessageEdited(text_editor::Action),
    Submit,
    Submitted(Result<String, ContactError>),
    SendAnother,
    OpenEmail,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// A validated request is ready to be posted.
    Submit(ContactRequest),
    OpenUrl(String),
}

/// Contextual data needed to render the contact page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Pick list entry carrying its translated label.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ProjectTypeOption {
    kind: ProjectType,
    label: String,
}

impl fmt::Display for ProjectTypeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("status", &self.status)
            .field("project_type", &self.project_type)
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    fn request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            project_type: self.project_type,
            message: self.message.text(),
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameChanged(value) => self.name = value,
            Message::EmailChanged(value) => self.email = value,
            Message::ProjectTypeSelected(kind) => self.project_type = Some(kind),
            Message::MessageEdited(action) => self.message.perform(action),
            Message::Submit => {
                if self.status == Status::Sending {
                    return Event::None;
                }
                return match self.request().validate() {
                    Ok(request) => {
                        self.status = Status::Sending;
                        Event::Submit(request)
                    }
                    Err(error) => {
                        self.status = Status::Failed(error);
                        Event::None
                    }
                };
            }
            Message::Submitted(Ok(confirmation)) => {
                tracing::info!(%confirmation, "contact request delivered");
                self.reset();
                self.status = Status::Sent;
            }
            Message::Submitted(Err(error)) => self.status = Status::Failed(error),
            Message::SendAnother => self.reset(),
            Message::OpenEmail => return Event::OpenUrl(mailto_url()),
        }
        Event::None
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let form = if self.status == Status::Sent {
            self.view_sent(i18n)
        } else {
            self.view_form(i18n)
        };

        components::page(
            Row::new()
                .spacing(spacing::SECTION)
                .push(view_details(i18n))
                .push(form),
        )
    }

    fn view_form<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let sending = self.status == Status::Sending;

        let field = |label_key: &str, input: Element<'a, Message>| -> Element<'a, Message> {
            Column::new()
                .spacing(spacing::XS)
                .push(components::eyebrow(i18n.tr(label_key)))
                .push(input)
                .into()
        };

        let name = text_input(&i18n.tr("contact-form-name-placeholder"), &self.name)
            .on_input_maybe((!sending).then_some(Message::NameChanged))
            .padding(spacing::SM)
            .size(typography::BODY);

        let email = text_input(&i18n.tr("contact-form-email-placeholder"), &self.email)
            .on_input_maybe((!sending).then_some(Message::EmailChanged))
            .padding(spacing::SM)
            .size(typography::BODY);

        let options: Vec<ProjectTypeOption> = ProjectType::ALL
            .iter()
            .map(|kind| ProjectTypeOption {
                kind: *kind,
                label: i18n.tr(kind.i18n_key()),
            })
            .collect();
        let selected = options
            .iter()
            .find(|opt| Some(opt.kind) == self.project_type)
            .cloned();
        let project_type = pick_list(options, selected, |opt| {
            Message::ProjectTypeSelected(opt.kind)
        })
        .placeholder(i18n.tr("contact-form-select-type"))
        .padding(spacing::SM)
        .width(Length::Fill);

        let message = text_editor(&self.message)
            .placeholder(i18n.tr("contact-form-message-placeholder"))
            .on_action(Message::MessageEdited)
            .padding(spacing::SM)
            .height(180.0);

        let submit_label = if sending {
            i18n.tr("contact-form-sending")
        } else {
            i18n.tr("contact-form-send")
        };
        let submit = button(Text::new(submit_label).size(typography::BODY))
            .padding([spacing::SM, spacing::XL])
            .style(styles::button::primary)
            .on_press_maybe((!sending).then_some(Message::Submit));

        let mut form = Column::new()
            .spacing(spacing::LG)
            .width(Length::Fill)
            .max_width(sizing::FORM_MAX_WIDTH)
            .push(field("contact-form-name", name.into()))
            .push(field("contact-form-email", email.into()))
            .push(field("contact-form-project-type", project_type.into()))
            .push(field("contact-form-message", message.into()));

        if let Status::Failed(error) = &self.status {
            form = form.push(
                ErrorDisplay::new(palette::ERROR_500)
                    .message(i18n.tr(error.i18n_key()))
                    .details(error.detail())
                    .view(),
            );
        }

        form.push(submit).into()
    }

    fn view_sent<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        Column::new()
            .spacing(spacing::MD)
            .width(Length::Fill)
            .max_width(sizing::FORM_MAX_WIDTH)
            .push(Text::new(i18n.tr("contact-success-title")).size(typography::TITLE_LG))
            .push(
                Text::new(i18n.tr("contact-success-message"))
                    .size(typography::BODY_LG)
                    .color(palette::GRAY_700),
            )
            .push(
                button(Text::new(i18n.tr("contact-success-another")).size(typography::BODY))
                    .padding(0)
                    .style(styles::button::link(true))
                    .on_press(Message::SendAnother),
            )
            .into()
    }
}

fn view_details<'a>(i18n: &I18n) -> Element<'a, Message> {
    let services = SERVICES.iter().fold(Column::new().spacing(spacing::XS), |column, key| {
        column.push(Text::new(i18n.tr(key)).size(typography::BODY))
    });

    let block = |label_key: &str, body: Element<'a, Message>| -> Element<'a, Message> {
        Column::new()
            .spacing(spacing::XS)
            .push(components::eyebrow(i18n.tr(label_key)))
            .push(body)
            .into()
    };

    Column::new()
        .spacing(spacing::XL)
        .width(Length::FillPortion(1))
        .push(components::eyebrow(i18n.tr("contact-label")))
        .push(
            Column::new()
                .push(Text::new(i18n.tr("contact-title")).size(typography::DISPLAY))
                .push(
                    Text::new(i18n.tr("contact-title-line2"))
                        .size(typography::DISPLAY)
                        .color(palette::GRAY_500),
                ),
        )
        .push(block(
            "contact-email",
            button(Text::new(STUDIO_EMAIL).size(typography::BODY_LG))
                .padding(0)
                .style(styles::button::link(true))
                .on_press(Message::OpenEmail)
                .into(),
        ))
        .push(block(
            "contact-based-in",
            Text::new(i18n.tr("contact-location"))
                .size(typography::BODY_LG)
                .into(),
        ))
        .push(block("contact-services", services.into()))
        .into()
}
