//! Contact form: field validation and the submission state machine.
//!
//! ```text
//!            submit            all valid            latency
//!   Idle ─────────────▶ Validating ─────▶ Submitting ───────▶ Success
//!    ▲  ▲                    │                 │                  │
//!    │  └──── any invalid ───┘                 │ transport error  │ banner timeout
//!    │                                         ▼                  │
//!    │                                      Failed ───submit───▶ Validating
//!    └────────────────────────────────────────────────────────────┘
//! ```
//!
//! A submit while Success (or Failed) starts a new cycle: the previous
//! cycle's banner timer is cancelled before anything else happens.

mod fields;
mod transport;

pub use fields::{FieldId, FieldSpec, ValidationError, contact_fields, validate_all};
pub use transport::{ContactMessage, SimulatedTransport, SubmitError, SubmitTransport};

use folio::prelude::*;
use log::{debug, info, warn};

use crate::config::ContactConfig;

pub const FORM_ID: &str = "contactForm";
pub const SUCCESS_ID: &str = "formSuccess";

pub const SUCCESS_MESSAGE: &str =
    "✓ Thank you! Your message has been sent successfully. I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Sorry, your message could not be sent. Please try again.";
pub const SENDING_LABEL: &str = "Sending...";

const DELIVER: u32 = 1;
const HIDE_BANNER: u32 = 2;

/// Where the form is in its submission cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    /// Delivery failed; the form is idle again with the error on display.
    Failed(SubmitError),
}

/// The contact form behavior.
pub struct ContactForm {
    fields: [FieldSpec; 4],
    config: ContactConfig,
    transport: Box<dyn SubmitTransport>,
    status: State<SubmissionState>,
    submit_button: Option<String>,
    original_label: String,
    in_flight: Option<ContactMessage>,
    /// The one timer of the current cycle (delivery or banner hide).
    pending: Option<TimerHandle>,
    active: bool,
}

impl ContactForm {
    pub fn new(config: &ContactConfig) -> Self {
        Self {
            fields: contact_fields(config.message_min_length),
            config: config.clone(),
            transport: Box::new(SimulatedTransport),
            status: State::new(SubmissionState::Idle),
            submit_button: None,
            original_label: String::new(),
            in_flight: None,
            pending: None,
            active: false,
        }
    }

    /// Deliver through `transport` instead of the simulated backend.
    pub fn with_transport(mut self, transport: impl SubmitTransport + 'static) -> Self {
        self.transport = Box::new(transport);
        self
    }

    /// Observable handle on the submission state.
    pub fn status(&self) -> State<SubmissionState> {
        self.status.clone()
    }

    fn spec(&self, id: &str) -> Option<FieldSpec> {
        let field = FieldId::from_id(id)?;
        self.fields.iter().copied().find(|spec| spec.id == field)
    }

    fn transition(&self, next: SubmissionState) {
        let previous = self.status.replace(next.clone());
        debug!("Contact form: {:?} -> {:?}", previous, next);
    }

    fn submit(&mut self, cx: &mut Context<'_>) {
        if self.status.get() == SubmissionState::Submitting {
            debug!("Submit ignored, a submission is already in flight");
            return;
        }

        if let Some(handle) = self.pending.take() {
            cx.cancel_timeout(handle);
            debug!("Cancelled pending timer of the previous cycle");
        }
        hide_banner(cx.document_mut());

        self.transition(SubmissionState::Validating);
        let result = validate_all(&self.fields, cx.document_mut());
        if let ValidationResult::Invalid(errors) = &result {
            debug!("Submission blocked by {} invalid field(s)", errors.len());
            self.transition(SubmissionState::Idle);
            return;
        }

        self.in_flight = Some(collect(cx.document()));
        if let Some(button) = self.button(cx.document_mut()) {
            self.original_label = button.text.clone();
            button.set_text(SENDING_LABEL);
            button.set_disabled(true);
        }
        self.pending = Some(cx.set_timeout(self.config.submit_latency(), DELIVER));
        self.transition(SubmissionState::Submitting);
    }

    fn deliver(&mut self, cx: &mut Context<'_>) {
        let Some(message) = self.in_flight.take() else {
            warn!("Delivery timer fired without a message in flight");
            return;
        };

        let outcome = self.transport.send(&message);

        let label = std::mem::take(&mut self.original_label);
        if let Some(button) = self.button(cx.document_mut()) {
            button.set_text(label);
            button.set_disabled(false);
        }

        match outcome {
            Ok(()) => {
                info!("Contact message sent");
                show_banner(cx.document_mut(), SUCCESS_MESSAGE, false);
                for spec in &self.fields {
                    spec.id.input().reset(cx.document_mut());
                }
                self.pending = Some(cx.set_timeout(self.config.banner_timeout(), HIDE_BANNER));
                self.transition(SubmissionState::Success);
            }
            Err(err) => {
                warn!("Contact message not sent: {}", err);
                show_banner(cx.document_mut(), FAILURE_MESSAGE, true);
                self.transition(SubmissionState::Failed(err));
            }
        }
    }

    fn button<'d>(&self, document: &'d mut Document) -> Option<&'d mut Element> {
        self.submit_button
            .as_deref()
            .and_then(|id| document.get_mut(id))
    }
}

impl Component for ContactForm {
    fn name(&self) -> &'static str {
        "contact-form"
    }

    fn on_start(&mut self, cx: &mut Context<'_>) {
        let document = cx.document();
        if let Err(err) = document.require(FORM_ID) {
            warn!("Contact form disabled: {}", err);
            return;
        }
        self.submit_button = document
            .find_within(FORM_ID, |el| {
                el.tag == "button" && el.attribute("type") == Some("submit")
            })
            .map(|el| el.id.clone());
        if self.submit_button.is_none() {
            warn!("Contact form has no submit button");
        }
        self.active = true;
    }

    fn on_event(&mut self, event: &Event, cx: &mut Context<'_>) {
        if !self.active {
            return;
        }
        match event {
            Event::Blur { target } => {
                if let Some(spec) = self.spec(target) {
                    spec.validate(cx.document_mut());
                }
            }
            Event::Input { target, .. } => {
                // Only re-validate once an error is showing
                if let Some(spec) = self.spec(target) {
                    if spec.id.input().has_error(cx.document()) {
                        spec.validate(cx.document_mut());
                    }
                }
            }
            Event::Submit { target } if target == FORM_ID => self.submit(cx),
            _ => {}
        }
    }

    fn on_timer(&mut self, tag: u32, cx: &mut Context<'_>) {
        self.pending = None;
        match tag {
            DELIVER => self.deliver(cx),
            HIDE_BANNER => {
                hide_banner(cx.document_mut());
                self.transition(SubmissionState::Idle);
            }
            _ => {}
        }
    }

    fn on_stop(&mut self, cx: &mut Context<'_>) {
        self.pending = None;
        if self.in_flight.take().is_none() {
            return;
        }
        // Field values stay in place so the visitor can send again
        warn!("Contact form stopped with a message in flight, not sent");
        let label = std::mem::take(&mut self.original_label);
        if let Some(button) = self.button(cx.document_mut()) {
            button.set_text(label);
            button.set_disabled(false);
        }
        self.transition(SubmissionState::Idle);
    }
}

/// Trimmed field values.
fn collect(document: &Document) -> ContactMessage {
    let value = |field: FieldId| field.input().value(document).trim().to_string();
    ContactMessage {
        name: value(FieldId::Name),
        email: value(FieldId::Email),
        subject: value(FieldId::Subject),
        message: value(FieldId::Message),
    }
}

fn show_banner(document: &mut Document, text: &str, is_error: bool) {
    let Some(banner) = document.get_mut(SUCCESS_ID) else {
        return;
    };
    banner.set_text(text);
    let color = if is_error {
        banner.add_class("error");
        "var(--error-color)"
    } else {
        banner.remove_class("error");
        "var(--accent-color)"
    };
    banner.set_style("color", color);
    banner.set_style("display", "block");
}

fn hide_banner(document: &mut Document) {
    if let Some(banner) = document.get_mut(SUCCESS_ID) {
        banner.set_style("display", "none");
        banner.remove_class("error");
    }
}
