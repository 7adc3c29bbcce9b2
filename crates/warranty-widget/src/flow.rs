//! The two-screen registration flow.
//!
//! An explicit state machine replaces the original widget's sequential
//! screen swapping: each screen is a struct owned by one [`Screen`]
//! variant, and the only way to move forward is through the guarded
//! transition methods on [`WarrantyWidget`].

use crate::client::WarrantyBackend;
use crate::error::WidgetError;
use crate::models::ModelSuggestions;
use std::fmt;
use tracing::{info, warn};
use warranty_core::{CodeInput, FieldError, RegistrationDraft, WarrantyCode};

/// Shown when a request never completes.
const NETWORK_ERROR_MESSAGE: &str = "A server error occurred. Please try again in a moment.";

/// Persistent confirmation after a completed registration.
const SUCCESS_MESSAGE: &str = "Your product has been registered. Thank you.";

/// Which screen the widget is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    CodeEntry,
    Registration,
    Submitted,
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScreenId::CodeEntry => "code entry",
            ScreenId::Registration => "registration",
            ScreenId::Submitted => "submitted",
        })
    }
}

/// Code entry screen state.
#[derive(Debug, Clone)]
pub struct CodeEntryScreen {
    /// Editable code field.
    pub input: CodeInput,
    /// Inline error under the field.
    pub error: Option<String>,
    /// False while a verification request is in flight; hosts mirror
    /// this as disabling the input and the submit control.
    pub controls_enabled: bool,
    /// Loading indicator for the in-flight verification.
    pub verifying: bool,
}

impl CodeEntryScreen {
    fn new() -> Self {
        Self {
            input: CodeInput::new(),
            error: None,
            controls_enabled: true,
            verifying: false,
        }
    }
}

impl Default for CodeEntryScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Registration form screen state.
#[derive(Debug, Clone)]
pub struct RegistrationScreen {
    code: WarrantyCode,
    /// Editable form fields.
    pub draft: RegistrationDraft,
    /// Field-level errors from the last submit attempt.
    pub field_errors: Vec<FieldError>,
    /// Banner message from the backend or the network.
    pub error: Option<String>,
    /// Autocomplete source for the product model field.
    pub suggestions: ModelSuggestions,
    /// True while the registration request is in flight.
    pub submitting: bool,
}

impl RegistrationScreen {
    fn new(code: WarrantyCode) -> Self {
        Self {
            code,
            draft: RegistrationDraft::default(),
            field_errors: Vec::new(),
            error: None,
            suggestions: ModelSuggestions::new(),
            submitting: false,
        }
    }

    /// The verified code this form will submit.
    pub fn code(&self) -> &WarrantyCode {
        &self.code
    }
}

/// Terminal screen after a successful registration.
#[derive(Debug, Clone)]
pub struct SubmittedScreen {
    /// Persistent success message; every control stays disabled.
    pub message: String,
}

/// The visible screen.
///
/// Each variant owns its screen state exclusively; a transition replaces
/// the whole value, so stale state from a previous screen cannot leak.
#[derive(Debug)]
pub enum Screen {
    CodeEntry(CodeEntryScreen),
    Registration(RegistrationScreen),
    Submitted(SubmittedScreen),
}

impl Screen {
    pub fn id(&self) -> ScreenId {
        match self {
            Screen::CodeEntry(_) => ScreenId::CodeEntry,
            Screen::Registration(_) => ScreenId::Registration,
            Screen::Submitted(_) => ScreenId::Submitted,
        }
    }
}

/// Drives the registration flow against a backend.
///
/// Every operation takes `&mut self`, so calls never overlap; the
/// in-flight flags on the screens exist for hosts to mirror as control
/// disabling, and are cleared unconditionally when a request completes.
pub struct WarrantyWidget<B> {
    backend: B,
    screen: Screen,
}

impl<B: WarrantyBackend> WarrantyWidget<B> {
    /// Start a fresh flow on the code entry screen.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            screen: Screen::CodeEntry(CodeEntryScreen::new()),
        }
    }

    /// The current screen, for rendering.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_id(&self) -> ScreenId {
        self.screen.id()
    }

    /// Mutable access to the code entry screen while it is visible.
    pub fn code_entry_mut(&mut self) -> Option<&mut CodeEntryScreen> {
        match &mut self.screen {
            Screen::CodeEntry(screen) => Some(screen),
            _ => None,
        }
    }

    /// Mutable access to the registration screen while it is visible.
    pub fn registration_mut(&mut self) -> Option<&mut RegistrationScreen> {
        match &mut self.screen {
            Screen::Registration(screen) => Some(screen),
            _ => None,
        }
    }

    /// Validate the entered code locally, then against the backend.
    ///
    /// Backend success is the only path to the registration screen.
    /// Every failure leaves the code screen editable with its controls
    /// re-enabled and an inline message set.
    pub async fn verify_code(&mut self) -> Result<(), WidgetError> {
        let screen = match &mut self.screen {
            Screen::CodeEntry(screen) => screen,
            other => return Err(WidgetError::WrongScreen(other.id())),
        };
        screen.error = None;

        let code = match WarrantyCode::parse(screen.input.value()) {
            Ok(code) => code,
            Err(e) => {
                screen.error = Some(e.to_string());
                return Err(e.into());
            }
        };

        screen.controls_enabled = false;
        screen.verifying = true;
        let result = self.backend.verify_code(&code).await;
        screen.verifying = false;
        screen.controls_enabled = true;

        match result {
            Ok(()) => {
                info!(code = %code, "warranty code verified");
                self.screen = Screen::Registration(RegistrationScreen::new(code));
                self.load_models().await;
                Ok(())
            }
            Err(e) => {
                screen.error = Some(surface_message(&e));
                Err(e)
            }
        }
    }

    /// Validate every field, then submit the assembled payload.
    ///
    /// Backend success is the only path to the terminal submitted
    /// screen, and that transition is irreversible. Validation failures
    /// surface all field errors at once without touching the network;
    /// backend failures leave the form editable for retry.
    pub async fn submit_registration(&mut self) -> Result<(), WidgetError> {
        let screen = match &mut self.screen {
            Screen::Registration(screen) => screen,
            other => return Err(WidgetError::WrongScreen(other.id())),
        };
        screen.error = None;

        let registration = match screen.draft.finish(screen.code.clone()) {
            Ok(registration) => {
                screen.field_errors.clear();
                registration
            }
            Err(errors) => {
                screen.field_errors.clone_from(&errors);
                return Err(WidgetError::Invalid(errors));
            }
        };

        screen.submitting = true;
        let result = self.backend.register(&registration).await;
        screen.submitting = false;

        match result {
            Ok(()) => {
                info!(code = %registration.warranty_code, "registration completed");
                self.screen = Screen::Submitted(SubmittedScreen {
                    message: SUCCESS_MESSAGE.to_string(),
                });
                Ok(())
            }
            Err(e) => {
                screen.error = Some(surface_message(&e));
                Err(e)
            }
        }
    }

    /// Populate the model suggestion list, at most once, strictly after
    /// the registration screen exists. Non-fatal: a failure is logged
    /// and the model field still accepts free text.
    async fn load_models(&mut self) {
        let Screen::Registration(screen) = &mut self.screen else {
            return;
        };
        if screen.suggestions.is_fetched() {
            return;
        }

        match self.backend.fetch_models().await {
            Ok(models) => {
                info!(count = models.len(), "model suggestions loaded");
                screen.suggestions.fill(models);
            }
            Err(e) => {
                warn!(error = %e, "failed to load model suggestions");
                screen.suggestions.mark_fetched();
            }
        }
    }
}

/// Inline message for a failed backend interaction: the server's own
/// words when it rejected us, a generic retry hint otherwise.
fn surface_message(error: &WidgetError) -> String {
    match error {
        WidgetError::Rejected(message) => message.clone(),
        _ => NETWORK_ERROR_MESSAGE.to_string(),
    }
}
