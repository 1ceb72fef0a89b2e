//! Registration submission flow.
//!
//! [`RegistrationFlow`] is a small state machine that sits between the form
//! and the page. It owns the view it drives (passed in at construction), so
//! it never has to look anything up in the document and can be exercised in
//! tests with a recording fake.

use crate::{messages, validate_submission, RegistrationSubmission, ValidationError};
use log::{debug, info};

/// Content of the modal acknowledgment shown after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationSurface {
    pub icon: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    pub dismiss_label: &'static str,
}

impl ConfirmationSurface {
    pub fn registration_success() -> Self {
        Self {
            icon: messages::SUCCESS_ICON,
            heading: messages::SUCCESS_HEADING,
            body: messages::SUCCESS_BODY,
            dismiss_label: messages::SUCCESS_DISMISS,
        }
    }
}

/// Everything the flow needs from the page.
pub trait RegistrationView {
    /// Current form values, keyed by field name.
    fn read_fields(&self) -> RegistrationSubmission;

    /// Blocking notice for a rejected submission.
    fn alert(&mut self, message: &str);

    fn show_confirmation(&mut self, surface: &ConfirmationSurface);

    /// Reset every form control to empty.
    fn clear_fields(&mut self);

    /// Play the exit transition, then detach the confirmation surface.
    fn dismiss_confirmation(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Validating,
    Rejected,
    Accepted,
    ConfirmationShown,
}

/// Discrete UI signals delivered to the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// The form was submitted; values are read from the view.
    Submit,
    /// The confirmation's dismiss button was pressed.
    CloseClicked,
    /// A click landed on the confirmation overlay. `on_backdrop` is false when
    /// the click target was the dialog content rather than the backdrop.
    BackdropClicked { on_backdrop: bool },
}

pub struct RegistrationFlow<V: RegistrationView> {
    view: V,
    state: FlowState,
}

impl<V: RegistrationView> RegistrationFlow<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            state: FlowState::Idle,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Single dispatch point for UI events.
    pub fn handle_event(&mut self, event: FlowEvent) -> Result<(), ValidationError> {
        debug!("Registration flow event {:?} in state {:?}", event, self.state);
        match event {
            FlowEvent::Submit => {
                let submission = self.view.read_fields();
                self.on_submit(&submission)
            }
            FlowEvent::CloseClicked | FlowEvent::BackdropClicked { on_backdrop: true } => {
                self.dismiss_confirmation();
                Ok(())
            }
            FlowEvent::BackdropClicked { on_backdrop: false } => Ok(()),
        }
    }

    /// Validate `submission` and drive the view accordingly.
    ///
    /// A rejection alerts the user and leaves the form untouched. An
    /// acceptance shows the confirmation and clears the form.
    pub fn on_submit(&mut self, submission: &RegistrationSubmission) -> Result<(), ValidationError> {
        self.state = FlowState::Validating;

        match validate_submission(submission) {
            Ok(()) => {
                self.state = FlowState::Accepted;
                info!("Registration accepted");
                self.view
                    .show_confirmation(&ConfirmationSurface::registration_success());
                self.view.clear_fields();
                self.state = FlowState::ConfirmationShown;
                Ok(())
            }
            Err(err) => {
                self.state = FlowState::Rejected;
                self.view.alert(&err.to_string());
                self.state = FlowState::Idle;
                Err(err)
            }
        }
    }

    /// Close the confirmation if one is showing; otherwise do nothing.
    pub fn dismiss_confirmation(&mut self) {
        if self.state != FlowState::ConfirmationShown {
            return;
        }
        self.view.dismiss_confirmation();
        self.state = FlowState::Idle;
        debug!("Confirmation dismissed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Alert(String),
        Show(ConfirmationSurface),
        Clear,
        Dismiss,
    }

    #[derive(Default)]
    struct RecordingView {
        fields: RegistrationSubmission,
        calls: Vec<Call>,
    }

    impl RegistrationView for RecordingView {
        fn read_fields(&self) -> RegistrationSubmission {
            self.fields.clone()
        }

        fn alert(&mut self, message: &str) {
            self.calls.push(Call::Alert(message.to_string()));
        }

        fn show_confirmation(&mut self, surface: &ConfirmationSurface) {
            self.calls.push(Call::Show(surface.clone()));
        }

        fn clear_fields(&mut self) {
            self.fields = RegistrationSubmission::new();
            self.calls.push(Call::Clear);
        }

        fn dismiss_confirmation(&mut self) {
            self.calls.push(Call::Dismiss);
        }
    }

    fn ivan() -> RegistrationSubmission {
        RegistrationSubmission::new()
            .with(Field::FirstName, "Ivan")
            .with(Field::LastName, "Petrov")
            .with(Field::Email, "ivan@example.bg")
            .with(Field::Phone, "+359888123456")
            .with(Field::City, "Sofia")
            .with(Field::Tournament, "Open")
            .with(Field::Experience, "2 years")
    }

    fn flow_with(fields: RegistrationSubmission) -> RegistrationFlow<RecordingView> {
        RegistrationFlow::new(RecordingView {
            fields,
            calls: Vec::new(),
        })
    }

    #[test]
    fn valid_submit_shows_confirmation_once_and_clears_once() {
        let mut flow = flow_with(ivan());
        assert_eq!(flow.handle_event(FlowEvent::Submit), Ok(()));
        assert_eq!(
            flow.view().calls,
            vec![
                Call::Show(ConfirmationSurface::registration_success()),
                Call::Clear
            ]
        );
        assert_eq!(flow.state(), FlowState::ConfirmationShown);
        assert_eq!(flow.view().fields, RegistrationSubmission::new());
    }

    #[test]
    fn rejected_submit_alerts_and_preserves_input() {
        let fields = ivan().with(Field::FirstName, "");
        let mut flow = flow_with(fields.clone());
        assert_eq!(
            flow.handle_event(FlowEvent::Submit),
            Err(ValidationError::MissingField(Field::FirstName))
        );
        assert_eq!(
            flow.view().calls,
            vec![Call::Alert("Моля, попълнете полето: Име".to_string())]
        );
        assert_eq!(flow.view().fields, fields);
        assert_eq!(flow.state(), FlowState::Idle);
    }

    #[test]
    fn invalid_email_and_phone_are_alerted() {
        let mut flow = flow_with(RegistrationSubmission::new());
        let bad_email = ivan()
            .with(Field::Email, "not-an-email")
            .with(Field::Phone, "0888123456");
        assert_eq!(
            flow.on_submit(&bad_email),
            Err(ValidationError::InvalidEmailFormat)
        );
        let bad_phone = ivan().with(Field::Email, "a@b.bg").with(Field::Phone, "123456");
        assert_eq!(
            flow.on_submit(&bad_phone),
            Err(ValidationError::InvalidPhoneFormat)
        );
        assert_eq!(
            flow.view().calls,
            vec![
                Call::Alert(messages::INVALID_EMAIL.to_string()),
                Call::Alert(messages::INVALID_PHONE.to_string()),
            ]
        );
    }

    #[test]
    fn close_dismisses_and_returns_to_idle() {
        let mut flow = flow_with(ivan());
        flow.handle_event(FlowEvent::Submit).unwrap();
        flow.handle_event(FlowEvent::CloseClicked).unwrap();
        assert_eq!(flow.state(), FlowState::Idle);
        assert_eq!(flow.view().calls.last(), Some(&Call::Dismiss));
    }

    #[test]
    fn dismiss_twice_is_same_as_once() {
        let mut flow = flow_with(ivan());
        flow.handle_event(FlowEvent::Submit).unwrap();
        flow.dismiss_confirmation();
        let after_once = flow.view().calls.clone();
        flow.dismiss_confirmation();
        assert_eq!(flow.view().calls, after_once);
        assert_eq!(flow.state(), FlowState::Idle);
    }

    #[test]
    fn dismiss_without_confirmation_is_noop() {
        let mut flow = flow_with(ivan());
        flow.dismiss_confirmation();
        flow.handle_event(FlowEvent::BackdropClicked { on_backdrop: true })
            .unwrap();
        assert!(flow.view().calls.is_empty());
        assert_eq!(flow.state(), FlowState::Idle);
    }

    #[test]
    fn click_on_dialog_content_keeps_confirmation() {
        let mut flow = flow_with(ivan());
        flow.handle_event(FlowEvent::Submit).unwrap();
        flow.handle_event(FlowEvent::BackdropClicked { on_backdrop: false })
            .unwrap();
        assert_eq!(flow.state(), FlowState::ConfirmationShown);
        flow.handle_event(FlowEvent::BackdropClicked { on_backdrop: true })
            .unwrap();
        assert_eq!(flow.state(), FlowState::Idle);
        assert_eq!(
            flow.view()
                .calls
                .iter()
                .filter(|c| **c == Call::Dismiss)
                .count(),
            1
        );
    }

    #[test]
    fn resubmitting_cleared_form_reports_first_field() {
        let mut flow = flow_with(ivan());
        flow.handle_event(FlowEvent::Submit).unwrap();
        flow.handle_event(FlowEvent::CloseClicked).unwrap();
        assert_eq!(
            flow.handle_event(FlowEvent::Submit),
            Err(ValidationError::MissingField(Field::FirstName))
        );
    }
}
