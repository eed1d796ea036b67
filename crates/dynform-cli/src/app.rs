//! Interactive fill flow
//!
//! `FillApp` is the single writer of the `FormSession`. Key presses arrive
//! from the TUI event loop; gateway calls run on a tokio runtime and report
//! back as `AppEvent`s over an mpsc channel. While a call is pending the
//! screen ignores everything except quit.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dynform_engine::{FormSession, Navigation, Stage, SubmitOutcome, Submission};
use dynform_runtime::{FormGateway, sign_in};
use dynform_types::{Field, FieldKind, FormResponse, User};
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

use crate::presentation::editing::{EditInput, apply_edit};
use crate::presentation::presenters::{
    present_form_screen, present_login_screen, present_submitted,
};
use crate::presentation::view_models::{KeyHint, LoginFocus, ScreenViewModel};

pub const MISSING_CREDENTIALS: &str = "Please enter both roll number and name.";

/// Results of background gateway calls
#[derive(Debug)]
pub enum AppEvent {
    SignedIn {
        user: User,
        result: Result<String, String>,
    },
    FormLoaded(Result<FormResponse, String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Login,
    /// Whatever the session stage calls for
    Session,
}

#[derive(Debug, Default)]
struct LoginForm {
    roll_number: String,
    name: String,
    focus: LoginFocus,
    error: Option<String>,
    pending: bool,
}

impl LoginForm {
    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focus {
            LoginFocus::RollNumber => Some(&mut self.roll_number),
            LoginFocus::Name => Some(&mut self.name),
            LoginFocus::Submit => None,
        }
    }
}

struct Remote {
    gateway: Arc<dyn FormGateway>,
    handle: Handle,
    tx: Sender<AppEvent>,
}

pub struct FillApp {
    session: FormSession,
    screen: Screen,
    login: LoginForm,
    focus: usize,
    user: Option<User>,
    remote: Option<Remote>,
    should_quit: bool,
}

impl FillApp {
    /// Fill an already loaded schema without any network access
    pub fn offline(response: FormResponse, user: Option<User>) -> Self {
        Self {
            session: FormSession::from_response(response),
            screen: Screen::Session,
            login: LoginForm::default(),
            focus: 0,
            user,
            remote: None,
            should_quit: false,
        }
    }

    /// Start at the login screen; gateway results come back through `tx`
    pub fn online(gateway: Arc<dyn FormGateway>, handle: Handle, tx: Sender<AppEvent>) -> Self {
        Self {
            session: FormSession::new(),
            screen: Screen::Login,
            login: LoginForm::default(),
            focus: 0,
            user: None,
            remote: Some(Remote {
                gateway,
                handle,
                tx,
            }),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn into_submission(self) -> Option<Submission> {
        match self.session.stage() {
            Stage::Submitted(submission) => Some(submission.clone()),
            _ => None,
        }
    }

    /// Sign in with known credentials, as if typed on the login screen
    pub fn start_sign_in(&mut self, user: User) {
        let Some(remote) = &self.remote else {
            return;
        };

        self.screen = Screen::Login;
        self.login.roll_number = user.roll_number.clone();
        self.login.name = user.name.clone();
        self.login.error = None;
        self.login.pending = true;

        let gateway = Arc::clone(&remote.gateway);
        let tx = remote.tx.clone();
        remote.handle.spawn(async move {
            let result = sign_in(gateway.as_ref(), &user)
                .await
                .map_err(|e| e.to_string());
            // The receiver is gone once the TUI exits
            let _ = tx.send(AppEvent::SignedIn { user, result });
        });
    }

    fn start_load(&mut self, roll_number: String) {
        let Some(remote) = &self.remote else {
            return;
        };

        if let Err(err) = self.session.begin_load() {
            warn!("form load not started: {}", err);
            return;
        }
        self.screen = Screen::Session;
        self.focus = 0;

        let gateway = Arc::clone(&remote.gateway);
        let tx = remote.tx.clone();
        remote.handle.spawn(async move {
            let result = gateway
                .get_form_structure(&roll_number)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::FormLoaded(result));
        });
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SignedIn { user, result } => {
                self.login.pending = false;
                match result {
                    Ok(_) => {
                        info!(roll_number = %user.roll_number, "signed in");
                        let roll_number = user.roll_number.clone();
                        self.user = Some(user);
                        self.start_load(roll_number);
                    }
                    Err(message) => {
                        self.login.error = Some(message);
                    }
                }
            }
            AppEvent::FormLoaded(result) => {
                self.session.complete_load(result);
                self.focus = 0;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Login => self.handle_login_key(key),
            Screen::Session => match self.session.stage() {
                Stage::Ready => self.handle_form_key(key),
                Stage::Failed(_) => match key.code {
                    KeyCode::Enter if self.remote.is_some() => {
                        self.screen = Screen::Login;
                        self.login.focus = LoginFocus::RollNumber;
                    }
                    KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                    _ => {}
                },
                Stage::Submitted(_) => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
                        self.should_quit = true;
                    }
                }
                Stage::Idle | Stage::Loading => {
                    if key.code == KeyCode::Esc {
                        self.should_quit = true;
                    }
                }
            },
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }
        if self.login.pending {
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.login.focus = self.login.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.login.focus = self.login.focus.previous(),
            KeyCode::Enter => self.submit_login(),
            KeyCode::Backspace => {
                if let Some(input) = self.login.focused_input() {
                    input.pop();
                }
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(input) = self.login.focused_input() {
                    input.clear();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(input) = self.login.focused_input() {
                    input.push(c);
                }
            }
            _ => {}
        }
    }

    fn submit_login(&mut self) {
        let roll_number = self.login.roll_number.trim();
        let name = self.login.name.trim();
        if roll_number.is_empty() || name.is_empty() {
            self.login.error = Some(MISSING_CREDENTIALS.to_string());
            return;
        }

        let user = User::new(roll_number, name);
        self.start_sign_in(user);
    }

    fn focused_field(&self) -> Option<Field> {
        self.session
            .active_section()
            .and_then(|section| section.fields.get(self.focus))
            .cloned()
    }

    fn field_count(&self) -> usize {
        self.session
            .active_section()
            .map_or(0, |section| section.fields.len())
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let focused_kind = self.focused_field().map(|field| field.kind);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Down => {
                if self.focus + 1 < self.field_count() {
                    self.focus += 1;
                }
            }
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.saturating_sub(1),
            KeyCode::PageUp => self.go_previous(),
            KeyCode::Char('p') if ctrl => self.go_previous(),
            KeyCode::PageDown => self.advance(),
            KeyCode::Char('n') | KeyCode::Char('s') if ctrl => self.advance(),
            KeyCode::Enter if focused_kind == Some(FieldKind::Textarea) => {
                self.edit(EditInput::Newline)
            }
            KeyCode::Enter => self.advance(),
            KeyCode::Left => self.edit(EditInput::PreviousChoice),
            KeyCode::Right => self.edit(EditInput::NextChoice),
            KeyCode::Backspace => self.edit(EditInput::Backspace),
            KeyCode::Char('u') if ctrl => self.edit(EditInput::Clear),
            KeyCode::Char(c) if !ctrl => self.edit(EditInput::Char(c)),
            _ => {}
        }
    }

    fn edit(&mut self, input: EditInput) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let Some(change) = apply_edit(&field, self.session.value_of(&field.field_id), input)
        else {
            return;
        };
        if let Err(err) = self.session.set_field_value(&change.field_id, change.value) {
            warn!("edit ignored: {}", err);
        }
    }

    fn go_previous(&mut self) {
        match self.session.go_previous() {
            Ok(Navigation::Moved { from, to }) if from != to => self.focus = 0,
            Ok(_) => {}
            Err(err) => warn!("previous ignored: {}", err),
        }
    }

    /// Next on inner sections, Submit on the last one
    fn advance(&mut self) {
        if self.session.is_last_section() {
            match self.session.submit() {
                Ok(SubmitOutcome::Submitted(_)) => debug!("submitted from TUI"),
                Ok(SubmitOutcome::Blocked { .. }) => self.focus_first_error(),
                Err(err) => warn!("submit ignored: {}", err),
            }
            return;
        }

        match self.session.go_next() {
            Ok(Navigation::Moved { .. }) => self.focus = 0,
            Ok(Navigation::Blocked { .. }) => self.focus_first_error(),
            Err(err) => warn!("next ignored: {}", err),
        }
    }

    fn focus_first_error(&mut self) {
        let Some(section) = self.session.active_section() else {
            return;
        };
        if let Some(index) = section
            .fields
            .iter()
            .position(|field| self.session.error_for(&field.field_id).is_some())
        {
            self.focus = index;
        }
    }

    pub fn view(&self) -> ScreenViewModel {
        if self.screen == Screen::Login {
            return ScreenViewModel::Login(present_login_screen(
                &self.login.roll_number,
                &self.login.name,
                self.login.focus,
                self.login.error.as_deref(),
                self.login.pending,
            ));
        }

        match self.session.stage() {
            Stage::Idle | Stage::Loading => ScreenViewModel::Loading {
                message: "Loading form...".to_string(),
            },
            Stage::Failed(message) => {
                let dismiss = if self.remote.is_some() {
                    KeyHint::new("Enter", "back to login")
                } else {
                    KeyHint::new("Enter", "quit")
                };
                ScreenViewModel::Failed {
                    message: message.clone(),
                    hints: vec![dismiss, KeyHint::new("Esc", "quit")],
                }
            }
            Stage::Ready => match present_form_screen(&self.session, self.focus, self.user.as_ref())
            {
                Some(screen) => ScreenViewModel::Form(Box::new(screen)),
                None => ScreenViewModel::Loading {
                    message: "Loading form...".to_string(),
                },
            },
            Stage::Submitted(submission) => match self.session.form() {
                Some(form) => ScreenViewModel::Submitted(present_submitted(
                    form,
                    submission,
                    self.user.as_ref(),
                )),
                None => ScreenViewModel::Loading {
                    message: "Form submitted.".to_string(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{FieldControl, PrimaryAction};
    use dynform_types::{Field, FieldOption, Form, FormResponse, Section};
    use std::sync::mpsc;
    use std::time::Duration;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut FillApp, text: &str) {
        for c in text.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
    }

    fn sample_form() -> Form {
        Form::new("reg", "Registration")
            .with_version("1")
            .with_section(
                Section::new("personal", "Personal")
                    .with_field(Field::new("name", FieldKind::Text, "Name").required())
                    .with_field(
                        Field::new("gender", FieldKind::Radio, "Gender")
                            .required()
                            .with_options(vec![
                                FieldOption::new("m", "Male"),
                                FieldOption::new("f", "Female"),
                            ]),
                    ),
            )
            .with_section(
                Section::new("confirm", "Confirm").with_field(
                    Field::new("terms", FieldKind::Checkbox, "I agree").required(),
                ),
            )
    }

    fn form_screen(app: &FillApp) -> crate::presentation::view_models::FormScreenViewModel {
        match app.view() {
            ScreenViewModel::Form(screen) => *screen,
            other => panic!("expected form screen, got {:?}", other),
        }
    }

    #[test]
    fn test_offline_walkthrough_to_submission() {
        let mut app = FillApp::offline(FormResponse::new(sample_form()), None);

        app.handle_key(press(KeyCode::Enter));
        let screen = form_screen(&app);
        assert_eq!(screen.section.title, "Personal");
        assert_eq!(
            screen.section.fields[0].error.as_deref(),
            Some("This field is required.")
        );

        type_text(&mut app, "Asha");
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Right));
        app.handle_key(press(KeyCode::Enter));

        let screen = form_screen(&app);
        assert_eq!(screen.section.title, "Confirm");
        assert_eq!(screen.navigation.primary, PrimaryAction::Submit);
        assert!(screen.navigation.show_previous);

        app.handle_key(press(KeyCode::Char(' ')));
        app.handle_key(press(KeyCode::Enter));
        assert!(matches!(app.view(), ScreenViewModel::Submitted(_)));

        app.handle_key(press(KeyCode::Enter));
        assert!(app.should_quit());

        let submission = app.into_submission().unwrap();
        assert_eq!(submission.form_id, "reg");
        assert_eq!(
            serde_json::to_value(&submission.values).unwrap(),
            serde_json::json!({"gender": "m", "name": "Asha", "terms": true})
        );
    }

    #[test]
    fn test_previous_keeps_values() {
        let mut app = FillApp::offline(FormResponse::new(sample_form()), None);
        type_text(&mut app, "Asha");
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Left));
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.session().section_index(), 1);

        app.handle_key(press(KeyCode::PageUp));
        let screen = form_screen(&app);
        assert_eq!(screen.section.title, "Personal");
        assert!(
            matches!(&screen.section.fields[0].control, FieldControl::Input { value, .. } if value == "Asha")
        );
    }

    #[test]
    fn test_blocked_navigation_focuses_first_error() {
        let mut app = FillApp::offline(FormResponse::new(sample_form()), None);
        type_text(&mut app, "Asha");
        app.handle_key(press(KeyCode::Up));
        app.handle_key(ctrl('n'));

        let screen = form_screen(&app);
        assert_eq!(screen.section.title, "Personal");
        assert_eq!(screen.section.focused, Some(1));
        assert_eq!(
            screen.section.fields[1].error.as_deref(),
            Some("This field is required.")
        );
    }

    #[test]
    fn test_textarea_enter_inserts_newline() {
        let form = Form::new("f", "Notes").with_section(
            Section::new("s", "Notes")
                .with_field(Field::new("notes", FieldKind::Textarea, "Notes").required()),
        );
        let mut app = FillApp::offline(FormResponse::new(form), None);
        type_text(&mut app, "a");
        app.handle_key(press(KeyCode::Enter));
        type_text(&mut app, "b");

        assert_eq!(
            app.session().value_of("notes").map(|v| v.to_string()),
            Some("a\nb".to_string())
        );
        assert!(matches!(app.session().stage(), Stage::Ready));

        app.handle_key(ctrl('s'));
        assert!(matches!(app.session().stage(), Stage::Submitted(_)));
    }

    #[test]
    fn test_escape_quits_without_submission() {
        let mut app = FillApp::offline(FormResponse::new(sample_form()), None);
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit());
        assert!(app.into_submission().is_none());
    }

    #[test]
    fn test_offline_failed_load_shows_message() {
        let response = FormResponse::new(Form::new("empty", "Empty"));
        let app = FillApp::offline(response, None);
        assert!(matches!(
            app.view(),
            ScreenViewModel::Failed { ref message, .. } if message == "Form 'empty' has no sections"
        ));
    }

    struct StaticGateway {
        form: Form,
    }

    #[async_trait::async_trait]
    impl FormGateway for StaticGateway {
        async fn create_user(
            &self,
            _user: &User,
        ) -> dynform_runtime::Result<dynform_types::CreateUserResponse> {
            Ok(dynform_types::CreateUserResponse {
                success: true,
                message: "User created".to_string(),
            })
        }

        async fn get_form_structure(
            &self,
            _roll_number: &str,
        ) -> dynform_runtime::Result<FormResponse> {
            Ok(FormResponse::new(self.form.clone()))
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (tx, _rx) = mpsc::channel();
        let gateway = Arc::new(StaticGateway {
            form: sample_form(),
        });
        let mut app = FillApp::online(gateway, runtime.handle().clone(), tx);

        type_text(&mut app, "21CS042");
        app.handle_key(press(KeyCode::Enter));

        let ScreenViewModel::Login(login) = app.view() else {
            panic!("expected login screen");
        };
        assert_eq!(login.error.as_deref(), Some(MISSING_CREDENTIALS));
        assert!(!login.pending);
    }

    #[test]
    fn test_online_login_then_form_loads() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (tx, rx) = mpsc::channel();
        let gateway = Arc::new(StaticGateway {
            form: sample_form(),
        });
        let mut app = FillApp::online(gateway, runtime.handle().clone(), tx);

        type_text(&mut app, "21CS042");
        app.handle_key(press(KeyCode::Tab));
        type_text(&mut app, "Asha");
        app.handle_key(press(KeyCode::Enter));

        let ScreenViewModel::Login(login) = app.view() else {
            panic!("expected login screen");
        };
        assert!(login.pending);
        assert_eq!(login.button_label, "Logging in...");

        // Typing is ignored while the request is pending
        type_text(&mut app, "x");
        let ScreenViewModel::Login(login) = app.view() else {
            panic!("expected login screen");
        };
        assert_eq!(login.name, "Asha");

        let signed_in = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        app.handle_event(signed_in);
        assert!(matches!(app.view(), ScreenViewModel::Loading { .. }));

        let loaded = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        app.handle_event(loaded);

        let screen = form_screen(&app);
        assert_eq!(
            screen.banner.as_deref(),
            Some("Logged in as: Asha (Roll Number: 21CS042)")
        );
        assert_eq!(screen.header.subtitle, "Form ID: reg | Version: 1");
    }

    #[test]
    fn test_rejected_login_shows_error() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (tx, _rx) = mpsc::channel();
        let gateway = Arc::new(StaticGateway {
            form: sample_form(),
        });
        let mut app = FillApp::online(gateway, runtime.handle().clone(), tx);

        app.handle_event(AppEvent::SignedIn {
            user: User::new("21CS042", "Asha"),
            result: Err("Invalid roll number".to_string()),
        });

        let ScreenViewModel::Login(login) = app.view() else {
            panic!("expected login screen");
        };
        assert_eq!(login.error.as_deref(), Some("Invalid roll number"));
    }
}
