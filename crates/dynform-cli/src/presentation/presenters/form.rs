use std::collections::HashSet;

use dynform_engine::{FormSession, Submission};
use dynform_types::{Field, FieldKind, FieldValue, Form, User};

use crate::presentation::formatters::{clip, single_line, truncate};
use crate::presentation::view_models::{
    FieldViewModel, FormScreenViewModel, HeaderViewModel, KeyHint, NavigationViewModel,
    PrimaryAction, ProgressStepViewModel, ProgressViewModel, SectionViewModel, StatusBarViewModel,
    StatusLevel, StepState, SubmittedEntryViewModel, SubmittedViewModel,
};

const STEP_TITLE_LIMIT: usize = 15;
const SUBMITTED_VALUE_WIDTH: usize = 60;

pub fn present_header(form: &Form) -> HeaderViewModel {
    HeaderViewModel {
        title: form.form_title.clone(),
        subtitle: format!("Form ID: {} | Version: {}", form.form_id, form.version),
    }
}

pub fn present_banner(user: &User) -> String {
    format!("Logged in as: {}", user)
}

/// Step indicator; `None` when the form has a single section
pub fn present_progress(form: &Form, current: usize) -> Option<ProgressViewModel> {
    if form.section_count() <= 1 {
        return None;
    }

    let steps = form
        .sections
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let state = match index.cmp(&current) {
                std::cmp::Ordering::Less => StepState::Completed,
                std::cmp::Ordering::Equal => StepState::Current,
                std::cmp::Ordering::Greater => StepState::Upcoming,
            };
            let marker = if state == StepState::Completed {
                "✓".to_string()
            } else {
                (index + 1).to_string()
            };
            ProgressStepViewModel {
                marker,
                title: clip(&section.title, STEP_TITLE_LIMIT),
                state,
            }
        })
        .collect();

    Some(ProgressViewModel { steps })
}

pub fn present_navigation(session: &FormSession) -> NavigationViewModel {
    NavigationViewModel {
        show_previous: !session.is_first_section(),
        primary: if session.is_last_section() {
            PrimaryAction::Submit
        } else {
            PrimaryAction::Next
        },
    }
}

/// Form screen for the active section; `None` unless the session is ready
pub fn present_form_screen(
    session: &FormSession,
    focused: usize,
    user: Option<&User>,
) -> Option<FormScreenViewModel> {
    let form = session.form()?;
    let section = session.active_section()?;

    let fields: Vec<FieldViewModel> = section
        .fields
        .iter()
        .map(|field| {
            FieldViewModel::build(
                field,
                session.value_of(&field.field_id),
                session.error_for(&field.field_id),
            )
        })
        .collect();
    let focused = (!fields.is_empty()).then(|| focused.min(fields.len() - 1));

    let navigation = present_navigation(session);
    let status_bar = present_status_bar(session, &navigation);

    Some(FormScreenViewModel {
        header: present_header(form),
        banner: user.map(present_banner),
        progress: present_progress(form, session.section_index()),
        section: SectionViewModel {
            title: section.title.clone(),
            description: section.description.clone(),
            fields,
            focused,
        },
        navigation,
        status_bar,
    })
}

fn present_status_bar(session: &FormSession, navigation: &NavigationViewModel) -> StatusBarViewModel {
    let section_count = session.form().map(Form::section_count).unwrap_or(0);
    let error_count = session.errors().len();

    let (level, message) = if error_count > 0 {
        (
            StatusLevel::Error,
            format!("{} field(s) need attention", error_count),
        )
    } else {
        (
            StatusLevel::Info,
            format!(
                "Section {} of {}",
                session.section_index() + 1,
                section_count
            ),
        )
    };

    let mut hints = vec![
        KeyHint::new("Tab", "field"),
        KeyHint::new("←/→", "choose"),
        KeyHint::new("Space", "toggle"),
        KeyHint::new("Enter", navigation.primary.label().to_lowercase()),
    ];
    if navigation.show_previous {
        hints.push(KeyHint::new("PgUp", "previous"));
    }
    hints.push(KeyHint::new("Esc", "quit"));

    StatusBarViewModel {
        level,
        message,
        hints,
    }
}

pub fn present_submitted(
    form: &Form,
    submission: &Submission,
    user: Option<&User>,
) -> SubmittedViewModel {
    let mut seen = HashSet::new();
    let entries = form
        .fields()
        .filter(|field| seen.insert(field.field_id.as_str()))
        .filter_map(|field| {
            let value = submission.values.get(&field.field_id)?;
            Some(SubmittedEntryViewModel {
                label: if field.label.is_empty() {
                    field.field_id.clone()
                } else {
                    field.label.clone()
                },
                value: display_value(field, value),
            })
        })
        .collect();

    SubmittedViewModel {
        header: present_header(form),
        banner: user.map(present_banner),
        message: "Form submitted successfully!".to_string(),
        submitted_at: submission
            .submitted_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
        entries,
    }
}

/// Value as a reader expects it: option labels, Yes/No for checkboxes
fn display_value(field: &Field, value: &FieldValue) -> String {
    match (&field.kind, value) {
        (_, FieldValue::Bool(checked)) => (if *checked { "Yes" } else { "No" }).to_string(),
        (FieldKind::Dropdown | FieldKind::Radio, FieldValue::Text(selected)) => field
            .option(selected)
            .map(|option| option.label.clone())
            .unwrap_or_else(|| selected.clone()),
        (_, FieldValue::Text(text)) => truncate(&single_line(text), SUBMITTED_VALUE_WIDTH),
    }
}
