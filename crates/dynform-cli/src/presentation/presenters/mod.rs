pub mod check;
pub mod config;
pub mod form;
pub mod login;
pub mod schema;

pub use check::present_check_report;
pub use config::present_config;
pub use form::{
    present_banner, present_form_screen, present_header, present_navigation, present_progress,
    present_submitted,
};
pub use login::{present_login_result, present_login_screen};
pub use schema::present_schema_report;
