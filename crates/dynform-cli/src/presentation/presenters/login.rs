use dynform_types::User;

use super::form::present_banner;
use crate::presentation::view_models::{LoginFocus, LoginResultViewModel, LoginScreenViewModel};

pub fn present_login_screen(
    roll_number: &str,
    name: &str,
    focus: LoginFocus,
    error: Option<&str>,
    pending: bool,
) -> LoginScreenViewModel {
    LoginScreenViewModel {
        roll_number: roll_number.to_string(),
        name: name.to_string(),
        focus,
        error: error.map(str::to_string),
        pending,
        button_label: (if pending { "Logging in..." } else { "Login" }).to_string(),
    }
}

pub fn present_login_result(user: &User, message: String) -> LoginResultViewModel {
    LoginResultViewModel {
        roll_number: user.roll_number.clone(),
        name: user.name.clone(),
        banner: present_banner(user),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_label_while_pending() {
        let idle = present_login_screen("21CS042", "Asha", LoginFocus::Submit, None, false);
        assert_eq!(idle.button_label, "Login");

        let pending = present_login_screen("21CS042", "Asha", LoginFocus::Submit, None, true);
        assert_eq!(pending.button_label, "Logging in...");
    }

    #[test]
    fn test_login_result_text() {
        let vm = present_login_result(&User::new("21CS042", "Asha"), "User created".to_string());
        assert_eq!(
            vm.to_string(),
            "Logged in as: Asha (Roll Number: 21CS042)\nServer: User created\n"
        );
    }
}
