//! Form fields, focus, and input constraints.
//!
//! Constraints here belong to the input widgets (digits-only age, email
//! shape, age range), not to the sign-in flows. An empty field always passes
//! so the flow itself can report missing values.

use ballot_core::api::VoterRegistration;
use ballot_core::login::{LoginForm, Tab};

const AGE_MAX_DIGITS: usize = 3;
const AGE_MIN: u32 = 18;
const AGE_MAX: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    VoterId,
    RegisterId,
    Name,
    Email,
    Place,
    Age,
    Username,
    Password,
}

impl Field {
    /// Fields of a tab, in focus order.
    pub fn for_tab(tab: Tab) -> &'static [Field] {
        match tab {
            Tab::Login => &[Field::VoterId],
            Tab::Register => &[
                Field::RegisterId,
                Field::Name,
                Field::Email,
                Field::Place,
                Field::Age,
            ],
            Tab::Admin => &[Field::Username, Field::Password],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::VoterId => "Voter ID",
            Field::RegisterId => "Voter ID *",
            Field::Name => "Full Name *",
            Field::Email => "Email Address *",
            Field::Place => "Place/City *",
            Field::Age => "Age *",
            Field::Username => "Admin Username",
            Field::Password => "Admin Password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::VoterId => "Enter your voter ID",
            Field::RegisterId => "Choose a unique voter ID",
            Field::Name => "Enter your full name",
            Field::Email => "Enter your email",
            Field::Place => "Enter your city",
            Field::Age => "Enter your age",
            Field::Username => "Enter admin username",
            Field::Password => "Enter admin password",
        }
    }

    /// Help line rendered under the field, if any.
    pub fn help(self) -> Option<&'static str> {
        match self {
            Field::VoterId => Some("Enter the voter ID you registered with"),
            Field::RegisterId => Some("This will be your login ID"),
            _ => None,
        }
    }

    pub fn is_secret(self) -> bool {
        self == Field::Password
    }

    /// Whether typing `ch` into a field currently holding `current` is allowed.
    pub fn accepts(self, current: &str, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self {
            Field::Age => ch.is_ascii_digit() && current.len() < AGE_MAX_DIGITS,
            _ => true,
        }
    }

    pub fn value(self, form: &LoginForm) -> &str {
        match self {
            Field::VoterId => &form.voter_id,
            Field::RegisterId => &form.registration.id,
            Field::Name => &form.registration.name,
            Field::Email => &form.registration.email,
            Field::Place => &form.registration.place,
            Field::Age => &form.registration.age,
            Field::Username => &form.admin.username,
            Field::Password => &form.admin.password,
        }
    }

    pub fn value_mut(self, form: &mut LoginForm) -> &mut String {
        match self {
            Field::VoterId => &mut form.voter_id,
            Field::RegisterId => &mut form.registration.id,
            Field::Name => &mut form.registration.name,
            Field::Email => &mut form.registration.email,
            Field::Place => &mut form.registration.place,
            Field::Age => &mut form.registration.age,
            Field::Username => &mut form.admin.username,
            Field::Password => &mut form.admin.password,
        }
    }
}

/// Index of the focused field within the active tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldFocus {
    index: usize,
}

impl FieldFocus {
    pub fn current(self, tab: Tab) -> Field {
        let fields = Field::for_tab(tab);
        fields[self.index.min(fields.len() - 1)]
    }

    pub fn next(&mut self, tab: Tab) {
        let len = Field::for_tab(tab).len();
        self.index = (self.index + 1) % len;
    }

    pub fn prev(&mut self, tab: Tab) {
        let len = Field::for_tab(tab).len();
        self.index = (self.index + len - 1) % len;
    }

    pub fn focus(&mut self, tab: Tab, field: Field) {
        if let Some(index) = Field::for_tab(tab).iter().position(|f| *f == field) {
            self.index = index;
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

/// Inline message attached to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldHint {
    pub field: Field,
    pub message: String,
}

/// Checks the registration inputs the way the widgets would before submit.
pub fn check_registration(draft: &VoterRegistration) -> Option<FieldHint> {
    if !draft.email.is_empty() && !is_email_shaped(&draft.email) {
        return Some(FieldHint {
            field: Field::Email,
            message: "Enter a valid email address".to_string(),
        });
    }
    if !draft.age.is_empty() {
        let in_range = draft
            .age
            .parse::<u32>()
            .is_ok_and(|age| (AGE_MIN..=AGE_MAX).contains(&age));
        if !in_range {
            return Some(FieldHint {
                field: Field::Age,
                message: format!("Age must be between {AGE_MIN} and {AGE_MAX}"),
            });
        }
    }
    None
}

fn is_email_shaped(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(email: &str, age: &str) -> VoterRegistration {
        VoterRegistration {
            id: "V1".into(),
            name: "Ada".into(),
            email: email.into(),
            place: "London".into(),
            age: age.into(),
        }
    }

    #[test]
    fn test_age_accepts_at_most_three_digits() {
        assert!(Field::Age.accepts("", '4'));
        assert!(Field::Age.accepts("10", '0'));
        assert!(!Field::Age.accepts("100", '1'));
        assert!(!Field::Age.accepts("", 'x'));
        assert!(!Field::Age.accepts("", '-'));
    }

    #[test]
    fn test_text_fields_accept_any_printable() {
        assert!(Field::VoterId.accepts("", ' '));
        assert!(Field::Name.accepts("Zoë", 'é'));
        assert!(!Field::Name.accepts("", '\u{7}'));
    }

    #[test]
    fn test_empty_values_pass_widget_checks() {
        assert_eq!(check_registration(&VoterRegistration::default()), None);
    }

    #[test]
    fn test_age_out_of_range_is_hinted() {
        for age in ["17", "0", "101", "999"] {
            let hint = check_registration(&draft("a@b.c", age)).unwrap();
            assert_eq!(hint.field, Field::Age);
        }
        assert_eq!(check_registration(&draft("a@b.c", "18")), None);
        assert_eq!(check_registration(&draft("a@b.c", "100")), None);
    }

    #[test]
    fn test_email_shape_is_hinted() {
        for email in ["ada", "@example.com", "ada@", "a@b@c", "a da@x.y"] {
            let hint = check_registration(&draft(email, "30")).unwrap();
            assert_eq!(hint.field, Field::Email, "{email}");
        }
    }

    #[test]
    fn test_focus_wraps_within_tab() {
        let mut focus = FieldFocus::default();
        assert_eq!(focus.current(Tab::Register), Field::RegisterId);
        focus.prev(Tab::Register);
        assert_eq!(focus.current(Tab::Register), Field::Age);
        focus.next(Tab::Register);
        assert_eq!(focus.current(Tab::Register), Field::RegisterId);

        focus.next(Tab::Login);
        assert_eq!(focus.current(Tab::Login), Field::VoterId);
    }

    #[test]
    fn test_focus_jumps_to_named_field() {
        let mut focus = FieldFocus::default();
        focus.focus(Tab::Register, Field::Email);
        assert_eq!(focus.current(Tab::Register), Field::Email);
        focus.focus(Tab::Register, Field::Password);
        assert_eq!(focus.current(Tab::Register), Field::Email);
    }
}
