//! Form binding and validation
//!
//! Typed counterparts of the HTML forms. Validation failures never abort the
//! request: handlers collect the messages and re-render the same template
//! with HTTP 200, keeping what the user typed.

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::Group;

/// Post creation / edit form
#[derive(Debug, Deserialize, Validate)]
pub struct PostForm {
    #[validate(custom(function = "validate_post_text"))]
    pub text: String,
    /// Raw group selection from the `<select>`; the empty string means
    /// "no group".
    #[serde(default)]
    pub group: Option<String>,
}

impl PostForm {
    /// Resolve the raw group selection to a group id. The selector only ever
    /// submits ids it was rendered with, so a non-numeric value is a tampered
    /// request and is reported like any other invalid choice.
    pub fn group_id(&self) -> Result<Option<i64>, String> {
        match self.group.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse::<i64>()
                .map(Some)
                .map_err(|_| "Select a valid group.".to_string()),
        }
    }
}

fn validate_post_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("Post text must not be empty.".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Account creation form
#[derive(Debug, Deserialize, Validate)]
pub struct SignupForm {
    #[validate(custom(function = "crate::validators::validate_username_shape"))]
    pub username: String,
    #[serde(default)]
    #[validate(custom(function = "crate::validators::validate_optional_email"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters."))]
    pub password1: String,
    pub password2: String,
}

impl SignupForm {
    /// Full validation: field rules plus the password confirmation check.
    pub fn clean(&self) -> Vec<String> {
        let mut errors = error_messages(self.validate());
        if self.password1 != self.password2 {
            errors.push("The two password fields didn't match.".to_string());
        }
        errors
    }
}

/// Login form
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub next: Option<String>,
}

/// Flatten validator output into displayable messages, sorted for a stable
/// order (field errors come out of a map).
pub fn error_messages(result: Result<(), ValidationErrors>) -> Vec<String> {
    let Err(errors) = result else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for (field, errs) in errors.field_errors() {
        for err in errs {
            match &err.message {
                Some(msg) => out.push(msg.to_string()),
                None => out.push(format!("Invalid value for {field}.")),
            }
        }
    }
    out.sort();
    out
}

/// One entry of the group `<select>` on the post form.
#[derive(Debug, Clone)]
pub struct GroupOption {
    pub id: i64,
    pub title: String,
    pub selected: bool,
}

pub fn group_options(groups: &[Group], selected: Option<i64>) -> Vec<GroupOption> {
    groups
        .iter()
        .map(|g| GroupOption {
            id: g.id,
            title: g.title.clone(),
            selected: selected == Some(g.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_post_text_is_rejected() {
        let form = PostForm {
            text: "   ".to_string(),
            group: None,
        };
        let errors = error_messages(form.validate());
        assert_eq!(errors, vec!["Post text must not be empty.".to_string()]);
    }

    #[test]
    fn post_group_field_parses() {
        let none = PostForm {
            text: "hi".into(),
            group: Some(String::new()),
        };
        assert_eq!(none.group_id().unwrap(), None);

        let some = PostForm {
            text: "hi".into(),
            group: Some("7".into()),
        };
        assert_eq!(some.group_id().unwrap(), Some(7));

        let bad = PostForm {
            text: "hi".into(),
            group: Some("seven".into()),
        };
        assert!(bad.group_id().is_err());
    }

    #[test]
    fn signup_password_mismatch_is_reported() {
        let form = SignupForm {
            username: "Petr".into(),
            email: String::new(),
            password1: "longenough".into(),
            password2: "different1".into(),
        };
        let errors = form.clean();
        assert!(errors
            .iter()
            .any(|e| e.contains("password fields didn't match")));
    }

    #[test]
    fn signup_valid_form_has_no_errors() {
        let form = SignupForm {
            username: "Petr".into(),
            email: "petr@example.com".into(),
            password1: "longenough".into(),
            password2: "longenough".into(),
        };
        assert!(form.clean().is_empty());
    }

    #[test]
    fn group_options_mark_selection() {
        let groups = vec![
            Group {
                id: 1,
                title: "One".into(),
                slug: "one".into(),
                description: String::new(),
            },
            Group {
                id: 2,
                title: "Two".into(),
                slug: "two".into(),
                description: String::new(),
            },
        ];
        let options = group_options(&groups, Some(2));
        assert!(!options[0].selected);
        assert!(options[1].selected);
    }
}
