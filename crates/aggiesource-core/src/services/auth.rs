//! Sign-In / Sign-Up
//!
//! There are no accounts. Signing in or up only picks the landing page for a
//! role; signup additionally gates students and admins on their email domain.

use crate::domain::{DomainError, DomainResult, Role};

/// Values read from the sign-in form
#[derive(Debug, Clone, Copy)]
pub struct SignIn<'a> {
    pub view: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Values read from the sign-up form
#[derive(Debug, Clone, Copy)]
pub struct SignUp<'a> {
    pub role: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpOutcome {
    /// Confirmation shown before redirecting
    pub message: String,
    /// `None` for a role with no landing page
    pub target: Option<&'static str>,
}

/// Access gate for the signup button.
///
/// Only the suffix is checked; roles other than student and admin pass.
pub fn check_signup_email(role: &str, email: &str) -> DomainResult<()> {
    let email = email.trim().to_lowercase();
    match role.parse::<Role>() {
        Ok(role) => role.check_email(&email),
        Err(()) => Ok(()),
    }
}

/// Resolve the landing page for a sign-in.
pub fn sign_in(form: SignIn<'_>) -> DomainResult<Option<&'static str>> {
    if form.view.is_empty() {
        return Err(DomainError::MissingInput(
            "Please choose which view you want to enter (Admin, Student, or Volunteer).",
        ));
    }
    if form.email.trim().is_empty() || form.password.trim().is_empty() {
        return Err(DomainError::MissingInput(
            "Please enter an email and password before signing in.",
        ));
    }
    Ok(form.view.parse::<Role>().ok().map(|role| role.landing_page()))
}

/// Resolve the confirmation and landing page for a sign-up.
///
/// The domain gate runs separately, ahead of this.
pub fn sign_up(form: SignUp<'_>) -> DomainResult<SignUpOutcome> {
    if form.email.trim().is_empty() || form.password.trim().is_empty() || form.role.is_empty() {
        return Err(DomainError::MissingInput(
            "Please enter an email, password, and choose your role to sign up.",
        ));
    }
    Ok(SignUpOutcome {
        message: format!(
            "Sign-up successful!\nYou are registered as a {}. Redirecting you to your view.",
            form.role
        ),
        target: form.role.parse::<Role>().ok().map(|role| role.landing_page()),
    })
}
