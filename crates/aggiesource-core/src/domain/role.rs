//! Site Roles
//!
//! Which landing page a role goes to and which email domain it must sign up with.

use std::str::FromStr;
use super::error::{DomainError, DomainResult};

/// Student accounts are issued under this domain
pub const STUDENT_EMAIL_SUFFIX: &str = "@aggies.ncat.edu";
/// Staff accounts are issued under the school domain
pub const STAFF_EMAIL_SUFFIX: &str = "@ncat.edu";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Student,
    Volunteer,
}

impl Role {
    /// Page the role is redirected to after signing in or up
    pub fn landing_page(&self) -> &'static str {
        match self {
            Role::Admin => "admin.html",
            Role::Student => "student.html",
            Role::Volunteer => "volunteer.html",
        }
    }

    /// Check a signup email against the role's domain.
    ///
    /// `email` is expected trimmed and lower-cased. Volunteers may use any address.
    pub fn check_email(&self, email: &str) -> DomainResult<()> {
        match self {
            Role::Student if !email.ends_with(STUDENT_EMAIL_SUFFIX) => Err(DomainError::AccessDenied(
                "Students must sign up with an @aggies.ncat.edu email address.",
            )),
            Role::Admin if !email.ends_with(STAFF_EMAIL_SUFFIX) => Err(DomainError::AccessDenied(
                "Admins must sign up with an @ncat.edu email address.",
            )),
            _ => Ok(()),
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "student" => Ok(Role::Student),
            "volunteer" => Ok(Role::Volunteer),
            _ => Err(()),
        }
    }
}
