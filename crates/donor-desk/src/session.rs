//! Session descriptor handed in by whatever sits in front of the dashboard.
//!
//! The session is opaque: this crate never authenticates anyone, it only refuses
//! staff operations when the provider says the caller is not logged in as staff.

use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

pub const LOGGED_IN_HEADER: &str = "x-session-logged-in";
pub const ROLE_HEADER: &str = "x-session-role";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Member,
    Staff,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Staff => "staff",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionContext {
    pub logged_in: bool,
    pub role: Role,
}

impl SessionContext {
    pub const fn staff() -> Self {
        Self {
            logged_in: true,
            role: Role::Staff,
        }
    }

    pub const fn anonymous() -> Self {
        Self {
            logged_in: false,
            role: Role::Member,
        }
    }

    /// Read the session from request headers. Missing or malformed values fall back
    /// to an anonymous member.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let logged_in = headers
            .get(LOGGED_IN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let role = headers
            .get(ROLE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| match value.trim().to_ascii_lowercase().as_str() {
                "staff" => Role::Staff,
                _ => Role::Member,
            })
            .unwrap_or_default();

        Self { logged_in, role }
    }

    pub fn require_staff(&self) -> Result<(), SessionError> {
        if !self.logged_in {
            return Err(SessionError::NotLoggedIn);
        }
        if self.role != Role::Staff {
            return Err(SessionError::StaffOnly { role: self.role });
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("access denied: not logged in")]
    NotLoggedIn,
    #[error("access denied: staff role required (current role {})", .role.label())]
    StaffOnly { role: Role },
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn staff_headers_pass_the_gate() {
        let mut headers = HeaderMap::new();
        headers.insert(LOGGED_IN_HEADER, HeaderValue::from_static("true"));
        headers.insert(ROLE_HEADER, HeaderValue::from_static("Staff"));

        let session = SessionContext::from_headers(&headers);

        assert_eq!(session, SessionContext::staff());
        assert!(session.require_staff().is_ok());
    }

    #[test]
    fn members_and_anonymous_callers_are_refused() {
        let mut headers = HeaderMap::new();
        headers.insert(LOGGED_IN_HEADER, HeaderValue::from_static("true"));
        headers.insert(ROLE_HEADER, HeaderValue::from_static("member"));

        match SessionContext::from_headers(&headers).require_staff() {
            Err(SessionError::StaffOnly { role }) => assert_eq!(role, Role::Member),
            other => panic!("expected staff-only refusal, got {other:?}"),
        }

        match SessionContext::from_headers(&HeaderMap::new()).require_staff() {
            Err(SessionError::NotLoggedIn) => {}
            other => panic!("expected not logged in, got {other:?}"),
        }
    }

    #[test]
    fn staff_role_without_login_is_refused() {
        let session = SessionContext {
            logged_in: false,
            role: Role::Staff,
        };
        assert!(matches!(
            session.require_staff(),
            Err(SessionError::NotLoggedIn)
        ));
    }
}
