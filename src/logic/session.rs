//! Session guard
//!
//! Pure access decision over the authenticated-session snapshot. This is a
//! rendering/navigation gate only, never a security boundary; the backend
//! authorizes every mutating request on its own.

/// Capability level a screen requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    /// Any signed-in user
    Authenticated,
    /// Staff member (admins qualify)
    Staff,
    /// Admin only
    Admin,
}

impl AccessLevel {
    pub fn as_str(&self) -> &str {
        match self {
            AccessLevel::Authenticated => "user",
            AccessLevel::Staff => "staff",
            AccessLevel::Admin => "admin",
        }
    }
}

/// Point-in-time view of the session's capability flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub authenticated: bool,
    pub admin: bool,
    pub staff: bool,
    /// Session still resolving (token loaded, current user not fetched yet)
    pub loading: bool,
}

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving: render a placeholder, make no access call yet
    Loading,
    Allow,
    /// Send the user to login, remembering where they were headed
    Redirect,
}

/// Decide whether the session may enter a region requiring `level`.
///
/// The loading check precedes every capability check so an unresolved session
/// never bounces to login only to bounce back a moment later.
pub fn check_access(level: AccessLevel, auth: &AuthSnapshot) -> GuardDecision {
    if auth.loading {
        return GuardDecision::Loading;
    }

    let allowed = match level {
        AccessLevel::Authenticated => auth.authenticated,
        AccessLevel::Admin => auth.authenticated && auth.admin,
        // Admin implies staff-level access
        AccessLevel::Staff => auth.authenticated && (auth.staff || auth.admin),
    };

    if allowed {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(authenticated: bool, admin: bool, staff: bool) -> AuthSnapshot {
        AuthSnapshot {
            authenticated,
            admin,
            staff,
            loading: false,
        }
    }

    #[test]
    fn test_loading_precedes_every_capability_check() {
        let loading = AuthSnapshot {
            authenticated: false,
            admin: false,
            staff: false,
            loading: true,
        };
        assert_eq!(check_access(AccessLevel::Admin, &loading), GuardDecision::Loading);
        assert_eq!(
            check_access(AccessLevel::Authenticated, &loading),
            GuardDecision::Loading
        );
    }

    #[test]
    fn test_authenticated_level() {
        assert_eq!(
            check_access(AccessLevel::Authenticated, &auth(true, false, false)),
            GuardDecision::Allow
        );
        assert_eq!(
            check_access(AccessLevel::Authenticated, &auth(false, false, false)),
            GuardDecision::Redirect
        );
    }

    #[test]
    fn test_admin_level_requires_admin_flag() {
        assert_eq!(
            check_access(AccessLevel::Admin, &auth(true, true, false)),
            GuardDecision::Allow
        );
        assert_eq!(
            check_access(AccessLevel::Admin, &auth(true, false, true)),
            GuardDecision::Redirect
        );
    }

    #[test]
    fn test_admin_implies_staff() {
        assert_eq!(
            check_access(AccessLevel::Staff, &auth(true, true, false)),
            GuardDecision::Allow
        );
        assert_eq!(
            check_access(AccessLevel::Staff, &auth(true, false, true)),
            GuardDecision::Allow
        );
        assert_eq!(
            check_access(AccessLevel::Staff, &auth(true, false, false)),
            GuardDecision::Redirect
        );
    }

    #[test]
    fn test_flags_without_authentication_still_redirect() {
        // Stale flags can't grant access once the session is signed out
        assert_eq!(
            check_access(AccessLevel::Admin, &auth(false, true, true)),
            GuardDecision::Redirect
        );
    }
}
