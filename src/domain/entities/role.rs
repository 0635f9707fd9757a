//! Caller roles and area access rules.
//!
//! The auth backend and older clients spell roles many ways (`owner`,
//! `ROLE_HOTEL_MANAGER`, `Hotel Owner`, ...). [`Role::parse`] folds all of them into
//! one closed enum at the HTTP boundary so the rest of the crate matches on a single
//! representation.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    HotelOwner,
    Admin,
}

impl Role {
    /// Parses any known role spelling. Case, a `ROLE_` prefix and the separator
    /// (`_`, `-` or space) are ignored.
    ///
    /// Returns `None` for unrecognized input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        let stripped = lower.strip_prefix("role_").unwrap_or(&lower);
        let key: String = stripped
            .chars()
            .map(|c| if c == '-' || c == ' ' { '_' } else { c })
            .collect();

        match key.as_str() {
            "user" | "customer" | "guest" => Some(Self::Customer),
            "owner" | "hotel_owner" | "hotel_manager" | "manager" | "hotelier" => {
                Some(Self::HotelOwner)
            }
            "admin" | "super_admin" | "hotel_admin" | "administrator" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::HotelOwner => "hotel_owner",
            Self::Admin => "admin",
        }
    }

    /// Path a client is sent to after signing in.
    pub fn landing_path(&self) -> &'static str {
        match self {
            Self::Customer => "/dashboard",
            Self::HotelOwner => "/owner",
            Self::Admin => "/admin",
        }
    }
}

/// Part of the application a route belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    /// Any signed-in user.
    Customer,
    Owner,
    Admin,
}

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// No authenticated caller; client should be sent to the login page.
    LoginRequired,
    /// Authenticated, but the role does not cover the area.
    Denied,
}

/// Decides whether `role` may enter `area`.
pub fn authorize(role: Option<Role>, area: Area) -> Access {
    let Some(role) = role else {
        return Access::LoginRequired;
    };

    let allowed = match area {
        Area::Customer => true,
        Area::Owner => role == Role::HotelOwner,
        Area::Admin => role == Role::Admin,
    };

    if allowed {
        Access::Granted
    } else {
        Access::Denied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_customer_spellings() {
        for raw in ["user", "customer", "ROLE_CUSTOMER", "Customer", " guest "] {
            assert_eq!(Role::parse(raw), Some(Role::Customer), "{raw}");
        }
    }

    #[test]
    fn test_parse_owner_spellings() {
        for raw in ["owner", "Hotel Owner", "ROLE_HOTEL_MANAGER", "hotel-owner", "OWNER"] {
            assert_eq!(Role::parse(raw), Some(Role::HotelOwner), "{raw}");
        }
    }

    #[test]
    fn test_parse_admin_spellings() {
        for raw in ["admin", "ROLE_ADMIN", "super_admin", "hotel_admin", "Administrator"] {
            assert_eq!(Role::parse(raw), Some(Role::Admin), "{raw}");
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("root"), None);
        assert_eq!(Role::parse("ROLE_"), None);
    }

    #[test]
    fn test_parse_round_trips_canonical_names() {
        for role in [Role::Customer, Role::HotelOwner, Role::Admin] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_landing_paths() {
        assert_eq!(Role::Admin.landing_path(), "/admin");
        assert_eq!(Role::HotelOwner.landing_path(), "/owner");
        assert_eq!(Role::Customer.landing_path(), "/dashboard");
    }

    #[test]
    fn test_authorize() {
        assert_eq!(authorize(None, Area::Customer), Access::LoginRequired);
        assert_eq!(authorize(None, Area::Admin), Access::LoginRequired);

        assert_eq!(authorize(Some(Role::Customer), Area::Customer), Access::Granted);
        assert_eq!(authorize(Some(Role::Admin), Area::Customer), Access::Granted);

        assert_eq!(authorize(Some(Role::HotelOwner), Area::Owner), Access::Granted);
        assert_eq!(authorize(Some(Role::Admin), Area::Owner), Access::Denied);
        assert_eq!(authorize(Some(Role::Customer), Area::Owner), Access::Denied);

        assert_eq!(authorize(Some(Role::Admin), Area::Admin), Access::Granted);
        assert_eq!(authorize(Some(Role::HotelOwner), Area::Admin), Access::Denied);
    }
}
