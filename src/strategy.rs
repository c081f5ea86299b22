use crate::error::UserError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Conventional owner field name, used when an owner rule does not name one
pub const DEFAULT_OWNER_FIELD: &str = "owner";
/// Conventional identity-token claim compared against the owner field
pub const DEFAULT_IDENTITY_CLAIM: &str = "username";
/// Conventional identity-token claim holding group membership
pub const DEFAULT_GROUP_CLAIM: &str = "cognito:groups";
/// Conventional record field holding dynamic group membership
pub const DEFAULT_GROUPS_FIELD: &str = "groups";

/// Which authorization mode an [`crate::AuthRule`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStrategy {
    /// Access for the identity whose claim matches a designated record field
    Owner,
    /// Access for members of designated groups, static or field-sourced
    Groups,
    Public,
    Private,
    Custom,
}

impl Display for AuthStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthStrategy::Owner => write!(f, "owner"),
            AuthStrategy::Groups => write!(f, "groups"),
            AuthStrategy::Public => write!(f, "public"),
            AuthStrategy::Private => write!(f, "private"),
            AuthStrategy::Custom => write!(f, "custom"),
        }
    }
}

impl FromStr for AuthStrategy {
    type Err = UserError;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        match name {
            "owner" => Ok(AuthStrategy::Owner),
            "groups" => Ok(AuthStrategy::Groups),
            "public" => Ok(AuthStrategy::Public),
            "private" => Ok(AuthStrategy::Private),
            "custom" => Ok(AuthStrategy::Custom),
            _ => Err(UserError::UnknownAuthStrategy {
                name: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(AuthStrategy::from_str("owner").unwrap(), AuthStrategy::Owner);
        assert_eq!(
            AuthStrategy::from_str("groups").unwrap(),
            AuthStrategy::Groups
        );

        let err = AuthStrategy::from_str("everyone").unwrap_err();
        assert!(matches!(err, UserError::UnknownAuthStrategy { name } if name == "everyone"));
    }

    #[test]
    fn test_display_round_trips() {
        for strategy in [
            AuthStrategy::Owner,
            AuthStrategy::Groups,
            AuthStrategy::Public,
            AuthStrategy::Private,
            AuthStrategy::Custom,
        ] {
            assert_eq!(
                AuthStrategy::from_str(&strategy.to_string()).unwrap(),
                strategy
            );
        }
    }
}
