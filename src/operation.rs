use crate::error::UserError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// A model operation that an [`crate::AuthRule`] can restrict. Operations not
/// listed on a rule are left unrestricted by that rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelOperation {
    Create,
    Read,
    Update,
    Delete,
}

impl Display for ModelOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelOperation::Create => write!(f, "create"),
            ModelOperation::Read => write!(f, "read"),
            ModelOperation::Update => write!(f, "update"),
            ModelOperation::Delete => write!(f, "delete"),
        }
    }
}

impl FromStr for ModelOperation {
    type Err = UserError;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        match name {
            "create" => Ok(ModelOperation::Create),
            "read" => Ok(ModelOperation::Read),
            "update" => Ok(ModelOperation::Update),
            "delete" => Ok(ModelOperation::Delete),
            _ => Err(UserError::UnknownModelOperation {
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
        assert_eq!(
            ModelOperation::from_str("create").unwrap(),
            ModelOperation::Create
        );

        let err = ModelOperation::from_str("list").unwrap_err();
        assert!(matches!(err, UserError::UnknownModelOperation { name } if name == "list"));
    }
}
