mod error;
mod operation;
mod rule;
mod strategy;

pub use error::{Error, Result, UserError};
pub use operation::ModelOperation;
pub use rule::{AuthRule, AuthRuleBuilder, AuthRuleDescriptor, AuthRuleList};
pub use strategy::{
    AuthStrategy, DEFAULT_GROUPS_FIELD, DEFAULT_GROUP_CLAIM, DEFAULT_IDENTITY_CLAIM,
    DEFAULT_OWNER_FIELD,
};
