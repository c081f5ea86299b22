use crate::{
    error::Result,
    operation::ModelOperation,
    strategy::{
        AuthStrategy, DEFAULT_GROUPS_FIELD, DEFAULT_GROUP_CLAIM, DEFAULT_IDENTITY_CLAIM,
        DEFAULT_OWNER_FIELD,
    },
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Declarative source for an [`AuthRule`], e.g. one entry of a model's @auth
/// directive parsed from a schema document. Attribute values are carried
/// verbatim; defaulting only happens on the [`AuthRuleBuilder`] path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRuleDescriptor {
    #[serde(rename = "allow")]
    pub strategy: AuthStrategy,
    #[serde(default)]
    pub owner_field: String,
    #[serde(default)]
    pub identity_claim: String,
    #[serde(default)]
    pub group_claim: String,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub groups_field: String,
    #[serde(default)]
    pub operations: Vec<ModelOperation>,
}

impl AuthRuleDescriptor {
    pub fn from_json_str(descriptor_as_json_str: &str) -> Result<Self> {
        Ok(serde_json::from_str(descriptor_as_json_str)?)
    }
}

/// One authorization rule for who can access and operate against a model or
/// field, consumed by an external enforcement component.
///
/// Immutable once constructed. Equality and hash are structural over all
/// seven attributes; `groups` and `operations` compare element-wise in
/// order, so the same elements in a different order are unequal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthRule {
    strategy: AuthStrategy,
    owner_field: String,
    identity_claim: String,
    group_claim: String,
    groups: Vec<String>,
    groups_field: String,
    operations: Vec<ModelOperation>,
}

impl AuthRule {
    /// Create an AuthRule from a descriptor, copying every attribute
    /// verbatim. Performs no validation and cannot fail; checking that e.g.
    /// an owner rule names a real model field belongs to schema validation.
    pub fn from_descriptor(descriptor: &AuthRuleDescriptor) -> Self {
        let AuthRuleDescriptor {
            strategy,
            owner_field,
            identity_claim,
            group_claim,
            groups,
            groups_field,
            operations,
        } = descriptor;
        Self {
            strategy: *strategy,
            owner_field: owner_field.clone(),
            identity_claim: identity_claim.clone(),
            group_claim: group_claim.clone(),
            groups: groups.clone(),
            groups_field: groups_field.clone(),
            operations: operations.clone(),
        }
    }

    /// Build a rule for the given strategy, filling unset attributes with
    /// the conventional per-strategy defaults
    pub fn builder(strategy: AuthStrategy) -> AuthRuleBuilder {
        AuthRuleBuilder::new(strategy)
    }

    pub fn strategy(&self) -> AuthStrategy {
        self.strategy
    }

    /// Name of the model field holding the identity permitted access.
    /// Defaults to "owner" on the builder path when the strategy is Owner.
    pub fn owner_field(&self) -> &str {
        &self.owner_field
    }

    /// Identity-token claim compared against the owner field. Defaults to
    /// "username" on the builder path when the strategy is Owner.
    pub fn identity_claim(&self) -> &str {
        &self.identity_claim
    }

    /// Identity-token claim holding group membership. Defaults to
    /// "cognito:groups" on the builder path when the strategy is Groups.
    pub fn group_claim(&self) -> &str {
        &self.group_claim
    }

    /// Static list of groups granted access
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Name of the model field (string or array-of-string typed) holding
    /// dynamic group membership. Defaults to "groups" on the builder path
    /// when the strategy is Groups.
    pub fn groups_field(&self) -> &str {
        &self.groups_field
    }

    /// Operations this rule restricts. Operations not listed are not
    /// protected by this rule; an empty list means the rule applies to no
    /// operation.
    pub fn operations(&self) -> &[ModelOperation] {
        &self.operations
    }
}

impl Display for AuthRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operations = self
            .operations
            .iter()
            .map(|o| o.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        write!(
            f,
            "AuthRule {{ strategy={}, ownerField={:?}, identityClaim={:?}, groupClaim={:?}, groups={:?}, groupsField={:?}, operations=[{}] }}",
            self.strategy,
            self.owner_field,
            self.identity_claim,
            self.group_claim,
            self.groups,
            self.groups_field,
            operations,
        )
    }
}

/// Builder applying the conventional defaults the declarative @auth form
/// leaves implicit. Defaulting happens here, at construction, so every rule
/// has a single canonical representation by the time it is compared or
/// handed to enforcement.
#[derive(Debug, Clone)]
pub struct AuthRuleBuilder {
    strategy: AuthStrategy,
    owner_field: Option<String>,
    identity_claim: Option<String>,
    group_claim: Option<String>,
    groups: Vec<String>,
    groups_field: Option<String>,
    operations: Vec<ModelOperation>,
}

impl AuthRuleBuilder {
    pub fn new(strategy: AuthStrategy) -> Self {
        Self {
            strategy,
            owner_field: None,
            identity_claim: None,
            group_claim: None,
            groups: vec![],
            groups_field: None,
            operations: vec![],
        }
    }

    pub fn owner_field(mut self, owner_field: &str) -> Self {
        self.owner_field = Some(owner_field.to_string());
        self
    }

    pub fn identity_claim(mut self, identity_claim: &str) -> Self {
        self.identity_claim = Some(identity_claim.to_string());
        self
    }

    pub fn group_claim(mut self, group_claim: &str) -> Self {
        self.group_claim = Some(group_claim.to_string());
        self
    }

    pub fn groups(mut self, groups: Vec<String>) -> Self {
        self.groups = groups;
        self
    }

    pub fn groups_field(mut self, groups_field: &str) -> Self {
        self.groups_field = Some(groups_field.to_string());
        self
    }

    pub fn operations(mut self, operations: Vec<ModelOperation>) -> Self {
        self.operations = operations;
        self
    }

    pub fn build(self) -> AuthRule {
        let owner = self.strategy == AuthStrategy::Owner;
        let groups = self.strategy == AuthStrategy::Groups;
        AuthRule {
            strategy: self.strategy,
            owner_field: self
                .owner_field
                .unwrap_or_else(|| default_for(owner, DEFAULT_OWNER_FIELD)),
            identity_claim: self
                .identity_claim
                .unwrap_or_else(|| default_for(owner, DEFAULT_IDENTITY_CLAIM)),
            group_claim: self
                .group_claim
                .unwrap_or_else(|| default_for(groups, DEFAULT_GROUP_CLAIM)),
            groups: self.groups,
            groups_field: self
                .groups_field
                .unwrap_or_else(|| default_for(groups, DEFAULT_GROUPS_FIELD)),
            operations: self.operations,
        }
    }
}

fn default_for(applies: bool, conventional: &str) -> String {
    if applies {
        conventional.to_string()
    } else {
        String::new()
    }
}

/// Ordered list of the auth rules attached to one model or field, in
/// declaration order. Enforcement evaluates rules in this order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct AuthRuleList {
    rules: Vec<AuthRule>,
}

impl AuthRuleList {
    pub fn from_descriptors<'a>(
        descriptors: impl IntoIterator<Item = &'a AuthRuleDescriptor>,
    ) -> Self {
        let rules = descriptors
            .into_iter()
            .map(AuthRule::from_descriptor)
            .collect();
        Self { rules }
    }

    pub fn iter(&self) -> impl Iterator<Item = &AuthRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<AuthRule> for AuthRuleList {
    fn from_iter<I: IntoIterator<Item = AuthRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
