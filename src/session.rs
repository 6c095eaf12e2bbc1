//! Session

use std::fmt::{self, Display, Formatter};

/// Role a visitor signs in as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Shopper
    Customer,

    /// May manage the catalog and see every order.
    Operator,
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Customer => "customer",
            Self::Operator => "operator",
        })
    }
}

/// User identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(String);

impl UserId {
    /// Wrap a raw identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Role
    pub role: Role,
}

impl User {
    /// The fixed identity used when signing in as `role`.
    ///
    /// Signing in is a simulated identity switch: no credentials are checked
    /// and the same role always yields the same user.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Customer => Self {
                id: UserId::new("customer-123"),
                name: "Customer".to_owned(),
                email: "customer@example.com".to_owned(),
                role,
            },
            Role::Operator => Self {
                id: UserId::new("operator-123"),
                name: "Admin User".to_owned(),
                email: "admin@example.com".to_owned(),
                role,
            },
        }
    }

    /// Whether this user holds the operator role.
    pub fn is_operator(&self) -> bool {
        self.role == Role::Operator
    }
}

/// The current visitor: anonymous or exactly one signed-in user.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// An anonymous session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign in as `role`, replacing whoever was signed in.
    pub fn login(&mut self, role: Role) -> &User {
        self.user.insert(User::for_role(role))
    }

    /// Sign out. Returns the user who was signed in, if any.
    pub fn logout(&mut self) -> Option<User> {
        self.user.take()
    }

    /// The signed-in user.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether anyone is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the signed-in user is an operator.
    pub fn is_operator(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_operator)
    }
}
