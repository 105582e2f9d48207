use std::fmt;

use super::*;

impl Claim {
    pub fn new(kind: ClaimType, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClaimType::Identifier => "identifier",
            ClaimType::Name => "name",
            ClaimType::Email => "email",
        })
    }
}

impl Principal {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn new(claims: Vec<Claim>) -> Self {
        Self { claims }
    }

    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn is_authenticated(&self) -> bool {
        !self.claims.is_empty()
    }

    pub fn find(&self, kind: ClaimType) -> Option<&str> {
        self.claims
            .iter()
            .find(|claim| claim.kind == kind)
            .map(|claim| claim.value.as_str())
    }

    pub fn identifier(&self) -> Option<&str> {
        self.find(ClaimType::Identifier)
    }

    pub fn name(&self) -> Option<&str> {
        self.find(ClaimType::Name)
    }

    pub fn email(&self) -> Option<&str> {
        self.find(ClaimType::Email)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "<Principal:{name}>"),
            None => f.write_str("<Principal:Anonymous>"),
        }
    }
}

impl AuthenticationState {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn new(user: Principal) -> Self {
        Self { user }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_authenticated()
    }
}

impl From<Principal> for AuthenticationState {
    fn from(user: Principal) -> Self {
        Self { user }
    }
}
