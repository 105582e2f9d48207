use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum ClaimType {
    Identifier,
    Name,
    Email,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Claim {
    pub kind: ClaimType,
    pub value: String,
}

/// A claims based principal; an empty set of claims denotes the
/// anonymous principal.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct Principal {
    claims: Vec<Claim>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct AuthenticationState {
    pub user: Principal,
}

mod impls;
