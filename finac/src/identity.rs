use fincore::ac::{
    identity::SessionIdentity,
    principal::{
        AuthenticationState,
        Claim,
        ClaimType,
        Principal,
    },
};

/// The principal for a session identity: identifier, name and email
/// claims in that order, or the anonymous principal for no identity.
pub fn derive_principal(identity: Option<&SessionIdentity>) -> Principal {
    match identity {
        Some(identity) => Principal::new(vec![
            Claim::new(ClaimType::Identifier, identity.user_id.as_str()),
            Claim::new(ClaimType::Name, identity.name.as_str()),
            Claim::new(ClaimType::Email, identity.email.as_str()),
        ]),
        None => Principal::anonymous(),
    }
}

pub fn derive_state(identity: Option<&SessionIdentity>) -> AuthenticationState {
    AuthenticationState::new(derive_principal(identity))
}
