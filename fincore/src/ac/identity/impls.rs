use std::fmt;

use super::SessionIdentity;

impl SessionIdentity {
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            email: email.into(),
            token: token.into(),
        }
    }

    /// The bearer credential, if one was actually issued.
    pub fn bearer_token(&self) -> Option<&str> {
        (!self.token.is_empty()).then_some(self.token.as_str())
    }
}

// the token must never end up in the logs.
impl fmt::Debug for SessionIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionIdentity")
            .field("user_id", &self.user_id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for SessionIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<User:{}>", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_camel_case() -> anyhow::Result<()> {
        let identity: SessionIdentity = serde_json::from_str(r#"{
            "userId": "1",
            "name": "Ann",
            "email": "ann@x.com",
            "token": "secret"
        }"#)?;
        assert_eq!(identity, SessionIdentity::new("1", "Ann", "ann@x.com", "secret"));
        assert_eq!(identity.bearer_token(), Some("secret"));
        Ok(())
    }

    #[test]
    fn debug_redacts_token() {
        let identity = SessionIdentity::new("1", "Ann", "ann@x.com", "secret");
        let output = format!("{identity:?}");
        assert!(!output.contains("secret"));
        assert!(output.contains("ann@x.com"));
        assert_eq!(identity.to_string(), "<User:Ann>");
    }

    #[test]
    fn empty_token() {
        let identity = SessionIdentity::new("1", "Ann", "ann@x.com", "");
        assert_eq!(identity.bearer_token(), None);
    }
}
