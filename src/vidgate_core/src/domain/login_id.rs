use super::user::UserError;

/// The username-or-email value presented at login.
///
/// Login does not care which of the two the client sent; the store matches
/// it against both columns. Normalized the same way `Username` and `Email`
/// are so lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginId(String);

impl LoginId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LoginId {
    type Error = UserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.trim().to_lowercase();
        if value.is_empty() {
            Err(UserError::EmptyLogin)
        } else {
            Ok(Self(value))
        }
    }
}
