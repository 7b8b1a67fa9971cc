use std::convert::TryFrom;

use validator::validate_email;

use crate::domain::errors::MalformedInput;

#[derive(Clone, Debug)]
pub struct ContactEmail(String);

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContactEmail {
    type Error = MalformedInput;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        if validate_email(&email) {
            Ok(ContactEmail(email))
        } else {
            Err(MalformedInput::InvalidEmail { email })
        }
    }
}
