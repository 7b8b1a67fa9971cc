use std::convert::TryFrom;

use crate::domain::errors::MalformedInput;

#[derive(Clone, Debug)]
pub struct OfferSubject(String);

impl TryFrom<String> for OfferSubject {
    type Error = MalformedInput;

    fn try_from(subject: String) -> Result<Self, Self::Error> {
        if subject.trim().is_empty() {
            Err(MalformedInput::InvalidSubject { subject })
        } else {
            Ok(Self(subject))
        }
    }
}

impl AsRef<str> for OfferSubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
