use custom_error::custom_error;

custom_error! {
///! Custom error for offer form fields that fail validation.
pub MalformedInput
    InvalidEmail{email:String} = "`email` is not a valid email address: {email}",
    InvalidSubject{subject:String} = "`subject` must be a non-empty string: {subject}",
}
