/// Client input rejected before any delivery is attempted.
///
/// The `Display` text is returned verbatim to the caller.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum InvalidSubmission {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Email address is required.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}
