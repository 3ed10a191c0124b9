/// A composed message, ready to be addressed and handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}
