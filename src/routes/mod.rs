mod contact;
mod form_relay;
mod health_check;
mod newsletter;
mod not_found;
mod privacy_policy;

pub use contact::*;
pub use form_relay::*;
pub use health_check::*;
pub use newsletter::*;
pub use not_found::*;
pub use privacy_policy::*;
