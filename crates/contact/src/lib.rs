mod config;
mod controller;
mod error;
mod notification;
mod resend;
mod simulated;
mod smtp;
mod submission;
mod submitter;
mod validation;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use notification::*;
pub use resend::*;
pub use simulated::*;
pub use smtp::*;
pub use submission::*;
pub use submitter::*;
pub use validation::*;
