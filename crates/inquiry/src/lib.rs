mod command;
pub mod form;
mod notification;
mod types;

pub use command::*;
pub use form::{ContactForm, ContactFormInput, MISSING_FIELDS_MESSAGE, View};
pub use notification::*;
pub use types::*;
