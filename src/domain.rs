pub mod contact;
pub mod form;
pub mod store;

use crate::errors::AppError;
use self::contact::Contact;
