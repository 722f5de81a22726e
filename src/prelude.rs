pub use crate::cli::{
    command::{self, Cli, Config},
    run::{run_app, serve},
};
pub use crate::domain::{
    contact::{self, Contact, ContactId},
    form::{self, FormState},
    store::{ContactStore, SharedStore},
};
pub use crate::errors::AppError;
pub use crate::web::{AppState, router};
