use askama::Template;

use crate::domain::contact::Contact;
use crate::domain::form::FormState;

/// Full page: the add form followed by every contact.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub contacts: &'a [Contact],
    pub form: &'a FormState,
}

#[derive(Template)]
#[template(path = "form.html")]
pub struct FormTemplate<'a> {
    pub form: &'a FormState,
}

/// Appends one contact to the list through an htmx out-of-band swap.
#[derive(Template)]
#[template(path = "oob_contact.html")]
pub struct OobContactTemplate<'a> {
    pub contact: &'a Contact,
}
