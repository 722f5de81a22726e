use crate::errors::AppError;

pub type ContactId = u64;

/// Any integer is a well-formed id; one that cannot name a contact is just unknown.
pub fn parse_contact_id(raw: &str) -> Result<ContactId, AppError> {
    let id: i64 = raw
        .parse()
        .map_err(|_| AppError::InvalidIdFormat(raw.to_string()))?;
    ContactId::try_from(id).map_err(|_| AppError::NotFound("Contact".to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
}

impl Contact {
    pub fn new(id: ContactId, name: String, email: String) -> Self {
        Contact { id, name, email }
    }

    /// Emails are compared exactly; `A@a.com` and `a@a.com` are different contacts.
    pub fn has_email(&self, email: &str) -> bool {
        self.email == email
    }

    /// Element id used by the views for this contact's row.
    pub fn dom_id(&self) -> String {
        format!("contact-{}", self.id)
    }
}
