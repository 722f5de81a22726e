use std::sync::{Arc, Mutex};

use super::*;
use super::contact::ContactId;

/// Handle shared between request handlers. Never hold the guard across an `.await`.
pub type SharedStore = Arc<Mutex<ContactStore>>;

/// Ordered, in-memory contact list. Insertion order is display order and no two
/// contacts share an email.
#[derive(Debug)]
pub struct ContactStore {
    mem: Vec<Contact>,
    next_id: ContactId,
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore {
    pub fn new() -> Self {
        Self {
            mem: Vec::new(),
            next_id: 1,
        }
    }

    /// Store holding the three startup contacts.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (name, email) in [("A", "a@a.com"), ("B", "b@b.com"), ("C", "c@c.com")] {
            store.push(name.to_string(), email.to_string());
        }
        store
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    pub fn list(&self) -> &[Contact] {
        &self.mem
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn has_email(&self, email: &str) -> bool {
        self.mem.iter().any(|contact| contact.has_email(email))
    }

    pub fn add(&mut self, name: String, email: String) -> Result<Contact, AppError> {
        if self.has_email(&email) {
            return Err(AppError::DuplicateEmail { name, email });
        }

        let contact = self.push(name, email);
        tracing::debug!(id = contact.id, email = %contact.email, "contact added");
        Ok(contact)
    }

    pub fn find_index_by_id(&self, id: ContactId) -> Result<usize, AppError> {
        self.mem
            .iter()
            .position(|contact| contact.id == id)
            .ok_or_else(|| AppError::NotFound("Contact".to_string()))
    }

    pub fn remove(&mut self, id: ContactId) -> Result<Contact, AppError> {
        let index = self.find_index_by_id(id)?;
        // Vec::remove shifts the tail left, so relative order is kept
        let removed = self.mem.remove(index);
        tracing::debug!(id, "contact removed");
        Ok(removed)
    }

    fn push(&mut self, name: String, email: String) -> Contact {
        let contact = Contact::new(self.next_id, name, email);
        self.next_id += 1;
        self.mem.push(contact.clone());
        contact
    }
}
