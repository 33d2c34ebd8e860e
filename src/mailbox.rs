use log::warn;
use crate::mail::Mail;

/// A bounded, insertion-ordered collection of mail items.
pub struct MailBox {
    mails: Vec<Box<dyn Mail>>,
    capacity: usize,
}

impl MailBox {
    pub fn new(capacity: usize) -> Self {
        Self {
            mails: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an item to the box.
    ///
    /// Once the box holds `capacity` items any further item is dropped and
    /// the caller gets no indication of the loss. This mirrors the original
    /// behavior and is intentional, not an error path; the drop is only
    /// visible on the warn log channel.
    pub fn add_mail(&mut self, mail: Box<dyn Mail>) {
        if self.mails.len() < self.capacity {
            self.mails.push(mail);
        } else {
            warn!(
                "mail box is full ([{}] items), dropping a [{}]",
                self.capacity,
                mail.mail_type()
            );
        }
    }

    /// total postage over all stored items, invalid ones included
    pub fn calculate_postage(&self) -> f64 {
        self.mails.iter().map(|mail| mail.calculate_postage()).sum()
    }

    pub fn invalid_mail_count(&self) -> usize {
        self.mails.iter().filter(|mail| !mail.is_valid()).count()
    }

    /// stored items in insertion order
    pub fn mails(&self) -> &[Box<dyn Mail>] {
        &self.mails
    }
}
