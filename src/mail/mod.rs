pub mod model;

/// attributes shared by every category of mail, fixed at construction
#[derive(Debug, Clone)]
pub struct MailBase {
    /// weight in grams; assumed non-negative, never validated
    pub weight: f64,
    pub is_express: bool,
    /// may be empty, in which case the item is undeliverable
    pub destination: String,
}

impl MailBase {
    pub fn new(weight: f64, is_express: bool, destination: impl Into<String>) -> Self {
        Self {
            weight,
            is_express,
            destination: destination.into(),
        }
    }

    pub fn is_addressed(&self) -> bool {
        !self.destination.is_empty()
    }
}

/// capability set implemented by every mail variant
///
/// All operations are total and side-effect free: postage and validity are
/// pure functions of the item's own attributes, and validity never consults
/// postage.
pub trait Mail {
    fn base(&self) -> &MailBase;

    /// postage cost in currency units (the tariffs are thousandths-scaled)
    fn calculate_postage(&self) -> f64;

    /// whether the item can be delivered
    fn is_valid(&self) -> bool;

    fn mail_type(&self) -> &'static str;

    /// variant-specific extra line for the printed report, if any
    fn detail_line(&self) -> Option<String> {
        None
    }
}
