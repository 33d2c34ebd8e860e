use crate::mail::{Mail, MailBase};

/// the one letter format with its own tariff; anything else is priced as a
/// generic format and the string is never validated
const A3_FORMAT: &str = "A3";

/// a package larger than this cannot be delivered
const MAX_DELIVERABLE_VOLUME: f64 = 50.0;

#[derive(Debug)]
pub struct Letter {
    base: MailBase,
    format: String,
}

impl Letter {
    pub fn new(
        weight: f64,
        is_express: bool,
        destination: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            base: MailBase::new(weight, is_express, destination),
            format: format.into(),
        }
    }
}

impl Mail for Letter {
    fn base(&self) -> &MailBase {
        &self.base
    }

    fn calculate_postage(&self) -> f64 {
        let tariff = match (self.base.is_express, self.format == A3_FORMAT) {
            (true, true) => 7.0 + self.base.weight * 2.0,
            (true, false) => 5.0 + self.base.weight * 2.0,
            (false, true) => 3.5 + self.base.weight,
            (false, false) => 2.5 + self.base.weight,
        };
        tariff / 1000.0
    }

    fn is_valid(&self) -> bool {
        self.base.is_addressed()
    }

    fn mail_type(&self) -> &'static str {
        "Letter"
    }

    fn detail_line(&self) -> Option<String> {
        Some(format!("Format: {}", self.format))
    }
}

#[derive(Debug)]
pub struct Advertisement {
    base: MailBase,
}

impl Advertisement {
    pub fn new(weight: f64, is_express: bool, destination: impl Into<String>) -> Self {
        Self {
            base: MailBase::new(weight, is_express, destination),
        }
    }
}

impl Mail for Advertisement {
    fn base(&self) -> &MailBase {
        &self.base
    }

    fn calculate_postage(&self) -> f64 {
        let rate = if self.base.is_express { 10.0 } else { 5.0 };
        self.base.weight * rate / 1000.0
    }

    fn is_valid(&self) -> bool {
        self.base.is_addressed()
    }

    fn mail_type(&self) -> &'static str {
        "Advertisement"
    }
}

#[derive(Debug)]
pub struct Package {
    base: MailBase,
    /// volume in liters; assumed non-negative, never validated
    volume: f64,
}

impl Package {
    pub fn new(
        weight: f64,
        is_express: bool,
        destination: impl Into<String>,
        volume: f64,
    ) -> Self {
        Self {
            base: MailBase::new(weight, is_express, destination),
            volume,
        }
    }
}

impl Mail for Package {
    fn base(&self) -> &MailBase {
        &self.base
    }

    fn calculate_postage(&self) -> f64 {
        let tariff = if self.base.is_express {
            2.0 * self.volume + self.base.weight * 2.0
        } else {
            self.volume * 0.25 + self.base.weight
        };
        tariff / 1000.0
    }

    fn is_valid(&self) -> bool {
        self.base.is_addressed() && self.volume <= MAX_DELIVERABLE_VOLUME
    }

    fn mail_type(&self) -> &'static str {
        "Package"
    }

    fn detail_line(&self) -> Option<String> {
        Some(format!("Volume: {:.1} liters", self.volume))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn express_a3_letter_uses_the_a3_tariff() {
        let letter = Letter::new(200.0, true, "123 Main St, Anytown", "A3");
        assert_close(letter.calculate_postage(), (7.0 + 200.0 * 2.0) / 1000.0);
    }

    #[test]
    fn economy_letter_uses_the_generic_tariff() {
        let letter = Letter::new(800.0, false, "somewhere", "A4");
        assert_close(letter.calculate_postage(), (2.5 + 800.0) / 1000.0);
    }

    #[test]
    fn unrecognized_format_is_priced_as_generic() {
        let odd = Letter::new(100.0, true, "somewhere", "B5");
        let a4 = Letter::new(100.0, true, "somewhere", "A4");
        assert_close(odd.calculate_postage(), a4.calculate_postage());
    }

    #[test]
    fn advertisement_rate_doubles_when_express() {
        let express = Advertisement::new(1500.0, true, "456 Elm St, Othertown");
        let economy = Advertisement::new(3000.0, false, "456 Elm St, Othertown");
        assert_close(express.calculate_postage(), 1500.0 * 10.0 / 1000.0);
        assert_close(economy.calculate_postage(), 3000.0 * 5.0 / 1000.0);
    }

    #[test]
    fn package_postage_depends_on_volume_and_weight() {
        let express = Package::new(5000.0, true, "789 Oak St, Anycity", 30.0);
        let economy = Package::new(5000.0, false, "789 Oak St, Anycity", 30.0);
        assert_close(express.calculate_postage(), (2.0 * 30.0 + 5000.0 * 2.0) / 1000.0);
        assert_close(economy.calculate_postage(), (30.0 * 0.25 + 5000.0) / 1000.0);
    }

    #[test]
    fn empty_destination_makes_any_mail_invalid() {
        assert!(!Letter::new(800.0, false, "", "A4").is_valid());
        assert!(!Advertisement::new(3000.0, false, "").is_valid());
        assert!(!Package::new(100.0, false, "", 10.0).is_valid());
    }

    #[test]
    fn package_validity_checks_the_volume_ceiling() {
        assert!(Package::new(100.0, false, "somewhere", 50.0).is_valid());
        assert!(!Package::new(100.0, false, "somewhere", 50.1).is_valid());
        assert!(!Package::new(100.0, false, "", 10.0).is_valid());
    }

    #[test]
    fn weight_and_format_are_never_validated() {
        // malformed inputs are accepted as-is, only the address (and package
        // volume) drive validity
        assert!(Letter::new(-5.0, false, "somewhere", "").is_valid());
        assert!(Package::new(-5.0, true, "somewhere", -1.0).is_valid());
    }

    #[test]
    fn type_labels() {
        assert_eq!(Letter::new(0.0, false, "", "A4").mail_type(), "Letter");
        assert_eq!(Advertisement::new(0.0, false, "").mail_type(), "Advertisement");
        assert_eq!(Package::new(0.0, false, "", 0.0).mail_type(), "Package");
    }

    #[test]
    fn detail_lines_are_variant_specific() {
        let letter = Letter::new(0.0, false, "", "A3");
        let ad = Advertisement::new(0.0, false, "");
        let package = Package::new(0.0, false, "", 30.0);
        assert_eq!(letter.detail_line().as_deref(), Some("Format: A3"));
        assert_eq!(ad.detail_line(), None);
        assert_eq!(package.detail_line().as_deref(), Some("Volume: 30.0 liters"));
    }
}
