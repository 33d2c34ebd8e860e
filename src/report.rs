use std::fmt::Write;
use crate::mail::Mail;
use crate::mailbox::MailBox;

/// Render the full console report: the aggregate lines first, then one block
/// per item in insertion order. Pure formatting, the box is not touched.
pub fn render_report(mail_box: &MailBox) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "The total postage cost is {:.2}",
        mail_box.calculate_postage()
    );
    let _ = writeln!(
        out,
        "The mail box contains {} invalid mails",
        mail_box.invalid_mail_count()
    );
    for mail in mail_box.mails() {
        render_item(&mut out, mail.as_ref());
    }
    out
}

/// One report block: type label, validity marker, shared attributes, price,
/// the variant-specific detail line and a blank separator.
///
/// An invalid item's price is printed as the fixed `0.00`; its real postage
/// is never shown even though it is part of the aggregate total.
fn render_item(out: &mut String, mail: &dyn Mail) {
    let base = mail.base();
    let price = if mail.is_valid() {
        mail.calculate_postage()
    } else {
        0.0
    };

    let _ = writeln!(out, "{}", mail.mail_type());
    if !mail.is_valid() {
        out.push_str("Invalid mail\n");
    }
    let _ = writeln!(out, "Weight: {:.1} grams", base.weight);
    let _ = writeln!(out, "Express: {}", if base.is_express { "yes" } else { "no" });
    let _ = writeln!(out, "Destination: {}", base.destination);
    let _ = writeln!(out, "Price: $ {:.2}", price);
    if let Some(detail) = mail.detail_line() {
        let _ = writeln!(out, "{}", detail);
    }
    out.push('\n');
}
