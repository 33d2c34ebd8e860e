use std::io::Read;
use log::info;
use crate::mail::model::{Advertisement, Letter, Package};
use crate::mailbox::MailBox;

mod mail;
mod mailbox;
mod report;

fn main() {
    env_logger::init();

    match run() {
        Err(e) => {
            log::error!("Error: {:?}", e);
            std::process::exit(1);
        }
        _ => {}
    }
}

fn run() -> anyhow::Result<()> {
    let mut mail_box = MailBox::new(30);

    // the fixed sample batch: two letters, two advertisements, two packages
    mail_box.add_mail(Box::new(Letter::new(200.0, true, "123 Main St, Anytown", "A3")));
    mail_box.add_mail(Box::new(Letter::new(800.0, false, "", "A4")));
    mail_box.add_mail(Box::new(Advertisement::new(1500.0, true, "456 Elm St, Othertown")));
    mail_box.add_mail(Box::new(Advertisement::new(3000.0, false, "")));
    mail_box.add_mail(Box::new(Package::new(5000.0, true, "789 Oak St, Anycity", 30.0)));
    mail_box.add_mail(Box::new(Package::new(3000.0, true, "321 Maple Ave, Someville", 70.0)));

    info!("loaded [{}] items into the mail box", mail_box.mails().len());

    print!("{}", report::render_report(&mail_box));

    wait_for_keypress()?;
    Ok(())
}

/// keep the console window open until a key is pressed (EOF also releases it)
fn wait_for_keypress() -> anyhow::Result<()> {
    let _ = std::io::stdin().read(&mut [0u8; 1])?;
    Ok(())
}
