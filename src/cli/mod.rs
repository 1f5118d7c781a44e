pub mod extract;
pub mod issue;
pub mod keys;

use crate::loader::{Absence, Extraction};
use crate::models::MerchantDetails;
use crate::Result;
use colored::Colorize;

/// Print an extraction result; returns whether details were found
pub fn report(extraction: &Extraction, json: bool) -> Result<bool> {
    match extraction {
        Ok(details) => {
            if json {
                println!("{}", serde_json::to_string_pretty(details)?);
            } else {
                print_details(details);
            }
            Ok(true)
        }
        Err(absence) => {
            if json {
                println!("null");
            }
            print_absence(absence);
            Ok(false)
        }
    }
}

fn print_details(details: &MerchantDetails) {
    println!("{}", format!("Merchant: {}", details.name).cyan().bold());
    println!();
    println!("   Category:    {}", details.category);

    let text_fields = [
        ("URL", &details.url),
        ("Image", &details.image_url),
        ("Facebook", &details.facebook_handle),
        ("Email", &details.email_address),
        ("Document", &details.document),
    ];
    for (label, value) in text_fields {
        if !value.is_empty() {
            println!("   {:<12} {}", format!("{}:", label), value);
        }
    }

    let flag = |accepted: bool| if accepted { "yes".green() } else { "no".bright_black() };
    println!("   BTC:         {}", flag(details.accepts_btc));
    println!("   BCH:         {}", flag(details.accepts_bch));
    println!("   Other:       {}", flag(details.accepts_other_crypto));
}

fn print_absence(absence: &Absence) {
    eprintln!("{}", format!("No merchant details: {}", absence).yellow());
    if let Absence::MissingBlock { found, .. } = absence {
        if !found.is_empty() {
            let tags: Vec<&str> = found
                .iter()
                .map(|t| if t.is_empty() { "(untagged)" } else { t.as_str() })
                .collect();
            eprintln!("   Fenced blocks present: {}", tags.join(", "));
        }
    }
}
