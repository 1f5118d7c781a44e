//! Keys command: list the keys the details block understands

use crate::parser::KEY_BINDINGS;
use colored::Colorize;

pub fn run(tag: &str) {
    println!("{}", format!("Recognized keys in ```{} blocks:", tag).cyan().bold());
    println!();
    for binding in KEY_BINDINGS {
        println!("   {:<16} → {}", binding.key.green(), binding.field);
    }
}
