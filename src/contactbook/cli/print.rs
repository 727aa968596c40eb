use colored::Colorize;
use contactbook::model::Record;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 28;
const PHONE_WIDTH: usize = 16;
const EMAIL_WIDTH: usize = 28;

pub(super) fn print_success(message: &str) {
    println!("{}", message.green());
}

pub(super) fn print_info(message: &str) {
    println!("{}", message.dimmed());
}

pub(super) fn print_records(records: &[&Record]) {
    if records.is_empty() {
        println!("No contacts found.");
        return;
    }

    println!(
        "{}",
        format!(
            "{}{}{}{}",
            pad("ID", ID_WIDTH),
            pad("Name", NAME_WIDTH),
            pad("Phone", PHONE_WIDTH),
            pad("Email", EMAIL_WIDTH)
        )
        .bold()
    );

    for r in records {
        println!(
            "{}{}{}{}",
            pad(&r.id.to_string(), ID_WIDTH).yellow(),
            pad(&r.full_name(), NAME_WIDTH),
            pad(&r.phone_number, PHONE_WIDTH),
            pad(&r.email, EMAIL_WIDTH).dimmed()
        );
    }
}

/// Truncate to fit `width` columns (leaving one for spacing), then pad.
fn pad(s: &str, width: usize) -> String {
    let cell = truncate_to_width(s, width.saturating_sub(1));
    let padding = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
