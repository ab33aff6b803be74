use unicode_width::UnicodeWidthStr;

pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::from("");
    }

    s.chars().fold(String::from(""), |acc: String, c: char| {
        let last_line = acc.lines().last().unwrap_or(&acc);
        if last_line.width() + c.to_string().width() > width {
            format!("{acc}\n{c}")
        } else {
            format!("{acc}{c}")
        }
    })
}

/// Truncate a single-line cell to `width` columns, appending an ellipsis
/// when anything was cut.
pub fn truncate_cell(s: &str, width: usize) -> String {
    if width == 0 {
        return String::from("");
    }
    if s.width() <= width {
        return s.to_string();
    }

    let mut out = String::new();
    for c in s.chars() {
        if out.width() + c.to_string().width() > width.saturating_sub(1) {
            break;
        }
        out.push(c);
    }
    format!("{out}\u{2026}")
}

pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}
