use chrono::NaiveDate;

/// Group digits with commas: 128450 -> "128,450"
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Short log-date form: "Dec 19"
pub fn format_log_date(date: NaiveDate) -> String {
    date.format("%b %e").to_string().replace("  ", " ")
}
