use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

pub fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
}

/// `2004-04-04` becomes `4 Avr. 04`.
pub fn format_date(date: NaiveDate) -> String {
    let month = MONTHS
        .get(date.month0() as usize)
        .copied()
        .unwrap_or_default();
    format!("{} {}. {:02}", date.day(), month, date.year().rem_euclid(100))
}

pub fn format_amount(amount: i64) -> String {
    format!("{} €", amount)
}

/// Reads the leading whole number of a numeric input, the way the form
/// fields are stored (`"80.5"` is `80`). Empty or non-numeric text is `None`.
pub fn parse_whole(raw: &str) -> Option<i64> {
    let value = raw.trim().parse::<f64>().ok()?;
    if value.is_finite() {
        Some(value.trunc() as i64)
    } else {
        None
    }
}
