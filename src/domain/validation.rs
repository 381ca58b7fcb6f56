use crate::domain::payment::PostPaymentRequest;
use chrono::{Datelike, NaiveDate, Utc};

const SUPPORTED_CURRENCIES: [&str; 3] = ["USD", "EUR", "GBP"];

/// Checks every rule and collects one message per violation, so a caller
/// can report all of them at once.
pub fn validate(request: &PostPaymentRequest) -> Result<(), Vec<String>> {
    let mut violations = Vec::new();

    if !is_digits(&request.card_number) || !(14..=19).contains(&request.card_number.len()) {
        violations.push(
            "Card number must be between 14-19 digits and contain only numeric characters"
                .to_string(),
        );
    }
    if !(1..=12).contains(&request.expiry_month) {
        violations.push("Expiry month must be between 1-12".to_string());
    }
    if !(2020..=3000).contains(&request.expiry_year) {
        violations.push("Expiry year must be a valid year".to_string());
    }
    if !SUPPORTED_CURRENCIES.contains(&request.currency.as_str()) {
        violations.push("Currency must be one of: USD, EUR, GBP".to_string());
    }
    if request.amount < 1 {
        violations.push("Amount must be a positive integer".to_string());
    }
    if !is_digits(&request.cvv) || !(3..=4).contains(&request.cvv.len()) {
        violations.push("CVV must be 3-4 digits".to_string());
    }
    if !expires_in_future(request.expiry_month, request.expiry_year) {
        violations.push("The expiry date must be in the future".to_string());
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// A card is usable through the last calendar day of its expiry month, so the
/// first day of the following month must lie strictly after today. A month
/// that produces no constructible date fails validation rather than panicking.
fn expires_in_future(expiry_month: u32, expiry_year: i32) -> bool {
    let first_of_next_month = match expiry_month {
        1..=11 => NaiveDate::from_ymd_opt(expiry_year, expiry_month + 1, 1),
        12 => NaiveDate::from_ymd_opt(expiry_year + 1, 1, 1),
        _ => None,
    };
    match first_of_next_month {
        Some(date) => date > Utc::now().date_naive(),
        None => false,
    }
}
