use payment_gateway::domain::payment::PostPaymentRequest;
use payment_gateway::domain::validation::validate;

#[test]
fn accepts_a_well_formed_request() {
    assert!(validate(&valid()).is_ok());
}

#[test]
fn rejects_short_long_and_non_numeric_card_numbers() {
    let mut req = valid();
    req.card_number = "1234567890123".to_string(); // 13 digits
    assert!(has_violation(&req, "Card number"));

    req.card_number = "12345678901234567890".to_string(); // 20 digits
    assert!(has_violation(&req, "Card number"));

    req.card_number = "22224053432488xx".to_string();
    assert!(has_violation(&req, "Card number"));
}

#[test]
fn rejects_out_of_range_expiry_month() {
    let mut req = valid();
    req.expiry_month = 0;
    assert!(has_violation(&req, "Expiry month"));

    req.expiry_month = 13;
    assert!(has_violation(&req, "Expiry month"));
}

#[test]
fn rejects_unsupported_currency() {
    let mut req = valid();
    req.currency = "INR".to_string();
    assert!(has_violation(&req, "Currency"));
}

#[test]
fn rejects_non_positive_amount() {
    let mut req = valid();
    req.amount = 0;
    assert!(has_violation(&req, "Amount"));

    req.amount = -5;
    assert!(has_violation(&req, "Amount"));
}

#[test]
fn rejects_bad_cvv() {
    let mut req = valid();
    req.cvv = "12".to_string();
    assert!(has_violation(&req, "CVV"));

    req.cvv = "12345".to_string();
    assert!(has_violation(&req, "CVV"));

    req.cvv = "12a".to_string();
    assert!(has_violation(&req, "CVV"));
}

#[test]
fn rejects_a_card_expired_years_ago() {
    let mut req = valid();
    req.expiry_month = 12;
    req.expiry_year = 2020;
    assert!(has_violation(&req, "expiry date"));
}

#[test]
fn reports_every_violated_rule_at_once() {
    let req = PostPaymentRequest {
        card_number: "abc".to_string(),
        expiry_month: 13,
        expiry_year: 2020,
        currency: "XYZ".to_string(),
        amount: 0,
        cvv: "1".to_string(),
    };
    let violations = validate(&req).unwrap_err();
    assert!(violations.len() >= 5);
}

fn valid() -> PostPaymentRequest {
    PostPaymentRequest {
        card_number: "2222405343248877".to_string(),
        expiry_month: 4,
        expiry_year: 2035,
        currency: "GBP".to_string(),
        amount: 100,
        cvv: "123".to_string(),
    }
}

fn has_violation(req: &PostPaymentRequest, fragment: &str) -> bool {
    match validate(req) {
        Ok(()) => false,
        Err(violations) => violations.iter().any(|v| v.contains(fragment)),
    }
}
