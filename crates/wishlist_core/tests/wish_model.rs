use uuid::Uuid;
use wishlist_core::{Currency, Expense, Wish, WishId, WishName, WishValidationError};

fn usd() -> Currency {
    Currency::new("USD").unwrap()
}

#[test]
fn wish_exposes_its_parts() {
    let id = WishId::next();
    let expense = Expense::from_currency_and_scalars(usd(), 1000, 20, 400).unwrap();
    let wish = Wish::new(id, WishName::new("  Qux ").unwrap(), expense);

    assert_eq!(wish.id(), id);
    assert_eq!(wish.name().as_str(), "Qux");
    assert_eq!(wish.expense().currency().code(), "USD");
    assert_eq!(wish.expense().price(), 1000);
    assert_eq!(wish.expense().fee(), 20);
    assert_eq!(wish.expense().initial_fund(), 400);
}

#[test]
fn wish_id_rejects_nil_uuid() {
    assert_eq!(
        WishId::from_uuid(Uuid::nil()).unwrap_err(),
        WishValidationError::NilId
    );
    assert!(!WishId::next().as_uuid().is_nil());
}

#[test]
fn wish_name_rejects_blank_and_overlong_input() {
    assert_eq!(
        WishName::new("   ").unwrap_err(),
        WishValidationError::EmptyName
    );

    let err = WishName::new("x".repeat(256)).unwrap_err();
    assert_eq!(err, WishValidationError::NameTooLong { len: 256, max: 255 });
}

#[test]
fn expense_rejects_negative_amounts() {
    let err = Expense::from_currency_and_scalars(usd(), 1000, -1, 0).unwrap_err();
    assert_eq!(
        err,
        WishValidationError::NegativeAmount {
            field: "fee",
            value: -1
        }
    );
}

#[test]
fn expense_rejects_initial_fund_above_price() {
    let err = Expense::from_currency_and_scalars(usd(), 100, 0, 101).unwrap_err();
    assert_eq!(
        err,
        WishValidationError::InitialFundExceedsPrice {
            initial_fund: 101,
            price: 100
        }
    );
}

#[test]
fn wish_serialization_uses_expected_wire_fields() {
    let uuid = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let wish = Wish::new(
        WishId::from_uuid(uuid).unwrap(),
        WishName::new("Bicycle").unwrap(),
        Expense::from_currency_and_scalars(Currency::new("eur").unwrap(), 50_000, 500, 10_000)
            .unwrap(),
    );

    let json = serde_json::to_value(&wish).unwrap();
    assert_eq!(json["id"], uuid.to_string());
    assert_eq!(json["name"], "Bicycle");
    assert_eq!(json["expense"]["currency"], "EUR");
    assert_eq!(json["expense"]["price"], 50_000);
    assert_eq!(json["expense"]["fee"], 500);
    assert_eq!(json["expense"]["initial_fund"], 10_000);

    let decoded: Wish = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, wish);
}

#[test]
fn deserialize_rejects_invalid_expense() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "Bicycle",
        "expense": { "currency": "USD", "price": 100, "fee": 0, "initial_fund": 200 }
    });

    let err = serde_json::from_value::<Wish>(value).unwrap_err();
    assert!(
        err.to_string()
            .contains("initial_fund (200) must be <= price (100)"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_nil_id_and_blank_name() {
    let nil_id = serde_json::json!({
        "id": "00000000-0000-0000-0000-000000000000",
        "name": "Bicycle",
        "expense": { "currency": "USD", "price": 1, "fee": 0, "initial_fund": 0 }
    });
    assert!(serde_json::from_value::<Wish>(nil_id).is_err());

    let blank_name = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "  ",
        "expense": { "currency": "USD", "price": 1, "fee": 0, "initial_fund": 0 }
    });
    assert!(serde_json::from_value::<Wish>(blank_name).is_err());
}
