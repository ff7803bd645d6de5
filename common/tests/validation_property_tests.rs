// Property-based tests for payload validation

use common::entities::{Customer, MenuItem, OrderItem, RestaurantTable};
use common::db::Entity;
use common::validation::Validator;
use proptest::prelude::*;
use rust_decimal::Decimal;

// For any non-blank string, `required` passes; for any whitespace-only
// string, it fails.
#[test]
fn property_required_accepts_exactly_non_blank() {
    proptest!(|(value in "[a-zA-Z0-9]{1,30}", blanks in " {0,10}")| {
        let mut v = Validator::new();
        v.required("field", &value);
        prop_assert!(v.finish().is_ok());

        let mut v = Validator::new();
        v.required("field", &blanks);
        prop_assert!(v.finish().is_err());
    });
}

// For any string, `max_len` fails exactly when the character count
// exceeds the bound.
#[test]
fn property_max_len_boundary() {
    proptest!(|(len in 0usize..120, max in 1usize..100)| {
        let value = "x".repeat(len);
        let mut v = Validator::new();
        v.max_len("field", &value, max);
        prop_assert_eq!(v.finish().is_err(), len > max);
    });
}

// Generated phone-shaped strings pass; alphabetic strings fail.
#[test]
fn property_phone_format() {
    proptest!(|(digits in "[0-9]{7,15}", junk in "[a-z]{5,20}")| {
        let mut v = Validator::new();
        v.phone("phone", &format!("+{}", digits));
        prop_assert!(v.finish().is_ok());

        let mut v = Validator::new();
        v.phone("phone", &junk);
        prop_assert!(v.finish().is_err());
    });
}

// Generated addresses with a local part, host and dot pass; strings
// without an @ fail.
#[test]
fn property_email_format() {
    proptest!(|(local in "[a-z0-9]{1,12}", host in "[a-z0-9]{1,12}", tld in "[a-z]{2,6}")| {
        let mut v = Validator::new();
        v.email("email", &format!("{}@{}.{}", local, host, tld));
        prop_assert!(v.finish().is_ok());

        let mut v = Validator::new();
        v.email("email", &format!("{}{}", local, host));
        prop_assert!(v.finish().is_err());
    });
}

// For any well-formed customer payload, the declared constraint table
// accepts it; blanking any required field is rejected.
#[test]
fn property_customer_constraint_table() {
    proptest!(|(
        first in "[A-Za-z]{1,50}",
        last in "[A-Za-z]{1,50}",
        digits in "[0-9]{7,15}",
        local in "[a-z0-9]{1,12}",
        points in 0..100_000i32,
        field_to_blank in 0usize..5,
    )| {
        let customer = Customer {
            id: 0,
            first_name: first,
            last_name: last,
            phone: format!("+{}", digits),
            email: format!("{}@example.com", local),
            address: "1 Main St".to_string(),
            loyalty_points: points,
            is_active: true,
        };
        prop_assert!(customer.validate().is_ok());

        let mut broken = customer.clone();
        match field_to_blank {
            0 => broken.first_name = String::new(),
            1 => broken.last_name = String::new(),
            2 => broken.phone = String::new(),
            3 => broken.email = String::new(),
            _ => broken.address = String::new(),
        }
        prop_assert!(broken.validate().is_err());
    });
}

// Quantity and price bounds for order items: both violations are
// collected, not just the first.
#[test]
fn property_order_item_bounds() {
    proptest!(|(quantity in -10..50i32, cents in -1000..100_000i64)| {
        let item = OrderItem {
            id: 0,
            order_id: 1,
            menu_item_id: 1,
            quantity,
            item_price: Decimal::new(cents, 2),
        };
        let expected = usize::from(quantity < 1) + usize::from(cents <= 0);
        match item.validate() {
            Ok(()) => prop_assert_eq!(expected, 0),
            Err(errors) => prop_assert_eq!(errors.len(), expected),
        }
    });
}

// Menu item price range mirrors its declared bounds.
#[test]
fn property_menu_item_price_range() {
    proptest!(|(cents in 0..20_000_000i64)| {
        let item = MenuItem {
            name: "Pho".to_string(),
            price: Decimal::new(cents, 2),
            category_id: 1,
            ..MenuItem::default()
        };
        let in_range = cents >= 1 && cents <= 9_999_999;
        prop_assert_eq!(item.validate().is_ok(), in_range);
    });
}

// Table capacity is accepted exactly on 1..=100.
#[test]
fn property_table_capacity_range() {
    proptest!(|(capacity in -50..200i32)| {
        let table = RestaurantTable {
            id: 0,
            table_number: 1,
            capacity,
            status: "Available".to_string(),
        };
        prop_assert_eq!(table.validate().is_ok(), (1..=100).contains(&capacity));
    });
}
