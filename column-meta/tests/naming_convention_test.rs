//! Exercises the read path the way a mapper does: use the declared name when there
//! is one and fall back to a snake_case convention otherwise.

use column_meta::{ColumnFields, ColumnMethods, ColumnMetadata, column_methods};
use heck::ToSnakeCase;

fn resolve(element: &str, declared: Option<&ColumnMetadata>) -> String {
    match declared {
        Some(metadata) if !metadata.is_conventional() => metadata.name().to_string(),
        _ => element.strip_prefix("get_").unwrap_or(element).to_snake_case(),
    }
}

#[derive(ColumnFields)]
#[allow(non_snake_case)]
struct Invoice {
    #[column("INV_NO")]
    number: i64,
    #[column]
    issuedAt: String,
    totalAmount: f64,
}

#[column_methods]
impl Invoice {
    #[column]
    fn get_number(&self) -> i64 {
        self.number
    }

    #[column("INV_TOTAL")]
    fn get_total(&self) -> f64 {
        self.totalAmount
    }
}

#[test]
fn test_declared_names_win_over_convention() {
    assert_eq!(resolve("number", Invoice::field_column("number")), "INV_NO");
    assert_eq!(resolve("get_total", Invoice::method_column("get_total")), "INV_TOTAL");
}

#[test]
fn test_empty_and_absent_fall_back_to_convention() {
    assert_eq!(resolve("issuedAt", Invoice::field_column("issuedAt")), "issued_at");
    assert_eq!(resolve("totalAmount", Invoice::field_column("totalAmount")), "total_amount");
    assert_eq!(resolve("get_number", Invoice::method_column("get_number")), "number");

    // The mapper still knows which elements were explicitly mapped
    assert!(Invoice::field_column("issuedAt").is_some());
    assert!(Invoice::field_column("totalAmount").is_none());
}

#[test]
fn test_columns_for_insert() {
    let invoice = Invoice { number: 12, issuedAt: "2026-01-01".to_string(), totalAmount: 99.5 };
    assert_eq!(invoice.get_number(), 12);
    assert_eq!(invoice.get_total(), 99.5);

    let columns: Vec<String> = Invoice::FIELDS
        .iter()
        .map(|c| resolve(c.field, Some(&c.metadata)))
        .collect();
    assert_eq!(columns, vec!["INV_NO".to_string(), "issued_at".to_string()]);
}
