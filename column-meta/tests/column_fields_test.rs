use column_meta::{ColumnFields, ColumnMetadata, FieldColumn};

#[derive(ColumnFields, Debug, Clone, PartialEq)]
struct Employee {
    #[column("emp_id")]
    id: i64,
    #[column]
    full_name: String,
    #[column(name = "DEPT No.")]
    department: i32,
    #[column(name = "")]
    title: String,
    salary: f64,
}

#[derive(ColumnFields)]
struct Keywords {
    #[column("kind")]
    r#type: String,
    r#match: bool,
}

#[derive(ColumnFields)]
struct Pair(#[column("left_col")] i32, i32, #[column] i32);

#[derive(ColumnFields)]
struct Empty;

#[derive(ColumnFields)]
struct Wrapper<T: Clone>
where
    T: Default,
{
    #[column("payload")]
    value: T,
}

#[test]
fn test_bare_column_declares_empty_name() -> Result<(), Box<dyn std::error::Error>> {
    let full_name = Employee::field_column("full_name").ok_or("full_name should carry metadata")?;
    assert_eq!(full_name.name(), "");
    assert!(full_name.is_conventional());

    let title = Employee::field_column("title").ok_or("title should carry metadata")?;
    assert_eq!(title.name(), "");

    println!("Bare column test passed!");
    Ok(())
}

#[test]
fn test_explicit_name_is_kept_verbatim() {
    assert_eq!(Employee::field_column("id"), Some(&ColumnMetadata::new("emp_id")));
    assert_eq!(Employee::field_column("department").map(|c| c.name()), Some("DEPT No."));
    assert!(!Employee::field_column("id").is_some_and(|c| c.is_conventional()));
}

#[test]
fn test_absent_is_distinct_from_empty() {
    assert_eq!(Employee::field_column("salary"), None);
    assert_eq!(Employee::field_column("unknown"), None);
    assert!(Employee::field_column("full_name").is_some());
}

#[test]
fn test_reads_are_idempotent() {
    let first = Employee::field_column("id");
    let second = Employee::field_column("id");
    assert_eq!(first, second);
    assert_eq!(first.map(|c| c.name()), Some("emp_id"));
}

#[test]
fn test_fields_table_lists_annotated_fields_in_order() {
    let fields: Vec<&str> = Employee::FIELDS.iter().map(|c| c.field).collect();
    assert_eq!(fields, vec!["id", "full_name", "department", "title"]);

    assert_eq!(
        Employee::FIELDS[0],
        FieldColumn::new("id", ColumnMetadata::new("emp_id"))
    );
}

#[test]
fn test_raw_identifiers_are_unrawed() {
    assert_eq!(Keywords::field_column("type").map(|c| c.name()), Some("kind"));
    assert_eq!(Keywords::field_column("r#type"), None);
    assert_eq!(Keywords::field_column("match"), None);
}

#[test]
fn test_tuple_fields_are_identified_by_position() {
    assert_eq!(Pair::field_column("0").map(|c| c.name()), Some("left_col"));
    assert_eq!(Pair::field_column("1"), None);
    assert_eq!(Pair::field_column("2").map(|c| c.name()), Some(""));
}

#[test]
fn test_structs_without_fields_or_annotations() {
    assert!(Empty::FIELDS.is_empty());
    assert_eq!(Empty::field_column("anything"), None);
}

#[test]
fn test_generic_struct() {
    assert_eq!(Wrapper::<String>::field_column("value").map(|c| c.name()), Some("payload"));
    assert_eq!(Wrapper::<i32>::FIELDS.len(), 1);
}

#[test]
fn test_metadata_serializes() -> Result<(), Box<dyn std::error::Error>> {
    let value = serde_json::to_value(Employee::FIELDS[0])?;
    assert_eq!(value, serde_json::json!({ "field": "id", "metadata": { "name": "emp_id" } }));
    Ok(())
}

#[test]
fn test_concurrent_readers_see_the_same_value() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| Employee::field_column("id").map(|c| c.name())))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some("emp_id"));
    }
}
