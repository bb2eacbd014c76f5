use column_meta::{ColumnFields, ColumnRegistry, ElementId, Error};

#[derive(ColumnFields)]
struct Employee {
    #[column("emp_id")]
    id: i64,
    name: String,
}

// A single test: the process-wide registry can only be installed once per binary.
#[test]
fn test_install_once_and_lookup() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::builder().is_test(true).try_init();

    assert!(column_meta::global().is_none());
    assert_eq!(column_meta::lookup(&ElementId::field::<Employee>("id")), None);

    let registry = ColumnRegistry::builder().register_fields::<Employee>()?.build();
    let installed = column_meta::install(registry)?;
    assert_eq!(installed.len(), 1);

    assert_eq!(
        column_meta::lookup(&ElementId::field::<Employee>("id")).map(|c| c.name()),
        Some("emp_id")
    );
    assert_eq!(column_meta::lookup(&ElementId::field::<Employee>("name")), None);

    let again = column_meta::install(ColumnRegistry::builder().build());
    assert_eq!(again.unwrap_err(), Error::AlreadyInstalled);
    assert_eq!(column_meta::global().map(|r| r.len()), Some(1));

    let employee = Employee { id: 1, name: "Ada".to_string() };
    assert_eq!((employee.id, employee.name.as_str()), (1, "Ada"));
    Ok(())
}
