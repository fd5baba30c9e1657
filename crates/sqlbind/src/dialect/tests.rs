use super::*;
use crate::maybe::{not_none, truthy};
use crate::presets;

#[test]
fn generic_binds_whole_list() {
    let mut q = presets::default();
    assert_eq!(q.in_("field", vec![10, 20]).unwrap(), "field IN ?");
    assert_eq!(
        q.params().unwrap().as_positional().unwrap(),
        &[Value::Array(vec![Value::Int(10), Value::Int(20)])]
    );
}

#[test]
fn absent_and_empty_lists() {
    let mut q = presets::default();
    assert_eq!(q.in_("field", truthy(0)).unwrap(), Fragment::EMPTY);
    assert_eq!(q.in_("field", None::<Vec<i32>>).unwrap(), Fragment::EMPTY);
    assert_eq!(q.in_("field", not_none(None::<Vec<i32>>)).unwrap(), Fragment::EMPTY);
    assert_eq!(q.in_("field", Vec::<i32>::new()).unwrap(), "FALSE");
    assert!(q.is_empty());

    let mut q = presets::sqlite();
    assert_eq!(q.in_("field", Vec::<i32>::new()).unwrap(), "0");
    assert!(q.is_empty());
}

#[test]
fn sqlite_binds_each_value_up_to_threshold() {
    let mut q = presets::sqlite();
    let values: Vec<Value> = vec![Value::from(10), Value::from("20")];
    assert_eq!(q.in_("field", values).unwrap(), "field IN (?,?)");

    let ten: Vec<i32> = (0..10).collect();
    assert_eq!(q.in_("f", ten).unwrap(), "f IN (?,?,?,?,?,?,?,?,?,?)");
    assert_eq!(q.len(), 12);
}

#[test]
fn sqlite_inlines_above_threshold() {
    let mut q = presets::sqlite();
    let mut values: Vec<Value> = (0..10).map(Value::from).collect();
    values.push(Value::from("boo"));
    values.push(Value::from(1.5));
    assert_eq!(
        q.in_("field", values).unwrap(),
        "field IN (0,1,2,3,4,5,6,7,8,9,'boo',1.5)"
    );
    assert!(q.is_empty());
}

#[test]
fn sqlite_rejects_unsupported_literals() {
    let mut q = presets::sqlite();
    let mut values: Vec<Value> = (0..10).map(Value::from).collect();
    values.push(Value::bytes(vec![1u8]));
    let err = q.in_("field", values).unwrap_err();
    assert_eq!(err, BindError::UnsupportedLiteral { type_name: "bytes" });
    assert!(err.to_string().contains("Invalid type"));
    assert!(q.is_empty());

    let mut values: Vec<Value> = (0..10).map(Value::from).collect();
    values.push(Value::Null);
    assert!(q.in_("field", values).unwrap_err().is_unsupported_literal());

    let mut values: Vec<Value> = (0..10).map(Value::from).collect();
    values.push(Value::Float(f64::NAN));
    assert!(q.in_("field", values).unwrap_err().is_unsupported_literal());
}

#[test]
fn sqlite_rejects_inline_text_with_nul() {
    assert_eq!(
        sqlite_escape(&Value::from("ab\0c")).unwrap_err(),
        BindError::UnsupportedLiteral {
            type_name: "text containing NUL",
        }
    );

    let mut q = presets::sqlite();
    let mut values: Vec<Value> = (0..10).map(|i| Value::from(format!("v{i}"))).collect();
    values.push(Value::from("x\0' OR 1=1 --"));
    assert!(q.in_("name", values).unwrap_err().is_unsupported_literal());
    assert!(q.is_empty());

    // bound values may carry NUL
    assert_eq!(q.in_("name", vec!["a\0b"]).unwrap(), "name IN (?)");
}

#[test]
fn sqlite_escapes_quotes_and_bools() {
    assert_eq!(sqlite_escape(&Value::from("it's")).unwrap(), "'it''s'");
    assert_eq!(sqlite_escape(&Value::from(true)).unwrap(), "1");
    assert_eq!(sqlite_escape(&Value::from(false)).unwrap(), "0");
    assert_eq!(sqlite_escape(&Value::from(-3)).unwrap(), "-3");
    assert_eq!(
        sqlite_value_list(&[Value::from("a'); DROP TABLE t; --"), Value::from(2)]).unwrap(),
        "'a''); DROP TABLE t; --',2"
    );
}

#[test]
fn postgres_uses_any() {
    let mut q = presets::postgres();
    assert_eq!(q.col("id").in_(vec![1, 2, 3]).unwrap(), "id = ANY($1)");
    assert_eq!(q.in_("id", Vec::<i32>::new()).unwrap(), "FALSE");
    assert_eq!(q.len(), 1);
}

#[test]
fn scalar_is_a_single_element_list() {
    let mut q = presets::sqlite();
    assert_eq!(q.in_("f", 5).unwrap(), "f IN (?)");
}

#[test]
fn dialect_kind_names() {
    assert_eq!("SQLite".parse::<DialectKind>().unwrap(), DialectKind::Sqlite);
    assert_eq!("postgresql".parse::<DialectKind>().unwrap(), DialectKind::Postgres);
    assert!("oracle".parse::<DialectKind>().is_err());
    assert_eq!(DialectKind::Sqlite.build(10).false_literal(), "0");
    assert_eq!(DialectKind::Generic.to_string(), "generic");
}
