//! Dynamic value tests.

use rawjson::{stringify, Encode, Kind, ObjectWriter, Registry, Sink, Value, ValueError};

#[test]
fn test_kinds() {
    assert_eq!(Value::from(1u8).kind(), Kind::U8);
    assert_eq!(Value::from(1u16).kind(), Kind::U16);
    assert_eq!(Value::from(1u32).kind(), Kind::U32);
    assert_eq!(Value::from(1u64).kind(), Kind::U64);
    assert_eq!(Value::from(1.5f64).kind(), Kind::F64);
    assert_eq!(Value::from(1.5f32).kind(), Kind::F64);
    assert_eq!(Value::from(true).kind(), Kind::Bool);
    assert_eq!(Value::from("abc").kind(), Kind::String);
    assert_eq!(Value::from(Vec::new()).kind(), Kind::Array);
    assert_eq!(Value::raw("[1]").kind(), Kind::Raw);
}

#[test]
fn test_kind_discriminants() {
    assert_eq!(u8::from(Kind::Raw), 0);
    assert_eq!(u8::from(Kind::Struct), 9);
    assert_eq!(Kind::try_from(7u8).unwrap(), Kind::String);
    assert!(Kind::try_from(10u8).is_err());
}

#[test]
fn test_checked_accessors() {
    let value = Value::from(23u32);
    assert_eq!(value.as_u32().unwrap(), 23);
    assert!(matches!(
        value.as_u8(),
        Err(ValueError::KindMismatch {
            expected: Kind::U8,
            actual: Kind::U32,
        })
    ));
    assert!(value.as_str().is_err());

    let value = Value::from("abc");
    assert_eq!(value.as_str().unwrap(), "abc");
    assert!(value.as_bool().is_err());
}

#[test]
fn test_rendering() {
    assert_eq!(Value::from(255u8).to_string(), "255");
    assert_eq!(Value::from(true).to_string(), "true");
    assert_eq!(Value::from("say \"hi\"").to_string(), r#""say \"hi\"""#);
    assert_eq!(Value::raw(r#"{"pre":1}"#).to_string(), r#"{"pre":1}"#);

    let empty = Value::Array(Vec::new());
    assert_eq!(empty.to_string(), "[]");

    let nested = Value::Array(vec![
        Value::from(8u8),
        Value::Array(vec![Value::from(27u16)]),
        Value::from("x"),
    ]);
    assert_eq!(nested.to_string(), r#"[8,[27],"x"]"#);
    assert!(!nested.to_string().contains(",]"));
}

struct Probe {
    id: u32,
}

impl Encode for Probe {
    fn encode(&self, sink: &mut Sink) {
        let mut obj = ObjectWriter::new(sink);
        obj.field("id", &self.id);
        obj.finish();
    }
}

#[test]
fn test_struct_value() {
    let value = Value::from_struct(Probe { id: 7 });
    assert_eq!(value.kind(), Kind::Struct);
    assert_eq!(value.as_struct::<Probe>().unwrap().id, 7);
    assert!(matches!(
        value.as_struct::<u32>(),
        Err(ValueError::StructMismatch)
    ));
    assert_eq!(value.to_string(), r#"{"id":7}"#);

    // registration is idempotent across repeated wrapping
    let len = Registry::global().len();
    let other = Value::from_struct(Probe { id: 8 });
    assert_eq!(Registry::global().len(), len);
    assert_eq!(stringify(&other), r#"{"id":8}"#);
}

#[test]
fn test_heterogeneous_array() {
    let values = Value::Array(vec![
        Value::from(1u8),
        Value::from("two"),
        Value::from(3.5f64),
        Value::from(false),
        Value::from_struct(Probe { id: 9 }),
    ]);
    assert_eq!(stringify(&values), r#"[1,"two",3.5,false,{"id":9}]"#);
}

#[test]
fn test_equality() {
    assert_eq!(Value::from(1u8), Value::from(1u8));
    assert_ne!(Value::from(1u8), Value::from(1u16));

    let a = Value::from_struct(Probe { id: 1 });
    let b = a.clone();
    assert_eq!(a, b);
    assert_ne!(a, Value::from_struct(Probe { id: 1 }));
}
