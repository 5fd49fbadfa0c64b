use na_doc::{Document, Error, Payload, Tag, Value, doc};

#[test]
fn test_read_as_matching_kind() {
    let v = Value::from(42i32);
    assert_eq!(*v.read_as::<i32>().unwrap(), 42);
    assert_eq!(v.tag(), Tag::Int32);
    assert!(!v.is_void());
}

#[test]
fn test_read_as_wrong_kind() {
    let v = Value::from(42i32);
    match v.read_as::<i64>() {
        Err(Error::TypeMismatch { expected, actual }) => {
            assert_eq!(expected, Tag::Int64);
            assert_eq!(actual, Tag::Int32);
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn test_access_on_void() {
    let mut v = Value::void();
    assert!(matches!(
        v.read_as::<String>(),
        Err(Error::EmptyValueAccess {
            expected: Tag::String
        })
    ));
    assert!(matches!(
        v.mutate_as::<u8>(),
        Err(Error::EmptyValueAccess {
            expected: Tag::UInt8
        })
    ));
}

#[test]
fn test_copy_on_write_isolation() {
    let v1 = Value::from(String::from("hello"));
    let mut v2 = v1.clone();
    assert!(v1.ptr_eq(&v2));
    assert_eq!(v1.share_count(), 2);

    v2.mutate_as::<String>().unwrap().push_str(" world");

    assert_eq!(v1.read_as::<String>().unwrap(), "hello");
    assert_eq!(v2.read_as::<String>().unwrap(), "hello world");
    assert!(v1.is_unique());
}

#[test]
fn test_copy_on_write_nested_document() {
    let v1 = Value::from(doc! { "n" => 1i32, "inner" => doc! { "x" => 1u8 } });
    let mut v2 = v1.clone();

    {
        let d = v2.mutate_as::<Document>().unwrap();
        d.set("n", 2i32);
        *d.at_mut("inner")
            .unwrap()
            .mutate_as::<Document>()
            .unwrap()
            .at_mut("x")
            .unwrap()
            .mutate_as::<u8>()
            .unwrap() = 9;
    }

    assert_eq!(
        v1.read_as::<Document>().unwrap(),
        &doc! { "n" => 1i32, "inner" => doc! { "x" => 1u8 } }
    );
    assert_eq!(
        v2.read_as::<Document>().unwrap(),
        &doc! { "n" => 2i32, "inner" => doc! { "x" => 9u8 } }
    );
}

#[test]
fn test_mutate_through_document_entry_leaves_copy_untouched() {
    let mut a = doc! { "list" => vec![1u16, 2] };
    let b = a.quick_clone();
    a.at_mut("list")
        .unwrap()
        .mutate_as::<Vec<u16>>()
        .unwrap()
        .push(3);
    assert_eq!(a.get_as::<Vec<u16>>("list").unwrap(), &[1, 2, 3]);
    assert_eq!(b.get_as::<Vec<u16>>("list").unwrap(), &[1, 2]);
}

#[test]
fn test_replace_does_not_touch_shared() {
    let v1 = Value::from(1u64);
    let mut v2 = v1.clone();
    let old = v2.replace(String::from("now a string"));
    assert_eq!(old, v1);
    assert_eq!(v2.tag(), Tag::String);
    assert_eq!(*v1.read_as::<u64>().unwrap(), 1);
}

#[test]
fn test_take_leaves_void() {
    let mut v = Value::from(vec![1.0f64]);
    let taken = v.take();
    assert!(v.is_void());
    assert_eq!(taken.tag(), Tag::Float64Array);
}

#[test]
fn test_deep_clone_is_independent() {
    let v = Value::from(doc! { "s" => "x" });
    let d = v.deep_clone();
    assert_eq!(v, d);
    assert!(!v.ptr_eq(&d));
    assert!(v.is_unique());
    let inner_v = v.read_as::<Document>().unwrap().find("s").unwrap();
    let inner_d = d.read_as::<Document>().unwrap().find("s").unwrap();
    assert!(!inner_v.ptr_eq(inner_d));
}

#[test]
fn test_quick_clone_shares_non_document() {
    let v = Value::from(vec![String::from("a")]);
    let q = v.quick_clone();
    assert!(v.ptr_eq(&q));
    assert_eq!(v.share_count(), 2);
}

#[test]
fn test_structural_equality() {
    assert_eq!(Value::from(3i8), Value::from(3i8));
    assert_ne!(Value::from(3i8), Value::from(3u8));
    assert_ne!(Value::from(3i8), Value::void());
    assert_eq!(Value::void(), Value::void());
    assert_eq!(Value::from(vec![1i32, 2]), Value::from(vec![1i32, 2]));
    assert_ne!(Value::from(vec![1i32, 2]), Value::from(vec![2i32, 1]));
    assert_eq!(Value::from("abc"), Value::from(String::from("abc")));
    assert_ne!(Value::from(f32::NAN), Value::from(f32::NAN));
}

#[test]
fn test_payload_match() {
    let v = Value::from(vec![1u8, 2, 3]);
    match v.payload() {
        Some(Payload::UInt8Array(bytes)) => assert_eq!(bytes, &[1, 2, 3]),
        other => panic!("unexpected {other:?}"),
    }
    assert!(Value::void().payload().is_none());
}

#[test]
fn test_deep_clone_can_cross_threads() {
    let v = Value::from(doc! { "k" => 5i32 });
    let private = v.deep_clone();
    let handle = std::thread::spawn(move || {
        let mut private = private;
        *private
            .mutate_as::<Document>()
            .unwrap()
            .at_mut("k")
            .unwrap()
            .mutate_as::<i32>()
            .unwrap() += 1;
        private
    });
    let back = handle.join().unwrap();
    assert_eq!(v, Value::from(doc! { "k" => 5i32 }));
    assert_eq!(back, Value::from(doc! { "k" => 6i32 }));
}
