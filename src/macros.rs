/// Builds a [`Document`](crate::Document) from `key => value` pairs.
///
/// Values go through `Value::from`, so any supported kind, `&str`, a `Value`
/// or a nested `doc!` works.
///
/// ```
/// use na_doc::{Tag, doc};
///
/// let d = doc! {
///     "a" => 7i32,
///     "b" => "hi",
///     "c" => doc! { "x" => 1u8 },
/// };
/// assert_eq!(d.len(), 3);
/// assert_eq!(d.at("c").unwrap().tag(), Tag::Document);
/// ```
#[macro_export]
macro_rules! doc {
    () => {
        $crate::Document::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut document = $crate::Document::new();
        $(
            document.set($key, $crate::Value::from($value));
        )+
        document
    }};
}
