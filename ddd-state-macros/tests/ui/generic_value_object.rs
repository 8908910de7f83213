use ddd_state::value::ToValue;
use ddd_state::value_object;
use ddd_state::value_object::ValueObject;

// 泛型参数自动获得 'static 约束
#[value_object]
struct Wrapper<T: ToValue> {
    inner: T,
}

fn main() {
    let a = Wrapper { inner: 5_i32 };
    let b = Wrapper { inner: 5_i32 };
    assert!(a == b);
    assert_eq!(a.to_primitives().ok(), Some(serde_json::json!({ "inner": 5 })));
    assert_eq!(a.to_string(), "Wrapper [\n    inner = 5\n]");
}
