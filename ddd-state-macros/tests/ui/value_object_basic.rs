use ddd_state::value_object;
use ddd_state::value_object::ValueObject;

#[value_object]
struct Amount {
    value: i64,
}

#[value_object(debug = false, display = false)]
#[derive(Default)]
struct Range {
    start: i32,
    end: i32,
}

fn main() {
    // Debug 与 Display 默认生成
    let _ = format!("{:?}", Amount { value: 0 });
    assert_eq!(Amount { value: 7 }.to_string(), "Amount [\n    value = 7\n]");

    // PartialEq 由 equal_to 生成，Clone 与 serde 派生可用
    let a = Range::default();
    let b = a.clone();
    assert!(a == b);
    assert!(a.equal_to(&b));
    let _ = serde_json::to_string(&a);
}
