use ddd_state::entity;
use ddd_state::entity::Entity;
use ddd_state::identity::Identity;

// 缺失的 identity 字段由宏补齐
#[entity]
struct User {
    name: String,
}

#[entity(identity = code, debug = false)]
struct Product {
    code: Identity,
    title: String,
}

fn main() {
    let user = User {
        identity: Identity::new("u-1"),
        name: "ana".to_string(),
    };
    let _ = format!("{:?}", user.clone());
    assert_eq!(user.identity().as_str(), "u-1");

    let product = Product {
        code: Identity::new("p-1"),
        title: "book".to_string(),
    };
    assert_eq!(product.identity().as_str(), "p-1");
    assert!(product.to_primitives().is_ok());
}
