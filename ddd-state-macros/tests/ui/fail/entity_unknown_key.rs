use ddd_state::entity;

#[entity(id = code)]
struct Product {
    code: ddd_state::identity::Identity,
}

fn main() {}
