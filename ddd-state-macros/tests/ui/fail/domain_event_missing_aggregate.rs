use ddd_state::domain_event;

#[domain_event(label = "order.placed")]
struct OrderPlaced {
    total: i64,
}

fn main() {}
