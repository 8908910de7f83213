use ddd_state::domain_event;

#[domain_event(aggregate = "order")]
struct OrderPlaced {
    total: i64,
}

fn main() {}
