use ddd_state::value_object;

#[value_object]
struct Amount(i64);

fn main() {}
