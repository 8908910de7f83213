use ddd_state::value_object;

#[value_object]
#[derive(PartialEq)]
struct Amount {
    value: i64,
}

fn main() {}
