use ddd_state::value_object;

#[value_object(debug = true, debug = false)]
struct Amount {
    value: i64,
}

fn main() {}
