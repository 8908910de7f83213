use ddd_state::value_object;

#[value_object]
enum Level {
    Low,
}

fn main() {}
