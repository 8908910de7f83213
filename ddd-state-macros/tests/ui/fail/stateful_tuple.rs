use ddd_state::stateful;

#[stateful]
struct Pair(u8, u8);

fn main() {}
