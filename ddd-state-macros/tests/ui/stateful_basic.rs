use ddd_state::stateful;
use ddd_state::state::{extract_display_string, extract_fields};

#[stateful]
struct Snapshot {
    version: u32,
    #[state(opaque)]
    handle: std::sync::Mutex<u8>,
}

#[stateful]
struct Marker;

fn main() {
    let snapshot = Snapshot {
        version: 3,
        handle: std::sync::Mutex::new(0),
    };
    let fields = extract_fields(&snapshot).map(|f| f.len());
    assert_eq!(fields.ok(), Some(2));
    assert!(extract_display_string(&snapshot).is_ok());
    assert!(extract_fields(&Marker).is_err());
}
