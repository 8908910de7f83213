use ddd_state::domain_event;
use ddd_state::domain_event::{DomainEvent, Event};
use ddd_state::identity::Identity;

#[domain_event(aggregate = "account", label = "account.opened")]
struct AccountOpened {
    owner: String,
}

fn main() {
    let event = AccountOpened {
        aggregate_id: Identity::new("acc-1"),
        occurred_on: ddd_state::chrono::Utc::now(),
        owner: "ana".to_string(),
    };

    assert_eq!(AccountOpened::label(), "account.opened");
    assert_eq!(AccountOpened::aggregate_label(), "account");
    assert_eq!(event.aggregate_id().as_str(), "acc-1");
    let _ = format!("{:?}", event);
    assert!(event.to_serialized().is_ok());
}
