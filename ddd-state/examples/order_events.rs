/// 订单事件示例
/// 演示值对象、实体与领域事件的声明，以及事件转换为原始值与持久化形态
use chrono::Utc;
use ddd_state::domain_event::{DomainEvent, SerializedEvent};
use ddd_state::entity::Entity;
use ddd_state::identity::Identity;
use ddd_state::value_object::ValueObject;
use ddd_state::{domain_event, entity, value_object};
use tracing_subscriber::EnvFilter;

// ============================================================================
// 领域模型定义
// ============================================================================

#[value_object]
struct Money {
    amount: i64,
    currency: String,
}

#[value_object]
struct Email {
    address: String,
}

#[entity]
struct Customer {
    name: String,
    email: Email,
}

#[domain_event(aggregate = "order", label = "order.placed")]
struct OrderPlaced {
    customer: Customer,
    total: Money,
    items: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();

    println!("=== 订单事件示例 ===\n");

    let customer = Customer {
        identity: Identity::generate(),
        name: "Ricardo".to_string(),
        email: Email {
            address: "ricardo@example.com".to_string(),
        },
    };
    println!("customer:\n{customer}\n");
    println!("customer primitives: {}\n", customer.to_primitives()?);

    let total = Money {
        amount: 4990,
        currency: "BRL".to_string(),
    };
    let same = Money {
        amount: 4990,
        currency: "BRL".to_string(),
    };
    println!("money equal: {}", total.equal_to(&same));
    println!("money value: {:?}\n", total.value()?);

    let event = OrderPlaced {
        aggregate_id: Identity::generate(),
        occurred_on: Utc::now(),
        customer,
        total,
        items: vec!["book".to_string(), "pen".to_string()],
    };

    let serialized = event.to_serialized()?;
    let json = serialized.to_json()?;
    println!("serialized event: {json}\n");

    let restored = SerializedEvent::from_json(&json)?;
    println!(
        "restored: {} / {} / {}",
        restored.aggregate_label(),
        restored.label(),
        restored.payload()
    );

    Ok(())
}
