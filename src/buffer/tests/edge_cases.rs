//! Tests for construction validation and boundary conditions

use crate::buffer::api::{BufferError, Priority, PriorityBoundedBuffer, PriorityItem};

#[test]
fn test_zero_capacity_is_rejected_at_construction() {
    match PriorityBoundedBuffer::new(0) {
        Err(BufferError::InvalidCapacity { capacity }) => assert_eq!(capacity, 0),
        other => panic!("expected InvalidCapacity, got {other:?}"),
    }
}

#[test]
fn test_capacity_one_is_valid() {
    let buffer = PriorityBoundedBuffer::new(1).unwrap();
    assert_eq!(buffer.max_size(), 1);
}

#[tokio::test]
async fn test_full_capacity_holds_every_priority() {
    let buffer = PriorityBoundedBuffer::new(4).unwrap();

    for (id, priority) in Priority::ALL.into_iter().enumerate() {
        buffer
            .produce(PriorityItem::new(priority, id as i64, priority.to_string()))
            .await;
    }
    assert_eq!(buffer.size(), 4);

    let stats = buffer.stats();
    for priority in Priority::ALL {
        assert_eq!(stats.produced_by_priority[&priority], 1);
    }
}

#[tokio::test]
async fn test_manual_sentinel_id_flows_through() {
    use crate::buffer::api::MANUAL_ITEM_ID;

    let buffer = PriorityBoundedBuffer::new(2).unwrap();
    buffer
        .produce(PriorityItem::new(
            Priority::Critical,
            MANUAL_ITEM_ID,
            "manual".to_string(),
        ))
        .await;

    let item = buffer.consume().await;
    assert_eq!(item.id, MANUAL_ITEM_ID);
    assert_eq!(item.payload, "manual");
}

#[tokio::test]
async fn test_interleaved_operations_keep_counters_monotonic() {
    let buffer = PriorityBoundedBuffer::new(3).unwrap();

    let mut last_produced = 0;
    let mut last_consumed = 0;
    for round in 0..5i64 {
        buffer
            .produce(PriorityItem::new(Priority::Low, round, "x".to_string()))
            .await;
        let stats = buffer.stats();
        assert!(stats.total_produced > last_produced);
        assert!(stats.total_consumed >= last_consumed);
        last_produced = stats.total_produced;
        last_consumed = stats.total_consumed;

        buffer.consume().await;
        let stats = buffer.stats();
        assert!(stats.total_consumed > last_consumed);
        last_consumed = stats.total_consumed;
    }
}
