//! Tests for basic produce/consume behavior and counter consistency

use crate::buffer::api::{Priority, PriorityBoundedBuffer, PriorityItem};

fn item(priority: Priority, id: i64) -> PriorityItem {
    PriorityItem::new(priority, id, format!("item-{id}"))
}

#[tokio::test]
async fn test_produce_consume_round_trip() {
    let buffer = PriorityBoundedBuffer::new(4).unwrap();

    buffer.produce(item(Priority::High, 1)).await;
    assert_eq!(buffer.size(), 1);

    let stats = buffer.stats();
    assert_eq!(stats.total_produced, 1);
    assert_eq!(stats.total_consumed, 0);

    let out = buffer.consume().await;
    assert_eq!(out.id, 1);
    assert_eq!(out.priority, Priority::High);
    assert_eq!(out.payload, "item-1");
    assert!(buffer.is_empty());

    let stats = buffer.stats();
    assert_eq!(stats.total_produced, 1);
    assert_eq!(stats.total_consumed, 1);
}

#[tokio::test]
async fn test_counters_match_size_after_every_operation() {
    let buffer = PriorityBoundedBuffer::new(8).unwrap();

    for i in 0..6 {
        buffer.produce(item(Priority::Medium, i)).await;
        let stats = buffer.stats();
        assert_eq!(
            stats.total_produced - stats.total_consumed,
            stats.size as u64
        );
    }

    for _ in 0..6 {
        buffer.consume().await;
        let stats = buffer.stats();
        assert_eq!(
            stats.total_produced - stats.total_consumed,
            stats.size as u64
        );
    }

    let stats = buffer.stats();
    assert_eq!(stats.size, 0);
    assert_eq!(stats.total_produced, 6);
    assert_eq!(stats.total_consumed, 6);
}

#[tokio::test]
async fn test_per_priority_counters_partition_production() {
    let buffer = PriorityBoundedBuffer::new(16).unwrap();

    let workload = [
        (Priority::Critical, 3u64),
        (Priority::High, 1),
        (Priority::Medium, 4),
        (Priority::Low, 2),
    ];
    let mut id = 0;
    for (priority, count) in workload {
        for _ in 0..count {
            buffer.produce(item(priority, id)).await;
            id += 1;
        }
    }

    let stats = buffer.stats();
    assert_eq!(stats.total_produced, 10);
    assert_eq!(stats.produced_sum(), stats.total_produced);
    for (priority, count) in workload {
        assert_eq!(stats.produced_by_priority[&priority], count);
    }

    // Consuming does not decrement the cumulative production counters.
    for _ in 0..10 {
        buffer.consume().await;
    }
    let drained = buffer.stats();
    assert_eq!(drained.size, 0);
    assert_eq!(drained.produced_by_priority, stats.produced_by_priority);
    assert_eq!(drained.produced_sum(), 10);
}

#[tokio::test]
async fn test_stats_snapshot_is_serializable() {
    let buffer = PriorityBoundedBuffer::new(2).unwrap();
    buffer.produce(item(Priority::Critical, 0)).await;

    let json = serde_json::to_value(buffer.stats()).unwrap();
    assert_eq!(json["size"], 1);
    assert_eq!(json["max_size"], 2);
    assert_eq!(json["produced_by_priority"]["CRITICAL"], 1);
    assert_eq!(json["produced_by_priority"]["LOW"], 0);
}
