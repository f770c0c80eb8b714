//! Tests for concurrent producer/consumer access

use crate::buffer::api::{Priority, PriorityBoundedBuffer, PriorityItem};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::timeout;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_no_items_lost_or_duplicated_under_contention() {
    const PRODUCERS: i64 = 4;
    const ITEMS_PER_PRODUCER: i64 = 25;
    const CONSUMERS: usize = 3;
    const TOTAL: usize = (PRODUCERS * ITEMS_PER_PRODUCER) as usize;

    let buffer = Arc::new(PriorityBoundedBuffer::new(8).unwrap());

    let mut producers = JoinSet::new();
    for producer in 0..PRODUCERS {
        let buffer = Arc::clone(&buffer);
        producers.spawn(async move {
            for i in 0..ITEMS_PER_PRODUCER {
                // Globally unique id so delivery can be audited.
                let id = producer * ITEMS_PER_PRODUCER + i;
                let priority = Priority::ALL[(id % 4) as usize];
                buffer
                    .produce(PriorityItem::new(priority, id, format!("p{producer}-{i}")))
                    .await;
            }
        });
    }

    let (delivered_tx, mut delivered_rx) = tokio::sync::mpsc::unbounded_channel();
    let mut consumers = Vec::new();
    for _ in 0..CONSUMERS {
        let buffer = Arc::clone(&buffer);
        let delivered_tx = delivered_tx.clone();
        consumers.push(tokio::spawn(async move {
            loop {
                let item = buffer.consume().await;
                if delivered_tx.send(item.id).is_err() {
                    return;
                }
            }
        }));
    }
    drop(delivered_tx);

    let mut seen = HashSet::new();
    for _ in 0..TOTAL {
        let id = timeout(Duration::from_secs(10), delivered_rx.recv())
            .await
            .expect("all produced items should be delivered")
            .expect("delivery channel closed early");
        assert!(seen.insert(id), "item {id} delivered twice");
    }

    while let Some(result) = producers.join_next().await {
        result.unwrap();
    }

    assert_eq!(seen.len(), TOTAL);
    let stats = buffer.stats();
    assert_eq!(stats.total_produced, TOTAL as u64);
    assert_eq!(stats.total_consumed, TOTAL as u64);
    assert_eq!(stats.size, 0);

    // Consumers are parked on an empty buffer by now; stopping them is the
    // runtime's job at test teardown.
    for consumer in consumers {
        consumer.abort();
    }
}

#[tokio::test]
async fn test_single_item_wakes_exactly_one_consumer() {
    let buffer = Arc::new(PriorityBoundedBuffer::new(4).unwrap());

    let (won_tx, mut won_rx) = tokio::sync::mpsc::unbounded_channel();
    let mut waiters = Vec::new();
    for waiter in 0..3u32 {
        let buffer = Arc::clone(&buffer);
        let won_tx = won_tx.clone();
        waiters.push(tokio::spawn(async move {
            let item = buffer.consume().await;
            let _ = won_tx.send((waiter, item.id));
        }));
    }
    drop(won_tx);

    tokio::time::sleep(Duration::from_millis(50)).await;
    buffer
        .produce(PriorityItem::new(Priority::Critical, 1, "only".to_string()))
        .await;

    // Exactly one waiter wins the item...
    let (_, id) = timeout(Duration::from_millis(500), won_rx.recv())
        .await
        .expect("one consumer should win the item")
        .unwrap();
    assert_eq!(id, 1);

    // ...and the others keep blocking.
    let second = timeout(Duration::from_millis(200), won_rx.recv()).await;
    assert!(second.is_err(), "only one consumer may receive the item");

    buffer
        .produce(PriorityItem::new(Priority::High, 2, "more".to_string()))
        .await;
    buffer
        .produce(PriorityItem::new(Priority::High, 3, "more".to_string()))
        .await;

    let mut remaining = HashSet::new();
    for _ in 0..2 {
        let (_, id) = timeout(Duration::from_secs(1), won_rx.recv())
            .await
            .expect("remaining consumers should each win an item")
            .unwrap();
        remaining.insert(id);
    }
    assert_eq!(remaining, HashSet::from([2, 3]));

    for waiter in waiters {
        waiter.await.unwrap();
    }
}
