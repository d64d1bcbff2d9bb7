#![allow(clippy::panic, clippy::unwrap_used)]

use std::time::Duration;

use futures::{Stream, StreamExt};

use super::{ComputedProperty, Property};

async fn wait_for<S, T, P>(stream: &mut S, predicate: P) -> T
where
    S: Stream<Item = T> + Unpin,
    P: Fn(&T) -> bool,
{
    tokio::time::timeout(Duration::from_secs(2), async {
        while let Some(value) = stream.next().await {
            if predicate(&value) {
                return value;
            }
        }
        panic!("stream ended before the expected value");
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn watch_yields_current_value_first() {
    let property = Property::new(3);
    let mut values = Box::pin(property.watch());

    assert_eq!(values.next().await, Some(3));
}

#[tokio::test]
async fn set_with_equal_value_does_not_notify() {
    let property = Property::new(1);
    let mut values = Box::pin(property.watch());
    assert_eq!(values.next().await, Some(1));

    property.set(1);
    let pending = tokio::time::timeout(Duration::from_millis(50), values.next()).await;
    assert!(pending.is_err());

    property.set(2);
    assert_eq!(values.next().await, Some(2));
}

#[test]
fn update_returns_stored_value() {
    let property = Property::new(4);

    assert_eq!(property.update(|current| current + 1), 5);
    assert_eq!(property.update(|current| *current), 5);
    assert_eq!(property.get(), 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn update_loses_no_concurrent_writes() {
    let counter = Property::new(0usize);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let counter = counter.clone();
            tokio::spawn(async move {
                for _ in 0..250 {
                    counter.update(|value| value + 1);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(counter.get(), 2000);
}

#[tokio::test]
async fn computed_property_follows_inputs() {
    let source = Property::new(2);
    let doubled = {
        let source_ref = source.clone();
        ComputedProperty::new(0, source.watch(), move || source_ref.get() * 2)
    };
    let mut values = Box::pin(doubled.watch());

    wait_for(&mut values, |value| *value == 4).await;

    source.set(5);
    wait_for(&mut values, |value| *value == 10).await;
    assert_eq!(doubled.get(), 10);
}

#[tokio::test]
async fn stopped_computed_property_keeps_last_value() {
    let source = Property::new(1);
    let mut doubled = {
        let source_ref = source.clone();
        ComputedProperty::new(0, source.watch(), move || source_ref.get() * 2)
    };
    let mut values = Box::pin(doubled.watch());
    wait_for(&mut values, |value| *value == 2).await;

    doubled.stop().await;
    source.set(8);
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(doubled.get(), 2);
}
