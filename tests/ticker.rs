use drilllog_pro::upload::Ticker;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn ticks_arrive_and_stop_joins_the_thread() {
    let repaints = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&repaints);
    let ticker = Ticker::spawn(Duration::from_millis(1), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap();

    assert!(ticker.wait_tick(Duration::from_secs(5)));
    assert!(ticker.wait_tick(Duration::from_secs(5)));
    ticker.stop();

    let after_stop = repaints.load(Ordering::SeqCst);
    std::thread::sleep(Duration::from_millis(20));
    assert_eq!(repaints.load(Ordering::SeqCst), after_stop);
}

#[test]
fn drain_counts_pending_ticks() {
    let ticker = Ticker::spawn(Duration::from_millis(1), || {}).unwrap();
    assert!(ticker.wait_tick(Duration::from_secs(5)));
    std::thread::sleep(Duration::from_millis(20));
    assert!(ticker.drain() >= 1);
}
