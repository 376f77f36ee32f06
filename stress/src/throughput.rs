use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

const SLIDING_WINDOW_SIZE: u64 = 2; // In seconds
const BATCH_SIZE: u64 = 1000;

static STOP: AtomicBool = AtomicBool::new(false);

#[repr(C)]
#[derive(Default)]
struct WorkerStats {
    count: AtomicU64,
    failures: AtomicU64,
    // keeps each worker's counters on their own cache line
    padding: [u64; 14],
}

impl WorkerStats {
    /// Calls `func` `BATCH_SIZE` times. Only successful calls count towards
    /// throughput.
    fn run_batch<F: Fn() -> bool>(&self, func: &F) {
        let mut failures = 0;
        for _ in 0..BATCH_SIZE {
            if !func() {
                failures += 1;
            }
        }
        self.count
            .fetch_add(BATCH_SIZE - failures, Ordering::Relaxed);
        if failures > 0 {
            self.failures.fetch_add(failures, Ordering::Relaxed);
        }
    }
}

/// Runs `func` in a tight loop on every physical core but one, reporting
/// the number of successful calls per second until Ctrl-C is pressed.
/// `func` returns `false` when the operation failed.
pub fn test_throughput<F>(func: F)
where
    F: Fn() -> bool + Sync + Send + 'static,
{
    ctrlc::set_handler(move || {
        STOP.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let num_threads = num_cpus::get_physical().max(2);
    println!("Number threads: {}", num_threads);
    let func = Arc::new(func);

    let worker_stats: Arc<Vec<WorkerStats>> =
        Arc::new((0..num_threads).map(|_| WorkerStats::default()).collect());
    let mut handles = Vec::with_capacity(num_threads);

    let monitor_stats = Arc::clone(&worker_stats);
    handles.push(thread::spawn(move || {
        let mut start_time = Instant::now();
        let mut total_count_old: u64 = 0;
        let mut total_failures_old: u64 = 0;
        loop {
            let elapsed = start_time.elapsed().as_secs();
            if elapsed >= SLIDING_WINDOW_SIZE {
                let total_count: u64 = monitor_stats
                    .iter()
                    .map(|stats| stats.count.load(Ordering::Relaxed))
                    .sum();
                let total_failures: u64 = monitor_stats
                    .iter()
                    .map(|stats| stats.failures.load(Ordering::Relaxed))
                    .sum();
                let current_count = total_count - total_count_old;
                total_count_old = total_count;
                println!(
                    "Throughput: {:.2} exports/sec",
                    current_count as f64 / elapsed as f64
                );
                if total_failures > total_failures_old {
                    println!(
                        "Failures: {} in this window, {} total",
                        total_failures - total_failures_old,
                        total_failures
                    );
                    total_failures_old = total_failures;
                }
                start_time = Instant::now();
            }

            if STOP.load(Ordering::SeqCst) {
                break;
            }
            thread::sleep(Duration::from_millis(500));
        }
    }));

    for thread_index in 0..num_threads - 1 {
        let worker_stats = Arc::clone(&worker_stats);
        let func = Arc::clone(&func);
        handles.push(thread::spawn(move || loop {
            worker_stats[thread_index].run_batch(&*func);
            if STOP.load(Ordering::SeqCst) {
                break;
            }
        }));
    }

    for handle in handles {
        handle.join().expect("stress thread panicked");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn failed_calls_are_not_counted_as_throughput() {
        let stats = WorkerStats::default();
        let calls = AtomicUsize::new(0);
        let every_fourth_fails = || calls.fetch_add(1, Ordering::Relaxed) % 4 != 3;

        stats.run_batch(&every_fourth_fails);

        assert_eq!(calls.load(Ordering::Relaxed) as u64, BATCH_SIZE);
        assert_eq!(stats.failures.load(Ordering::Relaxed), BATCH_SIZE / 4);
        assert_eq!(
            stats.count.load(Ordering::Relaxed),
            BATCH_SIZE - BATCH_SIZE / 4
        );
    }

    #[test]
    fn all_successful_calls_count() {
        let stats = WorkerStats::default();
        stats.run_batch(&|| true);
        assert_eq!(stats.count.load(Ordering::Relaxed), BATCH_SIZE);
        assert_eq!(stats.failures.load(Ordering::Relaxed), 0);
    }
}
