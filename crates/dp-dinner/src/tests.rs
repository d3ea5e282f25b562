//! Integration tests for dp-dinner.

use std::sync::{Arc, mpsc};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use dp_core::{DelayRange, DpError, PhilosopherId, PhilosopherRng, PhilosopherStatus, TableConfig};
use dp_table::{TableEvent, TransitionRecorder};

use crate::{
    ConsoleObserver, DinnerBuilder, DinnerError, DinnerObserver, InstantPacer, Pacer, RandomPacer,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(philosophers: usize) -> TableConfig {
    TableConfig {
        philosopher_count: philosophers,
        min_delay_ms:      0,
        max_delay_ms:      2,
        seed:              Some(42),
    }
}

/// Counts observer callbacks across all philosopher threads.
#[derive(Default)]
struct Counts {
    thinking:   AtomicUsize,
    eating:     AtomicUsize,
    left:       AtomicUsize,
    left_meals: AtomicU64,
}

struct CountingObserver(Arc<Counts>);

impl DinnerObserver for CountingObserver {
    fn on_thinking(&self, _id: PhilosopherId) {
        self.0.thinking.fetch_add(1, Ordering::SeqCst);
    }

    fn on_eating(&self, _id: PhilosopherId) {
        self.0.eating.fetch_add(1, Ordering::SeqCst);
    }

    fn on_leave(&self, _id: PhilosopherId, meals: u64) {
        self.0.left.fetch_add(1, Ordering::SeqCst);
        self.0.left_meals.fetch_add(meals, Ordering::SeqCst);
    }
}

// ── DinnerBuilder validation ──────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let dinner = DinnerBuilder::new(TableConfig::default()).build().unwrap();
        assert_eq!(dinner.ring().count(), 5);
        assert_eq!(dinner.table().snapshot(), vec![PhilosopherStatus::Thinking; 5]);
    }

    #[test]
    fn lone_philosopher_rejected() {
        let result = DinnerBuilder::new(test_config(1)).build();
        assert!(matches!(
            result,
            Err(DinnerError::Config(DpError::TooFewPhilosophers(1)))
        ));
    }

    #[test]
    fn inverted_delays_rejected() {
        let config = TableConfig { min_delay_ms: 20, max_delay_ms: 10, ..test_config(5) };
        let result = DinnerBuilder::new(config).build();
        assert!(matches!(result, Err(DinnerError::Config(DpError::InvalidDelay { .. }))));
    }

    #[test]
    fn configured_seed_is_kept() {
        let dinner = DinnerBuilder::new(test_config(3)).build().unwrap();
        assert_eq!(dinner.seed(), 42);
    }
}

// ── Pacers and console lines ──────────────────────────────────────────────────

#[cfg(test)]
mod collaborator_tests {
    use super::*;

    #[test]
    fn console_lines() {
        assert_eq!(
            ConsoleObserver::line(PhilosopherId(3), PhilosopherStatus::Thinking),
            "Philosopher 3 thinking..."
        );
        assert_eq!(
            ConsoleObserver::line(PhilosopherId(0), PhilosopherStatus::Eating),
            "Philosopher 0 eating!"
        );
    }

    #[test]
    fn random_pacer_sleeps_within_bounds() {
        let pacer = RandomPacer::new(DelayRange::new(5, 10).unwrap());
        let mut rng = PhilosopherRng::new(7, PhilosopherId(0));
        let t0 = Instant::now();
        pacer.pause(PhilosopherId(0), PhilosopherStatus::Thinking, &mut rng);
        assert!(t0.elapsed() >= Duration::from_millis(5));
    }
}

// ── Full dinners ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn philosophers_make_progress_and_leave() {
        let running = DinnerBuilder::new(test_config(5))
            .pacer(InstantPacer)
            .build()
            .unwrap()
            .start()
            .unwrap();

        thread::sleep(Duration::from_millis(100));
        running.request_shutdown();
        let report = running.await_all().unwrap();

        assert_eq!(report.meals.len(), 5);
        assert_eq!(report.seed, 42);
        assert!(report.total_meals() > 0, "no one ate: {report:?}");
    }

    #[test]
    fn table_is_clear_after_shutdown() {
        let counts = Arc::new(Counts::default());
        let running = DinnerBuilder::new(test_config(5))
            .pacer(InstantPacer)
            .observer(CountingObserver(Arc::clone(&counts)))
            .build()
            .unwrap()
            .start()
            .unwrap();

        thread::sleep(Duration::from_millis(50));
        running.request_shutdown();
        assert!(running.is_shutdown_requested());
        let table_eating_before_join = running.table().eating_count();
        assert!(table_eating_before_join <= 2);

        let report = running.await_all().unwrap();
        assert_eq!(counts.left.load(Ordering::SeqCst), 5, "every philosopher must leave");
        assert_eq!(counts.left_meals.load(Ordering::SeqCst), report.total_meals());
        assert_eq!(counts.eating.load(Ordering::SeqCst) as u64, report.total_meals());
        assert_eq!(counts.thinking.load(Ordering::SeqCst) as u64, report.total_meals());
    }

    #[test]
    fn instrumented_run_never_seats_neighbors_together() {
        let recorder = Arc::new(TransitionRecorder::new());
        let running = DinnerBuilder::new(test_config(5))
            .pacer(InstantPacer)
            .table_observer(Arc::clone(&recorder))
            .build()
            .unwrap()
            .start()
            .unwrap();

        thread::sleep(Duration::from_millis(100));
        running.request_shutdown();
        let ring = dp_core::Ring::new(5).unwrap();
        let report = running.await_all().unwrap();

        let mut eat_transitions = 0u64;
        for event in recorder.events() {
            match event {
                TableEvent::Transition { id, status, snapshot } => {
                    assert_eq!(dp_table::find_conflict(&snapshot, ring), None, "{snapshot:?}");
                    assert!(snapshot.iter().filter(|s| s.is_eating()).count() <= 2);
                    if status.is_eating() {
                        eat_transitions += 1;
                        let (left, right) = ring.neighbors(id);
                        assert!(!snapshot[left.index()].is_eating());
                        assert!(!snapshot[right.index()].is_eating());
                    }
                }
                TableEvent::Wake { releaser, woken } => {
                    let (left, right) = ring.neighbors(releaser);
                    assert!(woken == left || woken == right);
                }
                TableEvent::Recheck { .. } => {}
            }
        }
        assert_eq!(eat_transitions, report.total_meals());
    }

    #[test]
    fn shutdown_right_after_start_completes() {
        let running = DinnerBuilder::new(test_config(7))
            .pacer(InstantPacer)
            .build()
            .unwrap()
            .start()
            .unwrap();
        running.request_shutdown();
        running.request_shutdown();
        let report = running.await_all().unwrap();
        assert_eq!(report.meals.len(), 7);
    }

    #[test]
    fn shutdown_latency_is_one_cycle() {
        // Each cycle sleeps at most 2 × 20 ms plus time spent waiting for
        // neighbors; a generous bound still proves nobody dines on.
        let config = TableConfig { min_delay_ms: 10, max_delay_ms: 20, ..test_config(5) };
        let running = DinnerBuilder::new(config).build().unwrap().start().unwrap();

        thread::sleep(Duration::from_millis(60));
        let t0 = Instant::now();
        running.request_shutdown();
        running.await_all().unwrap();
        assert!(t0.elapsed() < Duration::from_secs(2), "took {:?}", t0.elapsed());
    }

    #[test]
    fn dropping_the_handle_requests_shutdown() {
        let counts = Arc::new(Counts::default());
        let running = DinnerBuilder::new(test_config(4))
            .pacer(InstantPacer)
            .observer(CountingObserver(Arc::clone(&counts)))
            .build()
            .unwrap()
            .start()
            .unwrap();
        drop(running);

        let deadline = Instant::now() + Duration::from_secs(5);
        while counts.left.load(Ordering::SeqCst) < 4 {
            assert!(Instant::now() < deadline, "philosophers kept dining after drop");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn two_philosophers_share_both_forks() {
        let recorder = Arc::new(TransitionRecorder::new());
        let running = DinnerBuilder::new(test_config(2))
            .pacer(InstantPacer)
            .table_observer(Arc::clone(&recorder))
            .build()
            .unwrap()
            .start()
            .unwrap();
        thread::sleep(Duration::from_millis(50));
        running.request_shutdown();
        running.await_all().unwrap();

        for event in recorder.events() {
            if let TableEvent::Transition { snapshot, .. } = event {
                assert!(snapshot.iter().filter(|s| s.is_eating()).count() <= 1);
            }
        }
    }
}

// ── Failures ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod failure_tests {
    use super::*;

    /// Panics while philosopher 3 is thinking, i.e. while it holds no fork.
    struct FaultyPacer;

    impl Pacer for FaultyPacer {
        fn pause(&self, id: PhilosopherId, activity: PhilosopherStatus, _rng: &mut PhilosopherRng) {
            if id == PhilosopherId(3) && activity == PhilosopherStatus::Thinking {
                panic!("philosopher 3 choked on a thought");
            }
            thread::yield_now();
        }
    }

    #[test]
    fn panicked_philosopher_is_reported() {
        let running = DinnerBuilder::new(test_config(5))
            .pacer(FaultyPacer)
            .build()
            .unwrap()
            .start()
            .unwrap();
        thread::sleep(Duration::from_millis(50));
        running.request_shutdown();

        let result = running.await_all();
        assert!(matches!(result, Err(DinnerError::PhilosopherPanicked(PhilosopherId(3)))));
    }

    /// Panics while philosopher 3 is eating, i.e. while it holds both forks.
    struct GreedyPacer;

    impl Pacer for GreedyPacer {
        fn pause(&self, id: PhilosopherId, activity: PhilosopherStatus, _rng: &mut PhilosopherRng) {
            if id == PhilosopherId(3) && activity == PhilosopherStatus::Eating {
                panic!("philosopher 3 choked on the noodles");
            }
            thread::yield_now();
        }
    }

    #[test]
    fn panic_while_eating_releases_forks() {
        let counts = Arc::new(Counts::default());
        let running = DinnerBuilder::new(test_config(5))
            .pacer(GreedyPacer)
            .observer(CountingObserver(Arc::clone(&counts)))
            .build()
            .unwrap()
            .start()
            .unwrap();
        thread::sleep(Duration::from_millis(50));
        running.request_shutdown();

        // Neighbors 2 and 4 must not be left waiting on forks nobody returns.
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(running.await_all());
        });
        let result = rx.recv_timeout(Duration::from_secs(5)).expect("await_all hung");
        assert!(matches!(result, Err(DinnerError::PhilosopherPanicked(PhilosopherId(3)))));
        assert_eq!(counts.left.load(Ordering::SeqCst), 4, "survivors joined before reporting");
    }
}
