#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{assert_unique_and_monotonic, manual_generator, utc};
    use crate::*;
    use chrono::TimeDelta;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_concurrent_generation() {
        let generator = Arc::new(Snowflake::with_config(7, SnowflakeConfig::default()).unwrap());
        let num_threads = 8;
        let ids_per_thread = 500;
        let barrier = Arc::new(Barrier::new(num_threads));
        let mut handles = Vec::with_capacity(num_threads);

        for _ in 0..num_threads {
            let generator = Arc::clone(&generator);
            let barrier = Arc::clone(&barrier);
            handles.push(thread::spawn(move || {
                barrier.wait();
                (0..ids_per_thread)
                    .map(|_| generator.generate().unwrap())
                    .collect::<Vec<_>>()
            }));
        }

        let mut all_ids = Vec::with_capacity(num_threads * ids_per_thread);
        for h in handles {
            all_ids.extend(h.join().expect("thread panicked"));
        }

        assert_unique_and_monotonic(all_ids, num_threads * ids_per_thread);
    }

    #[test]
    fn test_per_thread_order_is_preserved() {
        let generator = Arc::new(Snowflake::with_config(1, SnowflakeConfig::default()).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let generator = Arc::clone(&generator);
                thread::spawn(move || {
                    (0..250)
                        .map(|_| generator.generate().unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for h in handles {
            let ids = h.join().unwrap();
            assert!(ids.windows(2).all(|w| w[1] > w[0]));
        }
    }

    #[test]
    fn test_concurrent_generation_under_simulated_clock() {
        let (generator, clock) = manual_generator(5, utc(2030, 7, 1, 0, 0, 0));
        let generator = Arc::new(generator);
        let done = Arc::new(AtomicBool::new(false));

        // Keeps the simulated clock ticking so exhausted ticks can drain
        let ticker = {
            let clock = Arc::clone(&clock);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                while !done.load(Ordering::SeqCst) {
                    thread::sleep(Duration::from_millis(1));
                    clock.advance(TimeDelta::milliseconds(1));
                }
            })
        };

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let generator = Arc::clone(&generator);
                thread::spawn(move || {
                    (0..3000)
                        .map(|_| generator.generate().unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all_ids = HashSet::new();
        for h in handles {
            for id in h.join().unwrap() {
                assert!(all_ids.insert(id), "duplicate id {id}");
            }
        }
        done.store(true, Ordering::SeqCst);
        ticker.join().unwrap();

        assert_eq!(all_ids.len(), 12_000);
        assert!(all_ids.iter().all(|id| generator.extract.machine(*id) == 5));
    }
}
