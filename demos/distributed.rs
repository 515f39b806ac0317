use rand::{rng, Rng};
use snowflake::{Snowflake, SnowflakeConfig, SnowflakeError};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    // One generator per "machine", each shared by several worker threads
    let machines: Vec<Arc<Snowflake>> = (0..3)
        .map(|machine_id| {
            Arc::new(Snowflake::with_config(machine_id, SnowflakeConfig::default()).unwrap())
        })
        .collect();
    let mut handles = vec![];

    for (machine_id, generator) in machines.iter().enumerate() {
        for worker in 0..2 {
            let generator = Arc::clone(generator);
            handles.push(thread::spawn(move || {
                let mut ids = Vec::new();
                let mut rng = rng();

                for i in 0..5 {
                    let id = match generator.generate() {
                        Ok(id) => id,
                        Err(err @ SnowflakeError::ClockRegression { .. }) => {
                            // Transient: back off and let the clock catch up
                            eprintln!("machine {machine_id} worker {worker}: {err}");
                            thread::sleep(Duration::from_millis(err.regression_delta() as u64));
                            continue;
                        }
                        Err(err) => panic!("unrecoverable: {err}"),
                    };

                    let (ts, machine, seq) = generator.extract.decompose(id);
                    println!(
                        "Machine {} worker {} generated #{} {} (ts={}, machine={}, seq={})",
                        machine_id, worker, i, id, ts, machine, seq
                    );
                    ids.push(id);

                    thread::sleep(Duration::from_millis(rng.random_range(0..=9)));
                }
                ids
            }));
        }
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(all_ids.insert(id), "Duplicate ID generated!");
        }
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
}
