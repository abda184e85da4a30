use crate::utils::{DefaultRandom, Environment, Random};
use std::sync::{Arc, Mutex};

pub mod random;

pub fn create_test_random() -> Arc<dyn Random + Send + Sync> {
    Arc::new(DefaultRandom::new_with_seed(0))
}

/// Creates a seeded environment with a logger which does nothing.
pub fn create_test_environment() -> Arc<Environment> {
    create_test_environment_with_seed(0)
}

pub fn create_test_environment_with_seed(seed: u64) -> Arc<Environment> {
    Arc::new(Environment { logger: Arc::new(|_| {}), ..Environment::new_with_seed(seed) })
}

/// Creates an environment which keeps all logged messages.
pub fn create_test_environment_with_logs() -> (Arc<Environment>, Arc<Mutex<Vec<String>>>) {
    let logs = Arc::new(Mutex::new(Vec::new()));
    let environment = Environment {
        logger: Arc::new({
            let logs = logs.clone();
            move |msg: &str| logs.lock().unwrap().push(msg.to_string())
        }),
        ..Environment::new_with_seed(0)
    };

    (Arc::new(environment), logs)
}
