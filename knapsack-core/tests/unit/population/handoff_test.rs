use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::random::EchoRandom;
use crate::models::Chromosome;
use crate::operators::{CrossoverOperator, FlipMutation};
use crate::utils::Random;
use std::future::Future;
use std::sync::Arc;

struct FailingCrossover {}

impl CrossoverOperator for FailingCrossover {
    fn cross(&self, _: &mut Chromosome, _: &mut Chromosome, _: &dyn Random) {
        panic!("crossover failure");
    }
}

fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread().build().expect("cannot build runtime").block_on(future)
}

#[test]
fn can_hand_population_over_and_get_it_back_updated() {
    let population = create_population(vec![(vec![1, 0], 1.), (vec![0, 1], 2.), (vec![1, 1], 3.)]);

    let updated = block_on(async {
        let handle = UpdaterHandle::new(PopulationUpdater::new(0., 0., Arc::new(EchoRandom::new(true))));
        handle.update(population).await
    })
    .expect("update should succeed");

    assert_eq!(updated.fitness().collect::<Vec<_>>(), vec![3., 2., 1.]);
}

#[test]
fn can_serve_consecutive_requests() {
    let population = create_population(vec![(vec![1, 0, 1], 1.), (vec![0, 1, 0], 2.)]);

    let updated = block_on(async {
        let handle = UpdaterHandle::new(PopulationUpdater::new(0., 1., Arc::new(EchoRandom::new(true))));

        let mut population = population;
        for _ in 0..3 {
            population = handle.update(population).await?;
        }

        Ok::<_, crate::utils::GenericError>(population)
    })
    .expect("updates should succeed");

    // NOTE each update flips every gen, sorting keeps the order as fitness is not re-evaluated
    let gens = updated.chromosomes.iter().map(get_gens_as_bits).collect::<Vec<_>>();
    assert_eq!(gens, vec![vec![1, 0, 1], vec![0, 1, 0]]);
}

#[test]
fn can_report_error_instead_of_returning_stale_population() {
    let population = create_population(vec![(vec![1, 0], 1.), (vec![0, 1], 2.)]);

    let (first, second) = block_on(async {
        let updater = PopulationUpdater::new(1., 0., Arc::new(EchoRandom::new(true)))
            .with_operators(Box::new(FailingCrossover {}), Box::<FlipMutation>::default());
        let handle = UpdaterHandle::new(updater);

        let first = handle.update(population.clone()).await;
        let second = handle.update(population).await;

        (first, second)
    });

    assert_eq!(first.err(), Some("population updater has dropped update request".into()));
    assert_eq!(second.err(), Some("population updater is not running".into()));
}
