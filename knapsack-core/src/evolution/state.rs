#[cfg(test)]
#[path = "../../tests/unit/evolution/state_test.rs"]
mod state_test;

/// Keeps track of algorithm progress, updated once per generation.
#[derive(Clone, Debug, PartialEq)]
pub struct AlgorithmState {
    /// Amount of evaluated generations.
    pub number_of_updates: usize,
    /// The best fitness observed when the streak started.
    pub previous_fitness: f64,
    /// Amount of consecutive generations with unchanged best fitness, never less than one.
    pub convergence_counter: usize,
}

impl Default for AlgorithmState {
    fn default() -> Self {
        Self { number_of_updates: 0, previous_fitness: 0., convergence_counter: 1 }
    }
}

impl AlgorithmState {
    /// Updates state using the best fitness of the current generation.
    /// Fitness values are compared exactly, without any tolerance.
    pub fn update(&mut self, best_fitness: f64) {
        if best_fitness == self.previous_fitness {
            self.convergence_counter += 1;
        } else {
            self.convergence_counter = 1;
            self.previous_fitness = best_fitness;
        }

        self.number_of_updates += 1;
    }
}
