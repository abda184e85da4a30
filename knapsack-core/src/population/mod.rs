//! Contains logic which transforms one generation of chromosomes into the next one.

mod handoff;
pub use self::handoff::UpdaterHandle;

mod initial;
pub use self::initial::create_random_population;

mod updater;
pub use self::updater::PopulationUpdater;
