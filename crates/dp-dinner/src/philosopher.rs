//! The per-philosopher driver loop.

use dp_core::{PhilosopherId, PhilosopherRng, PhilosopherStatus};
use dp_table::{SharedTable, TableObserver};
use tracing::debug;

use crate::{DinnerObserver, Pacer, ShutdownFlag};

/// Everything the philosopher threads share.  Lives behind one `Arc`.
pub(crate) struct Shared<P: Pacer, O: DinnerObserver, T: TableObserver> {
    pub table:    SharedTable<T>,
    pub shutdown: ShutdownFlag,
    pub pacer:    P,
    pub observer: O,
}

/// Run think → acquire → eat → release until the shutdown flag is seen at
/// the top of a cycle.  Returns the number of meals eaten.
pub(crate) fn dine<P, O, T>(id: PhilosopherId, shared: &Shared<P, O, T>, mut rng: PhilosopherRng) -> u64
where
    P: Pacer,
    O: DinnerObserver,
    T: TableObserver,
{
    let mut meals = 0;
    while !shared.shutdown.is_set() {
        shared.observer.on_thinking(id);
        shared.pacer.pause(id, PhilosopherStatus::Thinking, &mut rng);

        shared.table.acquire_forks(id);
        let forks = HeldForks { table: &shared.table, id };

        shared.observer.on_eating(id);
        shared.pacer.pause(id, PhilosopherStatus::Eating, &mut rng);

        drop(forks);
        meals += 1;
    }

    debug!(%id, meals, "philosopher left the table");
    shared.observer.on_leave(id, meals);
    meals
}

/// Both forks of `id`, put back on drop.  A philosopher that panics while
/// eating therefore still wakes its neighbors instead of starving them.
struct HeldForks<'a, T: TableObserver> {
    table: &'a SharedTable<T>,
    id:    PhilosopherId,
}

impl<T: TableObserver> Drop for HeldForks<'_, T> {
    fn drop(&mut self) {
        self.table.release_forks(self.id);
    }
}
