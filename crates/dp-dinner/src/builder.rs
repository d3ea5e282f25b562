//! Fluent builder for constructing a [`Dinner`].

use std::sync::Arc;

use dp_core::{DelayRange, PhilosopherRng, TableConfig};
use dp_table::{NoopTableObserver, SharedTable, TableObserver};

use crate::philosopher::Shared;
use crate::{Dinner, DinnerObserver, DinnerResult, NoopObserver, Pacer, RandomPacer, ShutdownFlag};

/// Fluent builder for [`Dinner<P, O, T>`].
///
/// # Required inputs
///
/// - [`TableConfig`] — philosopher count, delay bounds, optional seed
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                                    |
/// |-------------------------|--------------------------------------------|
/// | `.pacer(p)`             | `RandomPacer` over the config's delay range |
/// | `.observer(o)`          | `NoopObserver`                             |
/// | `.table_observer(t)`    | `NoopTableObserver`                        |
///
/// # Example
///
/// ```rust,ignore
/// let dinner = DinnerBuilder::new(config)
///     .observer(ConsoleObserver)
///     .build()?;
/// let running = dinner.start()?;
/// ```
pub struct DinnerBuilder<P: Pacer, O: DinnerObserver, T: TableObserver> {
    config:         TableConfig,
    pacer:          P,
    observer:       O,
    table_observer: T,
}

impl DinnerBuilder<RandomPacer, NoopObserver, NoopTableObserver> {
    /// Create a builder with default collaborators.
    pub fn new(config: TableConfig) -> Self {
        // Bounds are checked in `build`.
        let range = DelayRange { min_ms: config.min_delay_ms, max_ms: config.max_delay_ms };
        Self {
            config,
            pacer:          RandomPacer::new(range),
            observer:       NoopObserver,
            table_observer: NoopTableObserver,
        }
    }
}

impl<P: Pacer, O: DinnerObserver, T: TableObserver + 'static> DinnerBuilder<P, O, T> {
    /// Replace how long philosophers think and eat.
    pub fn pacer<P2: Pacer>(self, pacer: P2) -> DinnerBuilder<P2, O, T> {
        DinnerBuilder {
            config:         self.config,
            pacer,
            observer:       self.observer,
            table_observer: self.table_observer,
        }
    }

    /// Receive think/eat/leave notifications (e.g. [`ConsoleObserver`][crate::ConsoleObserver]).
    pub fn observer<O2: DinnerObserver>(self, observer: O2) -> DinnerBuilder<P, O2, T> {
        DinnerBuilder {
            config:         self.config,
            pacer:          self.pacer,
            observer,
            table_observer: self.table_observer,
        }
    }

    /// Instrument the fork protocol itself.  Calls are made under the table
    /// lock.
    pub fn table_observer<T2: TableObserver + 'static>(self, table_observer: T2) -> DinnerBuilder<P, O, T2> {
        DinnerBuilder {
            config:   self.config,
            pacer:    self.pacer,
            observer: self.observer,
            table_observer,
        }
    }

    /// Validate the configuration, set the table and return a [`Dinner`].
    pub fn build(self) -> DinnerResult<Dinner<P, O, T>> {
        self.config.validate()?;
        let ring = self.config.ring()?;
        let seed = self.config.seed.unwrap_or_else(PhilosopherRng::fresh_seed);

        let shared = Shared {
            table:    SharedTable::with_observer(ring, self.table_observer),
            shutdown: ShutdownFlag::new(),
            pacer:    self.pacer,
            observer: self.observer,
        };
        Ok(Dinner { seed, shared: Arc::new(shared) })
    }
}
