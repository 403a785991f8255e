//! Hooks to watch a search as it runs.
//!
//! Observers only ever see the nodes; they can't change which Path is found.

use crate::{tree::Node, Cost, Point};

/// What happened to a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchEvent {
    /// the node was admitted to the frontier
    Enqueue,
    /// the node was taken from the frontier and is about to be goal tested
    Visit,
    /// the node was dropped: dominated by another node for the same location, or below the
    /// success threshold
    Ignore,
}

/// Receives a notification for every [`SearchEvent`] of a search.
pub trait SearchObserver {
    /// Called once per event, with the node the event is about.
    fn notify(&mut self, event: SearchEvent, node: &Node);
}

/// Ignores all events.
impl SearchObserver for () {
    fn notify(&mut self, _event: SearchEvent, _node: &Node) {}
}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn notify(&mut self, event: SearchEvent, node: &Node) {
        (**self).notify(event, node)
    }
}

/// One entry of an [`EventLog`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    /// what happened
    pub event: SearchEvent,
    /// where the node is
    pub location: Point,
    /// the node's path cost
    pub g: Cost,
    /// the node's heuristic estimate
    pub h: Cost,
    /// the node's priority
    pub f: Cost,
    /// the node's survival probability
    pub survival_probability: f64,
}

/// Records every event in order.
///
/// ```
/// # use safe_pathfinding::prelude::*;
/// let terrain = Grid::filled(1, 3, 1);
/// let mut log = EventLog::new();
/// find_shortest_path_with((0, 0), (0, 2), &terrain, 1, &mut log).unwrap();
///
/// assert_eq!(log.count(SearchEvent::Visit), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    records: Vec<Record>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> EventLog {
        EventLog::default()
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterates over the records of one kind of event.
    pub fn of(&self, event: SearchEvent) -> impl Iterator<Item = &Record> + '_ {
        self.records.iter().filter(move |r| r.event == event)
    }

    /// How often `event` happened.
    pub fn count(&self, event: SearchEvent) -> usize {
        self.of(event).count()
    }

    /// Removes all records.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl SearchObserver for EventLog {
    fn notify(&mut self, event: SearchEvent, node: &Node) {
        self.records.push(Record {
            event,
            location: node.location(),
            g: node.g(),
            h: node.h(),
            f: node.f(),
            survival_probability: node.survival_probability(),
        });
    }
}

#[cfg(feature = "log")]
pub use self::log_observer::LogObserver;

#[cfg(feature = "log")]
mod log_observer {
    use super::{SearchEvent, SearchObserver};
    use crate::tree::Node;

    /// Writes every event to the [`log`] facade, and counts them.
    #[derive(Clone, Debug)]
    pub struct LogObserver {
        level: log::Level,
        with_probability: bool,
        counts: [usize; 3],
    }

    impl LogObserver {
        /// Logs events at `level`. The survival probability is only printed if
        /// `with_probability` is set.
        pub fn new(level: log::Level, with_probability: bool) -> LogObserver {
            LogObserver {
                level,
                with_probability,
                counts: [0; 3],
            }
        }

        /// How often `event` happened so far.
        pub fn count(&self, event: SearchEvent) -> usize {
            self.counts[event as usize]
        }
    }

    impl SearchObserver for LogObserver {
        fn notify(&mut self, event: SearchEvent, node: &Node) {
            self.counts[event as usize] += 1;
            let label = match event {
                SearchEvent::Enqueue => "enqueue",
                SearchEvent::Visit => "visit",
                SearchEvent::Ignore => "ignore",
            };
            if self.with_probability {
                log::log!(
                    self.level,
                    "{:<7} {:?} g={} p={:.6}",
                    label,
                    node.location(),
                    node.g(),
                    node.survival_probability()
                );
            } else {
                log::log!(self.level, "{:<7} {:?} g={}", label, node.location(), node.g());
            }
        }
    }

}
