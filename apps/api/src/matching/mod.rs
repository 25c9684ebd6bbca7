// Matching engine: pure sub-score functions + the weighted composite scorer.
// Every function in here is deterministic and I/O-free; handlers do the
// fetching and the threshold policy.

pub mod handlers;
pub mod location;
pub mod salary;
pub mod schedule;
pub mod scorer;
pub mod skills;
