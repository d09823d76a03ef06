//! Graph generators: the divisibility relation and exhaustive state-space
//! exploration.

mod buckets;
mod divisibility;
mod state_space;

pub use buckets::{BucketPuzzle, Buckets, FIRST_CAPACITY, SECOND_CAPACITY, bucket_graph};
pub use divisibility::divisibility_graph;
pub use state_space::{StateSpace, Transition, explore, explore_from};
