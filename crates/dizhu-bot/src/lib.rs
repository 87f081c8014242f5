pub mod agent;
pub mod greedy;
pub mod random;

pub use agent::Agent;
pub use greedy::GreedyAgent;
pub use random::RandomAgent;
