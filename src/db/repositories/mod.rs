//! Database repositories

pub mod problem_repo;

pub use problem_repo::ProblemRepository;
