//! Package repositories: the store's view of `repos.json` and each repo's index

pub mod load;
pub mod types;

pub use load::load_get;
pub use types::{Get, Package, Repo};
