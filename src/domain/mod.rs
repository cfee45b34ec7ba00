//! Domain logic - pure business rules independent of git, terminal and network

pub mod branch;
pub mod commit;
pub mod policy;

pub use branch::{branch_reference, Placement};
pub use commit::{CommitData, CommitType};
pub use policy::{Flags, PublishPolicy};
