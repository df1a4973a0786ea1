//! Data models for the entities the upgrade rules deal with

pub mod version;
pub mod license;
pub mod policy;

pub use version::{SemVer, Version};
pub use license::License;
pub use policy::Policy;
