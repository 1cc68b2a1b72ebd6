//! Core domain logic: manifest model, flavor detection, and the
//! dependency merge. Everything here is pure and storage-agnostic.

pub mod error;
pub mod flavor;
pub mod gate;
pub mod manifest;
pub mod merge;
pub mod versions;

pub use error::AppError;
pub use flavor::AppFlavor;
pub use manifest::{MANIFEST_FILE, PackageManifest};
pub use merge::{MergeOutcome, merge};
pub use versions::DependencyPin;
