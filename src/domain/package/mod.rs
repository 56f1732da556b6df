pub mod entity;
pub mod listing;
pub mod repository;

pub use entity::{NewPackage, Package, PackageId};
pub use listing::{PackageFilters, PackageListing};
pub use repository::PackageRepository;
