pub mod catalog;
pub mod member_registry;

pub use catalog::{BookCatalog, Catalog, MagazineCatalog};
pub use member_registry::MemberRegistry;
