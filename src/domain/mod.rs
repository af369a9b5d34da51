pub mod commands;
pub mod events;
pub mod item;
pub mod member;
pub mod value_objects;

pub use commands::*;
pub use events::*;
pub use item::*;
pub use member::*;
pub use value_objects::*;
