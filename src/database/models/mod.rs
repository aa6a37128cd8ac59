mod item;
mod store;
mod tag;
mod user;

pub use item::Item;
pub use store::Store;
pub use tag::Tag;
pub use user::User;

/// Binds a row type to its table for the generic repository
pub trait Table {
    const TABLE: &'static str;
    const COLUMNS: &'static str;
    /// Message used when a keyed lookup misses
    const NOT_FOUND: &'static str;
}
