pub mod compass;
pub mod date_range;
pub mod field;
pub mod record;
pub mod selection;
pub mod store;
