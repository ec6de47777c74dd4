//! Command implementations

mod list;
mod probe;
mod scan;

pub use list::list;
pub use probe::probe;
pub use scan::scan;
