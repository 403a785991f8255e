mod generic_path;
pub use generic_path::Path;

mod safe_path;
pub use safe_path::SafePath;

/// The cost of moving across the Grid.
pub type Cost = usize;
