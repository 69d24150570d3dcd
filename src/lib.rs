pub mod libs;

pub use libs::alignment::Alignment;
pub use libs::block::{find_blocks, Block, BlockReport};
pub use libs::error::SelectError;
pub use libs::io::*;
pub use libs::select::{Budget, ColumnSelection, ResolvedBudget};
