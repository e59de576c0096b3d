//! Array operators

mod add_item;
mod as_query_str;
mod diff;
mod fill;
mod item;
mod join;
mod random;
mod search;
mod unique;
mod values;

pub use add_item::ArrayAddItemFunction;
pub use as_query_str::ArrayAsQueryStrFunction;
pub use diff::ArrayDiffFunction;
pub use fill::ArrayFillFunction;
pub use item::ArrayItemFunction;
pub use join::ArrayJoinFunction;
pub use random::ArrayRandomFunction;
pub use search::ArraySearchFunction;
pub use unique::ArrayUniqueFunction;
pub use values::ArrayValuesFunction;
