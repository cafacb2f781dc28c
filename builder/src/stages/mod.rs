// этапы сборки таблицы, в порядке выполнения

mod contractions;
mod expansions;
mod large_weights;
mod primary;
mod simplify;

pub use contractions::{process_contractions, ContractionTable};
pub use expansions::process_expansions;
pub use large_weights::split_large_weights;
pub use primary::build_primary_trie;
pub use simplify::simplify;
