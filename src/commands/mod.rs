pub mod candidates;
pub mod decisions;
pub mod interviews;
pub mod review;
pub mod show;
pub mod stats;

pub use candidates::*;
pub use decisions::*;
pub use interviews::*;
pub use review::*;
pub use show::*;
pub use stats::*;
