mod load;
mod mapper;
mod types;

pub use load::*;
pub use mapper::*;
pub use types::*;
