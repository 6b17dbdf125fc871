pub mod conversion;
pub mod defaults;
pub mod definition;

pub use conversion::*;
pub use defaults::*;
pub use definition::*;
