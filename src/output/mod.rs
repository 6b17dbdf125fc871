pub mod component;
pub mod document;
pub mod outline;

pub use component::*;
pub use document::*;
pub use outline::FlowOutline;
