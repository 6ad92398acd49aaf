pub mod curve;
pub mod market;
pub mod risk;
pub mod suggestion;

pub use curve::*;
pub use market::*;
pub use risk::*;
pub use suggestion::*;
