pub mod export;
pub mod preview;
pub mod validate;

pub use export::export;
pub use preview::preview;
pub use validate::validate;
