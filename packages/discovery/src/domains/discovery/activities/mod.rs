pub mod find;
pub mod slug;
pub mod window_gate;

pub use find::*;
pub use slug::*;
pub use window_gate::*;
