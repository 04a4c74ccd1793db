pub mod ids;
pub mod task;
pub mod user;

pub use ids::*;
pub use task::*;
pub use user::*;
