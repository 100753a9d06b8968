//! Account domain entities.

pub mod ban;
pub mod model;
pub mod role;
pub mod sex;

pub use ban::BanState;
pub use model::{Account, NewAccount};
pub use role::AccountRole;
pub use sex::Sex;
