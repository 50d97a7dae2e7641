pub mod health;
pub mod role;
