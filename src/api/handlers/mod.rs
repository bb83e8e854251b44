pub mod delivery;
pub mod health;
pub mod order;
pub mod settlement;
