pub mod hello;
pub mod history;
pub mod orders;
pub mod products;
pub mod users;
