pub mod info;
pub mod market;
pub mod order;
