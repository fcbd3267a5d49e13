pub mod category;
pub mod geo;
pub mod hotel;
pub mod hotel_chain;
pub mod page;
