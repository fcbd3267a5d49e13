pub mod categories;
pub mod hotel_chains;
pub mod hotels;
