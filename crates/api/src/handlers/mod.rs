pub mod addresses;
pub mod customers;
pub mod films;
pub mod pages;
pub mod staff;
pub mod stores;
