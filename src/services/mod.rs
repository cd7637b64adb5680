// Service module exports

pub mod currency;
pub mod delivery;
pub mod feed;
pub mod settings;
pub mod toggle;
