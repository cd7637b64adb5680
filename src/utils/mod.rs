// Utility module exports

pub mod date;
