pub mod hex;
pub mod line;
