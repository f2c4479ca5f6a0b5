pub mod category;
pub mod errors;
pub mod product;
pub mod user;
