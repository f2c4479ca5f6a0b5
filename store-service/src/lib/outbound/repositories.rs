pub mod category;
pub mod product;
pub mod user;

pub use category::PostgresCategoryRepository;
pub use product::PostgresProductRepository;
pub use user::PostgresUserRepository;
