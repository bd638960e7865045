mod product;
mod settings;
mod user;

pub use product::*;
pub use settings::*;
pub use user::*;
