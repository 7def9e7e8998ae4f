mod draft;
mod user;

pub use draft::{Field, UserDraft};
pub use user::User;
