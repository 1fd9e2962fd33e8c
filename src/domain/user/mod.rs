// User domain module
// Profile, credentials and the value objects validated at the form boundary

#![allow(clippy::module_inception)]

pub mod user;
pub mod value_objects;

pub use user::{AccessToken, Credentials, NewUser, ProfileChanges, User};
pub use value_objects::{Email, Password};
