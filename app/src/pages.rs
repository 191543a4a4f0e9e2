pub mod about;
pub mod blog;
pub mod home;
