pub mod auth;
pub mod banner;
pub mod booking;
pub mod id;
pub mod offering;
pub mod promotion;
pub mod role;
pub mod user;
