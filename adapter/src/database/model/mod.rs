pub mod banner;
pub mod booking;
pub mod offering;
pub mod promotion;
pub mod user;
