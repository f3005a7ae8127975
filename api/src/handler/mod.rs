pub mod auth;
pub mod banner;
pub mod booking;
pub mod health;
pub mod offering;
pub mod payment;
pub mod promotion;
pub mod user;
