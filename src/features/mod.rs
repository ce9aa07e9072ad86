pub mod activity;
pub mod admin;
pub mod auth;
pub mod contact;
pub mod notifications;
pub mod pets;
pub mod requests;
pub mod users;
