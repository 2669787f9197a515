pub mod entities;
pub mod rating;
pub mod requests;
pub mod responses;
