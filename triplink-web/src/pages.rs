pub mod invoice;
pub mod login;
pub mod not_found;
pub mod search;
