pub mod user;

pub use user::{EmergencyContact, Gender, User};
