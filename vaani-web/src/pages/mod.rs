mod error;
mod login;
mod profile;
mod user_details;

#[cfg(test)]
mod profile_test;

pub use error::ErrorPage;
pub use login::LoginPage;
pub use profile::ProfilePage;
pub use user_details::UserDetailsPage;
