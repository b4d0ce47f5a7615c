//! Routable pages: the four auth forms and the protected home view.

pub mod home;
pub mod login;
pub mod register;
pub mod vendor_login;
pub mod vendor_register;
