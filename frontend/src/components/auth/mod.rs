//! Login and registration pages. Both drive a `CredentialsForm` and share
//! their markup through `view::credentials_form`.

mod login;
mod register;
mod view;

pub use login::LoginPage;
pub use register::RegisterPage;
