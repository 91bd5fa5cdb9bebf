mod login;
mod password;
mod service;
mod signup;

pub use login::{LoginResult, LoginUserCommand};
pub use service::UserCommandService;
pub use signup::SignupUserCommand;
