pub mod assertions;
pub mod fail_message;
pub mod placeholder;
pub mod validator;
pub mod verify;
