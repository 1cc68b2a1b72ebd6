pub mod detect;
pub mod install;
