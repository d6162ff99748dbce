//! Core library components.
//!
//! Actions take typed options and an explicit [`host::HostEnv`], shell out
//! through [`process::CommandRunner`], and return an [`outcome::Outcome`]
//! that [`publish`] renders for the calling lane.

pub mod brew;
pub mod config;
pub mod constants;
pub mod firebase;
pub mod host;
pub mod identifier;
pub mod keychain;
pub mod outcome;
pub mod paths;
pub mod plist;
pub mod process;
pub mod publish;
pub mod setup;
pub mod xcode;
