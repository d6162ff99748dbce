//! cilane - CI environment setup for Xcode lanes.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── setup         # Unique id, keychain, build paths
//! │   ├── teardown      # Delete the temporary keychain
//! │   ├── firebase      # Firebase App Distribution variables
//! │   ├── brew          # brew bundle for the project Brewfile
//! │   ├── run           # setup, child command, teardown
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── identifier    # Unique project identifier
//!     ├── keychain      # Ephemeral keychain lifecycle
//!     ├── paths         # Build path propagation
//!     ├── firebase      # Firebase credential resolution
//!     ├── xcode, plist  # Tool output parsing
//!     ├── process       # External command runner
//!     ├── outcome       # Structured action results
//!     ├── publish       # Shell/dotenv/JSON rendering
//!     └── config        # .cilane.toml
//! ```
//!
//! Every action returns the variables it wants published instead of
//! touching the environment, so the same code serves `eval "$(cilane
//! setup)"`, CI env files and the `run` wrapper.

pub mod cli;
pub mod core;
pub mod error;
