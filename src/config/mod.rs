//! Configuration and path management for MoneyTrack

pub mod paths;

pub use paths::MoneyTrackPaths;
