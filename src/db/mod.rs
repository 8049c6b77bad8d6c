//! Storage layer (local JSON stores).

pub mod local;

pub use local::LocalDb;

/// Store namespace keys as constants.
///
/// Each namespace persists as `<key>.json` under the storage root. The
/// keys match the mobile app's AsyncStorage namespaces so a device export
/// loads directly.
pub mod namespaces {
    pub const CATCHES: &str = "fish-catches";
    pub const PROFILE: &str = "auth-storage";
}
