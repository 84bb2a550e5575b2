//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::{FaFacebookF, FaGoogle};
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const QUANTUMYOU_CSS: Asset = asset!("/assets/quantumyou.css");

mod auth;
pub use auth::{use_identity, AuthProvider};

mod connectivity;
pub use connectivity::{use_connectivity, OfflineBanner, OFFLINE_MESSAGE};

pub mod scene;
pub use scene::QuantumScene;
