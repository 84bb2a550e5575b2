mod landing;
pub use landing::Landing;

mod onboarding;
pub use onboarding::Onboarding;

mod auth_popup;
pub use auth_popup::AuthPopup;
