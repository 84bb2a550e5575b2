mod splash;
pub use splash::SplashScreen;

mod login;
pub use login::LoginScreen;
