pub mod forgot_password;
pub mod my_bookings;
pub mod not_found;
pub mod register;
pub mod reset_password;
pub mod sign_in;
pub mod workouts;

pub use forgot_password::ForgotPasswordPage;
pub use my_bookings::MyBookingsPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use reset_password::ResetPasswordPage;
pub use sign_in::SignInPage;
pub use workouts::WorkoutsPage;
