pub mod error_alert;
pub mod layout;
pub mod modal;
pub mod text_field;
pub mod toast;
pub mod workout_details_modal;
pub mod workout_row;

pub use error_alert::ErrorAlert;
pub use modal::Modal;
pub use text_field::TextField;
pub use toast::ToastContainer;
pub use workout_details_modal::WorkoutDetailsModal;
pub use workout_row::{WorkoutRow, WorkoutTable};
