//! Custom widget components

mod assessment;
mod confirm_dialog;
mod footer;
mod intro;
mod progress_bar;
mod results;

pub use assessment::{AssessmentView, Document};
pub use confirm_dialog::ConfirmDialog;
pub use footer::Footer;
pub use intro::IntroView;
pub use progress_bar::ProgressBar;
pub use results::results_lines;
