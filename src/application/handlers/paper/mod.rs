//! Paper command handlers.

mod change_status;
mod review_paper;
mod submit_paper;

pub use change_status::{ChangePaperStatusCommand, ChangePaperStatusHandler};
pub use review_paper::{ReviewPaperCommand, ReviewPaperError, ReviewPaperHandler};
pub use submit_paper::{SubmitPaperCommand, SubmitPaperHandler, ANONYMOUS_AUTHOR};
