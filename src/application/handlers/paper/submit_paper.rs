//! SubmitPaperHandler - Command handler for new paper submissions.

use std::sync::Arc;

use crate::application::stores::PaperStore;
use crate::domain::paper::Paper;
use crate::domain::user::User;

/// Author recorded when nobody is signed in.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Command to submit a paper.
#[derive(Debug, Clone)]
pub struct SubmitPaperCommand {
    pub title: String,
    pub abstract_text: String,
    /// The signed-in user, if any. Their name becomes the author.
    pub submitter: Option<User>,
}

impl SubmitPaperCommand {
    fn author(&self) -> &str {
        self.submitter
            .as_ref()
            .map(User::name)
            .unwrap_or(ANONYMOUS_AUTHOR)
    }
}

/// Handler for submitting papers.
pub struct SubmitPaperHandler {
    papers: Arc<PaperStore>,
}

impl SubmitPaperHandler {
    pub fn new(papers: Arc<PaperStore>) -> Self {
        Self { papers }
    }

    pub fn handle(&self, cmd: SubmitPaperCommand) -> Paper {
        let author = cmd.author().to_string();
        self.papers.submit(cmd.title, cmd.abstract_text, author)
    }
}
