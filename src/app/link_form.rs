use anyhow::Result;

use crate::submit::RequestPayload;

use super::{options::UiOptions, runtime::App};

/// Interactive terminal form collecting one to ten video/folder URLs.
///
/// ```no_run
/// use linkform::LinkForm;
///
/// let payload = LinkForm::new().with_title("Create New Request").run()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct LinkForm {
    title: Option<String>,
    description: Option<String>,
    options: UiOptions,
}

impl LinkForm {
    pub fn new() -> Self {
        Self {
            title: None,
            description: None,
            options: UiOptions::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the form until the user submits. Returns the submission payload,
    /// or an error if the form was closed without creating a request.
    pub fn run(self) -> Result<RequestPayload> {
        let LinkForm {
            title,
            description,
            options,
        } = self;
        let mut app = App::new(title, description, options);
        app.run()
    }
}

impl Default for LinkForm {
    fn default() -> Self {
        Self::new()
    }
}
