use std::sync::Arc;

use crate::database::activity_directory::ActivityDirectory;

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<ActivityDirectory>,
}

impl AppState {
    pub fn new(directory: ActivityDirectory) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }

    pub fn seeded() -> Self {
        Self::new(ActivityDirectory::seeded())
    }
}
