/// Login of the bot account that posts the PR linter status comments.
pub const DEFAULT_AUTOMATION_USER: &str = "aws-cdk-automation";

/// Runtime configuration of the label manager.
#[derive(Clone, Debug)]
pub struct ManagerConfig {
    /// Comments authored by this user are treated as automation comments.
    pub automation_user: String,
}

impl ManagerConfig {
    pub fn is_automation(&self, login: &str) -> bool {
        login == self.automation_user
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            automation_user: DEFAULT_AUTOMATION_USER.to_string(),
        }
    }
}
