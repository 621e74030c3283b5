use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

use crate::config::ManagerConfig;
use crate::github::UpdateDirection;

/// Action performed on the PR comment that triggered the run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommentAction {
    Created,
    Edited,
    Deleted,
}

impl CommentAction {
    /// Direction of the label update requested by the comment body after the action.
    ///
    /// The surviving text of an edited comment is treated as if it was freshly created.
    pub fn update_direction(&self) -> UpdateDirection {
        match self {
            CommentAction::Created | CommentAction::Edited => UpdateDirection::Add,
            CommentAction::Deleted => UpdateDirection::Remove,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommentAction::Created => "created",
            CommentAction::Edited => "edited",
            CommentAction::Deleted => "deleted",
        }
    }
}

impl Display for CommentAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum EventParseError {
    #[error("Unknown comment action `{0}`")]
    UnknownAction(String),
}

impl FromStr for CommentAction {
    type Err = EventParseError;

    fn from_str(action: &str) -> Result<Self, Self::Err> {
        match action {
            "created" => Ok(CommentAction::Created),
            "edited" => Ok(CommentAction::Edited),
            "deleted" => Ok(CommentAction::Deleted),
            _ => Err(EventParseError::UnknownAction(action.to_string())),
        }
    }
}

/// Author of a PR comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentAuthor {
    login: String,
    automation: bool,
}

impl CommentAuthor {
    pub fn new(login: &str, config: &ManagerConfig) -> Self {
        Self {
            login: login.to_string(),
            automation: config.is_automation(login),
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    /// Was the comment posted by the PR linter bot?
    pub fn is_automation(&self) -> bool {
        self.automation
    }
}

/// A created, edited or deleted comment on a pull request.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentEvent {
    pub action: CommentAction,
    pub author: CommentAuthor,
    /// Body of the comment before it was edited. Only present for [`CommentAction::Edited`].
    pub before: Option<String>,
    /// Body of the comment that was created or deleted, or the new body of an edited comment.
    pub after: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_is_treated_as_creation() {
        assert_eq!(
            CommentAction::Edited.update_direction(),
            UpdateDirection::Add
        );
        assert_eq!(
            CommentAction::Created.update_direction(),
            UpdateDirection::Add
        );
        assert_eq!(
            CommentAction::Deleted.update_direction(),
            UpdateDirection::Remove
        );
    }

    #[test]
    fn parse_action() {
        assert_eq!("edited".parse::<CommentAction>(), Ok(CommentAction::Edited));
        assert_eq!(
            "pinned".parse::<CommentAction>(),
            Err(EventParseError::UnknownAction("pinned".to_string()))
        );
    }

    #[test]
    fn automation_author() {
        let config = ManagerConfig::default();
        assert!(CommentAuthor::new("aws-cdk-automation", &config).is_automation());
        assert!(!CommentAuthor::new("me", &config).is_automation());
    }

    #[test]
    fn custom_automation_author() {
        let config = ManagerConfig {
            automation_user: "linter-bot".to_string(),
        };
        assert!(CommentAuthor::new("linter-bot", &config).is_automation());
        assert!(!CommentAuthor::new("aws-cdk-automation", &config).is_automation());
    }
}
