use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FactoryError;

/// Which kind of document a record is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// A batch of generated concepts
    Batch,
    /// A story-development document
    Story,
}

impl RecordKind {
    /// Header key holding the identifier
    pub fn id_key(self) -> &'static str {
        match self {
            RecordKind::Batch => "batch_id",
            RecordKind::Story => "story_id",
        }
    }

    /// Header key holding the creation date
    pub fn date_key(self) -> &'static str {
        match self {
            RecordKind::Batch => "date_generated",
            RecordKind::Story => "date_created",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Batch => write!(f, "batch"),
            RecordKind::Story => write!(f, "story"),
        }
    }
}

/// Lifecycle status of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Generated,
    Developing,
    Favorite,
    InDevelopment,
    Archived,
}

impl Status {
    /// All statuses, in lifecycle order
    pub const ALL: [Status; 5] = [
        Status::Generated,
        Status::Developing,
        Status::Favorite,
        Status::InDevelopment,
        Status::Archived,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Generated => "generated",
            Status::Developing => "developing",
            Status::Favorite => "favorite",
            Status::InDevelopment => "in-development",
            Status::Archived => "archived",
        }
    }
}

impl FromStr for Status {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "generated" => Ok(Status::Generated),
            "developing" => Ok(Status::Developing),
            "favorite" | "favorites" => Ok(Status::Favorite),
            "in-development" | "in_development" => Ok(Status::InDevelopment),
            "archived" => Ok(Status::Archived),
            other => Err(FactoryError::invalid_value(
                "status (expected generated, developing, favorite, in-development or archived)",
                other,
            )),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
