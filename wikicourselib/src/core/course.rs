use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::core::meetings::MeetingSchedule;
use crate::error::RenderError;

/// A fully loaded course record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    #[serde(default)]
    pub subject: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub expected_students: u32,
    pub slug: String,
    pub language: String,
    pub platform: String,

    /// Free text in markdown.
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub weeks: Vec<Week>,
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub instructors: Vec<Instructor>,
    #[serde(default)]
    pub nonstudents: Vec<SupportStaff>,

    #[serde(default)]
    pub meetings: Option<MeetingSchedule>,
}

impl Course {
    /// The instructor shown on the page: the first one in storage order.
    ///
    /// Only a single instructor fits the course template. Supporting more
    /// means changing the template along with this selection.
    pub fn first_instructor(&self) -> Option<&Instructor> {
        self.instructors.first()
    }

    /// The first support staff member flagged as a greeter.
    pub fn first_support_staff(&self) -> Option<&SupportStaff> {
        self.nonstudents.iter().find(|staff| staff.greeter)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Week {
    /// Identifier from storage. Never used for display numbering.
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Week {
    /// Blocks sorted by `order`. Blocks sharing an `order` keep storage order.
    pub fn ordered_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().sorted_by_key(|block| block.order)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Block {
    /// Kind as stored. Resolved with [`Block::kind`].
    pub kind: i64,
    #[serde(default)]
    pub title: String,
    /// HTML.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub order: i64,
}

impl Block {
    pub fn kind(&self) -> Result<BlockKind, RenderError> {
        BlockKind::try_from(self.kind).map_err(|_| RenderError::UnknownBlockKind {
            kind: self.kind,
            title: self.title.clone(),
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum BlockKind {
    InClass,
    Assignment,
    Milestone,
    /// Custom blocks. They share the generic assignment template and have no
    /// label of their own.
    GenericAssignment,
}

impl BlockKind {
    /// Wiki template used to mark up a block of this kind.
    pub fn template(self) -> &'static str {
        use BlockKind::*;
        match self {
            InClass => "in class",
            Assignment => "assignment",
            Milestone => "assignment milestones",
            GenericAssignment => "assignment",
        }
    }

    /// Text placed in front of the block title.
    pub fn label(self) -> &'static str {
        use BlockKind::*;
        match self {
            InClass => "In class - ",
            Assignment => "Assignment - ",
            Milestone => "",
            GenericAssignment => "",
        }
    }
}

impl TryFrom<i64> for BlockKind {
    type Error = i64;

    fn try_from(kind: i64) -> Result<Self, Self::Error> {
        use BlockKind::*;
        match kind {
            0 => Ok(InClass),
            1 => Ok(Assignment),
            2 => Ok(Milestone),
            3 => Ok(GenericAssignment),
            other => Err(other),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Student {
    pub username: String,
    /// Assignments belonging to this course only.
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

impl Student {
    pub fn titles(&self, role: AssignmentRole) -> Vec<&str> {
        self.assignments
            .iter()
            .filter(|assignment| assignment.role == role)
            .map(|assignment| assignment.article_title.as_str())
            .collect()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentRole {
    Assigned,
    Reviewing,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Assignment {
    pub article_title: String,
    pub role: AssignmentRole,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Instructor {
    pub username: String,
    #[serde(default)]
    pub real_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SupportStaff {
    pub username: String,
    #[serde(default)]
    pub real_name: String,
    #[serde(default)]
    pub greeter: bool,
}
