pub mod collab;
pub mod config;
pub mod course;
pub mod engine;
pub mod meetings;

pub use collab::{MarkupConverter, MeetingScheduler, Wikitext};
pub use config::{GlobalRenderConfig, LineEnding, RenderConfig};
pub use course::{
    Assignment, AssignmentRole, Block, BlockKind, Course, Instructor, Student, SupportStaff, Week,
};
pub use meetings::{CourseMeetings, MeetingSchedule, Weekdays};
