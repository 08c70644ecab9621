pub mod answer;
pub mod profile;
pub mod word;

pub use answer::{AnswerEvent, AnswerResult, StudyMode};
pub use profile::Profile;
pub use word::WordStat;
