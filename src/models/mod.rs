pub mod exam;
pub mod loaders;
pub mod question;
pub mod template;
pub mod theme;

pub use exam::ExamConfig;
pub use loaders::{load_all_exam_files, load_bulk_text, load_exam_file};
pub use question::{next_question_id, Question, QuestionKind};
pub use template::TemplateId;
pub use theme::Theme;
