pub mod assemble_service;
pub mod bulk_parser;
pub mod question_service;
pub mod render_service;

pub use assemble_service::assemble;
pub use bulk_parser::parse_bulk_questions;
pub use question_service::{QuestionDraft, QuestionService};
pub use render_service::render_questions_html;
