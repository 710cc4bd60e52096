pub mod exam_loader;

pub use exam_loader::{load_all_exam_files, load_bulk_text, load_exam_file};
