//! 试卷生成上下文
//!
//! 封装"我正在生成第几份试卷"这一信息

use std::fmt::Display;

/// 试卷生成上下文
#[derive(Debug, Clone)]
pub struct ExamCtx {
    /// 试卷索引（仅用于日志显示，从1开始）
    pub exam_index: usize,

    /// 试卷标题
    pub title: String,
}

impl ExamCtx {
    /// 创建新的试卷上下文
    pub fn new(exam_index: usize, title: String) -> Self {
        Self { exam_index, title }
    }

    /// 计算输出文件名
    ///
    /// 标题中的空白序列替换为下划线，后缀固定为 `_exam.html`
    pub fn output_file_name(&self) -> String {
        let underscored = self
            .title
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        format!("{}_exam.html", underscored)
    }
}

impl Display for ExamCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[试卷 #{} 《{}》]", self.exam_index, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_name_replaces_whitespace() {
        let ctx = ExamCtx::new(1, "Final Mathematics  Exam".to_string());
        assert_eq!(ctx.output_file_name(), "Final_Mathematics_Exam_exam.html");
    }

    #[test]
    fn test_output_file_name_single_word() {
        let ctx = ExamCtx::new(2, "Physics".to_string());
        assert_eq!(ctx.output_file_name(), "Physics_exam.html");
    }
}
