use crate::models::question::{Question, QuestionKind};
use serde::{Deserialize, Serialize};

/// 试卷配置
///
/// 单次编辑会话的聚合根：表单/加载器写入，组装器只读
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamConfig {
    /// 试卷标题（生成前必填）
    pub title: String,
    /// 科目（生成前必填）
    pub subject: String,
    /// 考试时长（自由文本，如 "2 hours"）
    #[serde(default)]
    pub duration: String,
    /// 考试说明
    #[serde(default)]
    pub instructions: String,
    /// 题目资源URL（可选）
    #[serde(default)]
    pub questions_url: String,
    /// 答案资源URL（可选）
    #[serde(default)]
    pub answers_url: String,
    /// 是否启用自定义URL
    #[serde(default)]
    pub use_custom_urls: bool,
    /// 模板标识（demo / minor-test / english-test）
    #[serde(default = "default_template")]
    pub template: String,
    /// 是否显示计时器
    #[serde(default = "default_true")]
    pub show_timer: bool,
    /// 是否允许题目间跳转
    #[serde(default = "default_true")]
    pub allow_navigation: bool,
    /// 是否随机排列题目
    #[serde(default)]
    pub randomize_questions: bool,
    /// 主题标识（light / dark / blue / green）
    #[serde(default = "default_theme")]
    pub theme: String,
    /// 题目列表（插入顺序即渲染顺序）
    #[serde(default)]
    pub questions: Vec<Question>,
    /// 批量题目文本文件路径（可选，加载后由导入步骤显式解析）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bulk_file: Option<String>,
    /// 来源文件路径
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}

fn default_template() -> String {
    "demo".to_string()
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ExamConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            subject: String::new(),
            duration: String::new(),
            instructions: String::new(),
            questions_url: String::new(),
            answers_url: String::new(),
            use_custom_urls: false,
            template: default_template(),
            show_timer: true,
            allow_navigation: true,
            randomize_questions: false,
            theme: default_theme(),
            questions: Vec::new(),
            bulk_file: None,
            file_path: None,
        }
    }
}

impl ExamConfig {
    /// 按题目类型统计数量（用于汇总日志）
    pub fn kind_counts(&self) -> Vec<(QuestionKind, usize)> {
        let kinds = [
            QuestionKind::MultipleChoice,
            QuestionKind::TrueFalse,
            QuestionKind::ShortAnswer,
        ];
        kinds
            .iter()
            .map(|&kind| {
                let count = self.questions.iter().filter(|q| q.kind == kind).count();
                (kind, count)
            })
            .collect()
    }

    /// 扩展ExamConfig以支持文件路径
    pub fn with_file_path(mut self, file_path: String) -> Self {
        self.file_path = Some(file_path);
        self
    }
}
