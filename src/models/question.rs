use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static QUESTION_SEQ: AtomicU64 = AtomicU64::new(0);

/// 生成新的题目唯一标识
///
/// 毫秒时间戳 + 进程内自增序号，保证同一会话内不重复
pub fn next_question_id() -> String {
    let seq = QUESTION_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", chrono::Utc::now().timestamp_millis(), seq)
}

/// 题目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    /// 选择题
    #[default]
    MultipleChoice,
    /// 判断题
    TrueFalse,
    /// 简答题
    ShortAnswer,
}

impl QuestionKind {
    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "multiple-choice",
            QuestionKind::TrueFalse => "true-false",
            QuestionKind::ShortAnswer => "short-answer",
        }
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 单个题目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// 唯一标识（加载/解析时自动分配）
    #[serde(default)]
    pub id: String,
    /// 题干
    pub text: String,
    /// 选项列表（按录入顺序，A/B/C/D... 按下标排列）
    #[serde(default)]
    pub options: Vec<String>,
    /// 正确答案下标（从0开始）
    #[serde(default)]
    pub correct_answer: usize,
    /// 答案解析（可选，缺省为空字符串）
    #[serde(default)]
    pub explanation: String,
    /// 题目类型
    #[serde(default)]
    pub kind: QuestionKind,
}

impl Default for Question {
    fn default() -> Self {
        Self {
            id: String::new(),
            text: String::new(),
            options: Vec::new(),
            correct_answer: 0,
            explanation: String::new(),
            kind: QuestionKind::MultipleChoice,
        }
    }
}

impl Question {
    /// 确保答案下标不越界
    ///
    /// 选项非空时，越界的答案下标回退到 0
    pub fn clamp_correct_answer(&mut self) {
        if !self.options.is_empty() && self.correct_answer >= self.options.len() {
            self.correct_answer = 0;
        }
    }
}
