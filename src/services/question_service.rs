//! 题目管理服务
//!
//! 负责试卷配置中题目列表的维护：手动录入、按ID删除、批量导入

use crate::config::Config;
use crate::error::{AppError, AppResult, ParseError};
use crate::models::exam::ExamConfig;
use crate::models::question::{next_question_id, Question, QuestionKind};
use crate::services::bulk_parser::parse_bulk_questions;
use crate::utils::logging::truncate_text;
use tracing::info;

/// 手动录入的题目草稿
#[derive(Debug, Clone, Default)]
pub struct QuestionDraft {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
    pub kind: QuestionKind,
}

/// 题目管理服务
pub struct QuestionService {
    verbose_logging: bool,
}

impl QuestionService {
    /// 创建新的题目管理服务
    pub fn new(config: &Config) -> Self {
        Self {
            verbose_logging: config.verbose_logging,
        }
    }

    /// 手动添加单个题目
    ///
    /// # 参数
    /// - `config`: 试卷配置
    /// - `draft`: 题目草稿
    ///
    /// # 返回
    /// 返回新题目的ID；题干为空或选择题存在空白选项时拒绝
    pub fn add_question(&self, config: &mut ExamConfig, draft: QuestionDraft) -> AppResult<String> {
        if draft.text.trim().is_empty() {
            return Err(AppError::Parse(ParseError::InvalidQuestion {
                reason: "题干不能为空".to_string(),
            }));
        }

        if draft.kind == QuestionKind::MultipleChoice
            && (draft.options.is_empty() || draft.options.iter().any(|o| o.trim().is_empty()))
        {
            return Err(AppError::Parse(ParseError::InvalidQuestion {
                reason: "选择题的所有选项都必须填写".to_string(),
            }));
        }

        let mut question = Question {
            id: next_question_id(),
            text: draft.text,
            options: draft.options,
            correct_answer: draft.correct_answer,
            explanation: draft.explanation,
            kind: draft.kind,
        };
        question.clamp_correct_answer();

        let id = question.id.clone();
        config.questions.push(question);

        Ok(id)
    }

    /// 按ID删除题目
    ///
    /// 返回是否确实删除了题目
    pub fn remove_question(&self, config: &mut ExamConfig, id: &str) -> bool {
        let before = config.questions.len();
        config.questions.retain(|q| q.id != id);
        config.questions.len() < before
    }

    /// 批量导入题目
    ///
    /// 解析成功时将题目追加到现有列表之后（绝不覆盖）；
    /// 解析失败时现有列表原样保留
    pub fn import_bulk(&self, config: &mut ExamConfig, raw_text: &str) -> AppResult<usize> {
        let questions = parse_bulk_questions(raw_text)?;
        let imported = questions.len();

        if self.verbose_logging {
            for question in &questions {
                info!("  导入题目: {}", truncate_text(&question.text, 80));
            }
        }

        config.questions.extend(questions);
        info!("✓ 成功导入 {} 个题目", imported);

        Ok(imported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> QuestionService {
        QuestionService::new(&Config::default())
    }

    fn draft() -> QuestionDraft {
        QuestionDraft {
            text: "What is 2 + 2?".to_string(),
            options: vec!["3".to_string(), "4".to_string()],
            correct_answer: 1,
            explanation: String::new(),
            kind: QuestionKind::MultipleChoice,
        }
    }

    #[test]
    fn test_add_question_appends_with_fresh_id() {
        let mut config = ExamConfig::default();
        let id = service().add_question(&mut config, draft()).unwrap();

        assert_eq!(config.questions.len(), 1);
        assert_eq!(config.questions[0].id, id);
        assert_eq!(config.questions[0].correct_answer, 1);
    }

    #[test]
    fn test_add_question_rejects_empty_text() {
        let mut config = ExamConfig::default();
        let mut d = draft();
        d.text = "  ".to_string();
        assert!(service().add_question(&mut config, d).is_err());
        assert!(config.questions.is_empty());
    }

    #[test]
    fn test_add_question_rejects_blank_option() {
        let mut config = ExamConfig::default();
        let mut d = draft();
        d.options[1] = " ".to_string();
        assert!(service().add_question(&mut config, d).is_err());
    }

    #[test]
    fn test_short_answer_allows_empty_options() {
        let mut config = ExamConfig::default();
        let d = QuestionDraft {
            text: "Explain gravity.".to_string(),
            kind: QuestionKind::ShortAnswer,
            ..Default::default()
        };
        assert!(service().add_question(&mut config, d).is_ok());
        assert!(config.questions[0].options.is_empty());
    }

    #[test]
    fn test_add_question_clamps_out_of_range_answer() {
        let mut config = ExamConfig::default();
        let mut d = draft();
        d.correct_answer = 9;
        service().add_question(&mut config, d).unwrap();
        assert_eq!(config.questions[0].correct_answer, 0);
    }

    #[test]
    fn test_remove_question_by_id() {
        let mut config = ExamConfig::default();
        let svc = service();
        let id = svc.add_question(&mut config, draft()).unwrap();
        svc.add_question(&mut config, draft()).unwrap();

        assert!(svc.remove_question(&mut config, &id));
        assert_eq!(config.questions.len(), 1);
        assert_ne!(config.questions[0].id, id);

        // 未知ID：什么都不删
        assert!(!svc.remove_question(&mut config, "no-such-id"));
        assert_eq!(config.questions.len(), 1);
    }

    #[test]
    fn test_import_bulk_appends_to_existing() {
        let mut config = ExamConfig::default();
        let svc = service();
        svc.add_question(&mut config, draft()).unwrap();

        let imported = svc
            .import_bulk(&mut config, "Q: New one?\nA) a\nB) b\nAnswer: B\n")
            .unwrap();

        assert_eq!(imported, 1);
        assert_eq!(config.questions.len(), 2);
        assert_eq!(config.questions[1].text, "New one?");
    }

    #[test]
    fn test_failed_import_leaves_existing_untouched() {
        let mut config = ExamConfig::default();
        let svc = service();
        svc.add_question(&mut config, draft()).unwrap();

        let result = svc.import_bulk(&mut config, "nothing recognizable here\n");

        assert!(result.is_err());
        assert_eq!(config.questions.len(), 1);
    }
}
