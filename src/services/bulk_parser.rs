//! 批量题目解析服务
//!
//! 将松散的行式文本转换为结构化题目列表
//!
//! 支持的行前缀：
//! - `Q:` / `Question:` 题干行（开启新题目）
//! - `A)`..`D)` 选项行
//! - `Answer:` / `Correct:` 答案行（字母映射到下标）
//! - `Explanation:` 解析行
//!
//! 其他非空行一律静默跳过（宽容解析策略）

use crate::error::{AppError, AppResult, ParseError};
use crate::models::question::{next_question_id, Question, QuestionKind};
use phf::phf_map;
use regex::Regex;

/// 答案字母到选项下标的映射（封闭表，未命中回退 0）
static ANSWER_LETTER_INDEX: phf::Map<&'static str, usize> = phf_map! {
    "A" => 0,
    "B" => 1,
    "C" => 2,
    "D" => 3,
};

/// 解析批量题目文本
///
/// # 参数
/// - `raw_text`: 用户粘贴或文件载入的原始文本
///
/// # 返回
/// 按出现顺序返回解析出的题目列表；
/// 输入为空返回 `ParseError::EmptyInput`，
/// 一个题目都没解析出来返回 `ParseError::NoQuestionsFound`
pub fn parse_bulk_questions(raw_text: &str) -> AppResult<Vec<Question>> {
    if raw_text.trim().is_empty() {
        return Err(AppError::Parse(ParseError::EmptyInput));
    }

    let option_line = Regex::new(r"^[A-D]\)").map_err(|e| AppError::Other(e.to_string()))?;

    let mut questions = Vec::new();
    let mut current: Option<Question> = None;

    // 单趟扫描，行分类按优先级：题干 > 选项 > 答案 > 解析 > 跳过
    for line in raw_text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(rest) = strip_question_prefix(line) {
            // 先收尾上一道题，再开启新题
            if let Some(pending) = current.take() {
                if !pending.text.is_empty() {
                    questions.push(finalize(pending));
                }
            }
            current = Some(Question {
                text: rest.to_string(),
                ..Default::default()
            });
        } else if option_line.is_match(line) {
            if let Some(pending) = current.as_mut() {
                // 字母只用于识别选项行，不定位槽位：存入游标位置后游标前移，
                // 超过四个选项的行同样按序追加
                pending.options.push(line[2..].trim_start().to_string());
            }
        } else if let Some(rest) = strip_answer_prefix(line) {
            if let Some(pending) = current.as_mut() {
                let letter = rest.trim().to_uppercase();
                pending.correct_answer = ANSWER_LETTER_INDEX
                    .get(letter.as_str())
                    .copied()
                    .unwrap_or(0);
            }
        } else if let Some(rest) = line.strip_prefix("Explanation:") {
            if let Some(pending) = current.as_mut() {
                // 后出现的解析行覆盖先前的
                pending.explanation = rest.trim_start().to_string();
            }
        }
        // 其余行：宽容策略，静默跳过
    }

    // 收尾最后一道题
    if let Some(pending) = current.take() {
        if !pending.text.is_empty() {
            questions.push(finalize(pending));
        }
    }

    if questions.is_empty() {
        return Err(AppError::Parse(ParseError::NoQuestionsFound));
    }

    Ok(questions)
}

/// 识别题干行前缀
fn strip_question_prefix(line: &str) -> Option<&str> {
    line.strip_prefix("Q:")
        .or_else(|| line.strip_prefix("Question:"))
        .map(str::trim_start)
}

/// 识别答案行前缀
fn strip_answer_prefix(line: &str) -> Option<&str> {
    line.strip_prefix("Answer:")
        .or_else(|| line.strip_prefix("Correct:"))
        .map(str::trim_start)
}

/// 收尾当前题目：分配ID、设定类型、校正答案下标
fn finalize(mut question: Question) -> Question {
    question.id = next_question_id();
    question.kind = QuestionKind::MultipleChoice;
    question.clamp_correct_answer();
    question
}
