//! 题目渲染服务
//!
//! 将题目列表渲染为HTML片段，供组装器填入 {{QUESTIONS_HTML}} 占位符

use crate::models::question::Question;

/// 空题目列表的占位提示
const NO_QUESTIONS_NOTICE: &str =
    "<p>No questions added yet. Add questions using the Questions tab.</p>";

/// 渲染题目列表为HTML片段
///
/// 按插入顺序输出编号容器（编号从1开始）；列表为空时输出占位提示
pub fn render_questions_html(questions: &[Question]) -> String {
    if questions.is_empty() {
        return NO_QUESTIONS_NOTICE.to_string();
    }

    let mut html = String::new();
    for (index, question) in questions.iter().enumerate() {
        render_question(&mut html, question, index + 1);
    }
    html
}

/// 渲染单个题目
///
/// 每个选项输出一个radio输入控件，按下标标注字母（A、B、C...），
/// 正确选项附带机器可读的 data-correct 标记；解析默认隐藏
fn render_question(html: &mut String, question: &Question, number: usize) {
    html.push_str(&format!(
        "\n<div class=\"question-container\" data-question=\"{}\">\n",
        number
    ));
    html.push_str(&format!(
        "  <h3 class=\"question-title\">Question {}</h3>\n",
        number
    ));
    html.push_str(&format!(
        "  <p class=\"question-text\">{}</p>\n",
        question.text
    ));
    html.push_str("  <div class=\"options-container\">\n");

    for (opt_index, option) in question.options.iter().enumerate() {
        let correct_marker = if opt_index == question.correct_answer {
            " data-correct=\"true\""
        } else {
            ""
        };
        html.push_str("    <label class=\"option-label\">\n");
        html.push_str(&format!(
            "      <input type=\"radio\" name=\"question_{}\" value=\"{}\"{}>\n",
            number, opt_index, correct_marker
        ));
        html.push_str(&format!(
            "      <span class=\"option-text\">{}. {}</span>\n",
            option_letter(opt_index),
            option
        ));
        html.push_str("    </label>\n");
    }

    html.push_str("  </div>\n");

    if !question.explanation.is_empty() {
        html.push_str(&format!(
            "  <div class=\"explanation\" style=\"display: none;\">{}</div>\n",
            question.explanation
        ));
    }

    html.push_str("</div>\n");
}

/// 选项下标转字母标注（0→A，1→B...）
fn option_letter(index: usize) -> char {
    char::from(b'A' + (index % 26) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::QuestionKind;

    fn sample_question() -> Question {
        Question {
            id: "1".to_string(),
            text: "What is 2 + 2?".to_string(),
            options: vec![
                "3".to_string(),
                "4".to_string(),
                "5".to_string(),
                "6".to_string(),
            ],
            correct_answer: 1,
            explanation: "2 + 2 equals 4".to_string(),
            kind: QuestionKind::MultipleChoice,
        }
    }

    #[test]
    fn test_empty_list_renders_notice() {
        let html = render_questions_html(&[]);
        assert_eq!(html, NO_QUESTIONS_NOTICE);
    }

    #[test]
    fn test_numbering_is_one_based_and_ordered() {
        let mut second = sample_question();
        second.text = "Second?".to_string();
        let html = render_questions_html(&[sample_question(), second]);

        assert!(html.contains("data-question=\"1\""));
        assert!(html.contains("data-question=\"2\""));
        assert!(html.contains("Question 1"));
        assert!(html.contains("Question 2"));
        let first_pos = html.find("Question 1").unwrap();
        let second_pos = html.find("Question 2").unwrap();
        assert!(first_pos < second_pos);
    }

    #[test]
    fn test_correct_option_carries_marker() {
        let html = render_questions_html(&[sample_question()]);
        // 只有正确选项（下标1）带有标记
        assert_eq!(html.matches("data-correct=\"true\"").count(), 1);
        assert!(html.contains("value=\"1\" data-correct=\"true\""));
    }

    #[test]
    fn test_options_are_lettered_by_position() {
        let html = render_questions_html(&[sample_question()]);
        assert!(html.contains("A. 3"));
        assert!(html.contains("B. 4"));
        assert!(html.contains("C. 5"));
        assert!(html.contains("D. 6"));
    }

    #[test]
    fn test_explanation_is_hidden_by_default() {
        let html = render_questions_html(&[sample_question()]);
        assert!(html.contains("class=\"explanation\" style=\"display: none;\""));
        assert!(html.contains("2 + 2 equals 4"));
    }

    #[test]
    fn test_empty_explanation_is_omitted() {
        let mut q = sample_question();
        q.explanation = String::new();
        let html = render_questions_html(&[q]);
        assert!(!html.contains("class=\"explanation\""));
    }
}
