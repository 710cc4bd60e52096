//! 文档组装服务
//!
//! 将试卷配置与模板文本组装为完整的独立HTML文档：
//! 1. 校验必填字段（标题、科目）
//! 2. 渲染题目HTML片段
//! 3. 全局替换模板中的占位符
//! 4. 在 </head> 之前注入主题样式块

use crate::error::{AppError, AppResult, TemplateError};
use crate::models::exam::ExamConfig;
use crate::models::theme::Theme;
use crate::services::render_service::render_questions_html;

/// 主题样式注入标记
const HEAD_CLOSE_MARKER: &str = "</head>";

/// 组装试卷HTML文档
///
/// # 参数
/// - `config`: 试卷配置（只读）
/// - `template_html`: 模板原始文本
///
/// # 返回
/// 返回占位符全部替换、主题样式注入完成的HTML文本；
/// 标题或科目为空返回 `MissingRequiredField`，
/// 模板缺少 </head> 标记返回 `MissingHeadMarker`
///
/// 纯函数：同一配置与模板重复调用，输出逐字节一致
pub fn assemble(config: &ExamConfig, template_html: &str) -> AppResult<String> {
    if config.title.trim().is_empty() {
        return Err(AppError::missing_required_field("title"));
    }
    if config.subject.trim().is_empty() {
        return Err(AppError::missing_required_field("subject"));
    }

    let questions_html = render_questions_html(&config.questions);

    // 逐个占位符做字面量全局替换；模板中未识别的记号原样保留
    let html = template_html
        .replace("{{EXAM_TITLE}}", &config.title)
        .replace("{{SUBJECT}}", &config.subject)
        .replace("{{DURATION}}", &config.duration)
        .replace("{{INSTRUCTIONS}}", &config.instructions)
        .replace("{{QUESTIONS_URL}}", &config.questions_url)
        .replace("{{ANSWERS_URL}}", &config.answers_url)
        .replace("{{QUESTIONS_HTML}}", &questions_html)
        .replace("{{QUESTIONS_COUNT}}", &config.questions.len().to_string())
        .replace("{{SHOW_TIMER}}", &config.show_timer.to_string())
        .replace("{{ALLOW_NAVIGATION}}", &config.allow_navigation.to_string())
        .replace(
            "{{RANDOMIZE_QUESTIONS}}",
            &config.randomize_questions.to_string(),
        )
        .replace("{{THEME}}", &config.theme);

    inject_theme_styles(html, config)
}

/// 在模板第一个 </head> 之前注入主题样式块
///
/// 模板没有该标记时必须显式报错，绝不能悄悄输出未注入样式的文档
fn inject_theme_styles(html: String, config: &ExamConfig) -> AppResult<String> {
    if !html.contains(HEAD_CLOSE_MARKER) {
        return Err(AppError::Template(TemplateError::MissingHeadMarker {
            template: config.template.clone(),
        }));
    }

    let theme = Theme::resolve(&config.theme);
    let style_block = format!("<style>{}</style>{}", theme.css(), HEAD_CLOSE_MARKER);

    Ok(html.replacen(HEAD_CLOSE_MARKER, &style_block, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::Question;

    const TEMPLATE: &str = "<html><head><title>{{EXAM_TITLE}}</title></head>\
                            <body><h1>{{EXAM_TITLE}}</h1><p>{{SUBJECT}}</p>\
                            <p>{{SUBJECT}}</p><span>{{QUESTIONS_COUNT}}</span>\
                            <div>{{QUESTIONS_HTML}}</div>\
                            <script>var t={{SHOW_TIMER}};var n={{ALLOW_NAVIGATION}};\
                            var r={{RANDOMIZE_QUESTIONS}};var theme='{{THEME}}';</script>\
                            </body></html>";

    fn sample_config() -> ExamConfig {
        ExamConfig {
            title: "Final Mathematics Exam".to_string(),
            subject: "Physics".to_string(),
            duration: "2 hours".to_string(),
            instructions: "Answer all questions.".to_string(),
            questions: vec![Question {
                id: "1".to_string(),
                text: "What is 2 + 2?".to_string(),
                options: vec!["3".to_string(), "4".to_string()],
                correct_answer: 1,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let mut config = sample_config();
        config.title = String::new();
        let result = assemble(&config, TEMPLATE);
        assert!(matches!(
            result,
            Err(AppError::Assemble(
                crate::error::AssembleError::MissingRequiredField { field: "title" }
            ))
        ));
    }

    #[test]
    fn test_missing_subject_is_rejected() {
        let mut config = sample_config();
        config.subject = "   ".to_string();
        assert!(assemble(&config, TEMPLATE).is_err());
    }

    #[test]
    fn test_all_occurrences_are_replaced() {
        let html = assemble(&sample_config(), TEMPLATE).unwrap();

        // 同一占位符的多处出现全部替换
        assert_eq!(html.matches("Physics").count(), 2);
        // 已识别的占位符不得存活
        for token in [
            "{{EXAM_TITLE}}",
            "{{SUBJECT}}",
            "{{QUESTIONS_COUNT}}",
            "{{QUESTIONS_HTML}}",
            "{{SHOW_TIMER}}",
            "{{ALLOW_NAVIGATION}}",
            "{{RANDOMIZE_QUESTIONS}}",
            "{{THEME}}",
        ] {
            assert!(!html.contains(token), "{} 不应存活", token);
        }
    }

    #[test]
    fn test_flags_and_count_are_stringified() {
        let html = assemble(&sample_config(), TEMPLATE).unwrap();
        assert!(html.contains("var t=true"));
        assert!(html.contains("var n=true"));
        assert!(html.contains("var r=false"));
        assert!(html.contains("<span>1</span>"));
    }

    #[test]
    fn test_unrecognized_token_is_left_untouched() {
        let template = "<html><head></head><body>{{MYSTERY}}</body></html>";
        let html = assemble(&sample_config(), template).unwrap();
        assert!(html.contains("{{MYSTERY}}"));
    }

    #[test]
    fn test_missing_optional_values_substitute_empty() {
        let template = "<html><head></head><body>[{{QUESTIONS_URL}}][{{ANSWERS_URL}}]</body></html>";
        let html = assemble(&sample_config(), template).unwrap();
        assert!(html.contains("[][]"));
    }

    #[test]
    fn test_theme_styles_are_injected_before_head_close() {
        let html = assemble(&sample_config(), TEMPLATE).unwrap();
        let style_pos = html.find("<style>").unwrap();
        let head_pos = html.find("</head>").unwrap();
        assert!(style_pos < head_pos);
        assert!(html.contains("--primary-color: #3b82f6"));
    }

    #[test]
    fn test_unknown_theme_falls_back_to_light_styles() {
        let mut config = sample_config();
        config.theme = "neon".to_string();
        let html = assemble(&config, TEMPLATE).unwrap();
        // 样式回退到浅色，但 {{THEME}} 仍按原值透传
        assert!(html.contains("--primary-color: #3b82f6"));
        assert!(html.contains("var theme='neon'"));
    }

    #[test]
    fn test_template_without_head_marker_is_rejected() {
        let template = "<html><body>{{EXAM_TITLE}}</body></html>";
        let result = assemble(&sample_config(), template);
        assert!(matches!(
            result,
            Err(AppError::Template(TemplateError::MissingHeadMarker { .. }))
        ));
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let config = sample_config();
        let first = assemble(&config, TEMPLATE).unwrap();
        let second = assemble(&config, TEMPLATE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_question_list_renders_notice() {
        let mut config = sample_config();
        config.questions.clear();
        let html = assemble(&config, TEMPLATE).unwrap();
        assert!(html.contains("No questions added yet"));
        assert!(html.contains("<span>0</span>"));
    }
}
