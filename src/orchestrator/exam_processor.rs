//! 单个试卷生成器 - 编排层
//!
//! 负责一份试卷的完整生成：导入批量题目文件（如有）、
//! 运行生成流程、把文档写入输出目录

use crate::config::Config;
use crate::models::exam::ExamConfig;
use crate::models::loaders::load_bulk_text;
use crate::services::QuestionService;
use crate::workflow::{ExamCtx, ExamFlow};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 生成单份试卷
///
/// # 参数
/// - `exam`: 试卷配置
/// - `exam_index`: 试卷索引（用于日志）
/// - `config`: 配置
///
/// # 返回
/// 返回是否成功生成
pub async fn process_exam(
    mut exam: ExamConfig,
    exam_index: usize,
    config: &Config,
) -> Result<bool> {
    let ctx = ExamCtx::new(exam_index, exam.title.clone());

    log_exam_start(&ctx, &exam);

    // 批量题目文件（如有）：读取后显式导入；失败只告警，保留现有题目
    import_bulk_file(&mut exam, &ctx, config).await;

    // 运行生成流程
    let flow = ExamFlow::new(config);
    let html = flow.run(&exam, &ctx).await?;

    // 写出生成的文档
    let output_path = Path::new(&config.output_folder).join(ctx.output_file_name());
    tokio::fs::write(&output_path, &html)
        .await
        .with_context(|| format!("无法写入输出文件: {}", output_path.display()))?;

    log_exam_complete(&ctx, &exam, &output_path);

    Ok(true)
}

/// 导入试卷引用的批量题目文件
async fn import_bulk_file(exam: &mut ExamConfig, ctx: &ExamCtx, config: &Config) {
    let Some(bulk_file) = exam.bulk_file.clone() else {
        return;
    };

    let bulk_path = resolve_bulk_path(exam.file_path.as_deref(), &bulk_file);
    info!(
        "[试卷 {}] 📎 正在读取批量题目文件: {}",
        ctx.exam_index,
        bulk_path.display()
    );

    let raw_text = match load_bulk_text(&bulk_path).await {
        Ok(raw_text) => raw_text,
        Err(e) => {
            warn!("[试卷 {}] ⚠️ 批量题目文件读取失败: {}", ctx.exam_index, e);
            return;
        }
    };

    let question_service = QuestionService::new(config);
    match question_service.import_bulk(exam, &raw_text) {
        Ok(count) => {
            info!("[试卷 {}] ✓ 批量导入 {} 个题目", ctx.exam_index, count);
        }
        Err(e) => {
            warn!(
                "[试卷 {}] ⚠️ 批量导入失败，保留现有题目: {}",
                ctx.exam_index, e
            );
        }
    }
}

/// 解析批量题目文件路径
///
/// 相对路径相对试卷定义文件所在目录解析
fn resolve_bulk_path(exam_file: Option<&str>, bulk_file: &str) -> PathBuf {
    let bulk = Path::new(bulk_file);
    if bulk.is_absolute() {
        return bulk.to_path_buf();
    }

    match exam_file.map(Path::new).and_then(|p| p.parent()) {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(bulk),
        _ => bulk.to_path_buf(),
    }
}

// ========== 日志辅助函数 ==========

fn log_exam_start(ctx: &ExamCtx, exam: &ExamConfig) {
    info!("[试卷 {}] 开始生成", ctx.exam_index);
    info!("[试卷 {}] 标题: {}", ctx.exam_index, exam.title);
    info!("[试卷 {}] 科目: {}", ctx.exam_index, exam.subject);
    info!(
        "[试卷 {}] 内置题目数: {}",
        ctx.exam_index,
        exam.questions.len()
    );
}

fn log_exam_complete(ctx: &ExamCtx, exam: &ExamConfig, output_path: &Path) {
    let counts = exam
        .kind_counts()
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(kind, count)| format!("{} x{}", kind, count))
        .collect::<Vec<_>>()
        .join(", ");

    info!(
        "[试卷 {}] 题目统计: 共 {} 个 ({})",
        ctx.exam_index,
        exam.questions.len(),
        if counts.is_empty() { "无" } else { counts.as_str() }
    );
    info!(
        "\n[试卷 {}] ✅ 试卷生成完成: {}\n",
        ctx.exam_index,
        output_path.display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_bulk_path_relative_to_exam_file() {
        let path = resolve_bulk_path(Some("exams/math.toml"), "math_questions.txt");
        assert_eq!(path, PathBuf::from("exams/math_questions.txt"));
    }

    #[test]
    fn test_resolve_bulk_path_absolute_stays() {
        let path = resolve_bulk_path(Some("exams/math.toml"), "/data/bulk.txt");
        assert_eq!(path, PathBuf::from("/data/bulk.txt"));
    }

    #[test]
    fn test_resolve_bulk_path_without_exam_file() {
        let path = resolve_bulk_path(None, "bulk.txt");
        assert_eq!(path, PathBuf::from("bulk.txt"));
    }
}
