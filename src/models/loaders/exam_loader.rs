use crate::models::exam::ExamConfig;
use crate::models::question::next_question_id;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 从试卷定义文件加载 ExamConfig 对象
///
/// 按扩展名选择解析器：.toml 使用 TOML，.json 使用 JSON
pub async fn load_exam_file(exam_file_path: &Path) -> Result<ExamConfig> {
    let content = fs::read_to_string(exam_file_path)
        .await
        .with_context(|| format!("无法读取试卷定义文件: {}", exam_file_path.display()))?;

    let mut exam: ExamConfig = match exam_file_path.extension().and_then(|s| s.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("无法解析JSON文件: {}", exam_file_path.display()))?,
        _ => toml::from_str(&content)
            .with_context(|| format!("无法解析TOML文件: {}", exam_file_path.display()))?,
    };

    // 文件中的题目可能没有ID，统一补齐并校正答案下标
    for question in &mut exam.questions {
        if question.id.is_empty() {
            question.id = next_question_id();
        }
        question.clamp_correct_answer();
    }

    // 设置文件路径
    Ok(exam.with_file_path(exam_file_path.to_string_lossy().to_string()))
}

/// 从文件夹中加载所有试卷定义文件并转换为 ExamConfig 对象列表
pub async fn load_all_exam_files(folder_path: &str) -> Result<Vec<ExamConfig>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut exams = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let ext = path.extension().and_then(|s| s.to_str());
        if ext == Some("toml") || ext == Some("json") {
            tracing::info!(
                "正在加载: {}",
                path.file_name().unwrap_or_default().to_string_lossy()
            );

            match load_exam_file(&path).await {
                Ok(exam) => {
                    tracing::info!("成功加载试卷《{}》，内置 {} 个题目", exam.title, exam.questions.len());
                    exams.push(exam);
                }
                Err(e) => {
                    tracing::warn!("加载文件失败 {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(exams)
}

/// 读取批量题目文本文件的完整内容
///
/// 只负责取回字符串，解析是后续显式步骤
pub async fn load_bulk_text(bulk_file_path: &Path) -> Result<String> {
    fs::read_to_string(bulk_file_path)
        .await
        .with_context(|| format!("无法读取批量题目文件: {}", bulk_file_path.display()))
}
