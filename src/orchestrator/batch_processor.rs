//! 批量试卷生成器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量试卷的生成和调度。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：启动日志、准备输出目录
//! 2. **批量加载**：扫描并加载所有试卷定义文件（`Vec<ExamConfig>`）
//! 3. **并发控制**：使用 Semaphore 限制并发数量
//! 4. **分批处理**：将试卷分批次生成，每批完成后再开始下一批
//! 5. **全局统计**：汇总所有试卷的生成结果
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单份试卷的细节
//! - **并发安全**：每个任务独占自己的 ExamConfig，无共享可变状态
//! - **向下委托**：委托 exam_processor 生成单份试卷

use crate::config::Config;
use crate::models::ExamConfig;
use crate::orchestrator::exam_processor;
use crate::utils::logging::{
    init_log_file, log_batch_complete, log_batch_start, log_exams_loaded, log_startup,
    print_final_stats,
};
use anyhow::Result;
use std::fs;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(config.max_concurrent_exams);

        // 准备输出目录
        fs::create_dir_all(&config.output_folder)?;

        Ok(Self { config })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 加载所有试卷定义
        let all_exams = self.load_exams().await?;

        if all_exams.is_empty() {
            warn!("⚠️ 没有找到试卷定义文件，程序结束");
            return Ok(());
        }

        let total_exams = all_exams.len();
        log_exams_loaded(total_exams, self.config.max_concurrent_exams);

        // 生成所有试卷
        let stats = self.process_all_exams(all_exams).await?;

        // 输出最终统计
        print_final_stats(
            stats.success,
            stats.failed,
            stats.total,
            &self.config.output_log_file,
        );

        Ok(())
    }

    /// 加载试卷定义
    async fn load_exams(&self) -> Result<Vec<ExamConfig>> {
        info!("\n📁 正在扫描试卷定义文件...");
        crate::models::load_all_exam_files(&self.config.exam_folder).await
    }

    /// 生成所有试卷
    async fn process_all_exams(&self, all_exams: Vec<ExamConfig>) -> Result<ProcessingStats> {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_exams));
        let total_exams = all_exams.len();
        let mut stats = ProcessingStats {
            total: total_exams,
            ..Default::default()
        };

        // 分批处理
        for batch_start in (0..total_exams).step_by(self.config.max_concurrent_exams) {
            let batch_end = (batch_start + self.config.max_concurrent_exams).min(total_exams);
            let batch_exams = &all_exams[batch_start..batch_end];
            let batch_num = (batch_start / self.config.max_concurrent_exams) + 1;
            let total_batches = (total_exams + self.config.max_concurrent_exams - 1)
                / self.config.max_concurrent_exams;

            log_batch_start(
                batch_num,
                total_batches,
                batch_start + 1,
                batch_end,
                total_exams,
            );

            // 处理本批
            let batch_result = self
                .process_batch(batch_exams, batch_start, semaphore.clone())
                .await?;

            stats.success += batch_result.success;
            stats.failed += batch_result.failed;

            log_batch_complete(
                batch_num,
                batch_result.success,
                batch_result.success + batch_result.failed,
            );
        }

        Ok(stats)
    }

    /// 处理单个批次
    async fn process_batch(
        &self,
        batch_exams: &[ExamConfig],
        batch_start: usize,
        semaphore: Arc<Semaphore>,
    ) -> Result<BatchResult> {
        let mut batch_handles = Vec::new();

        // 为本批创建并发任务；每个任务独占配置副本
        for (idx, exam) in batch_exams.iter().enumerate() {
            let exam_index = batch_start + idx + 1;
            let permit = semaphore.clone().acquire_owned().await?;

            let exam_clone = exam.clone();
            let config_clone = self.config.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit;
                match exam_processor::process_exam(exam_clone, exam_index, &config_clone).await {
                    Ok(done) => Ok(done),
                    Err(e) => {
                        error!("[试卷 {}] ❌ 生成过程中发生错误: {}", exam_index, e);
                        Err(e)
                    }
                }
            });
            batch_handles.push((exam_index, handle));
        }

        // 等待本批所有任务完成
        let mut result = BatchResult::default();

        for (exam_index, handle) in batch_handles {
            match handle.await {
                Ok(Ok(true)) => {
                    result.success += 1;
                }
                Ok(Ok(false)) | Ok(Err(_)) => {
                    result.failed += 1;
                }
                Err(e) => {
                    error!("[试卷 {}] 任务执行失败: {}", exam_index, e);
                    result.failed += 1;
                }
            }
        }

        Ok(result)
    }
}

/// 处理统计
#[derive(Debug, Default)]
struct ProcessingStats {
    success: usize,
    failed: usize,
    total: usize,
}

/// 批次处理结果
#[derive(Debug, Default)]
struct BatchResult {
    success: usize,
    failed: usize,
}
