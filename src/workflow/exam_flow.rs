//! 试卷生成流程 - 流程层
//!
//! 核心职责：定义"一份试卷"的完整生成流程
//!
//! 流程顺序：
//! 1. 校验必填字段 → 2. 获取模板文本 → 3. 组装HTML文档

use anyhow::Result;
use tracing::info;

use crate::clients::TemplateClient;
use crate::config::Config;
use crate::models::exam::ExamConfig;
use crate::models::template::TemplateId;
use crate::models::theme::Theme;
use crate::services::assemble_service::assemble;
use crate::workflow::exam_ctx::ExamCtx;

/// 试卷生成流程
///
/// - 编排完整的文档生成流程
/// - 决定何时取模板、何时组装
/// - 只依赖业务能力（services）与模板客户端
pub struct ExamFlow {
    template_client: TemplateClient,
    verbose_logging: bool,
}

impl ExamFlow {
    /// 创建新的试卷生成流程
    pub fn new(config: &Config) -> Self {
        Self {
            template_client: TemplateClient::new(config),
            verbose_logging: config.verbose_logging,
        }
    }

    /// 生成单份试卷的HTML文档
    ///
    /// # 参数
    /// - `exam`: 试卷配置（组装期间只读）
    /// - `ctx`: 生成上下文
    ///
    /// # 返回
    /// 返回组装完成的HTML文本
    pub async fn run(&self, exam: &ExamConfig, ctx: &ExamCtx) -> Result<String> {
        let template = TemplateId::resolve(&exam.template);
        let theme = Theme::resolve(&exam.theme);

        if self.verbose_logging {
            info!(
                "[试卷 {}] 模板: {} ({}), 主题: {}",
                ctx.exam_index,
                template.name(),
                template.file_name(),
                theme
            );
        }

        // ========== 流程 1: 获取模板文本 ==========
        info!("[试卷 {}] 📥 正在获取模板文本...", ctx.exam_index);
        let template_html = self.template_client.fetch(&exam.template).await?;

        info!(
            "[试卷 {}] ✓ 模板获取完成，共 {} 字符",
            ctx.exam_index,
            template_html.chars().count()
        );

        // ========== 流程 2: 组装文档 ==========
        info!(
            "[试卷 {}] 🛠️ 正在组装文档（{} 个题目）...",
            ctx.exam_index,
            exam.questions.len()
        );
        let html = assemble(exam, &template_html)?;

        info!("[试卷 {}] ✓ 文档组装完成", ctx.exam_index);

        Ok(html)
    }
}
