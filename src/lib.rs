//! # Exam HTML Craft
//!
//! 一个把试卷配置渲染为独立HTML文档的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 持有外部资源访问能力
//! - `TemplateClient` - 模板文本获取能力（本地目录 / HTTP）
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单份数据
//! - `bulk_parser` - 批量题目文本解析能力
//! - `render_service` - 题目HTML片段渲染能力
//! - `assemble_service` - 占位符替换与主题注入能力
//! - `QuestionService` - 题目列表维护能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份试卷"的完整生成流程
//! - `ExamCtx` - 上下文封装（exam_index + 输出文件名）
//! - `ExamFlow` - 流程编排（校验 → 取模板 → 组装）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量试卷生成器，管理并发
//! - `orchestrator/exam_processor` - 单个试卷生成器，导入题目并写出文档
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod logger;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::TemplateClient;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ExamConfig, Question, QuestionKind, TemplateId, Theme};
pub use orchestrator::{process_exam, App};
pub use services::{assemble, parse_bulk_questions, QuestionDraft, QuestionService};
pub use workflow::{ExamCtx, ExamFlow};
