//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量生成和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量试卷生成器
//! - 管理应用生命周期（初始化、运行）
//! - 批量加载试卷定义（Vec<ExamConfig>）
//! - 控制并发数量（Semaphore）
//! - 输出全局统计信息
//!
//! ### `exam_processor` - 单个试卷生成器
//! - 导入试卷引用的批量题目文件
//! - 运行 ExamFlow 完成文档组装
//! - 把生成的HTML写入输出目录
//! - 输出单份试卷的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<ExamConfig>)
//!     ↓
//! exam_processor (处理单份 ExamConfig)
//!     ↓
//! workflow::ExamFlow (校验 → 取模板 → 组装)
//!     ↓
//! services (能力层：parse / render / assemble)
//!     ↓
//! clients (模板客户端：本地目录 / HTTP)
//! ```

pub mod batch_processor;
pub mod exam_processor;

// 重新导出主要类型
pub use batch_processor::App;
pub use exam_processor::process_exam;
