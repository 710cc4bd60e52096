/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 同时生成的试卷数量
    pub max_concurrent_exams: usize,
    /// 试卷定义文件存放目录
    pub exam_folder: String,
    /// 模板文件存放目录
    pub template_folder: String,
    /// 模板远程基础URL（为空时从本地目录读取）
    pub template_base_url: String,
    /// 生成的HTML输出目录
    pub output_folder: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_concurrent_exams: 4,
            exam_folder: "exams".to_string(),
            template_folder: "templates".to_string(),
            template_base_url: String::new(),
            output_folder: "output_html".to_string(),
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            max_concurrent_exams: std::env::var("MAX_CONCURRENT_EXAMS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_concurrent_exams),
            exam_folder: std::env::var("EXAM_FOLDER").unwrap_or(default.exam_folder),
            template_folder: std::env::var("TEMPLATE_FOLDER").unwrap_or(default.template_folder),
            template_base_url: std::env::var("TEMPLATE_BASE_URL").unwrap_or(default.template_base_url),
            output_folder: std::env::var("OUTPUT_FOLDER").unwrap_or(default.output_folder),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }
}
