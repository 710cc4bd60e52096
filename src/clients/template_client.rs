/// 模板客户端
///
/// 封装模板原始文本的获取逻辑：按模板标识解析固定文件名，
/// 从本地模板目录读取，或在配置了基础URL时通过HTTP获取
use crate::config::Config;
use crate::error::{AppError, AppResult, TemplateError};
use crate::models::template::TemplateId;
use std::path::Path;
use tracing::debug;

/// 模板客户端
pub struct TemplateClient {
    template_folder: String,
    template_base_url: String,
    http: reqwest::Client,
}

impl TemplateClient {
    /// 创建新的模板客户端
    pub fn new(config: &Config) -> Self {
        Self {
            template_folder: config.template_folder.clone(),
            template_base_url: config.template_base_url.clone(),
            http: reqwest::Client::new(),
        }
    }

    /// 获取模板原始文本
    ///
    /// # 参数
    /// - `template_id`: 模板标识，无法识别时回退到演示模板
    ///
    /// # 返回
    /// 返回模板文件的完整文本内容
    pub async fn fetch(&self, template_id: &str) -> AppResult<String> {
        let template = TemplateId::resolve(template_id);

        if self.template_base_url.is_empty() {
            self.fetch_local(template).await
        } else {
            self.fetch_remote(template).await
        }
    }

    /// 从本地模板目录读取
    async fn fetch_local(&self, template: TemplateId) -> AppResult<String> {
        let path = Path::new(&self.template_folder).join(template.file_name());
        debug!("正在读取本地模板: {}", path.display());

        if !path.exists() {
            return Err(AppError::Template(TemplateError::NotFound {
                path: path.to_string_lossy().to_string(),
            }));
        }

        tokio::fs::read_to_string(&path).await.map_err(|e| {
            AppError::template_fetch_failed(path.to_string_lossy().to_string(), e)
        })
    }

    /// 通过HTTP获取远程模板
    async fn fetch_remote(&self, template: TemplateId) -> AppResult<String> {
        // 固定文件名里含空格，拼URL前先转义
        let url = format!(
            "{}/{}",
            self.template_base_url.trim_end_matches('/'),
            template.file_name().replace(' ', "%20")
        );
        debug!("正在获取远程模板: {}", url);

        let text = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(folder: &std::path::Path) -> TemplateClient {
        let config = Config {
            template_folder: folder.to_string_lossy().to_string(),
            ..Config::default()
        };
        TemplateClient::new(&config)
    }

    #[test]
    fn test_fetch_local_template() {
        let folder = std::env::temp_dir().join(format!(
            "exam_html_craft_tpl_{}_{}",
            std::process::id(),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        std::fs::create_dir_all(&folder).unwrap();
        std::fs::write(
            folder.join(TemplateId::Demo.file_name()),
            "<html><head></head><body>{{EXAM_TITLE}}</body></html>",
        )
        .unwrap();

        let client = client_for(&folder);
        let text = tokio_test::block_on(client.fetch("demo")).unwrap();
        assert!(text.contains("{{EXAM_TITLE}}"));

        std::fs::remove_dir_all(&folder).ok();
    }

    #[test]
    fn test_missing_local_template_reports_not_found() {
        let folder = std::env::temp_dir().join(format!(
            "exam_html_craft_missing_{}_{}",
            std::process::id(),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        std::fs::create_dir_all(&folder).unwrap();

        let client = client_for(&folder);
        let result = tokio_test::block_on(client.fetch("minor-test"));
        assert!(matches!(
            result,
            Err(AppError::Template(TemplateError::NotFound { .. }))
        ));

        std::fs::remove_dir_all(&folder).ok();
    }
}
