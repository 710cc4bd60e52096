use serde::{Deserialize, Serialize};

/// 模板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    /// 演示模板：带侧边导航的现代布局
    Demo,
    /// 小测模板：紧凑布局，适合快速测验
    MinorTest,
    /// 英语模板：适合语言类、大段文字的试卷
    EnglishTest,
}

impl TemplateId {
    /// 获取模板标识
    pub fn id(self) -> &'static str {
        match self {
            TemplateId::Demo => "demo",
            TemplateId::MinorTest => "minor-test",
            TemplateId::EnglishTest => "english-test",
        }
    }

    /// 获取模板显示名称
    pub fn name(self) -> &'static str {
        match self {
            TemplateId::Demo => "Demo Template",
            TemplateId::MinorTest => "Minor Test Template",
            TemplateId::EnglishTest => "English Test Template",
        }
    }

    /// 获取模板对应的固定文件名
    pub fn file_name(self) -> &'static str {
        match self {
            TemplateId::Demo => "Demo (1).html",
            TemplateId::MinorTest => "Minor_Test_@_12.html",
            TemplateId::EnglishTest => "Test_15_(English).html",
        }
    }

    /// 从标识解析模板（精确匹配）
    pub fn from_id(s: &str) -> Option<Self> {
        match s {
            "demo" => Some(TemplateId::Demo),
            "minor-test" => Some(TemplateId::MinorTest),
            "english-test" => Some(TemplateId::EnglishTest),
            _ => None,
        }
    }

    /// 解析模板标识，无法识别时回退到演示模板
    pub fn resolve(s: &str) -> Self {
        Self::from_id(s).unwrap_or(TemplateId::Demo)
    }

    /// 全部模板
    pub fn all() -> [TemplateId; 3] {
        [
            TemplateId::Demo,
            TemplateId::MinorTest,
            TemplateId::EnglishTest,
        ]
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
