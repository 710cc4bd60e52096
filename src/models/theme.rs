use serde::{Deserialize, Serialize};

/// 主题枚举
///
/// 每个主题对应一段固定的CSS样式块，组装时注入到模板 </head> 之前
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// 浅色主题
    Light,
    /// 深色主题
    Dark,
    /// 商务蓝主题
    Blue,
    /// 自然绿主题
    Green,
}

impl Theme {
    /// 获取主题标识
    pub fn id(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Blue => "blue",
            Theme::Green => "green",
        }
    }

    /// 从标识解析主题（精确匹配）
    pub fn from_id(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "blue" => Some(Theme::Blue),
            "green" => Some(Theme::Green),
            _ => None,
        }
    }

    /// 解析主题标识，无法识别时回退到浅色主题
    pub fn resolve(s: &str) -> Self {
        Self::from_id(s).unwrap_or(Theme::Light)
    }

    /// 获取主题对应的CSS样式块
    pub fn css(self) -> &'static str {
        match self {
            Theme::Light => LIGHT_CSS,
            Theme::Dark => DARK_CSS,
            Theme::Blue => BLUE_CSS,
            Theme::Green => GREEN_CSS,
        }
    }

    /// 全部主题
    pub fn all() -> [Theme; 4] {
        [Theme::Light, Theme::Dark, Theme::Blue, Theme::Green]
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

const LIGHT_CSS: &str = r#"
        :root {
          --primary-color: #3b82f6;
          --background-color: #ffffff;
          --text-color: #1f2937;
          --border-color: #e5e7eb;
        }
        .question-container {
          background: white;
          border: 1px solid var(--border-color);
          border-radius: 8px;
          padding: 20px;
          margin: 20px 0;
        }
        .question-title {
          color: var(--primary-color);
          font-size: 1.2em;
          font-weight: bold;
          margin-bottom: 10px;
        }
        .question-text {
          font-size: 1.1em;
          margin-bottom: 15px;
          line-height: 1.5;
        }
        .option-label {
          display: block;
          padding: 10px;
          margin: 5px 0;
          border: 1px solid #ddd;
          border-radius: 5px;
          cursor: pointer;
          transition: background-color 0.2s;
        }
        .option-label:hover {
          background-color: #f0f9ff;
        }
        .option-text {
          margin-left: 10px;
        }
      "#;

const DARK_CSS: &str = r#"
        :root {
          --primary-color: #60a5fa;
          --background-color: #1f2937;
          --text-color: #f9fafb;
          --border-color: #374151;
        }
        body { background-color: var(--background-color); color: var(--text-color); }
        .question-container {
          background: #374151;
          border: 1px solid var(--border-color);
          border-radius: 8px;
          padding: 20px;
          margin: 20px 0;
        }
        .question-title {
          color: var(--primary-color);
          font-size: 1.2em;
          font-weight: bold;
          margin-bottom: 10px;
        }
        .question-text {
          font-size: 1.1em;
          margin-bottom: 15px;
          line-height: 1.5;
          color: var(--text-color);
        }
        .option-label {
          display: block;
          padding: 10px;
          margin: 5px 0;
          border: 1px solid #4b5563;
          border-radius: 5px;
          cursor: pointer;
          transition: background-color 0.2s;
          color: var(--text-color);
        }
        .option-label:hover {
          background-color: #4b5563;
        }
        .option-text {
          margin-left: 10px;
        }
      "#;

const BLUE_CSS: &str = r#"
        :root {
          --primary-color: #1e40af;
          --background-color: #eff6ff;
          --text-color: #1e3a8a;
          --border-color: #bfdbfe;
        }
        .question-container {
          background: white;
          border: 1px solid var(--border-color);
          border-radius: 8px;
          padding: 20px;
          margin: 20px 0;
        }
        .question-title {
          color: var(--primary-color);
          font-size: 1.2em;
          font-weight: bold;
          margin-bottom: 10px;
        }
        .question-text {
          font-size: 1.1em;
          margin-bottom: 15px;
          line-height: 1.5;
        }
        .option-label {
          display: block;
          padding: 10px;
          margin: 5px 0;
          border: 1px solid var(--border-color);
          border-radius: 5px;
          cursor: pointer;
          transition: background-color 0.2s;
        }
        .option-label:hover {
          background-color: #dbeafe;
        }
        .option-text {
          margin-left: 10px;
        }
      "#;

const GREEN_CSS: &str = r#"
        :root {
          --primary-color: #059669;
          --background-color: #ecfdf5;
          --text-color: #064e3b;
          --border-color: #a7f3d0;
        }
        .question-container {
          background: white;
          border: 1px solid var(--border-color);
          border-radius: 8px;
          padding: 20px;
          margin: 20px 0;
        }
        .question-title {
          color: var(--primary-color);
          font-size: 1.2em;
          font-weight: bold;
          margin-bottom: 10px;
        }
        .question-text {
          font-size: 1.1em;
          margin-bottom: 15px;
          line-height: 1.5;
        }
        .option-label {
          display: block;
          padding: 10px;
          margin: 5px 0;
          border: 1px solid var(--border-color);
          border-radius: 5px;
          cursor: pointer;
          transition: background-color 0.2s;
        }
        .option-label:hover {
          background-color: #d1fae5;
        }
        .option-text {
          margin-left: 10px;
        }
      "#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_themes_have_distinct_css() {
        let themes = Theme::all();
        for theme in themes {
            assert!(!theme.css().is_empty());
        }
        for (i, a) in themes.iter().enumerate() {
            for b in themes.iter().skip(i + 1) {
                assert_ne!(a.css(), b.css(), "{} 与 {} 的样式应不同", a, b);
            }
        }
    }

    #[test]
    fn test_resolve_unknown_theme_falls_back_to_light() {
        assert_eq!(Theme::resolve("neon"), Theme::Light);
        assert_eq!(Theme::resolve(""), Theme::Light);
        assert_eq!(Theme::resolve("dark"), Theme::Dark);
    }
}
