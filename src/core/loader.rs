use std::collections::HashMap;
use std::fs;
use std::path::Path;

use gray_matter::engine::YAML;
use gray_matter::{Matter, Pod};
use pulldown_cmark::{html, Options, Parser};
use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::core::error::LoadError;
use crate::models::Post;
use crate::utils::{derive_excerpt, normalize_permalink};

/// 由加载器消费、不再放进 `front_matter` 的键
const KNOWN_KEYS: &[&str] = &[
    "title",
    "slug",
    "meta_title",
    "meta_description",
    "description",
    "keywords",
    "meta_keywords",
    "excerpt",
];

/// 检查文件是否为 Markdown 文件
pub fn is_markdown_file<P: AsRef<Path>>(path: P) -> bool {
    match path.as_ref().extension().and_then(|ext| ext.to_str()) {
        Some(ext) => ext == "md" || ext == "markdown",
        None => false,
    }
}

/// 将Markdown渲染为HTML
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut html_output = String::new();
    html::push_html(&mut html_output, Parser::new_ext(markdown, options));
    html_output
}

/// 从磁盘加载一篇文章
pub fn load_post(path: &Path) -> Result<Post, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_post(&raw, path)
}

/// 解析文章源文本，`path` 用于错误信息和缺省值
pub fn parse_post(raw: &str, path: &Path) -> Result<Post, LoadError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter.parse(raw);

    let mut fields = match parsed.data {
        Some(Pod::Hash(map)) => map,
        Some(Pod::Null) | None => {
            if !opens_front_matter(raw) {
                return Err(LoadError::MissingFrontMatter {
                    path: path.to_path_buf(),
                });
            }
            // gray_matter 在 YAML 语法错误时同样返回空数据，这里重新解析以区分
            check_blank_matter(&parsed.matter, path)?;
            HashMap::new()
        }
        Some(other) => {
            return Err(LoadError::InvalidFrontMatter {
                path: path.to_path_buf(),
                message: format!("应为键值映射，实际为 {}", pod_kind(&other)),
            })
        }
    };

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_string();

    let title = take_string(&mut fields, "title").unwrap_or_else(|| stem.clone());
    let slug = normalize_permalink(&take_string(&mut fields, "slug").unwrap_or(stem));
    let meta_title = take_string(&mut fields, "meta_title").unwrap_or_default();
    let description = take_string(&mut fields, "description");
    let meta_description = take_string(&mut fields, "meta_description")
        .or(description)
        .unwrap_or_default();
    let keywords = take_keywords(&mut fields, "keywords");
    let meta_keywords = take_keywords(&mut fields, "meta_keywords")
        .or(keywords)
        .unwrap_or_default();

    let rendered_content = render_markdown(&parsed.content);
    let excerpt =
        take_string(&mut fields, "excerpt").unwrap_or_else(|| derive_excerpt(&rendered_content));

    let front_matter: HashMap<String, Value> = fields
        .into_iter()
        .filter(|(key, _)| !KNOWN_KEYS.contains(&key.as_str()))
        .map(|(key, pod)| (key, pod_to_value(pod)))
        .collect();

    debug!("已加载文章: {} ({})", title, path.display());

    Ok(Post {
        title,
        slug,
        content: parsed.content,
        rendered_content,
        meta_title,
        meta_description,
        meta_keywords,
        excerpt,
        source: path.to_path_buf(),
        front_matter,
    })
}

/// 第一行是否为前置元数据分隔符 `---`
fn opens_front_matter(raw: &str) -> bool {
    raw.lines().next().map(str::trim_end) == Some("---")
}

/// 没有解析出数据的前置元数据只能是空的（或只有注释）
fn check_blank_matter(matter: &str, path: &Path) -> Result<(), LoadError> {
    if matter.trim().is_empty() {
        return Ok(());
    }
    let invalid = |message: String| LoadError::InvalidFrontMatter {
        path: path.to_path_buf(),
        message,
    };
    match serde_yaml::from_str::<Value>(matter) {
        Ok(Value::Null) => Ok(()),
        Ok(_) => Err(invalid("无法解析为键值映射".to_string())),
        Err(e) => Err(invalid(e.to_string())),
    }
}

fn take_string(fields: &mut HashMap<String, Pod>, key: &str) -> Option<String> {
    fields.remove(key).and_then(pod_to_string)
}

/// 关键词可以写成字符串，也可以写成列表
fn take_keywords(fields: &mut HashMap<String, Pod>, key: &str) -> Option<String> {
    match fields.remove(key)? {
        Pod::Array(items) => Some(
            items
                .into_iter()
                .filter_map(pod_to_string)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        other => pod_to_string(other),
    }
}

fn pod_to_string(pod: Pod) -> Option<String> {
    match pod {
        Pod::String(s) => Some(s),
        Pod::Integer(i) => Some(i.to_string()),
        Pod::Float(f) => Some(f.to_string()),
        Pod::Boolean(b) => Some(b.to_string()),
        Pod::Null | Pod::Array(_) | Pod::Hash(_) => None,
    }
}

fn pod_kind(pod: &Pod) -> &'static str {
    match pod {
        Pod::Null => "null",
        Pod::String(_) => "string",
        Pod::Integer(_) => "integer",
        Pod::Float(_) => "float",
        Pod::Boolean(_) => "boolean",
        Pod::Array(_) => "array",
        Pod::Hash(_) => "hash",
    }
}

// 将Pod值转换为serde_yaml::Value
fn pod_to_value(pod: Pod) -> Value {
    match pod {
        Pod::String(s) => Value::String(s),
        Pod::Integer(i) => Value::Number(serde_yaml::Number::from(i)),
        Pod::Float(f) => Value::Number(serde_yaml::Number::from(f)),
        Pod::Boolean(b) => Value::Bool(b),
        Pod::Array(arr) => Value::Sequence(arr.into_iter().map(pod_to_value).collect()),
        Pod::Hash(map) => {
            let mut mapping = Mapping::new();
            for (k, v) in map {
                mapping.insert(Value::String(k), pod_to_value(v));
            }
            Value::Mapping(mapping)
        }
        Pod::Null => Value::Null,
    }
}
