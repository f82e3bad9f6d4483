use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use rust_seo::core::{load_post, Scanner, Server};
use rust_seo::models::{Config, OutputFormat};
use rust_seo::utils::{apply_stored_defaults, slugify};
use rust_seo::{analyze, AnalysisInput};

use super::report;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// 指定站点目录
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 分析一篇文章
    Analyze(AnalyzeArgs),

    /// 直接分析各个字段，不读取文件
    Check(CheckArgs),

    /// 扫描站点中的所有文章
    Scan(ScanArgs),

    /// 启动分析接口服务器
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Markdown 文章路径
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// 输出格式
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// 按保存文章时的规则补全空的元标题和元描述
    #[arg(long)]
    pub fill_defaults: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    #[arg(long, default_value = "")]
    pub title: String,

    /// HTML 内容；以 @ 开头时从文件读取
    #[arg(long, default_value = "")]
    pub content: String,

    #[arg(long, default_value = "")]
    pub meta_title: String,

    #[arg(long, default_value = "")]
    pub meta_description: String,

    /// 逗号分隔的关键词，第一个为焦点关键词
    #[arg(long, default_value = "")]
    pub keywords: String,

    /// 永久链接；留空时由标题生成
    #[arg(long, default_value = "")]
    pub slug: String,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// 按保存文章时的规则补全空的元标题和元描述
    #[arg(long)]
    pub fill_defaults: bool,
}

#[derive(Args)]
pub struct ScanArgs {
    /// 最低分数，低于该分数时以非零状态退出
    #[arg(long)]
    pub min_score: Option<u8>,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Args)]
pub struct ServeArgs {
    /// 服务器端口
    #[arg(short, long, default_value = "4000")]
    pub port: u16,
}

/// 执行命令，返回进程退出码
pub async fn execute(cli: Cli) -> Result<i32> {
    let config = Config::load(&cli.path.join("_config.yml"))?;

    match cli.command {
        Commands::Analyze(args) => {
            let format = args.format.unwrap_or(config.seo.format);
            analyze_file(&args.file, format, args.fill_defaults)
        }
        Commands::Check(args) => check_fields(args, config.seo.format),
        Commands::Scan(args) => {
            let min_score = args.min_score.unwrap_or(config.seo.min_score);
            let format = args.format.unwrap_or(config.seo.format);
            scan_site(&cli.path.join(&config.source_dir), min_score, format)
        }
        Commands::Serve(args) => {
            info!("启动分析接口，端口: {}", args.port);
            Server::new(args.port).start().await?;
            Ok(0)
        }
    }
}

fn analyze_file(file: &Path, format: OutputFormat, fill_defaults: bool) -> Result<i32> {
    let post = load_post(file).with_context(|| format!("无法分析文章: {}", file.display()))?;
    let mut input = post.to_input();
    if fill_defaults {
        input = apply_stored_defaults(input);
    }
    let result = analyze(&input);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => {
            let heading = format!("{} ({})", post.title, file.display());
            print!("{}", report::format_result(&heading, &result));
        }
    }
    Ok(0)
}

fn check_fields(args: CheckArgs, default_format: OutputFormat) -> Result<i32> {
    let format = args.format.unwrap_or(default_format);
    let input = check_input(args)?;
    let result = analyze(&input);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print!("{}", report::format_result(&input.title, &result)),
    }
    Ok(0)
}

/// 由命令行字段组装分析输入，未给出永久链接时由标题生成
fn check_input(args: CheckArgs) -> Result<AnalysisInput> {
    let content = match args.content.strip_prefix('@') {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("读取内容文件失败: {}", path))?,
        None => args.content,
    };
    let slug = if args.slug.is_empty() {
        slugify(&args.title)
    } else {
        args.slug
    };
    let input = AnalysisInput {
        title: args.title,
        content,
        meta_title: args.meta_title,
        meta_description: args.meta_description,
        meta_keywords: args.keywords,
        slug,
    };
    Ok(if args.fill_defaults {
        apply_stored_defaults(input)
    } else {
        input
    })
}

fn scan_site(source_dir: &Path, min_score: u8, format: OutputFormat) -> Result<i32> {
    let scanner = Scanner::new(source_dir);
    let report = scanner.scan();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", report::format_scan(&report, min_score)),
    }

    let below = report.below(min_score).len();
    if below > 0 || !report.failures.is_empty() {
        warn!(
            "{} 篇文章低于 {} 分, {} 篇加载失败",
            below,
            min_score,
            report.failures.len()
        );
        return Ok(1);
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_check(args: &[&str]) -> CheckArgs {
        let mut argv = vec!["rust-seo", "check"];
        argv.extend_from_slice(args);
        let cli = Cli::parse_from(argv);
        match cli.command {
            Commands::Check(args) => args,
            _ => unreachable!(),
        }
    }

    #[test]
    fn check_derives_slug_from_title() {
        let input = check_input(parse_check(&["--title", "Urban Gardening: 10 Tips!"])).unwrap();
        assert_eq!(input.slug, "urban-gardening-10-tips");
        assert!(input.meta_title.is_empty());

        let input = check_input(parse_check(&["--title", "T", "--slug", "my-own"])).unwrap();
        assert_eq!(input.slug, "my-own");
    }

    #[test]
    fn check_fill_defaults_backfills_meta_fields() {
        let input = check_input(parse_check(&[
            "--title",
            "Balcony herbs",
            "--content",
            "<p>Basil likes sun.</p>",
            "--fill-defaults",
        ]))
        .unwrap();
        assert_eq!(input.meta_title, "Balcony herbs");
        assert_eq!(input.meta_description, "Basil likes sun.");

        let result = analyze(&input);
        assert_eq!(
            result.check("Meta Description").unwrap().message,
            "Too short (16). Aim for 120-160 characters"
        );
    }
}
