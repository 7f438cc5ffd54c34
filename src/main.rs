// ==========================================
// 绿色标章评定工具 - 命令行入口
// ==========================================
// 用法:
//   green-seal [--config PATH] [--locale zh-CN|en|pt-BR]
//              [--area A --entries FILE] [--report [PATH]] [--json]
//
// 不带 --entries 时进入交互式表单
// ==========================================

use anyhow::{bail, Context};
use green_seal_calc::api::InputValidator;
use green_seal_calc::app::{run_form, AppState};
use green_seal_calc::{logging, APP_NAME, VERSION};
use std::io;
use std::path::PathBuf;

const USAGE: &str = "\
用法: green-seal [选项]

选项:
  --config PATH     配置文件（默认: $GREEN_SEAL_CONFIG 或用户配置目录）
  --locale LOCALE   界面语言: zh-CN | en | pt-BR
  --area A          建筑面积 (m²)，与 --entries 一起使用
  --entries FILE    消耗量录入文件 (.csv/.xlsx/.xls)，非交互模式
  --report [PATH]   保存文本报告（目录或文件；省略时使用配置的报告目录；交互模式下为目录）
  --json            以 JSON 输出评定结果（非交互模式）
  -h, --help        显示帮助
";

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    config: Option<PathBuf>,
    locale: Option<String>,
    area: Option<String>,
    entries: Option<PathBuf>,
    report: Option<Option<PathBuf>>,
    json: bool,
    help: bool,
}

fn take_value(iter: &mut impl Iterator<Item = String>, flag: &str) -> anyhow::Result<String> {
    iter.next()
        .filter(|v| !v.starts_with("--"))
        .with_context(|| format!("{} 需要参数", flag))
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<CliArgs> {
    let mut out = CliArgs::default();
    let mut iter = args.into_iter().peekable();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => out.config = Some(PathBuf::from(take_value(&mut iter, "--config")?)),
            "--locale" => out.locale = Some(take_value(&mut iter, "--locale")?),
            "--area" => out.area = Some(take_value(&mut iter, "--area")?),
            "--entries" => out.entries = Some(PathBuf::from(take_value(&mut iter, "--entries")?)),
            "--report" => {
                let path = iter.next_if(|v| !v.starts_with("--")).map(PathBuf::from);
                out.report = Some(path);
            }
            "--json" => out.json = true,
            "-h" | "--help" => out.help = true,
            other => bail!("未知参数: {}", other),
        }
    }

    Ok(out)
}

fn main() -> anyhow::Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{} v{}\n\n{}", APP_NAME, VERSION, USAGE);
        return Ok(());
    }

    logging::init();
    tracing::info!("{} v{}", APP_NAME, VERSION);

    let state = AppState::new(args.config.as_deref(), args.locale.as_deref())?;
    let api = &state.evaluation_api;

    match &args.entries {
        Some(entries) => {
            let raw_area = args.area.as_deref().context("--entries 模式需要 --area")?;
            let area = InputValidator::parse_positive("area", raw_area)?;

            let result = api.evaluate_file(entries, area)?;
            if args.json {
                println!("{}", api.to_json(&result)?);
            } else {
                print!("{}", api.render_report(&result));
            }

            let saved = match &args.report {
                Some(Some(target)) => Some(api.save_report(&result, target)?),
                Some(None) => Some(api.save_report_in_dir(&result, &state.report_dir())?),
                None => None,
            };
            if let Some(path) = saved {
                eprintln!("{}", path.display());
            }
        }
        None => {
            let stdin = io::stdin();
            let report_dir = args
                .report
                .clone()
                .flatten()
                .unwrap_or_else(|| state.report_dir());
            run_form(api, stdin.lock(), io::stdout(), Some(report_dir.as_path()))?;
        }
    }

    Ok(())
}
