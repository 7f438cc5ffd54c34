// ==========================================
// 绿色标章评定工具 - 交互式表单
// ==========================================
// 流程: 面积 → 材料选择 → 各材料消耗量 → 评定结果 → (可选) 保存报告
// 输入无效时显示提示并重新询问；输入结束 (EOF) 视为放弃
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::evaluation_api::EvaluationApi;
use crate::api::validator::{InputValidator, ValidationResult};
use crate::app::session::FormSession;
use crate::domain::evaluation::EvaluationResult;
use crate::engine::report::format_number;
use crate::i18n::{t_in, t_in_with_args};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;

struct Form<'a, R, W> {
    api: &'a EvaluationApi,
    input: R,
    output: W,
}

fn io_err(e: std::io::Error) -> ApiError {
    ApiError::InternalError(format!("终端读写失败: {}", e))
}

impl<'a, R: BufRead, W: Write> Form<'a, R, W> {
    fn locale(&self) -> &str {
        self.api.renderer().locale()
    }

    fn say(&mut self, text: &str) -> ApiResult<()> {
        writeln!(self.output, "{}", text).map_err(io_err)
    }

    /// 输出提示并读取一行；EOF 返回 None
    fn read_line(&mut self, prompt: &str) -> ApiResult<Option<String>> {
        write!(self.output, "{} ", prompt).map_err(io_err)?;
        self.output.flush().map_err(io_err)?;

        let mut line = String::new();
        let n = self.input.read_line(&mut line).map_err(io_err)?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// 反复询问，直到 parse 成功
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> ValidationResult<T>,
    ) -> ApiResult<Option<T>> {
        loop {
            let line = match self.read_line(prompt)? {
                Some(l) => l,
                None => return Ok(None),
            };

            match parse(&line) {
                Ok(v) => return Ok(Some(v)),
                Err(e) => {
                    let msg = t_in_with_args(self.locale(), "form.invalid", &[("reason", e.to_string().as_str())]);
                    self.say(&msg)?;
                }
            }
        }
    }

    fn fill_session(&mut self, session: &mut FormSession) -> ApiResult<bool> {
        let title = t_in(self.locale(), "form.title");
        self.say(&title)?;

        // 面积
        let prompt = t_in(self.locale(), "form.area_prompt");
        let area = match self.ask(&prompt, |s| InputValidator::parse_positive("area", s))? {
            Some(a) => a,
            None => return Ok(false),
        };
        session.set_area(area)?;

        // 材料选择
        let api = self.api;
        let catalog = api.catalog();
        let available = catalog.names().join(", ");
        let prompt = t_in_with_args(self.locale(), "form.materials_prompt", &[("available", available.as_str())]);
        let specs = match self.ask(&prompt, |s| InputValidator::parse_selection(catalog, s))? {
            Some(s) => s,
            None => return Ok(false),
        };
        for spec in &specs {
            session.select_material(api, &spec.name)?;
        }

        // 各材料消耗量（留空 = 平均值）
        for spec in &specs {
            let prompt = t_in_with_args(
                self.locale(),
                "form.consumption_prompt",
                &[
                    ("name", spec.name.as_str()),
                    ("unit", spec.unit.to_string().as_str()),
                    ("average", format_number(spec.average_consumption, 4).as_str()),
                ],
            );
            let field = spec.name.clone();
            let value = match self.ask(&prompt, |s| InputValidator::parse_optional_positive(&field, s))? {
                Some(v) => v,
                None => return Ok(false),
            };
            if let Some(v) = value {
                session.set_consumption(&spec.name, v)?;
            }
        }

        Ok(true)
    }

    fn offer_report(&mut self, result: &EvaluationResult, report_dir: &Path) -> ApiResult<()> {
        let prompt = t_in(self.locale(), "form.report_prompt");
        let answer = match self.read_line(&prompt)? {
            Some(a) => a.to_lowercase(),
            None => return Ok(()),
        };

        if matches!(answer.as_str(), "y" | "yes" | "s" | "sim" | "是") {
            let path = self.api.save_report_in_dir(result, report_dir)?;
            let msg = t_in_with_args(
                self.locale(),
                "form.report_saved",
                &[("path", path.display().to_string().as_str())],
            );
            self.say(&msg)?;
        }
        Ok(())
    }
}

/// 运行交互式表单
///
/// # 参数
/// - report_dir: Some 时在结果后询问是否保存报告
///
/// # 返回
/// - Ok(Some(result)): 完成评定
/// - Ok(None): 输入提前结束
pub fn run_form<R: BufRead, W: Write>(
    api: &EvaluationApi,
    input: R,
    output: W,
    report_dir: Option<&Path>,
) -> ApiResult<Option<EvaluationResult>> {
    let mut form = Form { api, input, output };
    let mut session = FormSession::new();

    if !form.fill_session(&mut session)? {
        info!("表单输入提前结束");
        return Ok(None);
    }

    let result = session.evaluate(api)?;
    form.say("")?;
    form.say(&api.render_report(&result))?;

    if let Some(dir) = report_dir {
        form.offer_report(&result, dir)?;
    }

    session.clear();
    Ok(Some(result))
}
