// ==========================================
// 绿色标章评定工具 - 文本报告
// ==========================================
// 内容: 报告头（时间/面积）、材料明细表、汇总、三项条件与最终结论
// 格式: 纯文本，标签按语言翻译
// ==========================================

use crate::domain::evaluation::EvaluationResult;
use crate::domain::types::{ImpactModel, SealCriterion};
use crate::i18n::{t_in, t_in_with_args};
use chrono::NaiveDateTime;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

const MARK_OK: &str = "✅";
const MARK_FAIL: &str = "❌";
const NOT_APPLICABLE: &str = "-";

// ==========================================
// ReportRenderer - 报告渲染器
// ==========================================
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    locale: String,
}

impl ReportRenderer {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// 渲染完整报告
    pub fn render(&self, result: &EvaluationResult) -> String {
        let mut lines = Vec::new();

        lines.push(self.tr_args(
            "report.title",
            &[(
                "timestamp",
                result.evaluated_at.format("%Y-%m-%d %H:%M:%S").to_string().as_str(),
            )],
        ));
        lines.push(self.tr_args(
            "report.evaluation_id",
            &[("id", result.evaluation_id.to_string().as_str())],
        ));
        lines.push(self.tr_args("report.area", &[("area", format_number(result.area_m2, 2).as_str())]));
        lines.push(self.tr_args("report.model", &[("model", result.model.to_string().as_str())]));
        lines.push(String::new());

        lines.push(self.tr("report.section_materials"));
        lines.extend(self.render_table(result));
        lines.push(String::new());

        lines.push(self.tr("report.section_summary"));
        lines.push(self.tr_args(
            "report.total_waste",
            &[("value", format_number(result.total_waste_kg, value_decimals(result.model)).as_str())],
        ));
        lines.push(self.tr_args(
            "report.total_co2",
            &[("value", format_number(result.total_co2_kg, value_decimals(result.model)).as_str())],
        ));
        lines.push(String::new());

        lines.push(self.tr("report.section_seal"));
        lines.push(self.verdict_line(result.seal_awarded));
        lines.push(self.tr("criteria.header"));
        for criterion in [
            SealCriterion::NoExcessConsumption,
            SealCriterion::Co2WithinLimit,
            SealCriterion::RecyclabilityRatioOk,
        ] {
            lines.push(self.criterion_line(result, criterion));
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// 结论行
    pub fn verdict_line(&self, seal_awarded: bool) -> String {
        if seal_awarded {
            self.tr("seal.awarded")
        } else {
            self.tr("seal.not_awarded")
        }
    }

    /// 单项条件行（“- ✅ 描述”）
    pub fn criterion_line(&self, result: &EvaluationResult, criterion: SealCriterion) -> String {
        let mark = if result.criteria.get(criterion) {
            MARK_OK
        } else {
            MARK_FAIL
        };

        let text = match criterion {
            SealCriterion::NoExcessConsumption => self.tr("criteria.no_excess"),
            SealCriterion::Co2WithinLimit => self.tr_args(
                "criteria.co2_limit",
                &[
                    ("limit", format_number(result.thresholds.co2_per_area_limit, 2).as_str()),
                    ("current", format_number(result.total_co2_per_area, 2).as_str()),
                ],
            ),
            SealCriterion::RecyclabilityRatioOk => self.tr_args(
                "criteria.recyclable",
                &[
                    ("percent", format!("{:.1}", result.recyclable_percent()).as_str()),
                    (
                        "target",
                        format!("{:.0}", result.thresholds.min_recyclable_ratio * 100.0).as_str(),
                    ),
                ],
            ),
        };

        format!("- {} {}", mark, text)
    }

    fn render_table(&self, result: &EvaluationResult) -> Vec<String> {
        let direct = result.model == ImpactModel::Direct;
        let consumption_label = if direct {
            "report.columns.consumption_rate"
        } else {
            "report.columns.consumption"
        };

        let header = vec![
            self.tr("report.columns.material"),
            self.tr(consumption_label),
            self.tr("report.columns.consumption_kg"),
            self.tr("report.columns.waste"),
            self.tr("report.columns.co2"),
            self.tr("report.columns.reuse"),
            self.tr("report.columns.disposal"),
        ];

        let decimals = value_decimals(result.model);
        let rows: Vec<Vec<String>> = result
            .impacts
            .iter()
            .map(|i| {
                // DIRECT 模型下消耗量为每 m² 用量，无 kg 换算
                let (consumption, consumption_kg) = if direct {
                    (
                        format!("{} {}", format_number(i.user_consumption, 4), i.unit),
                        NOT_APPLICABLE.to_string(),
                    )
                } else {
                    (
                        format!("{} {}", format_number(i.total_consumption, 2), i.unit.total_unit()),
                        format_number(i.consumption_kg, 2),
                    )
                };

                vec![
                    i.material.clone(),
                    consumption,
                    consumption_kg,
                    format_number(i.waste_kg, decimals),
                    format_number(i.co2_kg, decimals),
                    i.reuse_note.clone(),
                    i.disposal_note.clone(),
                ]
            })
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for row in &rows {
            for (idx, cell) in row.iter().enumerate() {
                widths[idx] = widths[idx].max(cell.chars().count());
            }
        }

        let mut out = Vec::with_capacity(rows.len() + 1);
        out.push(join_row(&header, &widths));
        for row in &rows {
            out.push(join_row(row, &widths));
        }
        out
    }

    fn tr(&self, key: &str) -> String {
        t_in(&self.locale, key)
    }

    fn tr_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        t_in_with_args(&self.locale, key, args)
    }
}

/// 废料 / CO₂ 的显示精度；DIRECT 模型的数值为每 m² 量级，需更多小数位
fn value_decimals(model: ImpactModel) -> usize {
    match model {
        ImpactModel::Direct => 4,
        ImpactModel::AreaScaled => 2,
    }
}

fn join_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// 千分位格式化（1234567.891 → "1,234,567.89"）
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// 默认报告文件名: green_seal_report_YYYY-MM-DD_HH-MM.txt
pub fn default_report_file_name(now: NaiveDateTime) -> String {
    format!("green_seal_report_{}.txt", now.format("%Y-%m-%d_%H-%M"))
}

/// 写入报告目录（目录不存在时创建），文件名自动生成
pub fn write_report_in_dir(dir: &Path, text: &str, now: NaiveDateTime) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    write_report(&dir.join(default_report_file_name(now)), text, now)
}

/// 写出报告
///
/// # 参数
/// - target: 已存在的目录（使用默认文件名）或文件路径
/// - now: 用于生成默认文件名
///
/// # 返回
/// - 实际写入的文件路径
pub fn write_report(target: &Path, text: &str, now: NaiveDateTime) -> io::Result<PathBuf> {
    let path = if target.is_dir() {
        target.join(default_report_file_name(now))
    } else {
        target.to_path_buf()
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(&path, text)?;
    info!(path = %path.display(), bytes = text.len(), "报告已写出");
    Ok(path)
}
