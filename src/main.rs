// ==========================================
// 地震测线布设计算 - 命令行入口
// ==========================================
// 用法:
//   seismic-layout <config.json> [output.json]
//
// 读取测线配置,逐条计算布设,结果 JSON 写到 stdout 或输出文件。
// 环境变量 SEISMIC_LAYOUT_LOG_FORMAT=json 切换为 JSON 行日志。
// ==========================================

use anyhow::{bail, Context};
use seismic_layout::{logging, SurveyConfigFile, SurveyLayout, SurveyOrchestrator};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    match std::env::var("SEISMIC_LAYOUT_LOG_FORMAT") {
        Ok(v) if v.trim().eq_ignore_ascii_case("json") => logging::init_json(),
        _ => logging::init(),
    }

    let mut args = std::env::args().skip(1);
    let config_path = match args.next() {
        Some(p) => p,
        None => bail!("用法: seismic-layout <config.json> [output.json]"),
    };
    let output_path = args.next();

    tracing::info!(
        version = seismic_layout::VERSION,
        config = %config_path,
        "{}", seismic_layout::APP_NAME
    );

    let config = SurveyConfigFile::load(&config_path)
        .with_context(|| format!("无法加载配置文件: {}", config_path))?;
    let base_dir = Path::new(&config_path)
        .parent()
        .unwrap_or_else(|| Path::new("."));
    let requests = config
        .resolve_all(base_dir)
        .context("测线配置解析失败")?;

    let orchestrator = SurveyOrchestrator::new();
    let mut layouts: Vec<SurveyLayout> = Vec::with_capacity(requests.len());
    for (entry, result) in orchestrator.execute_batch(&requests).into_iter().enumerate() {
        let layout = result.with_context(|| format!("测线条目 {} 布设计算失败", entry))?;
        tracing::info!(
            entry,
            mode = %layout.mode(),
            num_shots = layout.summary.num_shots(),
            line_length = layout.summary.line_length(),
            "布设结果"
        );
        layouts.push(layout);
    }

    match output_path {
        Some(path) => {
            let file = File::create(&path).with_context(|| format!("无法创建输出文件: {}", path))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &layouts)?;
            writer.flush()?;
            tracing::info!(output = %path, count = layouts.len(), "布设结果已写出");
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &layouts)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}
