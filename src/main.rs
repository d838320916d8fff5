use clap::Parser;
use heading_analyzer::results::{BatchResult, Notice};
use heading_analyzer::{Analyzer, AnalyzerConfig, KeywordSpec, clipboard, report, sources};
use std::process::ExitCode;
use std::time::Duration;

mod args;
use args::{Args, OutputFormat};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            eprintln!("error: failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut notices = Vec::new();
    let keywords = collect_keywords(&args, &mut notices);
    let collected = sources::collect_urls(&args.url_inputs());
    notices.extend(collected.notices);

    let analyzer = Analyzer::new(config).with_keywords(keywords);
    let mut batch = match analyzer.run(&collected.urls).await {
        Ok(batch) => batch,
        Err(e) => {
            ::log::error!("Failed to start batch: {}", e);
            notices.push(Notice::error(format!("Failed to start batch: {}", e)));
            BatchResult::default()
        }
    };

    // Input problems come before fetch problems
    notices.append(&mut batch.notices);
    batch.notices = notices;

    for notice in &batch.notices {
        eprintln!("{}", notice);
    }

    match args.format {
        OutputFormat::Table => {
            if !batch.pages.is_empty() {
                let table = report::render_table(&batch, analyzer.config().max_cell_width);
                println!("{}", table);
                if !args.no_trees {
                    print!("{}", report::render_trees(&batch));
                }
            }
        }
        OutputFormat::Json => match report::render_json(&batch) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("error: failed to serialize results: {}", e),
        },
    }

    if let Some(url) = &args.copy {
        copy_tree(&batch, url, analyzer.config().clipboard_hold());
    }

    ExitCode::SUCCESS
}

/// Config file (if any), then environment, then command-line overrides
fn load_config(args: &Args) -> heading_analyzer::Result<AnalyzerConfig> {
    let mut config = match &args.config {
        Some(path) => AnalyzerConfig::from_file(path)?,
        None => AnalyzerConfig::default(),
    }
    .with_env_overrides();

    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }
    Ok(config)
}

fn collect_keywords(args: &Args, notices: &mut Vec<Notice>) -> KeywordSpec {
    let mut lines = args.keywords.clone();

    if let Some(path) = &args.keyword_file {
        match sources::read_lines(path) {
            Ok(file_lines) => lines.extend(file_lines),
            Err(e) => {
                ::log::error!("Error reading keyword file {}: {}", path.display(), e);
                notices.push(Notice::error(format!(
                    "Error reading keyword file {}: {}",
                    path.display(),
                    e
                )));
            }
        }
    }

    KeywordSpec::from_lines(lines)
}

fn copy_tree(batch: &BatchResult, url: &str, hold: Duration) {
    let Some(tree) = batch.tree_for(url) else {
        eprintln!("warning: no results for {}, nothing copied", url);
        return;
    };

    match clipboard::copy_to_clipboard(&tree, hold) {
        Ok(()) => eprintln!("Copied full tree for {} to the clipboard", url),
        Err(e) => {
            ::log::error!("Clipboard copy failed: {}", e);
            eprintln!("error: could not copy tree for {}: {}", url, e);
        }
    }
}
