use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use vegimpact_rs::logger::{self, LogFormat, error, info};
use vegimpact_rs::vegetation::{
    AnalysisConfig, AnalysisReport, ConfidenceLevel, ResultStore, SpectralIndex, UploadRole,
    VegetationPipeline, catalog, is_allowed_extension,
};

#[derive(Parser, Debug)]
#[command(name = "vegimpact")]
#[command(about = "Scores vegetation change between a before and an after RGB image")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a before/after image pair
    Analyze {
        before: PathBuf,
        after: PathBuf,

        /// Where to write the result document
        #[arg(short, long, default_value = "vegetation_analysis_results.json")]
        output: PathBuf,

        /// Also keep uploads and results in this store, under a new session id
        #[arg(long, env = "VEGIMPACT_RESULTS_DIR")]
        results_dir: Option<PathBuf>,

        /// Reject images wider or taller than this many pixels
        #[arg(long, env = "VEGIMPACT_MAX_DIMENSION")]
        max_dimension: Option<usize>,
    },
    /// Print a stored result document
    Show {
        session_id: String,

        #[arg(long, env = "VEGIMPACT_RESULTS_DIR", default_value = "vegimpact_store")]
        results_dir: PathBuf,
    },
    /// Print the index catalog and scoring scheme as JSON
    Indices,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let format = if args.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    logger::init(&args.log_level, format);

    match args.command {
        Command::Analyze {
            before,
            after,
            output,
            results_dir,
            max_dimension,
        } => analyze(&before, &after, &output, results_dir.as_deref(), max_dimension),
        Command::Show {
            session_id,
            results_dir,
        } => {
            let store = ResultStore::open(&results_dir)?;
            let report = store.load(&session_id)?;
            println!("{}", report.to_json_pretty()?);
            Ok(())
        }
        Command::Indices => {
            println!("{}", serde_json::to_string_pretty(&catalog::catalog())?);
            Ok(())
        }
    }
}

fn analyze(
    before: &Path,
    after: &Path,
    output: &Path,
    results_dir: Option<&Path>,
    max_dimension: Option<usize>,
) -> anyhow::Result<()> {
    for path in [before, after] {
        if !path.exists() {
            bail!("Image not found: {}", path.display());
        }
        if !is_allowed_extension(path) {
            bail!(
                "Invalid file type: {}. Allowed types: PNG, JPG, JPEG, TIFF",
                path.display()
            );
        }
    }

    let config = AnalysisConfig::builder().max_dimension(max_dimension).build();
    let pipeline = VegetationPipeline::new(config);

    let report = match results_dir {
        Some(dir) => {
            let store = ResultStore::open(dir)
                .with_context(|| format!("opening result store {}", dir.display()))?;
            let session_id = ResultStore::new_session_id();
            let before_name = store.stage_upload(&session_id, UploadRole::Before, before)?;
            let after_name = store.stage_upload(&session_id, UploadRole::After, after)?;

            let report = pipeline
                .run(store.upload_path(&before_name), store.upload_path(&after_name))
                .with_session(session_id.clone(), Some(before_name), Some(after_name));
            let path = store.save(&report)?;
            info!(session_id = %session_id, path = %path.display(), "Stored session");
            report
        }
        None => pipeline.run(before, after),
    };

    std::fs::write(output, report.to_json_pretty()?)
        .with_context(|| format!("writing {}", output.display()))?;

    if !report.is_success() {
        let message = report.error.as_deref().unwrap_or("Unknown error");
        error!("Analysis failed: {}", message);
        bail!("Analysis failed: {}", message);
    }

    print_summary(&report);
    println!("\nResults saved to: {}", output.display());
    Ok(())
}

fn print_summary(report: &AnalysisReport) {
    let (Some(impact), Some(before), Some(after)) = (
        report.impact_analysis.as_ref(),
        report.before_metrics.as_ref(),
        report.after_metrics.as_ref(),
    ) else {
        return;
    };

    println!("ANALYSIS RESULTS");
    println!("{:=<50}", "");
    println!("Impact Score: {:.1}/100", impact.impact_score);
    println!("Category: {}", impact.category);
    println!("Confidence: {:.1}%", impact.confidence);
    if let Some(session_id) = &report.session_id {
        println!("Session: {}", session_id);
    }

    println!("\nVEGETATION CHANGES");
    println!("{:-<30}", "");
    println!("NDVI Change: {:+.1}%", impact.ndvi_change_percent);
    println!("EVI Change:  {:+.1}%", impact.evi_change_percent);
    println!("FVC Change:  {:+.1}%", impact.fvc_change_percent);
    println!("LAI Change:  {:+.1}%", impact.lai_change_percent);

    println!("\nBEFORE vs AFTER COMPARISON");
    println!("{:-<40}", "");
    println!("{:<15} {:<10} {:<10} {:<10}", "Metric", "Before", "After", "Change");
    println!("{:-<40}", "");
    for index in SpectralIndex::ALL {
        let before_mean = before.mean(index);
        let after_mean = after.mean(index);
        println!(
            "{:<15} {:<10.3} {:<10.3} {:+.3}",
            index.key().to_uppercase(),
            before_mean,
            after_mean,
            after_mean - before_mean
        );
    }

    println!("\nINTERPRETATION");
    println!("{:-<20}", "");
    println!("{}", impact.category.interpretation());
    println!("\nConfidence level: {:.1}%", impact.confidence);
    println!(
        "{}",
        ConfidenceLevel::from_confidence(impact.confidence).description()
    );
}
