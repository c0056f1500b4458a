use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::Args;
use tracing::Instrument;

use crate::error::DownloadError;
use crate::output::types::Meta;
use crate::telemetry::{self};
use crate::telemetry::ops::download::Phase as DownloadPhase;

pub mod extractor;
pub mod fetch;
pub mod types;
mod write;

use extractor::{strip_trailing_slash, Source};
use fetch::{Fetch, HttpFetcher};
use types::{DownloadPlan, DownloadResult, Downloaded, PlannedPaper};

#[derive(Args, Debug)]
pub struct DownloadCmd {
    /// Landing-page URLs (aclanthology.org or arxiv.org), processed in order
    pub urls: Vec<String>,
    /// Directory the PDFs are written to; created if missing
    #[arg(long = "save_dir", visible_alias = "save-dir", default_value = "./pdf/")]
    pub save_dir: PathBuf,
    /// Only dispatch the URLs and print the plan; nothing is fetched or written
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

pub async fn run(args: DownloadCmd) -> Result<()> {
    let root = telemetry::download().root_span_kv([
        ("urls", args.urls.len().to_string()),
        ("save_dir", args.save_dir.display().to_string()),
        ("dry_run", args.dry_run.to_string()),
    ]);
    execute(args).instrument(root).await
}

async fn execute(args: DownloadCmd) -> Result<()> {
    let log = telemetry::download();

    if args.dry_run {
        let plan = plan_batch(&args.urls, &args.save_dir)?;
        log.info(format!("📝 Download plan — papers={} save_dir={}", plan.papers.len(), plan.save_dir.display()));
        for p in &plan.papers { log.info(format!("  [{}] {}", p.source.name(), p.url)); }
        if telemetry::config::json_mode() { log.plan(&plan)?; }
        return Ok(());
    }

    let fetcher = HttpFetcher::new();
    let t0 = Instant::now();
    // stdout belongs to the envelope in JSON mode
    let papers = if telemetry::config::json_mode() {
        run_batch(&fetcher, &args.urls, &args.save_dir, &mut io::stderr()).await?
    } else {
        run_batch(&fetcher, &args.urls, &args.save_dir, &mut io::stdout()).await?
    };
    let duration_ms = t0.elapsed().as_millis();
    log.totals(papers.len(), args.urls.len(), duration_ms);

    if telemetry::config::json_mode() {
        let result = DownloadResult { save_dir: args.save_dir, papers };
        log.result(&result, Some(Meta { duration_ms: Some(duration_ms) }))?;
    }
    Ok(())
}

/// Dispatches every URL without touching the network. Fails on the first unsupported one.
pub fn plan_batch(urls: &[String], save_dir: &Path) -> Result<DownloadPlan, DownloadError> {
    let log = telemetry::download();
    let _s = log.span(&DownloadPhase::Plan).entered();
    let mut papers = Vec::with_capacity(urls.len());
    for url in urls {
        let url = strip_trailing_slash(url);
        let source = Source::from_url(url)?;
        papers.push(PlannedPaper { url: url.to_string(), source });
    }
    Ok(DownloadPlan { save_dir: save_dir.to_path_buf(), papers })
}

/// Downloads each URL in order, writing one progress line per saved paper.
/// The first failure aborts the batch; files saved before it stay on disk.
pub async fn run_batch<F: Fetch>(
    fetcher: &F,
    urls: &[String],
    save_dir: &Path,
    progress: &mut dyn Write,
) -> Result<Vec<Downloaded>> {
    let log = telemetry::download();
    let total = urls.len();
    let mut out = Vec::with_capacity(total);

    for (i, raw) in urls.iter().enumerate() {
        let url = strip_trailing_slash(raw);
        let source = {
            let _s = log.span_kv(&DownloadPhase::Dispatch, [("url", url.to_string())]).entered();
            Source::from_url(url)
        };
        let paper = match source {
            Ok(source) => download_one(fetcher, source, url, save_dir).await,
            Err(e) => Err(e),
        };
        let paper = match paper {
            Ok(p) => p,
            Err(e) => {
                log.warn_kv("aborting batch", [("url", url.to_string()), ("index", (i + 1).to_string()), ("kind", e.kind().to_string())]);
                return Err(e.into());
            }
        };
        out.push(paper);
        writeln!(progress, "Downloaded {}/{} papers.", i + 1, total)?;
        progress.flush()?;
    }

    Ok(out)
}

/// Landing page → title and PDF URL → PDF bytes → file. Shared by every source.
pub async fn download_one<F: Fetch>(
    fetcher: &F,
    source: Source,
    url: &str,
    save_dir: &Path,
) -> Result<Downloaded, DownloadError> {
    let log = telemetry::download();

    let html = fetcher.page(url)
        .instrument(log.span_kv(&DownloadPhase::FetchPage, [("url", url.to_string())]))
        .await?;
    let extracted = {
        let _s = log.span_kv(&DownloadPhase::Extract, [("source", source.name().to_string())]).entered();
        source.extractor().extract(url, &html)?
    };
    let body = fetcher.pdf(&extracted.pdf_url)
        .instrument(log.span_kv(&DownloadPhase::FetchPdf, [("pdf_url", extracted.pdf_url.clone())]))
        .await?;
    let save_path = {
        let _s = log.span_kv(&DownloadPhase::Save, [("bytes", body.len().to_string())]).entered();
        write::save_pdf(save_dir, &extracted.title, &body)?
    };

    log.paper_saved(source.name(), &extracted.title, &save_path);
    Ok(Downloaded {
        url: url.to_string(),
        source,
        pdf_url: extracted.pdf_url,
        title: extracted.title,
        save_path,
    })
}
