use anyhow::Result;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::Path;
use tracing::{info, debug, warn, Span};

use crate::output::{self, types::Meta};

pub trait PhaseSpan {
    fn name(&self) -> &'static str;
    fn span(&self) -> Span;
}

pub trait OpMarker {
    const NAME: &'static str;
    type Phase: PhaseSpan;
    fn root_span() -> Span;
}

pub struct LogCtx<O: OpMarker> {
    pub(crate) json: bool,
    pub(crate) _marker: PhantomData<O>,
}

impl<O: OpMarker> LogCtx<O> {
    fn op_name(&self) -> &'static str { O::NAME }

    pub fn root_span(&self) -> Span { O::root_span() }

    pub fn root_span_kv<'a, T>(&self, fields: T) -> Span
    where
        T: IntoIterator<Item = (&'a str, String)>,
    {
        let span = self.root_span();
        let details = kv_to_string(fields);
        if details.is_empty() {
            info!(op = %self.op_name(), "start");
        } else {
            info!(op = %self.op_name(), details = %details, "start");
        }
        span
    }

    pub fn span(&self, ph: &O::Phase) -> Span { ph.span() }

    pub fn span_kv<'a, T>(&self, ph: &O::Phase, fields: T) -> Span
    where
        T: IntoIterator<Item = (&'a str, String)>,
    {
        let span = self.span(ph);
        let details = kv_to_string(fields);
        if details.is_empty() {
            debug!(op = %self.op_name(), phase = ph.name(), "span_start");
        } else {
            debug!(op = %self.op_name(), phase = ph.name(), details = %details, "span_start");
        }
        span
    }

    pub fn info(&self, msg: impl AsRef<str>) { if self.json { info!(op = %self.op_name(), "{}", msg.as_ref()); } else { info!("{}", msg.as_ref()); } }

    pub fn warn_kv<'a, D>(&self, msg: &str, kv: D)
    where
        D: IntoIterator<Item = (&'a str, String)>,
    {
        if self.json { let details = kv_to_string(kv); warn!(op = %self.op_name(), details = %details, "{}", msg); }
        else {
            let details = kv_to_string(kv);
            if details.is_empty() { warn!("{}", msg); } else { warn!("{} ({})", msg, details); }
        }
    }

    pub fn plan<T: Serialize>(&self, plan: &T) -> Result<()> { output::print_plan(self.op_name(), plan, None) }
    pub fn result<T: Serialize>(&self, result: &T, meta: Option<Meta>) -> Result<()> { output::print_result(self.op_name(), result, meta) }
}

impl LogCtx<crate::telemetry::ops::download::Download> {
    pub fn paper_saved(&self, source: &str, title: &str, path: &Path) {
        if self.json { info!(op = %self.op_name(), source, title, path = %path.display(), "paper_saved"); }
        else { info!("📄 {} [{}] -> {}", title, source, path.display()); }
    }

    pub fn totals(&self, downloaded: usize, total: usize, duration_ms: u128) {
        if self.json { info!(op = %self.op_name(), downloaded, total, duration_ms = duration_ms as u64, "download_totals"); }
        else { info!("📊 Download totals — downloaded={} total={} duration_ms={}", downloaded, total, duration_ms); }
    }
}

fn kv_to_string<'a, T>(kv: T) -> String
where
    T: IntoIterator<Item = (&'a str, String)>,
{
    let mut parts: Vec<String> = Vec::new();
    for (k, v) in kv { parts.push(format!("{}={}", k, v)); }
    parts.join(" ")
}
