use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Download;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Plan, Dispatch, FetchPage, Extract, FetchPdf, Save }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Plan => "plan",
        Phase::Dispatch => "dispatch",
        Phase::FetchPage => "fetch_page",
        Phase::Extract => "extract",
        Phase::FetchPdf => "fetch_pdf",
        Phase::Save => "save",
    }}
    fn span(&self) -> Span { match self {
        Phase::Plan => info_span!("plan"),
        Phase::Dispatch => info_span!("dispatch"),
        Phase::FetchPage => info_span!("fetch_page"),
        Phase::Extract => info_span!("extract"),
        Phase::FetchPdf => info_span!("fetch_pdf"),
        Phase::Save => info_span!("save"),
    }}
}

impl OpMarker for Download {
    const NAME: &'static str = "download";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("download") }
}
