use std::env;
use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

use types::{Envelope, Meta};

pub mod types;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl OutputConfig {
    pub fn from_env() -> Self {
        let pretty = match env::var("PAPERDL_OUTPUT_PRETTY").ok().as_deref() {
            Some(v) => is_truthy(v),
            None => false,
        };
        OutputConfig { pretty }
    }
}

fn is_truthy(v: &str) -> bool {
    v.eq_ignore_ascii_case("1") || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes")
}

pub fn write_envelope(env: &Envelope, cfg: OutputConfig, w: &mut dyn Write) -> io::Result<()> {
    if cfg.pretty { serde_json::to_writer_pretty(&mut *w, env).map_err(io::Error::other)?; }
    else { serde_json::to_writer(&mut *w, env).map_err(io::Error::other)?; }
    writeln!(w)
}

pub fn print_plan<T: Serialize>(op: &'static str, plan: &T, meta: Option<Meta>) -> Result<()> {
    let env = Envelope::plan(op, plan, meta)?;
    emit_to_stdout(&env)
}

pub fn print_result<T: Serialize>(op: &'static str, result: &T, meta: Option<Meta>) -> Result<()> {
    let env = Envelope::result(op, result, meta)?;
    emit_to_stdout(&env)
}

fn emit_to_stdout(env: &Envelope) -> Result<()> {
    let mut out = io::stdout().lock();
    write_envelope(env, OutputConfig::from_env(), &mut out)?;
    out.flush()?;
    Ok(())
}
