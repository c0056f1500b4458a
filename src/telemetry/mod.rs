pub mod config;
pub mod ctx;
pub mod ops;

use ctx::LogCtx;

pub fn download() -> LogCtx<ops::download::Download> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
