use {
  anyhow::{Context, ensure},
  api_error::ApiError,
  arguments::Arguments,
  async_trait::async_trait,
  axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
  },
  cache_entry::CacheEntry,
  clap::Parser,
  client::Client,
  config::Config,
  dashmap::DashMap,
  futures::stream::{self, StreamExt, TryStreamExt},
  http_fetcher::HttpFetcher,
  memory_cache::MemoryCache,
  serde::{Deserialize, Serialize},
  serde_json::Value,
  server::Server,
  std::{
    backtrace::BacktraceStatus,
    fs,
    net::SocketAddr,
    ops::Range,
    path::{Path, PathBuf},
    process,
    sync::Arc,
    time::Duration,
  },
  stories_query::StoriesQuery,
  story::Story,
  story_cache::StoryCache,
  story_page::StoryPage,
  story_service::StoryService,
  thiserror::Error,
  tokio::{net::TcpListener, time::Instant},
  upstream_fetch_error::UpstreamFetchError,
  utils::{contains_ignore_case, page_window},
};

#[cfg(test)]
use anyhow::{anyhow, bail};

mod api_error;
mod arguments;
mod cache_entry;
mod client;
mod config;
mod http_fetcher;
mod memory_cache;
mod server;
mod stories_query;
mod story;
mod story_cache;
mod story_page;
mod story_service;
mod upstream_fetch_error;
mod utils;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

async fn run() -> Result {
  let arguments = Arguments::parse();

  arguments.init_logging();

  let config = arguments.config()?;

  log::info!(
    "serving up to {} stories from {}",
    config.total_stories_count,
    config.top_stories_url()
  );

  let service = StoryService::new(
    Arc::new(MemoryCache::default()),
    config,
    Arc::new(Client::default()),
  );

  Server::new(service).run(arguments.bind).await
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    eprintln!("error: {error}");

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();
        eprintln!("because:");
      }

      eprintln!("- {error}");
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      eprintln!("backtrace:");
      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
