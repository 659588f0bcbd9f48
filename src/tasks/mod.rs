// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Asynchronous application task processing.
//!
//! This module offloads blocking file and database I/O from the main UI
//! thread. A dedicated worker owns the storage connection and processes
//! [`AppTask`] requests one at a time, reporting results back to the
//! application via [`AppEvent`]s.
//!
//! The worker never sees the live catalog; saves receive a snapshot copy.

use std::{
    path::Path,
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;
use tracing::{error, info, warn};

use crate::{config::AppConfig, db::Storage, events::AppEvent, model::MovieRecord, source};

#[derive(Debug)]
pub(crate) enum AppTask {
    LoadCatalog,
    SaveCatalog(Vec<MovieRecord>),
}

/// Spawns a background thread to process application tasks.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let storage = match Storage::open(&config.storage_file) {
            Ok(storage) => Some(storage),
            Err(e) => {
                error!(error = %e, path = %config.storage_file, "storage unavailable, changes will not be saved");
                let _ = event_tx.send(AppEvent::Error(format!("{e:#}")));
                None
            }
        };

        while let Ok(task) = task_rx.recv() {
            let ctx = TaskContext {
                config: &config,
                event_tx: &event_tx,
                storage: storage.as_ref(),
            };

            if let Err(e) = handle_task(task, &ctx) {
                error!(error = %e, "task failed");
                let _ = event_tx.send(AppEvent::Error(format!("{e:#}")));
            }
        }
    });
}

/// Bundles shared resources required by task handlers.
struct TaskContext<'a> {
    config: &'a AppConfig,
    event_tx: &'a Sender<AppEvent>,
    storage: Option<&'a Storage>,
}

fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::LoadCatalog => load_catalog(ctx),
        AppTask::SaveCatalog(records) => save_catalog(ctx, records),
    }
}

/// Fetches the data file, then lets a stored snapshot replace it wholesale.
///
/// A data file failure is not fatal; the catalog simply starts empty.
fn load_catalog(ctx: &TaskContext) -> Result<()> {
    let records = initial_catalog(&ctx.config.data_file, ctx.storage);
    ctx.event_tx.send(AppEvent::CatalogLoaded(records))?;

    Ok(())
}

fn initial_catalog(data_file: &str, storage: Option<&Storage>) -> Vec<MovieRecord> {
    let mut records = match source::fetch_movies(Path::new(data_file)) {
        Ok(records) => {
            info!(count = records.len(), path = data_file, "loaded movie data");
            records
        }
        Err(e) => {
            error!(error = ?e, "failed to load movie data");
            vec![]
        }
    };

    if let Some(storage) = storage {
        match storage.load_catalog() {
            Ok(Some(stored)) => {
                info!(count = stored.len(), "stored catalog replaces movie data");
                records = stored;
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "ignoring unreadable stored catalog"),
        }
    }

    records
}

fn save_catalog(ctx: &TaskContext, records: Vec<MovieRecord>) -> Result<()> {
    let Some(storage) = ctx.storage else {
        anyhow::bail!("Storage is unavailable, the catalog was not saved");
    };

    storage.save_catalog(&records)?;
    info!(count = records.len(), "catalog saved");
    ctx.event_tx.send(AppEvent::CatalogSaved(records.len()))?;

    Ok(())
}
