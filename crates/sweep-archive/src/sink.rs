// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! The injected write capability (§4.4) and a concrete default backed by
//! the `tar` crate, so the workspace has a working, non-stubbed archive
//! format instead of leaving it purely abstract.

use std::fs::OpenOptions;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sweep_core::{ArchiveError, ToolMetadata};

use crate::gather::RunData;

/// Mutates the shared archive under the caller's lock. Implementations may
/// assume at most one call is in flight at a time (§4.4 invariant).
#[async_trait]
pub trait ArchiveSink: Send + Sync {
    async fn write(
        &self,
        archive_path: &Path,
        group_name: &str,
        data: &RunData,
        tool_metadata: &ToolMetadata,
        system_name: &str,
    ) -> Result<(), ArchiveError>;
}

/// Appends one group per run to a tar archive at `archivePath`. A group is
/// represented as a directory prefix (`<group_name>/...`) holding the
/// gathered payload plus a couple of small metadata entries.
///
/// Tar has no native append-without-rewrite operation once a trailer has
/// been written, so each call strips the previous two-zero-block end
/// marker, seeks back to that offset, and writes a fresh trailer after the
/// new entries — functionally append, one run at a time.
#[derive(Debug, Default, Clone, Copy)]
pub struct TarArchiveSink;

#[async_trait]
impl ArchiveSink for TarArchiveSink {
    async fn write(
        &self,
        archive_path: &Path,
        group_name: &str,
        data: &RunData,
        tool_metadata: &ToolMetadata,
        system_name: &str,
    ) -> Result<(), ArchiveError> {
        let archive_path = archive_path.to_path_buf();
        let group_name = group_name.to_string();
        let data = data.clone();
        let tool_metadata = tool_metadata.clone();
        let system_name = system_name.to_string();

        tokio::task::spawn_blocking(move || {
            append_group(&archive_path, &group_name, &data, &tool_metadata, &system_name)
        })
        .await
        .map_err(|source| ArchiveError::Write {
            path: PathBuf::new(),
            group: String::new(),
            source: io::Error::other(source),
        })?
    }
}

const TRAILER_LEN: u64 = 1024;

fn append_group(
    archive_path: &Path,
    group_name: &str,
    data: &RunData,
    tool_metadata: &ToolMetadata,
    system_name: &str,
) -> Result<(), ArchiveError> {
    let open_err = |source| ArchiveError::Open {
        path: archive_path.to_path_buf(),
        source,
    };
    let write_err = |source| ArchiveError::Write {
        path: archive_path.to_path_buf(),
        group: group_name.to_string(),
        source,
    };

    let content_len = existing_content_len(archive_path).map_err(open_err)?;

    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .write(true)
        .open(archive_path)
        .map_err(open_err)?;
    file.set_len(content_len).map_err(write_err)?;
    file.seek(SeekFrom::Start(content_len)).map_err(write_err)?;

    let mut builder = tar::Builder::new(file);
    append_entry(
        &mut builder,
        &format!("{group_name}/system_name.txt"),
        system_name.as_bytes(),
    )
    .map_err(write_err)?;
    append_entry(
        &mut builder,
        &format!("{group_name}/tool_metadata.txt"),
        tool_metadata.as_str().as_bytes(),
    )
    .map_err(write_err)?;
    append_entry(&mut builder, &format!("{group_name}/run_data.bin"), data.as_bytes())
        .map_err(write_err)?;
    builder.into_inner().map_err(write_err)?;

    Ok(())
}

/// Length of the archive's actual entry content, i.e. the file size minus a
/// trailing end-of-archive marker if one is present. A fresh/missing file
/// has zero content.
fn existing_content_len(archive_path: &Path) -> io::Result<u64> {
    if !archive_path.exists() {
        return Ok(0);
    }
    let mut file = std::fs::File::open(archive_path)?;
    let len = file.metadata()?.len();
    if len < TRAILER_LEN || len % 512 != 0 {
        return Ok(len);
    }
    let mut trailer = [0u8; TRAILER_LEN as usize];
    file.seek(SeekFrom::Start(len - TRAILER_LEN))?;
    file.read_exact(&mut trailer)?;
    if trailer.iter().all(|&b| b == 0) {
        Ok(len - TRAILER_LEN)
    } else {
        Ok(len)
    }
}

fn append_entry<W: Write>(builder: &mut tar::Builder<W>, path: &str, bytes: &[u8]) -> io::Result<()> {
    let mut header = tar::Header::new_gnu();
    header.set_size(bytes.len() as u64);
    header.set_mode(0o644);
    header.set_mtime(0);
    header.set_cksum();
    builder.append_data(&mut header, path, bytes)
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
