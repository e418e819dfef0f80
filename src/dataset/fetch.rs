use std::fs::File;
use std::io;
use std::path::Path;

use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tokio::io::AsyncWriteExt;

use crate::error::Result;

/// Streams the survey archive to disk. Any network error aborts the run;
/// there is no retry. The file is written under a temporary name and renamed
/// into place so an interrupted download never looks complete.
pub async fn download_archive(client: &Client, url: &str, dest: &Path) -> Result<()> {
    tracing::info!("Downloading survey archive from {}", url);
    let response = client.get(url).send().await?.error_for_status()?;

    let pb = match response.content_length() {
        Some(len) => {
            let pb = ProgressBar::new(len);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes}")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            pb
        }
        None => ProgressBar::new_spinner(),
    };

    let partial = dest.with_extension("part");
    let mut file = tokio::fs::File::create(&partial).await?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        pb.inc(chunk.len() as u64);
    }
    file.flush().await?;
    tokio::fs::rename(&partial, dest).await?;

    pb.finish_with_message("Download complete");
    Ok(())
}

/// Extracts one named member from the archive. A missing member surfaces as
/// an archive error.
pub fn extract_member(archive_path: &Path, member: &str, dest: &Path) -> Result<()> {
    tracing::info!("Extracting {} from {}", member, archive_path.display());
    let file = File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    let mut entry = archive.by_name(member)?;
    let mut out = File::create(dest)?;
    io::copy(&mut entry, &mut out)?;
    Ok(())
}
