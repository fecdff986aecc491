//! Downloads, archive extraction and search path placement

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use indicatif::{ProgressBar, ProgressStyle};

use super::reporter::logging_command;
use super::{SearchPath, Toolkit};
use crate::error::{Result, fs as fs_error, tool};

const USER_AGENT: &str = concat!("shellcheck-tasks/", env!("CARGO_PKG_VERSION"));

/// Toolkit working in the agent temp directory
pub struct SystemToolkit {
    temp_dir: PathBuf,
    search_path: Rc<SearchPath>,
    show_progress: bool,
}

impl SystemToolkit {
    pub fn new(temp_dir: PathBuf, search_path: Rc<SearchPath>) -> Self {
        Self {
            temp_dir,
            search_path,
            show_progress: true,
        }
    }

    /// Disable the download progress display
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    fn progress_bar(&self, total: Option<u64>, file_name: &str) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let (pb, template) = match total {
            Some(len) => (
                ProgressBar::new(len),
                "[{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}",
            ),
            None => (ProgressBar::new_spinner(), "{spinner} {bytes} {msg}"),
        };
        if let Ok(style) = ProgressStyle::default_bar().template(template) {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.set_message(file_name.to_string());
        pb
    }
}

/// Last path segment of a URL, used when no file name is given
fn file_name_from_url(url: &str) -> String {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or("download")
        .to_string()
}

impl Toolkit for SystemToolkit {
    fn download_tool(&self, url: &str, file_name: Option<&str>) -> Result<PathBuf> {
        let file_name = file_name.map_or_else(|| file_name_from_url(url), str::to_string);
        let destination = self.temp_dir.join(&file_name);
        fs::create_dir_all(&self.temp_dir)?;
        tracing::info!("Downloading {} to {}", url, destination.display());

        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| tool::download_failed(url, e))?;
        let mut response = client
            .get(url)
            .send()
            .map_err(|e| tool::download_failed(url, e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(tool::download_failed(
                url,
                format!("Unexpected HTTP response: {status}"),
            ));
        }

        let pb = self.progress_bar(response.content_length(), &file_name);
        let staging = tempfile::NamedTempFile::new_in(&self.temp_dir)?;
        {
            let mut writer = pb.wrap_write(BufWriter::new(staging.as_file()));
            response
                .copy_to(&mut writer)
                .map_err(|e| tool::download_failed(url, e))?;
            writer.flush()?;
        }
        pb.finish_and_clear();

        staging
            .persist(&destination)
            .map_err(|e| tool::download_failed(url, e.error))?;
        Ok(destination)
    }

    fn extract_zip(&self, archive: &Path) -> Result<PathBuf> {
        let archive_name = archive.display().to_string();
        fs::create_dir_all(&self.temp_dir)?;
        let destination = tempfile::Builder::new()
            .prefix("shellcheck-")
            .tempdir_in(&self.temp_dir)?
            .keep();

        let file = File::open(archive).map_err(|e| tool::extract_failed(&archive_name, e))?;
        let mut zip =
            zip::ZipArchive::new(file).map_err(|e| tool::extract_failed(&archive_name, e))?;
        zip.extract(&destination)
            .map_err(|e| tool::extract_failed(&archive_name, e))?;

        tracing::debug!("Extracted {} to {}", archive_name, destination.display());
        Ok(destination)
    }

    fn prepend_path(&self, dir: &Path) -> Result<()> {
        self.search_path.prepend(dir);
        println!(
            "{}",
            logging_command("task.prependpath", &[], &dir.display().to_string())
        );
        Ok(())
    }

    fn mkdir_p(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        Ok(())
    }

    fn mv(&self, from: &Path, to: &Path) -> Result<()> {
        fs::rename(from, to).map_err(|e| fs_error::move_failed(from, to, e))
    }
}
