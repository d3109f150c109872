//! Native host: GitHub release checks, background download, system browser.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::host::{AppInfo, Host, UpdateEvent, UpdateEventBus, current_platform};
use crate::state::UpdateSettings;

const APP_ID: &str = "com.cherry-studio.app";

#[derive(Debug, Clone, Deserialize)]
struct Release {
    tag_name: String,
    #[serde(default)]
    assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Clone, Deserialize)]
struct ReleaseAsset {
    name: String,
    browser_download_url: String,
}

/// Asset name fragment identifying this platform's build, e.g. `macos-aarch64`.
fn asset_suffix() -> String {
    let os = match std::env::consts::OS {
        "macos" => "macos",
        "windows" => "windows",
        other => other,
    };
    format!("{os}-{}", std::env::consts::ARCH)
}

fn find_asset<'a>(release: &'a Release, suffix: &str) -> Option<&'a ReleaseAsset> {
    release.assets.iter().find(|asset| asset.name.contains(suffix))
}

/// Parse the release tag and return it when newer than `current`.
/// Unparseable tags count as 0.0.0.
fn newer_version(tag: &str, current: &str) -> Result<Option<semver::Version>> {
    let remote_str = tag.strip_prefix('v').unwrap_or(tag);
    let remote = remote_str.parse().unwrap_or(semver::Version::new(0, 0, 0));
    let local: semver::Version = current.parse()?;
    Ok((remote > local).then_some(remote))
}

/// Percent complete, or `None` when the total size is unknown.
fn progress_percent(downloaded: u64, total: u64) -> Option<f32> {
    (total > 0).then(|| ((downloaded as f64 * 100.0 / total as f64).min(100.0)) as f32)
}

fn update_cache_dir() -> PathBuf {
    dirs::cache_dir().unwrap_or_else(std::env::temp_dir).join(APP_ID)
}

/// One background update check: everything the worker thread needs.
#[derive(Clone)]
struct UpdateJob {
    bus: UpdateEventBus,
    settings: UpdateSettings,
    cache_dir: PathBuf,
}

impl UpdateJob {
    /// Run the check to completion. Failures become an `update-error` event.
    fn run(&self) {
        if let Err(e) = self.check() {
            log::error!("Update check failed: {e}");
            self.bus.emit(UpdateEvent::error(e.to_string()));
        }
    }

    fn check(&self) -> Result<()> {
        let info = AppInfo::current();
        log::info!(
            "Update check: version={}, platform={}, asset={}",
            info.version,
            current_platform(),
            asset_suffix()
        );

        // No async runtime is shared with the UI; spin up a one-shot runtime
        tokio::runtime::Builder::new_current_thread().enable_all().build()?.block_on(async {
            let client = reqwest::Client::builder()
                .user_agent(format!("CherryStudio/{}", info.version))
                .build()?;

            let release: Release = client
                .get(format!("{}/latest", self.settings.releases_api))
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            let Some(remote) = newer_version(&release.tag_name, &info.version)? else {
                log::info!("No update: latest release is {}", release.tag_name);
                self.bus.emit(UpdateEvent::NotAvailable);
                return Ok(());
            };

            log::info!("Update found: v{remote}");
            self.bus.emit(UpdateEvent::Available { version: remote.to_string() });

            if !self.settings.auto_download {
                return Ok(());
            }

            let suffix = asset_suffix();
            let asset = find_asset(&release, &suffix).ok_or_else(|| {
                Error::UpdateCheckFailed(format!("Release v{remote} has no build for {suffix}"))
            })?;

            self.bus.emit(UpdateEvent::DownloadStarted);
            let path = self.download(&client, asset).await?;
            log::info!("Update v{remote} downloaded to {}", path.display());
            Ok::<(), Error>(())
        })
    }

    async fn download(&self, client: &reqwest::Client, asset: &ReleaseAsset) -> Result<PathBuf> {
        let resp = client.get(&asset.browser_download_url).send().await?.error_for_status()?;

        std::fs::create_dir_all(&self.cache_dir)?;
        let path = self.cache_dir.join(&asset.name);
        let file = std::fs::File::create(&path)?;

        // Never leave a partial file behind, whether the network or the disk failed
        if let Err(e) = self.write_body(resp, file).await {
            if let Err(rm) = std::fs::remove_file(&path) {
                log::warn!("Failed to remove partial download {}: {rm}", path.display());
            }
            return Err(e);
        }
        Ok(path)
    }

    async fn write_body(&self, resp: reqwest::Response, mut file: std::fs::File) -> Result<()> {
        use futures::StreamExt as _;
        use std::io::Write as _;

        let total = resp.content_length().unwrap_or(0);
        let mut stream = resp.bytes_stream();
        let mut downloaded: u64 = 0;
        let mut last_whole: u32 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk)?;
            downloaded += chunk.len() as u64;

            // Unknown length: creep toward 99 until the stream ends
            let percent = progress_percent(downloaded, total)
                .unwrap_or_else(|| 99f32.min((downloaded / (1024 * 100)) as f32));
            let whole = percent as u32;
            if whole != last_whole {
                last_whole = whole;
                self.bus.emit(UpdateEvent::DownloadProgress { percent });
            }
        }
        file.flush()?;

        if last_whole != 100 {
            self.bus.emit(UpdateEvent::DownloadProgress { percent: 100.0 });
        }
        Ok(())
    }
}

/// Host backed by the real OS and network.
///
/// At most one update check runs at a time. A check requested while another is
/// running joins it: no second request is made, and the running check's events
/// reach every bus subscriber, the new caller included.
pub struct DesktopHost {
    job: UpdateJob,
    in_flight: Arc<AtomicBool>,
}

impl DesktopHost {
    pub fn new(bus: UpdateEventBus, settings: UpdateSettings) -> Self {
        Self {
            job: UpdateJob { bus, settings, cache_dir: update_cache_dir() },
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    #[cfg(test)]
    fn with_cache_dir(mut self, cache_dir: PathBuf) -> Self {
        self.job.cache_dir = cache_dir;
        self
    }
}

impl Host for DesktopHost {
    fn app_info(&self) -> AppInfo {
        AppInfo::current()
    }

    fn check_for_update(&self) {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            log::debug!("Update check already running; its events answer this request");
            return;
        }

        let job = self.job.clone();
        let in_flight = self.in_flight.clone();

        let spawned = std::thread::Builder::new().name("update-check".into()).spawn({
            let in_flight = in_flight.clone();
            move || {
                job.run();
                in_flight.store(false, Ordering::SeqCst);
            }
        });

        if let Err(e) = spawned {
            log::error!("Failed to start update check: {e}");
            in_flight.store(false, Ordering::SeqCst);
            self.job.bus.emit(UpdateEvent::error(e.to_string()));
        }
    }

    fn open_website(&self, url: &str) {
        log::info!("Opening {url}");
        let result = open::that_detached(url).map_err(|e| Error::OpenUrl(format!("{url}: {e}")));
        if let Err(e) = result {
            log::error!("{e}");
        }
    }
}
