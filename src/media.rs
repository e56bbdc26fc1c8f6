use std::io::Write;
use std::path::{Path, PathBuf};

use ashpd::desktop::ResponseError;
use ashpd::desktop::screenshot::Screenshot;
use image::ImageReader;
use image::codecs::jpeg::JpegEncoder;
use rfd::AsyncFileDialog;
use thiserror::Error;
use uuid::Uuid;

/// JPEG quality for imported photos.
const JPEG_QUALITY: u8 = 80;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "bmp"];

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("photo access was not allowed")]
    PermissionDenied,

    #[error("screenshot portal failed: {0}")]
    Portal(String),

    #[error("could not import photo: {0}")]
    Import(String),
}

impl From<image::ImageError> for MediaError {
    fn from(err: image::ImageError) -> Self {
        MediaError::Import(err.to_string())
    }
}

impl From<std::io::Error> for MediaError {
    fn from(err: std::io::Error) -> Self {
        MediaError::Import(err.to_string())
    }
}

/// Capture a new photo through the XDG screenshot portal. The portal mediates
/// consent and lets the user pick a region; `Ok(None)` means they backed out.
pub async fn capture_photo(photo_dir: PathBuf) -> Result<Option<PathBuf>, MediaError> {
    let request = Screenshot::request().interactive(true).modal(true);
    let response = match request.send().await.and_then(|reply| reply.response()) {
        Ok(response) => response,
        Err(ashpd::Error::Response(ResponseError::Cancelled)) => return Ok(None),
        Err(ashpd::Error::Portal(ashpd::PortalError::NotAllowed(_))) => {
            return Err(MediaError::PermissionDenied);
        }
        Err(err) => return Err(MediaError::Portal(err.to_string())),
    };

    let source = response
        .uri()
        .to_file_path()
        .map_err(|_| MediaError::Portal("portal returned a non-file URI".to_string()))?;

    let imported = import_off_thread(source, photo_dir).await?;
    Ok(Some(imported))
}

/// Pick an existing image with the system file dialog. `Ok(None)` means the
/// dialog was dismissed without a choice.
pub async fn pick_photo(photo_dir: PathBuf) -> Result<Option<PathBuf>, MediaError> {
    let mut dialog = AsyncFileDialog::new()
        .set_title("Choose a photo")
        .add_filter("Images", IMAGE_EXTENSIONS);
    if let Some(pictures) = dirs::picture_dir() {
        dialog = dialog.set_directory(pictures);
    }

    let Some(file) = dialog.pick_file().await else {
        return Ok(None);
    };

    let imported = import_off_thread(file.path().to_path_buf(), photo_dir).await?;
    Ok(Some(imported))
}

/// Run the blocking decode and re-encode on a worker thread.
async fn import_off_thread(source: PathBuf, photo_dir: PathBuf) -> Result<PathBuf, MediaError> {
    tokio::task::spawn_blocking(move || import_photo(&source, &photo_dir))
        .await
        .map_err(|e| MediaError::Import(e.to_string()))?
}

/// Re-encode a source image as JPEG into the photo directory under a fresh
/// name. Items reference the imported copy, never the original file.
pub fn import_photo(source: &Path, photo_dir: &Path) -> Result<PathBuf, MediaError> {
    std::fs::create_dir_all(photo_dir)?;

    let decoded = ImageReader::open(source)?.with_guessed_format()?.decode()?;
    // JPEG has no alpha channel
    let rgb = decoded.into_rgb8();

    let dest = photo_dir.join(format!("{}.jpg", Uuid::new_v4()));
    let file = std::fs::File::create(&dest)?;
    let mut writer = std::io::BufWriter::new(file);
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY))?;
    writer.flush()?;

    Ok(dest)
}

/// Delete an imported photo that nothing references anymore. Refuses paths
/// outside the photo directory.
pub fn discard_import(path: &Path, photo_dir: &Path) {
    if !path.starts_with(photo_dir) {
        return;
    }
    if let Err(e) = std::fs::remove_file(path) {
        log::warn!("could not remove imported photo {}: {}", path.display(), e);
    }
}

/// Empty the photo directory. Items never outlive the session, so at startup
/// everything in it is a leftover import.
pub fn sweep_photo_dir(photo_dir: &Path) {
    let Ok(entries) = std::fs::read_dir(photo_dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if let Err(e) = std::fs::remove_file(&path) {
            log::warn!("could not remove stale photo {}: {}", path.display(), e);
        }
    }
}
