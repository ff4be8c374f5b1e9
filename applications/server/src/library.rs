//! Song library scanning
//!
//! Builds the catalog from the audio files found in `<static>/songs`.

use crate::error::{Result, ServerError};
use jukebox_core::{Track, DEFAULT_THUMBNAIL};
use std::path::{Path, PathBuf};

/// Audio extensions listed in the catalog (compared case-insensitively)
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg"];

/// Song files under a static directory
#[derive(Debug, Clone)]
pub struct SongLibrary {
    static_dir: PathBuf,
}

impl SongLibrary {
    pub fn new(static_dir: impl Into<PathBuf>) -> Self {
        Self {
            static_dir: static_dir.into(),
        }
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    pub fn songs_dir(&self) -> PathBuf {
        self.static_dir.join("songs")
    }

    pub fn thumbnails_dir(&self) -> PathBuf {
        self.static_dir.join("thumbnails")
    }

    /// List every playable file, sorted by file name
    ///
    /// A missing songs directory is reported as [`ServerError::NotFound`].
    pub async fn scan(&self) -> Result<Vec<Track>> {
        let songs_dir = self.songs_dir();
        let mut entries = match tokio::fs::read_dir(&songs_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("Songs directory {:?} does not exist", songs_dir);
                return Err(ServerError::NotFound(format!(
                    "songs directory {}",
                    songs_dir.display()
                )));
            }
            Err(e) => return Err(e.into()),
        };
        let mut filenames = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let Ok(filename) = entry.file_name().into_string() else {
                tracing::warn!("Skipping non UTF-8 file name {:?}", entry.file_name());
                continue;
            };
            if is_audio_file(&filename) {
                filenames.push(filename);
            }
        }

        filenames.sort();

        let mut tracks = Vec::with_capacity(filenames.len());
        for filename in filenames {
            tracks.push(self.track_for(filename).await);
        }

        tracing::debug!("Scanned {} songs in {:?}", tracks.len(), self.songs_dir());
        Ok(tracks)
    }

    async fn track_for(&self, filename: String) -> Track {
        let stem = file_stem(&filename).to_string();
        let media_url = format!("/static/songs/{}", urlencoding::encode(&filename));

        let thumbnail = format!("{}.jpg", stem);
        let thumbnail_url = if tokio::fs::try_exists(self.thumbnails_dir().join(&thumbnail))
            .await
            .unwrap_or(false)
        {
            format!("/static/thumbnails/{}", urlencoding::encode(&thumbnail))
        } else {
            DEFAULT_THUMBNAIL.to_string()
        };

        Track::new(filename, stem, media_url, thumbnail_url)
    }
}

/// Whether `filename` has one of the audio extensions
pub fn is_audio_file(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            AUDIO_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

fn file_stem(filename: &str) -> &str {
    Path::new(filename)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn audio_extensions_ignore_case() {
        assert!(is_audio_file("a.mp3"));
        assert!(is_audio_file("B.WAV"));
        assert!(is_audio_file("c.Ogg"));
        assert!(!is_audio_file("cover.jpg"));
        assert!(!is_audio_file("mp3"));
        assert!(!is_audio_file("notes.mp3.txt"));
    }

    #[test]
    fn stem_keeps_inner_dots() {
        assert_eq!(file_stem("live.at.home.mp3"), "live.at.home");
        assert_eq!(file_stem("plain.ogg"), "plain");
    }

    #[tokio::test]
    async fn scan_sorts_and_resolves_thumbnails() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("songs/nested")).unwrap();
        std::fs::create_dir_all(dir.path().join("thumbnails")).unwrap();
        for name in ["b side.mp3", "a.OGG", "readme.txt"] {
            std::fs::write(dir.path().join("songs").join(name), b"").unwrap();
        }
        std::fs::write(dir.path().join("thumbnails/b side.jpg"), b"").unwrap();

        let tracks = SongLibrary::new(dir.path()).scan().await.unwrap();

        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].identifier, "a.OGG");
        assert_eq!(tracks[0].display_name, "a");
        assert_eq!(tracks[0].thumbnail_url, DEFAULT_THUMBNAIL);

        assert_eq!(tracks[1].identifier, "b side.mp3");
        assert_eq!(tracks[1].media_url, "/static/songs/b%20side.mp3");
        assert_eq!(tracks[1].thumbnail_url, "/static/thumbnails/b%20side.jpg");
    }

    #[tokio::test]
    async fn scan_without_songs_dir_is_not_found() {
        let dir = TempDir::new().unwrap();
        let result = SongLibrary::new(dir.path()).scan().await;
        assert!(matches!(result, Err(ServerError::NotFound(_))));
    }
}
