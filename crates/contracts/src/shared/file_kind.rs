//! Клиентская проверка типа файла перед загрузкой.
//!
//! Проверка только рекомендательная: окончательное решение принимает backend.

/// Описание выбранного файла без самих данных
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    /// MIME-тип, заявленный браузером (может быть пустым)
    pub media_type: String,
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size,
        }
    }

    pub fn is_supported(&self) -> bool {
        is_supported(&self.media_type, &self.name)
    }
}

/// audio/* и video/* по MIME-типу или `.pdf` по имени, регистр не важен
pub fn is_supported(media_type: &str, filename: &str) -> bool {
    let media_type = media_type.to_lowercase();
    if media_type.starts_with("audio") || media_type.starts_with("video") {
        return true;
    }
    filename.to_lowercase().ends_with(".pdf")
}

/// То же для необязательного файла: без файла загружать нечего
pub fn is_acceptable(file: Option<&FileMeta>) -> bool {
    file.is_some_and(FileMeta::is_supported)
}

/// Размер файла для подписи в UI: "512 B", "1.5 KB", "3.2 MB"
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{} B", bytes)
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / MB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_and_video_any_name() {
        assert!(is_supported("audio/mpeg", "track.bin"));
        assert!(is_supported("AUDIO/WAV", ""));
        assert!(is_supported("video/mp4", "notes.txt"));
        assert!(is_supported("Video/QuickTime", "clip"));
    }

    #[test]
    fn test_pdf_extension_any_type() {
        assert!(is_supported("", "report.pdf"));
        assert!(is_supported("application/octet-stream", "REPORT.PDF"));
        assert!(is_supported("text/plain", "scan.Pdf"));
    }

    #[test]
    fn test_rejects_other_files() {
        assert!(!is_supported("text/plain", "notes.txt"));
        assert!(!is_supported("application/pdf", "report.pdf.txt"));
        assert!(!is_supported("", ""));
        assert!(!is_supported("image/png", "pdf"));
    }

    #[test]
    fn test_no_file_is_not_acceptable() {
        assert!(!is_acceptable(None));
        let pdf = FileMeta::new("report.pdf", "application/pdf", 10);
        assert!(is_acceptable(Some(&pdf)));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
