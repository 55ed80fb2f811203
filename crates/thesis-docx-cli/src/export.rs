//! One export run over a session directory.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use thesis_docx_config::{Config, VariantOverrides};
use thesis_docx_engine::{
    AssembledDocument, Assembler, Chapter, ChapterFile, ExportMode, SessionError, SessionStore,
    TitlePage, Variant, VariantProfile,
    io::{self, ChapterCounts, WordDocumentsRecord},
    models::chapters_of,
    render,
};

/// Chapters live here, and documents are written here unless configured
/// otherwise.
pub const THESIS_DIR: &str = "03-thesis";
const OUTPUT_STEM: &str = "dissertation-full";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Language {
    /// English chapters (`chapter1.md`)
    En,
    /// Korean chapters (`chapter1-ko.md`)
    Ko,
}

impl Language {
    pub fn variant(self) -> Variant {
        match self {
            Language::En => Variant::Primary,
            Language::Ko => Variant::Secondary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Word document
    Docx,
    /// Block sequence as JSON
    Json,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Docx => "docx",
            OutputFormat::Json => "json",
        }
    }
}

pub struct Export {
    session_dir: PathBuf,
    thesis_dir: PathBuf,
    output_dir: PathBuf,
    format: OutputFormat,
    session: Option<SessionStore>,
    chapters: Vec<ChapterFile>,
    assembler: Assembler,
    primary: VariantProfile,
    secondary: VariantProfile,
}

impl Export {
    pub fn new(
        session_dir: &Path,
        config: &Config,
        output_dir: Option<PathBuf>,
        format: OutputFormat,
    ) -> Result<Self> {
        let thesis_dir = session_dir.join(THESIS_DIR);
        let chapters = io::list_chapters(&thesis_dir)
            .with_context(|| format!("No thesis directory in {}", session_dir.display()))?;

        let session = match SessionStore::open(session_dir) {
            Ok(store) => Some(store),
            Err(SessionError::NotFound(path)) => {
                log::warn!("{} not found, using default title", path.display());
                None
            }
            Err(e) => return Err(e.into()),
        };

        let title = session
            .as_ref()
            .and_then(|s| s.topic())
            .map(str::to_owned)
            .or_else(|| config.default_title.clone());
        let today = chrono::Local::now().date_naive();

        let output_dir = output_dir
            .or_else(|| config.output_dir.clone())
            .unwrap_or_else(|| thesis_dir.clone());

        Ok(Self {
            session_dir: session_dir.to_path_buf(),
            thesis_dir,
            output_dir,
            format,
            session,
            chapters,
            assembler: Assembler::new(TitlePage::new(title, today)),
            primary: profile(Variant::Primary, &config.primary),
            secondary: profile(Variant::Secondary, &config.secondary),
        })
    }

    fn profile(&self, variant: Variant) -> &VariantProfile {
        match variant {
            Variant::Primary => &self.primary,
            Variant::Secondary => &self.secondary,
        }
    }

    /// Both variants without claim extraction. Records the documents in the
    /// session file.
    pub fn standard(mut self) -> Result<Vec<PathBuf>> {
        let mut written = vec![];
        let mut record = WordDocumentsRecord::new(
            None,
            None,
            ChapterCounts::default(),
            chrono::Utc::now(),
        );

        for variant in Variant::ALL {
            let files = chapters_of(&self.chapters, variant);
            if files.is_empty() {
                log::info!("No {} chapters, skipping", self.profile(variant).language);
                continue;
            }

            let doc = self.assemble(variant, &files, ExportMode::Standard)?;
            let path = self.write(&doc, None)?;
            let shown = Some(self.relative_to_session(&path));
            match variant {
                Variant::Primary => {
                    record.english = shown;
                    record.chapters.english = files.len();
                }
                Variant::Secondary => {
                    record.korean = shown;
                    record.chapters.korean = files.len();
                }
            }
            written.push(path);
        }

        if written.is_empty() {
            bail!("No chapter files found in {}", self.thesis_dir.display());
        }

        if self.format == OutputFormat::Docx
            && let Some(session) = self.session.as_mut()
        {
            session
                .record_word_documents(&record)
                .context("Failed to update session file")?;
        }
        Ok(written)
    }

    /// One variant with claim blocks moved into the endnotes appendix.
    pub fn endnotes(self, language: Language) -> Result<Vec<PathBuf>> {
        let variant = language.variant();
        let files = chapters_of(&self.chapters, variant);
        if files.is_empty() {
            bail!(
                "No {} chapter files found in {}",
                self.profile(variant).language,
                self.thesis_dir.display()
            );
        }

        let doc = self.assemble(variant, &files, ExportMode::Endnotes(variant))?;
        log::info!("Extracted {} claims", doc.claims.len());
        if !doc.warnings.is_empty() {
            log::warn!("{} claim blocks were not closed", doc.warnings.len());
        }

        let path = self.write(&doc, Some("endnotes"))?;
        Ok(vec![path])
    }

    fn assemble(
        &self,
        variant: Variant,
        files: &[ChapterFile],
        mode: ExportMode,
    ) -> Result<AssembledDocument> {
        let chapters = files
            .iter()
            .map(|file| -> Result<Chapter> {
                let text = io::read_chapter(file, &self.thesis_dir)
                    .with_context(|| format!("Failed to read {}", file.display_name()))?;
                Ok(Chapter::new(file.display_name(), text))
            })
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "Assembling {} document from {} chapters",
            self.profile(variant).language,
            chapters.len()
        );
        Ok(self.assembler.assemble(self.profile(variant), &chapters, mode))
    }

    fn write(&self, doc: &AssembledDocument, suffix: Option<&str>) -> Result<PathBuf> {
        let profile = self.profile(doc.variant);
        let bytes = match self.format {
            OutputFormat::Docx => render::docx::render(&doc.blocks, profile)?,
            OutputFormat::Json => render::json::render(&doc.blocks, profile)?,
        };
        let path = self
            .output_dir
            .join(output_file_name(&profile.language, suffix, self.format));
        io::write_output(&path, &bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    fn relative_to_session(&self, path: &Path) -> String {
        path.strip_prefix(&self.session_dir)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

/// Built-in profile with configured overrides applied.
pub fn profile(variant: Variant, overrides: &VariantOverrides) -> VariantProfile {
    let mut profile = variant.default_profile();
    if let Some(language) = &overrides.language {
        profile.language = language.clone();
    }
    if let Some(font) = &overrides.font {
        profile.font = font.clone();
    }
    if let Some(subtitle) = &overrides.subtitle {
        profile.subtitle = subtitle.clone();
    }
    profile
}

/// `dissertation-full-en.docx`, `dissertation-full-ko-endnotes.docx`, ...
pub fn output_file_name(language: &str, suffix: Option<&str>, format: OutputFormat) -> String {
    match suffix {
        Some(suffix) => format!("{OUTPUT_STEM}-{language}-{suffix}.{}", format.extension()),
        None => format!("{OUTPUT_STEM}-{language}.{}", format.extension()),
    }
}
