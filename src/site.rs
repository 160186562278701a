//! Static site generation on top of the Markdown converter.
//!
//! Pages are rendered by [`render_page`], which is pure. Everything else here
//! walks directories and writes files.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Config;
use crate::{extract_title, markdown_to_html};

/// Page template compiled into the binary, used when no template file is configured.
pub const DEFAULT_TEMPLATE: &str = include_str!("default_template.html");

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to convert {path}: {source}")]
    Convert {
        path: PathBuf,
        source: crate::Error,
    },

    #[error("no title found in {path}: expected a line starting with \"# \"")]
    NoTitle { path: PathBuf },
}

impl SiteError {
    fn io(action: &'static str, path: &Path) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.to_path_buf();
        move |source| SiteError::Io {
            action,
            path,
            source,
        }
    }
}

/// Summary of a finished build.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub static_files: usize,
    pub pages: Vec<PathBuf>,
}

/// Render a full page: converted body and title substituted into `template`.
///
/// Root-relative `href="/` and `src="/` references are rewritten to start
/// with `base_path`.
pub fn render_page(markdown: &str, template: &str, base_path: &str) -> crate::Result<String> {
    let content = markdown_to_html(markdown)?;
    let title = extract_title(markdown)?;

    let page = template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content);

    Ok(apply_base_path(page, base_path))
}

fn apply_base_path(page: String, base_path: &str) -> String {
    if base_path == "/" {
        return page;
    }
    page.replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}

/// Read the configured template, or fall back to [`DEFAULT_TEMPLATE`].
pub fn load_template(path: Option<&Path>) -> Result<String, SiteError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(SiteError::io("read template", path)),
        None => Ok(DEFAULT_TEMPLATE.to_string()),
    }
}

/// Clear the output directory, copy static assets and generate every page.
pub fn build(config: &Config) -> Result<BuildReport, SiteError> {
    let template = load_template(config.template.as_deref())?;

    if config.public_dir.exists() {
        log::warn!("clearing {}", config.public_dir.display());
        fs::remove_dir_all(&config.public_dir)
            .map_err(SiteError::io("remove", &config.public_dir))?;
    }

    let static_files = copy_static(&config.static_dir, &config.public_dir)?;
    let pages = generate_pages(
        &config.content_dir,
        &template,
        &config.public_dir,
        &config.base_path,
    )?;

    Ok(BuildReport {
        static_files,
        pages,
    })
}

/// Recursively copy `from` into `to`. Returns the number of files copied.
///
/// A missing source directory copies nothing.
pub fn copy_static(from: &Path, to: &Path) -> Result<usize, SiteError> {
    fs::create_dir_all(to).map_err(SiteError::io("create", to))?;
    if !from.is_dir() {
        log::debug!("no static directory at {}", from.display());
        return Ok(0);
    }

    let mut copied = 0;
    for entry in sorted_entries(from)? {
        let Some(name) = entry.file_name() else {
            continue;
        };
        let dest = to.join(name);
        if entry.is_dir() {
            copied += copy_static(&entry, &dest)?;
        } else {
            log::info!("copying {} -> {}", entry.display(), dest.display());
            fs::copy(&entry, &dest).map_err(SiteError::io("copy", &entry))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Render every `.md` file under `content_dir` to the same relative path
/// under `public_dir`, with an `.html` extension.
pub fn generate_pages(
    content_dir: &Path,
    template: &str,
    public_dir: &Path,
    base_path: &str,
) -> Result<Vec<PathBuf>, SiteError> {
    let mut written = Vec::new();
    generate_pages_into(content_dir, template, public_dir, base_path, &mut written)?;
    Ok(written)
}

fn generate_pages_into(
    dir: &Path,
    template: &str,
    dest_dir: &Path,
    base_path: &str,
    written: &mut Vec<PathBuf>,
) -> Result<(), SiteError> {
    log::debug!("walking {}", dir.display());
    for entry in sorted_entries(dir)? {
        let Some(name) = entry.file_name() else {
            continue;
        };
        if entry.is_dir() {
            generate_pages_into(&entry, template, &dest_dir.join(name), base_path, written)?;
        } else if entry.extension().is_some_and(|ext| ext == "md") {
            let dest = dest_dir.join(name).with_extension("html");
            generate_page(&entry, template, &dest, base_path)?;
            written.push(dest);
        }
    }
    Ok(())
}

/// Render a single Markdown file to `dest`, creating parent directories.
pub fn generate_page(
    from: &Path,
    template: &str,
    dest: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    log::info!("generating {} -> {}", from.display(), dest.display());

    let markdown = fs::read_to_string(from).map_err(SiteError::io("read", from))?;
    let page = render_page(&markdown, template, base_path).map_err(|source| match source {
        crate::Error::NoTitle => SiteError::NoTitle {
            path: from.to_path_buf(),
        },
        source => SiteError::Convert {
            path: from.to_path_buf(),
            source,
        },
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(SiteError::io("create", parent))?;
    }
    fs::write(dest, page).map_err(SiteError::io("write", dest))
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let read_error = SiteError::io("list", dir);
    let mut entries = fs::read_dir(dir)
        .and_then(|iter| {
            iter.map(|entry| entry.map(|e| e.path()))
                .collect::<std::io::Result<Vec<_>>>()
        })
        .map_err(read_error)?;
    entries.sort();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEMPLATE: &str = "<title>{{ Title }}</title><main>{{ Content }}</main>";

    #[test]
    fn renders_title_and_content() {
        let page = render_page("# Hello\n\nworld", TEMPLATE, "/").unwrap();
        assert_eq!(
            page,
            "<title>Hello</title><main><div><h1>Hello</h1><p>world</p></div></main>"
        );
    }

    #[test]
    fn rewrites_root_relative_links() {
        let page = render_page(
            "# T\n\n[home](/index.html) ![logo](/logo.png) [ext](https://x.org)",
            "{{ Content }}",
            "/blog/",
        )
        .unwrap();
        assert_eq!(
            page,
            "<div><h1>T</h1><p><a href=\"/blog/index.html\">home</a> \
             <img src=\"/blog/logo.png\" alt=\"logo\"></img> \
             <a href=\"https://x.org\">ext</a></p></div>"
        );
    }

    #[test]
    fn page_without_title_fails() {
        assert_eq!(
            render_page("just text", TEMPLATE, "/"),
            Err(crate::Error::NoTitle)
        );
    }

    #[test]
    fn default_template_has_placeholders() {
        assert!(DEFAULT_TEMPLATE.contains(TITLE_PLACEHOLDER));
        assert!(DEFAULT_TEMPLATE.contains(CONTENT_PLACEHOLDER));
    }

    #[test]
    fn load_template_falls_back_to_default() {
        assert_eq!(load_template(None).unwrap(), DEFAULT_TEMPLATE);
    }
}
