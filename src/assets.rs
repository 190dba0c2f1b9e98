#[cfg(not(debug_assertions))]
use include_dir::{Dir, DirEntry, include_dir};

#[cfg(not(debug_assertions))]
static EMBEDDED_TEMPLATES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Load Tera templates. Debug builds read `templates/` from disk so edits show
/// up on reload; release builds use the copy embedded at compile time.
#[cfg(debug_assertions)]
pub fn load_templates() -> Result<tera::Tera, tera::Error> {
    tera::Tera::new("templates/**/*.html")
}

#[cfg(not(debug_assertions))]
pub fn load_templates() -> Result<tera::Tera, tera::Error> {
    let mut templates = Vec::new();
    collect_templates(&EMBEDDED_TEMPLATES, &mut templates)?;

    let mut tera = tera::Tera::default();
    tera.add_raw_templates(templates)?;
    Ok(tera)
}

/// Embedded `.html` files keyed by their path under `templates/`.
#[cfg(not(debug_assertions))]
fn collect_templates(
    dir: &'static Dir<'static>,
    out: &mut Vec<(&'static str, &'static str)>,
) -> Result<(), tera::Error> {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(child) => collect_templates(child, out)?,
            DirEntry::File(file) if file.path().extension().is_some_and(|ext| ext == "html") => {
                let name = file
                    .path()
                    .to_str()
                    .ok_or_else(|| tera::Error::msg("embedded template has a non UTF-8 path"))?;
                let content = file
                    .contents_utf8()
                    .ok_or_else(|| tera::Error::msg(format!("template {name} is not UTF-8")))?;
                out.push((name, content));
            }
            DirEntry::File(_) => {}
        }
    }
    Ok(())
}
