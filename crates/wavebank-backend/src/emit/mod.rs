//! Artifact emitters.
//!
//! Both emitters render the same structure: per-wave sample arrays, one
//! reference table per bank (members plus the first member again), a master
//! bank table and a parallel bank-name table, alongside the layout
//! constants. Output is a pure function of the [`WavetableSet`], with no
//! timestamps, so identical inputs give byte-identical artifacts.

mod c_header;
mod rust_module;

pub use c_header::render_c_header;
pub use rust_module::render_rust_module;

use crate::bank::WavetableSet;

/// Samples per line in emitted arrays.
pub const SAMPLES_PER_LINE: usize = 10;

/// Artifact syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// C/C++ header with `static const` arrays.
    #[default]
    CHeader,
    /// Rust module with `pub static` arrays.
    RustModule,
}

impl OutputFormat {
    /// Returns the format name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::CHeader => "c_header",
            OutputFormat::RustModule => "rust_module",
        }
    }

    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::CHeader => "h",
            OutputFormat::RustModule => "rs",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Renders a set in the requested syntax.
pub fn render(set: &WavetableSet, format: OutputFormat) -> String {
    match format {
        OutputFormat::CHeader => render_c_header(set),
        OutputFormat::RustModule => render_rust_module(set),
    }
}

/// Formats samples as indented, right-aligned rows separated by commas.
///
/// `trailing_comma` controls whether the final row ends with a comma.
pub(crate) fn format_sample_rows(samples: &[i16], trailing_comma: bool) -> String {
    let rows: Vec<String> = samples
        .chunks(SAMPLES_PER_LINE)
        .map(|chunk| {
            let values: Vec<String> = chunk.iter().map(|v| format!("{:6}", v)).collect();
            format!("    {}", values.join(", "))
        })
        .collect();

    let mut out = rows.join(",\n");
    if trailing_comma && !out.is_empty() {
        out.push(',');
    }
    out
}

/// One-line summary of the legacy waves behind each bank.
pub(crate) fn bank_summary(set: &WavetableSet) -> Vec<String> {
    set.banks
        .iter()
        .map(|bank| {
            let sources: Vec<String> = bank
                .waves
                .iter()
                .map(|w| w.source_index.to_string())
                .collect();
            format!("{}: waves {}", bank.name, sources.join(", "))
        })
        .collect()
}
