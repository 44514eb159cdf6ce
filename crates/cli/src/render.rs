//! Console rendering of the logo size report

use owo_colors::OwoColorize;
use report::SizeReport;
use std::io::{self, Write};
use std::path::Path;

const SEPARATOR: &str = "══════════════════════════════════════════════════";

/// Output styling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    /// Emit ANSI colors
    pub color: bool,
}

impl Style {
    /// Style without colors
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Style with colors
    pub fn colored() -> Self {
        Self { color: true }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn warning(&self, text: &str) -> String {
        if self.color {
            text.bold().yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn success(&self, text: &str) -> String {
        if self.color {
            text.bold().green().to_string()
        } else {
            text.to_string()
        }
    }

    fn dimmed(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Write the full report for `report`
///
/// `display_path` is the path shown to the user, usually the configured
/// path relative to the project root.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &SizeReport,
    display_path: &Path,
    style: Style,
) -> io::Result<()> {
    writeln!(out, "{}", style.heading("🐟 Relatório de tamanho do logo Lambari"))?;
    writeln!(out, "{}", style.dimmed(SEPARATOR))?;
    writeln!(out)?;
    writeln!(out, "📁 Arquivo: {}", display_path.display())?;
    writeln!(
        out,
        "📊 Tamanho atual: {:.2} MB ({} bytes)",
        report.size_mb, report.size_bytes
    )?;
    writeln!(out)?;

    if report.over_threshold {
        write_recommendations(out, report, style)?;
    } else {
        writeln!(out, "{}", style.success("✅ Logo está com tamanho otimizado!"))?;
    }

    writeln!(out)?;
    writeln!(out, "{}", style.dimmed(SEPARATOR))?;
    writeln!(out, "💡 Dica: rode este relatório novamente depois de substituir o arquivo.")?;

    Ok(())
}

fn write_recommendations<W: Write>(
    out: &mut W,
    report: &SizeReport,
    style: Style,
) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        style.warning(&format!(
            "⚠️ ATENÇÃO: O logo passa de {} bytes e está pesado para a web!",
            report.threshold_bytes
        ))
    )?;
    writeln!(out)?;
    writeln!(out, "📋 Recomendações de otimização:")?;
    writeln!(out, "   1. Redimensione para no máximo 512x512 pixels")?;
    writeln!(out, "   2. Comprima o PNG com TinyPNG: https://tinypng.com")?;
    writeln!(out, "   3. Ou compare formatos no Squoosh: https://squoosh.app")?;
    writeln!(out, "   4. Considere exportar uma versão WebP ou SVG")?;
    writeln!(
        out,
        "   5. Meta: manter o logo abaixo de {} bytes",
        report.threshold_bytes
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "📉 Redução estimada: {:.1}%",
        report.estimated_reduction_percent()
    )?;

    Ok(())
}
