//! Preview — terminal rendering of a scene and its compiled module.
//!
//! Output is queued with crossterm styling onto any writer, so the same
//! code drives stdout and test buffers.

use std::io::Write;

use anyhow::Result;
use crossterm::{queue, style};

use crate::scene::{Scene, SceneObject};

/// Print one line per object, highlighting the selected one.
pub fn render_hierarchy<W: Write>(out: &mut W, scene: &Scene) -> Result<()> {
    let title = match &scene.project {
        Some(project) => format!("Hierarchy ({})", project.name),
        None => "Hierarchy".to_string(),
    };
    queue!(
        out,
        style::SetAttribute(style::Attribute::Bold),
        style::Print(title),
        style::SetAttribute(style::Attribute::Reset),
        style::Print("\n"),
    )?;

    if scene.objects.is_empty() {
        queue!(
            out,
            style::SetAttribute(style::Attribute::Dim),
            style::Print("  (no objects)\n"),
            style::SetAttribute(style::Attribute::Reset),
        )?;
    }

    for obj in &scene.objects {
        let selected = scene.selected_object_id == Some(obj.id);
        if selected {
            queue!(
                out,
                style::SetBackgroundColor(style::Color::Blue),
                style::Print(format!("> {}", object_summary(obj))),
                style::ResetColor,
                style::Print("\n"),
            )?;
        } else {
            queue!(out, style::Print(format!("  {}\n", object_summary(obj))))?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Print compiled source with dim line numbers and emphasized imports.
pub fn render_source<W: Write>(out: &mut W, code: &str) -> Result<()> {
    let lines: Vec<&str> = code.lines().collect();
    let width = lines.len().to_string().len();

    for (i, line) in lines.iter().enumerate() {
        queue!(
            out,
            style::SetAttribute(style::Attribute::Dim),
            style::Print(format!("{:>width$} │ ", i + 1)),
            style::SetAttribute(style::Attribute::Reset),
        )?;
        if line.starts_with("import ") {
            queue!(
                out,
                style::SetForegroundColor(style::Color::Cyan),
                style::Print(line),
                style::ResetColor,
            )?;
        } else {
            queue!(out, style::Print(line))?;
        }
        queue!(out, style::Print("\n"))?;
    }

    out.flush()?;
    Ok(())
}

pub fn object_summary(obj: &SceneObject) -> String {
    let mut summary = format!(
        "#{} {} ({}, {})",
        obj.id, obj.name, obj.position.x, obj.position.y
    );
    if !obj.script_refs.is_empty() {
        summary.push_str(&format!(" [{}]", obj.script_refs.join(", ")));
    }
    summary
}
