// File: crates/chart-svg/src/lib.rs
// Summary: Rendering collaborator turning primitive trees into SVG markup.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use inkchart_core::{Primitive, Shape, TextAnchor};

/// Serialize a primitive tree to an SVG document string.
///
/// `Group` nodes become `<svg>` roots, `Container` nodes become `<span>`
/// wrappers so multiple dials can pack side by side in a host document.
/// Node class/style become attributes, tooltips become `<title>` children.
pub fn to_svg(root: &Primitive) -> String {
    let mut out = String::new();
    write_node(root, &mut out);
    out
}

/// Write the SVG document for `root` to `path`, creating parent directories.
pub fn write_svg(root: &Primitive, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, to_svg(root)).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn write_node(p: &Primitive, out: &mut String) {
    match &p.shape {
        Shape::Group { width, height } => {
            out.push_str("<svg xmlns=\"http://www.w3.org/2000/svg\"");
            if let Some(w) = width {
                out.push_str(&format!(" width=\"{w}\""));
            }
            if let Some(h) = height {
                out.push_str(&format!(" height=\"{h}\""));
            }
            push_common(p, out);
            out.push('>');
            push_inner(p, out);
            out.push_str("</svg>");
        }
        Shape::Container => {
            out.push_str("<span");
            push_common(p, out);
            out.push('>');
            push_inner(p, out);
            out.push_str("</span>");
        }
        Shape::Circle { cx, cy, r } => {
            element(out, p, "circle", &format!(" r=\"{r}\" cx=\"{cx}\" cy=\"{cy}\""));
        }
        Shape::Rect { x, y, width, height } => {
            element(
                out,
                p,
                "rect",
                &format!(" x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\""),
            );
        }
        Shape::Line { x1, y1, x2, y2 } => {
            element(out, p, "line", &format!(" x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\""));
        }
        Shape::Path { d } => {
            element(out, p, "path", &format!(" d=\"{}\"", escape(d)));
        }
        Shape::Polyline { points } => {
            element(out, p, "polyline", &format!(" points=\"{}\"", points_attr(points)));
        }
        Shape::Polygon { points } => {
            element(out, p, "polygon", &format!(" points=\"{}\"", points_attr(points)));
        }
        Shape::Text { x, y, content, anchor, font_size } => {
            out.push_str(&format!("<text x=\"{x}\" y=\"{y}\""));
            match anchor {
                TextAnchor::Start => {} // SVG default
                TextAnchor::Middle => out.push_str(" text-anchor=\"middle\""),
                TextAnchor::End => out.push_str(" text-anchor=\"end\""),
            }
            if let Some(size) = font_size {
                out.push_str(&format!(" font-size=\"{size}px\""));
            }
            push_common(p, out);
            out.push('>');
            if let Some(title) = &p.title {
                out.push_str(&format!("<title>{}</title>", escape(title)));
            }
            out.push_str(&escape(content));
            out.push_str("</text>");
        }
    }
}

fn element(out: &mut String, p: &Primitive, tag: &str, geometry: &str) {
    out.push('<');
    out.push_str(tag);
    out.push_str(geometry);
    push_common(p, out);
    if p.title.is_none() && p.children.is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    push_inner(p, out);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_common(p: &Primitive, out: &mut String) {
    if let Some(class) = &p.class {
        out.push_str(&format!(" class=\"{}\"", escape(class)));
    }
    if let Some(style) = &p.style {
        out.push_str(&format!(" style=\"{}\"", escape(style)));
    }
}

fn push_inner(p: &Primitive, out: &mut String) {
    if let Some(title) = &p.title {
        out.push_str(&format!("<title>{}</title>", escape(title)));
    }
    for child in &p.children {
        write_node(child, out);
    }
}

fn points_attr(points: &[(f64, f64)]) -> String {
    let mut s = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        s.push_str(&format!("{x},{y}"));
    }
    s
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
