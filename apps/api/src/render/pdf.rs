//! PDF render driver — maps the abstract element sequence onto `genpdf`.
//!
//! The content builder emits an ordered, unpositioned element stream; genpdf
//! owns pagination, margins, and line breaking. Nothing in here feeds back
//! into the builder, so the core stays measurement-free.

use std::time::Instant;

use genpdf::elements::{Break, Paragraph, TableLayout};
use genpdf::fonts::{self, FontData, FontFamily};
use genpdf::style::{Color, Style};
use genpdf::{Element, Margins, Mm, PaperSize, Position, SimplePageDecorator, Size};
use tracing::info;

use crate::errors::RenderError;
use crate::layout::style::{self, RoleStyle};
use crate::layout::{DocumentElement, Role, StyleSet};

const PT_PER_MM: f64 = 72.0 / 25.4;
const PAGE_MARGIN_MM: f64 = 20.0;

fn pt_to_mm(pt: f64) -> Mm {
    Mm::from(pt / PT_PER_MM)
}

/// Loads the four-variant font family embedded into every document.
/// Called once at startup; a missing font directory fails the boot, not a
/// request.
pub fn load_fonts(dir: &str, name: &str) -> Result<FontFamily<FontData>, RenderError> {
    fonts::from_files(dir, name, None)
        .map_err(|err| RenderError::Font(format!("'{name}' from {dir}: {err}")))
}

/// Renders the element sequence into PDF bytes on US letter pages.
pub fn render_pdf(
    elements: &[DocumentElement],
    style: &StyleSet,
    fonts: FontFamily<FontData>,
    title: &str,
) -> Result<Vec<u8>, RenderError> {
    let start = Instant::now();

    let mut doc = genpdf::Document::new(fonts);
    doc.set_title(title);
    doc.set_paper_size(PaperSize::Letter);
    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(Margins::all(Mm::from(PAGE_MARGIN_MM)));
    doc.set_page_decorator(decorator);

    for element in elements {
        push_element(&mut doc, element, style)?;
    }

    let mut bytes = Vec::new();
    doc.render(&mut bytes)?;

    info!(
        "Rendered {} elements into {} bytes in {:.2?}",
        elements.len(),
        bytes.len(),
        start.elapsed()
    );
    Ok(bytes)
}

fn push_element(
    doc: &mut genpdf::Document,
    element: &DocumentElement,
    style: &StyleSet,
) -> Result<(), RenderError> {
    match element {
        // Headings and paragraphs differ only in role; the role carries the
        // full style.
        DocumentElement::Heading { role, text }
        | DocumentElement::Paragraph { role, text } => {
            doc.push(styled_paragraph(text, style.role(*role)));
        }
        DocumentElement::TwoColumnRow {
            left_role,
            left_text,
            right_role,
            right_text,
        } => {
            let rule = style.two_column();
            let mut table = TableLayout::new(vec![rule.left_weight, rule.right_weight]);
            table
                .row()
                .element(styled_paragraph(left_text, style.role(*left_role)))
                .element(styled_paragraph(right_text, style.role(*right_role)))
                .push()?;
            doc.push(table.padded(Margins::trbl(
                pt_to_mm(rule.top_padding_pt),
                Mm::from(0.0),
                pt_to_mm(rule.bottom_padding_pt),
                Mm::from(0.0),
            )));
        }
        DocumentElement::SeparatorLine => {
            let rule = style.separator();
            let line = RuleElement {
                thickness: pt_to_mm(rule.thickness_pt),
                color: color(rule.color),
            };
            doc.push(line.padded(Margins::trbl(
                pt_to_mm(rule.space_before_pt),
                Mm::from(0.0),
                pt_to_mm(rule.space_after_pt),
                Mm::from(0.0),
            )));
        }
        DocumentElement::VerticalSpace { points } => {
            let line_height = f64::from(style.role(Role::Normal).size_pt);
            doc.push(Break::new(points / line_height));
        }
    }
    Ok(())
}

fn styled_paragraph(text: &str, role: &RoleStyle) -> impl Element {
    Paragraph::new(text)
        .aligned(alignment(role.alignment))
        .styled(role_style(role))
        .padded(Margins::trbl(
            pt_to_mm(role.space_before_pt),
            Mm::from(0.0),
            pt_to_mm(role.space_after_pt),
            pt_to_mm(role.left_indent_pt),
        ))
}

/// Converts a role style into a genpdf character style.
fn role_style(role: &RoleStyle) -> Style {
    let mut result = Style::new().with_font_size(role.size_pt);
    match role.weight {
        style::FontWeight::Regular => {}
        style::FontWeight::Bold => result.set_bold(),
        style::FontWeight::Italic => result.set_italic(),
    }
    result.set_color(color(role.color));
    result
}

fn color(rgb: style::Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

fn alignment(align: style::Alignment) -> genpdf::Alignment {
    match align {
        style::Alignment::Left => genpdf::Alignment::Left,
        style::Alignment::Center => genpdf::Alignment::Center,
        style::Alignment::Right => genpdf::Alignment::Right,
    }
}

/// Full-width horizontal rule, used under section headers.
struct RuleElement {
    thickness: Mm,
    color: Color,
}

impl Element for RuleElement {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        area: genpdf::render::Area<'_>,
        _style: Style,
    ) -> Result<genpdf::RenderResult, genpdf::error::Error> {
        let width = area.size().width;
        // draw_line only honors the style's color; the configured thickness
        // still reserves vertical space through the result size below.
        area.draw_line(
            vec![
                Position::new(Mm::from(0.0), Mm::from(0.0)),
                Position::new(width, Mm::from(0.0)),
            ],
            Style::new().with_color(self.color),
        );

        let mut result = genpdf::RenderResult::default();
        result.size = Size::new(width, self.thickness);
        Ok(result)
    }
}
