//! Content builder — the deterministic record → element transformation.
//!
//! `build_content` maps a resume record plus a resolved [`StyleSet`] into an
//! ordered sequence of abstract document elements. The sequence order IS the
//! document's visual order; the page-flow driver owns pagination. The
//! builder is a pure, single-pass function of its two inputs: no side
//! effects, no retries, no partial output.
//!
//! Canonical section order: header → summary → skills → experience →
//! education → certifications.

use crate::errors::ContentError;
use crate::layout::style::{Role, StyleSet};
use crate::models::resume::{
    Certification, Education, JobDescription, JobExperience, ResumeData, Skills,
};

/// An abstract, unpositioned document element consumed by the page-flow
/// driver. Immutable after emission.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentElement {
    Heading {
        role: Role,
        text: String,
    },
    Paragraph {
        role: Role,
        text: String,
    },
    /// One visual row with independently styled left and right text.
    TwoColumnRow {
        left_role: Role,
        left_text: String,
        right_role: Role,
        right_text: String,
    },
    /// Horizontal rule decorated with the style set's separator rule.
    SeparatorLine,
    /// Explicit vertical gap, in points. Part of the element vocabulary for
    /// the driver; the builder itself emits spacing through role styles.
    #[allow(dead_code)]
    VerticalSpace { points: f64 },
}

/// Builds the full element sequence for one resume record.
///
/// Fails with [`ContentError::MalformedRecord`] when `name` is empty or
/// `experience` has no entries; every other missing optional field is
/// silently skipped.
pub fn build_content(
    record: &ResumeData,
    style: &StyleSet,
) -> Result<Vec<DocumentElement>, ContentError> {
    if record.name.trim().is_empty() {
        return Err(ContentError::MalformedRecord(
            "name must be a non-empty string".to_string(),
        ));
    }
    if record.experience.is_empty() {
        return Err(ContentError::MalformedRecord(
            "experience must contain at least one entry".to_string(),
        ));
    }

    let mut content = Vec::new();

    push_header(&mut content, record);

    if let Some(summary) = record.summary.as_deref().filter(|s| !s.is_empty()) {
        push_section_title(&mut content, "Professional Summary");
        content.push(DocumentElement::Paragraph {
            role: Role::Normal,
            text: summary.to_string(),
        });
    }

    if let Some(skills) = record.skills.as_ref().filter(|s| !s.is_empty()) {
        push_skills(&mut content, skills);
    }

    push_experience(&mut content, &record.experience, style);

    if let Some(education) = record.education.as_deref().filter(|e| !e.is_empty()) {
        push_education(&mut content, education);
    }

    if let Some(certifications) = record.certifications.as_deref().filter(|c| !c.is_empty()) {
        push_certifications(&mut content, certifications);
    }

    Ok(content)
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

/// Name, title, and the contact line. The title paragraph is emitted even
/// when the record has no title (empty string); the contact line is omitted
/// entirely when no contact field is present.
fn push_header(content: &mut Vec<DocumentElement>, record: &ResumeData) {
    content.push(DocumentElement::Heading {
        role: Role::Name,
        text: record.name.clone(),
    });
    content.push(DocumentElement::Paragraph {
        role: Role::Title,
        text: record.title.clone().unwrap_or_default(),
    });

    // Priority order: email, phone, linkedin.
    let contact = &record.contact;
    let present: Vec<&str> = [
        contact.email.as_deref(),
        contact.phone.as_deref(),
        contact.linkedin.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|field| !field.is_empty())
    .collect();

    if !present.is_empty() {
        content.push(DocumentElement::Paragraph {
            role: Role::ContactInfo,
            text: present.join(" | "),
        });
    }
}

/// The section banner: a heading and its underline, always emitted together.
fn push_section_title(content: &mut Vec<DocumentElement>, title: &str) {
    content.push(DocumentElement::Heading {
        role: Role::SectionHeader,
        text: title.to_string(),
    });
    content.push(DocumentElement::SeparatorLine);
}

fn push_skills(content: &mut Vec<DocumentElement>, skills: &Skills) {
    push_section_title(content, "Skills");

    match skills {
        Skills::Flat(skills) => {
            content.push(DocumentElement::Paragraph {
                role: Role::Normal,
                text: skills.join(", "),
            });
        }
        Skills::Categorized(categories) => {
            for (category, skills) in categories {
                content.push(DocumentElement::Paragraph {
                    role: Role::Normal,
                    text: format!("{category}: {}", skills.join(", ")),
                });
            }
        }
    }
}

fn push_experience(content: &mut Vec<DocumentElement>, jobs: &[JobExperience], style: &StyleSet) {
    push_section_title(content, "Professional Experience");

    for job in jobs {
        content.push(DocumentElement::TwoColumnRow {
            left_role: Role::ItemTitle,
            left_text: format!("{} - {}", job.title, job.company),
            right_role: Role::ItemSubtitle,
            right_text: job.date.clone(),
        });

        match &job.description {
            // One bullet paragraph per item. With bullets disabled the glyph
            // is empty but the separating space remains.
            JobDescription::Bullets(items) => {
                for item in items {
                    content.push(DocumentElement::Paragraph {
                        role: Role::BulletPoint,
                        text: format!("{} {item}", style.bullet_glyph()),
                    });
                }
            }
            // A scalar description is one plain paragraph, never bulleted.
            JobDescription::Text(text) => {
                content.push(DocumentElement::Paragraph {
                    role: Role::Normal,
                    text: text.clone(),
                });
            }
        }
    }
}

fn push_education(content: &mut Vec<DocumentElement>, education: &[Education]) {
    push_section_title(content, "Education");

    for entry in education {
        content.push(DocumentElement::TwoColumnRow {
            left_role: Role::ItemTitle,
            left_text: entry.degree.clone(),
            right_role: Role::ItemSubtitle,
            right_text: entry.year.clone(),
        });
        content.push(DocumentElement::Paragraph {
            role: Role::Normal,
            text: entry.institution.clone(),
        });
        if let Some(description) = entry.description.as_deref().filter(|d| !d.is_empty()) {
            content.push(DocumentElement::Paragraph {
                role: Role::Normal,
                text: description.to_string(),
            });
        }
    }
}

fn push_certifications(content: &mut Vec<DocumentElement>, certifications: &[Certification]) {
    push_section_title(content, "Certifications");

    for cert in certifications {
        content.push(DocumentElement::TwoColumnRow {
            left_role: Role::ItemTitle,
            left_text: cert.name.clone(),
            right_role: Role::ItemSubtitle,
            right_text: cert.date.clone(),
        });
        content.push(DocumentElement::Paragraph {
            role: Role::Normal,
            text: cert.organization.clone(),
        });
    }
}
