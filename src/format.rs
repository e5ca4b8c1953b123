//! Response formatting.
//!
//! The model is instructed to emit three named sections; rendering replaces
//! those plain-text titles with markdown headings carrying a category icon.
//! Matching is exact-substring on purpose — prompt tuning relies on the
//! literal phrases, so an occurrence inside a sentence is rewritten too.
//! Escaping for the rendering surface is the caller's concern.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three answer sections the prompt instructs the model to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Medications,
    Dosage,
    Activities,
}

impl Section {
    pub const ALL: [Section; 3] = [Self::Medications, Self::Dosage, Self::Activities];

    /// Literal phrase the model is told to use as the section title.
    pub fn phrase(&self) -> &'static str {
        match self {
            Self::Medications => "Medication Recommendations",
            Self::Dosage => "Dosage Guidelines",
            Self::Activities => "Practical Activities",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Medications => "💊",
            Self::Dosage => "⚖️",
            Self::Activities => "🏃",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medications => "medications",
            Self::Dosage => "dosage",
            Self::Activities => "activities",
        }
    }

    /// Heading element replacing the plain phrase.
    fn heading(&self) -> String {
        format!("### {} {}", self.icon(), self.phrase())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A display-ready recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedRecommendation {
    /// The raw answer with section titles rewritten as headings; everything
    /// else is passed through verbatim.
    pub markdown: String,
    /// Sections whose title appeared at least once, in catalog order.
    pub sections: Vec<Section>,
}

/// Rewrite known section titles into headings. Every literal occurrence is
/// replaced; text without any recognized title passes through unchanged.
pub fn format_recommendation(raw: &str) -> FormattedRecommendation {
    let mut markdown = raw.to_string();
    let mut sections = Vec::new();

    for section in Section::ALL {
        if markdown.contains(section.phrase()) {
            markdown = markdown.replace(section.phrase(), &section.heading());
            sections.push(section);
        }
    }

    FormattedRecommendation { markdown, sections }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_headings_passes_through() {
        let raw = "Drink fluids and rest. No section titles here.";
        let formatted = format_recommendation(raw);
        assert_eq!(formatted.markdown, raw);
        assert!(formatted.sections.is_empty());
    }

    #[test]
    fn all_three_titles_become_headings() {
        let raw = "Medication Recommendations\nparacetamol\n\
                   Dosage Guidelines\n500mg\n\
                   Practical Activities\nrest";
        let formatted = format_recommendation(raw);
        assert!(formatted.markdown.contains("### 💊 Medication Recommendations"));
        assert!(formatted.markdown.contains("### ⚖️ Dosage Guidelines"));
        assert!(formatted.markdown.contains("### 🏃 Practical Activities"));
        assert_eq!(formatted.sections, Section::ALL.to_vec());
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let raw = "Dosage Guidelines\n...\nsee Dosage Guidelines above";
        let formatted = format_recommendation(raw);
        assert_eq!(formatted.markdown.matches("### ⚖️ Dosage Guidelines").count(), 2);
        assert_eq!(formatted.sections, vec![Section::Dosage]);
    }

    #[test]
    fn replacement_ignores_word_boundaries() {
        // occurrence inside a sentence is rewritten too
        let raw = "These Practical Activities help recovery.";
        let formatted = format_recommendation(raw);
        assert_eq!(
            formatted.markdown,
            "These ### 🏃 Practical Activities help recovery."
        );
    }

    #[test]
    fn surrounding_text_is_untouched() {
        let raw = "Intro <b>html</b> & such.\nDosage Guidelines\ntail";
        let formatted = format_recommendation(raw);
        assert!(formatted.markdown.starts_with("Intro <b>html</b> & such.\n"));
        assert!(formatted.markdown.ends_with("\ntail"));
    }

    #[test]
    fn section_catalog_is_consistent() {
        for section in Section::ALL {
            assert!(!section.phrase().is_empty());
            assert!(!section.icon().is_empty());
        }
        assert_eq!(format!("{}", Section::Medications), "medications");
        assert_eq!(
            serde_json::to_string(&Section::Dosage).unwrap(),
            "\"dosage\""
        );
    }
}
