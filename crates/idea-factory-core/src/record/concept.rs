//! Concept blocks inside a batch body
//!
//! A batch body holds one block per concept, each opened by a
//! `## Concept <n>: <title>` heading and running until the next one.

const CONCEPT_HEADING: &str = "## Concept ";

/// One story idea within a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept {
    /// 1-based position of the block in the body
    pub ordinal: usize,
    /// Number as written in the heading (informational only)
    pub number: String,
    /// Title from the heading, possibly empty
    pub title: String,
    /// Lines following the heading up to the next concept
    pub content: String,
}

/// Labelled sections pulled out of a concept's content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptDetails {
    pub high_concept: String,
    pub synopsis: String,
    pub key_elements: Vec<String>,
    pub initial_thoughts: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    HighConcept,
    Synopsis,
    KeyElements,
    InitialThoughts,
}

impl Concept {
    /// Title, or `Concept <n>` when the heading has none
    pub fn display_title(&self) -> String {
        if self.title.is_empty() {
            format!("Concept {}", self.number)
        } else {
            self.title.clone()
        }
    }

    /// Title and content joined, as used for matching
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.content)
    }

    /// The block as it appears in the batch, heading included
    pub fn to_markdown(&self) -> String {
        let heading = if self.title.is_empty() {
            format!("{}{}", CONCEPT_HEADING, self.number)
        } else {
            format!("{}{}: {}", CONCEPT_HEADING, self.number, self.title)
        };
        format!("{}\n{}", heading, self.content)
    }

    /// Extract the labelled `**Section**:` parts of the content
    pub fn details(&self) -> ConceptDetails {
        let mut details = ConceptDetails::default();
        let mut current = None;

        for line in self.content.lines() {
            let line = line.trim();
            if let Some(rest) = line.strip_prefix("**High Concept**:") {
                current = Some(Section::HighConcept);
                details.high_concept = rest.trim().to_string();
            } else if let Some(rest) = line.strip_prefix("**Synopsis**:") {
                current = Some(Section::Synopsis);
                details.synopsis = rest.trim().to_string();
            } else if line.starts_with("**Key Elements**:") {
                current = Some(Section::KeyElements);
            } else if let Some(rest) = line.strip_prefix("**Initial Thoughts**:") {
                current = Some(Section::InitialThoughts);
                details.initial_thoughts = rest.trim().to_string();
            } else if line.is_empty() || line == "---" || line.starts_with("**") {
                continue;
            } else {
                match current {
                    Some(Section::KeyElements) => {
                        if let Some(item) = line.strip_prefix('-') {
                            details.key_elements.push(item.trim().to_string());
                        }
                    }
                    Some(Section::Synopsis) => append_sentence(&mut details.synopsis, line),
                    Some(Section::InitialThoughts) => {
                        append_sentence(&mut details.initial_thoughts, line)
                    }
                    Some(Section::HighConcept) | None => {}
                }
            }
        }

        details
    }
}

fn append_sentence(target: &mut String, line: &str) {
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(line);
}

/// Split a batch body into its concept blocks, in body order
pub fn extract_concepts(body: &str) -> Vec<Concept> {
    let mut concepts: Vec<Concept> = Vec::new();

    for line in body.lines() {
        if let Some(rest) = line.strip_prefix(CONCEPT_HEADING) {
            let (number, title) = match rest.split_once(':') {
                Some((number, title)) => (number.trim(), title.trim()),
                None => (rest.trim(), ""),
            };
            concepts.push(Concept {
                ordinal: concepts.len() + 1,
                number: number.to_string(),
                title: title.to_string(),
                content: String::new(),
            });
        } else if let Some(current) = concepts.last_mut() {
            current.content.push_str(line);
            current.content.push('\n');
        }
    }

    concepts
}
