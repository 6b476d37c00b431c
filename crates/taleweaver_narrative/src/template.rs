//! Prompt templates with named placeholders.
//!
//! Template text uses `{name}` placeholders, where `name` is an identifier
//! (`[A-Za-z_][A-Za-z0-9_]*`). `{{` and `}}` stand for literal braces.
//!
//! Bound values are spliced in as literal text and never re-scanned, so a
//! value that itself contains `{user_input}` (an untrusted story, say) cannot
//! introduce new placeholders.

use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;
use taleweaver_core::{PromptMessage, Role};
use taleweaver_error::{TemplateError, TemplateErrorKind};

/// Placeholder name to value mapping.
///
/// # Examples
///
/// ```
/// use taleweaver_narrative::Bindings;
///
/// let bindings = Bindings::new().with("theme", "Fantasy").with("delimiter", "```");
/// assert_eq!(bindings.get("theme"), Some("Fantasy"));
/// assert_eq!(bindings.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings(BTreeMap<String, String>);

impl Bindings {
    /// Empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding, consuming and returning the mapping.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace a binding.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Whether `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bound names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Union of two mappings; `other` wins on conflicts.
    pub fn merged(&self, other: &Bindings) -> Bindings {
        let mut merged = self.clone();
        for (name, value) in &other.0 {
            merged.insert(name.clone(), value.clone());
        }
        merged
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Bindings {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MessageTemplate {
    role: Role,
    segments: Vec<Segment>,
}

impl MessageTemplate {
    fn parse(role: Role, text: &str) -> Result<Self, TemplateError> {
        Ok(Self {
            role,
            segments: parse_segments(text)?,
        })
    }

    fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    fn substitute(&self, bindings: &Bindings) -> Self {
        let mut segments: Vec<Segment> = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            let resolved = match segment {
                Segment::Placeholder(name) => match bindings.get(name) {
                    Some(value) => Segment::Literal(value.to_string()),
                    None => segment.clone(),
                },
                Segment::Literal(_) => segment.clone(),
            };
            match (segments.last_mut(), resolved) {
                (Some(Segment::Literal(prev)), Segment::Literal(next)) => prev.push_str(&next),
                (_, resolved) => segments.push(resolved),
            }
        }
        Self {
            role: self.role,
            segments,
        }
    }

    fn render(&self, bindings: &Bindings) -> Result<PromptMessage, TemplateError> {
        let mut content = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => content.push_str(text),
                Segment::Placeholder(name) => {
                    let value = bindings.get(name).ok_or_else(|| {
                        TemplateError::new(TemplateErrorKind::MissingBinding(name.clone()))
                    })?;
                    content.push_str(value);
                }
            }
        }
        Ok(PromptMessage::new(self.role, content))
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Escapes, placeholders and stray braces, in match priority order.
static PLACEHOLDER_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"\{\{|\}\}|\{([^{}]*)\}|\{|\}"));

fn placeholder_pattern() -> Result<&'static Regex, TemplateError> {
    match &*PLACEHOLDER_PATTERN {
        Ok(re) => Ok(re),
        Err(e) => Err(TemplateError::new(TemplateErrorKind::Pattern(format!(
            "Invalid placeholder regex: {}",
            e
        )))),
    }
}

/// Split template text into literal runs and placeholders.
fn parse_segments(text: &str) -> Result<Vec<Segment>, TemplateError> {
    let re = placeholder_pattern()?;

    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut last = 0;

    for cap in re.captures_iter(text) {
        let Some(token) = cap.get(0) else {
            continue;
        };
        literal.push_str(&text[last..token.start()]);
        last = token.end();

        match token.as_str() {
            "{{" => literal.push('{'),
            "}}" => literal.push('}'),
            "{" => {
                return Err(TemplateError::new(
                    TemplateErrorKind::UnterminatedPlaceholder(token.start()),
                ));
            }
            "}" => {
                return Err(TemplateError::new(TemplateErrorKind::UnmatchedBrace(
                    token.start(),
                )));
            }
            placeholder => {
                let name = cap.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
                if !is_identifier(name) {
                    return Err(TemplateError::new(TemplateErrorKind::InvalidPlaceholder(
                        placeholder.to_string(),
                    )));
                }
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(name.to_string()));
            }
        }
    }

    literal.push_str(&text[last..]);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

/// An immutable, ordered sequence of role-tagged message templates.
///
/// # Examples
///
/// ```
/// use taleweaver_core::Role;
/// use taleweaver_narrative::{Bindings, PromptTemplate};
///
/// let template = PromptTemplate::from_messages([
///     (Role::System, "Story: {delimiter}{story}{delimiter}"),
///     (Role::Human, "{action}"),
/// ])
/// .unwrap();
///
/// let bound = template
///     .partial(&Bindings::from([("delimiter", "###"), ("story", "A cave.")]))
///     .unwrap();
/// assert_eq!(bound.input_variables(), vec!["action"]);
///
/// let messages = bound.render(&Bindings::from([("action", "I wait.")])).unwrap();
/// assert_eq!(messages[0].content, "Story: ###A cave.###");
/// assert_eq!(messages[1].content, "I wait.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    messages: Vec<MessageTemplate>,
    bound: BTreeSet<String>,
}

impl PromptTemplate {
    /// Template whose whole text is one human message.
    pub fn single(text: &str) -> Result<Self, TemplateError> {
        Self::from_messages([(Role::Human, text)])
    }

    /// Template from ordered `(role, text)` pairs.
    pub fn from_messages<'a, I>(messages: I) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = (Role, &'a str)>,
    {
        let messages = messages
            .into_iter()
            .map(|(role, text)| MessageTemplate::parse(role, text))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            messages,
            bound: BTreeSet::new(),
        })
    }

    /// Placeholders still needing a value, in first-seen order.
    pub fn input_variables(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.messages
            .iter()
            .flat_map(MessageTemplate::placeholders)
            .filter(|name| seen.insert(*name))
            .map(str::to_string)
            .collect()
    }

    /// Names fixed by earlier partial bindings.
    pub fn bound_variables(&self) -> impl Iterator<Item = &str> {
        self.bound.iter().map(String::as_str)
    }

    /// Number of messages the template renders.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Fix some placeholders now, returning a reduced template.
    ///
    /// Names the template does not use are ignored.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyBound` if a name was fixed by an earlier partial.
    pub fn partial(&self, bindings: &Bindings) -> Result<Self, TemplateError> {
        if let Some(name) = bindings.names().find(|name| self.bound.contains(*name)) {
            return Err(TemplateError::new(TemplateErrorKind::AlreadyBound(
                name.to_string(),
            )));
        }

        let required: BTreeSet<String> = self.input_variables().into_iter().collect();
        let mut bound = self.bound.clone();
        bound.extend(
            bindings
                .names()
                .filter(|name| required.contains(*name))
                .map(str::to_string),
        );

        Ok(Self {
            messages: self
                .messages
                .iter()
                .map(|message| message.substitute(bindings))
                .collect(),
            bound,
        })
    }

    /// Render every message with all placeholders substituted.
    ///
    /// Extra names in `bindings` are ignored, including names already fixed
    /// by a partial.
    ///
    /// # Errors
    ///
    /// Returns `MissingBinding` naming the first required placeholder without
    /// a value.
    pub fn render(&self, bindings: &Bindings) -> Result<Vec<PromptMessage>, TemplateError> {
        if let Some(missing) = self
            .input_variables()
            .into_iter()
            .find(|name| !bindings.contains(name))
        {
            return Err(TemplateError::new(TemplateErrorKind::MissingBinding(
                missing,
            )));
        }

        self.messages
            .iter()
            .map(|message| message.render(bindings))
            .collect()
    }
}
