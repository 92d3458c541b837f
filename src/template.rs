//! Named configuration elements and the composer joining them into one
//! document.
//!
//! Every element owns its nested fragments, so a generated document is a tree
//! of elements passed by value. [`compose`] walks the whole tree once before
//! rendering and rejects it if two elements share an identity but render
//! differently.

use std::{collections::HashMap, fmt};

use indexmap::IndexMap;
use snafu::Snafu;

use crate::internal_events::DuplicateElementSkipped;

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum ComposeError {
    #[snafu(display(
        "Element \"{}\" is defined more than once with different contents",
        name
    ))]
    DuplicateElement { name: String },
}

/// A named, renderable piece of pipeline configuration.
pub trait Element: fmt::Debug + Send + Sync {
    /// Identity of the element, unique within a generated document.
    ///
    /// Top-level elements use their bare component id, as transforms and
    /// sinks share one id space. Nested fragments use `<component id>.<field>`.
    fn name(&self) -> String;

    /// Render the element, composing its nested fragments in place.
    fn render(&self) -> Result<String, ComposeError>;

    /// Fragments nested inside this element.
    fn fragments(&self) -> Vec<&Fragment> {
        Vec::new()
    }
}

/// A nested element that may legitimately be absent.
///
/// An empty fragment still renders, to the empty string, so the enclosing
/// element keeps the same shape either way.
#[derive(Debug, Default)]
pub enum Fragment {
    Present(Box<dyn Element>),
    #[default]
    Empty,
}

impl Fragment {
    pub fn new(element: impl Element + 'static) -> Self {
        Fragment::Present(Box::new(element))
    }

    pub fn element(&self) -> Option<&dyn Element> {
        match self {
            Fragment::Present(element) => Some(element.as_ref()),
            Fragment::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Fragment::Empty)
    }
}

/// Render a single, possibly empty, fragment.
pub fn compose_one(fragment: &Fragment) -> Result<String, ComposeError> {
    match fragment {
        Fragment::Present(element) => Ok(element.render()?.trim_end_matches('\n').to_string()),
        Fragment::Empty => Ok(String::new()),
    }
}

/// Render every element in order and join them, separated by a blank line,
/// into one document.
///
/// Identical redefinitions of an element are emitted once. Nothing is
/// returned if any identity in the tree is claimed twice with different
/// contents.
pub fn compose(elements: &[Box<dyn Element>]) -> Result<String, ComposeError> {
    let mut seen = HashMap::new();
    let mut document = IndexMap::new();

    for element in elements {
        if let Some(body) = register(&mut seen, element.as_ref())? {
            document.insert(element.name(), body);
        }
    }

    Ok(document
        .into_values()
        .map(|body| body.trim_end_matches('\n').to_string())
        .collect::<Vec<_>>()
        .join("\n\n"))
}

// Returns the rendered body the first time an identity is seen.
fn register(
    seen: &mut HashMap<String, String>,
    element: &dyn Element,
) -> Result<Option<String>, ComposeError> {
    let name = element.name();
    let body = element.render()?;

    if let Some(existing) = seen.get(&name) {
        if *existing != body {
            return DuplicateElementSnafu { name }.fail();
        }
        emit!(DuplicateElementSkipped { name: &name });
        return Ok(None);
    }

    for nested in element.fragments().into_iter().filter_map(Fragment::element) {
        register(seen, nested)?;
    }

    seen.insert(name, body.clone());
    Ok(Some(body))
}
